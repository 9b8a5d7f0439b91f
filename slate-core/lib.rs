//! Text primitives shared by the slate engine: character classes and the
//! offset <-> line/column index.

pub mod chars;
pub mod line_index;
