//! Benchmarks for the line index in slate-core.
//!
//! Run with: `cargo bench -p slate-core --bench line_index`

use divan::{
  Bencher,
  black_box,
};
use ropey::Rope;
use slate_core::line_index::{
  line_and_column,
  line_len,
  offset_from_line_column,
};

fn main() {
  divan::main();
}

fn make_text(lines: usize) -> Rope {
  let line = "The quick brown fox jumps over the lazy dog.\n";
  Rope::from(line.repeat(lines))
}

#[divan::bench(args = [10, 1_000, 100_000])]
fn to_line_column(bencher: Bencher, lines: usize) {
  let text = make_text(lines);
  let offset = text.len_chars() / 2;
  bencher.bench(|| line_and_column(black_box(text.slice(..)), black_box(offset)));
}

#[divan::bench(args = [10, 1_000, 100_000])]
fn to_offset(bencher: Bencher, lines: usize) {
  let text = make_text(lines);
  let line = lines / 2;
  bencher.bench(|| {
    let slice = black_box(text.slice(..));
    let column = line_len(slice, line).min(black_box(20));
    offset_from_line_column(slice, line, column)
  });
}
