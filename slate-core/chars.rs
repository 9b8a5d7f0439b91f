//! Character classification used for word and line boundaries.

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CharCategory {
  Whitespace,
  Eol,
  Word,
  Punctuation,
  Unknown,
}

pub fn categorize_char(ch: char) -> CharCategory {
  match ch {
    c if char_is_line_ending(c) => CharCategory::Eol,
    c if char_is_whitespace(c) => CharCategory::Whitespace,
    c if char_is_word(c) => CharCategory::Word,
    c if char_is_punctuation(c) => CharCategory::Punctuation,
    _ => CharCategory::Unknown,
  }
}

/// `\n` is the only line delimiter inside a text box.
#[inline]
pub fn char_is_line_ending(ch: char) -> bool {
  ch == '\n'
}

/// Unicode `White_Space`, line endings included.
#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  ch.is_whitespace()
}

#[inline]
pub fn char_is_punctuation(ch: char) -> bool {
  use unicode_general_category::{
    GeneralCategory,
    get_general_category,
  };

  matches!(
    get_general_category(ch),
    GeneralCategory::OtherPunctuation
      | GeneralCategory::OpenPunctuation
      | GeneralCategory::ClosePunctuation
      | GeneralCategory::InitialPunctuation
      | GeneralCategory::FinalPunctuation
      | GeneralCategory::ConnectorPunctuation
      | GeneralCategory::DashPunctuation
      | GeneralCategory::MathSymbol
      | GeneralCategory::CurrencySymbol
      | GeneralCategory::ModifierSymbol
  )
}

#[inline]
pub fn char_is_word(ch: char) -> bool {
  ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_categorize() {
    assert_eq!(categorize_char('\n'), CharCategory::Eol);
    assert_eq!(categorize_char(' '), CharCategory::Whitespace);
    assert_eq!(categorize_char('\t'), CharCategory::Whitespace);
    assert_eq!(categorize_char('\u{3000}'), CharCategory::Whitespace);
    assert_eq!(categorize_char('a'), CharCategory::Word);
    assert_eq!(categorize_char('_'), CharCategory::Word);
    assert_eq!(categorize_char('9'), CharCategory::Word);
    assert_eq!(categorize_char('é'), CharCategory::Word);
    assert_eq!(categorize_char('.'), CharCategory::Punctuation);
    assert_eq!(categorize_char('('), CharCategory::Punctuation);
    assert_eq!(categorize_char('$'), CharCategory::Punctuation);
  }

  #[test]
  fn test_carriage_return_is_not_a_line_ending() {
    assert!(!char_is_line_ending('\r'));
    assert!(char_is_whitespace('\r'));
  }
}
