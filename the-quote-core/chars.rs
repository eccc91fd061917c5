//! Per-character safety flags for the POSIX shell quoting styles.
//!
//! Every ASCII byte maps to the set of styles under which it can appear
//! literally in a shell word:
//!
//! | Characters | Flags |
//! |------------|-------|
//! | `A-Z a-z 0-9 % + , - . / : = @ _` | plain, single, double |
//! | `$ " \` and backtick | single, double, escape |
//! | `'` | double |
//! | other printable ASCII, space included | single, double |
//! | controls, DEL, non-ASCII | none |

use bitflags::bitflags;

bitflags! {
  /// Quoting styles a character is safe under.
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
  pub struct CharFlags: u8 {
    /// Safe with no quoting at all.
    const PLAIN  = 1 << 0;
    /// Safe between single quotes.
    const SINGLE = 1 << 1;
    /// Safe between double quotes.
    const DOUBLE = 1 << 2;
    /// Needs a preceding backslash between double quotes.
    const ESCAPE = 1 << 3;
  }
}

impl CharFlags {
  /// Every quoting style. This is the starting point of a style mask.
  pub const STYLES: Self = Self::PLAIN.union(Self::SINGLE).union(Self::DOUBLE);
  /// Safe inside either kind of quotes but not bare.
  pub const QUOTED: Self = Self::SINGLE.union(Self::DOUBLE);

  /// Restricts the flags to the quoting styles, dropping [`CharFlags::ESCAPE`].
  #[inline]
  pub const fn styles(self) -> Self {
    self.intersection(Self::STYLES)
  }
}

/// Flags for every ASCII byte, indexed by byte value.
pub static CHAR_FLAGS: [CharFlags; 128] = build_table();

const fn build_table() -> [CharFlags; 128] {
  let mut table = [CharFlags::empty(); 128];
  let mut byte = b' ';
  while byte <= b'~' {
    table[byte as usize] = match byte {
      b'A'..=b'Z'
      | b'a'..=b'z'
      | b'0'..=b'9'
      | b'%'
      | b'+'
      | b','
      | b'-'
      | b'.'
      | b'/'
      | b':'
      | b'='
      | b'@'
      | b'_' => CharFlags::STYLES,
      // A single quote can never appear inside single quotes.
      b'\'' => CharFlags::DOUBLE,
      b'$' | b'"' | b'\\' | b'`' => CharFlags::QUOTED.union(CharFlags::ESCAPE),
      _ => CharFlags::QUOTED,
    };
    byte += 1;
  }
  table
}

/// Returns the quoting flags of `ch`.
///
/// Characters outside the table (anything at or above U+0080) have no flags.
#[inline]
pub fn char_flags(ch: char) -> CharFlags {
  CHAR_FLAGS
    .get(ch as usize)
    .copied()
    .unwrap_or(CharFlags::empty())
}

#[inline]
pub fn char_is_plain_safe(ch: char) -> bool {
  char_flags(ch).contains(CharFlags::PLAIN)
}

/// Whether `ch` must be preceded by a backslash between double quotes.
#[inline]
pub fn char_needs_escape(ch: char) -> bool {
  char_flags(ch).contains(CharFlags::ESCAPE)
}

#[cfg(test)]
mod test {
  use super::*;

  #[track_caller]
  fn assert_flags(chars: &str, expected: CharFlags) {
    for ch in chars.chars() {
      assert_eq!(char_flags(ch), expected, "flags of {ch:?}");
    }
  }

  #[test]
  fn plain_safe_characters() {
    assert_flags("ABCXYZabcxyz0123456789", CharFlags::STYLES);
    assert_flags("%+,-./:=@_", CharFlags::STYLES);
  }

  #[test]
  fn quoted_only_characters() {
    assert_flags(" !#&()*;<>?[]^{|}~", CharFlags::QUOTED);
  }

  #[test]
  fn escaped_characters() {
    assert_flags("$\"\\`", CharFlags::QUOTED | CharFlags::ESCAPE);
    for ch in "$\"\\`".chars() {
      assert!(char_needs_escape(ch));
      assert!(!char_is_plain_safe(ch));
    }
    assert!(!char_needs_escape('\''));
    assert!(!char_needs_escape(' '));
  }

  #[test]
  fn single_quote_is_double_quote_only() {
    assert_flags("'", CharFlags::DOUBLE);
  }

  #[test]
  fn controls_and_non_ascii_have_no_flags() {
    for byte in (0u8..0x20).chain([0x7f]) {
      assert!(char_flags(byte as char).is_empty(), "byte {byte:#04x}");
    }
    assert_flags("\u{80}\u{a0}é漢😀", CharFlags::empty());
  }

  #[test]
  fn every_printable_character_is_double_quote_safe() {
    for byte in b' '..=b'~' {
      assert!(CHAR_FLAGS[byte as usize].contains(CharFlags::DOUBLE));
    }
  }

  #[test]
  fn styles_drops_escape() {
    let flags = char_flags('$');
    assert_eq!(flags.styles(), CharFlags::QUOTED);
    assert_eq!(CharFlags::all().styles(), CharFlags::STYLES);
  }
}
