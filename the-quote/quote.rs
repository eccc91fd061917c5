//! Quoting strings so a POSIX shell reads each one back as a single literal
//! word.
//!
//! # Styles
//!
//! | Style | Output | Used when |
//! |-------|--------|-----------|
//! | [`Style::Plain`] | `foo.txt` | every character is plain-safe |
//! | [`Style::Single`] | `'foo bar'` | no character is a single quote |
//! | [`Style::Double`] | `"it's \$HOME"` | otherwise |
//!
//! The cheapest style wins: plain adds nothing, single quotes add two bytes
//! and need no escaping, double quotes need a backslash before each of
//! `$`, `` ` ``, `\` and `"`.
//!
//! The empty string quotes to `''`, since a bare empty word disappears from
//! the command line.
//!
//! # Buffers
//!
//! Every operation has a `_with` variant appending into a caller supplied
//! `String`. Output already appended when an error is returned stays in the
//! buffer, so callers should drop the buffer on error.

use std::borrow::Cow;

use the_quote_core::chars::{
  CharFlags,
  char_flags,
  char_needs_escape,
};
use thiserror::Error;

/// The quoted form of the empty string.
const EMPTY: &str = "''";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteError {
  #[error("string contains non-ASCII character U+{:04X}", u32::from(*.0))]
  NonAscii(char),
  #[error("string contains control character U+{:04X}", u32::from(*.0))]
  Control(char),
}

impl QuoteError {
  /// The character that was rejected.
  pub const fn char(&self) -> char {
    match self {
      Self::NonAscii(ch) | Self::Control(ch) => *ch,
    }
  }
}

/// The way a string is written out as a shell word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(rename_all = "kebab-case")
)]
pub enum Style {
  /// Written as is.
  Plain,
  /// Wrapped in `'...'`, no escaping.
  Single,
  /// Wrapped in `"..."` with `$`, `` ` ``, `\` and `"` backslash escaped.
  Double,
}

impl Style {
  /// Picks the preferred style allowed by a style mask.
  ///
  /// Masks produced by [`classify`] always allow double quotes, so a mask
  /// allowing neither plain nor single quotes maps to [`Style::Double`].
  pub fn from_mask(mask: CharFlags) -> Self {
    if mask.contains(CharFlags::PLAIN) {
      Self::Plain
    } else if mask.contains(CharFlags::SINGLE) {
      Self::Single
    } else {
      Self::Double
    }
  }

  pub const fn flag(self) -> CharFlags {
    match self {
      Self::Plain => CharFlags::PLAIN,
      Self::Single => CharFlags::SINGLE,
      Self::Double => CharFlags::DOUBLE,
    }
  }
}

/// Computes the set of quoting styles valid for every character of `text`.
///
/// Characters are checked left to right and the first rejected one is
/// reported. The empty string allows every style; [`quote`] special cases it.
pub fn classify(text: &str) -> Result<CharFlags, QuoteError> {
  text.chars().try_fold(CharFlags::STYLES, |mask, ch| {
    if !ch.is_ascii() {
      return Err(QuoteError::NonAscii(ch));
    }
    let flags = char_flags(ch);
    if flags.is_empty() {
      return Err(QuoteError::Control(ch));
    }
    Ok(mask & flags.styles())
  })
}

/// Returns the style [`quote`] renders `text` in.
///
/// The empty string reports [`Style::Plain`] even though [`quote`] writes it
/// as `''`.
pub fn style(text: &str) -> Result<Style, QuoteError> {
  classify(text).map(Style::from_mask)
}

/// Quotes `text` as a single shell word.
pub fn quote(text: &str) -> Result<Cow<'_, str>, QuoteError> {
  if text.is_empty() {
    return Ok(Cow::Borrowed(EMPTY));
  }
  match style(text)? {
    Style::Plain => Ok(Cow::Borrowed(text)),
    style => {
      let mut buf = String::with_capacity(text.len() + 2);
      push_quoted(text, style, &mut buf);
      Ok(Cow::Owned(buf))
    },
  }
}

pub fn quote_with(text: &str, buf: &mut String) -> Result<(), QuoteError> {
  if text.is_empty() {
    buf.push_str(EMPTY);
    return Ok(());
  }
  push_quoted(text, style(text)?, buf);
  Ok(())
}

/// Escapes `text` for use between double quotes supplied by the caller.
///
/// The quotes themselves are not written, and the empty string stays empty.
pub fn quote_bare(text: &str) -> Result<Cow<'_, str>, QuoteError> {
  match style(text)? {
    Style::Plain => Ok(Cow::Borrowed(text)),
    _ => {
      let mut buf = String::with_capacity(text.len());
      push_escaped(text, &mut buf);
      Ok(Cow::Owned(buf))
    },
  }
}

pub fn quote_bare_with(text: &str, buf: &mut String) -> Result<(), QuoteError> {
  match style(text)? {
    Style::Plain => buf.push_str(text),
    _ => push_escaped(text, buf),
  }
  Ok(())
}

/// Quotes every argument and joins them with single spaces.
///
/// Stops at the first argument that can't be quoted and returns its error.
pub fn quote_command<I, S>(args: I) -> Result<String, QuoteError>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut buf = String::new();
  quote_command_with(args, &mut buf)?;
  Ok(buf)
}

pub fn quote_command_with<I, S>(args: I, buf: &mut String) -> Result<(), QuoteError>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  for (index, arg) in args.into_iter().enumerate() {
    if index > 0 {
      buf.push(' ');
    }
    quote_with(arg.as_ref(), buf).inspect_err(|err| {
      tracing::trace!(index, %err, "failed to quote command argument");
    })?;
  }
  Ok(())
}

fn push_quoted(text: &str, style: Style, buf: &mut String) {
  match style {
    Style::Plain => buf.push_str(text),
    Style::Single => {
      buf.push('\'');
      buf.push_str(text);
      buf.push('\'');
    },
    Style::Double => {
      buf.push('"');
      push_escaped(text, buf);
      buf.push('"');
    },
  }
}

fn push_escaped(text: &str, buf: &mut String) {
  for ch in text.chars() {
    if char_needs_escape(ch) {
      buf.push('\\');
    }
    buf.push(ch);
  }
}
