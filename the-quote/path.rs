//! Making local paths unambiguous on a command line.
//!
//! A path handed to another program as an argument can be misread: a leading
//! `-` looks like a flag, a leading `~` may be expanded to a home directory,
//! and a `:` before the first `/` looks like a `host:path` remote location to
//! tools such as `scp` or `rsync`. Prefixing `./` removes all three readings
//! without changing which file is meant.

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(rename_all = "kebab-case")
)]
pub enum PathKind {
  /// The empty string.
  Empty,
  /// Starts with `-` or `~`.
  FlagLike,
  /// Has a `:` before its first `/`, like `host:file`.
  RemoteLike,
  /// Safe to pass as is.
  OrdinaryLocal,
}

impl PathKind {
  /// Whether a path of this kind gets a `./` prefix from [`local_path`].
  pub const fn needs_prefix(self) -> bool {
    matches!(self, Self::FlagLike | Self::RemoteLike)
  }
}

pub fn classify_path(path: &str) -> PathKind {
  if path.is_empty() {
    return PathKind::Empty;
  }
  if path.starts_with(['-', '~']) {
    return PathKind::FlagLike;
  }
  let leading = path.split_once('/').map_or(path, |(leading, _)| leading);
  if leading.contains(':') {
    PathKind::RemoteLike
  } else {
    PathKind::OrdinaryLocal
  }
}

/// Rewrites `path` so that it can only be read as a local path.
///
/// The empty string becomes `.`, flag-like and remote-like paths get a `./`
/// prefix, anything else is returned unchanged.
pub fn local_path(path: &str) -> Cow<'_, str> {
  match classify_path(path) {
    PathKind::Empty => Cow::Borrowed("."),
    kind if kind.needs_prefix() => Cow::Owned(format!("./{path}")),
    _ => Cow::Borrowed(path),
  }
}
