//! Character classification for POSIX shell quoting.
//!
//! See [`chars`] for the lookup table consumed by `the-quote`.

pub mod chars;
