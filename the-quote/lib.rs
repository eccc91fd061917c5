//! Quoting strings as literal POSIX shell arguments.
//!
//! [`quote`] picks the cheapest style that keeps a string a single shell word:
//! bare when every character allows it, then single quotes, then double
//! quotes with backslash escapes. [`local_path`] guards paths that a program
//! could mistake for a flag or a `host:path` remote location.
//!
//! ```
//! use the_quote::{
//!   local_path,
//!   quote,
//!   quote_command,
//! };
//!
//! assert_eq!(quote("file.txt").unwrap(), "file.txt");
//! assert_eq!(quote("two words").unwrap(), "'two words'");
//! assert_eq!(quote("it's").unwrap(), r#""it's""#);
//! assert_eq!(quote_command(["ls", "-l", "my dir"]).unwrap(), "ls -l 'my dir'");
//! assert_eq!(local_path("-rf"), "./-rf");
//! ```

pub mod path;
pub mod quote;

pub use path::{
  PathKind,
  classify_path,
  local_path,
};
pub use quote::{
  QuoteError,
  Style,
  classify,
  quote,
  quote_bare,
  quote_bare_with,
  quote_command,
  quote_command_with,
  quote_with,
  style,
};
pub use the_quote_core::chars;
