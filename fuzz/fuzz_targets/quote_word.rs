#![no_main]

mod shell_words;

use libfuzzer_sys::fuzz_target;
use the_quote::{
  QuoteError,
  Style,
  quote,
  quote_bare,
  style,
};

use crate::shell_words::{
  lossy_text,
  split_words,
};

fuzz_target!(|data: &[u8]| {
  let text = lossy_text(data);

  let quoted = match quote(&text) {
    Ok(quoted) => quoted,
    Err(QuoteError::NonAscii(ch)) => {
      assert!(!ch.is_ascii());
      assert!(text.contains(ch));
      return;
    },
    Err(QuoteError::Control(ch)) => {
      assert!(ch.is_ascii_control());
      assert!(text.contains(ch));
      return;
    },
  };

  assert_eq!(split_words(&quoted), Some(vec![text.clone()]));
  assert_eq!(
    quoted.starts_with('"'),
    style(&text) == Ok(Style::Double)
  );

  let bare = quote_bare(&text).expect("quote succeeded");
  assert_eq!(split_words(&format!("\"{bare}\"")), Some(vec![text]));
});
