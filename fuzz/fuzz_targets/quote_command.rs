#![no_main]

mod shell_words;

use libfuzzer_sys::fuzz_target;
use the_quote::{
  local_path,
  quote_command,
};

use crate::shell_words::{
  lossy_text,
  split_words,
};

const MAX_ARGS: usize = 32;

fuzz_target!(|data: &[u8]| {
  // A zero byte is a control character, so it can't occur inside an argument
  // that quotes successfully and makes a convenient separator.
  let args: Vec<String> = data
    .split(|byte| *byte == 0)
    .take(MAX_ARGS)
    .map(lossy_text)
    .collect();

  let Ok(line) = quote_command(&args) else {
    return;
  };
  assert_eq!(split_words(&line).as_ref(), Some(&args));

  for arg in &args {
    let path = local_path(arg);
    assert!(!path.is_empty());
    assert!(!path.starts_with(['-', '~']));
    assert!(path.ends_with(arg.as_str()));
  }
});
