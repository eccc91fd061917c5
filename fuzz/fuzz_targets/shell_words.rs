/// Splits a command line into words the way a POSIX shell would, without
/// performing any expansion.
///
/// Returns `None` when the line contains anything other than literal words
/// separated by single spaces: unquoted metacharacters, unescaped `$` or
/// backticks inside double quotes, or unterminated quotes.
pub fn split_words(line: &str) -> Option<Vec<String>> {
  let mut words = Vec::new();
  let mut word = String::new();
  let mut in_word = false;
  let mut chars = line.chars();
  while let Some(ch) = chars.next() {
    match ch {
      ' ' => {
        if !in_word {
          return None;
        }
        words.push(std::mem::take(&mut word));
        in_word = false;
        continue;
      },
      '\'' => {
        loop {
          match chars.next()? {
            '\'' => break,
            c => word.push(c),
          }
        }
      },
      '"' => {
        loop {
          match chars.next()? {
            '"' => break,
            '\\' => {
              let c = chars.next()?;
              if !matches!(c, '$' | '`' | '"' | '\\' | '\n') {
                word.push('\\');
              }
              word.push(c);
            },
            '$' | '`' => return None,
            c => word.push(c),
          }
        }
      },
      c if the_quote::chars::char_is_plain_safe(c) => word.push(c),
      _ => return None,
    }
    in_word = true;
  }
  if in_word {
    words.push(word);
  } else if !line.is_empty() {
    return None;
  }
  Some(words)
}

pub fn lossy_text(bytes: &[u8]) -> String {
  String::from_utf8_lossy(bytes).into_owned()
}
