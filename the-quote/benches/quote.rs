//! Benchmarks for quoting operations in the-quote.
//!
//! Run with: `cargo bench -p the-quote --bench quote`

use divan::{
  Bencher,
  black_box,
};
use the_quote::{
  local_path,
  quote,
  quote_bare,
  quote_command,
  quote_command_with,
};

fn main() {
  divan::main();
}

fn make_ascii_text(size: usize, word: &str) -> String {
  let mut s = String::with_capacity(size + word.len());
  while s.len() < size {
    s.push_str(word);
  }
  s
}

// `quote` benchmarks, one per output style.

mod single_word {
  use super::*;

  #[divan::bench]
  fn plain(bencher: Bencher) {
    bencher.bench(|| black_box(quote(black_box("target/release/the-quote")).unwrap()));
  }

  #[divan::bench]
  fn single(bencher: Bencher) {
    bencher.bench(|| black_box(quote(black_box("a file with spaces")).unwrap()));
  }

  #[divan::bench]
  fn double(bencher: Bencher) {
    bencher.bench(|| black_box(quote(black_box("it's \"$HOME\"")).unwrap()));
  }

  #[divan::bench]
  fn bare(bencher: Bencher) {
    bencher.bench(|| black_box(quote_bare(black_box("it's \"$HOME\"")).unwrap()));
  }
}

mod long_text {
  use super::*;

  #[divan::bench(args = [64, 1024, 16 * 1024])]
  fn plain(bencher: Bencher, size: usize) {
    let text = make_ascii_text(size, "path/to/file.rs:");
    bencher.bench(|| black_box(quote(black_box(&text)).unwrap()));
  }

  #[divan::bench(args = [64, 1024, 16 * 1024])]
  fn double(bencher: Bencher, size: usize) {
    let text = make_ascii_text(size, "don't `echo` $x ");
    bencher.bench(|| black_box(quote(black_box(&text)).unwrap()));
  }
}

mod command {
  use super::*;

  const ARGS: &[&str] = &[
    "rsync",
    "-av",
    "--exclude",
    "*.o",
    "my project/",
    "host:backups/it's here",
  ];

  #[divan::bench]
  fn join(bencher: Bencher) {
    bencher.bench(|| black_box(quote_command(black_box(ARGS)).unwrap()));
  }

  #[divan::bench]
  fn join_into_buffer(bencher: Bencher) {
    let mut buf = String::with_capacity(128);
    bencher.bench_local(|| {
      buf.clear();
      quote_command_with(black_box(ARGS), &mut buf).unwrap();
    });
  }
}

mod path {
  use super::*;

  #[divan::bench]
  fn ordinary(bencher: Bencher) {
    bencher.bench(|| black_box(local_path(black_box("src/quote.rs"))));
  }

  #[divan::bench]
  fn remote_like(bencher: Bencher) {
    bencher.bench(|| black_box(local_path(black_box("host:dir/file"))));
  }
}
