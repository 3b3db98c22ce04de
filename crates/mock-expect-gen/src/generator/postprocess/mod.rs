//! Validation and canonical layout of rendered Go source.
//!
//! `canonicalize` is the built-in post-process step. The scanner rejects text that
//! is not lexically well-formed Go, the tree-sitter Go grammar rejects text that
//! does not parse, and the result is laid out with canonical indentation and
//! blank lines. The optional `gofmt` pass runs after it in the command layer.

pub(crate) mod gofmt;
mod grammar;
mod scanner;

#[cfg(test)]
mod tests;

pub use scanner::SyntaxError;
use grammar::check_grammar;
use scanner::{SourceLine, scan};

/// Validates `source` and returns it laid out canonically.
///
/// Lexical problems are reported by the scanner with exact positions; anything
/// that lexes but does not parse as a Go source file is reported from the
/// first error node of the syntax tree.
///
/// Lines are re-indented with one tab per open delimiter, trailing whitespace is
/// dropped, blank-line runs collapse to one, and the text ends with a single
/// newline. Lines inside raw strings and block comments are kept verbatim.
pub fn canonicalize(source: &str) -> Result<String, SyntaxError> {
  let lines = scan(source)?;
  check_grammar(source)?;

  let mut out = String::with_capacity(source.len());
  let mut pending_blank = false;

  for line in &lines {
    if line.starts_in_literal {
      flush_blank(&mut out, &mut pending_blank);
      out.push_str(line.text);
      out.push('\n');
      continue;
    }

    let text = trim_line(line);
    if text.is_empty() {
      pending_blank = !out.is_empty();
      continue;
    }

    flush_blank(&mut out, &mut pending_blank);
    let depth = if text.starts_with([')', ']', '}']) {
      line.depth.saturating_sub(1)
    } else {
      line.depth
    };
    out.extend(std::iter::repeat_n('\t', depth));
    out.push_str(text);
    out.push('\n');
  }

  Ok(out)
}

fn trim_line<'a>(line: &SourceLine<'a>) -> &'a str {
  let text = line.text.trim_start();
  if line.ends_in_literal { text } else { text.trim_end() }
}

fn flush_blank(out: &mut String, pending_blank: &mut bool) {
  if *pending_blank {
    out.push('\n');
    *pending_blank = false;
  }
}
