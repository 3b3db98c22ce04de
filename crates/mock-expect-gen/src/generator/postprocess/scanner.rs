use thiserror::Error;

/// Why rendered text is not acceptable Go source. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
  #[error("{line}:{column}: string literal not terminated")]
  UnterminatedString { line: usize, column: usize },
  #[error("{line}:{column}: raw string literal not terminated")]
  UnterminatedRawString { line: usize, column: usize },
  #[error("{line}:{column}: rune literal not terminated")]
  UnterminatedRune { line: usize, column: usize },
  #[error("{line}:{column}: comment not terminated")]
  UnterminatedComment { line: usize, column: usize },
  #[error("{line}:{column}: unexpected '{found}'")]
  UnexpectedCloser { found: char, line: usize, column: usize },
  #[error("{line}:{column}: '{found}' does not close '{open}' opened at {open_line}:{open_column}")]
  MismatchedDelimiter {
    open: char,
    open_line: usize,
    open_column: usize,
    found: char,
    line: usize,
    column: usize,
  },
  #[error("{line}:{column}: '{open}' is never closed")]
  UnclosedDelimiter { open: char, line: usize, column: usize },
  #[error("{line}:{column}: invalid character {found:?}")]
  UnexpectedCharacter { found: char, line: usize, column: usize },
  #[error("{line}:{column}: expected 'package' clause")]
  MissingPackageClause { line: usize, column: usize },
  #[error("{line}:{column}: syntax error at {text:?}")]
  Invalid { text: String, line: usize, column: usize },
  #[error("{line}:{column}: missing {expected}")]
  Missing { expected: String, line: usize, column: usize },
  #[error("Go parser unavailable: {0}")]
  Parser(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Carry {
  Code,
  BlockComment { line: usize, column: usize },
  RawString { line: usize, column: usize },
}

#[derive(Debug, Clone, Copy)]
struct OpenDelimiter {
  ch: char,
  line: usize,
  column: usize,
}

/// One physical line together with the lexical state around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceLine<'a> {
  pub text: &'a str,
  /// Open delimiters at the start of the line.
  pub depth: usize,
  /// The line starts inside a raw string or block comment.
  pub starts_in_literal: bool,
  /// The line ends inside a raw string or block comment.
  pub ends_in_literal: bool,
}

const OPERATOR_CHARS: &str = "+-*/%&|^<>=!:.,;~";

/// Splits `source` into lines while checking the lexical structure of Go.
pub(crate) fn scan(source: &str) -> Result<Vec<SourceLine<'_>>, SyntaxError> {
  let mut scanner = Scanner::default();
  let mut lines = Vec::new();

  for (index, text) in source.split('\n').enumerate() {
    let starts_in_literal = scanner.carry != Carry::Code;
    let depth = scanner.stack.len();
    scanner.scan_line(index + 1, text)?;
    lines.push(SourceLine {
      text,
      depth,
      starts_in_literal,
      ends_in_literal: scanner.carry != Carry::Code,
    });
  }

  scanner.finish()?;
  Ok(lines)
}

#[derive(Debug)]
struct Scanner {
  carry: Carry,
  stack: Vec<OpenDelimiter>,
  package_seen: bool,
}

impl Default for Scanner {
  fn default() -> Self {
    Self {
      carry: Carry::Code,
      stack: Vec::new(),
      package_seen: false,
    }
  }
}

impl Scanner {
  fn scan_line(&mut self, line: usize, text: &str) -> Result<(), SyntaxError> {
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    match self.carry {
      Carry::Code => {}
      Carry::BlockComment { .. } => match find_seq(&chars, 0, &['*', '/']) {
        Some(end) => {
          i = end + 2;
          self.carry = Carry::Code;
        }
        None => return Ok(()),
      },
      Carry::RawString { .. } => match find_seq(&chars, 0, &['`']) {
        Some(end) => {
          i = end + 1;
          self.carry = Carry::Code;
        }
        None => return Ok(()),
      },
    }

    while i < chars.len() {
      let c = chars[i];
      let column = i + 1;
      let next = chars.get(i + 1).copied();

      match c {
        ' ' | '\t' | '\r' | '\u{feff}' => i += 1,
        '/' if next == Some('/') => break,
        '/' if next == Some('*') => {
          if let Some(end) = find_seq(&chars, i + 2, &['*', '/']) {
            i = end + 2;
          } else {
            self.carry = Carry::BlockComment { line, column };
            break;
          }
        }
        '"' => {
          self.expect_package(None, line, column)?;
          i = scan_quoted(&chars, i, '"').ok_or(SyntaxError::UnterminatedString { line, column })?;
        }
        '\'' => {
          self.expect_package(None, line, column)?;
          i = scan_quoted(&chars, i, '\'').ok_or(SyntaxError::UnterminatedRune { line, column })?;
        }
        '`' => {
          self.expect_package(None, line, column)?;
          if let Some(end) = find_seq(&chars, i + 1, &['`']) {
            i = end + 1;
          } else {
            self.carry = Carry::RawString { line, column };
            break;
          }
        }
        '(' | '[' | '{' => {
          self.expect_package(None, line, column)?;
          self.stack.push(OpenDelimiter { ch: c, line, column });
          i += 1;
        }
        ')' | ']' | '}' => {
          self.expect_package(None, line, column)?;
          self.close(c, line, column)?;
          i += 1;
        }
        c if c.is_alphabetic() || c == '_' => {
          let end = take_while(&chars, i, |c| c.is_alphanumeric() || c == '_');
          let word: String = chars[i..end].iter().collect();
          self.expect_package(Some(&word), line, column)?;
          i = end;
        }
        c if c.is_ascii_digit() => {
          self.expect_package(None, line, column)?;
          i = take_while(&chars, i, |c| c.is_alphanumeric() || c == '_' || c == '.');
        }
        c if OPERATOR_CHARS.contains(c) => {
          self.expect_package(None, line, column)?;
          i += 1;
        }
        found => return Err(SyntaxError::UnexpectedCharacter { found, line, column }),
      }
    }

    Ok(())
  }

  fn expect_package(&mut self, word: Option<&str>, line: usize, column: usize) -> Result<(), SyntaxError> {
    if self.package_seen {
      return Ok(());
    }
    if word == Some("package") {
      self.package_seen = true;
      Ok(())
    } else {
      Err(SyntaxError::MissingPackageClause { line, column })
    }
  }

  fn close(&mut self, found: char, line: usize, column: usize) -> Result<(), SyntaxError> {
    let Some(open) = self.stack.pop() else {
      return Err(SyntaxError::UnexpectedCloser { found, line, column });
    };
    if closer_for(open.ch) == found {
      Ok(())
    } else {
      Err(SyntaxError::MismatchedDelimiter {
        open: open.ch,
        open_line: open.line,
        open_column: open.column,
        found,
        line,
        column,
      })
    }
  }

  fn finish(self) -> Result<(), SyntaxError> {
    match self.carry {
      Carry::BlockComment { line, column } => return Err(SyntaxError::UnterminatedComment { line, column }),
      Carry::RawString { line, column } => return Err(SyntaxError::UnterminatedRawString { line, column }),
      Carry::Code => {}
    }
    if let Some(open) = self.stack.last() {
      return Err(SyntaxError::UnclosedDelimiter {
        open: open.ch,
        line: open.line,
        column: open.column,
      });
    }
    if !self.package_seen {
      return Err(SyntaxError::MissingPackageClause { line: 1, column: 1 });
    }
    Ok(())
  }
}

fn closer_for(open: char) -> char {
  match open {
    '(' => ')',
    '[' => ']',
    _ => '}',
  }
}

fn find_seq(chars: &[char], from: usize, needle: &[char]) -> Option<usize> {
  if from >= chars.len() {
    return None;
  }
  chars[from..]
    .windows(needle.len())
    .position(|window| window == needle)
    .map(|offset| from + offset)
}

fn take_while(chars: &[char], from: usize, pred: impl Fn(char) -> bool) -> usize {
  chars[from..]
    .iter()
    .position(|&c| !pred(c))
    .map_or(chars.len(), |offset| from + offset)
}

/// Index just past the closing quote of the literal opening at `start`.
/// Literals never span lines, so running out of characters means unterminated.
fn scan_quoted(chars: &[char], start: usize, quote: char) -> Option<usize> {
  let mut j = start + 1;
  while j < chars.len() {
    match chars[j] {
      '\\' => j += 2,
      c if c == quote => return Some(j + 1),
      _ => j += 1,
    }
  }
  None
}
