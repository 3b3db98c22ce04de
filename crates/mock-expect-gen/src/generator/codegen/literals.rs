use std::fmt::{Display, Formatter, Write};

/// A Go interpreted string literal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GoStr<'a>(pub &'a str);

impl Display for GoStr<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_char('"')?;
    for c in self.0.chars() {
      match c {
        '"' => f.write_str("\\\"")?,
        '\\' => f.write_str("\\\\")?,
        '\n' => f.write_str("\\n")?,
        '\r' => f.write_str("\\r")?,
        '\t' => f.write_str("\\t")?,
        c if u32::from(c) < 0x20 || c == '\u{7f}' => write!(f, "\\x{:02x}", u32::from(c))?,
        c => f.write_char(c)?,
      }
    }
    f.write_char('"')
  }
}
