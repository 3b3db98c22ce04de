use std::fmt::{Display, Formatter};

use super::mock_api::MOCK_API;

/// Wrapper type embedding the mock layer, plus its `New<T>` constructor.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MockTypeFragment<'a> {
  receiver: &'a str,
}

impl<'a> MockTypeFragment<'a> {
  pub(crate) fn new(receiver: &'a str) -> Self {
    Self { receiver }
  }
}

impl Display for MockTypeFragment<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let receiver = self.receiver;
    let api = MOCK_API;

    writeln!(f, "type {receiver} struct {{")?;
    writeln!(f, "\t*{}.{}", api.alias, api.base_type)?;
    writeln!(f, "}}")?;
    writeln!(f)?;
    writeln!(
      f,
      "func New{receiver}(t {}.{}) *{receiver} {{",
      api.alias, api.testing_handle
    )?;
    writeln!(f, "\treturn &{receiver}{{")?;
    writeln!(f, "\t\t{}: {}.{}(t),", api.base_type, api.alias, api.constructor)?;
    writeln!(f, "\t}}")?;
    write!(f, "}}")
  }
}
