use std::fmt::{Display, Formatter};

use super::mock_api::MOCK_API;

/// Program name recorded in the provenance comment. Tooling greps for it.
pub(crate) const GENERATOR_NAME: &str = "mock-expect-gen";

/// One `// +build` line per tag, followed by a blank separator line.
///
/// Tags are never merged onto a single line: separate lines and space-separated
/// options carry different constraint semantics.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BuildTagsFragment<'a> {
  tags: &'a [String],
}

impl<'a> BuildTagsFragment<'a> {
  pub(crate) fn new(tags: &'a [String]) -> Self {
    Self { tags }
  }
}

impl Display for BuildTagsFragment<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    if self.tags.is_empty() {
      return Ok(());
    }
    for tag in self.tags {
      writeln!(f, "// +build {tag}")?;
    }
    writeln!(f)
  }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderFragment<'a> {
  invocation: &'a str,
}

impl<'a> HeaderFragment<'a> {
  pub(crate) fn new(invocation: &'a str) -> Self {
    Self { invocation }
  }
}

impl Display for HeaderFragment<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "// Code generated by \"{GENERATOR_NAME} {}\"; DO NOT EDIT.",
      self.invocation
    )
  }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PackageFragment<'a> {
  name: &'a str,
}

impl<'a> PackageFragment<'a> {
  pub(crate) fn new(name: &'a str) -> Self {
    Self { name }
  }
}

impl Display for PackageFragment<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "package {}", self.name)
  }
}

/// The import block shared by every generated file.
///
/// `io` joins the standard-library group only when a streaming reply needs `io.Reader`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ImportsFragment {
  stream_reader: bool,
}

impl ImportsFragment {
  pub(crate) fn new(stream_reader: bool) -> Self {
    Self { stream_reader }
  }
}

impl Display for ImportsFragment {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "import (")?;
    writeln!(f, "\t\"fmt\"")?;
    if self.stream_reader {
      writeln!(f, "\t\"io\"")?;
    }
    writeln!(f)?;
    writeln!(f, "\t{} \"{}\"", MOCK_API.alias, MOCK_API.import_path)?;
    write!(f, ")")
  }
}
