use tree_sitter::{Node, Parser};

use super::scanner::SyntaxError;

const SNIPPET_LIMIT: usize = 40;

/// Parses `source` with the Go grammar and reports the first error or missing node.
pub(crate) fn check_grammar(source: &str) -> Result<(), SyntaxError> {
  let mut parser = Parser::new();
  parser
    .set_language(&tree_sitter_go::LANGUAGE.into())
    .map_err(|err| SyntaxError::Parser(err.to_string()))?;

  let tree = parser
    .parse(source, None)
    .ok_or_else(|| SyntaxError::Parser("parse was cancelled".to_string()))?;

  let root = tree.root_node();
  if !root.has_error() {
    return Ok(());
  }

  Err(first_error(root).map_or_else(
    || SyntaxError::Invalid {
      text: String::new(),
      line: 1,
      column: 1,
    },
    |node| describe(node, source),
  ))
}

/// First error or missing node in document order.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
  if node.is_error() || node.is_missing() {
    return Some(node);
  }

  let mut cursor = node.walk();
  let found = node
    .children(&mut cursor)
    .filter(|child| child.has_error() || child.is_missing())
    .find_map(first_error);
  found
}

fn describe(node: Node<'_>, source: &str) -> SyntaxError {
  let position = node.start_position();
  let line = position.row + 1;
  let column = position.column + 1;

  if node.is_missing() {
    return SyntaxError::Missing {
      expected: node.kind().to_string(),
      line,
      column,
    };
  }

  let text = node
    .utf8_text(source.as_bytes())
    .unwrap_or_default()
    .lines()
    .next()
    .unwrap_or_default()
    .chars()
    .take(SNIPPET_LIMIT)
    .collect();

  SyntaxError::Invalid { text, line, column }
}
