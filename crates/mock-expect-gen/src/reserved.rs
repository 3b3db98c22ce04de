use std::{collections::HashSet, sync::LazyLock};

static GO_KEYWORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough", "for", "func", "go",
    "goto", "if", "import", "interface", "map", "package", "range", "return", "select", "struct", "switch", "type",
    "var",
  ]
  .into_iter()
  .collect()
});

/// Names already bound inside every generated helper body.
static GENERATED_NAMES: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  ["m", "req", "body", "headers", "queryParams", "status", "reply", "fmt", "io", "mockapi"]
    .into_iter()
    .collect()
});

/// Whether `name` is a Go identifier (letter or `_`, then letters, digits, `_`) and not a keyword.
pub(crate) fn is_go_identifier(name: &str) -> bool {
  let mut chars = name.chars();
  let Some(first) = chars.next() else {
    return false;
  };
  (first.is_alphabetic() || first == '_')
    && chars.all(|c| c.is_alphanumeric() || c == '_')
    && !GO_KEYWORDS.contains(name)
}

/// Whether a path parameter named `name` would shadow or duplicate something the helper body uses.
pub(crate) fn is_generated_name(name: &str) -> bool {
  GENERATED_NAMES.contains(name)
}
