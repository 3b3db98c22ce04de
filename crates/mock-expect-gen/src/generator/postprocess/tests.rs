use super::{SyntaxError, canonicalize};

#[test]
fn test_reindents_with_tabs() {
  let input = "package mocks\n\nfunc f() {\n   return &T{\n  A: 1,\n      }\n}\n";
  let expected = "package mocks\n\nfunc f() {\n\treturn &T{\n\t\tA: 1,\n\t}\n}\n";
  assert_eq!(canonicalize(input).unwrap(), expected);
}

#[test]
fn test_collapses_blank_lines_and_trims() {
  let input = "\n\n// header\n\n\n\npackage mocks   \n\n\n";
  assert_eq!(canonicalize(input).unwrap(), "// header\n\npackage mocks\n");
}

#[test]
fn test_canonical_output_is_stable() {
  let input = "// +build a\n// +build b\n\npackage mocks\n\nimport (\n\t\"fmt\"\n)\n";
  let once = canonicalize(input).unwrap();
  assert_eq!(once, input);
  assert_eq!(canonicalize(&once).unwrap(), once);
}

#[test]
fn test_raw_string_lines_are_verbatim() {
  let input = "package mocks\n\nvar s = `first\n   second  \n\nthird`\n";
  assert_eq!(canonicalize(input).unwrap(), input);
}

#[test]
fn test_delimiters_in_literals_and_comments_are_ignored() {
  let input = "package mocks\n\n// a } in a comment\nvar s = \"{[(\" /* ) */\nvar r = '}'\n";
  assert!(canonicalize(input).is_ok());
}

#[test]
fn test_rejects_malformed_source() {
  struct Case {
    input: &'static str,
    expected: SyntaxError,
  }

  let cases = [
    Case {
      input: "package mocks\n\nfunc f() {\n",
      expected: SyntaxError::UnclosedDelimiter {
        open: '{',
        line: 3,
        column: 10,
      },
    },
    Case {
      input: "package mocks\n}\n",
      expected: SyntaxError::UnexpectedCloser {
        found: '}',
        line: 2,
        column: 1,
      },
    },
    Case {
      input: "package mocks\nvar x = f(]\n",
      expected: SyntaxError::MismatchedDelimiter {
        open: '(',
        open_line: 2,
        open_column: 10,
        found: ']',
        line: 2,
        column: 11,
      },
    },
    Case {
      input: "package mocks\nvar s = \"open\n",
      expected: SyntaxError::UnterminatedString { line: 2, column: 9 },
    },
    Case {
      input: "package mocks\nvar s = `open\n",
      expected: SyntaxError::UnterminatedRawString { line: 2, column: 9 },
    },
    Case {
      input: "package mocks\nvar r = 'x\n",
      expected: SyntaxError::UnterminatedRune { line: 2, column: 9 },
    },
    Case {
      input: "package mocks\n/* never closed\n",
      expected: SyntaxError::UnterminatedComment { line: 2, column: 1 },
    },
    Case {
      input: "package mocks\nvar x = #\n",
      expected: SyntaxError::UnexpectedCharacter {
        found: '#',
        line: 2,
        column: 9,
      },
    },
    Case {
      input: "// only a comment\nfunc f() {}\n",
      expected: SyntaxError::MissingPackageClause { line: 2, column: 1 },
    },
    Case {
      input: "",
      expected: SyntaxError::MissingPackageClause { line: 1, column: 1 },
    },
  ];

  for case in cases {
    assert_eq!(canonicalize(case.input), Err(case.expected), "input: {:?}", case.input);
  }
}

#[test]
fn test_escaped_quote_does_not_end_string() {
  let input = "package mocks\nvar s = \"a\\\"b\"\n";
  assert_eq!(canonicalize(input).unwrap(), input);
}

fn grammar_error_line(input: &str) -> Option<usize> {
  match canonicalize(input) {
    Err(SyntaxError::Invalid { line, .. } | SyntaxError::Missing { line, .. }) => Some(line),
    _ => None,
  }
}

#[test]
fn test_rejects_source_that_lexes_but_does_not_parse() {
  let cases = [
    ("package mocks\n\nfunc (m *T) Read KV() {\n}\n", 3),
    ("package mocks\n\nfunc (m *T) Read-KV() {\n}\n", 3),
    ("package mocks\n\nfunc (m *T) func() {\n}\n", 3),
    ("package mocks\n\nfunc f(2nd string) {\n}\n", 3),
    ("package mocks\n\nvar = 1\n", 3),
  ];

  for (input, line) in cases {
    assert_eq!(grammar_error_line(input), Some(line), "input: {input:?}");
  }
}

#[test]
fn test_accepts_generated_shapes() {
  let input = "package mocks\n\nimport (\n\t\"fmt\"\n\n\tmockapi \"github.com/mkeeler/mock-http-api\"\n)\n\nfunc (m *T) A(key string, body map[string]interface{}, status int) *mockapi.MockAPICall {\n\treq := mockapi.NewMockRequest(\"GET\", fmt.Sprintf(\"/v1/%s\", key)).WithBody(body)\n\treturn m.WithNoResponseBody(req, status)\n}\n";
  assert_eq!(canonicalize(input).unwrap(), input);
}
