use thiserror::Error;

use super::postprocess::SyntaxError;

/// Fatal failures of a render. No output is produced when one occurs.
#[derive(Debug, Error)]
pub enum GenerateError {
  #[error(
    "endpoint '{endpoint}': path '{path}' consumes {slots} format argument(s) but declares {parameters} path parameter(s)"
  )]
  PathArity {
    endpoint: String,
    path: String,
    slots: usize,
    parameters: usize,
  },
  #[error("failed to render mock helpers")]
  Render(#[from] std::fmt::Error),
  #[error("generated source is not valid Go: {0}")]
  Syntax(#[from] SyntaxError),
}

/// Findings that do not stop generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationWarning {
  #[error("endpoint '{endpoint}': unrecognized bodyType '{value}', no request body will be attached")]
  UnrecognizedBodyType { endpoint: String, value: String },
  #[error("endpoint '{endpoint}': unrecognized responseType '{value}', registering a reply without body")]
  UnrecognizedResponseType { endpoint: String, value: String },
  #[error("endpoint '{endpoint}': '{name}' is not a valid Go identifier")]
  InvalidIdentifier { endpoint: String, name: String },
  #[error("endpoint '{endpoint}': path parameter '{name}' collides with a generated argument or package name")]
  ReservedParameterName { endpoint: String, name: String },
  #[error("endpoint '{endpoint}': path '{path}' contains {slots} format verb(s) but declares no path parameters")]
  LiteralPathWithVerbs { endpoint: String, path: String, slots: usize },
}
