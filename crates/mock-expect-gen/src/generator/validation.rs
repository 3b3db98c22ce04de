use std::sync::LazyLock;

use regex::Regex;

use super::{
  ast::{BodyType, Endpoint, ResponseType},
  errors::{GenerateError, GenerationWarning},
};
use crate::reserved::{is_generated_name, is_go_identifier};

/// One `fmt` directive: flags, optional `[n]` index, width, optional precision with its own index, optional
/// index before the verb, then the verb itself (`%` for a literal percent).
static FORMAT_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?s)%[-+# 0]*(?:\[(\d+)\])?(\*|\d+)?(?:\.(?:\[(\d+)\])?(\*|\d+)?)?(?:\[(\d+)\])?(.)")
    .expect("bad regex")
});

/// Arguments a format string consumes under `fmt.Sprintf` rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FormatArgs {
  /// Highest argument position reached.
  pub required: usize,
  /// An explicit `[n]` index was used.
  pub reordered: bool,
}

impl FormatArgs {
  pub(crate) fn of(path: &str) -> Self {
    let mut args = Self::default();
    let mut next = 0;

    for directive in FORMAT_DIRECTIVE.captures_iter(path) {
      if let Some(index) = args.explicit_index(directive.get(1)) {
        next = index;
      }
      if directive.get(2).is_some_and(|width| width.as_str() == "*") {
        next += 1;
      }
      if let Some(index) = args.explicit_index(directive.get(3)) {
        next = index;
      }
      if directive.get(4).is_some_and(|precision| precision.as_str() == "*") {
        next += 1;
      }
      if let Some(index) = args.explicit_index(directive.get(5)) {
        next = index;
      }
      if directive.get(6).is_some_and(|verb| verb.as_str() != "%") {
        next += 1;
      }
      args.required = args.required.max(next);
    }

    args
  }

  /// `[n]` is 1-based; the next argument read is the n-th.
  fn explicit_index(&mut self, index: Option<regex::Match<'_>>) -> Option<usize> {
    let index = index?.as_str().parse::<usize>().ok().filter(|&n| n > 0)?;
    self.reordered = true;
    Some(index - 1)
  }

  /// Without explicit indexes every parameter must be consumed; with them, unused trailing
  /// parameters are tolerated as `fmt` does.
  pub(crate) fn accepts(&self, parameters: usize) -> bool {
    if self.reordered {
      self.required <= parameters
    } else {
      self.required == parameters
    }
  }
}

/// Paths with parameters must consume exactly the declared parameters.
pub(crate) fn check_path_arity(endpoint: &Endpoint) -> Result<(), GenerateError> {
  let parameters = endpoint.spec.path_parameters.len();
  if parameters == 0 {
    return Ok(());
  }

  let args = FormatArgs::of(&endpoint.spec.path);
  if args.accepts(parameters) {
    Ok(())
  } else {
    Err(GenerateError::PathArity {
      endpoint: endpoint.name.clone(),
      path: endpoint.spec.path.clone(),
      slots: args.required,
      parameters,
    })
  }
}

pub(crate) fn collect_warnings(endpoint: &Endpoint) -> Vec<GenerationWarning> {
  let mut warnings = Vec::new();
  let name = &endpoint.name;
  let spec = &endpoint.spec;

  if !is_go_identifier(name) {
    warnings.push(GenerationWarning::InvalidIdentifier {
      endpoint: name.clone(),
      name: name.clone(),
    });
  }

  for param in &spec.path_parameters {
    if !is_go_identifier(param) {
      warnings.push(GenerationWarning::InvalidIdentifier {
        endpoint: name.clone(),
        name: param.clone(),
      });
    } else if is_generated_name(param) {
      warnings.push(GenerationWarning::ReservedParameterName {
        endpoint: name.clone(),
        name: param.clone(),
      });
    }
  }

  if spec.path_parameters.is_empty() {
    let slots = FormatArgs::of(&spec.path).required;
    if slots > 0 {
      warnings.push(GenerationWarning::LiteralPathWithVerbs {
        endpoint: name.clone(),
        path: spec.path.clone(),
        slots,
      });
    }
  }

  if let BodyType::Other(value) = &spec.body_type {
    warnings.push(GenerationWarning::UnrecognizedBodyType {
      endpoint: name.clone(),
      value: value.clone(),
    });
  }

  if let ResponseType::Other(value) = &spec.response_type {
    warnings.push(GenerationWarning::UnrecognizedResponseType {
      endpoint: name.clone(),
      value: value.clone(),
    });
  }

  warnings
}
