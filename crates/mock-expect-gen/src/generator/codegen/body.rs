use std::fmt::{Display, Formatter};

use itertools::Itertools;

use super::{
  literals::GoStr,
  mock_api::{MOCK_API, Registration, RequestOption},
  params::{BODY_ARG, HEADERS_ARG, QUERY_PARAMS_ARG, REPLY_ARG, STATUS_ARG},
};
use crate::generator::ast::EndpointSpec;

pub(crate) const RECEIVER_VAR: &str = "m";
const REQUEST_VAR: &str = "req";

/// The request path: the literal when there is nothing to substitute, otherwise a
/// `fmt.Sprintf` call filling the slots in declared parameter order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestPathFragment<'a> {
  path: &'a str,
  parameters: &'a [String],
}

impl<'a> RequestPathFragment<'a> {
  pub(crate) fn new(path: &'a str, parameters: &'a [String]) -> Self {
    Self { path, parameters }
  }
}

impl Display for RequestPathFragment<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    if self.parameters.is_empty() {
      return write!(f, "{}", GoStr(self.path));
    }
    write!(
      f,
      "fmt.Sprintf({}, {})",
      GoStr(self.path),
      self.parameters.iter().format(", ")
    )
  }
}

/// Body of one helper: build the request, chain its options, register the reply.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EndpointBodyFragment<'a> {
  spec: &'a EndpointSpec,
}

impl<'a> EndpointBodyFragment<'a> {
  pub(crate) fn new(spec: &'a EndpointSpec) -> Self {
    Self { spec }
  }

  /// Options in application order: body, then query parameters, then headers.
  pub(crate) fn request_options(&self) -> Vec<(RequestOption, &'static str)> {
    let mut options = Vec::with_capacity(3);
    if self.spec.body_type.is_attached() {
      options.push((RequestOption::Body, BODY_ARG));
    }
    if self.spec.query_params.is_present() {
      options.push((RequestOption::QueryParams, QUERY_PARAMS_ARG));
    }
    if self.spec.headers.is_present() {
      options.push((RequestOption::Headers, HEADERS_ARG));
    }
    options
  }

  pub(crate) fn registration(&self) -> Registration {
    Registration::from(&self.spec.response_type)
  }

  fn registration_args(&self) -> Vec<&'static str> {
    match self.registration() {
      Registration::JsonReply | Registration::TextReply | Registration::StreamingReply => {
        vec![REQUEST_VAR, STATUS_ARG, REPLY_ARG]
      }
      Registration::HandlerReply => vec![REQUEST_VAR, REPLY_ARG],
      Registration::NoBodyReply => vec![REQUEST_VAR, STATUS_ARG],
    }
  }
}

impl Display for EndpointBodyFragment<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "\t{REQUEST_VAR} := {}.{}({}, {})",
      MOCK_API.alias,
      MOCK_API.request_constructor,
      GoStr(&self.spec.method),
      RequestPathFragment::new(&self.spec.path, &self.spec.path_parameters)
    )?;
    for (option, arg) in self.request_options() {
      write!(f, ".{option}({arg})")?;
    }
    writeln!(f)?;
    write!(
      f,
      "\treturn {RECEIVER_VAR}.{}({})",
      self.registration(),
      self.registration_args().iter().format(", ")
    )
  }
}
