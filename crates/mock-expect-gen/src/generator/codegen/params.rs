use std::fmt::{Display, Formatter};

use itertools::Itertools;

use super::mock_api::MOCK_API;
use crate::generator::ast::{BodyType, Presence, ResponseType};

pub(crate) const HEADERS_ARG: &str = "headers";
pub(crate) const QUERY_PARAMS_ARG: &str = "queryParams";
pub(crate) const BODY_ARG: &str = "body";
pub(crate) const STATUS_ARG: &str = "status";
pub(crate) const REPLY_ARG: &str = "reply";

/// Go types that appear in generated helper signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GoType {
  String,
  Int,
  EmptyInterface,
  StringMap,
  InterfaceMap,
  Bytes,
  Reader,
  MockResponse,
}

impl Display for GoType {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::String => f.write_str("string"),
      Self::Int => f.write_str("int"),
      Self::EmptyInterface => f.write_str("interface{}"),
      Self::StringMap => f.write_str("map[string]string"),
      Self::InterfaceMap => f.write_str("map[string]interface{}"),
      Self::Bytes => f.write_str("[]byte"),
      Self::Reader => f.write_str("io.Reader"),
      Self::MockResponse => write!(f, "{}.{}", MOCK_API.alias, MOCK_API.response_handler),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GoParam<'a> {
  pub name: &'a str,
  pub ty: GoType,
}

impl<'a> GoParam<'a> {
  pub(crate) fn new(name: &'a str, ty: GoType) -> Self {
    Self { name, ty }
  }
}

impl Display for GoParam<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} {}", self.name, self.ty)
  }
}

/// A fragment contributing formal arguments to a helper signature.
pub(crate) trait ParamFragment<'a> {
  fn params(&self) -> Vec<GoParam<'a>>;
}

/// Comma-separated formal argument list.
pub(crate) struct ParamList<'a>(pub Vec<GoParam<'a>>);

impl Display for ParamList<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0.iter().format(", "))
  }
}

macro_rules! display_as_param_list {
  ($($fragment:ident),+ $(,)?) => {
    $(
      impl Display for $fragment<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
          ParamList(self.params()).fmt(f)
        }
      }
    )+
  };
}

/// One `string` argument per path parameter, in substitution order.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PathParametersFragment<'a> {
  names: &'a [String],
}

impl<'a> PathParametersFragment<'a> {
  pub(crate) fn new(names: &'a [String]) -> Self {
    Self { names }
  }
}

impl<'a> ParamFragment<'a> for PathParametersFragment<'a> {
  fn params(&self) -> Vec<GoParam<'a>> {
    self
      .names
      .iter()
      .map(|name| GoParam::new(name, GoType::String))
      .collect()
  }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestHeadersFragment<'a> {
  headers: &'a Presence,
}

impl<'a> RequestHeadersFragment<'a> {
  pub(crate) fn new(headers: &'a Presence) -> Self {
    Self { headers }
  }
}

impl<'a> ParamFragment<'a> for RequestHeadersFragment<'a> {
  fn params(&self) -> Vec<GoParam<'a>> {
    if self.headers.is_present() {
      vec![GoParam::new(HEADERS_ARG, GoType::StringMap)]
    } else {
      vec![]
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct QueryParamsFragment<'a> {
  query_params: &'a Presence,
}

impl<'a> QueryParamsFragment<'a> {
  pub(crate) fn new(query_params: &'a Presence) -> Self {
    Self { query_params }
  }
}

impl<'a> ParamFragment<'a> for QueryParamsFragment<'a> {
  fn params(&self) -> Vec<GoParam<'a>> {
    if self.query_params.is_present() {
      vec![GoParam::new(QUERY_PARAMS_ARG, GoType::StringMap)]
    } else {
      vec![]
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct BodyFragment<'a> {
  body: &'a BodyType,
}

impl<'a> BodyFragment<'a> {
  pub(crate) fn new(body: &'a BodyType) -> Self {
    Self { body }
  }
}

impl<'a> ParamFragment<'a> for BodyFragment<'a> {
  fn params(&self) -> Vec<GoParam<'a>> {
    match self.body {
      BodyType::Json => vec![GoParam::new(BODY_ARG, GoType::InterfaceMap)],
      BodyType::String | BodyType::Stream => vec![GoParam::new(BODY_ARG, GoType::Bytes)],
      BodyType::None | BodyType::Other(_) => vec![],
    }
  }
}

/// Status code and reply value expected by the selected registration call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReplyFragment<'a> {
  response: &'a ResponseType,
}

impl<'a> ReplyFragment<'a> {
  pub(crate) fn new(response: &'a ResponseType) -> Self {
    Self { response }
  }
}

impl<'a> ParamFragment<'a> for ReplyFragment<'a> {
  fn params(&self) -> Vec<GoParam<'a>> {
    let status = self
      .response
      .takes_status()
      .then(|| GoParam::new(STATUS_ARG, GoType::Int));
    let reply = match self.response {
      ResponseType::Json => Some(GoType::EmptyInterface),
      ResponseType::String => Some(GoType::String),
      ResponseType::Stream => Some(GoType::Reader),
      ResponseType::Func => Some(GoType::MockResponse),
      ResponseType::None | ResponseType::Other(_) => None,
    }
    .map(|ty| GoParam::new(REPLY_ARG, ty));

    status.into_iter().chain(reply).collect()
  }
}

display_as_param_list!(
  PathParametersFragment,
  RequestHeadersFragment,
  QueryParamsFragment,
  BodyFragment,
  ReplyFragment,
);
