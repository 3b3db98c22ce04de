use std::fmt::{Display, Formatter};

use itertools::Itertools;

use super::{
  body::{EndpointBodyFragment, RECEIVER_VAR},
  mock_api::MOCK_API,
  mock_type::MockTypeFragment,
  params::{
    BodyFragment, GoParam, ParamFragment, ParamList, PathParametersFragment, QueryParamsFragment, ReplyFragment,
    RequestHeadersFragment,
  },
  preamble::{BuildTagsFragment, HeaderFragment, ImportsFragment, PackageFragment},
};
use crate::generator::ast::{Endpoint, EndpointSpec, RenderConfig};

/// Formal arguments of one helper, in fixed order: path parameters, request
/// headers, query parameters, body, reply.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SignatureFragment<'a> {
  spec: &'a EndpointSpec,
}

impl<'a> SignatureFragment<'a> {
  pub(crate) fn new(spec: &'a EndpointSpec) -> Self {
    Self { spec }
  }
}

impl<'a> ParamFragment<'a> for SignatureFragment<'a> {
  fn params(&self) -> Vec<GoParam<'a>> {
    let spec = self.spec;
    let mut params = PathParametersFragment::new(&spec.path_parameters).params();
    params.extend(RequestHeadersFragment::new(&spec.headers).params());
    params.extend(QueryParamsFragment::new(&spec.query_params).params());
    params.extend(BodyFragment::new(&spec.body_type).params());
    params.extend(ReplyFragment::new(&spec.response_type).params());
    params
  }
}

impl Display for SignatureFragment<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    ParamList(self.params()).fmt(f)
  }
}

/// One helper method on the receiver type.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EndpointMethodFragment<'a> {
  receiver: &'a str,
  endpoint: &'a Endpoint,
}

impl<'a> EndpointMethodFragment<'a> {
  pub(crate) fn new(receiver: &'a str, endpoint: &'a Endpoint) -> Self {
    Self { receiver, endpoint }
  }
}

impl Display for EndpointMethodFragment<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(
      f,
      "func ({RECEIVER_VAR} *{}) {}({}) *{}.{} {{",
      self.receiver,
      self.endpoint.name,
      SignatureFragment::new(&self.endpoint.spec),
      MOCK_API.alias,
      MOCK_API.call_type
    )?;
    writeln!(f, "{}", EndpointBodyFragment::new(&self.endpoint.spec))?;
    write!(f, "}}")
  }
}

/// The whole output file.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MockFileFragment<'a> {
  config: &'a RenderConfig,
}

impl<'a> MockFileFragment<'a> {
  pub(crate) fn new(config: &'a RenderConfig) -> Self {
    Self { config }
  }
}

impl Display for MockFileFragment<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let config = self.config;

    write!(f, "{}", BuildTagsFragment::new(&config.build_tags))?;
    writeln!(f, "{}", HeaderFragment::new(&config.invocation_args))?;
    writeln!(f)?;
    writeln!(f, "{}", PackageFragment::new(&config.package_name))?;
    writeln!(f)?;
    writeln!(f, "{}", ImportsFragment::new(config.uses_stream_reply()))?;
    writeln!(f)?;
    writeln!(f, "{}", MockTypeFragment::new(&config.receiver_type))?;

    let endpoints = config.endpoints.iter().sorted_by(|a, b| a.name.cmp(&b.name));
    for endpoint in endpoints {
      writeln!(f)?;
      writeln!(f, "{}", EndpointMethodFragment::new(&config.receiver_type, endpoint))?;
    }
    Ok(())
  }
}
