use crate::generator::ast::{BodyType, Endpoint, EndpointSpec, Presence, ResponseType};

/// Builder for endpoint shapes used across the codegen tests.
#[derive(Default)]
pub(super) struct TestEndpoint<'a> {
  pub method: Option<&'a str>,
  pub path: Option<&'a str>,
  pub path_parameters: &'a [&'a str],
  pub query_params: bool,
  pub headers: bool,
  pub body_type: Option<&'a str>,
  pub response_type: Option<&'a str>,
}

impl TestEndpoint<'_> {
  pub(super) fn spec(&self) -> EndpointSpec {
    EndpointSpec {
      method: self.method.unwrap_or("GET").to_string(),
      path: self.path.unwrap_or("/v1/agent/self").to_string(),
      path_parameters: self.path_parameters.iter().map(ToString::to_string).collect(),
      query_params: presence(self.query_params, "dc"),
      headers: presence(self.headers, "X-Consul-Token"),
      body_type: self.body_type.map_or(BodyType::None, BodyType::from),
      response_type: self.response_type.map_or(ResponseType::None, ResponseType::from),
    }
  }

  pub(super) fn named(&self, name: &str) -> Endpoint {
    Endpoint::new(name, self.spec())
  }
}

fn presence(present: bool, name: &str) -> Presence {
  if present {
    Presence::from_names([name])
  } else {
    Presence::Absent
  }
}
