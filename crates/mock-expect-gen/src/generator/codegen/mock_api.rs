use strum::Display;

use crate::generator::ast::ResponseType;

/// Names exported by the Go mock layer the generated helpers are written against.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MockApi {
  pub import_path: &'static str,
  pub alias: &'static str,
  pub base_type: &'static str,
  pub testing_handle: &'static str,
  pub constructor: &'static str,
  pub request_constructor: &'static str,
  pub call_type: &'static str,
  pub response_handler: &'static str,
}

pub(crate) const MOCK_API: MockApi = MockApi {
  import_path: "github.com/mkeeler/mock-http-api",
  alias: "mockapi",
  base_type: "MockAPI",
  testing_handle: "TestingT",
  constructor: "NewMockAPI",
  request_constructor: "NewMockRequest",
  call_type: "MockAPICall",
  response_handler: "MockResponse",
};

/// Chainable request-builder calls, in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum RequestOption {
  #[strum(serialize = "WithBody")]
  Body,
  #[strum(serialize = "WithQueryParams")]
  QueryParams,
  #[strum(serialize = "WithHeaders")]
  Headers,
}

/// The five expectation registrations offered by the mock layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum Registration {
  #[strum(serialize = "WithJSONReply")]
  JsonReply,
  #[strum(serialize = "WithTextReply")]
  TextReply,
  #[strum(serialize = "WithStreamingReply")]
  StreamingReply,
  #[strum(serialize = "WithRequest")]
  HandlerReply,
  #[strum(serialize = "WithNoResponseBody")]
  NoBodyReply,
}

impl From<&ResponseType> for Registration {
  fn from(response: &ResponseType) -> Self {
    match response {
      ResponseType::Json => Self::JsonReply,
      ResponseType::String => Self::TextReply,
      ResponseType::Stream => Self::StreamingReply,
      ResponseType::Func => Self::HandlerReply,
      ResponseType::None | ResponseType::Other(_) => Self::NoBodyReply,
    }
  }
}
