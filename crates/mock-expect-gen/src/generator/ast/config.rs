use super::endpoint::{Endpoint, ResponseType};

/// Invocation-wide inputs of one render.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct RenderConfig {
  /// Program arguments joined by single spaces, echoed into the provenance comment.
  #[builder(into, default)]
  pub invocation_args: String,
  #[builder(into)]
  pub package_name: String,
  #[builder(default)]
  pub build_tags: Vec<String>,
  #[builder(into)]
  pub receiver_type: String,
  #[builder(default)]
  pub endpoints: Vec<Endpoint>,
}

impl RenderConfig {
  pub(crate) fn uses_stream_reply(&self) -> bool {
    self
      .endpoints
      .iter()
      .any(|endpoint| endpoint.spec.response_type == ResponseType::Stream)
  }
}
