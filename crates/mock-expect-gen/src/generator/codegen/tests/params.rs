use super::support::TestEndpoint;
use crate::generator::{
  ast::{BodyType, Presence, ResponseType},
  codegen::{
    SignatureFragment,
    params::{BodyFragment, PathParametersFragment, QueryParamsFragment, ReplyFragment, RequestHeadersFragment},
  },
};

#[test]
fn test_path_parameters_in_declared_order() {
  let names = vec!["datacenter".to_string(), "key".to_string()];
  assert_eq!(
    PathParametersFragment::new(&names).to_string(),
    "datacenter string, key string"
  );
  assert_eq!(PathParametersFragment::new(&[]).to_string(), "");
}

#[test]
fn test_presence_driven_map_arguments() {
  let present = Presence::from_names(["dc"]);
  let flagged = Presence::Declared(vec![]);

  assert_eq!(
    QueryParamsFragment::new(&present).to_string(),
    "queryParams map[string]string"
  );
  assert_eq!(QueryParamsFragment::new(&flagged).to_string(), "queryParams map[string]string");
  assert_eq!(QueryParamsFragment::new(&Presence::Absent).to_string(), "");

  assert_eq!(RequestHeadersFragment::new(&present).to_string(), "headers map[string]string");
  assert_eq!(RequestHeadersFragment::new(&Presence::Absent).to_string(), "");
}

#[test]
fn test_body_argument_by_encoding() {
  let cases = [
    (BodyType::Json, "body map[string]interface{}"),
    (BodyType::String, "body []byte"),
    (BodyType::Stream, "body []byte"),
    (BodyType::None, ""),
    (BodyType::Other("xml".to_string()), ""),
  ];

  for (body, expected) in cases {
    assert_eq!(BodyFragment::new(&body).to_string(), expected, "body type: {body}");
  }
}

#[test]
fn test_reply_arguments_by_encoding() {
  let cases = [
    (ResponseType::Json, "status int, reply interface{}"),
    (ResponseType::String, "status int, reply string"),
    (ResponseType::Stream, "status int, reply io.Reader"),
    (ResponseType::Func, "reply mockapi.MockResponse"),
    (ResponseType::None, "status int"),
    (ResponseType::Other(String::new()), "status int"),
    (ResponseType::Other("xml".to_string()), "status int"),
  ];

  for (response, expected) in cases {
    assert_eq!(
      ReplyFragment::new(&response).to_string(),
      expected,
      "response type: {response}"
    );
  }
}

#[test]
fn test_signature_with_no_optional_arguments_has_only_reply() {
  let spec = TestEndpoint {
    response_type: Some("json"),
    ..Default::default()
  }
  .spec();

  assert_eq!(SignatureFragment::new(&spec).to_string(), "status int, reply interface{}");
}

#[test]
fn test_signature_argument_order() {
  let spec = TestEndpoint {
    path_parameters: &["key"],
    query_params: true,
    headers: true,
    body_type: Some("json"),
    response_type: Some("func"),
    ..Default::default()
  }
  .spec();

  assert_eq!(
    SignatureFragment::new(&spec).to_string(),
    "key string, headers map[string]string, queryParams map[string]string, body map[string]interface{}, reply mockapi.MockResponse"
  );
}
