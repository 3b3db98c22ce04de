use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Deserializer};

/// Request body encoding of an endpoint.
///
/// Values outside the known set are kept verbatim in `Other` and render exactly
/// like `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "Option<String>")]
pub enum BodyType {
  #[default]
  None,
  Json,
  String,
  Stream,
  Other(String),
}

impl BodyType {
  /// Whether the generated helper takes a `body` argument and attaches it to the request.
  pub fn is_attached(&self) -> bool {
    matches!(self, Self::Json | Self::String | Self::Stream)
  }
}

impl From<&str> for BodyType {
  fn from(value: &str) -> Self {
    match value {
      "" | "none" => Self::None,
      "json" => Self::Json,
      "string" => Self::String,
      "stream" => Self::Stream,
      other => Self::Other(other.to_string()),
    }
  }
}

impl From<Option<String>> for BodyType {
  fn from(value: Option<String>) -> Self {
    value.as_deref().map_or(Self::None, Self::from)
  }
}

impl Display for BodyType {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::None => f.write_str("none"),
      Self::Json => f.write_str("json"),
      Self::String => f.write_str("string"),
      Self::Stream => f.write_str("stream"),
      Self::Other(raw) => f.write_str(raw),
    }
  }
}

/// Reply encoding of an endpoint; selects the mock registration call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "Option<String>")]
pub enum ResponseType {
  #[default]
  None,
  Json,
  String,
  Stream,
  Func,
  Other(String),
}

impl ResponseType {
  /// `func` replies hand the status code over to the response handler.
  pub fn takes_status(&self) -> bool {
    !matches!(self, Self::Func)
  }
}

impl From<&str> for ResponseType {
  fn from(value: &str) -> Self {
    match value {
      "" | "none" => Self::None,
      "json" => Self::Json,
      "string" => Self::String,
      "stream" => Self::Stream,
      "func" => Self::Func,
      other => Self::Other(other.to_string()),
    }
  }
}

impl From<Option<String>> for ResponseType {
  fn from(value: Option<String>) -> Self {
    value.as_deref().map_or(Self::None, Self::from)
  }
}

impl Display for ResponseType {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::None => f.write_str("none"),
      Self::Json => f.write_str("json"),
      Self::String => f.write_str("string"),
      Self::Stream => f.write_str("stream"),
      Self::Func => f.write_str("func"),
      Self::Other(raw) => f.write_str(raw),
    }
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PresenceRepr {
  Flag(bool),
  Names(Vec<String>),
}

/// Query parameters and headers only matter by presence: the mock layer takes an
/// arbitrary map at call time, so the declared names never reach the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<PresenceRepr>")]
pub enum Presence {
  #[default]
  Absent,
  Declared(Vec<String>),
}

impl Presence {
  pub fn from_names<I, S>(names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    if names.is_empty() {
      Self::Absent
    } else {
      Self::Declared(names)
    }
  }

  pub fn is_present(&self) -> bool {
    matches!(self, Self::Declared(_))
  }
}

impl From<Option<PresenceRepr>> for Presence {
  fn from(value: Option<PresenceRepr>) -> Self {
    match value {
      None | Some(PresenceRepr::Flag(false)) => Self::Absent,
      Some(PresenceRepr::Flag(true)) => Self::Declared(vec![]),
      Some(PresenceRepr::Names(names)) => Self::from_names(names),
    }
  }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de> + Default,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Shape of one mock HTTP endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EndpointSpec {
  #[serde(alias = "Method", deserialize_with = "nullable")]
  pub method: String,
  /// Format string; `%` verbs are filled from `path_parameters` in order.
  #[serde(alias = "Path", deserialize_with = "nullable")]
  pub path: String,
  #[serde(alias = "PathParameters", deserialize_with = "nullable")]
  pub path_parameters: Vec<String>,
  #[serde(alias = "QueryParams")]
  pub query_params: Presence,
  #[serde(alias = "Headers")]
  pub headers: Presence,
  #[serde(alias = "BodyType")]
  pub body_type: BodyType,
  #[serde(alias = "ResponseType")]
  pub response_type: ResponseType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
  pub name: String,
  pub spec: EndpointSpec,
}

impl Endpoint {
  pub fn new(name: impl Into<String>, spec: EndpointSpec) -> Self {
    Self {
      name: name.into(),
      spec,
    }
  }
}

/// Endpoint file contents: endpoint name to shape, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct EndpointCatalog(IndexMap<String, EndpointSpec>);

impl EndpointCatalog {
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Consumes the catalog, returning endpoints in ascending name order.
  pub fn into_sorted(self) -> Vec<Endpoint> {
    self
      .0
      .into_iter()
      .sorted_by(|(a, _), (b, _)| a.cmp(b))
      .map(|(name, spec)| Endpoint::new(name, spec))
      .collect()
  }
}

impl FromIterator<(String, EndpointSpec)> for EndpointCatalog {
  fn from_iter<T: IntoIterator<Item = (String, EndpointSpec)>>(iter: T) -> Self {
    Self(iter.into_iter().collect())
  }
}
