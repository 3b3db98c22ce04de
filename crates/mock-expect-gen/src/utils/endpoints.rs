use std::{ffi::OsStr, path::Path};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::ast::EndpointCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum EndpointFormat {
  #[default]
  Json,
  Yaml,
}

impl EndpointFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext.to_ascii_lowercase().as_str() {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

/// Memory-mapped endpoint definitions file.
pub struct EndpointLoader {
  file: AsyncMmapFile,
  format: EndpointFormat,
}

impl EndpointLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = EndpointFormat::from_path(path);
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("Failed to open endpoints file {}", path.display()))?;

    Ok(Self { file, format })
  }

  pub fn format(&self) -> EndpointFormat {
    self.format
  }

  /// Parses the mapping of endpoint names to definitions, keeping file order.
  ///
  /// Errors name the offending entry, e.g. `ReadKV.pathParameters[0]: invalid type`.
  pub fn parse(&self) -> anyhow::Result<EndpointCatalog> {
    parse_catalog(self.file.as_slice(), self.format)
  }
}

pub(crate) fn parse_catalog(bytes: &[u8], format: EndpointFormat) -> anyhow::Result<EndpointCatalog> {
  match format {
    EndpointFormat::Json => {
      let mut deserializer = serde_json::Deserializer::from_slice(bytes);
      serde_path_to_error::deserialize(&mut deserializer).context("Failed to parse JSON endpoint definitions")
    }
    EndpointFormat::Yaml => {
      let deserializer = serde_yaml::Deserializer::from_slice(bytes);
      serde_path_to_error::deserialize(deserializer).context("Failed to parse YAML endpoint definitions")
    }
  }
}
