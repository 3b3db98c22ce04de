//! Orchestration for the endpoint-to-Go mock helper pipeline.
//!
//! The `Orchestrator` owns one `RenderConfig` for the duration of a run and
//! drives the pipeline: validation, rendering of the file template, and the
//! built-in canonicalization of the rendered text.
//!
//! ## Usage
//!
//! ```ignore
//! let config = RenderConfig::builder()
//!   .invocation_args("generate -e endpoints.json -t MockConsulAPI -p mocks -o api.go")
//!   .package_name("mocks")
//!   .receiver_type("MockConsulAPI")
//!   .endpoints(catalog.into_sorted())
//!   .build();
//!
//! let output = Orchestrator::new(config).generate()?;
//! println!("{} helpers, {} warnings", output.stats.endpoints_generated, output.stats.warnings.len());
//! std::fs::write("api.go", output.code)?;
//! ```

use std::fmt::Write as _;

use itertools::Itertools;

use super::{
  ast::{Endpoint, RenderConfig},
  codegen::MockFileFragment,
  errors::{GenerateError, GenerationWarning},
  postprocess, validation,
};

pub struct Orchestrator {
  config: RenderConfig,
}

/// Canonical Go source plus what went into it.
#[derive(Debug)]
pub struct GeneratedOutput {
  pub code: String,
  pub stats: GenerationStats,
}

/// Statistics about one generation run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
  /// Helper methods emitted, one per endpoint
  pub endpoints_generated: usize,
  /// Path parameters across all helpers
  pub path_parameters: usize,
  /// Helpers that attach a request body
  pub request_bodies: usize,
  /// Helpers taking a query parameter map
  pub query_param_helpers: usize,
  /// Helpers taking a header map
  pub header_helpers: usize,
  /// Build constraint lines written at the top of the file
  pub build_tags: usize,
  /// Non-fatal findings, in endpoint order
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  fn from_config(config: &RenderConfig, warnings: Vec<GenerationWarning>) -> Self {
    let endpoints = &config.endpoints;
    Self {
      endpoints_generated: endpoints.len(),
      path_parameters: endpoints.iter().map(|e| e.spec.path_parameters.len()).sum(),
      request_bodies: endpoints.iter().filter(|e| e.spec.body_type.is_attached()).count(),
      query_param_helpers: endpoints.iter().filter(|e| e.spec.query_params.is_present()).count(),
      header_helpers: endpoints.iter().filter(|e| e.spec.headers.is_present()).count(),
      build_tags: config.build_tags.len(),
      warnings,
    }
  }
}

impl Orchestrator {
  pub fn new(config: RenderConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &RenderConfig {
    &self.config
  }

  fn sorted_endpoints(&self) -> impl Iterator<Item = &Endpoint> {
    self.config.endpoints.iter().sorted_by(|a, b| a.name.cmp(&b.name))
  }

  /// Renders the file template without validation or post-processing.
  ///
  /// # Errors
  ///
  /// Returns `GenerateError::Render` if a fragment fails to write.
  pub fn render(&self) -> Result<String, GenerateError> {
    let mut raw = String::new();
    write!(raw, "{}", MockFileFragment::new(&self.config))?;
    Ok(raw)
  }

  /// Generates the canonical Go source for the configured endpoints.
  ///
  /// Steps, all of which must succeed before any text is returned:
  /// 1. checks path arity of every endpoint, in name order
  /// 2. collects non-fatal warnings
  /// 3. renders the file template
  /// 4. validates and canonicalizes the rendered text
  ///
  /// # Errors
  ///
  /// - `GenerateError::PathArity` when a path's slots and parameters disagree
  /// - `GenerateError::Render` when a fragment fails to write
  /// - `GenerateError::Syntax` when the rendered text is not valid Go
  pub fn generate(&self) -> Result<GeneratedOutput, GenerateError> {
    for endpoint in self.sorted_endpoints() {
      validation::check_path_arity(endpoint)?;
    }

    let warnings = self.sorted_endpoints().flat_map(validation::collect_warnings).collect();

    let raw = self.render()?;
    let code = postprocess::canonicalize(&raw)?;

    Ok(GeneratedOutput {
      code,
      stats: GenerationStats::from_config(&self.config, warnings),
    })
  }
}
