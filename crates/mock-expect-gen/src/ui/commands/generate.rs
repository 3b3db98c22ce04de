use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    ast::{EndpointCatalog, RenderConfig},
    orchestrator::{GenerationStats, Orchestrator},
    postprocess::gofmt::format_with_gofmt,
  },
  reserved::is_go_identifier,
  ui::{Colors, FormatterMode, GenerateCommand},
  utils::{EndpointLoader, endpoints::EndpointFormat},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub endpoints: PathBuf,
  pub mock_type: String,
  pub package: String,
  pub output: PathBuf,
  pub build_tags: Vec<String>,
  pub formatter: FormatterMode,
  /// Program arguments as typed, recorded in the generated header.
  pub invocation: String,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  async fn load_catalog(&self) -> anyhow::Result<(EndpointCatalog, EndpointFormat)> {
    let loader = EndpointLoader::open(&self.endpoints).await?;
    Ok((loader.parse()?, loader.format()))
  }

  fn create_orchestrator(&self, catalog: EndpointCatalog) -> Orchestrator {
    let config = RenderConfig::builder()
      .invocation_args(self.invocation.as_str())
      .package_name(self.package.as_str())
      .build_tags(self.build_tags.clone())
      .receiver_type(self.mock_type.as_str())
      .endpoints(catalog.into_sorted())
      .build();
    Orchestrator::new(config)
  }

  async fn format(&self, code: String) -> anyhow::Result<String> {
    match self.formatter {
      FormatterMode::Builtin => Ok(code),
      FormatterMode::Gofmt => format_with_gofmt(&code).await,
    }
  }

  async fn write_output(&self, code: &str) -> anyhow::Result<()> {
    if let Some(parent) = self.output.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent)
        .await
        .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }
    tokio::fs::write(&self.output, code)
      .await
      .with_context(|| format!("Failed to write {}", self.output.display()))?;
    Ok(())
  }
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand, invocation: impl Into<String>) -> anyhow::Result<Self> {
    let GenerateCommand {
      endpoints,
      mock_type,
      pkg,
      output,
      tags,
      formatter,
      verbose,
      quiet,
    } = command;

    if !is_go_identifier(&mock_type) {
      anyhow::bail!("Mock type (-t) '{mock_type}' is not a valid Go identifier");
    }
    if !is_go_identifier(&pkg) || pkg == "_" {
      anyhow::bail!("Package (-p) '{pkg}' is not a valid Go package name");
    }
    if let Some(tag) = tags.iter().find(|tag| tag.trim().is_empty() || tag.contains(['\n', '\r'])) {
      anyhow::bail!("Build tag {tag:?} must be a non-empty single line");
    }

    Ok(Self {
      endpoints,
      mock_type,
      package: pkg,
      output,
      build_tags: tags,
      formatter,
      invocation: invocation.into(),
      verbose,
      quiet,
    })
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!("{}", self.stat_line(label, &value));
    }
  }

  fn stat_line(&self, label: &str, value: &str) -> String {
    format!(
      "            {} {}",
      format!("{label:<25}").with(self.colors.label()),
      value.with(self.colors.value())
    )
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading endpoints from: {}", self.config.endpoints.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_loaded(&self, catalog: &EndpointCatalog, format: EndpointFormat) {
    if catalog.is_empty() {
      self.info(
        &"No endpoints defined, only the mock type will be generated"
          .with(self.colors.accent())
          .to_string(),
      );
    } else if self.config.verbose {
      self.stat("Endpoints loaded:", format!("{} ({format})", catalog.len()));
    }
  }

  fn log_generating(&self, orchestrator: &Orchestrator) {
    self.info(&"Generating Go mock helpers...".with(self.colors.primary()).to_string());

    if !self.config.verbose || self.config.quiet {
      return;
    }
    for endpoint in &orchestrator.config().endpoints {
      println!(
        "              {} {} {}",
        endpoint.name.as_str().with(self.colors.value()),
        endpoint.spec.method.as_str().with(self.colors.accent()),
        endpoint.spec.path.as_str().with(self.colors.info())
      );
    }
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Helpers generated:", stats.endpoints_generated.to_string());
    if self.config.verbose {
      self.stat("", format!("{} path parameters", stats.path_parameters));
      self.stat("", format!("{} with request bodies", stats.request_bodies));
      self.stat("", format!("{} with query parameters", stats.query_param_helpers));
      self.stat("", format!("{} with headers", stats.header_helpers));
    }
    if stats.build_tags > 0 {
      self.stat("Build tags:", stats.build_tags.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || self.config.quiet {
      return;
    }

    println!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_formatting(&self) {
    if self.config.formatter == FormatterMode::Gofmt {
      self.info(&"Running gofmt...".with(self.colors.primary()).to_string());
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated Go mock helpers".with(self.colors.success())
      );
    }
  }
}

/// Loads, renders and writes. Nothing is written unless every earlier step succeeds.
pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let (catalog, format) = config.load_catalog().await?;
  logger.log_loaded(&catalog, format);

  let orchestrator = config.create_orchestrator(catalog);
  logger.log_generating(&orchestrator);
  let output = orchestrator
    .generate()
    .with_context(|| format!("Failed to generate mock helpers for {}", config.endpoints.display()))?;
  logger.print_statistics(&output.stats);

  logger.log_formatting();
  let code = config.format(output.code).await?;

  logger.log_writing();
  config.write_output(&code).await?;

  logger.log_success();
  Ok(())
}
