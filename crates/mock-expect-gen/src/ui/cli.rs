use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "mock-expect-gen")]
#[command(author, version, about = "Go mock expectation helper generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from an endpoints file
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate Go mock helpers from an endpoints file
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Path to the JSON or YAML endpoints file
  #[arg(short, long, value_name = "FILE")]
  pub endpoints: PathBuf,

  /// Name of the generated mock type, also the method receiver
  #[arg(short = 't', long = "type", value_name = "NAME")]
  pub mock_type: String,

  /// Go package name of the generated file
  #[arg(short, long, value_name = "NAME")]
  pub pkg: String,

  /// Path where the generated Go file will be written
  #[arg(short, long, value_name = "FILE")]
  pub output: PathBuf,

  /// Build tag to guard the file with; repeat for one constraint line per tag
  #[arg(long = "tag", value_name = "TAG")]
  pub tags: Vec<String>,

  /// Formatter applied after rendering
  #[arg(long, value_enum, default_value = "builtin")]
  pub formatter: FormatterMode,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatterMode {
  /// Built-in validation and layout only
  #[default]
  Builtin,
  /// Built-in pass followed by the external `gofmt` binary
  Gofmt,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all endpoints with their generated helper arguments
  Endpoints {
    /// Path to the JSON or YAML endpoints file
    #[arg(short, long, value_name = "FILE")]
    endpoints: PathBuf,
  },
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_generate_with_repeated_tags() {
    let cli = Cli::parse_from([
      "mock-expect-gen",
      "generate",
      "-e",
      "endpoints.json",
      "-t",
      "MockConsulAPI",
      "-p",
      "mocks",
      "-o",
      "api.go",
      "--tag",
      "integration",
      "--tag",
      "linux",
    ]);

    let Commands::Generate(command) = cli.command else {
      panic!("expected generate command");
    };
    assert_eq!(command.mock_type, "MockConsulAPI");
    assert_eq!(command.pkg, "mocks");
    assert_eq!(command.tags, vec!["integration".to_string(), "linux".to_string()]);
    assert_eq!(command.formatter, FormatterMode::Builtin);
  }

  #[test]
  fn test_missing_required_option_is_rejected() {
    let result = Cli::try_parse_from(["mock-expect-gen", "generate", "-e", "endpoints.json", "-t", "MockConsulAPI"]);
    assert!(result.is_err());
  }
}
