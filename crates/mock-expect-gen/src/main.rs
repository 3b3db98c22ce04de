#![allow(clippy::missing_errors_doc)]
use clap::Parser;
use itertools::Itertools;

use crate::ui::{Cli, Colors, Commands, ListCommands, colors};

mod generator;
mod reserved;
mod ui;
mod utils;


#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::List { list_command } => match list_command {
      ListCommands::Endpoints { endpoints } => ui::commands::list_endpoints(&endpoints, &colors).await?,
    },
    Commands::Generate(command) => {
      let invocation = std::env::args().skip(1).join(" ");
      let config = ui::commands::GenerateConfig::from_command(command, invocation)?;
      ui::commands::generate_code(config, &colors).await?;
    }
  }

  Ok(())
}
