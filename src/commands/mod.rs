pub mod export;
pub mod init;
pub mod logout;
pub mod preview;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Export the billing week as an Excel timesheet")]
    Export(export::ExportArgs),
    #[command(about = "Preview the formatted billing week in the terminal")]
    Preview(preview::PreviewArgs),
    #[command(about = "Delete the stored API key")]
    Logout,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Preview(args) => preview::cmd(args).await,
            Commands::Logout => logout::cmd(),
        }
    }
}
