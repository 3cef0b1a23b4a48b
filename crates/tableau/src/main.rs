//! Tableau command-line binary.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use tableau::{TableauConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so env-backed flags see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_format)?;

    let config = TableauConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate(args) => {
            if !cli::handle_generate_command(args, &config).await? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
