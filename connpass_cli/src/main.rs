mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "connpass")]
#[command(about = "Search events listed on connpass")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (defaults to $CONNPASS_BASE_URL, then https://connpass.com)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (defaults to $CONNPASS_TIMEOUT_SECS, then 30)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search events
    Events(commands::events::EventsArgs),
    /// Print the request URL for a search without sending it
    Url(commands::events::FilterArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("connpass=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);
    let config = Config::load(cli.base_url.as_deref(), cli.timeout)?;
    let client = config.client();

    match &cli.command {
        Commands::Events(args) => commands::events::run(args, &client, &format).await?,
        Commands::Url(args) => commands::url::run(args, &client)?,
    }

    Ok(())
}
