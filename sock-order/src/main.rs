use clap::{Parser, Subcommand};

mod commands;
mod config;
mod logger;

use commands::{availability, catalog, submit};
use config::AppConfig;

#[derive(Parser)]
#[command(name = "sock-order")]
#[command(about = "Sock order form: browse the catalog, submit orders, publish availability", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show parks, styles and what can be ordered
    #[command(alias = "c")]
    Catalog(catalog::CatalogArgs),

    /// Build an order and post it to the webhook
    #[command(alias = "s")]
    Submit(submit::SubmitArgs),

    /// Write availability.json from the catalog and override files
    Availability(availability::AvailabilityArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let app_config = AppConfig::from_env();
    let level = if cli.debug {
        Some("debug")
    } else {
        app_config.log_level.as_deref()
    };
    logger::init_logger(level, app_config.log_dir.as_deref());

    match cli.command {
        Commands::Catalog(args) => catalog::execute(args).await,
        Commands::Submit(args) => submit::execute(args).await,
        Commands::Availability(args) => availability::execute(args),
    }
}
