mod catalog;
mod export;
mod import;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "revdock")]
#[command(about = "Review CSV import/export pipeline for the shop dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse and validate a review CSV without uploading anything.
    Validate {
        /// Path to the CSV file.
        file: PathBuf,
    },
    /// Validate a review CSV and commit every handle group to the shop.
    Import {
        /// Path to the CSV file.
        file: PathBuf,
        /// Handle groups committed concurrently (defaults to the
        /// configured value; 1 is strictly sequential).
        #[arg(long)]
        max_concurrent: Option<usize>,
    },
    /// Download a product's reviews as CSV.
    Export {
        /// Storefront handle of the product.
        handle: String,
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List products with their review counts.
    Products {
        /// Page size.
        #[arg(long, default_value_t = 10)]
        first: u32,
        /// Cursor to continue from, as printed by the previous page.
        #[arg(long)]
        after: Option<String>,
    },
    /// Ensure the review metafield definition exists on the shop.
    Setup,
}

/// Loads configuration and builds the Admin API client the networked
/// subcommands share.
pub(crate) fn connect_admin(
) -> anyhow::Result<(revdock_core::AppConfig, revdock_admin::AdminClient)> {
    let config = revdock_core::load_app_config()?;
    let client = revdock_admin::AdminClient::from_config(&config)?;
    Ok((config, client))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate { file } => import::validate_file(&file),
        Commands::Import {
            file,
            max_concurrent,
        } => import::import_file(&file, max_concurrent).await,
        Commands::Export { handle, output } => {
            export::export_reviews(&handle, output.as_deref()).await
        }
        Commands::Products { first, after } => {
            catalog::list_products(first, after.as_deref()).await
        }
        Commands::Setup => catalog::ensure_metafield_definition().await,
    }
}
