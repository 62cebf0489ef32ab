mod commands;
mod output;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "perto-cli")]
#[command(about = "Perto location-discovery command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the catalog and print per-category counts.
    Fetch,
    /// Ranked listing of one category.
    Browse {
        category: String,
        /// Sort criterion: distance-asc, rating-desc, rating-asc, name-asc, name-desc.
        #[arg(long, default_value = "rating-desc")]
        sort: String,
        /// User latitude; must be given together with --lon.
        #[arg(long)]
        lat: Option<f64>,
        /// User longitude; must be given together with --lat.
        #[arg(long)]
        lon: Option<f64>,
    },
    /// Free-text search across the catalog.
    Search {
        query: String,
        /// Restrict matches to one category.
        #[arg(long)]
        category: Option<String>,
        /// Maximum number of matches to print.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show a single place by id.
    Show { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch => commands::fetch().await,
        Commands::Browse {
            category,
            sort,
            lat,
            lon,
        } => commands::browse(&category, &sort, lat, lon).await,
        Commands::Search {
            query,
            category,
            limit,
        } => commands::search(&query, category.as_deref(), limit).await,
        Commands::Show { id } => commands::show(&id).await,
    }
}
