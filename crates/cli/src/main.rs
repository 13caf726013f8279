//! BIDUA CLI - pricing tools that share the storefront's domain logic.
//!
//! # Usage
//!
//! ```bash
//! # Shipping fee for an order of 12 items
//! bidua shipping 12
//!
//! # Print the shipping tier table
//! bidua tiers
//!
//! # Cost the default recipe, or one loaded from YAML
//! bidua calculate
//! bidua calculate --recipe demos/recipe.yaml --json
//!
//! # Write the default recipe as a starting point
//! bidua recipe init my-recipe.yaml
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bidua")]
#[command(author, version, about = "BIDUA pricing tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote the shipping fee for an item count
    Shipping {
        /// Total number of items in the order
        items: u64,
    },
    /// Print the shipping tier table
    Tiers,
    /// Compute the cost breakdown for a cream recipe
    Calculate {
        /// YAML recipe file (defaults to the built-in recipe)
        #[arg(short, long)]
        recipe: Option<PathBuf>,

        /// Write the full breakdown to stdout as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage recipe files
    Recipe {
        #[command(subcommand)]
        action: RecipeAction,
    },
}

#[derive(Subcommand)]
enum RecipeAction {
    /// Write the default recipe as YAML
    Init {
        /// Destination file
        path: PathBuf,

        /// Overwrite the file if it exists
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Shipping { items } => commands::shipping::quote(items),
        Commands::Tiers => commands::shipping::tiers(),
        Commands::Calculate { recipe, json } => {
            commands::calculate::run(recipe.as_deref(), json).await?;
        }
        Commands::Recipe { action } => match action {
            RecipeAction::Init { path, force } => commands::calculate::init(&path, force).await?,
        },
    }
    Ok(())
}
