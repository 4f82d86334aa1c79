//! HearHut CLI - Store-file inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog, filtered and sorted like the shop page
//! hh-cli catalog --category speakers --sort price-low
//!
//! # Show the cart visible to the current session
//! hh-cli cart
//!
//! # Show archived orders for an identity (or the guest archive)
//! hh-cli orders -e someone@gmail.com
//!
//! # Tail the auth audit trail
//! hh-cli events
//! ```
//!
//! The store file defaults to `hearhut-store.json`, overridable with
//! `--store` or `HEARHUT_STORAGE_PATH`.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use hear_hut_storefront::catalog::{Category, SortBy};

mod commands;

#[derive(Parser)]
#[command(name = "hh-cli")]
#[command(author, version, about = "HearHut CLI tools")]
struct Cli {
    /// Store file to inspect (falls back to HEARHUT_STORAGE_PATH)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog {
        /// Restrict to one category
        #[arg(short, long)]
        category: Option<CategoryArg>,

        /// Case-insensitive name/brand search
        #[arg(short, long)]
        search: Option<String>,

        /// Listing order
        #[arg(long, default_value = "featured")]
        sort: SortArg,
    },
    /// Show the cart visible to the current session
    Cart,
    /// Show archived orders
    Orders {
        /// Identity email; omit for the guest archive
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Show the auth audit trail, oldest first
    Events,
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Headphones,
    Earbuds,
    Speakers,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Headphones => Self::Headphones,
            CategoryArg::Earbuds => Self::Earbuds,
            CategoryArg::Speakers => Self::Speakers,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
    Newest,
}

impl From<SortArg> for SortBy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Featured => Self::Featured,
            SortArg::PriceLow => Self::PriceLowToHigh,
            SortArg::PriceHigh => Self::PriceHighToLow,
            SortArg::Rating => Self::Rating,
            SortArg::Newest => Self::Newest,
        }
    }
}

fn main() {
    // Load .env before resolving the store path
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store_path = cli
        .store
        .or_else(|| std::env::var_os("HEARHUT_STORAGE_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("hearhut-store.json"));

    match cli.command {
        Commands::Catalog {
            category,
            search,
            sort,
        } => commands::catalog::list(category.map(Into::into), search, sort.into()),
        Commands::Cart => commands::inspect::cart(&store_path)?,
        Commands::Orders { email } => commands::inspect::orders(&store_path, email.as_deref())?,
        Commands::Events => commands::inspect::events(&store_path)?,
    }
    Ok(())
}
