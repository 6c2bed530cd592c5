//! Shopcart CLI - run one console command from a shell.
//!
//! # Usage
//!
//! ```bash
//! # Create a shopcart for customer 1001
//! shopcart create --customer-id 1001
//!
//! # Show shopcart 3 with its items
//! shopcart retrieve --shopcart-id 3
//!
//! # List a customer's shopcarts as JSON view state
//! shopcart --format json search --customer-id 1001
//!
//! # Add an item
//! shopcart item-create --shopcart-id 3 --product-id 11 --price 1.50 --quantity 2
//! ```
//!
//! The exit status is 1 when the command ends with a danger flash.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Args, Parser, Subcommand, ValueEnum};
use shopcart_console::commands::Command;
use shopcart_console::config::{DEFAULT_API_URL, parse_api_url};
use url::Url;

mod commands;

use commands::console::{Fields, OutputFormat};

#[derive(Parser)]
#[command(name = "shopcart")]
#[command(author, version, about = "Shopcart console command line")]
struct Cli {
    /// Base URL of the Shopcart API
    #[arg(long, env = "SHOPCART_API_URL", default_value = DEFAULT_API_URL, value_parser = parse_api_url)]
    api_url: Url,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Flash and results table markup
    Html,
    /// The whole view state
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => Self::Html,
            Format::Json => Self::Json,
        }
    }
}

/// Form fields, named after the console inputs.
#[derive(Args)]
struct FieldArgs {
    /// Shopcart id (also used as the item's shopcart id)
    #[arg(long)]
    shopcart_id: Option<String>,

    /// Customer id
    #[arg(long)]
    customer_id: Option<String>,

    /// Product id
    #[arg(long)]
    product_id: Option<String>,

    /// Item price
    #[arg(long)]
    price: Option<String>,

    /// Item quantity
    #[arg(long)]
    quantity: Option<String>,
}

impl From<FieldArgs> for Fields {
    fn from(args: FieldArgs) -> Self {
        Self {
            shopcart_id: args.shopcart_id.unwrap_or_default(),
            customer_id: args.customer_id.unwrap_or_default(),
            product_id: args.product_id.unwrap_or_default(),
            price: args.price.unwrap_or_default(),
            quantity: args.quantity.unwrap_or_default(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a shopcart
    Create(FieldArgs),
    /// Update a shopcart's customer
    Update(FieldArgs),
    /// Show one shopcart with its items
    Retrieve(FieldArgs),
    /// Delete a shopcart
    Delete(FieldArgs),
    /// Remove every item from a shopcart
    ClearCart(FieldArgs),
    /// Find shopcarts by id, by customer, or list all
    Search(FieldArgs),
    /// Add an item to a shopcart
    ItemCreate(FieldArgs),
    /// Change an item's price and quantity
    ItemUpdate(FieldArgs),
    /// Remove an item from a shopcart
    ItemDelete(FieldArgs),
}

impl Commands {
    fn into_parts(self) -> (Command, FieldArgs) {
        match self {
            Self::Create(fields) => (Command::Create, fields),
            Self::Update(fields) => (Command::Update, fields),
            Self::Retrieve(fields) => (Command::Retrieve, fields),
            Self::Delete(fields) => (Command::Delete, fields),
            Self::ClearCart(fields) => (Command::ClearCart, fields),
            Self::Search(fields) => (Command::Search, fields),
            Self::ItemCreate(fields) => (Command::ItemCreate, fields),
            Self::ItemUpdate(fields) => (Command::ItemUpdate, fields),
            Self::ItemDelete(fields) => (Command::ItemDelete, fields),
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Run the command and print its view. Returns false on a danger flash.
async fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let (command, fields) = cli.command.into_parts();

    let view = commands::console::run(cli.api_url, command, fields.into()).await?;
    let output = commands::console::render(&view, cli.format.into())?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;

    Ok(!commands::console::is_danger(&view))
}
