use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use storefront_cart::application::catalog::CatalogStore;
use storefront_cart::application::engine::CartEngine;
use storefront_cart::domain::cart::CheckoutOutcome;
use storefront_cart::domain::money::format_amount;
use storefront_cart::domain::ports::{KeyValueStoreBox, RenderSink, RenderSinkBox};
use storefront_cart::domain::product::{Category, ProductId};
use storefront_cart::infrastructure::file::FileStore;
#[cfg(feature = "storage-rocksdb")]
use storefront_cart::infrastructure::rocksdb::RocksDBStore;
use storefront_cart::infrastructure::seed::default_catalog;
use storefront_cart::interfaces::csv::catalog_reader::CatalogReader;
use storefront_cart::interfaces::csv::event_reader::EventReader;
use storefront_cart::interfaces::text::cart_renderer::{
    EMPTY_CART_MESSAGE, NoopRenderer, TextRenderer,
};
use storefront_cart::interfaces::text::catalog_renderer::{render_catalog, render_section};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Storefront catalog and shopping cart", long_about = None)]
struct Cli {
    /// Product catalog CSV file. Uses the built-in catalog when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Directory holding the persisted cart.
    #[arg(long, global = true, env = "STOREFRONT_STORE_DIR", default_value = ".storefront")]
    store_dir: PathBuf,

    /// Path to a RocksDB database (optional). Takes precedence over --store-dir.
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List catalog products, optionally a single section
    Catalog {
        #[arg(long)]
        category: Option<Category>,
    },
    /// Add a product to the cart
    Add {
        id: ProductId,
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product from the cart
    Remove { id: ProductId },
    /// Set the quantity of a product already in the cart
    Update {
        id: ProductId,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Add one unit of a product already in the cart
    Increment { id: ProductId },
    /// Take one unit of a product out of the cart
    Decrement { id: ProductId },
    /// Display the cart
    Show {
        /// Print the cart view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Empty the cart
    Clear,
    /// Confirm the purchase and empty the cart
    Checkout,
    /// Apply a CSV stream of recorded cart events
    Replay { input: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let catalog = load_catalog(cli.catalog.as_deref())?;

    if let Command::Catalog { category } = cli.command {
        let mut stdout = io::stdout().lock();
        let rendered = match category {
            Some(category) => render_section(&mut stdout, &catalog, category),
            None => render_catalog(&mut stdout, &catalog),
        };
        return rendered.into_diagnostic();
    }

    let store = open_store(&cli)?;
    let renderer: RenderSinkBox = match cli.command {
        Command::Show { .. } | Command::Replay { .. } => Box::new(NoopRenderer),
        _ => Box::new(TextRenderer::new(io::stdout())),
    };
    let mut engine = CartEngine::new(&catalog, store, renderer);

    match cli.command {
        Command::Catalog { .. } => {}
        Command::Add { id, quantity } => {
            engine.add_item(id, quantity).into_diagnostic()?;
            if let Some(product) = catalog.find_by_id(id) {
                println!("{} added to cart", product.name());
            }
        }
        Command::Remove { id } => engine.remove_item(id).into_diagnostic()?,
        Command::Update { id, quantity } => engine.update_quantity(id, quantity).into_diagnostic()?,
        Command::Increment { id } => engine.increment(id).into_diagnostic()?,
        Command::Decrement { id } => engine.decrement(id).into_diagnostic()?,
        Command::Show { json } => {
            if json {
                let view = serde_json::to_string_pretty(&engine.view()).into_diagnostic()?;
                println!("{view}");
            } else {
                TextRenderer::new(io::stdout()).render(&engine.view());
            }
        }
        Command::Clear => engine.clear_cart().into_diagnostic()?,
        Command::Checkout => {
            let outcome = engine.checkout().into_diagnostic()?;
            report_checkout(outcome);
        }
        Command::Replay { input } => {
            let file = File::open(input).into_diagnostic()?;
            for event_result in EventReader::new(file).events() {
                match event_result {
                    Ok(event) => match engine.apply_event(event) {
                        Ok(Some(outcome)) => report_checkout(outcome),
                        Ok(None) => {}
                        Err(e) => error!("Error processing event: {}", e),
                    },
                    Err(e) => error!("Error reading event: {}", e),
                }
            }
            TextRenderer::new(io::stdout()).render(&engine.view());
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<CatalogStore> {
    match path {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            CatalogReader::new(file).into_catalog().into_diagnostic()
        }
        None => default_catalog().into_diagnostic(),
    }
}

fn open_store(cli: &Cli) -> Result<KeyValueStoreBox> {
    if let Some(db_path) = &cli.db_path
        && let Some(store) = open_db(db_path)?
    {
        return Ok(store);
    }
    let store = FileStore::open(&cli.store_dir).into_diagnostic()?;
    Ok(Box::new(store))
}

#[cfg(feature = "storage-rocksdb")]
fn open_db(path: &Path) -> Result<Option<KeyValueStoreBox>> {
    let store = RocksDBStore::open(path).into_diagnostic()?;
    Ok(Some(Box::new(store)))
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_db(_path: &Path) -> Result<Option<KeyValueStoreBox>> {
    tracing::warn!(
        "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to file storage."
    );
    Ok(None)
}

fn report_checkout(outcome: CheckoutOutcome) {
    match outcome {
        CheckoutOutcome::Completed { total } => {
            println!("Purchase completed for {}. Thank you!", format_amount(total))
        }
        CheckoutOutcome::EmptyCart => println!("{EMPTY_CART_MESSAGE}"),
    }
}
