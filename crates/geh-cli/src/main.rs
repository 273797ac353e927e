use std::future::Future;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use geh_catalog::{filter_products, CatalogClient, CatalogError, ViewSlot, ViewState, ALL_CATEGORIES};
use geh_core::{AppConfig, CATEGORY_TABS};
use tracing_subscriber::EnvFilter;

mod output;

#[derive(Debug, Parser)]
#[command(name = "geh")]
#[command(about = "Browse the storefront product catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products, optionally narrowed by category tab and search text
    Products {
        /// Category tab label (e.g., iPhones, TVs)
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
        /// Case-insensitive text matched against name and description
        #[arg(long)]
        search: Option<String>,
        /// Print the matching products as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one product's detail view
    Product {
        /// Product id as reported by `products`
        id: String,
        /// Print the product as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the category tab labels
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = geh_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        env = %config.env,
        api_base_url = %config.api_base_url,
        layout = ?config.api_layout,
        "configuration loaded"
    );

    match cli.command {
        Commands::Products {
            category,
            search,
            json,
        } => run_products(&config, &category, search.as_deref().unwrap_or(""), json).await,
        Commands::Product { id, json } => run_product(&config, &id, json).await,
        Commands::Categories => {
            for label in CATEGORY_TABS {
                println!("{label}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Resolves once `signal` reports Ctrl-C.
///
/// If the handler cannot be installed this never resolves, so loads run to
/// completion instead of being abandoned.
async fn interrupt_from<S>(signal: S)
where
    S: Future<Output = std::io::Result<()>>,
{
    if let Err(error) = signal.await {
        tracing::warn!(%error, "could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

/// Runs one load through a fresh view slot and returns the state it settles in.
///
/// If `interrupt` resolves first the view is torn down, so a response that
/// arrives afterwards is discarded and the slot stays in [`ViewState::Loading`].
async fn load_view<T, F, I>(load: F, interrupt: I) -> ViewState<T>
where
    T: Clone,
    F: Future<Output = Result<T, CatalogError>>,
    I: Future<Output = ()>,
{
    let view = ViewSlot::new();
    let ticket = view.begin_load().await;
    tokio::select! {
        outcome = load => {
            view.complete(ticket, outcome).await;
        }
        () = interrupt => {
            tracing::info!("interrupted; abandoning load");
            view.teardown().await;
        }
    }
    view.state().await
}

/// Loads the catalog and prints the products visible under `category` and
/// `search`.
///
/// # Errors
///
/// Returns an error if the client cannot be built or JSON output fails.
async fn run_products(
    config: &AppConfig,
    category: &str,
    search: &str,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let client = CatalogClient::from_config(config)?;
    let state = load_view(
        client.load_catalog(&config.image_base_url),
        interrupt_from(tokio::signal::ctrl_c()),
    )
    .await;

    match state {
        ViewState::Ready(products) => {
            let visible = filter_products(&products, category, search);
            tracing::debug!(
                total = products.len(),
                visible = visible.len(),
                category,
                "catalog filtered"
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                print!("{}", output::render_listing(&visible, &config.currency));
            }
            Ok(ExitCode::SUCCESS)
        }
        other => Ok(report_unfinished(other)),
    }
}

/// Loads one product and prints its detail view.
///
/// # Errors
///
/// Returns an error if the client cannot be built or JSON output fails.
async fn run_product(config: &AppConfig, id: &str, json: bool) -> anyhow::Result<ExitCode> {
    let client = CatalogClient::from_config(config)?;
    let state = load_view(
        client.load_product(id, &config.image_base_url, config.detail_lookup),
        interrupt_from(tokio::signal::ctrl_c()),
    )
    .await;

    match state {
        ViewState::Ready(product) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&product)?);
            } else {
                print!("{}", output::render_detail(&product, &config.currency));
            }
            Ok(ExitCode::SUCCESS)
        }
        other => Ok(report_unfinished(other)),
    }
}

/// Prints the outcome of a load that produced no data and picks the exit code.
fn report_unfinished<T>(state: ViewState<T>) -> ExitCode {
    match state {
        ViewState::NotFound => {
            println!("{}", output::NOT_FOUND_MESSAGE);
            ExitCode::SUCCESS
        }
        ViewState::Failed(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
        ViewState::Idle | ViewState::Loading => {
            eprintln!("Interrupted.");
            ExitCode::from(130)
        }
        ViewState::Ready(_) => ExitCode::SUCCESS,
    }
}
