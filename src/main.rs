//! ZONALIBROS - catalog listing against the configured backend
//!
//! Loads the book catalog through the same controller a UI would use and
//! prints one line per book.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zonalibros::{BookController, ClientConfig, HttpGateway, SubmitOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zonalibros=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ClientConfig::load().context("Failed to load configuration")?;
    let gateway = HttpGateway::new(&config).context("Failed to build HTTP client")?;
    tracing::info!("Using backend at {}", gateway.base_url());

    let books = BookController::new(Arc::new(gateway));
    match books.load_books().await {
        SubmitOutcome::Succeeded(_) => {
            for book in books.books() {
                let id = book.id.map(|id| id.to_string()).unwrap_or_default();
                println!("{id:>5}  {}", book.summary());
            }
        }
        _ => {
            let snapshot = books.form().snapshot();
            let message = snapshot
                .general_error()
                .unwrap_or("No se pudo cargar el catálogo");
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
    }

    Ok(())
}
