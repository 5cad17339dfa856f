//! Address Book - Main entry point
//!
//! Reads contacts from stdin, one `name;phone[;birthday]` per line, and prints
//! the resulting address book page by page to stdout.

use address_book::input::read_book;
use address_book::output::print_book;
use address_book::Config;
use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so stdout carries just the book)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Configuration loaded: page size {}, output {:?}",
        config.page_size, config.output_format
    );

    let book = read_book(io::stdin().lock()).context("Failed to read contacts from stdin")?;
    info!("Loaded {} contacts", book.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(e) = print_book(&mut out, &book, config.page_size, config.output_format) {
        error!("Failed to print address book: {}", e);
        return Err(e.into());
    }
    out.flush()?;

    Ok(())
}
