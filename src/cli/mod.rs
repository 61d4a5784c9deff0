use std::fs;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::application::VendingService;
use crate::domain::Catalog;

mod session;

pub use session::Session;

/// Automat - Console Vending Machine
#[derive(Parser)]
#[command(name = "automat")]
#[command(about = "An interactive vending machine simulator for the terminal")]
#[command(version)]
pub struct Cli {
    /// Catalog file (JSON array of products; uses the built-in catalog if omitted)
    #[arg(short, long)]
    pub catalog: Option<String>,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_logging(self.verbose);

        let catalog = match &self.catalog {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read catalog file: {}", path))?;
                Catalog::from_json_str(&json)
                    .with_context(|| format!("Invalid catalog file: {}", path))?
            }
            None => Catalog::standard(),
        };
        debug!(products = catalog.products().len(), "catalog loaded");

        let service = VendingService::new(catalog);
        let stdin = io::stdin();
        let mut session = Session::new(service, stdin.lock(), io::stdout());
        session.run()
    }
}

/// Diagnostics go to stderr so they never interleave with the menu on
/// stdout. `RUST_LOG` overrides the defaults; `--verbose` raises the
/// crate filter to debug.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("automat=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("automat=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
