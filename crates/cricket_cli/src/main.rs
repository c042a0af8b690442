//! Interactive console front end for the cricket management game.
//!
//! Menus and prompts live here; all rules and bookkeeping live in
//! `cricket_core`. Logs go to stderr so they never interleave with the
//! menus on stdout.

use anyhow::Result;
use cricket_core::Registry;
use tracing::info;

mod input;
mod menu;
mod render;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("cricket_cli {} starting", cricket_core::VERSION);

    println!("Welcome to the Cricket Simulation Game!");

    let mut registry = Registry::new();
    menu::run(&mut registry)?;

    println!("\nThank you for playing! Goodbye!");
    info!("cricket_cli exiting");
    Ok(())
}
