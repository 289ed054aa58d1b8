use std::io;

use anyhow::Result;
use clap::Parser;
use console::Term;
use shopping_cart_cli::{
    cli::{Args, Shell},
    utils::Config,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!(
        "Shopping cart starting in {} environment",
        config.environment
    );

    let colors = config.colors && !args.no_color && Term::stdout().features().colors_supported();
    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock()).with_colors(colors);
    shell.run().map_err(|e| {
        tracing::error!("Session aborted: {}", e);
        e
    })?;

    tracing::info!("Shopping cart stopped");
    Ok(())
}
