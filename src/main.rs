//! tfectl - Main entry point

use clap::Parser;
use log::{debug, info};

use tfectl::{build_registry, dispatch, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfectl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: address={:?}, batch={}, no_header={}, command={:?}",
        cli.address, cli.batch, cli.no_header, cli.args
    );

    let registry = build_registry();
    debug!("Registered {} commands", registry.len());

    let code = dispatch(&registry, &cli.context(), &cli.args).await;
    std::process::exit(code);
}
