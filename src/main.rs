use clap::Parser;
use fake_orders::cli::{run, Cli};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("Generation failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fake_orders=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
