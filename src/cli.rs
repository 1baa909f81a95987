use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{info, info_span};
use uuid::Uuid;

use crate::core::generator::{DateRange, OrderCount, OrderGenerator};
use crate::core::selector::WeightedSelector;
use crate::export::save_orders;
use crate::models::IdentifierPool;

#[derive(Debug, Parser)]
#[command(name = "fake-orders")]
#[command(version)]
#[command(about = "Synthesize a fake orders dataset from an identifier pool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate fake orders into a CSV file
    Generate(GenerateArgs),
    /// Normalise a proxy list into a one-column identifier CSV
    Pool(PoolArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Proxy list (`host:port` per line) used as the identifier pool
    #[arg(short, long, env = "FAKE_ORDERS_POOL")]
    pub pool: PathBuf,

    /// Output CSV path
    #[arg(short, long, env = "FAKE_ORDERS_OUTPUT", default_value = "fake-orders.csv")]
    pub output: PathBuf,

    /// Number of orders to generate
    #[arg(
        short = 'n',
        long,
        env = "FAKE_ORDERS_COUNT",
        default_value_t = 100_000,
        allow_negative_numbers = true
    )]
    pub count: i64,

    /// Treat --count as an exclusive bound and emit count - 1 orders (legacy datasets)
    #[arg(long)]
    pub exclusive_count: bool,

    /// First day of the timestamp window (YYYY-MM-DD)
    #[arg(long, env = "FAKE_ORDERS_FROM", default_value = "2021-01-01")]
    pub from: String,

    /// Last day of the timestamp window, inclusive (YYYY-MM-DD)
    #[arg(long, env = "FAKE_ORDERS_TO", default_value = "2023-12-31")]
    pub to: String,

    /// Beta shape parameter a
    #[arg(long, env = "FAKE_ORDERS_ALPHA", default_value_t = 2.0)]
    pub alpha: f64,

    /// Beta shape parameter b
    #[arg(long, env = "FAKE_ORDERS_BETA", default_value_t = 2.0)]
    pub beta: f64,

    /// Seed for reproducible output
    #[arg(long, env = "FAKE_ORDERS_SEED")]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    pub fn order_count(&self) -> OrderCount {
        if self.exclusive_count {
            OrderCount::ExclusiveBound(self.count)
        } else {
            OrderCount::Exactly(self.count)
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Debug, Args)]
pub struct PoolArgs {
    /// Proxy list to read
    #[arg(short, long, env = "FAKE_ORDERS_PROXY_LIST")]
    pub input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "free-proxies.csv")]
    pub output: PathBuf,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let run_id = Uuid::new_v4();
    let span = info_span!("run", %run_id);
    let _guard = span.enter();

    match cli.command {
        Commands::Generate(args) => generate(&args),
        Commands::Pool(args) => export_pool(&args),
    }
}

fn generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let range = DateRange::parse(&args.from, &args.to)?;
    let selector = WeightedSelector::new(args.alpha, args.beta)?;
    let pool = IdentifierPool::load(&args.pool)
        .with_context(|| format!("Failed to read identifier pool {}", args.pool.display()))?;

    let generator = OrderGenerator::new(selector, range);
    let mut rng = args.rng();
    // Everything is validated and generated before the output file is created.
    let orders = generator.generate(&pool, args.order_count(), &mut rng)?;

    let written = save_orders(&args.output, orders)
        .with_context(|| format!("Failed to write orders to {}", args.output.display()))?;
    info!(written, output = %args.output.display(), "Fake orders written");
    Ok(())
}

fn export_pool(args: &PoolArgs) -> anyhow::Result<()> {
    let pool = IdentifierPool::load(&args.input)
        .with_context(|| format!("Failed to read proxy list {}", args.input.display()))?;
    pool.save_csv(&args.output)
        .with_context(|| format!("Failed to write pool to {}", args.output.display()))?;
    info!(identifiers = pool.len(), output = %args.output.display(), "Identifier pool written");
    Ok(())
}
