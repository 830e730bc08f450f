mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::{EnvFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::error::ConvertError;

/// Stdout may carry the chart, so logs always go to stderr.
/// `RUST_LOG` wins unless `--debug` was passed.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("bench_chart=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bench_chart=warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(layer().with_writer(std::io::stderr).compact())
        .init();
}

pub fn run() -> Result<(), ConvertError> {
    let cli = parse::Cli::parse();
    init_logging(cli.debug);
    handlers::csv(cli)
}
