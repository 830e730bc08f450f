use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "bench-chart",
    version,
    about = "Turn benchmark timings into a horizontal box-chart JSON document"
)]
pub struct Cli {
    /// Benchmark CSV path (use `-` for stdin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Chart JSON path (use `-` for stdout)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Runs to put on the chart; none gives an empty chart
    #[arg(value_name = "RUN")]
    pub runs: Vec<String>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Emit diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}
