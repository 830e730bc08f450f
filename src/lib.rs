//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;

use std::path::PathBuf;

pub use crate::core::{
    chart::{BoxSeries, ChartDocument, Layout},
    config::{ConvertParams, ConvertParamsBuilder},
    convert::{build_chart, convert},
    error::{ConfigError, ConvertError},
    record::{
        BenchmarkRecord, ParseErrorKind, ParseRecordError, RecordError, parse_line, read_records,
    },
    selector::RunSelector,
};

/// Convenience wrapper: convert `input` into a compact chart at `output`,
/// keeping only the runs named in `runs`.
///
/// # Errors
/// Same as [`convert`].
pub fn convert_files<I, S>(
    input: impl Into<PathBuf>,
    output: impl Into<PathBuf>,
    runs: I,
) -> Result<ChartDocument, ConvertError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let params = ConvertParams::builder()
        .input(input)
        .output(output)
        .runs(runs)
        .build()?;
    convert(&params)
}
