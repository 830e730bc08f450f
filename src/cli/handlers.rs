use std::collections::HashSet;

use tracing::debug;

use crate::core::{
    chart::ChartDocument, config::ConvertParams, convert::convert, error::ConvertError,
    selector::RunSelector,
};

use super::parse::Cli;

/// Requested runs with no box in the chart, sorted.
fn missing_runs<'a>(chart: &ChartDocument, selector: &'a RunSelector) -> Vec<&'a str> {
    let found: HashSet<&str> = chart.data.iter().map(|s| s.name.as_str()).collect();
    let mut missing: Vec<_> = selector.iter().filter(|n| !found.contains(n)).collect();
    missing.sort_unstable();
    missing
}

pub fn csv(a: Cli) -> Result<(), ConvertError> {
    let params = ConvertParams::builder()
        .input(a.input)
        .output(a.output)
        .runs(a.runs)
        .pretty(a.pretty)
        .build()?;
    debug!(?params, "converting");

    let chart = convert(&params)?;
    let missing = missing_runs(&chart, &params.selector);
    if !missing.is_empty() {
        debug!(?missing, "some requested runs were not in the input");
    }
    Ok(())
}
