//! The read → select → serialize → write pass.

use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader, Write},
    path::Path,
    time::Instant,
};

use tempfile::NamedTempFile;
use tracing::{Level, debug, enabled, info, trace};

use crate::core::{
    chart::ChartDocument,
    config::ConvertParams,
    constants::STDIO_PATH,
    error::ConvertError,
    record::{RecordError, read_records},
    selector::RunSelector,
};

const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Streams records from `src` and keeps the selected ones, in input order.
///
/// Every line is parsed, selected or not, so one bad line anywhere fails the
/// whole chart. Duplicate names each get their own box.
///
/// # Errors
/// The first [`RecordError`] produced by the record stream.
pub fn build_chart<R: BufRead>(
    src: R,
    selector: &RunSelector,
) -> Result<ChartDocument, RecordError> {
    let mut chart = ChartDocument::new();
    for record in read_records(src) {
        let record = record?;
        if !selector.contains(&record.name) {
            trace!(name = %record.name, "run not selected");
            continue;
        }
        if enabled!(Level::DEBUG) && chart.data.iter().any(|s| s.name == record.name) {
            debug!(name = %record.name, "run appears more than once");
        }
        chart.push(record);
    }
    Ok(chart)
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    if is_stdio(path) {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::with_capacity(BUF_CAP, File::open(path)?)))
    }
}

/// Writes into a temp file next to `path`, then renames it over `path`.
/// On any failure the temp file is removed and `path` keeps its old content.
fn write_atomic(
    path: &Path,
    write: impl FnOnce(&mut File) -> io::Result<()>,
) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    // temp files are created owner-only
    match fs::metadata(path) {
        Ok(meta) => tmp.as_file().set_permissions(meta.permissions())?,
        Err(_) => default_permissions(tmp.as_file())?,
    }
    write(tmp.as_file_mut())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(unix)]
fn default_permissions(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(_: &File) -> io::Result<()> {
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if is_stdio(path) {
        let mut out = io::stdout().lock();
        out.write_all(bytes)?;
        out.flush()
    } else {
        write_atomic(path, |f| f.write_all(bytes))
    }
}

/// Runs one full conversion and returns the document that was written.
///
/// Nothing is written unless the whole input parsed.
///
/// # Errors
/// [`ConvertError::Io`] when the input cannot be read or the output cannot be
/// written, [`ConvertError::Malformed`] on the first bad input line.
pub fn convert(params: &ConvertParams) -> Result<ChartDocument, ConvertError> {
    let t_ingest = Instant::now();
    let input_err = |source| ConvertError::Io {
        path: params.input.clone(),
        source,
    };

    let src = open_input(&params.input).map_err(input_err)?;
    let chart = build_chart(src, &params.selector).map_err(|e| match e {
        RecordError::Io { source, .. } => input_err(source),
        RecordError::Malformed(source) => ConvertError::Malformed {
            path: params.input.clone(),
            source,
        },
    })?;
    debug!(
        input = %params.input.display(),
        selected = chart.data.len(),
        requested = params.selector.len(),
        elapsed = ?t_ingest.elapsed(),
        "ingested benchmark records"
    );

    let bytes = if params.pretty {
        chart.to_json_pretty()?
    } else {
        chart.to_json()?
    };
    write_output(&params.output, &bytes).map_err(|source| ConvertError::Io {
        path: params.output.clone(),
        source,
    })?;
    info!(
        output = %params.output.display(),
        series = chart.data.len(),
        "chart written"
    );
    Ok(chart)
}
