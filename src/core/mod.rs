//! Aggregates the “business logic” layer.

pub mod chart;
pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod record;
pub mod selector;

// re-export frequently-used items for convenience
pub use chart::{BoxSeries, ChartDocument, Layout};
pub use config::{ConvertParams, ConvertParamsBuilder};
pub use constants::{BOX_LINE_COLOR, BOX_WIDTH, STDIO_PATH, TIME_AXIS_TITLE};
pub use convert::{build_chart, convert};
pub use error::{ConfigError, ConvertError};
pub use record::{
    BenchmarkRecord, ParseErrorKind, ParseRecordError, RecordError, parse_line, read_records,
};
pub use selector::RunSelector;
