//! A collection of constants.

/// Splits the run name from its timing list.
pub const FIELD_SEPARATOR: char = ',';
/// Splits individual timings.
pub const TIMING_SEPARATOR: char = ';';

/// Path meaning stdin for the input and stdout for the output
pub const STDIO_PATH: &str = "-";

/// Stroke colour of every box
pub const BOX_LINE_COLOR: &str = "#2980b9";
/// Box thickness relative to its category slot
pub const BOX_WIDTH: f64 = 0.15;

/// Title of the numeric (time) axis
pub const TIME_AXIS_TITLE: &str = "Time (ms)";
