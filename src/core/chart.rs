//! Declarative chart document handed to the external plotting library.
//!
//! Field names and order mirror the JSON the renderer expects; nothing here is
//! computed from the data except `x` and `name`.

use serde::Serialize;

use crate::core::{
    constants::{BOX_LINE_COLOR, BOX_WIDTH, TIME_AXIS_TITLE},
    record::BenchmarkRecord,
};

/// The whole output: one box per selected run plus the fixed layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartDocument {
    pub data: Vec<BoxSeries>,
    pub layout: Layout,
}

impl ChartDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: BenchmarkRecord) {
        self.data.push(record.into());
    }

    /// Compact JSON, the exact byte layout consumers diff against.
    ///
    /// # Errors
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// # Errors
    /// Propagates `serde_json` failures.
    pub fn to_json_pretty(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
    }
}

/// A single horizontal box-and-whisker trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSeries {
    pub x: Vec<i64>,
    pub line: Line,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub name: String,
    pub orientation: Orientation,
    pub width: f64,
}

impl From<BenchmarkRecord> for BoxSeries {
    fn from(r: BenchmarkRecord) -> Self {
        Self {
            x: r.timings,
            line: Line {
                color: BOX_LINE_COLOR,
            },
            kind: SeriesKind::Box,
            name: r.name,
            orientation: Orientation::Horizontal,
            width: BOX_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Line {
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Box,
}

/// Category axis carries the run names, numeric axis carries time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
}

// --- Layout ---
/// Input-independent axis and legend settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub showlegend: bool,
    pub xaxis: TimeAxis,
    pub yaxis: CategoryAxis,
    pub autosize: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            showlegend: false,
            xaxis: TimeAxis {
                title: AxisTitle {
                    text: TIME_AXIS_TITLE,
                },
                kind: AxisType::Linear,
            },
            yaxis: CategoryAxis {
                kind: AxisType::Category,
            },
            autosize: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeAxis {
    pub title: AxisTitle,
    #[serde(rename = "type")]
    pub kind: AxisType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryAxis {
    #[serde(rename = "type")]
    pub kind: AxisType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisTitle {
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Linear,
    Category,
}
