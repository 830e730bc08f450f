//! Conversion parameters + fluent builder.

use std::path::PathBuf;

use crate::core::{error::ConfigError, selector::RunSelector};

/// Everything one conversion needs. `-` as a path means stdin / stdout.
#[derive(Debug, Clone)]
pub struct ConvertParams {
    pub input: PathBuf,
    pub output: PathBuf,
    pub selector: RunSelector,
    pub pretty: bool,
}

impl ConvertParams {
    #[inline]
    #[must_use]
    pub fn builder() -> ConvertParamsBuilder {
        ConvertParamsBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ConvertParamsBuilder {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    selector: RunSelector,
    pretty: bool,
}

impl ConvertParamsBuilder {
    #[inline]
    #[must_use]
    pub fn input(mut self, p: impl Into<PathBuf>) -> Self {
        self.input = Some(p.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn output(mut self, p: impl Into<PathBuf>) -> Self {
        self.output = Some(p.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn run(mut self, name: impl Into<String>) -> Self {
        self.selector.insert(name);
        self
    }
    #[inline]
    #[must_use]
    pub fn runs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selector.extend(names);
        self
    }
    #[inline]
    #[must_use]
    pub fn pretty(mut self, on: bool) -> Self {
        self.pretty = on;
        self
    }

    /// # Errors
    /// [`ConfigError::MissingField`] when no input or output path was given.
    pub fn build(self) -> Result<ConvertParams, ConfigError> {
        let input = self.input.ok_or(ConfigError::MissingField("input"))?;
        let output = self.output.ok_or(ConfigError::MissingField("output"))?;
        Ok(ConvertParams {
            input,
            output,
            selector: self.selector,
            pretty: self.pretty,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConvertParamsBuilder> for Result<ConvertParams, ConfigError> {
    fn from(b: ConvertParamsBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_paths_and_runs() {
        let p = ConvertParams::builder()
            .input("bench.csv")
            .output("chart.json")
            .run("baseline")
            .runs(["candidate", "baseline"])
            .build()
            .unwrap();
        assert_eq!(p.input, PathBuf::from("bench.csv"));
        assert_eq!(p.output, PathBuf::from("chart.json"));
        assert_eq!(p.selector.len(), 2);
        assert!(!p.pretty);
    }

    #[test]
    fn missing_paths_are_reported() {
        let err = ConvertParams::builder().output("o").build().unwrap_err();
        assert_eq!(err, ConfigError::MissingField("input"));
        let err = ConvertParams::builder().input("i").build().unwrap_err();
        assert_eq!(err, ConfigError::MissingField("output"));
    }

    #[test]
    fn no_runs_is_valid() {
        let p: Result<ConvertParams, ConfigError> =
            ConvertParams::builder().input("i").output("o").into();
        assert!(p.unwrap().selector.is_empty());
    }
}
