//! Streaming loader for the `name,t1;t2;...;tn` benchmark record format.

use std::{
    fmt::{self, Display},
    io::{self, BufRead},
    str::FromStr,
};

use thiserror::Error;
use tracing::trace;

use crate::core::constants::{FIELD_SEPARATOR, TIMING_SEPARATOR};

// --- Public Row Structs ---
/// One benchmark run: its name and every sample in the order it was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkRecord {
    pub name: String,
    pub timings: Vec<i64>,
}

/// Writes the record back exactly as the benchmark harness prints it,
/// without the line terminator.
impl Display for BenchmarkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{FIELD_SEPARATOR}", self.name)?;
        for (i, t) in self.timings.iter().enumerate() {
            if i > 0 {
                write!(f, "{TIMING_SEPARATOR}")?;
            }
            write!(f, "{t}")?;
        }
        Ok(())
    }
}

impl FromStr for BenchmarkRecord {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s, 1)
    }
}

// --- Error Handling ---
/// A line that does not follow the record format.
#[derive(Debug, Error)]
#[error("line {line}: {kind}: {content:?}")]
pub struct ParseRecordError {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
    #[error("missing `,` between name and timings")]
    MissingSeparator,
    #[error("more than one `,` on the line")]
    ExtraSeparator,
    #[error("invalid timing `{token}`")]
    BadTiming { token: String },
    #[error("blank line before the end of input")]
    BlankLine,
}

/// Anything that can stop the record stream.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("read failed after line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Malformed(#[from] ParseRecordError),
}

// --- Helpers ---
#[inline]
fn parse_timing(token: &str) -> Option<i64> {
    lexical_core::parse::<i64>(token.trim_ascii().as_bytes()).ok()
}

/// Parses one line (terminator already removed). Trailing whitespace is
/// ignored, the name is kept verbatim.
///
/// # Errors
/// Returns [`ParseRecordError`] when the line is blank, does not contain
/// exactly one field separator, or a timing is not a base-10 integer.
pub fn parse_line(line: &str, line_no: usize) -> Result<BenchmarkRecord, ParseRecordError> {
    let fail = |kind| ParseRecordError {
        line: line_no,
        content: line.to_owned(),
        kind,
    };

    let trimmed = line.trim_end();
    if trimmed.is_empty() {
        return Err(fail(ParseErrorKind::BlankLine));
    }
    let (name, times) = trimmed
        .split_once(FIELD_SEPARATOR)
        .ok_or_else(|| fail(ParseErrorKind::MissingSeparator))?;
    if times.contains(FIELD_SEPARATOR) {
        return Err(fail(ParseErrorKind::ExtraSeparator));
    }

    let timings = times
        .split(TIMING_SEPARATOR)
        .map(|token| {
            parse_timing(token).ok_or_else(|| {
                fail(ParseErrorKind::BadTiming {
                    token: token.to_owned(),
                })
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BenchmarkRecord {
        name: name.to_owned(),
        timings,
    })
}

// --- Streaming ingest ---
/// Lazily parses records from a buffered source. Stops after the first error.
///
/// Blank lines are only allowed at the end of the input; a blank line that
/// is followed by another record is reported as [`ParseErrorKind::BlankLine`].
pub struct Records<R> {
    src: R,
    buf: Vec<u8>,
    line_no: usize,
    pending_blank: Option<usize>,
    done: bool,
}

pub fn read_records<R: BufRead>(src: R) -> Records<R> {
    Records {
        src,
        buf: Vec::with_capacity(256),
        line_no: 0,
        pending_blank: None,
        done: false,
    }
}

impl<R> Records<R> {
    fn fail(
        &mut self,
        err: impl Into<RecordError>,
    ) -> Option<Result<BenchmarkRecord, RecordError>> {
        self.done = true;
        Some(Err(err.into()))
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<BenchmarkRecord, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            self.buf.clear();
            let n = match self.src.read_until(b'\n', &mut self.buf) {
                Ok(n) => n,
                Err(source) => {
                    let line = self.line_no;
                    return self.fail(RecordError::Io { line, source });
                }
            };
            if n == 0 {
                if let Some(first) = self.pending_blank {
                    trace!(first, last = self.line_no, "skipped trailing blank lines");
                }
                self.done = true;
                return None;
            }
            self.line_no += 1;

            if self.buf.ends_with(b"\n") {
                self.buf.pop();
            }
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }

            let Ok(line) = std::str::from_utf8(&self.buf) else {
                let err = ParseRecordError {
                    line: self.line_no,
                    content: String::from_utf8_lossy(&self.buf).into_owned(),
                    kind: ParseErrorKind::InvalidUtf8,
                };
                return self.fail(err);
            };

            if line.trim_end().is_empty() {
                self.pending_blank.get_or_insert(self.line_no);
                continue;
            }
            if let Some(blank) = self.pending_blank {
                let err = ParseRecordError {
                    line: blank,
                    content: String::new(),
                    kind: ParseErrorKind::BlankLine,
                };
                return self.fail(err);
            }

            return match parse_line(line, self.line_no) {
                Ok(record) => Some(Ok(record)),
                Err(err) => self.fail(err),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Result<Vec<BenchmarkRecord>, RecordError> {
        read_records(input.as_bytes()).collect()
    }

    fn malformed(input: &str) -> ParseRecordError {
        match collect(input) {
            Err(RecordError::Malformed(e)) => e,
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn parses_name_and_timings_in_order() {
        let r = parse_line("run_a,10;20;30", 1).unwrap();
        assert_eq!(r.name, "run_a");
        assert_eq!(r.timings, vec![10, 20, 30]);
    }

    #[test]
    fn single_timing_and_negative_values() {
        assert_eq!(parse_line("x,7", 1).unwrap().timings, vec![7]);
        assert_eq!(parse_line("x,-3;4", 1).unwrap().timings, vec![-3, 4]);
    }

    #[test]
    fn strips_crlf_and_trailing_whitespace() {
        let recs = collect("a,1;2\r\nb,3  \n").unwrap();
        assert_eq!(recs[0].timings, vec![1, 2]);
        assert_eq!(recs[1].timings, vec![3]);
    }

    #[test]
    fn name_is_kept_verbatim() {
        let r = parse_line(" spaced name ,1", 1).unwrap();
        assert_eq!(r.name, " spaced name ");
    }

    #[test]
    fn tolerates_padding_around_timings() {
        assert_eq!(parse_line("a, 1 ; 2", 1).unwrap().timings, vec![1, 2]);
    }

    #[test]
    fn non_numeric_timing_is_rejected_with_location() {
        let err = malformed("run_a,1;2\nrun_b,10;abc;30\n");
        assert_eq!(err.line, 2);
        assert_eq!(err.content, "run_b,10;abc;30");
        assert_eq!(
            err.kind,
            ParseErrorKind::BadTiming {
                token: "abc".into()
            }
        );
    }

    #[test]
    fn empty_timing_list_and_empty_token_are_rejected() {
        assert!(matches!(
            parse_line("a,", 1).unwrap_err().kind,
            ParseErrorKind::BadTiming { .. }
        ));
        assert!(matches!(
            parse_line("a,1;;2", 1).unwrap_err().kind,
            ParseErrorKind::BadTiming { .. }
        ));
    }

    #[test]
    fn digit_separators_are_not_accepted() {
        assert_eq!(
            parse_line("b,1_000", 1).unwrap_err().kind,
            ParseErrorKind::BadTiming {
                token: "1_000".into()
            }
        );
    }

    #[test]
    fn separator_count_must_be_exactly_one() {
        assert_eq!(
            parse_line("no separator", 4).unwrap_err().kind,
            ParseErrorKind::MissingSeparator
        );
        assert_eq!(
            parse_line("a,b,1;2", 4).unwrap_err().kind,
            ParseErrorKind::ExtraSeparator
        );
    }

    #[test]
    fn trailing_blank_lines_are_skipped() {
        let recs = collect("a,1\nb,2\n\n  \n\r\n").unwrap();
        assert_eq!(recs.len(), 2);
        assert!(collect("").unwrap().is_empty());
        assert!(collect("\n").unwrap().is_empty());
    }

    #[test]
    fn interior_blank_line_is_rejected() {
        let err = malformed("a,1\n\nb,2\n");
        assert_eq!(err.line, 2);
        assert_eq!(err.kind, ParseErrorKind::BlankLine);
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let recs: Result<Vec<_>, _> = read_records(&b"a,1\n\xff\xfe,2\n"[..]).collect();
        match recs {
            Err(RecordError::Malformed(e)) => {
                assert_eq!(e.line, 2);
                assert_eq!(e.kind, ParseErrorKind::InvalidUtf8);
            }
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn stream_stops_after_first_error() {
        let mut it = read_records(&b"bad\na,1\n"[..]);
        assert!(it.next().unwrap().is_err());
        assert!(it.next().is_none());
    }

    #[test]
    fn display_writes_harness_format() {
        let r = BenchmarkRecord {
            name: "fnptr".into(),
            timings: vec![12, 11, 13],
        };
        assert_eq!(r.to_string(), "fnptr,12;11;13");
        assert_eq!(r.to_string().parse::<BenchmarkRecord>().unwrap(), r);
    }

    #[test]
    fn error_message_names_line_and_content() {
        let err = parse_line("run_b,10;abc;30", 7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 7: invalid timing `abc`: \"run_b,10;abc;30\""
        );
    }
}
