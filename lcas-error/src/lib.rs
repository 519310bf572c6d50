//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

// allows `#[derive(ErrorKind)]` to refer to this crate by name inside its own tests
extern crate self as lcas_error;

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to stderr, highlighting the given source code.
    ///
    /// The `ariadne` crate's [`Report`] type does not implement `Display`, so the report can only
    /// be printed through its `eprint` / `write` methods.
    pub fn report_to_stderr(&self, src_id: &str, source: &str) {
        let report = self.build_report(src_id);
        if let Err(err) = report.eprint((src_id, Source::from(source))) {
            eprintln!("{}", err);
        }
    }

    /// Renders the report for this error into a [`String`], highlighting the given source code.
    pub fn report_to_string(&self, src_id: &str, source: &str) -> String {
        let mut buf = Vec::new();
        let report = self.build_report(src_id);
        match report.write((src_id, Source::from(source)), &mut buf) {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(err) => err.to_string(),
        }
    }
}
