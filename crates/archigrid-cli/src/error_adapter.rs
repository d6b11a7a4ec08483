//! Error adapter for converting ArchigridError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt::{self, Write as _};

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan,
    SourceSpan,
};

use archigrid::ArchigridError;

/// Adapter for [`ArchigridError`], pointing parse errors at their source.
pub struct ErrorAdapter<'a>(pub &'a ArchigridError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ArchigridError::Io(_) => "archigrid::io",
            ArchigridError::Parse { .. } => "archigrid::parse",
            ArchigridError::DuplicateObject(_) => "archigrid::duplicate",
            ArchigridError::Config(_) => "archigrid::config",
            ArchigridError::Serialize(_) => "archigrid::serialize",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ArchigridError::DuplicateObject(_) => Some(Box::new(
                "every object in the diagram tree needs its own identifier",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match &self.0 {
            ArchigridError::Parse { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match &self.0 {
            ArchigridError::Parse {
                span: Some(span), ..
            } => {
                let span = SourceSpan::new(span.start.into(), span.len());
                Some(Box::new(std::iter::once(
                    LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
                )))
            }
            _ => None,
        }
    }
}

/// Convert an [`ArchigridError`] into a list of reportable errors.
///
/// Every error maps to exactly one report today; the list keeps the
/// rendering loop in [`render_reports`] independent of that.
pub fn to_reportables(err: &ArchigridError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}

/// Renders every report of `err` as plain text for the terminal.
///
/// A report the graphical handler cannot render falls back to its message.
pub fn render_reports(err: &ArchigridError) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();

    for reportable in to_reportables(err) {
        let mut report = String::new();
        match handler.render_report(&mut report, &reportable) {
            Ok(()) => out.push_str(&report),
            Err(_) => {
                let _ = writeln!(out, "Error: {reportable}");
            }
        }
    }

    out
}
