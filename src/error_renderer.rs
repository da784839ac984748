//! Error rendering using ariadne
//!
//! Parse errors are drawn against the offending line with the failing span
//! underlined.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
///
/// # Example
/// ```
/// use lispy::{Engine, EngineOptions, render_error_to_string};
///
/// let engine = Engine::new(EngineOptions::default());
/// if let Err(e) = engine.run("(+ 1 2") {
///     let formatted = render_error_to_string(&e);
///     assert!(!formatted.is_empty());
/// }
/// ```
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Parse { diagnostic, source } => {
            render_diagnostic(source, diagnostic, writer, use_color)
        }
    }
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let kind = match diag.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Info => ReportKind::Advice,
    };

    let span = diag.span.0.clone();
    let mut report = Report::build(kind, (SOURCE_ID, span.clone()))
        .with_message(&diag.message)
        .with_config(ariadne::Config::default().with_color(use_color));

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    let color = colors.next();
    report = report.with_label(
        Label::new((SOURCE_ID, span))
            .with_message(&diag.message)
            .with_color(color),
    );

    if let Some(help) = &diag.help {
        report = report.with_help(help);
    }

    // Render to the writer (need to reborrow to avoid moving)
    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Engine, EngineOptions};

    #[test]
    fn test_render_unclosed_paren() {
        let engine = Engine::new(EngineOptions::default());

        let source = "(+ 1 (* 2 3)";
        let result = engine.run(source);

        assert!(result.is_err());
        if let Err(e) = result {
            let output = render_error_to_string_no_color(&e);

            assert!(output.contains("Error") || output.contains("error"));
            assert!(output.contains("Unclosed delimiter"));
            assert!(output.contains("(+ 1 (* 2 3)"));
        }
    }

    #[test]
    fn test_render_unexpected_token() {
        let engine = Engine::new(EngineOptions::default());

        let result = engine.run("(+ 1 %)");

        assert!(result.is_err());
        if let Err(e) = result {
            let output = render_error_to_string_no_color(&e);

            assert!(output.contains("Expected"));
            assert!(output.contains("P001"));
        }
    }

    #[test]
    fn test_render_to_string_captures_output() {
        let engine = Engine::new(EngineOptions::default());

        let result = engine.run("1 2 )");

        assert!(result.is_err());
        if let Err(e) = result {
            let output = render_error_to_string_no_color(&e);

            assert!(!output.is_empty());
            // Should be multi-line (ariadne adds formatting)
            assert!(output.lines().count() > 1);
        }
    }
}
