//! Terminal rendering of [`Diagnostic`]s through `ariadne`.

use std::io;
use std::ops::Range;

use ariadne::{Color, Config, Label as ReportLabel, Report, ReportKind, Source};
use jam_ir::Span;

use crate::{Diagnostic, Severity};

/// `ariadne` span: file name plus character range.
type SourceSpan<'a> = (&'a str, Range<usize>);

/// Write a full source-annotated report for `diag` into `out`.
pub fn write_report<W: io::Write>(
    diag: &Diagnostic,
    file: &str,
    source: &str,
    colors: bool,
    out: W,
) -> io::Result<()> {
    let kind = match diag.severity {
        Severity::Error => ReportKind::Error,
    };
    let offset = diag
        .primary_span()
        .map_or(0, |span| char_index(source, span.start as usize));

    let mut report = Report::<SourceSpan<'_>>::build(kind, file, offset)
        .with_code(diag.code.as_str())
        .with_message(&diag.message)
        .with_config(Config::default().with_color(colors));

    for label in &diag.labels {
        let color = if label.is_primary {
            Color::Red
        } else {
            Color::Blue
        };
        report = report.with_label(
            ReportLabel::new((file, char_range(source, label.span)))
                .with_message(&label.message)
                .with_color(color),
        );
    }
    if !diag.notes.is_empty() {
        report = report.with_note(diag.notes.join("\n"));
    }

    report.finish().write((file, Source::from(source)), out)
}

/// Render `diag` to a string.
///
/// Falls back to the one-line form if the report cannot be laid out.
pub fn render(diag: &Diagnostic, file: &str, source: &str, colors: bool) -> String {
    let mut buf = Vec::new();
    match write_report(diag, file, source, colors, &mut buf) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => format!("{diag}\n"),
    }
}

/// Print `diag` on stderr.
pub fn emit(diag: &Diagnostic, file: &str, source: &str, colors: bool) {
    if write_report(diag, file, source, colors, io::stderr()).is_err() {
        eprintln!("{diag}");
    }
}

/// `ariadne` indexes by character, our spans by byte.
fn char_index(source: &str, byte: usize) -> usize {
    let byte = byte.min(source.len());
    source
        .char_indices()
        .take_while(|(index, _)| *index < byte)
        .count()
}

fn char_range(source: &str, span: Span) -> Range<usize> {
    let start = char_index(source, span.start as usize);
    let end = char_index(source, span.end as usize).max(start);
    start..end
}

#[cfg(test)]
mod tests;
