use std::io::Write;
use std::path::Path;

use crate::analyzer::AnalysisResult;
use crate::output::{ErrorOutput, JsonExporter, OutputFormatter, TextReporter};

/// Orders results by id, then path, for reproducible output.
pub fn sort_results(results: &mut [AnalysisResult]) {
    results.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.path.cmp(&b.path)));
}

/// One-line log entry for a finished check (verbose mode).
#[must_use]
pub fn format_check_log(result: &AnalysisResult) -> String {
    format!(
        "[{}] {} {} ({})",
        result.id,
        result.status,
        result.path.display(),
        result.message
    )
}

/// Writes the per-result report blocks.
pub fn write_report<W: Write>(
    out: &mut W,
    reporter: &TextReporter,
    results: &[AnalysisResult],
) -> crate::Result<()> {
    writeln!(out)?;
    out.write_all(reporter.format(results)?.as_bytes())?;
    Ok(())
}

/// Exports the report, downgrading failures to a warning.
///
/// Returns whether the file was written.
pub fn export_report<W: Write>(
    out: &mut W,
    results: &[AnalysisResult],
    path: &Path,
    diagnostics: &ErrorOutput,
    quiet: bool,
) -> crate::Result<bool> {
    match JsonExporter.export(results, path) {
        Ok(()) => {
            if !quiet {
                writeln!(out, "Results exported to: {}", path.display())?;
            }
            Ok(true)
        }
        Err(e) => {
            diagnostics.print_warning(&e.message(), e.detail().as_deref());
            Ok(false)
        }
    }
}
