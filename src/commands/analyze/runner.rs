use std::io::Write;

use crate::analyzer::AnalysisResult;
use crate::cli::{AnalyzeArgs, Cli};
use crate::dispatcher::ConcurrencyLimit;
use crate::error::LogCheckError;
use crate::output::{AnalysisProgress, ErrorOutput, TextReporter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::analyze_output::{export_report, format_check_log, sort_results, write_report};
use crate::commands::context::{AnalyzeContext, color_choice_to_mode};

#[must_use]
pub fn run_analyze(args: &AnalyzeArgs, cli: &Cli) -> i32 {
    let ctx = AnalyzeContext::from_args(args);
    let mut stdout = std::io::stdout().lock();
    run_analyze_with_context(args, cli, &ctx, &mut stdout)
}

/// Internal implementation accepting injectable context and output (for testing).
///
/// Check-list errors are printed to stderr and mapped to `EXIT_CONFIG_ERROR`.
/// Failures writing the report afterwards are warnings; the run still exits 0.
pub fn run_analyze_with_context<W: Write>(
    args: &AnalyzeArgs,
    cli: &Cli,
    ctx: &AnalyzeContext,
    out: &mut W,
) -> i32 {
    let color_mode = color_choice_to_mode(cli.color);
    let diagnostics = ErrorOutput::new(color_mode);

    match analyze_impl(args, cli, ctx, out, &diagnostics) {
        Ok(exit_code) => exit_code,
        Err(e) if e.is_config_error() => {
            diagnostics.print_error(
                e.error_type(),
                &e.message(),
                e.detail().as_deref(),
                e.suggestion(),
            );
            EXIT_CONFIG_ERROR
        }
        // Report output is best effort once the checks have run.
        Err(e) => {
            if !is_broken_pipe(&e) {
                diagnostics.print_warning(&e.message(), e.detail().as_deref());
            }
            EXIT_SUCCESS
        }
    }
}

fn is_broken_pipe(error: &LogCheckError) -> bool {
    matches!(error, LogCheckError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
}

fn analyze_impl<W: Write>(
    args: &AnalyzeArgs,
    cli: &Cli,
    ctx: &AnalyzeContext,
    out: &mut W,
    diagnostics: &ErrorOutput,
) -> crate::Result<i32> {
    // 1. Load the check list; any error aborts before dispatch
    let descriptors = ctx.loader.load_from_path(&args.config)?;
    let total = descriptors.len();

    if cli.verbose >= 2 {
        diagnostics.print_info(&format!(
            "Loaded {total} checks from {}",
            args.config.display()
        ));
        let workers = match ctx.dispatcher.limit() {
            ConcurrencyLimit::Unbounded => "unbounded".to_string(),
            ConcurrencyLimit::Max(max) => format!("at most {max}"),
        };
        diagnostics.print_info(&format!("Worker pool: {workers}"));
    }

    if !cli.quiet {
        writeln!(out, "Starting analysis of {total} log files...")?;
    }

    // 2. Fan out one check per descriptor and wait for all of them
    let progress = AnalysisProgress::new(total as u64, cli.quiet);
    let verbose = cli.verbose;
    let on_complete = |result: &AnalysisResult| {
        if verbose >= 1 {
            progress.suspend(|| diagnostics.print_info(&format_check_log(result)));
        }
        progress.inc();
    };
    let mut results = ctx.dispatcher.dispatch_with(descriptors, &on_complete);
    progress.finish();

    if args.sort {
        sort_results(&mut results);
    }

    // 3. Report
    let reporter = TextReporter::new(color_choice_to_mode(cli.color));
    if !cli.quiet {
        write_report(out, &reporter, &results)?;
    }

    // 4. Export (failure is a warning, never fatal)
    if let Some(ref output_path) = args.output {
        export_report(out, &results, output_path, diagnostics, cli.quiet)?;
    }

    // 5. Summary
    out.write_all(reporter.format_summary(&results).as_bytes())?;

    Ok(EXIT_SUCCESS)
}
