use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use tkt_core::{PipelineSummary, ProcessingOptions, UnusedCountPolicy, process};
use tkt_ingest::{read_records, write_json, write_output};
use tkt_model::Diagnostics;

use crate::cli::RunArgs;
use crate::report::DiagnosticsReport;
use crate::types::RunResult;

pub fn run(args: &RunArgs) -> Result<RunResult> {
    let run_span = info_span!(
        "run",
        orders = %args.orders.display(),
        barcodes = %args.barcodes.display()
    );
    let _run_guard = run_span.enter();

    let orders = read_records(&args.orders)
        .with_context(|| format!("read orders: {}", args.orders.display()))?;
    let barcodes = read_records(&args.barcodes)
        .with_context(|| format!("read barcodes: {}", args.barcodes.display()))?;
    info!(
        orders = orders.len(),
        barcodes = barcodes.len(),
        "read {} orders and {} barcodes",
        orders.len(),
        barcodes.len()
    );

    let options = processing_options(args);
    let output = process(&orders, &barcodes, &options).context("process orders and barcodes")?;
    log_rejections(&output.diagnostics);
    let summary = output.summary();
    log_totals(&summary);

    let rows = output.output_rows();
    let output_path = if args.dry_run {
        info!(rows = rows.len(), "dry run: output not written");
        None
    } else {
        write_output(&args.output, &rows)
            .with_context(|| format!("write output: {}", args.output.display()))?;
        info!(rows = rows.len(), "output written to {}", args.output.display());
        Some(args.output.clone())
    };

    let diagnostics_path = match &args.diagnostics_json {
        Some(path) => {
            let report = DiagnosticsReport::new(
                &args.orders,
                &args.barcodes,
                &summary,
                output.diagnostics.as_slice(),
            );
            write_json(path, &report)
                .with_context(|| format!("write diagnostics: {}", path.display()))?;
            info!("diagnostics written to {}", path.display());
            Some(path.clone())
        }
        None => None,
    };

    Ok(RunResult {
        summary,
        customers: output.result.customers,
        rows: rows.len(),
        output_path,
        diagnostics_path,
    })
}

fn processing_options(args: &RunArgs) -> ProcessingOptions {
    let policy = if args.strict_unused {
        UnusedCountPolicy::Strict
    } else {
        UnusedCountPolicy::Clamp
    };
    ProcessingOptions::new()
        .with_top_n(args.top)
        .with_unused_policy(policy)
}

/// Renders each rejected record as one warning line.
fn log_rejections(diagnostics: &Diagnostics) {
    for rejection in diagnostics {
        warn!(
            kind = rejection.kind.as_str(),
            row = rejection.row,
            "{}: {}",
            rejection.kind,
            rejection.detail
        );
    }
}

/// Totals are logged before the write so they survive a failed write.
fn log_totals(summary: &PipelineSummary) {
    info!(
        customers = summary.customer_count,
        orders_with_barcodes = summary.order_count,
        unused_barcodes = summary.unused_barcode_count,
        duplicate_barcodes = summary.duplicate_barcode_count,
        "processed {} customers",
        summary.customer_count
    );
}
