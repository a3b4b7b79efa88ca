//! JSON diagnostics report written by `--diagnostics-json`.

use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use tkt_core::PipelineSummary;
use tkt_model::Rejection;

const REPORT_SCHEMA: &str = "tkt.diagnostics";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct DiagnosticsReport<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub orders_source: String,
    pub barcodes_source: String,
    pub summary: &'a PipelineSummary,
    pub rejections: &'a [Rejection],
}

impl<'a> DiagnosticsReport<'a> {
    pub fn new(
        orders_source: &Path,
        barcodes_source: &Path,
        summary: &'a PipelineSummary,
        rejections: &'a [Rejection],
    ) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            orders_source: orders_source.display().to_string(),
            barcodes_source: barcodes_source.display().to_string(),
            summary,
            rejections,
        }
    }
}
