use std::path::PathBuf;

use tkt_core::PipelineSummary;
use tkt_model::Customer;

#[derive(Debug)]
pub struct RunResult {
    pub summary: PipelineSummary,
    pub customers: Vec<Customer>,
    pub rows: usize,
    /// `None` on a dry run.
    pub output_path: Option<PathBuf>,
    pub diagnostics_path: Option<PathBuf>,
}
