use thiserror::Error;

/// Failures that abort a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// More distinct duplicate barcodes than unattached barcodes under the strict policy.
    #[error(
        "unused barcode count underflow: {duplicates} duplicate barcodes exceed {unused} unattached barcodes"
    )]
    UnusedCountUnderflow { unused: usize, duplicates: usize },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
