//! Reconciliation and analytics for validated orders and barcodes.

pub mod analytics;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod reconcile;

pub use analytics::{count_unused_barcodes, top_customers};
pub use error::{PipelineError, Result};
pub use options::{DEFAULT_TOP_N, ProcessingOptions, UnusedCountPolicy};
pub use pipeline::{PipelineOutput, PipelineSummary, process};
pub use reconcile::{
    OrderBarcodes, group_barcodes_by_order, group_orders_by_customer,
    retain_orders_with_barcodes,
};
