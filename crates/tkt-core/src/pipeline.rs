//! The four-stage order/barcode pipeline.
//!
//! # Stage Order
//!
//! 1. **Order validation** - parse order rows, reject malformed ones
//! 2. **Barcode validation** - parse barcode rows, reject malformed ones and repeats
//! 3. **Reconciliation** - attach barcodes to orders, drop orders with none,
//!    group orders under customers
//! 4. **Analytics** - rank customers by tickets, count unused barcodes
//!
//! Each stage runs exactly once per call to [`process`]. Stage 3 needs the
//! complete barcode set before any order can be accepted or dropped.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, debug_span};

use tkt_model::{Diagnostics, OutputRow, ProcessedResult, RawRecord, RejectionKind, TopCustomer};
use tkt_validate::{validate_barcodes, validate_orders};

use crate::analytics::{count_unused_barcodes, top_customers};
use crate::error::Result;
use crate::options::ProcessingOptions;
use crate::reconcile::{
    group_barcodes_by_order, group_orders_by_customer, retain_orders_with_barcodes,
};

/// Everything a run produces.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    pub result: ProcessedResult,
    /// Distinct barcode values seen more than once in the input.
    pub duplicates: BTreeSet<String>,
    pub diagnostics: Diagnostics,
}

/// Headline figures of a run, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineSummary {
    pub customer_count: usize,
    pub order_count: usize,
    pub unused_barcode_count: usize,
    pub duplicate_barcode_count: usize,
    pub top_customers: Vec<TopCustomer>,
    pub rejections: BTreeMap<RejectionKind, usize>,
}

impl PipelineOutput {
    pub fn summary(&self) -> PipelineSummary {
        PipelineSummary {
            customer_count: self.result.customers.len(),
            order_count: self.result.order_count(),
            unused_barcode_count: self.result.unused_barcode_count,
            duplicate_barcode_count: self.duplicates.len(),
            top_customers: self.result.top_customers.clone(),
            rejections: RejectionKind::ALL
                .into_iter()
                .map(|kind| (kind, self.diagnostics.count(kind)))
                .collect(),
        }
    }

    pub fn output_rows(&self) -> Vec<OutputRow> {
        OutputRow::from_customers(&self.result.customers)
    }
}

/// Runs the full pipeline over already-loaded order and barcode rows.
///
/// Record-level problems end up in [`PipelineOutput::diagnostics`]; only
/// the strict unused-count policy can make this return an error.
pub fn process(
    orders: &[RawRecord],
    barcodes: &[RawRecord],
    options: &ProcessingOptions,
) -> Result<PipelineOutput> {
    let mut diagnostics = Diagnostics::new();

    let order_validation = debug_span!("validate_orders").in_scope(|| validate_orders(orders));
    diagnostics.extend(order_validation.rejections);

    let barcode_validation =
        debug_span!("validate_barcodes").in_scope(|| validate_barcodes(barcodes));
    diagnostics.extend(barcode_validation.rejections);
    let duplicates = barcode_validation.duplicates;
    let valid_barcodes = barcode_validation.barcodes;

    let customers = debug_span!("reconcile").in_scope(|| {
        let order_barcodes = group_barcodes_by_order(&valid_barcodes);
        let (kept, rejections) =
            retain_orders_with_barcodes(order_validation.orders, &order_barcodes);
        diagnostics.extend(rejections);
        group_orders_by_customer(&kept, &order_barcodes)
    });
    debug!(customers = customers.len(), "grouped orders by customer");

    let _analytics = debug_span!("analytics").entered();
    let top_customers = top_customers(&customers, options.top_n);
    let unused_barcode_count =
        count_unused_barcodes(&valid_barcodes, &duplicates, options.unused_policy)?;

    Ok(PipelineOutput {
        result: ProcessedResult {
            customers,
            top_customers,
            unused_barcode_count,
        },
        duplicates,
        diagnostics,
    })
}
