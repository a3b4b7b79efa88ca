//! Record-level validation for order and barcode tables.
//!
//! Validation is one pass and never fails fast: each record is either turned
//! into an entity or reported as a [`tkt_model::Rejection`] and skipped.
//! Callers decide how rejections are rendered.

mod barcodes;
mod orders;

pub use barcodes::{BarcodeValidation, validate_barcodes};
pub use orders::{OrderValidation, validate_orders};
