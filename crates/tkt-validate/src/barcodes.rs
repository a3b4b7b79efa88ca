use std::collections::BTreeSet;

use tracing::debug;

use tkt_model::{Barcode, RawRecord, Rejection, RejectionKind};

/// Outcome of barcode validation.
///
/// `duplicates` holds every well-formed barcode value that appeared more
/// than once. It is created fresh per call and handed on to analytics.
#[derive(Debug, Clone, Default)]
pub struct BarcodeValidation {
    pub barcodes: Vec<Barcode>,
    pub duplicates: BTreeSet<String>,
    pub rejections: Vec<Rejection>,
}

/// Validates barcode rows in order.
///
/// The first occurrence of a value is kept; later occurrences are rejected
/// as duplicates even if they point at a different order. Malformed rows
/// never take part in duplicate tracking.
pub fn validate_barcodes(records: &[RawRecord]) -> BarcodeValidation {
    let mut validation = BarcodeValidation::default();
    let mut seen = BTreeSet::new();
    for (idx, record) in records.iter().enumerate() {
        let row = Some(idx + 1);
        let barcode = match Barcode::from_record(record) {
            Ok(barcode) => barcode,
            Err(error) => {
                validation.rejections.push(Rejection::new(
                    RejectionKind::InvalidBarcodeData,
                    row,
                    format!("invalid barcode data: {error}"),
                ));
                continue;
            }
        };
        if seen.insert(barcode.barcode.clone()) {
            validation.barcodes.push(barcode);
        } else {
            validation.rejections.push(Rejection::new(
                RejectionKind::DuplicateBarcode,
                row,
                format!("duplicate barcode found: {}", barcode.barcode),
            ));
            validation.duplicates.insert(barcode.barcode);
        }
    }
    debug!(
        valid = validation.barcodes.len(),
        duplicates = validation.duplicates.len(),
        rejected = validation.rejections.len(),
        "validated barcodes"
    );
    validation
}
