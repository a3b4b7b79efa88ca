pub mod entities;
pub mod error;
pub mod record;
pub mod rejection;

pub use entities::{
    BARCODE_LENGTH, BARCODE_SEPARATOR, Barcode, Customer, CustomerOrder, Order, OutputRow,
    ProcessedResult, TopCustomer, is_valid_barcode,
};
pub use error::{RecordError, Result};
pub use record::RawRecord;
pub use rejection::{Diagnostics, Rejection, RejectionKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_count_by_kind() {
        let diagnostics: Diagnostics = [
            Rejection::new(RejectionKind::DuplicateBarcode, Some(3), "dup"),
            Rejection::new(RejectionKind::DuplicateBarcode, Some(5), "dup"),
            Rejection::new(RejectionKind::OrderWithoutBarcodes, None, "order 7"),
        ]
        .into_iter()
        .collect();
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics.count(RejectionKind::DuplicateBarcode), 2);
        assert_eq!(diagnostics.count(RejectionKind::OrderWithoutBarcodes), 1);
        assert_eq!(diagnostics.count(RejectionKind::InvalidOrderData), 0);
    }

    #[test]
    fn rejection_display_includes_kind_and_row() {
        let rejection = Rejection::new(
            RejectionKind::InvalidOrderData,
            Some(4),
            "invalid order data: empty order_id",
        );
        assert_eq!(
            rejection.to_string(),
            "InvalidOrderData: invalid order data: empty order_id (row 4)"
        );
        let rejection = Rejection::new(RejectionKind::OrderWithoutBarcodes, None, "order 9");
        assert_eq!(rejection.to_string(), "OrderWithoutBarcodes: order 9");
    }

    #[test]
    fn processed_result_serializes() {
        let result = ProcessedResult {
            customers: vec![Customer {
                customer_id: "10".to_string(),
                orders: vec![CustomerOrder {
                    order_id: "1".to_string(),
                    barcodes: vec!["11111111111".to_string()],
                }],
            }],
            top_customers: vec![TopCustomer {
                customer_id: "10".to_string(),
                ticket_count: 1,
            }],
            unused_barcode_count: 0,
        };
        let json = serde_json::to_string(&result).expect("serialize result");
        let round: ProcessedResult = serde_json::from_str(&json).expect("deserialize result");
        assert_eq!(round, result);
        assert_eq!(round.order_count(), 1);
    }
}
