use tracing::debug;

use tkt_model::{Order, RawRecord, Rejection, RejectionKind};

/// Orders that passed validation plus the rows that did not.
#[derive(Debug, Clone, Default)]
pub struct OrderValidation {
    pub orders: Vec<Order>,
    pub rejections: Vec<Rejection>,
}

/// Validates each order row independently. Invalid rows are reported and skipped.
pub fn validate_orders(records: &[RawRecord]) -> OrderValidation {
    let mut validation = OrderValidation::default();
    for (idx, record) in records.iter().enumerate() {
        match Order::from_record(record) {
            Ok(order) => validation.orders.push(order),
            Err(error) => validation.rejections.push(Rejection::new(
                RejectionKind::InvalidOrderData,
                Some(idx + 1),
                format!("invalid order data: {error}"),
            )),
        }
    }
    debug!(
        valid = validation.orders.len(),
        rejected = validation.rejections.len(),
        "validated orders"
    );
    validation
}
