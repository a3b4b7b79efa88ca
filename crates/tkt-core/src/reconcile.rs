//! Attaching barcodes to orders and grouping orders under customers.
//!
//! All maps here preserve first-insertion order so that output rows and
//! ranking ties are reproducible run to run.

use indexmap::IndexMap;

use tkt_model::{Barcode, Customer, CustomerOrder, Order, Rejection, RejectionKind};

/// Barcode values keyed by the order they belong to, in first-seen order.
pub type OrderBarcodes = IndexMap<String, Vec<String>>;

/// Groups barcodes by `order_id`. Unattached barcodes are skipped.
pub fn group_barcodes_by_order(barcodes: &[Barcode]) -> OrderBarcodes {
    let mut grouped = OrderBarcodes::new();
    for barcode in barcodes {
        if let Some(order_id) = &barcode.order_id {
            grouped
                .entry(order_id.clone())
                .or_default()
                .push(barcode.barcode.clone());
        }
    }
    grouped
}

/// Keeps only orders with at least one attached barcode.
///
/// Every dropped order yields one `OrderWithoutBarcodes` rejection.
pub fn retain_orders_with_barcodes(
    orders: Vec<Order>,
    order_barcodes: &OrderBarcodes,
) -> (Vec<Order>, Vec<Rejection>) {
    let mut kept = Vec::with_capacity(orders.len());
    let mut rejections = Vec::new();
    for order in orders {
        if order_barcodes.contains_key(&order.order_id) {
            kept.push(order);
        } else {
            rejections.push(Rejection::new(
                RejectionKind::OrderWithoutBarcodes,
                None,
                format!("order without barcodes found: {}", order.order_id),
            ));
        }
    }
    (kept, rejections)
}

/// Builds the customer → orders → barcodes tree.
///
/// Customers appear in the order their id is first seen. A repeated
/// `order_id` produces a second entry under the same customer. Orders with
/// no barcodes are skipped so every [`CustomerOrder`] stays non-empty.
pub fn group_orders_by_customer(
    orders: &[Order],
    order_barcodes: &OrderBarcodes,
) -> Vec<Customer> {
    let mut customers: IndexMap<&str, Customer> = IndexMap::new();
    for order in orders {
        let Some(barcodes) = order_barcodes.get(&order.order_id) else {
            continue;
        };
        customers
            .entry(order.customer_id.as_str())
            .or_insert_with(|| Customer::new(order.customer_id.as_str()))
            .orders
            .push(CustomerOrder {
                order_id: order.order_id.clone(),
                barcodes: barcodes.clone(),
            });
    }
    customers.into_values().collect()
}
