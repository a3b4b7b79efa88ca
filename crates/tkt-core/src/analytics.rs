use std::collections::BTreeSet;

use tracing::warn;

use tkt_model::{Barcode, Customer, TopCustomer};

use crate::error::{PipelineError, Result};
use crate::options::UnusedCountPolicy;

/// Ranks customers by ticket count, highest first, keeping at most `limit`.
///
/// Ties keep the customers' grouping order.
pub fn top_customers(customers: &[Customer], limit: usize) -> Vec<TopCustomer> {
    let mut ranked: Vec<TopCustomer> = customers
        .iter()
        .map(|customer| TopCustomer {
            customer_id: customer.customer_id.clone(),
            ticket_count: customer.ticket_count(),
        })
        .collect();
    // `sort_by` is stable; ties must not be reordered.
    ranked.sort_by(|a, b| b.ticket_count.cmp(&a.ticket_count));
    ranked.truncate(limit);
    ranked
}

/// Counts unattached barcodes, minus the number of distinct duplicate values.
pub fn count_unused_barcodes(
    barcodes: &[Barcode],
    duplicates: &BTreeSet<String>,
    policy: UnusedCountPolicy,
) -> Result<usize> {
    let unused = barcodes.iter().filter(|barcode| barcode.is_unused()).count();
    if let Some(count) = unused.checked_sub(duplicates.len()) {
        return Ok(count);
    }
    match policy {
        UnusedCountPolicy::Clamp => {
            warn!(
                unused,
                duplicates = duplicates.len(),
                "duplicate barcodes exceed unattached barcodes; reporting zero unused"
            );
            Ok(0)
        }
        UnusedCountPolicy::Strict => Err(PipelineError::UnusedCountUnderflow {
            unused,
            duplicates: duplicates.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tkt_model::CustomerOrder;

    fn customer(id: &str, tickets: usize) -> Customer {
        Customer {
            customer_id: id.to_string(),
            orders: vec![CustomerOrder {
                order_id: format!("order-{id}"),
                barcodes: (0..tickets).map(|n| format!("{id}-{n}")).collect(),
            }],
        }
    }

    #[test]
    fn limit_larger_than_customers_returns_all() {
        let ranked = top_customers(&[customer("a", 1), customer("b", 2)], 5);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].customer_id, "b");
    }

    #[test]
    fn zero_limit_returns_empty() {
        assert!(top_customers(&[customer("a", 1)], 0).is_empty());
    }

    #[test]
    fn clamp_policy_reports_zero() {
        let barcodes = vec![Barcode::new("11111111111", None)];
        let duplicates: BTreeSet<String> = ["22222222222", "33333333333"]
            .into_iter()
            .map(String::from)
            .collect();
        let count = count_unused_barcodes(&barcodes, &duplicates, UnusedCountPolicy::Clamp)
            .expect("clamped count");
        assert_eq!(count, 0);
    }

    #[test]
    fn strict_policy_rejects_underflow() {
        let duplicates: BTreeSet<String> = ["22222222222"].into_iter().map(String::from).collect();
        let err = count_unused_barcodes(&[], &duplicates, UnusedCountPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            PipelineError::UnusedCountUnderflow {
                unused: 0,
                duplicates: 1
            }
        );
    }
}
