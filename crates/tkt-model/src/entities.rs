use serde::{Deserialize, Serialize};

use crate::error::{RecordError, Result};
use crate::record::RawRecord;

/// Number of digits in a well-formed barcode.
pub const BARCODE_LENGTH: usize = 11;

/// Separator used when flattening an order's barcodes into one cell.
pub const BARCODE_SEPARATOR: &str = ",";

/// A validated order, before barcodes are attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
}

impl Order {
    pub fn new(order_id: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            customer_id: customer_id.into(),
        }
    }

    /// Parses an order row. Both identifiers must be present and non-blank.
    pub fn from_record(record: &RawRecord) -> Result<Self> {
        let order_id = required_field(record, "order_id")?;
        let customer_id = required_field(record, "customer_id")?;
        Ok(Self::new(order_id, customer_id))
    }
}

/// A validated barcode. `order_id` is `None` for unattached barcodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barcode {
    pub barcode: String,
    pub order_id: Option<String>,
}

impl Barcode {
    pub fn new(barcode: impl Into<String>, order_id: Option<&str>) -> Self {
        Self {
            barcode: barcode.into(),
            order_id: order_id.map(str::to_string),
        }
    }

    /// Parses a barcode row. A blank or missing `order_id` leaves the barcode unattached.
    pub fn from_record(record: &RawRecord) -> Result<Self> {
        let value = record
            .get("barcode")
            .ok_or(RecordError::MissingField { field: "barcode" })?;
        if !is_valid_barcode(value) {
            return Err(RecordError::InvalidBarcode {
                value: value.to_string(),
            });
        }
        let order_id = record.get("order_id").filter(|id| !id.is_empty());
        Ok(Self::new(value, order_id))
    }

    pub fn is_unused(&self) -> bool {
        self.order_id.is_none()
    }
}

/// Returns true for exactly eleven ASCII digits.
pub fn is_valid_barcode(value: &str) -> bool {
    value.len() == BARCODE_LENGTH && value.bytes().all(|byte| byte.is_ascii_digit())
}

fn required_field<'a>(record: &'a RawRecord, field: &'static str) -> Result<&'a str> {
    match record.get(field) {
        None => Err(RecordError::MissingField { field }),
        Some("") => Err(RecordError::EmptyField { field }),
        Some(value) => Ok(value),
    }
}

/// An order with its attached barcodes. `barcodes` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOrder {
    pub order_id: String,
    pub barcodes: Vec<String>,
}

impl CustomerOrder {
    pub fn ticket_count(&self) -> usize {
        self.barcodes.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub orders: Vec<CustomerOrder>,
}

impl Customer {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            orders: Vec::new(),
        }
    }

    /// Total barcodes across all of the customer's orders.
    pub fn ticket_count(&self) -> usize {
        self.orders.iter().map(CustomerOrder::ticket_count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopCustomer {
    pub customer_id: String,
    pub ticket_count: usize,
}

/// Final result of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedResult {
    pub customers: Vec<Customer>,
    pub top_customers: Vec<TopCustomer>,
    pub unused_barcode_count: usize,
}

impl ProcessedResult {
    /// Number of orders that carry at least one barcode.
    pub fn order_count(&self) -> usize {
        self.customers
            .iter()
            .map(|customer| customer.orders.len())
            .sum()
    }
}

/// One flattened output line: a single order of a single customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    pub customer_id: String,
    pub order_id: String,
    pub barcodes: String,
}

impl OutputRow {
    pub fn from_customers(customers: &[Customer]) -> Vec<OutputRow> {
        customers
            .iter()
            .flat_map(|customer| {
                customer.orders.iter().map(|order| OutputRow {
                    customer_id: customer.customer_id.clone(),
                    order_id: order.order_id.clone(),
                    barcodes: order.barcodes.join(BARCODE_SEPARATOR),
                })
            })
            .collect()
    }
}
