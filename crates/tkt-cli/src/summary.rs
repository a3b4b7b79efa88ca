use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tkt_model::{Customer, RejectionKind};

use crate::types::RunResult;

/// Orders listed per customer in the sample before eliding the rest.
const SAMPLE_ORDERS_PER_CUSTOMER: usize = 2;

pub fn print_summary(result: &RunResult, sample_customers: usize) {
    match &result.output_path {
        Some(path) => println!("Output: {} ({} rows)", path.display(), result.rows),
        None => println!("Output: not written (dry run, {} rows)", result.rows),
    }
    if let Some(path) = &result.diagnostics_path {
        println!("Diagnostics: {}", path.display());
    }
    println!("{}", totals_table(result));
    println!();
    println!("Top {} customers:", result.summary.top_customers.len());
    println!("{}", top_customers_table(result));
    let sample = sample_lines(&result.customers, sample_customers);
    if !sample.is_empty() {
        println!();
        println!("Sample of customer orders:");
        for line in sample {
            println!("{line}");
        }
    }
}

fn totals_table(result: &RunResult) -> Table {
    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Customers"),
        Cell::new(summary.customer_count).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Orders with barcodes"),
        Cell::new(summary.order_count).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Unused barcodes"),
        Cell::new(summary.unused_barcode_count),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate barcodes"),
        count_cell(summary.duplicate_barcode_count, Color::Yellow),
    ]);
    for kind in RejectionKind::ALL {
        let count = summary.rejections.get(&kind).copied().unwrap_or_default();
        table.add_row(vec![
            dim_cell(format!("Rejected: {kind}")),
            count_cell(count, Color::Red),
        ]);
    }
    table
}

fn top_customers_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Customer"),
        header_cell("Tickets"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (rank, entry) in result.summary.top_customers.iter().enumerate() {
        table.add_row(vec![
            dim_cell(rank + 1),
            Cell::new(&entry.customer_id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(entry.ticket_count),
        ]);
    }
    table
}

/// First `limit` customers with up to two orders each.
fn sample_lines(customers: &[Customer], limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for customer in customers.iter().take(limit) {
        lines.push(format!("Customer {}:", customer.customer_id));
        for order in customer.orders.iter().take(SAMPLE_ORDERS_PER_CUSTOMER) {
            lines.push(format!(
                "  Order {}: {} barcodes",
                order.order_id,
                order.barcodes.len()
            ));
        }
        if customer.orders.len() > SAMPLE_ORDERS_PER_CUSTOMER {
            lines.push(format!(
                "  ... and {} more orders",
                customer.orders.len() - SAMPLE_ORDERS_PER_CUSTOMER
            ));
        }
    }
    lines
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tkt_model::CustomerOrder;

    fn customer(id: &str, orders: usize) -> Customer {
        Customer {
            customer_id: id.to_string(),
            orders: (0..orders)
                .map(|n| CustomerOrder {
                    order_id: format!("{id}{n}"),
                    barcodes: vec!["11111111111".to_string(); n + 1],
                })
                .collect(),
        }
    }

    #[test]
    fn sample_elides_extra_orders() {
        let lines = sample_lines(&[customer("7", 3)], 5);
        assert_eq!(
            lines,
            vec![
                "Customer 7:",
                "  Order 70: 1 barcodes",
                "  Order 71: 2 barcodes",
                "  ... and 1 more orders",
            ]
        );
    }

    #[test]
    fn sample_respects_customer_limit() {
        let customers = vec![customer("1", 1), customer("2", 1), customer("3", 1)];
        let lines = sample_lines(&customers, 2);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "Customer 2:");
    }
}
