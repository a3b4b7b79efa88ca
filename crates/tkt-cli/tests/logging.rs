//! Log output of the `run` command, captured through a scoped subscriber.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use tkt_cli::cli::RunArgs;
use tkt_cli::commands::run;

#[derive(Clone, Default)]
struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn lines(&self) -> Vec<String> {
        let buffer = self.buffer.lock().expect("log buffer");
        String::from_utf8_lossy(&buffer)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn run_captured(args: &RunArgs) -> (anyhow::Result<tkt_cli::types::RunResult>, Vec<String>) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(Level::INFO)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, || run(args));
    (result, logs.lines())
}

fn args(dir: &Path, orders: &str, barcodes: &str) -> RunArgs {
    let orders_path = dir.join("orders.csv");
    let barcodes_path = dir.join("barcodes.csv");
    fs::write(&orders_path, orders).expect("write orders");
    fs::write(&barcodes_path, barcodes).expect("write barcodes");
    RunArgs {
        orders: orders_path,
        barcodes: barcodes_path,
        output: dir.join("output.csv"),
        top: 5,
        sample_customers: 5,
        strict_unused: false,
        dry_run: false,
        diagnostics_json: None,
    }
}

#[test]
fn each_rejection_is_one_warning_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    let run_args = args(
        dir.path(),
        "order_id,customer_id\n1,10\n2,11\n,12\n",
        "barcode,order_id\n11111111111,1\n11111111111,1\n123,1\n33333333333,\n",
    );

    let (result, lines) = run_captured(&run_args);
    let result = result.expect("run");

    let warnings: Vec<&String> = lines
        .iter()
        .filter(|line| line.trim_start().starts_with("WARN"))
        .collect();
    let rejected: usize = result.summary.rejections.values().sum();
    assert_eq!(rejected, 4);
    assert_eq!(warnings.len(), rejected);
    for kind in [
        "InvalidOrderData",
        "DuplicateBarcode",
        "InvalidBarcodeData",
        "OrderWithoutBarcodes",
    ] {
        assert_eq!(
            warnings.iter().filter(|line| line.contains(kind)).count(),
            1,
            "{kind} in {warnings:?}"
        );
    }
    assert!(
        warnings
            .iter()
            .any(|line| line.contains("OrderWithoutBarcodes: order without barcodes found: 2"))
    );
}

#[test]
fn totals_are_logged_before_a_failed_write() {
    let dir = tempfile::tempdir().expect("temp dir");
    let run_args = args(
        dir.path(),
        "order_id,customer_id\n1,10\n",
        "barcode,order_id\n11111111111,\n22222222222,\n",
    );

    let (result, lines) = run_captured(&run_args);
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("no data to write"));

    let totals = lines
        .iter()
        .find(|line| line.contains("processed 0 customers"))
        .expect("totals line");
    assert!(totals.trim_start().starts_with("INFO"));
    assert!(totals.contains("orders_with_barcodes=0"));
    assert!(totals.contains("unused_barcodes=2"));
    assert!(totals.contains("duplicate_barcodes=0"));
}
