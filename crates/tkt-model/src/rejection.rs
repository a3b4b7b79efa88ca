use std::fmt;

use serde::{Deserialize, Serialize};

/// Record-level rejection kinds. None of these stop the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RejectionKind {
    InvalidOrderData,
    InvalidBarcodeData,
    DuplicateBarcode,
    OrderWithoutBarcodes,
}

impl RejectionKind {
    pub const ALL: [RejectionKind; 4] = [
        RejectionKind::InvalidOrderData,
        RejectionKind::InvalidBarcodeData,
        RejectionKind::DuplicateBarcode,
        RejectionKind::OrderWithoutBarcodes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RejectionKind::InvalidOrderData => "InvalidOrderData",
            RejectionKind::InvalidBarcodeData => "InvalidBarcodeData",
            RejectionKind::DuplicateBarcode => "DuplicateBarcode",
            RejectionKind::OrderWithoutBarcodes => "OrderWithoutBarcodes",
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single excluded record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub kind: RejectionKind,
    /// 1-based data row in the source table, when the record came from one.
    pub row: Option<usize>,
    /// Human-readable description of what was wrong.
    pub detail: String,
}

impl Rejection {
    pub fn new(kind: RejectionKind, row: Option<usize>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            row,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "{}: {} (row {row})", self.kind, self.detail),
            None => write!(f, "{}: {}", self.kind, self.detail),
        }
    }
}

/// Rejections collected over a run, in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    rejections: Vec<Rejection>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rejection: Rejection) {
        self.rejections.push(rejection);
    }

    pub fn count(&self, kind: RejectionKind) -> usize {
        self.rejections
            .iter()
            .filter(|rejection| rejection.kind == kind)
            .count()
    }

    pub fn len(&self) -> usize {
        self.rejections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rejections.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rejection> {
        self.rejections.iter()
    }

    pub fn as_slice(&self) -> &[Rejection] {
        &self.rejections
    }
}

impl Extend<Rejection> for Diagnostics {
    fn extend<T: IntoIterator<Item = Rejection>>(&mut self, iter: T) {
        self.rejections.extend(iter);
    }
}

impl FromIterator<Rejection> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = Rejection>>(iter: T) -> Self {
        Self {
            rejections: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Rejection;
    type IntoIter = std::slice::Iter<'a, Rejection>;

    fn into_iter(self) -> Self::IntoIter {
        self.rejections.iter()
    }
}
