use thiserror::Error;

/// Field-level failure while turning a raw record into an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The column is absent from the record.
    #[error("field required: {field}")]
    MissingField { field: &'static str },

    /// The column is present but blank.
    #[error("empty {field}")]
    EmptyField { field: &'static str },

    /// The barcode value is not exactly eleven ASCII digits.
    #[error("barcode '{value}' must be an 11-digit number")]
    InvalidBarcode { value: String },
}

pub type Result<T> = std::result::Result<T, RecordError>;
