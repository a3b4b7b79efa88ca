pub mod error;
pub mod reader;
pub mod writer;

pub use error::{IngestError, Result};
pub use reader::{read_records, read_records_from};
pub use writer::{write_json, write_output};
