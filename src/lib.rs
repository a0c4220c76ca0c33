pub mod catalog;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;

// Main API
pub use catalog::SpecCatalog;
pub use error::{ConfigError, FormatError};
pub use formatter::format_number;
pub use types::*;
