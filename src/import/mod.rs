//! Import functionality
//!
//! Loads ODC descriptors from YAML or JSON descriptor definitions. This is
//! the programmatic way to build an [`OdcFile`](crate::models::OdcFile);
//! reading `.odc` documents back is not supported.

pub mod descriptor;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

// Re-export for convenience
pub use descriptor::{DescriptorFormat, DescriptorImporter};
