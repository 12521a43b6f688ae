//! Export functionality
//!
//! Provides the ODC writer, which renders an [`OdcFile`](crate::models::OdcFile)
//! into the HTML document with embedded XML data islands that office
//! applications read as a `.odc` file.

pub mod markup;
pub mod odc;

/// Result of an export operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Export error: {0}")]
    ExportError(String),
}

// Re-export for convenience
pub use odc::ODCExporter;
