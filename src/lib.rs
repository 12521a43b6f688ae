//! ODC Writer - model and writer for Office Data Connection files
//!
//! Provides:
//! - Descriptor models for classic and Power Query connections
//! - Rendering of a descriptor into the `.odc` HTML/XML document format
//! - Loading descriptors from YAML or JSON definitions
//!
//! # Example
//!
//! ```rust
//! use odc_writer::{CommandType, Connection, ConnectionType, ODCExporter, OdcFile, OfficeDataConnection};
//!
//! let connection = Connection {
//!     command_type: Some(CommandType::Cube),
//!     ..Connection::new(ConnectionType::OleDb, "Provider=MSOLAP.3;Data Source=myolapserver")
//! };
//! let file = OdcFile::new("Adventure Works", OfficeDataConnection::with_connection(connection));
//!
//! let odc = ODCExporter::render(&file);
//! assert!(odc.contains("<meta name=ProgId content=ODC.Cube>"));
//! ```

pub mod export;
pub mod import;
pub mod models;

// Re-export commonly used types
pub use export::{ExportError, ExportResult, ODCExporter};
pub use import::{DescriptorFormat, DescriptorImporter, ImportError};

// Re-export models
pub use models::enums::*;
pub use models::{
    Connection, ConnectionFields, DocumentProperties, OdcFile, OfficeDataConnection, Parameter,
    PowerQueryConnection,
};
