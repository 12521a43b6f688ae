//! Models module for the SDK
//!
//! Immutable value types describing an ODC document. The writer only reads
//! them; building a tree is up to the caller or the descriptor importer.

pub mod connection;
pub mod enums;
pub mod odc_file;

pub use connection::{Connection, ConnectionFields, Parameter, PowerQueryConnection};
pub use enums::*;
pub use odc_file::{DocumentProperties, OdcFile, OfficeDataConnection};
