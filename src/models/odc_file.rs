//! ODC file model for the SDK

use super::connection::{Connection, PowerQueryConnection};
use serde::{Deserialize, Serialize};

/// Document metadata written to the `docprops` data island
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl DocumentProperties {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// True when no property is set and the island is left out entirely
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.name.is_none() && self.keywords.is_none()
    }
}

/// Connection payload written to the `msodc` data island
///
/// A document may carry classic connections, a Power Query connection, or
/// both (backward compatible documents). No combination is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeDataConnection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    /// Classic connections in output order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<Connection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_query_connection: Option<PowerQueryConnection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_query_mashup_data: Option<String>,
}

impl OfficeDataConnection {
    pub fn with_connection(connection: Connection) -> Self {
        Self {
            connections: vec![connection],
            ..Self::default()
        }
    }

    pub fn with_power_query(power_query_connection: PowerQueryConnection) -> Self {
        Self {
            power_query_connection: Some(power_query_connection),
            ..Self::default()
        }
    }
}

/// Root of an ODC descriptor
///
/// # Example
///
/// ```rust
/// use odc_writer::models::{Connection, ConnectionType, OdcFile, OfficeDataConnection};
///
/// let connection = Connection::new(ConnectionType::Odbc, "DSN=Northwind");
/// let file = OdcFile::new("Northwind", OfficeDataConnection::with_connection(connection));
/// assert_eq!(file.document_properties.name.as_deref(), Some("Northwind"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OdcFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub document_properties: DocumentProperties,
    pub office_data_connection: OfficeDataConnection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

impl OdcFile {
    /// Create a file whose title doubles as the document name
    pub fn new(title: impl Into<String>, office_data_connection: OfficeDataConnection) -> Self {
        let title = title.into();
        Self {
            document_properties: DocumentProperties::with_name(title.clone()),
            title: Some(title),
            office_data_connection,
            catalog: None,
            schema: None,
            table: None,
        }
    }
}
