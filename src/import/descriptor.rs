//! Descriptor importer
//!
//! Deserializes an [`OdcFile`] from a YAML or JSON descriptor definition.
//! Field names are camelCase and enum values use the ODC spelling:
//!
//! ```yaml
//! title: Northwind
//! documentProperties:
//!   name: Northwind
//! officeDataConnection:
//!   connections:
//!     - type: ODBC
//!       connectionString: DRIVER=SQL Server;SERVER=mysqlserver
//!       commandText: SELECT * FROM Northwind.dbo.Invoices Invoices
//! ```

use crate::import::ImportError;
use crate::models::OdcFile;
use std::str::FromStr;
use tracing::{info, warn};

/// Serialization format of a descriptor definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    Yaml,
    Json,
}

impl DescriptorFormat {
    /// Guess the format from the content: JSON documents open with `{`.
    pub fn detect(content: &str) -> Self {
        if content.trim_start().starts_with('{') {
            DescriptorFormat::Json
        } else {
            DescriptorFormat::Yaml
        }
    }
}

impl FromStr for DescriptorFormat {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(DescriptorFormat::Yaml),
            "json" => Ok(DescriptorFormat::Json),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Descriptor Importer
#[derive(Debug, Default, Clone, Copy)]
pub struct DescriptorImporter;

impl DescriptorImporter {
    /// Create a new DescriptorImporter
    pub fn new() -> Self {
        Self
    }

    /// Import a descriptor, detecting the format when none is given.
    ///
    /// # Example
    ///
    /// ```rust
    /// use odc_writer::import::DescriptorImporter;
    ///
    /// let content = r#"{
    ///     "officeDataConnection": {
    ///         "connections": [{ "type": "OLEDB", "connectionString": "Provider=SQLOLEDB" }]
    ///     }
    /// }"#;
    /// let file = DescriptorImporter::new().import(content, None).unwrap();
    /// assert_eq!(file.office_data_connection.connections.len(), 1);
    /// ```
    pub fn import(
        &self,
        content: &str,
        format: Option<DescriptorFormat>,
    ) -> Result<OdcFile, ImportError> {
        match format.unwrap_or_else(|| DescriptorFormat::detect(content)) {
            DescriptorFormat::Yaml => self.parse_yaml(content),
            DescriptorFormat::Json => self.parse_json(content),
        }
    }

    /// Import a descriptor from YAML
    pub fn parse_yaml(&self, content: &str) -> Result<OdcFile, ImportError> {
        let file: OdcFile = serde_yaml::from_str(content).map_err(|e| {
            warn!("Failed to parse YAML descriptor: {}", e);
            ImportError::ParseError(format!("Failed to parse YAML: {}", e))
        })?;
        Self::log_loaded(&file);
        Ok(file)
    }

    /// Import a descriptor from JSON
    pub fn parse_json(&self, content: &str) -> Result<OdcFile, ImportError> {
        let file: OdcFile = serde_json::from_str(content).map_err(|e| {
            warn!("Failed to parse JSON descriptor: {}", e);
            ImportError::ParseError(format!("Failed to parse JSON: {}", e))
        })?;
        Self::log_loaded(&file);
        Ok(file)
    }

    fn log_loaded(file: &OdcFile) {
        let odc = &file.office_data_connection;
        info!(
            "Loaded ODC descriptor '{}' with {} connection(s){}",
            file.title.as_deref().unwrap_or(""),
            odc.connections.len(),
            if odc.power_query_connection.is_some() {
                " and a Power Query connection"
            } else {
                ""
            }
        );
    }
}
