//! Enums for ODC descriptors
//!
//! Variant names serialize exactly as the ODC format spells them, so the same
//! spelling is used by serde and by the writer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Driver family of a connection, written as the `odc:Type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionType {
    /// OLE DB provider
    #[serde(rename = "OLEDB")]
    OleDb,
    /// ODBC driver
    #[serde(rename = "ODBC")]
    Odbc,
    /// Web data feed
    #[serde(rename = "DATAFEED")]
    DataFeed,
}

impl ConnectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::OleDb => "OLEDB",
            ConnectionType::Odbc => "ODBC",
            ConnectionType::DataFeed => "DATAFEED",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of command carried by a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandType {
    Table,
    #[serde(rename = "SQL")]
    Sql,
    Cube,
    List,
    Default,
    TableCollection,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Table => "Table",
            CommandType::Sql => "SQL",
            CommandType::Cube => "Cube",
            CommandType::List => "List",
            CommandType::Default => "Default",
            CommandType::TableCollection => "TableCollection",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the consuming application obtains credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialsMethod {
    /// Windows integrated authentication
    Integrated,
    /// No authentication
    None,
    /// Stored user name and password
    Stored,
}

impl CredentialsMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialsMethod::Integrated => "Integrated",
            CredentialsMethod::None => "None",
            CredentialsMethod::Stored => "Stored",
        }
    }
}

impl fmt::Display for CredentialsMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data shape advertised by the `ProgId` meta tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgId {
    Database,
    Table,
    TableCollection,
    Cube,
}

impl ProgId {
    /// Map the command type of a classic connection to its ProgId.
    ///
    /// Cube, Table and TableCollection have dedicated markers. Every other
    /// command type, and a missing one, advertises a plain database.
    pub fn for_command_type(command_type: Option<CommandType>) -> Self {
        match command_type {
            Some(CommandType::Cube) => ProgId::Cube,
            Some(CommandType::Table) => ProgId::Table,
            Some(CommandType::TableCollection) => ProgId::TableCollection,
            Some(CommandType::Sql)
            | Some(CommandType::List)
            | Some(CommandType::Default)
            | None => ProgId::Database,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProgId::Database => "ODC.Database",
            ProgId::Table => "ODC.Table",
            ProgId::TableCollection => "ODC.TableCollection",
            ProgId::Cube => "ODC.Cube",
        }
    }
}

impl fmt::Display for ProgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
