//! Connection models for the SDK

use super::enums::{CommandType, ConnectionType, CredentialsMethod, ProgId};
use serde::{Deserialize, Serialize};

/// Bound parameter of a connection command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Data type identifier, written as a plain integer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<i32>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: None,
        }
    }

    pub fn with_data_type(name: impl Into<String>, data_type: i32) -> Self {
        Self {
            name: name.into(),
            data_type: Some(data_type),
        }
    }
}

/// Classic (non Power Query) database connection
///
/// Nothing is validated here: an empty connection string or a command text
/// without a command type is carried through to the writer as given.
///
/// # Example
///
/// ```rust
/// use odc_writer::models::{CommandType, Connection, ConnectionType};
///
/// let connection = Connection {
///     command_type: Some(CommandType::Cube),
///     always_use_connection_file: Some(true),
///     ..Connection::new(ConnectionType::OleDb, "Provider=MSOLAP.3")
/// };
/// assert!(connection.parameters.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    #[serde(rename = "type")]
    pub connection_type: ConnectionType,
    pub connection_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_type: Option<CommandType>,
    /// Parameters in the order they are written
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sso_application_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_method: Option<CredentialsMethod>,
    /// Absent, `false` and `true` are three distinct outputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_use_connection_file: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
}

impl Connection {
    pub fn new(connection_type: ConnectionType, connection_string: impl Into<String>) -> Self {
        Self {
            connection_type,
            connection_string: connection_string.into(),
            command_type: None,
            parameters: Vec::new(),
            command_text: None,
            sso_application_id: None,
            credentials_method: None,
            always_use_connection_file: None,
            culture: None,
        }
    }
}

/// Power Query connection
///
/// Same shape as [`Connection`] without parameters and culture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerQueryConnection {
    #[serde(rename = "type")]
    pub connection_type: ConnectionType,
    pub connection_string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_type: Option<CommandType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sso_application_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_method: Option<CredentialsMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_use_connection_file: Option<bool>,
}

impl PowerQueryConnection {
    pub fn new(connection_type: ConnectionType, connection_string: impl Into<String>) -> Self {
        Self {
            connection_type,
            connection_string: connection_string.into(),
            command_type: None,
            command_text: None,
            sso_application_id: None,
            credentials_method: None,
            always_use_connection_file: None,
        }
    }
}

/// Read access to the fields the writer renders for any connection element.
///
/// Classic and Power Query connections share every element except
/// parameters and culture, which default to empty here.
pub trait ConnectionFields {
    /// Qualified tag name of the connection element
    const ELEMENT: &'static str;

    fn connection_type(&self) -> ConnectionType;
    fn connection_string(&self) -> &str;
    fn command_type(&self) -> Option<CommandType>;
    fn command_text(&self) -> Option<&str>;
    fn sso_application_id(&self) -> Option<&str>;
    fn credentials_method(&self) -> Option<CredentialsMethod>;
    fn always_use_connection_file(&self) -> Option<bool>;

    /// ProgId advertised when this connection heads the document
    fn prog_id(&self) -> ProgId;

    fn parameters(&self) -> &[Parameter] {
        &[]
    }

    fn culture(&self) -> Option<&str> {
        None
    }
}

impl ConnectionFields for Connection {
    const ELEMENT: &'static str = "odc:Connection";

    fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }

    fn connection_string(&self) -> &str {
        &self.connection_string
    }

    fn command_type(&self) -> Option<CommandType> {
        self.command_type
    }

    fn command_text(&self) -> Option<&str> {
        self.command_text.as_deref()
    }

    fn sso_application_id(&self) -> Option<&str> {
        self.sso_application_id.as_deref()
    }

    fn credentials_method(&self) -> Option<CredentialsMethod> {
        self.credentials_method
    }

    fn always_use_connection_file(&self) -> Option<bool> {
        self.always_use_connection_file
    }

    fn prog_id(&self) -> ProgId {
        ProgId::for_command_type(self.command_type)
    }

    fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }
}

impl ConnectionFields for PowerQueryConnection {
    const ELEMENT: &'static str = "odc:PowerQueryConnection";

    fn connection_type(&self) -> ConnectionType {
        self.connection_type
    }

    fn connection_string(&self) -> &str {
        &self.connection_string
    }

    fn command_type(&self) -> Option<CommandType> {
        self.command_type
    }

    fn command_text(&self) -> Option<&str> {
        self.command_text.as_deref()
    }

    fn sso_application_id(&self) -> Option<&str> {
        self.sso_application_id.as_deref()
    }

    fn credentials_method(&self) -> Option<CredentialsMethod> {
        self.credentials_method
    }

    fn always_use_connection_file(&self) -> Option<bool> {
        self.always_use_connection_file
    }

    // Power Query documents always advertise a table, whatever the command type.
    fn prog_id(&self) -> ProgId {
        ProgId::Table
    }
}
