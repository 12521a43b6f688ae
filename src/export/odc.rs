//! ODC exporter for rendering connection descriptors as `.odc` documents.
//!
//! The output is an HTML document whose `<head>` carries the meta tags an
//! office application sniffs before parsing, followed by two XML data
//! islands: `docprops` with the document properties and `msodc` with the
//! connections themselves. Element order, tag names and line breaks are
//! fixed by the format and reproduced byte for byte.
//!
//! # Escaping
//!
//! All free text (titles, connection strings, command text, ...) goes through
//! [`escape_text`]. Enum names and integers are written verbatim.

use crate::export::markup::{
    HTML_NAMESPACE, ODC_NAMESPACE, OFFICE_NAMESPACE, escape_text, push_raw_element,
    push_text_element,
};
use crate::export::{ExportError, ExportResult};
use crate::models::{ConnectionFields, DocumentProperties, OdcFile, OfficeDataConnection};
use tracing::debug;

/// Indent of the children of the island root elements
const CHILD_INDENT: &str = " ";
/// Indent of the children of `odc:Parameter`
const PARAMETER_INDENT: &str = "  ";

/// Exporter for the Office Data Connection format.
#[derive(Debug, Default, Clone, Copy)]
pub struct ODCExporter;

impl ODCExporter {
    /// Create a new ODCExporter
    pub fn new() -> Self {
        Self
    }

    /// Render an ODC file to its document text.
    ///
    /// Rendering never fails: nothing is validated and every structurally
    /// valid descriptor, including one mixing classic and Power Query
    /// connections, produces a document. The same descriptor always renders
    /// to the same text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use odc_writer::export::odc::ODCExporter;
    /// use odc_writer::models::{Connection, ConnectionType, OdcFile, OfficeDataConnection};
    ///
    /// let connection = Connection {
    ///     command_text: Some("SELECT * FROM Northwind.dbo.Invoices Invoices".to_string()),
    ///     ..Connection::new(ConnectionType::Odbc, "DRIVER=SQL Server;SERVER=mysqlserver")
    /// };
    /// let file = OdcFile::new("Northwind", OfficeDataConnection::with_connection(connection));
    ///
    /// let odc = ODCExporter::render(&file);
    /// assert!(odc.contains("<title>Northwind</title>"));
    /// assert!(odc.contains("<meta name=ProgId content=ODC.Database>"));
    /// ```
    pub fn render(file: &OdcFile) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "<html xmlns:o=\"{}\" xmlns=\"{}\">",
            OFFICE_NAMESPACE, HTML_NAMESPACE
        ));
        out.push_str("\n<head>");

        Self::write_meta_tags(&mut out, file);
        Self::write_title(&mut out, file.title.as_deref());
        Self::write_document_properties(&mut out, &file.document_properties);
        Self::write_office_data_connection(&mut out, &file.office_data_connection);

        out.push_str("\n</head>");
        out.push_str("\n</html>");

        out
    }

    /// Export an ODC file (SDK interface).
    ///
    /// # Returns
    ///
    /// An `ExportResult` with the document text and the format identifier `odc`.
    pub fn export(&self, file: &OdcFile) -> Result<ExportResult, ExportError> {
        Ok(ExportResult {
            content: Self::render(file),
            format: "odc".to_string(),
        })
    }

    fn write_meta_tags(out: &mut String, file: &OdcFile) {
        out.push_str("\n<meta http-equiv=Content-Type content=\"text/x-ms-odc; charset=utf-8\">");

        // Classic connections take precedence over the Power Query connection.
        let odc = &file.office_data_connection;
        if let Some(connection) = odc.connections.first() {
            Self::write_source_meta(out, connection);
        } else if let Some(connection) = &odc.power_query_connection {
            Self::write_source_meta(out, connection);
        } else {
            debug!("No connection to derive ProgId from, omitting source meta tags");
        }

        for (name, value) in [
            ("Catalog", &file.catalog),
            ("Schema", &file.schema),
            ("Table", &file.table),
        ] {
            if let Some(value) = value {
                out.push_str(&format!(
                    "\n<meta name={} content=\"{}\">",
                    name,
                    escape_text(value)
                ));
            }
        }
    }

    fn write_source_meta<C: ConnectionFields>(out: &mut String, connection: &C) {
        let prog_id = connection.prog_id();
        debug!(
            element = C::ELEMENT,
            prog_id = prog_id.as_str(),
            "Deriving source meta tags"
        );
        out.push_str(&format!("\n<meta name=ProgId content={}>", prog_id));
        out.push_str(&format!(
            "\n<meta name=SourceType content={}>",
            connection.connection_type()
        ));
    }

    fn write_title(out: &mut String, title: Option<&str>) {
        if let Some(title) = title {
            out.push_str(&format!("\n<title>{}</title>", escape_text(title)));
        }
    }

    fn write_document_properties(out: &mut String, props: &DocumentProperties) {
        if props.is_empty() {
            return;
        }

        out.push_str(&format!(
            "\n<xml id=docprops><o:DocumentProperties xmlns:o=\"{}\" xmlns=\"{}\">",
            OFFICE_NAMESPACE, HTML_NAMESPACE
        ));

        if let Some(description) = &props.description {
            push_text_element(out, CHILD_INDENT, "o:Description", description);
        }
        if let Some(name) = &props.name {
            push_text_element(out, CHILD_INDENT, "o:Name", name);
        }
        if let Some(keywords) = &props.keywords {
            push_text_element(out, CHILD_INDENT, "o:Keywords", keywords);
        }

        out.push_str("\n</o:DocumentProperties>");
        out.push_str("\n</xml>");
    }

    fn write_office_data_connection(out: &mut String, odc: &OfficeDataConnection) {
        debug!(
            connections = odc.connections.len(),
            power_query = odc.power_query_connection.is_some(),
            mashup_data = odc.power_query_mashup_data.is_some(),
            "Writing office data connection island"
        );

        // The msodc island follows the previous markup without a line break.
        out.push_str(&format!(
            "<xml id=msodc><odc:OfficeDataConnection xmlns:odc=\"{}\" xmlns=\"{}\">",
            ODC_NAMESPACE, HTML_NAMESPACE
        ));

        if let Some(source_file) = &odc.source_file {
            push_text_element(out, CHILD_INDENT, "odc:SourceFile", source_file);
        }

        for connection in &odc.connections {
            Self::write_connection(out, connection);
        }

        if let Some(connection) = &odc.power_query_connection {
            Self::write_connection(out, connection);
        }

        if let Some(mashup_data) = &odc.power_query_mashup_data {
            push_text_element(out, CHILD_INDENT, "odc:PowerQueryMashupData", mashup_data);
        }

        out.push_str("\n</odc:OfficeDataConnection>");
        out.push_str("\n</xml>");
    }

    /// Write one connection element.
    ///
    /// Parameters and culture are only ever present on classic connections;
    /// for Power Query connections the trait reports them as empty.
    fn write_connection<C: ConnectionFields>(out: &mut String, connection: &C) {
        out.push_str(&format!(
            "\n{}<{} odc:Type=\"{}\">",
            CHILD_INDENT,
            C::ELEMENT,
            connection.connection_type()
        ));

        push_text_element(
            out,
            CHILD_INDENT,
            "odc:ConnectionString",
            connection.connection_string(),
        );

        if let Some(command_type) = connection.command_type() {
            push_raw_element(out, CHILD_INDENT, "odc:CommandType", command_type.as_str());
        }

        for parameter in connection.parameters() {
            out.push('\n');
            out.push_str(CHILD_INDENT);
            out.push_str("<odc:Parameter>");
            push_text_element(out, PARAMETER_INDENT, "odc:Name", &parameter.name);
            if let Some(data_type) = parameter.data_type {
                push_raw_element(out, PARAMETER_INDENT, "odc:DataType", &data_type.to_string());
            }
            out.push('\n');
            out.push_str(CHILD_INDENT);
            out.push_str("</odc:Parameter>");
        }

        if let Some(command_text) = connection.command_text() {
            push_text_element(out, CHILD_INDENT, "odc:CommandText", command_text);
        }

        if let Some(sso_application_id) = connection.sso_application_id() {
            push_text_element(out, CHILD_INDENT, "odc:SSOApplicationID", sso_application_id);
        }

        if let Some(credentials_method) = connection.credentials_method() {
            push_raw_element(
                out,
                CHILD_INDENT,
                "odc:CredentialsMethod",
                credentials_method.as_str(),
            );
        }

        match connection.always_use_connection_file() {
            Some(true) => {
                out.push('\n');
                out.push_str(CHILD_INDENT);
                out.push_str("<odc:AlwaysUseConnectionFile/>");
            }
            Some(false) => {
                push_raw_element(out, CHILD_INDENT, "odc:AlwaysUseConnectionFile", "false");
            }
            None => {}
        }

        if let Some(culture) = connection.culture() {
            push_text_element(out, CHILD_INDENT, "odc:Culture", culture);
        }

        out.push_str(&format!("\n{}</{}>", CHILD_INDENT, C::ELEMENT));
    }
}
