//! Import module tests

use odc_writer::export::odc::ODCExporter;
use odc_writer::import::{DescriptorFormat, DescriptorImporter, ImportError};
use odc_writer::models::{CommandType, ConnectionType, CredentialsMethod, Parameter};

mod yaml_import_tests {
    use super::*;

    #[test]
    fn test_parse_classic_descriptor() {
        let importer = DescriptorImporter::new();
        let yaml = r#"
title: Adventure Works
documentProperties:
  name: Adventure Works
catalog: Adventure Works DW
officeDataConnection:
  connections:
    - type: OLEDB
      connectionString: Provider=MSOLAP.3;Data Source=myolapserver
      commandType: Cube
      commandText: Adventure Works
      credentialsMethod: Stored
      alwaysUseConnectionFile: true
      parameters:
        - name: Year
          dataType: 3
        - name: Region
"#;
        let file = importer.parse_yaml(yaml).unwrap();

        assert_eq!(file.title.as_deref(), Some("Adventure Works"));
        assert_eq!(file.catalog.as_deref(), Some("Adventure Works DW"));
        assert!(file.schema.is_none());

        let connections = &file.office_data_connection.connections;
        assert_eq!(connections.len(), 1);
        let connection = &connections[0];
        assert_eq!(connection.connection_type, ConnectionType::OleDb);
        assert_eq!(connection.command_type, Some(CommandType::Cube));
        assert_eq!(connection.credentials_method, Some(CredentialsMethod::Stored));
        assert_eq!(connection.always_use_connection_file, Some(true));
        assert_eq!(
            connection.parameters,
            vec![Parameter::with_data_type("Year", 3), Parameter::new("Region")]
        );
    }

    #[test]
    fn test_parse_power_query_descriptor() {
        let importer = DescriptorImporter::new();
        let yaml = r#"
title: Query - DimCustomer
officeDataConnection:
  powerQueryConnection:
    type: OLEDB
    connectionString: Provider=Microsoft.Mashup.OleDb.1;Data Source=$Workbook$;Location=DimCustomer
    commandType: SQL
    commandText: SELECT * FROM [DimCustomer]
  powerQueryMashupData: "&lt;Mashup&gt;...&lt;/Mashup&gt;"
"#;
        let file = importer.parse_yaml(yaml).unwrap();

        assert!(file.document_properties.is_empty());
        let odc = &file.office_data_connection;
        assert!(odc.connections.is_empty());
        let power_query = odc.power_query_connection.as_ref().unwrap();
        assert_eq!(power_query.command_type, Some(CommandType::Sql));
        assert!(power_query.always_use_connection_file.is_none());
        assert_eq!(
            odc.power_query_mashup_data.as_deref(),
            Some("&lt;Mashup&gt;...&lt;/Mashup&gt;")
        );
    }

    #[test]
    fn test_parse_unknown_enum_value() {
        let importer = DescriptorImporter::new();
        let yaml = r#"
officeDataConnection:
  connections:
    - type: JDBC
      connectionString: jdbc:postgresql://localhost/db
"#;
        let result = importer.parse_yaml(yaml);
        assert!(matches!(result, Err(ImportError::ParseError(_))));
    }
}

mod json_import_tests {
    use super::*;

    #[test]
    fn test_parse_false_flag_is_kept() {
        let importer = DescriptorImporter::new();
        let json = r#"{
            "officeDataConnection": {
                "connections": [{
                    "type": "ODBC",
                    "connectionString": "DSN=Northwind",
                    "alwaysUseConnectionFile": false,
                    "culture": "de-DE"
                }]
            }
        }"#;
        let file = importer.parse_json(json).unwrap();
        let connection = &file.office_data_connection.connections[0];

        assert_eq!(connection.always_use_connection_file, Some(false));
        assert_eq!(connection.culture.as_deref(), Some("de-DE"));
    }

    #[test]
    fn test_parse_invalid_json() {
        let importer = DescriptorImporter::new();
        let result = importer.parse_json("{ \"officeDataConnection\": ");
        assert!(matches!(result, Err(ImportError::ParseError(msg)) if msg.contains("JSON")));
    }

    #[test]
    fn test_import_detects_format() {
        let importer = DescriptorImporter::new();
        let json = r#"{ "officeDataConnection": { "sourceFile": "sales.odc" } }"#;
        let yaml = "officeDataConnection:\n  sourceFile: sales.odc\n";

        let from_json = importer.import(json, None).unwrap();
        let from_yaml = importer.import(yaml, None).unwrap();
        assert_eq!(from_json, from_yaml);

        let forced = importer.import(yaml, Some(DescriptorFormat::Json));
        assert!(forced.is_err());
    }
}

mod descriptor_export_tests {
    use super::*;

    #[test]
    fn test_imported_descriptor_renders() {
        let importer = DescriptorImporter::new();
        let yaml = r#"
title: Northwind
documentProperties:
  name: Northwind
officeDataConnection:
  connections:
    - type: ODBC
      connectionString: DRIVER=SQL Server;SERVER=mysqlserver;APP=2007 Microsoft Office system;Trusted_Connection=Yes
      commandText: SELECT * FROM Northwind.dbo.Invoices Invoices
"#;
        let file = importer.parse_yaml(yaml).unwrap();
        let result = ODCExporter::render(&file);

        assert!(result.contains("<title>Northwind</title>"));
        assert!(result.contains("<meta name=ProgId content=ODC.Database>"));
        assert!(result.contains("<meta name=SourceType content=ODBC>"));
        assert!(result.contains(
            "<odc:CommandText>SELECT * FROM Northwind.dbo.Invoices Invoices</odc:CommandText>"
        ));
    }

    #[test]
    fn test_serialized_descriptor_loads_back() {
        let importer = DescriptorImporter::new();
        let yaml = r#"
title: Round trip
officeDataConnection:
  connections:
    - type: DATAFEED
      connectionString: https://example.com/feed
      commandType: TableCollection
"#;
        let file = importer.parse_yaml(yaml).unwrap();
        let json = serde_json::to_string(&file).unwrap();
        let reloaded = importer.parse_json(&json).unwrap();

        assert_eq!(file, reloaded);
        assert_eq!(ODCExporter::render(&file), ODCExporter::render(&reloaded));
    }
}
