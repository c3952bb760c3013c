//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};
use super::ConfigError;

mod parsing {
    use super::*;

    #[test]
    fn full_config_parses() {
        let config = TomlConfig::parse(
            r#"
            [endpoints]
            orders = "http://orders.example.com/notify"
            billing = "http://billing.example.com/hook"

            [request]
            receiver = "orders"
            request_type = "get"

            [request.params]
            track = "42"
            format = "mp3"
            "#,
        )
        .unwrap();

        let endpoints = config.endpoints.unwrap();
        let table = endpoints.as_table().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table["orders"].as_str(),
            Some("http://orders.example.com/notify")
        );

        assert_eq!(config.request.receiver.as_deref(), Some("orders"));
        assert_eq!(config.request.request_type.as_deref(), Some("get"));
        assert_eq!(config.request.params.len(), 2);
    }

    #[test]
    fn empty_config_parses_to_defaults() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.endpoints.is_none());
        assert!(config.request.receiver.is_none());
        assert!(config.request.request_type.is_none());
        assert!(config.request.params.is_empty());
    }

    #[test]
    fn endpoints_of_any_shape_are_kept_opaque() {
        // Shape validation belongs to the registry, not the config layer
        let config = TomlConfig::parse(r#"endpoints = "not a table""#).unwrap();

        assert_eq!(
            config.endpoints.and_then(|v| v.as_str().map(String::from)),
            Some("not a table".to_string())
        );
    }

    #[test]
    fn numeric_param_values_parse() {
        let config = TomlConfig::parse(
            r"
            [request.params]
            id = 7
            ",
        )
        .unwrap();

        assert_eq!(config.request.params["id"].as_integer(), Some(7));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = TomlConfig::parse("unknown_field = true");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_request_fields_are_rejected() {
        let result = TomlConfig::parse(
            r"
            [request]
            retries = 3
            ",
        );
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let result = TomlConfig::parse("this is not toml [");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_is_valid_config() {
        let template = default_config_template();
        let config = TomlConfig::parse(&template).unwrap();

        // Everything in the template is commented out
        assert!(config.endpoints.is_none());
        assert!(config.request.receiver.is_none());
    }

    #[test]
    fn default_template_documents_the_sections() {
        let template = default_config_template();

        assert!(template.contains("[endpoints]"));
        assert!(template.contains("[request]"));
        assert!(template.contains("request_type"));
    }
}

mod loading {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [request]
            receiver = "orders"
            "#
        )
        .unwrap();

        let config = TomlConfig::load(file.path()).unwrap();
        assert_eq!(config.request.receiver.as_deref(), Some("orders"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = TomlConfig::load(std::path::Path::new("/nonexistent/notify-out.toml"));

        match result {
            Err(ConfigError::FileRead { path, .. }) => {
                assert_eq!(path, std::path::Path::new("/nonexistent/notify-out.toml"));
            }
            other => panic!("expected FileRead, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not [ valid ] toml =").unwrap();

        let result = TomlConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}
