//! Unit tests for config module
//!
//! Tests formats, path resolution and error classification.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ConfigPaths, ConfigStore, Format, Versioned};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
struct ShaderSettings {
    schema_version: u32,
    #[serde(default)]
    enable_bloom: bool,
    #[serde(default)]
    blur_radius: f64,
    #[serde(default)]
    disabled_effects: Vec<String>,
}

impl Versioned for ShaderSettings {
    fn is_up_to_date(&self) -> bool {
        self.schema_version == 2
    }

    fn update(&mut self) {
        if self.schema_version < 2 {
            self.blur_radius = self.blur_radius.max(1.0);
        }
        self.schema_version = 2;
    }
}

fn sample() -> ShaderSettings {
    ShaderSettings {
        schema_version: 2,
        enable_bloom: true,
        blur_radius: 2.5,
        disabled_effects: vec!["motion_blur".to_string()],
    }
}

#[test]
fn format_from_path() {
    assert_eq!(Format::from_path(Path::new("shaders.json")), Format::Json);
    assert_eq!(Format::from_path(Path::new("shaders.toml")), Format::Toml);
    assert_eq!(Format::from_path(Path::new("nested/shaders.TOML")), Format::Toml);
    assert_eq!(Format::from_path(Path::new("shaders")), Format::Json);
    assert_eq!(Format::from_path(Path::new("shaders.cfg")), Format::Json);
}

#[test]
fn json_encoding_is_pretty_with_snake_case_fields() {
    let text = Format::Json.encode(&sample()).unwrap();

    assert!(text.contains("\n  \"schema_version\": 2"));
    assert!(text.contains("\"enable_bloom\": true"));
    assert!(text.contains("\"disabled_effects\""));
    assert!(text.ends_with("}\n"));
}

#[test]
fn toml_encoding_ends_with_newline() {
    let text = Format::Toml.encode(&sample()).unwrap();

    assert!(text.contains("schema_version = 2"));
    assert!(text.contains("enable_bloom = true"));
    assert!(text.ends_with('\n'));
}

#[test]
fn json_roundtrip() {
    let original = sample();
    let text = Format::Json.encode(&original).unwrap();

    let decoded: Option<ShaderSettings> = Format::Json.decode(&text, Path::new("a.json")).unwrap();

    assert_eq!(decoded, Some(original));
}

#[test]
fn toml_roundtrip() {
    let original = sample();
    let text = Format::Toml.encode(&original).unwrap();

    let decoded: Option<ShaderSettings> = Format::Toml.decode(&text, Path::new("a.toml")).unwrap();

    assert_eq!(decoded, Some(original));
}

#[test]
fn decode_blank_content_is_none() {
    for format in [Format::Json, Format::Toml] {
        let decoded: Option<ShaderSettings> = format.decode("", Path::new("a")).unwrap();
        assert_eq!(decoded, None);

        let decoded: Option<ShaderSettings> = format.decode("  \n\t", Path::new("a")).unwrap();
        assert_eq!(decoded, None);
    }
}

#[test]
fn decode_json_null_is_none() {
    let decoded: Option<ShaderSettings> = Format::Json.decode("null", Path::new("a.json")).unwrap();

    assert_eq!(decoded, None);
}

#[test]
fn decode_malformed_json_reports_path() {
    let result: Result<Option<ShaderSettings>, _> =
        Format::Json.decode("{ \"schema_version\": ", Path::new("broken.json"));

    match result {
        Err(ConfigError::Decode { path, details }) => {
            assert_eq!(path, PathBuf::from("broken.json"));
            assert!(!details.is_empty());
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn decode_wrong_shape_is_error() {
    let result: Result<Option<ShaderSettings>, _> =
        Format::Json.decode("{\"enable_bloom\": true}", Path::new("a.json"));
    assert!(matches!(result, Err(ConfigError::Decode { .. })));

    let result: Result<Option<ShaderSettings>, _> =
        Format::Toml.decode("schema_version = \"two\"", Path::new("a.toml"));
    assert!(matches!(result, Err(ConfigError::Decode { .. })));
}

#[test]
fn update_reaches_current_version_and_is_idempotent() {
    let mut settings = ShaderSettings {
        schema_version: 1,
        enable_bloom: false,
        blur_radius: 0.0,
        disabled_effects: Vec::new(),
    };
    assert!(!settings.is_up_to_date());

    settings.update();
    assert!(settings.is_up_to_date());
    let once = settings.clone();

    settings.update();
    assert_eq!(settings, once);
}

#[test]
fn resolve_joins_root() {
    let store = ConfigStore::new("/srv/config");

    assert_eq!(
        store.resolve("shaders.json").unwrap(),
        PathBuf::from("/srv/config/shaders.json")
    );
    assert_eq!(
        store.resolve("shaders/bloom.toml").unwrap(),
        PathBuf::from("/srv/config/shaders/bloom.toml")
    );
}

#[test]
fn resolve_rejects_empty_and_absolute_names() {
    let store = ConfigStore::new("/srv/config");

    assert!(matches!(
        store.resolve(""),
        Err(ConfigError::InvalidFileName { .. })
    ));
    assert!(matches!(
        store.resolve("/etc/passwd"),
        Err(ConfigError::InvalidFileName { name }) if name == "/etc/passwd"
    ));
}

#[test]
fn error_classification() {
    let empty = ConfigError::Empty {
        path: PathBuf::from("a.json"),
    };
    let decode = ConfigError::decode("bad", "a.json");
    let io = ConfigError::io(std::io::Error::other("disk"), "a.json");
    let encode = ConfigError::encode("bad");

    assert!(empty.is_decode());
    assert!(decode.is_decode());
    assert!(!io.is_decode());
    assert!(!encode.is_decode());
}

#[test]
fn error_messages_name_the_path() {
    let error = ConfigError::Empty {
        path: PathBuf::from("shaders.json"),
    };

    assert_eq!(error.to_string(), "config at 'shaders.json' is empty");
}

#[test]
fn config_dir_ends_with_app_name() {
    if std::env::var("HOME").is_ok() || std::env::var("XDG_CONFIG_HOME").is_ok() {
        let dir = ConfigPaths::config_dir("shaders").unwrap();
        assert!(dir.ends_with("shaders"));
    }
}

#[test]
fn config_dir_prefers_xdg_config_home() {
    let dir = ConfigPaths::config_dir_from(
        Some("/xdg".to_string()),
        Some("/home/player".to_string()),
        "shaders",
    )
    .unwrap();

    assert_eq!(dir, PathBuf::from("/xdg/shaders"));
}

#[test]
fn config_dir_treats_empty_variables_as_unset() {
    let dir =
        ConfigPaths::config_dir_from(Some(String::new()), Some("/home/player".to_string()), "shaders")
            .unwrap();
    assert_eq!(dir, PathBuf::from("/home/player/.config/shaders"));

    let error = ConfigPaths::config_dir_from(None, Some(String::new()), "shaders").unwrap_err();
    assert_eq!(error.kind(), std::io::ErrorKind::NotFound);

    let error = ConfigPaths::config_dir_from(Some(String::new()), None, "shaders").unwrap_err();
    assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn missing_config_dir_names_the_app() {
    let source = ConfigPaths::config_dir_from(None, None, "shaders").unwrap_err();
    let error = ConfigError::NoConfigDir {
        app_name: "shaders".to_string(),
        source,
    };

    assert!(!error.is_decode());
    assert!(error.to_string().starts_with("cannot locate config directory for 'shaders'"));
}
