// Configuration loading and parsing (config/dugout.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub data_paths: DataPaths,
}

/// Paths to the four dataset files. Defaults point at a `data/` directory
/// next to the binary's working directory, matching the usual layout of a
/// Lahman CSV export.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub people: String,
    pub teams: String,
    pub batting: String,
    pub pitching: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths {
            people: "data/People.csv".into(),
            teams: "data/Teams.csv".into(),
            batting: "data/Batting.csv".into(),
            pitching: "data/Pitching.csv".into(),
        }
    }
}

/// Raw deserialization target for the whole dugout.toml file.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    data_paths: DataPaths,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `config/dugout.toml` relative to `base_dir`.
///
/// A missing config file is not an error: all settings have defaults. An
/// unreadable or unparseable file is an error, so a typo never silently
/// falls back to defaults.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let config_path = base_dir.join("config").join("dugout.toml");

    if !config_path.exists() {
        return Ok(Config {
            data_paths: DataPaths::default(),
        });
    }

    let text = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    let file: ConfigFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: config_path.clone(),
        source: e,
    })?;

    let config = Config {
        data_paths: file.data_paths,
    };

    validate(&config)?;

    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working
/// directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadError {
        path: PathBuf::from("."),
        source: e,
    })?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let paths = &config.data_paths;
    let fields: &[(&str, &str)] = &[
        ("data_paths.people", &paths.people),
        ("data_paths.teams", &paths.teams),
        ("data_paths.batting", &paths.batting),
        ("data_paths.pitching", &paths.pitching),
    ];
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_config_file_uses_defaults() {
        let tmp = std::env::temp_dir().join("dugout_config_test_defaults");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        let config = load_config_from(&tmp).expect("defaults should load");
        assert_eq!(config.data_paths.people, "data/People.csv");
        assert_eq!(config.data_paths.teams, "data/Teams.csv");
        assert_eq!(config.data_paths.batting, "data/Batting.csv");
        assert_eq!(config.data_paths.pitching, "data/Pitching.csv");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn config_file_overrides_paths() {
        let tmp = std::env::temp_dir().join("dugout_config_test_override");
        let config_dir = tmp.join("config");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&config_dir).unwrap();

        let toml_text = r#"
[data_paths]
people = "/srv/lahman/People.csv"
teams = "/srv/lahman/Teams.csv"
batting = "/srv/lahman/Batting.csv"
pitching = "/srv/lahman/Pitching.csv"
"#;
        fs::write(config_dir.join("dugout.toml"), toml_text).unwrap();

        let config = load_config_from(&tmp).expect("should load config file");
        assert_eq!(config.data_paths.people, "/srv/lahman/People.csv");
        assert_eq!(config.data_paths.pitching, "/srv/lahman/Pitching.csv");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = std::env::temp_dir().join("dugout_config_test_invalid");
        let config_dir = tmp.join("config");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&config_dir).unwrap();

        fs::write(config_dir.join("dugout.toml"), "this is not valid [[[ toml").unwrap();

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ParseError { path, .. } => {
                assert!(path.ends_with("dugout.toml"));
            }
            other => panic!("expected ParseError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_path() {
        let tmp = std::env::temp_dir().join("dugout_config_test_empty_path");
        let config_dir = tmp.join("config");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&config_dir).unwrap();

        let toml_text = r#"
[data_paths]
people = "data/People.csv"
teams = ""
batting = "data/Batting.csv"
pitching = "data/Pitching.csv"
"#;
        fs::write(config_dir.join("dugout.toml"), toml_text).unwrap();

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "data_paths.teams");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }
}
