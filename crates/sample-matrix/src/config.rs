use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for the buffer boundary.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MarshalConfig {
    /// Also require the second dimension of each buffer to equal N.
    pub check_columns: bool,
    /// env_logger filter used when `SAMPLE_MATRIX_LOG` is unset.
    pub log_filter: String,
}

impl Default for MarshalConfig {
    fn default() -> Self {
        MarshalConfig {
            check_columns: false,
            log_filter: String::from("warn,sample_matrix=info"),
        }
    }
}

impl MarshalConfig {
    pub fn new(check_columns: bool) -> Self {
        Self {
            check_columns,
            ..Self::default()
        }
    }

    /// Load from a JSON file. Missing or invalid fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json_str(&config_json)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_json_str(config_json: &str) -> Result<Self> {
        let partial: serde_json::Value = serde_json::from_str(config_json)?;
        let mut config = MarshalConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field), config.$field
                        );
                    }
                } else {
                    log::warn!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field), config.$field
                    );
                }
            };
        }

        load_or_default!(check_columns);
        load_or_default!(log_filter);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_checks_first_dimension_only() {
        let cfg = MarshalConfig::default();
        assert!(!cfg.check_columns);
        assert!(cfg.log_filter.contains("sample_matrix"));
    }

    #[test]
    fn invalid_field_falls_back() {
        let cfg = MarshalConfig::from_json_str(r#"{"check_columns": "yes"}"#).unwrap();
        assert_eq!(cfg, MarshalConfig::default());
    }

    #[test]
    fn malformed_json_errors() {
        assert!(MarshalConfig::from_json_str("{check_columns").is_err());
    }
}
