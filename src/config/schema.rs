use serde::{Deserialize, Serialize};

use crate::dataset::writer::OutputLabels;
use crate::dataset::DEFAULT_YES_TOKEN;
use crate::scoring::TablesConfig;

/// Top-level config file schema. Everything is optional; an empty or
/// missing file means the built-in model and dataset conventions.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Coefficient table overrides
    #[serde(default)]
    pub tables: Option<TablesConfig>,

    /// Dataset conventions (flag token, output column labels)
    #[serde(default)]
    pub dataset: Option<DatasetConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    /// Token marking an affirmative diabetes/smoking flag (default: "是")
    #[serde(default)]
    pub yes_token: Option<String>,

    /// Header label for the risk column
    #[serde(default)]
    pub risk_label: Option<String>,

    /// Header label for the population estimate column
    #[serde(default)]
    pub estimate_label: Option<String>,
}

impl Config {
    /// Check the dataset overrides. Returns all errors at once.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if let Some(dataset) = &self.dataset {
            for (field, value) in [
                ("yes_token", &dataset.yes_token),
                ("risk_label", &dataset.risk_label),
                ("estimate_label", &dataset.estimate_label),
            ] {
                if let Some(value) = value {
                    if value.trim().is_empty() {
                        errors.push(format!("dataset.{}: must not be empty", field));
                    }
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn yes_token(&self) -> &str {
        self.dataset
            .as_ref()
            .and_then(|d| d.yes_token.as_deref())
            .unwrap_or(DEFAULT_YES_TOKEN)
    }

    pub fn output_labels(&self) -> OutputLabels {
        let defaults = OutputLabels::default();
        let dataset = self.dataset.as_ref();
        OutputLabels {
            risk: dataset
                .and_then(|d| d.risk_label.clone())
                .unwrap_or(defaults.risk),
            estimate: dataset
                .and_then(|d| d.estimate_label.clone())
                .unwrap_or(defaults.estimate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.yes_token(), "是");
        assert_eq!(config.output_labels(), OutputLabels::default());
    }

    #[test]
    fn test_dataset_overrides_parse() {
        let yaml = r#"
dataset:
  yes_token: "yes"
  risk_label: "10-year risk"
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.yes_token(), "yes");
        let labels = config.output_labels();
        assert_eq!(labels.risk, "10-year risk");
        assert_eq!(labels.estimate, OutputLabels::default().estimate);
    }

    #[test]
    fn test_tables_section_parse() {
        let yaml = r#"
tables:
  smoking: 3
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.tables.unwrap().smoking, Some(3));
    }

    #[test]
    fn test_validate_rejects_empty_overrides() {
        let config = Config {
            tables: None,
            dataset: Some(DatasetConfig {
                yes_token: Some("".to_string()),
                risk_label: Some("  ".to_string()),
                estimate_label: None,
            }),
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("dataset.yes_token"));
        assert!(errors[1].contains("dataset.risk_label"));
    }

    #[test]
    fn test_validate_accepts_default_config() {
        assert!(Config::default().validate().is_ok());
    }
}
