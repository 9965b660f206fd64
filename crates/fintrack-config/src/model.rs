use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Application-level settings that are not part of the persisted finance records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    /// Group name for expenses recorded without a category.
    #[serde(default = "Config::default_uncategorized_label")]
    pub uncategorized_label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory holding the record documents. Resolved at startup when unset.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            uncategorized_label: Self::default_uncategorized_label(),
            data_root: None,
        }
    }
}

impl Config {
    fn default_currency() -> String {
        DEFAULT_CURRENCY.into()
    }

    fn default_uncategorized_label() -> String {
        DEFAULT_UNCATEGORIZED_LABEL.into()
    }

    pub fn with_data_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.data_root = Some(root.into());
        self
    }

    /// The fallback label, or the default when the configured one is blank.
    pub fn uncategorized_label(&self) -> &str {
        let label = self.uncategorized_label.trim();
        if label.is_empty() {
            DEFAULT_UNCATEGORIZED_LABEL
        } else {
            label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_documents_fill_defaults() {
        let config: Config = serde_json::from_str(r#"{"currency":"EUR"}"#).unwrap();
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.uncategorized_label(), "Uncategorized");
        assert!(config.data_root.is_none());
    }

    #[test]
    fn blank_label_falls_back() {
        let config = Config {
            uncategorized_label: "   ".into(),
            ..Config::default()
        };
        assert_eq!(config.uncategorized_label(), "Uncategorized");
    }
}
