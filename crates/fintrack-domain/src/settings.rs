//! User-level budget settings persisted alongside the records.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};

pub const DEFAULT_MONTHLY_BUDGET: f64 = 3000.0;
pub const DEFAULT_CURRENCY: &str = "USD";

pub const DEFAULT_CATEGORIES: [&str; 14] = [
    "Housing",
    "Transportation",
    "Food",
    "Utilities",
    "Healthcare",
    "Entertainment",
    "Shopping",
    "Personal Care",
    "Education",
    "Travel",
    "Debt",
    "Savings",
    "Gifts",
    "Other",
];

/// Budget ceiling and presentation preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub monthly_budget: f64,
    /// Allowed labels offered by the UI; calculations never consult this list.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_theme: Option<ColorTheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            currency: Some(DEFAULT_CURRENCY.into()),
            color_theme: Some(ColorTheme::default()),
            notifications: Some(true),
        }
    }
}

impl UserSettings {
    pub fn currency_code(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// Overwrites every field present in `patch`, keeping the rest.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(budget) = patch.monthly_budget {
            self.monthly_budget = budget;
        }
        if let Some(categories) = patch.categories {
            self.categories = categories;
        }
        if let Some(currency) = patch.currency {
            self.currency = Some(currency);
        }
        if let Some(theme) = patch.color_theme {
            self.color_theme = Some(theme);
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = Some(notifications);
        }
    }
}

/// Partial settings update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_theme: Option<ColorTheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
}

impl SettingsPatch {
    pub fn with_monthly_budget(mut self, budget: f64) -> Self {
        self.monthly_budget = Some(budget);
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &SettingsPatch::default()
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Dark,
    Light,
    Blue,
    Purple,
}

impl ColorTheme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| ColorTheme::from_name(&v))
            .unwrap_or_default()
    }

    /// Exact lookup of the stored lowercase names; anything else falls back to the dark theme.
    pub fn from_name(value: &str) -> Self {
        match value {
            "light" => ColorTheme::Light,
            "blue" => ColorTheme::Blue,
            "purple" => ColorTheme::Purple,
            _ => ColorTheme::Dark,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColorTheme::Dark => "dark",
            ColorTheme::Light => "light",
            ColorTheme::Blue => "blue",
            ColorTheme::Purple => "purple",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for ColorTheme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(ColorTheme::from_value(value))
    }
}
