//! Domain models for standing obligations that repeat on a schedule.

use std::fmt;

use chrono::NaiveDate;
use serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize};

use crate::common::*;

/// Recurrence cadence of a recurring expense.
///
/// Values outside the known set are kept verbatim in [`Frequency::Unknown`] so records written
/// by newer clients survive a load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Frequency {
    #[default]
    Monthly,
    Biweekly,
    /// Every Saturday.
    Weekly,
    /// Every Monday through Friday.
    Weekdays,
    Daily,
    Unknown(String),
}

impl Frequency {
    /// The recognised cadences, in display order.
    pub fn known() -> [Frequency; 5] {
        [
            Frequency::Monthly,
            Frequency::Biweekly,
            Frequency::Weekly,
            Frequency::Weekdays,
            Frequency::Daily,
        ]
    }

    /// Parses a wire value. Matching is exact; anything else becomes `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value {
            "monthly" => Frequency::Monthly,
            "biweekly" => Frequency::Biweekly,
            "weekly" => Frequency::Weekly,
            "weekdays" => Frequency::Weekdays,
            "daily" => Frequency::Daily,
            other => Frequency::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Biweekly => "biweekly",
            Frequency::Weekly => "weekly",
            Frequency::Weekdays => "weekdays",
            Frequency::Daily => "daily",
            Frequency::Unknown(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Frequency::Monthly => "Monthly",
            Frequency::Biweekly => "Bi-weekly",
            Frequency::Weekly => "Weekly",
            Frequency::Weekdays => "Weekdays",
            Frequency::Daily => "Daily",
            Frequency::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Frequency::Unknown(_))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Frequency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Frequency::parse(&value))
    }
}

/// A standing obligation with a per-occurrence amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    pub id: String,
    pub title: String,
    /// Charged once per occurrence, never pre-multiplied.
    pub amount: f64,
    pub category: String,
    pub frequency: Frequency,
    /// Captured for display only; projections ignore it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl RecurringExpense {
    pub fn from_new(id: impl Into<String>, input: NewRecurringExpense) -> Self {
        Self {
            id: id.into(),
            title: input.title,
            amount: input.amount,
            category: input.category,
            frequency: input.frequency,
            start_date: input.start_date,
            is_active: input.is_active,
        }
    }

    /// Flips the active flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_active = !self.is_active;
        self.is_active
    }
}

impl Identifiable for RecurringExpense {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Amounted for RecurringExpense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for RecurringExpense {
    fn display_label(&self) -> String {
        let state = if self.is_active { "active" } else { "inactive" };
        format!(
            "{} ({} {:.2}, {})",
            self.title,
            self.frequency.label(),
            self.amount,
            state
        )
    }
}

/// User-supplied fields of a recurring expense; the id is assigned on insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRecurringExpense {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl NewRecurringExpense {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        frequency: Frequency,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            category: category.into(),
            frequency,
            start_date: None,
            is_active: true,
        }
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_frequency_survives_roundtrip() {
        let raw = r#"{"id":"r1","title":"Gym","amount":15,"category":"Health","frequency":"quarterly","isActive":true}"#;
        let expense: RecurringExpense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.frequency, Frequency::Unknown("quarterly".into()));
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["frequency"], "quarterly");
        assert_eq!(value["isActive"], true);
        assert!(value.get("startDate").is_none());
    }

    #[test]
    fn frequency_matching_is_exact() {
        assert_eq!(Frequency::parse("weekdays"), Frequency::Weekdays);
        assert_eq!(Frequency::parse("Weekly"), Frequency::Unknown("Weekly".into()));
        assert!(!Frequency::parse(" daily").is_known());
        assert_eq!(Frequency::default(), Frequency::Monthly);
    }

    #[test]
    fn start_date_uses_calendar_date_format() {
        let raw = r#"{"id":"r2","title":"Rent","amount":1200,"category":"Housing","frequency":"monthly","startDate":"2025-02-01","isActive":false}"#;
        let expense: RecurringExpense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.start_date, NaiveDate::from_ymd_opt(2025, 2, 1));
        assert!(!expense.is_active);
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["startDate"], "2025-02-01");
    }

    #[test]
    fn toggle_flips_active_flag() {
        let mut expense = RecurringExpense::from_new(
            "r3",
            NewRecurringExpense::new("Coffee", 4.0, "Food", Frequency::Weekdays),
        );
        assert!(expense.is_active);
        assert!(!expense.toggle());
        assert!(expense.toggle());
    }
}
