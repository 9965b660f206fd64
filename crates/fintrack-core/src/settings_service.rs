use fintrack_domain::{FinanceState, SettingsPatch, UserSettings};

use crate::validation::validate_budget;
use crate::CoreError;

pub struct SettingsService;

impl SettingsService {
    /// Merges `patch` into the current settings after validating and normalising it.
    pub fn update(
        state: &mut FinanceState,
        mut patch: SettingsPatch,
    ) -> Result<UserSettings, CoreError> {
        if patch.is_empty() {
            tracing::debug!("empty settings patch ignored");
            return Ok(state.settings.clone());
        }
        if let Some(budget) = patch.monthly_budget {
            if let Err(err) = validate_budget(budget) {
                tracing::warn!(error = %err, "rejected settings update");
                return Err(err);
            }
        }
        if let Some(categories) = patch.categories.take() {
            patch.categories = Some(normalize_categories(categories));
        }
        state.settings.apply(patch);
        tracing::info!(
            monthly_budget = state.settings.monthly_budget,
            categories = state.settings.categories.len(),
            "settings updated"
        );
        Ok(state.settings.clone())
    }
}

fn normalize_categories(categories: Vec<String>) -> Vec<String> {
    categories
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}
