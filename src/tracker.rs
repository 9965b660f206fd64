//! Stateful facade that owns the finance records and keeps the store in sync.

use chrono::NaiveDate;
use fintrack_config::Config;
use fintrack_core::{
    breakdown_with_label, monthly_totals, project_monthly_cost, rollup,
    storage::{self, KeyValueStore},
    BudgetRollup, CategoryBreakdown, Clock, CurrencyFormatter, DashboardSummary, DateFormatter,
    IdGenerator, MonthlyTotals, RecurringService, SettingsService, ShortDateFormatter,
    StandardCurrencyFormatter, SummaryService, SystemClock, TransactionService, UuidGenerator,
};
use fintrack_domain::{
    FinanceState, NewRecurringExpense, NewTransaction, RecurringExpense, SettingsPatch,
    Transaction, UserSettings,
};
use fintrack_storage_json::JsonFileStore;

use crate::errors::Result;
use crate::utils::paths::resolve_data_root;

/// Holds the loaded state plus the collaborators used to mutate and persist it.
///
/// Every mutation writes the affected key before returning. When the write fails the in-memory
/// collection is restored so state and store never diverge.
pub struct FinanceTracker {
    state: FinanceState,
    store: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    config: Config,
}

impl FinanceTracker {
    pub fn open(
        store: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
        config: Config,
    ) -> Result<Self> {
        let state = storage::load_state(store.as_ref())?;
        tracing::info!(
            transactions = state.transactions.len(),
            recurring = state.recurring_expenses.len(),
            "finance tracker opened"
        );
        Ok(Self {
            state,
            store,
            clock,
            ids,
            config,
        })
    }

    /// System clock, UUID ids and a JSON file store under the configured data root.
    pub fn with_defaults(config: Config) -> Result<Self> {
        let root = resolve_data_root(&config);
        let store = JsonFileStore::new(root)?;
        Self::open(
            Box::new(store),
            Box::new(SystemClock),
            Box::new(UuidGenerator),
            config,
        )
    }

    /// Discards in-memory state and reads it back from the store.
    pub fn reload(&mut self) -> Result<()> {
        self.state = storage::load_state(self.store.as_ref())?;
        Ok(())
    }

    pub fn state(&self) -> &FinanceState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn recurring_expenses(&self) -> &[RecurringExpense] {
        &self.state.recurring_expenses
    }

    pub fn settings(&self) -> &UserSettings {
        &self.state.settings
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn add_transaction(&mut self, input: NewTransaction) -> Result<Transaction> {
        let previous = self.state.transactions.clone();
        let txn = TransactionService::add(
            &mut self.state,
            input,
            self.clock.as_ref(),
            self.ids.as_ref(),
        )?;
        self.persist_transactions(previous)?;
        Ok(txn)
    }

    pub fn delete_transaction(&mut self, id: &str) -> Result<Transaction> {
        let previous = self.state.transactions.clone();
        let removed = TransactionService::remove(&mut self.state, id)?;
        self.persist_transactions(previous)?;
        Ok(removed)
    }

    pub fn add_recurring_expense(&mut self, input: NewRecurringExpense) -> Result<RecurringExpense> {
        let previous = self.state.recurring_expenses.clone();
        let expense = RecurringService::add(&mut self.state, input, self.ids.as_ref())?;
        self.persist_recurring(previous)?;
        Ok(expense)
    }

    pub fn update_recurring_expense(&mut self, expense: RecurringExpense) -> Result<()> {
        let previous = self.state.recurring_expenses.clone();
        RecurringService::update(&mut self.state, expense)?;
        self.persist_recurring(previous)
    }

    pub fn delete_recurring_expense(&mut self, id: &str) -> Result<RecurringExpense> {
        let previous = self.state.recurring_expenses.clone();
        let removed = RecurringService::remove(&mut self.state, id)?;
        self.persist_recurring(previous)?;
        Ok(removed)
    }

    /// Returns the new active flag.
    pub fn toggle_recurring_expense(&mut self, id: &str) -> Result<bool> {
        let previous = self.state.recurring_expenses.clone();
        let active = RecurringService::toggle(&mut self.state, id)?;
        self.persist_recurring(previous)?;
        Ok(active)
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<UserSettings> {
        let previous = self.state.settings.clone();
        let settings = SettingsService::update(&mut self.state, patch)?;
        if let Err(err) = storage::save_settings(self.store.as_ref(), &self.state.settings) {
            tracing::warn!(error = %err, "failed to persist settings");
            self.state.settings = previous;
            return Err(err.into());
        }
        Ok(settings)
    }

    pub fn projected_recurring(&self) -> f64 {
        project_monthly_cost(&self.state.recurring_expenses, self.today())
    }

    pub fn breakdown(&self) -> CategoryBreakdown {
        breakdown_with_label(&self.state.transactions, self.config.uncategorized_label())
    }

    pub fn rollup(&self) -> BudgetRollup {
        rollup(
            self.state.settings.monthly_budget,
            &self.state.transactions,
            &self.state.recurring_expenses,
            self.today(),
        )
    }

    pub fn monthly_totals(&self) -> MonthlyTotals {
        monthly_totals(&self.state.transactions, self.today(), self.clock.offset())
    }

    pub fn dashboard(&self) -> DashboardSummary {
        SummaryService::dashboard(
            &self.state,
            self.today(),
            self.clock.offset(),
            self.config.uncategorized_label(),
        )
    }

    /// Formats `amount` in the user's currency, falling back to the configured one.
    pub fn format_amount(&self, amount: f64) -> String {
        let currency = self
            .state
            .settings
            .currency
            .as_deref()
            .unwrap_or(&self.config.currency);
        StandardCurrencyFormatter.format_amount(amount, currency)
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        ShortDateFormatter.format_date(date)
    }

    fn persist_transactions(&mut self, previous: Vec<Transaction>) -> Result<()> {
        if let Err(err) = storage::save_transactions(self.store.as_ref(), &self.state.transactions)
        {
            tracing::warn!(error = %err, "failed to persist transactions");
            self.state.transactions = previous;
            return Err(err.into());
        }
        Ok(())
    }

    fn persist_recurring(&mut self, previous: Vec<RecurringExpense>) -> Result<()> {
        if let Err(err) =
            storage::save_recurring_expenses(self.store.as_ref(), &self.state.recurring_expenses)
        {
            tracing::warn!(error = %err, "failed to persist recurring expenses");
            self.state.recurring_expenses = previous;
            return Err(err.into());
        }
        Ok(())
    }
}
