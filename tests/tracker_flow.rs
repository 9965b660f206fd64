mod common;

use common::{open_tracker, setup_test_env, temp_root, ymd};
use fintrack::{
    config::Config,
    domain::{Frequency, NewRecurringExpense, NewTransaction, SettingsPatch},
    services::{storage::TRANSACTIONS_KEY, BudgetStatus},
    FinanceTracker, TrackerError,
};

#[test]
fn mutations_persist_across_reopen() {
    let root = temp_root();
    let today = ymd(2026, 8, 12);
    let mut tracker = open_tracker(&root, today);

    let lunch = tracker
        .add_transaction(NewTransaction::expense(14.0).with_category("Food"))
        .expect("add expense");
    tracker
        .add_transaction(NewTransaction::income(2500.0).with_note("salary"))
        .expect("add income");
    let gym = tracker
        .add_recurring_expense(NewRecurringExpense::new(
            "Gym",
            45.0,
            "Healthcare",
            Frequency::Monthly,
        ))
        .expect("add recurring");
    tracker.toggle_recurring_expense(&gym.id).expect("toggle");
    tracker
        .update_settings(SettingsPatch::default().with_monthly_budget(1200.0))
        .expect("update settings");

    let reopened = open_tracker(&root, today);
    assert_eq!(reopened.transactions(), tracker.transactions());
    assert_eq!(reopened.recurring_expenses().len(), 1);
    assert!(!reopened.recurring_expenses()[0].is_active);
    assert_eq!(reopened.settings().monthly_budget, 1200.0);
    assert_eq!(
        reopened.transactions()[0].date.date_naive(),
        today,
        "date is assigned from the clock"
    );

    let mut tracker = reopened;
    tracker.delete_transaction(&lunch.id).expect("delete");
    let reopened = open_tracker(&root, today);
    assert_eq!(reopened.transactions().len(), 1);
}

#[test]
fn stored_documents_use_browser_wire_format() {
    let root = temp_root();
    let mut tracker = open_tracker(&root, ymd(2025, 1, 20));
    tracker
        .add_transaction(NewTransaction::expense(9.99).with_category("Shopping"))
        .expect("add expense");

    let raw = std::fs::read_to_string(root.join("data").join(format!("{TRANSACTIONS_KEY}.json")))
        .expect("read stored document");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let record = &value[0];
    assert_eq!(record["type"], "expense");
    assert_eq!(record["category"], "Shopping");
    assert!(record["date"].as_str().expect("date string").starts_with("2025-01-20T12:00:00"));
}

#[test]
fn unknown_ids_surface_as_not_found() {
    let (mut tracker, _, _) = setup_test_env(ymd(2025, 6, 1));
    let err = tracker.delete_transaction("missing").expect_err("unknown id");
    assert!(matches!(err, TrackerError::NotFound(_)), "unexpected error: {err:?}");
    let err = tracker
        .toggle_recurring_expense("missing")
        .expect_err("unknown id");
    assert!(matches!(err, TrackerError::NotFound(_)));
    let err = tracker
        .add_transaction(NewTransaction::expense(-3.0))
        .expect_err("negative amount");
    assert!(matches!(err, TrackerError::InvalidInput(_)));
}

#[test]
fn dashboard_reflects_current_month() {
    let (mut tracker, _, _) = setup_test_env(ymd(2026, 3, 18));
    tracker
        .update_settings(SettingsPatch::default().with_monthly_budget(1000.0))
        .expect("set budget");
    tracker
        .add_transaction(NewTransaction::expense(700.0).with_category("Travel"))
        .expect("add expense");
    tracker
        .add_transaction(NewTransaction::expense(50.0))
        .expect("add uncategorized expense");
    tracker
        .add_recurring_expense(NewRecurringExpense::new(
            "Cleaner",
            40.0,
            "Housing",
            Frequency::Weekly,
        ))
        .expect("add weekly");

    // March 2026: four Saturdays, so 160 of recurring cost.
    let summary = tracker.dashboard();
    assert_eq!(summary.reference, ymd(2026, 3, 18));
    assert_eq!(summary.rollup.total_recurring, 160.0);
    assert_eq!(summary.rollup.remaining, 90.0);
    assert_eq!(summary.rollup.status, BudgetStatus::RunningLow);
    assert_eq!(summary.categories.get("Uncategorized"), Some(50.0));
    assert_eq!(summary.monthly.expenses, 750.0);
    assert_eq!(summary.frequencies.weekly, 40.0);
    assert_eq!(tracker.monthly_totals(), summary.monthly);
    assert_eq!(tracker.breakdown(), summary.categories);
}

#[test]
fn with_defaults_uses_configured_data_root() {
    let root = temp_root();
    let config = Config {
        uncategorized_label: "Unsorted".into(),
        ..Config::default()
    }
    .with_data_root(root.join("records"));

    let mut tracker = FinanceTracker::with_defaults(config.clone()).expect("open defaults");
    tracker
        .add_transaction(NewTransaction::expense(3.0))
        .expect("add expense");
    assert!(root.join("records").join(format!("{TRANSACTIONS_KEY}.json")).exists());
    assert_eq!(tracker.breakdown().get("Unsorted"), Some(3.0));

    let reopened = FinanceTracker::with_defaults(config).expect("reopen");
    assert_eq!(reopened.transactions().len(), 1);
}

#[test]
fn config_round_trips_through_manager() {
    let (_, manager, root) = setup_test_env(ymd(2025, 2, 2));
    let config = Config::default().with_data_root(root.join("elsewhere"));
    manager.save(&config).expect("save config");
    assert_eq!(manager.load().expect("load config"), config);
}
