use chrono::{TimeZone, Utc};
use fintrack_core::storage::{
    load_state, save_recurring_expenses, save_settings, save_transactions, KeyValueStore,
    TRANSACTIONS_KEY, USER_SETTINGS_KEY,
};
use fintrack_core::CoreError;
use fintrack_domain::{
    Frequency, NewRecurringExpense, NewTransaction, RecurringExpense, SettingsPatch, Transaction,
    UserSettings,
};
use fintrack_storage_json::JsonFileStore;
use std::fs;
use tempfile::tempdir;

#[test]
fn json_store_round_trips_full_state() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("data")).expect("create store");

    let date = Utc.with_ymd_and_hms(2025, 11, 2, 16, 45, 0).unwrap();
    let transactions = vec![Transaction::from_new(
        "t1",
        date,
        NewTransaction::expense(18.75)
            .with_category("Food")
            .with_note("pizza"),
    )];
    let recurring = vec![RecurringExpense::from_new(
        "r1",
        NewRecurringExpense::new("Bus pass", 2.5, "Transportation", Frequency::Weekdays),
    )];
    let mut settings = UserSettings::default();
    settings.apply(SettingsPatch::default().with_monthly_budget(1500.0));

    save_transactions(&store, &transactions).expect("save transactions");
    save_recurring_expenses(&store, &recurring).expect("save recurring");
    save_settings(&store, &settings).expect("save settings");

    let loaded = store.load_state().expect("load state");
    assert_eq!(loaded.transactions, transactions);
    assert_eq!(loaded.recurring_expenses, recurring);
    assert_eq!(loaded.settings, settings);

    let keys = store.list_keys().expect("list keys");
    assert_eq!(
        keys,
        vec![
            "finance_tracker_recurring_expenses",
            "finance_tracker_transactions",
            "finance_tracker_user_settings",
        ]
    );
}

#[test]
fn json_store_missing_directory_contents_load_defaults() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path()).expect("create store");
    let state = load_state(&store).expect("load state");
    assert!(state.transactions.is_empty());
    assert_eq!(state.settings.monthly_budget, 3000.0);
    assert_eq!(store.get(USER_SETTINGS_KEY).expect("get"), None);
}

#[test]
fn json_store_leaves_no_tmp_files_and_reports_bad_json() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path()).expect("create store");
    store.set(TRANSACTIONS_KEY, "[]").expect("set");

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(Result::ok)
        .filter(|entry| entry.path().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "tmp files left behind");

    fs::write(store.key_path(TRANSACTIONS_KEY), "[{\"id\":").expect("corrupt file");
    let err = load_state(&store).expect_err("corrupt data must fail");
    assert!(matches!(err, CoreError::Serde(_)), "unexpected error: {err:?}");

    store.remove(TRANSACTIONS_KEY).expect("remove");
    store.remove(TRANSACTIONS_KEY).expect("remove twice");
    assert!(load_state(&store).expect("load").transactions.is_empty());
}

#[test]
fn json_store_failed_write_cleans_up_tmp_file() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path()).expect("create store");
    // A non-empty directory at the document path makes the final rename fail.
    let target = store.key_path(TRANSACTIONS_KEY);
    fs::create_dir(&target).expect("block document path");
    fs::write(target.join("keep"), "x").expect("fill blocker");

    let err = store.set(TRANSACTIONS_KEY, "[]").expect_err("rename must fail");
    assert!(matches!(err, CoreError::Io(_)), "unexpected error: {err:?}");
    assert!(!dir.path().join("finance_tracker_transactions.json.tmp").exists());
}
