use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{NaiveDate, TimeZone, Utc};
use fintrack::{
    config::{Config, ConfigManager},
    services::{FixedClock, SequentialIds},
    storage::JsonFileStore,
    FinanceTracker,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
pub fn temp_root() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens a tracker over `root` whose clock is pinned to noon UTC on `today`.
pub fn open_tracker(root: &Path, today: NaiveDate) -> FinanceTracker {
    let store = JsonFileStore::new(root.join("data")).expect("create json store");
    let clock = FixedClock::new(
        Utc.from_utc_datetime(&today.and_hms_opt(12, 0, 0).expect("valid time")),
    );
    FinanceTracker::open(
        Box::new(store),
        Box::new(clock),
        Box::new(SequentialIds::new(format!("{today}"))),
        Config::default(),
    )
    .expect("open tracker")
}

/// Creates isolated tracker + config manager backed by a fresh directory.
#[allow(dead_code)]
pub fn setup_test_env(today: NaiveDate) -> (FinanceTracker, ConfigManager, PathBuf) {
    let root = temp_root();
    let tracker = open_tracker(&root, today);
    let config_manager =
        ConfigManager::with_base_dir(root.clone()).expect("create config manager for temp dir");
    (tracker, config_manager, root)
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
