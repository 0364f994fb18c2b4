//! Persisted schedule baseline

pub mod storage;

pub use storage::{parse_start_date, SettingsError, SettingsStorage, SETTINGS_KEY};
