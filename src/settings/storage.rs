//! Baseline settings storage
//!
//! The baseline lives in a single JSON document under a fixed key
//! (`hizb_settings.json`) and is rewritten wholesale on every change.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::schedule::{Baseline, HizbNumber, ScheduleError};

/// Key the settings document is stored under
pub const SETTINGS_KEY: &str = "hizb_settings";

/// Error type for settings operations
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// On-disk shape of the settings document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSettings {
    #[serde(deserialize_with = "deserialize_start_date")]
    start_date: NaiveDate,
    start_hizb: HizbNumber,
}

impl From<StoredSettings> for Baseline {
    fn from(stored: StoredSettings) -> Self {
        Baseline::new(stored.start_date, stored.start_hizb)
    }
}

impl From<&Baseline> for StoredSettings {
    fn from(baseline: &Baseline) -> Self {
        Self {
            start_date: baseline.start_date,
            start_hizb: baseline.start_hizb,
        }
    }
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp, keeping the local date
fn deserialize_start_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_start_date(&raw).map_err(serde::de::Error::custom)
}

/// Parse a date as entered by the user or stored by older versions
pub fn parse_start_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local).date_naive())
        .map_err(|e| SettingsError::InvalidDate(format!("{}: {}", raw, e)))
}

/// Storage for the schedule baseline
pub struct SettingsStorage {
    /// Base path for app data (e.g., ~/.local/share/ratib)
    base_path: PathBuf,
}

impl SettingsStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Path to the settings document
    pub fn settings_file(&self) -> PathBuf {
        self.base_path.join(format!("{}.json", SETTINGS_KEY))
    }

    /// Load the baseline, creating today/1 on first run
    pub fn init(&self) -> Result<Baseline> {
        if let Some(baseline) = self.load()? {
            return Ok(baseline);
        }

        let baseline = Baseline::new(Local::now().date_naive(), HizbNumber::FIRST);
        self.save(&baseline)?;
        log::info!(
            "Created default settings at {:?} (start {}, hizb {})",
            self.settings_file(),
            baseline.start_date,
            baseline.start_hizb
        );
        Ok(baseline)
    }

    /// Load the stored baseline, if any
    pub fn load(&self) -> Result<Option<Baseline>> {
        let path = self.settings_file();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let stored: StoredSettings = serde_json::from_str(&content)?;
        Ok(Some(stored.into()))
    }

    /// Overwrite the stored baseline
    pub fn save(&self, baseline: &Baseline) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        let content = serde_json::to_string_pretty(&StoredSettings::from(baseline))?;
        fs::write(self.settings_file(), content)?;
        log::debug!(
            "Saved settings: start {}, hizb {}",
            baseline.start_date,
            baseline.start_hizb
        );
        Ok(())
    }

    /// Change the starting hizb, keeping the start date
    pub fn set_start_hizb(&self, value: i64) -> Result<Baseline> {
        let start_hizb = HizbNumber::new(value)?;
        let mut baseline = self.init()?;
        baseline.start_hizb = start_hizb;
        self.save(&baseline)?;
        log::info!("Start hizb set to {}", start_hizb);
        Ok(baseline)
    }

    /// Change the start date, keeping the starting hizb
    pub fn set_start_date(&self, start_date: NaiveDate) -> Result<Baseline> {
        let mut baseline = self.init()?;
        baseline.start_date = start_date;
        self.save(&baseline)?;
        log::info!("Start date set to {}", start_date);
        Ok(baseline)
    }

    /// Replace the whole baseline
    pub fn reset(&self, start_date: NaiveDate, start_hizb: i64) -> Result<Baseline> {
        let baseline = Baseline::new(start_date, HizbNumber::new(start_hizb)?);
        self.save(&baseline)?;
        log::info!("Baseline reset to {} / {}", start_date, baseline.start_hizb);
        Ok(baseline)
    }
}
