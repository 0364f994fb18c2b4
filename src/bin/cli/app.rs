use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use ratib_lib::config::{default_data_dir, AppConfig};
use ratib_lib::quran::{load_reading, ContentRequest, ContentSource, QuranClient, ReaderContent};
use ratib_lib::reflection::{reflection_for, GeminiReflection, ReflectionProvider};
use ratib_lib::schedule::{Baseline, DailyAssignment, Schedule, Slot};
use ratib_lib::settings::SettingsStorage;

/// Shared application state for CLI commands
pub struct App {
    pub data_dir: PathBuf,
    pub settings: SettingsStorage,
    pub baseline: Baseline,
    pub content: Arc<dyn ContentSource>,
    pub reflection: Arc<dyn ReflectionProvider>,
}

impl App {
    /// Initialize from the given or default data directory
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir().context("Failed to get data directory")?,
        };

        let config = AppConfig::load(&data_dir).context("Failed to load configuration")?;

        let settings = SettingsStorage::new(data_dir.clone());
        let baseline = settings.init()
            .context("Failed to initialize settings")?;

        let content = QuranClient::new(config.quran.clone())
            .context("Failed to create reading client")?;
        let reflection = GeminiReflection::new(config.reflection.clone())
            .context("Failed to create reflection client")?;

        Ok(Self {
            data_dir,
            settings,
            baseline,
            content: Arc::new(content),
            reflection: Arc::new(reflection),
        })
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn schedule(&self) -> Schedule {
        Schedule::new(self.baseline)
    }

    /// Readings for a date (today when not given)
    pub fn assignment_for(&self, date: Option<NaiveDate>) -> Result<DailyAssignment> {
        let date = date.unwrap_or_else(Self::today);
        self.schedule()
            .assignment_for(date)
            .context(format!("No readings for {}", date))
    }

    /// Consecutive days starting at `from`
    pub fn upcoming(&self, from: Option<NaiveDate>, days: usize) -> Result<Vec<DailyAssignment>> {
        let from = from.unwrap_or_else(Self::today);
        let schedule = self.schedule();
        let listed: Vec<DailyAssignment> = schedule
            .days(from)
            .context(format!("No readings for {}", from))?
            .take(days)
            .collect();
        Ok(listed)
    }

    /// Text of one slot; failures come back as empty content with an error
    pub fn reading_content(&self, assignment: &DailyAssignment, slot: Slot) -> ReaderContent {
        let request = ContentRequest::from(assignment.reading(slot));
        load_reading(self.content.as_ref(), &request)
    }

    /// Reflection for a day, falling back to the fixed quote
    pub fn reflection(&self, assignment: &DailyAssignment) -> String {
        reflection_for(self.reflection.as_ref(), assignment)
    }

    pub fn set_start_hizb(&mut self, hizb: i64) -> Result<Baseline> {
        self.baseline = self.settings.set_start_hizb(hizb)
            .context("Failed to update start hizb")?;
        Ok(self.baseline)
    }

    pub fn set_start_date(&mut self, date: NaiveDate) -> Result<Baseline> {
        self.baseline = self.settings.set_start_date(date)
            .context("Failed to update start date")?;
        Ok(self.baseline)
    }

    pub fn reset_baseline(&mut self, date: NaiveDate, hizb: i64) -> Result<Baseline> {
        self.baseline = self.settings.reset(date, hizb)
            .context("Failed to reset settings")?;
        Ok(self.baseline)
    }
}
