//! Schedule data models

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::{ScheduleError, ScheduleResult};

/// Number of ahzab in one full cycle
pub const HIZB_COUNT: u8 = 60;

/// A position in the 60-hizb rotation, always in 1..=60
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct HizbNumber(u8);

impl HizbNumber {
    pub const FIRST: HizbNumber = HizbNumber(1);

    pub fn new(value: i64) -> ScheduleResult<Self> {
        if (1..=HIZB_COUNT as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ScheduleError::InvalidCounter(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The hizb after this one, wrapping 60 back to 1
    pub fn next(self) -> Self {
        Self((self.0 % HIZB_COUNT) + 1)
    }

    /// Advance `steps` times around the cycle
    pub fn advance(self, steps: u64) -> Self {
        let offset = (steps % HIZB_COUNT as u64) as u8;
        Self(((self.0 - 1 + offset) % HIZB_COUNT) + 1)
    }
}

impl Default for HizbNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<i64> for HizbNumber {
    type Error = ScheduleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HizbNumber> for u8 {
    fn from(hizb: HizbNumber) -> Self {
        hizb.0
    }
}

impl fmt::Display for HizbNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two daily reading times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    Morning,
    Evening,
}

impl Slot {
    /// Slots in the order they consume the counter each day
    pub const ALL: [Slot; 2] = [Slot::Morning, Slot::Evening];

    /// Arabic heading for the slot
    pub fn title(self) -> &'static str {
        match self {
            Slot::Morning => "ورد الصباح",
            Slot::Evening => "ورد المساء",
        }
    }
}

/// Surahs that appear in the fixed weekday readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Surah {
    Kahf,
    Yasin,
    Waqia,
    Mulk,
}

impl Surah {
    /// Surah number in the mushaf
    pub fn number(self) -> u16 {
        match self {
            Surah::Kahf => 18,
            Surah::Yasin => 36,
            Surah::Waqia => 56,
            Surah::Mulk => 67,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Surah::Kahf => "الكهف",
            Surah::Yasin => "يس",
            Surah::Waqia => "الواقعة",
            Surah::Mulk => "تبارك",
        }
    }
}

/// A fixed reading that replaces the rotation on an exception day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialReading {
    pub label: String,
    pub surahs: Vec<Surah>,
}

impl SpecialReading {
    pub fn new(label: impl Into<String>, surahs: Vec<Surah>) -> Self {
        Self {
            label: label.into(),
            surahs,
        }
    }

    /// Friday morning: Ya-Sin, Al-Waqi'a and Al-Mulk
    pub fn friday_morning() -> Self {
        let surahs = vec![Surah::Yasin, Surah::Waqia, Surah::Mulk];
        let label = surahs
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join("، ");
        Self::new(label, surahs)
    }

    /// Thursday evening: Al-Kahf
    pub fn thursday_evening() -> Self {
        Self::new(format!("سورة {}", Surah::Kahf.name()), vec![Surah::Kahf])
    }
}

/// What is due in one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Reading {
    Hizb { number: HizbNumber },
    Special(SpecialReading),
}

impl Reading {
    pub fn label(&self) -> String {
        match self {
            Reading::Hizb { number } => format!("الحزب {}", number),
            Reading::Special(special) => special.label.clone(),
        }
    }

    pub fn hizb(&self) -> Option<HizbNumber> {
        match self {
            Reading::Hizb { number } => Some(*number),
            Reading::Special(_) => None,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// The reference point every assignment is replayed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baseline {
    /// Calendar date the counter value applies to
    pub start_date: NaiveDate,
    /// Hizb due at the first non-exception slot of `start_date`
    pub start_hizb: HizbNumber,
}

impl Baseline {
    pub fn new(start_date: NaiveDate, start_hizb: HizbNumber) -> Self {
        Self {
            start_date,
            start_hizb,
        }
    }
}

/// Readings due on one calendar date (computed, never stored)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAssignment {
    pub date: NaiveDate,
    pub morning: Reading,
    pub evening: Reading,
    /// Counter value before the morning slot
    pub opening_hizb: HizbNumber,
    /// Counter value after the evening slot, i.e. the next day's opening
    pub closing_hizb: HizbNumber,
}

impl DailyAssignment {
    pub fn reading(&self, slot: Slot) -> &Reading {
        match slot {
            Slot::Morning => &self.morning,
            Slot::Evening => &self.evening,
        }
    }

    pub fn morning_label(&self) -> String {
        self.morning.label()
    }

    pub fn evening_label(&self) -> String {
        self.evening.label()
    }

    pub fn morning_hizb(&self) -> Option<HizbNumber> {
        self.morning.hizb()
    }

    pub fn evening_hizb(&self) -> Option<HizbNumber> {
        self.evening.hizb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hizb_range() {
        assert!(HizbNumber::new(1).is_ok());
        assert!(HizbNumber::new(60).is_ok());
        assert_eq!(HizbNumber::new(0), Err(ScheduleError::InvalidCounter(0)));
        assert_eq!(HizbNumber::new(61), Err(ScheduleError::InvalidCounter(61)));
        assert_eq!(HizbNumber::new(-3), Err(ScheduleError::InvalidCounter(-3)));
    }

    #[test]
    fn test_next_wraps() {
        let last = HizbNumber::new(60).unwrap();
        assert_eq!(last.next(), HizbNumber::FIRST);
        assert_eq!(HizbNumber::new(7).unwrap().next().get(), 8);
    }

    #[test]
    fn test_advance_matches_repeated_next() {
        for start in 1..=60 {
            let hizb = HizbNumber::new(start).unwrap();
            let mut stepped = hizb;
            for n in 0..250u64 {
                assert_eq!(hizb.advance(n), stepped, "start {} steps {}", start, n);
                let expected = ((start - 1 + n as i64) % 60) + 1;
                assert_eq!(stepped.get() as i64, expected);
                stepped = stepped.next();
            }
        }
    }

    #[test]
    fn test_hizb_serde_rejects_out_of_range() {
        let parsed: HizbNumber = serde_json::from_str("12").unwrap();
        assert_eq!(parsed.get(), 12);
        assert!(serde_json::from_str::<HizbNumber>("0").is_err());
        assert!(serde_json::from_str::<HizbNumber>("75").is_err());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "12");
    }

    #[test]
    fn test_special_labels() {
        assert_eq!(SpecialReading::friday_morning().label, "يس، الواقعة، تبارك");
        assert_eq!(SpecialReading::thursday_evening().label, "سورة الكهف");
        assert_eq!(SpecialReading::thursday_evening().surahs, vec![Surah::Kahf]);
    }

    #[test]
    fn test_reading_label() {
        let reading = Reading::Hizb {
            number: HizbNumber::new(42).unwrap(),
        };
        assert_eq!(reading.label(), "الحزب 42");
        assert_eq!(reading.hizb().map(HizbNumber::get), Some(42));
        assert_eq!(Reading::Special(SpecialReading::friday_morning()).hizb(), None);
    }
}
