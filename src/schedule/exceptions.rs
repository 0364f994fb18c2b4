//! Weekday exceptions to the hizb rotation
//!
//! On an exception day the slot reads a fixed [`SpecialReading`] and the
//! counter is left where it is for that slot.

use chrono::Weekday;

use super::models::{Slot, SpecialReading};

/// A single weekday/slot replacement
#[derive(Debug, Clone, PartialEq, Eq)]
struct ExceptionRule {
    weekday: Weekday,
    slot: Slot,
    reading: SpecialReading,
}

/// Lookup table of weekday exceptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionTable {
    rules: Vec<ExceptionRule>,
}

impl ExceptionTable {
    /// A table without any exceptions: every slot advances the counter
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule, replacing any existing rule for the same weekday and slot
    pub fn with_rule(mut self, weekday: Weekday, slot: Slot, reading: SpecialReading) -> Self {
        self.rules
            .retain(|rule| !(rule.weekday == weekday && rule.slot == slot));
        self.rules.push(ExceptionRule {
            weekday,
            slot,
            reading,
        });
        self
    }

    pub fn special_for(&self, weekday: Weekday, slot: Slot) -> Option<&SpecialReading> {
        self.rules
            .iter()
            .find(|rule| rule.weekday == weekday && rule.slot == slot)
            .map(|rule| &rule.reading)
    }

    /// Weekdays on which `slot` does not advance the counter
    pub fn exception_weekdays(&self, slot: Slot) -> impl Iterator<Item = Weekday> + '_ {
        self.rules
            .iter()
            .filter(move |rule| rule.slot == slot)
            .map(|rule| rule.weekday)
    }
}

impl Default for ExceptionTable {
    /// Friday morning and Thursday evening
    fn default() -> Self {
        Self::empty()
            .with_rule(Weekday::Fri, Slot::Morning, SpecialReading::friday_morning())
            .with_rule(Weekday::Thu, Slot::Evening, SpecialReading::thursday_evening())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = ExceptionTable::default();

        assert_eq!(
            table.special_for(Weekday::Fri, Slot::Morning),
            Some(&SpecialReading::friday_morning())
        );
        assert_eq!(
            table.special_for(Weekday::Thu, Slot::Evening),
            Some(&SpecialReading::thursday_evening())
        );
        assert!(table.special_for(Weekday::Fri, Slot::Evening).is_none());
        assert!(table.special_for(Weekday::Thu, Slot::Morning).is_none());
        assert!(table.special_for(Weekday::Mon, Slot::Morning).is_none());
    }

    #[test]
    fn test_with_rule_replaces_same_weekday_and_slot() {
        let table = ExceptionTable::default().with_rule(
            Weekday::Fri,
            Slot::Morning,
            SpecialReading::thursday_evening(),
        );

        assert_eq!(table.exception_weekdays(Slot::Morning).count(), 1);
        assert_eq!(
            table.special_for(Weekday::Fri, Slot::Morning),
            Some(&SpecialReading::thursday_evening())
        );
    }

    #[test]
    fn test_exception_weekdays() {
        let table = ExceptionTable::default();
        let morning: Vec<Weekday> = table.exception_weekdays(Slot::Morning).collect();
        let evening: Vec<Weekday> = table.exception_weekdays(Slot::Evening).collect();
        assert_eq!(morning, vec![Weekday::Fri]);
        assert_eq!(evening, vec![Weekday::Thu]);
        assert_eq!(ExceptionTable::empty().exception_weekdays(Slot::Morning).count(), 0);
    }
}
