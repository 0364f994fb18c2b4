//! Day-by-day navigation of the selected date

use chrono::{Local, NaiveDate};

/// Holds the date currently being viewed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayNavigator {
    selected: NaiveDate,
}

impl DayNavigator {
    pub fn new(selected: NaiveDate) -> Self {
        Self { selected }
    }

    /// Navigator positioned on the local calendar date
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// Step back one calendar day
    pub fn previous(&mut self) -> NaiveDate {
        if let Some(date) = self.selected.pred_opt() {
            self.selected = date;
        }
        self.selected
    }

    /// Step forward one calendar day
    pub fn next(&mut self) -> NaiveDate {
        if let Some(date) = self.selected.succ_opt() {
            self.selected = date;
        }
        self.selected
    }

    pub fn jump_to(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    pub fn is_today(&self) -> bool {
        self.selected == Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_by_one_day() {
        let mut nav = DayNavigator::new(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());

        assert_eq!(nav.next(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(nav.next(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(nav.previous(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(nav.previous(), NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
    }

    #[test]
    fn test_year_boundary() {
        let mut nav = DayNavigator::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(nav.previous(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_bounds_are_sticky() {
        let mut nav = DayNavigator::new(NaiveDate::MAX);
        assert_eq!(nav.next(), NaiveDate::MAX);

        nav.jump_to(NaiveDate::MIN);
        assert_eq!(nav.previous(), NaiveDate::MIN);
    }

    #[test]
    fn test_today() {
        let nav = DayNavigator::today();
        assert!(nav.is_today());

        let mut nav = nav;
        nav.next();
        assert!(!nav.is_today());
    }
}
