//! Hizb rotation calculator
//!
//! Every day has two slots, morning then evening. A slot either reads the
//! current hizb and moves the counter on by one (wrapping 60 -> 1), or, on
//! its exception weekday, reads a fixed special reading and leaves the
//! counter alone. The counter for a date is always derived from the
//! baseline, so editing the baseline shifts the whole sequence at once.
//!
//! [`Schedule::assignment_for`] counts the advances between the baseline and
//! the target directly instead of walking every day in between.
//! [`Schedule::replay`] walks the days one by one and is kept as the
//! reference the closed form is tested against.

use chrono::{Datelike, NaiveDate, Weekday};

use super::errors::{ScheduleError, ScheduleResult};
use super::exceptions::ExceptionTable;
use super::models::{Baseline, DailyAssignment, HizbNumber, Reading, Slot};

/// Compute the readings due on `target` for a raw baseline
///
/// Fails with [`ScheduleError::InvalidCounter`] when `start_hizb` is outside
/// 1..=60 and with [`ScheduleError::InvalidRange`] when `target` precedes
/// `start_date`.
pub fn compute(
    target: NaiveDate,
    start_date: NaiveDate,
    start_hizb: i64,
) -> ScheduleResult<DailyAssignment> {
    let start_hizb = HizbNumber::new(start_hizb)?;
    Schedule::new(Baseline::new(start_date, start_hizb)).assignment_for(target)
}

/// A baseline together with the weekday exceptions applied to it
#[derive(Debug, Clone)]
pub struct Schedule {
    baseline: Baseline,
    exceptions: ExceptionTable,
}

impl Schedule {
    /// Schedule using the default Friday morning / Thursday evening exceptions
    pub fn new(baseline: Baseline) -> Self {
        Self::with_exceptions(baseline, ExceptionTable::default())
    }

    pub fn with_exceptions(baseline: Baseline, exceptions: ExceptionTable) -> Self {
        Self {
            baseline,
            exceptions,
        }
    }

    /// Readings due on `date`
    pub fn assignment_for(&self, date: NaiveDate) -> ScheduleResult<DailyAssignment> {
        let elapsed = self.elapsed_days(date)?;
        let opening = self.baseline.start_hizb.advance(self.advances_over(elapsed));
        Ok(self.assign_day(date, opening))
    }

    /// Readings due on `date`, found by stepping through every day since the baseline
    pub fn replay(&self, date: NaiveDate) -> ScheduleResult<DailyAssignment> {
        self.elapsed_days(date)?;

        let mut pointer = self.baseline.start_hizb;
        for day in self
            .baseline
            .start_date
            .iter_days()
            .take_while(|day| *day < date)
        {
            // Non-final days still move the counter for every slot they read.
            pointer = self.assign_day(day, pointer).closing_hizb;
        }

        Ok(self.assign_day(date, pointer))
    }

    /// Consecutive daily assignments starting at `from`
    pub fn days(&self, from: NaiveDate) -> ScheduleResult<ScheduleDays<'_>> {
        let first = self.assignment_for(from)?;
        Ok(ScheduleDays {
            schedule: self,
            next_date: Some(from),
            pointer: first.opening_hizb,
        })
    }

    fn elapsed_days(&self, date: NaiveDate) -> ScheduleResult<u64> {
        let start = self.baseline.start_date;
        if date < start {
            return Err(ScheduleError::InvalidRange {
                target: date,
                start,
            });
        }
        Ok((date - start).num_days() as u64)
    }

    /// Counter advances made by `days` full days starting at the baseline date
    fn advances_over(&self, days: u64) -> u64 {
        let start = self.baseline.start_date;
        Slot::ALL
            .iter()
            .map(|&slot| {
                let skipped: u64 = self
                    .exceptions
                    .exception_weekdays(slot)
                    .map(|weekday| count_weekday(start, days, weekday))
                    .sum();
                days - skipped
            })
            .sum()
    }

    fn assign_day(&self, date: NaiveDate, opening: HizbNumber) -> DailyAssignment {
        let weekday = date.weekday();
        let mut pointer = opening;
        let morning = self.fill_slot(weekday, Slot::Morning, &mut pointer);
        let evening = self.fill_slot(weekday, Slot::Evening, &mut pointer);

        DailyAssignment {
            date,
            morning,
            evening,
            opening_hizb: opening,
            closing_hizb: pointer,
        }
    }

    fn fill_slot(&self, weekday: Weekday, slot: Slot, pointer: &mut HizbNumber) -> Reading {
        match self.exceptions.special_for(weekday, slot) {
            Some(special) => Reading::Special(special.clone()),
            None => {
                let reading = Reading::Hizb { number: *pointer };
                *pointer = pointer.next();
                reading
            }
        }
    }
}

/// Iterator over consecutive days of a [`Schedule`]
pub struct ScheduleDays<'a> {
    schedule: &'a Schedule,
    next_date: Option<NaiveDate>,
    pointer: HizbNumber,
}

impl Iterator for ScheduleDays<'_> {
    type Item = DailyAssignment;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next_date?;
        let assignment = self.schedule.assign_day(date, self.pointer);
        self.pointer = assignment.closing_hizb;
        self.next_date = date.succ_opt();
        Some(assignment)
    }
}

/// Number of dates in `[start, start + days)` falling on `weekday`
fn count_weekday(start: NaiveDate, days: u64, weekday: Weekday) -> u64 {
    let first = (7 + weekday.num_days_from_monday() - start.weekday().num_days_from_monday()) % 7;
    let first = first as u64;
    if days <= first {
        0
    } else {
        (days - first - 1) / 7 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::models::SpecialReading;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hizb(n: i64) -> HizbNumber {
        HizbNumber::new(n).unwrap()
    }

    fn schedule(start: NaiveDate, start_hizb: i64) -> Schedule {
        Schedule::new(Baseline::new(start, hizb(start_hizb)))
    }

    // 2024-01-01 is a Monday
    fn monday() -> NaiveDate {
        date(2024, 1, 1)
    }

    #[test]
    fn test_monday_baseline_first_two_days() {
        let s = schedule(monday(), 1);

        let day0 = s.assignment_for(monday()).unwrap();
        assert_eq!(day0.morning_label(), "الحزب 1");
        assert_eq!(day0.evening_label(), "الحزب 2");
        assert_eq!(day0.closing_hizb, hizb(3));

        let day1 = s.assignment_for(date(2024, 1, 2)).unwrap();
        assert_eq!(day1.morning_hizb(), Some(hizb(3)));
        assert_eq!(day1.evening_hizb(), Some(hizb(4)));
        assert_eq!(day1.closing_hizb, hizb(5));
    }

    #[test]
    fn test_thursday_evening_is_kahf() {
        let thursday = date(2024, 1, 4);
        let day = schedule(thursday, 58).assignment_for(thursday).unwrap();

        assert_eq!(day.morning_hizb(), Some(hizb(58)));
        assert_eq!(day.evening, Reading::Special(SpecialReading::thursday_evening()));
        assert_eq!(day.evening_hizb(), None);
        assert_eq!(day.closing_hizb, hizb(59));
    }

    #[test]
    fn test_friday_morning_is_special() {
        let friday = date(2024, 1, 5);
        let day = schedule(friday, 10).assignment_for(friday).unwrap();

        assert_eq!(day.morning_label(), "يس، الواقعة، تبارك");
        assert_eq!(day.morning_hizb(), None);
        assert_eq!(day.evening_hizb(), Some(hizb(10)));
        assert_eq!(day.closing_hizb, hizb(11));
    }

    #[test]
    fn test_counter_wraps_after_sixty() {
        let day = schedule(monday(), 60).assignment_for(monday()).unwrap();
        assert_eq!(day.morning_hizb(), Some(hizb(60)));
        assert_eq!(day.evening_hizb(), Some(hizb(1)));
    }

    #[test]
    fn test_full_week_advances_twelve() {
        let s = schedule(monday(), 1);
        // Mon-Wed: 6, Thu: 1 (morning), Fri: 1 (evening), Sat-Sun: 4
        let next_monday = s.assignment_for(date(2024, 1, 8)).unwrap();
        assert_eq!(next_monday.opening_hizb, hizb(13));

        let thursday = s.assignment_for(date(2024, 1, 4)).unwrap();
        assert_eq!(thursday.morning_hizb(), Some(hizb(7)));
        let friday = s.assignment_for(date(2024, 1, 5)).unwrap();
        assert_eq!(friday.evening_hizb(), Some(hizb(8)));
    }

    #[test]
    fn test_earlier_target_is_invalid_range() {
        let s = schedule(date(2024, 3, 10), 5);
        let err = s.assignment_for(date(2024, 3, 9)).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidRange {
                target: date(2024, 3, 9),
                start: date(2024, 3, 10),
            }
        );
        assert!(s.replay(date(2024, 3, 9)).is_err());
        assert!(s.days(date(2024, 3, 9)).is_err());
    }

    #[test]
    fn test_compute_validates_counter() {
        assert_eq!(
            compute(monday(), monday(), 0).unwrap_err(),
            ScheduleError::InvalidCounter(0)
        );
        assert_eq!(
            compute(monday(), monday(), 61).unwrap_err(),
            ScheduleError::InvalidCounter(61)
        );
        let day = compute(date(2024, 1, 2), monday(), 1).unwrap();
        assert_eq!(day.morning_hizb(), Some(hizb(3)));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let target = date(2025, 7, 19);
        let first = compute(target, monday(), 23).unwrap();
        let second = compute(target, monday(), 23).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_consecutive_days_are_continuous() {
        let s = schedule(date(2024, 2, 14), 37);
        let mut previous = s.assignment_for(date(2024, 2, 14)).unwrap();
        for day in date(2024, 2, 15).iter_days().take(400) {
            let current = s.assignment_for(day).unwrap();
            assert_eq!(current.opening_hizb, previous.closing_hizb, "at {}", day);
            previous = current;
        }
    }

    #[test]
    fn test_exception_days_do_not_consume_counter() {
        let s = schedule(monday(), 1);
        for day in monday().iter_days().take(120) {
            let a = s.assignment_for(day).unwrap();
            match day.weekday() {
                Weekday::Fri => {
                    assert_eq!(a.morning, Reading::Special(SpecialReading::friday_morning()));
                    assert_eq!(a.evening_hizb(), Some(a.opening_hizb));
                    assert_eq!(a.closing_hizb, a.opening_hizb.advance(1));
                }
                Weekday::Thu => {
                    assert_eq!(a.morning_hizb(), Some(a.opening_hizb));
                    assert_eq!(a.evening, Reading::Special(SpecialReading::thursday_evening()));
                    assert_eq!(a.closing_hizb, a.opening_hizb.advance(1));
                }
                _ => {
                    assert_eq!(a.morning_hizb(), Some(a.opening_hizb));
                    assert_eq!(a.evening_hizb(), Some(a.opening_hizb.next()));
                    assert_eq!(a.closing_hizb, a.opening_hizb.advance(2));
                }
            }
        }
    }

    #[test]
    fn test_without_exceptions_every_slot_advances() {
        for start_hizb in 1..=60 {
            let s = Schedule::with_exceptions(
                Baseline::new(monday(), hizb(start_hizb)),
                ExceptionTable::empty(),
            );
            for n in [0u64, 1, 2, 5, 29, 30, 31, 59, 60, 61, 365] {
                let day = monday() + chrono::Duration::days(n as i64);
                let expected = ((start_hizb - 1 + 2 * n as i64) % 60) + 1;
                let a = s.assignment_for(day).unwrap();
                assert_eq!(a.opening_hizb.get() as i64, expected);
            }
        }
    }

    #[test]
    fn test_baseline_equals_target() {
        // Only that day's exceptions apply to the initial counter
        for offset in 0..7 {
            let day = monday() + chrono::Duration::days(offset);
            let a = schedule(day, 44).assignment_for(day).unwrap();
            assert_eq!(a.opening_hizb, hizb(44));
            match day.weekday() {
                Weekday::Fri => assert_eq!(a.evening_hizb(), Some(hizb(44))),
                _ => assert_eq!(a.morning_hizb(), Some(hizb(44))),
            }
        }
    }

    #[test]
    fn test_closed_form_matches_replay() {
        for start_offset in 0..7 {
            let start = monday() + chrono::Duration::days(start_offset);
            for start_hizb in [1, 17, 58, 60] {
                let s = schedule(start, start_hizb);
                for day in start.iter_days().take(400) {
                    assert_eq!(
                        s.assignment_for(day).unwrap(),
                        s.replay(day).unwrap(),
                        "start {} hizb {} day {}",
                        start,
                        start_hizb,
                        day
                    );
                }
            }
        }
    }

    #[test]
    fn test_closed_form_matches_replay_with_custom_table() {
        let exceptions = ExceptionTable::empty()
            .with_rule(Weekday::Sun, Slot::Morning, SpecialReading::friday_morning())
            .with_rule(Weekday::Wed, Slot::Morning, SpecialReading::thursday_evening())
            .with_rule(Weekday::Wed, Slot::Evening, SpecialReading::thursday_evening());
        let s = Schedule::with_exceptions(Baseline::new(date(2023, 11, 22), hizb(9)), exceptions);
        for day in date(2023, 11, 22).iter_days().take(300) {
            assert_eq!(s.assignment_for(day).unwrap(), s.replay(day).unwrap());
        }
    }

    #[test]
    fn test_days_iterator_matches_assignment_for() {
        let s = schedule(date(2024, 5, 30), 52);
        let from = date(2024, 6, 11);
        let listed: Vec<DailyAssignment> = s.days(from).unwrap().take(45).collect();
        assert_eq!(listed.len(), 45);
        for a in listed {
            assert_eq!(a, s.assignment_for(a.date).unwrap());
        }
    }

    #[test]
    fn test_distant_target() {
        let s = schedule(monday(), 1);
        let far = date(2124, 1, 1);
        let a = s.assignment_for(far).unwrap();
        let previous = s.assignment_for(far.pred_opt().unwrap()).unwrap();
        assert_eq!(a.opening_hizb, previous.closing_hizb);
    }

    #[test]
    fn test_count_weekday() {
        // Starting Monday
        assert_eq!(count_weekday(monday(), 0, Weekday::Mon), 0);
        assert_eq!(count_weekday(monday(), 1, Weekday::Mon), 1);
        assert_eq!(count_weekday(monday(), 4, Weekday::Fri), 0);
        assert_eq!(count_weekday(monday(), 5, Weekday::Fri), 1);
        assert_eq!(count_weekday(monday(), 7, Weekday::Sun), 1);
        assert_eq!(count_weekday(monday(), 14, Weekday::Thu), 2);
        assert_eq!(count_weekday(monday(), 15, Weekday::Mon), 3);

        // Brute force against iteration
        for start_offset in 0..7 {
            let start = monday() + chrono::Duration::days(start_offset);
            for days in 0..30u64 {
                for weekday in [Weekday::Mon, Weekday::Thu, Weekday::Fri, Weekday::Sun] {
                    let expected = start
                        .iter_days()
                        .take(days as usize)
                        .filter(|d| d.weekday() == weekday)
                        .count() as u64;
                    assert_eq!(count_weekday(start, days, weekday), expected);
                }
            }
        }
    }
}
