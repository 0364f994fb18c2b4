//! Arabic calendar names for date headings

use chrono::{Datelike, NaiveDate};

/// Weekday names, Sunday first
pub const WEEKDAYS_AR: [&str; 7] = [
    "الأحد",
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

/// Gregorian month names, January first
pub const MONTHS_AR: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS_AR[date.weekday().num_days_from_sunday() as usize]
}

pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS_AR[date.month0() as usize]
}

/// Heading like "الجمعة، 5 يناير"
pub fn format_date(date: NaiveDate) -> String {
    format!("{}، {} {}", weekday_name(date), date.day(), month_name(date))
}
