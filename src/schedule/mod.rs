//! Morning and evening hizb schedule
//!
//! This module provides:
//! - The 60-hizb counter and daily assignment models
//! - A declarative table of weekday exceptions
//! - The calculator mapping a date to its readings
//! - Day navigation and Arabic date headings

pub mod calculator;
pub mod calendar;
pub mod errors;
pub mod exceptions;
pub mod models;
pub mod navigation;

pub use calculator::{compute, Schedule, ScheduleDays};
pub use errors::{ScheduleError, ScheduleResult};
pub use exceptions::ExceptionTable;
pub use models::*;
pub use navigation::DayNavigator;
