pub mod config;
pub mod quran;
pub mod reflection;
pub mod schedule;
pub mod settings;
