//! Reading text retrieval
//!
//! Loads the text of a hizb or of the surahs of a special reading, as a
//! list of numbered ayahs.

pub mod client;
pub mod models;

pub use client::{load_reading, ContentSource, QuranClient, QuranError};
pub use models::{Ayah, ContentRequest, ReaderContent, SurahRef};
