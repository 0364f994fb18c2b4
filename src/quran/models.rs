//! Reading text models

use serde::{Deserialize, Serialize};

use crate::schedule::{HizbNumber, Reading, Surah};

/// What text to load for a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRequest {
    Hizb(HizbNumber),
    /// Whole surahs, loaded and concatenated in order
    Surahs(Vec<Surah>),
}

impl ContentRequest {
    /// API paths to fetch, relative to the base URL and before the edition
    pub fn paths(&self) -> Vec<String> {
        match self {
            ContentRequest::Hizb(number) => vec![format!("hizb/{}", number)],
            ContentRequest::Surahs(surahs) => surahs
                .iter()
                .map(|s| format!("surah/{}", s.number()))
                .collect(),
        }
    }
}

impl From<&Reading> for ContentRequest {
    fn from(reading: &Reading) -> Self {
        match reading {
            Reading::Hizb { number } => ContentRequest::Hizb(*number),
            Reading::Special(special) => ContentRequest::Surahs(special.surahs.clone()),
        }
    }
}

/// Surah reference attached to an ayah
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahRef {
    pub number: u16,
    #[serde(default)]
    pub name: String,
}

/// One numbered text segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ayah {
    /// Position in the whole mushaf
    pub number: u32,
    pub text: String,
    pub number_in_surah: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surah: Option<SurahRef>,
}

/// Text shown by the reader, or the reason it could not be loaded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderContent {
    pub ayahs: Vec<Ayah>,
    pub error: Option<String>,
}

impl ReaderContent {
    pub fn loaded(ayahs: Vec<Ayah>) -> Self {
        Self { ayahs, error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            ayahs: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// Response envelope used by every endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub code: u16,
    #[serde(default)]
    pub status: String,
    pub data: Option<ApiData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiData {
    /// Surah number on the surah endpoint, hizb number on the hizb endpoint
    #[serde(default)]
    pub number: Option<u16>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ayahs: Vec<Ayah>,
}
