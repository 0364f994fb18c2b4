//! HTTP client for reading text
//!
//! Endpoints follow `{base}/hizb/{n}/{edition}` and
//! `{base}/surah/{n}/{edition}`.

use reqwest::blocking::Client;
use thiserror::Error;

use super::models::{ApiResponse, Ayah, ContentRequest, ReaderContent, SurahRef};
use crate::config::QuranConfig;

#[derive(Error, Debug)]
pub enum QuranError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("API returned code {code}: {status}")]
    Api { code: u16, status: String },

    #[error("No text returned for {0}")]
    Empty(String),
}

pub type Result<T> = std::result::Result<T, QuranError>;

/// Anything that can turn a [`ContentRequest`] into ordered text segments
pub trait ContentSource: Send + Sync {
    fn fetch(&self, request: &ContentRequest) -> Result<Vec<Ayah>>;
}

/// Fetch text for the reader, reporting failure as empty content
pub fn load_reading(source: &dyn ContentSource, request: &ContentRequest) -> ReaderContent {
    match source.fetch(request) {
        Ok(ayahs) => ReaderContent::loaded(ayahs),
        Err(e) => {
            log::warn!("Failed to load reading {:?}: {}", request, e);
            ReaderContent::failed(e.to_string())
        }
    }
}

pub struct QuranClient {
    client: Client,
    config: QuranConfig,
}

impl QuranClient {
    pub fn new(config: QuranConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("ratib/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path,
            self.config.edition
        )
    }

    fn fetch_path(&self, path: &str) -> Result<Vec<Ayah>> {
        let url = self.url_for(path);
        log::debug!("Fetching {}", url);

        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(QuranError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        let body = response.text()?;
        parse_ayahs(&body, path)
    }
}

impl ContentSource for QuranClient {
    fn fetch(&self, request: &ContentRequest) -> Result<Vec<Ayah>> {
        let mut ayahs = Vec::new();
        for path in request.paths() {
            ayahs.extend(self.fetch_path(&path)?);
        }
        Ok(ayahs)
    }
}

/// Decode an API body into ayahs, tagging surah-endpoint ayahs with their surah
fn parse_ayahs(body: &str, path: &str) -> Result<Vec<Ayah>> {
    let response: ApiResponse = serde_json::from_str(body).map_err(|e| QuranError::Api {
        code: 0,
        status: format!("unreadable response: {}", e),
    })?;

    if response.code != 200 {
        return Err(QuranError::Api {
            code: response.code,
            status: response.status,
        });
    }

    let Some(data) = response.data else {
        return Err(QuranError::Empty(path.to_string()));
    };
    if data.ayahs.is_empty() {
        return Err(QuranError::Empty(path.to_string()));
    }

    let surah = if path.starts_with("surah/") {
        data.number.map(|number| SurahRef {
            number,
            name: data.name.clone().unwrap_or_default(),
        })
    } else {
        None
    };

    Ok(data
        .ayahs
        .into_iter()
        .map(|mut ayah| {
            if ayah.surah.is_none() {
                ayah.surah = surah.clone();
            }
            ayah
        })
        .collect())
}
