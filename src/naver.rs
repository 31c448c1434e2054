//! Naver book-search client.
//!
//! One request per lookup, no retry, no backoff. The search endpoint matches
//! on the ISBN passed as `query` and we only ever ask for the first hit
//! (`display=1`).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::domain::DomainError;
use crate::models::Book;

const SEARCH_ENDPOINT: &str = "https://openapi.naver.com/v1/search/book.json";

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("<.*?>").expect("valid tag pattern"));

#[derive(Clone, Debug)]
pub struct NaverCredentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    total: i64,
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image: String,
}

pub struct NaverClient {
    http: reqwest::Client,
    credentials: NaverCredentials,
    endpoint: String,
}

impl NaverClient {
    pub fn new(credentials: NaverCredentials) -> Result<Self, DomainError> {
        Self::with_endpoint(credentials, SEARCH_ENDPOINT)
    }

    /// Point the client at a different search endpoint (mock server in tests).
    pub fn with_endpoint(
        credentials: NaverCredentials,
        endpoint: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| DomainError::Internal(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            http,
            credentials,
            endpoint: endpoint.into(),
        })
    }

    /// Look up a single book by ISBN.
    ///
    /// The input may carry OCR noise or manual typing; everything but digits
    /// is stripped before it is used. An input with no digits at all returns
    /// `Ok(None)` without touching the network. The `isbn` of the returned
    /// record is the cleaned input, not whatever the remote service echoes.
    pub async fn search_isbn(&self, raw: &str) -> Result<Option<Book>, DomainError> {
        let digits = normalize_isbn(raw);
        if digits.is_empty() {
            return Ok(None);
        }

        let resp = self
            .http
            .get(&self.endpoint)
            .header("X-Naver-Client-Id", &self.credentials.client_id)
            .header("X-Naver-Client-Secret", &self.credentials.client_secret)
            .query(&[("query", digits.as_str()), ("display", "1")])
            .send()
            .await
            .map_err(|e| DomainError::External(format!("Failed to send request: {}", e)))?;

        if !resp.status().is_success() {
            return Err(DomainError::External(format!(
                "Search endpoint returned status: {}",
                resp.status()
            )));
        }

        let parsed: SearchResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::External(format!("Failed to parse response: {}", e)))?;

        if parsed.total > 0 {
            if let Some(item) = parsed.items.first() {
                return Ok(Some(Book {
                    title: strip_tags(&item.title),
                    authors: strip_tags(&item.author),
                    publisher: strip_tags(&item.publisher),
                    isbn: digits,
                    thumbnail: item.image.clone(),
                }));
            }
        }

        Ok(None)
    }
}

/// Strip every non-digit character from an ISBN candidate.
pub fn normalize_isbn(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Remove HTML markup the search endpoint embeds in text fields
/// (e.g. `<b>` around matched terms).
pub fn strip_tags(input: &str) -> String {
    TAG_PATTERN.replace_all(input, "").into_owned()
}
