use crate::schema::{ApiError, SearchPage};
use edhrand_core::{Card, CardSearch, SearchError};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::thread;
use std::time::Duration;

pub const SEARCH_ENDPOINT: &str = "https://api.scryfall.com/cards/search";
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

const USER_AGENT: &str = concat!("edhrand/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn http_client() -> Result<Client, SearchError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|err| SearchError::Http(format!("failed to create HTTP client: {err}")))
}

/// Card search against the Scryfall API. Waits `delay` before every request
/// and returns only the first result page.
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    client: Client,
    endpoint: String,
    delay: Duration,
}

impl ScryfallClient {
    pub fn new(delay: Duration) -> Result<Self, SearchError> {
        Ok(Self {
            client: http_client()?,
            endpoint: SEARCH_ENDPOINT.to_string(),
            delay,
        })
    }
}

impl CardSearch for ScryfallClient {
    fn search(&mut self, query: &str) -> Result<Vec<Card>, SearchError> {
        thread::sleep(self.delay);
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[("q", query), ("unique", "cards"), ("dir", "asc")])
            .send()
            .map_err(|err| SearchError::Http(format!("search request failed: {err}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| SearchError::Http(format!("failed to read search response: {err}")))?;
        parse_search_response(status, &body)
    }
}

/// 404 is how the API says "no cards matched".
pub fn parse_search_response(status: StatusCode, body: &str) -> Result<Vec<Card>, SearchError> {
    if status == StatusCode::NOT_FOUND {
        return Ok(Vec::new());
    }
    if !status.is_success() {
        let body = match serde_json::from_str::<ApiError>(body) {
            Ok(err) => format!("{}: {}", err.code, err.details),
            Err(_) => body.to_string(),
        };
        return Err(SearchError::Status {
            status: status.as_u16(),
            body,
        });
    }
    let page: SearchPage =
        serde_json::from_str(body).map_err(|err| SearchError::Decode(err.to_string()))?;
    if page.has_more {
        log::debug!(
            "using first page of {} results",
            page.total_cards.unwrap_or_default()
        );
    }
    Ok(page.data)
}
