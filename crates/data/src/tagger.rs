use crate::scryfall::http_client;
use crate::schema::TagResponse;
use edhrand_core::{CardTags, SearchError, TagSource};
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::{COOKIE, SET_COOKIE};
use serde_json::json;

pub const TAGGER_ROOT: &str = "https://tagger.scryfall.com";

// Any card page hands out a session cookie and CSRF token.
const SESSION_PAGE: &str = "/card/mma/33";

const ORACLE_TAG: &str = "ORACLE_CARD_TAG";
const ILLUSTRATION_TAG: &str = "ILLUSTRATION_TAG";

const FETCH_CARD: &str = r#"
query FetchCard($set: String!, $number: String!, $back: Boolean = false) {
  card: cardBySet(set: $set, number: $number, back: $back) {
    name
    taggings {
      tag {
        slug
        type
        ancestorTags {
          slug
          type
        }
      }
    }
  }
}
"#;

#[derive(Debug, Clone)]
struct Session {
    cookie: String,
    csrf_token: String,
}

/// Oracle and illustration tags from Scryfall Tagger. The session is
/// opened on the first lookup, so building one is free when no tags are
/// ever requested.
#[derive(Debug, Clone)]
pub struct TaggerClient {
    client: Client,
    root: String,
    session: Option<Session>,
}

impl TaggerClient {
    pub fn new() -> Result<Self, SearchError> {
        Ok(Self {
            client: http_client()?,
            root: TAGGER_ROOT.to_string(),
            session: None,
        })
    }

    fn session(&mut self) -> Result<Session, SearchError> {
        if let Some(session) = &self.session {
            return Ok(session.clone());
        }
        let url = format!("{}{}", self.root, SESSION_PAGE);
        log::debug!("opening tagger session via {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| SearchError::Http(format!("tagger session request failed: {err}")))?;
        let cookie = cookie_header(
            response
                .headers()
                .get_all(SET_COOKIE)
                .iter()
                .filter_map(|value| value.to_str().ok()),
        );
        let html = response
            .text()
            .map_err(|err| SearchError::Http(format!("failed to read tagger page: {err}")))?;
        let csrf_token = extract_csrf_token(&html)
            .ok_or_else(|| SearchError::Session("no csrf-token on tagger page".into()))?;

        let session = Session { cookie, csrf_token };
        self.session = Some(session.clone());
        Ok(session)
    }
}

impl TagSource for TaggerClient {
    fn tags(&mut self, set: &str, collector_number: &str) -> Result<CardTags, SearchError> {
        let session = self.session()?;
        let payload = json!({
            "operationName": "FetchCard",
            "variables": { "back": false, "set": set, "number": collector_number },
            "query": FETCH_CARD,
        });
        let response = self
            .client
            .post(format!("{}/graphql", self.root))
            .header(COOKIE, session.cookie)
            .header("X-CSRF-Token", session.csrf_token)
            .json(&payload)
            .send()
            .map_err(|err| SearchError::Http(format!("tagger request failed: {err}")))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| SearchError::Http(format!("failed to read tagger response: {err}")))?;
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        parse_tag_response(&body)
    }
}

pub fn extract_csrf_token(html: &str) -> Option<String> {
    let re = Regex::new(r#"<meta name="csrf-token" content="([^"]*)""#).ok()?;
    re.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|token| token.as_str().to_string())
}

/// Joins the `name=value` part of every `Set-Cookie` header into one
/// `Cookie` header value.
pub fn cookie_header<'a>(set_cookies: impl Iterator<Item = &'a str>) -> String {
    set_cookies
        .filter_map(|value| value.split(';').next())
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collects each tag and its ancestors, split by tag type. Slugs keep
/// first-seen order and appear once.
pub fn parse_tag_response(body: &str) -> Result<CardTags, SearchError> {
    let response: TagResponse =
        serde_json::from_str(body).map_err(|err| SearchError::Decode(err.to_string()))?;
    if let Some(err) = response.errors.first() {
        return Err(SearchError::Decode(format!("tagger error: {}", err.message)));
    }
    let card = response
        .data
        .and_then(|data| data.card)
        .ok_or_else(|| SearchError::Decode("tagger returned no card".into()))?;

    let mut tags = CardTags::default();
    for tagging in card.taggings {
        let ancestors = tagging
            .tag
            .ancestor_tags
            .into_iter()
            .map(|tag| (tag.kind, tag.slug));
        for (kind, slug) in std::iter::once((tagging.tag.kind, tagging.tag.slug)).chain(ancestors) {
            let bucket = match kind.as_str() {
                ORACLE_TAG => &mut tags.oracle_text,
                ILLUSTRATION_TAG => &mut tags.illustration,
                _ => continue,
            };
            if !bucket.contains(&slug) {
                bucket.push(slug);
            }
        }
    }
    Ok(tags)
}
