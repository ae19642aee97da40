use crate::{Card, CardTags, SearchError};

/// The card search service. Implementations own their own rate limiting.
/// A query with no matches is `Ok(vec![])`, not an error.
pub trait CardSearch {
    fn search(&mut self, query: &str) -> Result<Vec<Card>, SearchError>;
}

/// Looks up the community tags of one printing.
pub trait TagSource {
    fn tags(&mut self, set: &str, collector_number: &str) -> Result<CardTags, SearchError>;
}

/// Runs a search, degrading any failure to an empty result.
pub fn search_or_empty(search: &mut dyn CardSearch, query: &str) -> Vec<Card> {
    log::debug!("searching for: `{query}`");
    match search.search(query) {
        Ok(cards) => cards,
        Err(err) => {
            log::warn!("search `{query}` failed, treating as empty: {err}");
            Vec::new()
        }
    }
}
