use crate::CostBucket;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("http error: {0}")]
    Http(String),
    #[error("search returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("session error: {0}")]
    Session(String),
}

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("not a valid cost bucket: {0:?}")]
    InvalidCostBucket(String),
    #[error("no unseen cards left for cmc{bucket} (themed: {themed})")]
    CacheExhausted { bucket: CostBucket, themed: bool },
    #[error("card pool exhausted after {drawn} of {target} cards")]
    PoolExhausted { drawn: usize, target: usize },
    #[error("no commander matched {0:?}")]
    NoCommander(String),
    #[error("search error: {0}")]
    Search(#[from] SearchError),
}
