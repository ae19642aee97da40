//! Deck generation logic. Keep this crate free of IO; searches go through
//! the [`CardSearch`] and [`TagSource`] traits.

pub mod bucket;
pub mod cache;
pub mod cards;
pub mod commander;
pub mod config;
pub mod curve;
pub mod deck;
pub mod decklist;
pub mod error;
pub mod lands;
pub mod mainboard;
pub mod query;
pub mod rng;
pub mod search;
pub mod seen;
pub mod theme;

pub use bucket::*;
pub use cache::*;
pub use cards::*;
pub use commander::*;
pub use config::*;
pub use curve::*;
pub use deck::*;
pub use decklist::*;
pub use error::*;
pub use lands::*;
pub use mainboard::*;
pub use query::*;
pub use rng::*;
pub use search::*;
pub use seen::*;
pub use theme::*;
