//! Network-facing collaborators: Scryfall card search, Scryfall Tagger tags,
//! and loading of theme lists from disk.

pub mod load;
pub mod schema;
pub mod scryfall;
pub mod tagger;

pub use load::*;
pub use scryfall::*;
pub use tagger::*;
