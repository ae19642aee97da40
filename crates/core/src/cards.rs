use serde::{Deserialize, Serialize};

/// A card record as returned by the search gateway. Only `name` is used as
/// identity; the remaining fields are read when the card is a commander.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub color_identity: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub collector_number: String,
}

impl Card {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color_identity: Vec::new(),
            keywords: Vec::new(),
            type_line: String::new(),
            set: String::new(),
            collector_number: String::new(),
        }
    }

    /// Colour identity in the form used by `id:` search filters.
    pub fn identity_query(&self) -> String {
        self.color_identity.concat()
    }

    pub fn colours(&self) -> Vec<Colour> {
        self.color_identity
            .iter()
            .filter_map(|symbol| Colour::from_symbol(symbol))
            .collect()
    }

    /// Subtypes: the words after the type line's dash, or the whole line
    /// when it has none.
    pub fn subtypes(&self) -> Vec<&str> {
        self.type_line
            .rsplit(" — ")
            .next()
            .unwrap_or_default()
            .split_whitespace()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Colour {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.to_ascii_lowercase().as_str() {
            "w" => Some(Self::White),
            "u" => Some(Self::Blue),
            "b" => Some(Self::Black),
            "r" => Some(Self::Red),
            "g" => Some(Self::Green),
            _ => None,
        }
    }

    pub fn basic_land(self) -> &'static str {
        match self {
            Self::White => "Plains",
            Self::Blue => "Island",
            Self::Black => "Swamp",
            Self::Red => "Mountain",
            Self::Green => "Forest",
        }
    }
}

/// Tag slugs attached to a card printing by the tag source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardTags {
    pub oracle_text: Vec<String>,
    pub illustration: Vec<String>,
}
