use edhrand_core::Card;
use serde::Deserialize;

/// One page of `/cards/search` results.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub data: Vec<Card>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub total_cards: Option<u32>,
}

/// Scryfall's error object, returned with every non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagResponse {
    #[serde(default)]
    pub data: Option<TagData>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagData {
    pub card: Option<TaggedCard>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaggedCard {
    #[serde(default)]
    pub taggings: Vec<Tagging>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tagging {
    pub tag: Tag,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, rename = "ancestorTags")]
    pub ancestor_tags: Vec<TagRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagRef {
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: String,
}
