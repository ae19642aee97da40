use crate::Card;
use std::collections::HashSet;

/// Names of cards already placed in the deck. Only ever grows.
#[derive(Debug, Clone, Default)]
pub struct SeenSet {
    names: HashSet<String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.to_string())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Drops every card whose name has been seen, keeping order.
    pub fn retain_unseen(&self, cards: Vec<Card>) -> Vec<Card> {
        let (kept, dropped): (Vec<Card>, Vec<Card>) =
            cards.into_iter().partition(|card| !self.contains(&card.name));
        if !dropped.is_empty() && log::log_enabled!(log::Level::Debug) {
            let names: Vec<&str> = dropped.iter().map(|card| card.name.as_str()).collect();
            log::debug!("filtered cards: {}", names.join(", "));
        }
        kept
    }
}
