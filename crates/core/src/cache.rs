use crate::{
    search_or_empty, Card, CardSearch, CostBucket, DeckError, QueryBuilder, RngState, SeenSet,
};
use std::collections::{HashMap, HashSet};

type PartitionKey = (bool, CostBucket);

/// Unconsumed search results, partitioned by theme flag and cost bucket.
///
/// A partition is filled on first access and only shrinks afterwards. An
/// empty partition is a cached "no more results" answer and is never
/// refetched. Once a card is drawn it is removed from both theme partitions
/// of its bucket and recorded in the seen-set, so it cannot be offered again.
#[derive(Debug, Clone)]
pub struct CardCache {
    queries: QueryBuilder,
    partitions: HashMap<PartitionKey, Vec<Card>>,
    seen: SeenSet,
}

impl CardCache {
    pub fn new(queries: QueryBuilder) -> Self {
        Self {
            queries,
            partitions: HashMap::new(),
            seen: SeenSet::new(),
        }
    }

    pub fn queries(&self) -> &QueryBuilder {
        &self.queries
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    pub fn is_filled(&self, bucket: CostBucket, themed: bool) -> bool {
        self.partitions.contains_key(&(themed, bucket))
    }

    pub fn partition(&self, bucket: CostBucket, themed: bool) -> Option<&[Card]> {
        self.partitions.get(&(themed, bucket)).map(Vec::as_slice)
    }

    /// Stores `cards` as the partition content, minus anything already seen
    /// and minus repeated names (first occurrence wins).
    pub fn fill_with(&mut self, bucket: CostBucket, themed: bool, cards: Vec<Card>) {
        let mut names = HashSet::new();
        let cards = self
            .seen
            .retain_unseen(cards)
            .into_iter()
            .filter(|card| names.insert(card.name.clone()))
            .collect();
        self.partitions.insert((themed, bucket), cards);
    }

    /// Same as [`CardCache::get`], for a bucket given by its query label.
    pub fn get_labeled(
        &mut self,
        label: &str,
        themed: bool,
        search: &mut dyn CardSearch,
        rng: &mut RngState,
    ) -> Result<Card, DeckError> {
        let bucket = label.parse::<CostBucket>()?;
        self.get(bucket, themed, search, rng)
    }

    /// Draws a random unseen card for the pair, filling the partition from
    /// `search` first if it was never filled. Gateway failures fill the
    /// partition with nothing.
    pub fn get(
        &mut self,
        bucket: CostBucket,
        themed: bool,
        search: &mut dyn CardSearch,
        rng: &mut RngState,
    ) -> Result<Card, DeckError> {
        if !self.is_filled(bucket, themed) {
            let query = self.queries.build(bucket, themed);
            let cards = search_or_empty(search, &query);
            self.fill_with(bucket, themed, cards);
        }

        let cards = self.partitions.entry((themed, bucket)).or_default();
        let Some(idx) = rng.pick_index(cards.len()) else {
            return Err(DeckError::CacheExhausted { bucket, themed });
        };
        let card = cards.remove(idx);

        self.cleanup(bucket, !themed, &card.name);
        self.seen.insert(&card.name);

        Ok(card)
    }

    // The bucket is fixed by the draw, so the opposite flag's partition for
    // it is the only other place the card can be.
    fn cleanup(&mut self, bucket: CostBucket, themed: bool, name: &str) {
        let Some(cards) = self.partitions.get_mut(&(themed, bucket)) else {
            return;
        };
        let before = cards.len();
        cards.retain(|card| card.name != name);
        if cards.len() != before {
            log::debug!("cleaned up: {name}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchError;

    struct Failing;

    impl CardSearch for Failing {
        fn search(&mut self, _query: &str) -> Result<Vec<Card>, SearchError> {
            Err(SearchError::Http("connection reset".into()))
        }
    }

    #[test]
    fn gateway_failure_caches_empty_partition() {
        let mut cache = CardCache::new(QueryBuilder::new("G", None));
        let mut rng = RngState::from_seed(5);
        let err = cache
            .get(CostBucket::Four, false, &mut Failing, &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            DeckError::CacheExhausted { bucket: CostBucket::Four, themed: false }
        ));
        assert_eq!(cache.partition(CostBucket::Four, false), Some(&[][..]));
        assert!(!cache.is_filled(CostBucket::Four, true));
    }

    #[test]
    fn fill_with_drops_seen_names() {
        let mut cache = CardCache::new(QueryBuilder::new("G", None));
        let mut rng = RngState::from_seed(5);
        cache.fill_with(CostBucket::Two, false, vec![Card::named("Llanowar Elves")]);
        cache.get(CostBucket::Two, false, &mut Failing, &mut rng).unwrap();

        cache.fill_with(
            CostBucket::Three,
            true,
            vec![Card::named("Llanowar Elves"), Card::named("Cultivate")],
        );
        let names: Vec<&str> = cache
            .partition(CostBucket::Three, true)
            .unwrap()
            .iter()
            .map(|card| card.name.as_str())
            .collect();
        assert_eq!(names, vec!["Cultivate"]);
    }
}
