use edhrand_core::{
    Card, CardCache, CardSearch, CostBucket, DeckError, QueryBuilder, RngState, SearchError,
};
use std::collections::{HashMap, HashSet};

/// Answers queries from a fixed table and counts how often each was asked.
#[derive(Default)]
struct TableSearch {
    results: HashMap<String, Vec<Card>>,
    calls: HashMap<String, usize>,
}

impl TableSearch {
    fn with(mut self, query: String, names: &[&str]) -> Self {
        self.results
            .insert(query, names.iter().map(|name| Card::named(*name)).collect());
        self
    }

    fn calls(&self, query: &str) -> usize {
        self.calls.get(query).copied().unwrap_or(0)
    }
}

impl CardSearch for TableSearch {
    fn search(&mut self, query: &str) -> Result<Vec<Card>, SearchError> {
        *self.calls.entry(query.to_string()).or_default() += 1;
        Ok(self.results.get(query).cloned().unwrap_or_default())
    }
}

fn queries() -> QueryBuilder {
    QueryBuilder::new("UB", Some("(t:rogue)".to_string()))
}

fn names(cards: &[Card]) -> Vec<&str> {
    cards.iter().map(|card| card.name.as_str()).collect()
}

#[test]
fn two_card_partition_drains_then_exhausts() {
    let mut cache = CardCache::new(queries());
    let mut search = TableSearch::default();
    let mut rng = RngState::from_seed(1);
    cache.fill_with(
        CostBucket::Three,
        false,
        vec![Card::named("Baleful Strix"), Card::named("Notion Thief")],
    );

    let first = cache.get(CostBucket::Three, false, &mut search, &mut rng).unwrap();
    assert!(["Baleful Strix", "Notion Thief"].contains(&first.name.as_str()));
    assert!(cache.seen().contains(&first.name));
    assert_eq!(cache.partition(CostBucket::Three, false).unwrap().len(), 1);

    let second = cache.get(CostBucket::Three, false, &mut search, &mut rng).unwrap();
    assert_ne!(first.name, second.name);
    assert!(cache.seen().contains(&second.name));

    let third = cache.get(CostBucket::Three, false, &mut search, &mut rng);
    assert!(matches!(
        third,
        Err(DeckError::CacheExhausted { bucket: CostBucket::Three, themed: false })
    ));
    // Pre-filled partitions are never fetched.
    assert!(search.calls.is_empty());
}

#[test]
fn drawing_themed_removes_card_from_unthemed_partition() {
    let mut cache = CardCache::new(queries());
    let mut search = TableSearch::default();
    let mut rng = RngState::from_seed(2);
    cache.fill_with(CostBucket::Two, true, vec![Card::named("Thief of Sanity")]);
    cache.fill_with(
        CostBucket::Two,
        false,
        vec![Card::named("Thief of Sanity"), Card::named("Dimir Signet")],
    );

    let drawn = cache.get(CostBucket::Two, true, &mut search, &mut rng).unwrap();
    assert_eq!(drawn.name, "Thief of Sanity");
    assert_eq!(
        names(cache.partition(CostBucket::Two, false).unwrap()),
        vec!["Dimir Signet"]
    );

    let next = cache.get(CostBucket::Two, false, &mut search, &mut rng).unwrap();
    assert_eq!(next.name, "Dimir Signet");
}

#[test]
fn opposite_partition_filled_later_is_filtered_by_seen_set() {
    let q = queries();
    let mut search = TableSearch::default()
        .with(q.themed(CostBucket::Four), &["Ninja of the Deep Hours"])
        .with(
            q.unthemed(CostBucket::Four),
            &["Ninja of the Deep Hours", "Fact or Fiction"],
        );
    let mut cache = CardCache::new(q);
    let mut rng = RngState::from_seed(3);

    let drawn = cache.get(CostBucket::Four, true, &mut search, &mut rng).unwrap();
    assert_eq!(drawn.name, "Ninja of the Deep Hours");
    assert!(!cache.is_filled(CostBucket::Four, false));

    let next = cache.get(CostBucket::Four, false, &mut search, &mut rng).unwrap();
    assert_eq!(next.name, "Fact or Fiction");
    assert!(matches!(
        cache.get(CostBucket::Four, false, &mut search, &mut rng),
        Err(DeckError::CacheExhausted { .. })
    ));
}

#[test]
fn partition_is_fetched_once_even_when_empty() {
    let q = queries();
    let query = q.unthemed(CostBucket::Six);
    let mut search = TableSearch::default();
    let mut cache = CardCache::new(q);
    let mut rng = RngState::from_seed(4);

    for _ in 0..3 {
        assert!(cache.get(CostBucket::Six, false, &mut search, &mut rng).is_err());
    }
    assert_eq!(search.calls(&query), 1);
    assert!(cache.is_filled(CostBucket::Six, false));
}

#[test]
fn exhaustion_mutates_nothing_else() {
    let mut cache = CardCache::new(queries());
    let mut search = TableSearch::default();
    let mut rng = RngState::from_seed(5);
    cache.fill_with(CostBucket::Five, false, Vec::new());
    cache.fill_with(CostBucket::Five, true, vec![Card::named("Drown in the Loch")]);
    cache.fill_with(CostBucket::Two, false, vec![Card::named("Counterspell")]);
    cache.get(CostBucket::Two, false, &mut search, &mut rng).unwrap();

    let seen_before = cache.seen().len();
    let themed_before = cache.partition(CostBucket::Five, true).unwrap().to_vec();

    assert!(cache.get(CostBucket::Five, false, &mut search, &mut rng).is_err());
    assert_eq!(cache.seen().len(), seen_before);
    assert_eq!(cache.partition(CostBucket::Five, true).unwrap(), &themed_before[..]);
    assert_eq!(cache.partition(CostBucket::Two, false).unwrap().len(), 0);
}

#[test]
fn invalid_bucket_label_is_rejected_without_side_effects() {
    let mut cache = CardCache::new(queries());
    let mut search = TableSearch::default();
    let mut rng = RngState::from_seed(6);

    let result = cache.get_labeled("=9", false, &mut search, &mut rng);
    assert!(matches!(result, Err(DeckError::InvalidCostBucket(ref label)) if label == "=9"));
    assert!(search.calls.is_empty());
    assert!(cache.seen().is_empty());
    for bucket in CostBucket::ALL {
        assert!(!cache.is_filled(bucket, false));
        assert!(!cache.is_filled(bucket, true));
    }
}

#[test]
fn labeled_lookup_uses_query_label() {
    let q = queries();
    let mut search = TableSearch::default().with(q.unthemed(CostBucket::OneOrLess), &["Ponder"]);
    let mut cache = CardCache::new(q);
    let mut rng = RngState::from_seed(7);

    let card = cache.get_labeled("<=1", false, &mut search, &mut rng).unwrap();
    assert_eq!(card.name, "Ponder");
}

#[test]
fn no_card_is_returned_twice_across_flags() {
    let q = queries();
    let pool: Vec<String> = (0..20).map(|i| format!("Card {i}")).collect();
    let themed: Vec<&str> = pool[..12].iter().map(String::as_str).collect();
    let unthemed: Vec<&str> = pool[6..].iter().map(String::as_str).collect();
    let mut search = TableSearch::default()
        .with(q.themed(CostBucket::Three), &themed)
        .with(q.unthemed(CostBucket::Three), &unthemed);
    let mut cache = CardCache::new(q);
    let mut rng = RngState::from_seed(8);

    let mut drawn = HashSet::new();
    loop {
        let flag = rng.coin_flip();
        let result = cache
            .get(CostBucket::Three, flag, &mut search, &mut rng)
            .or_else(|_| cache.get(CostBucket::Three, !flag, &mut search, &mut rng));
        match result {
            Ok(card) => assert!(drawn.insert(card.name), "card offered twice"),
            Err(_) => break,
        }
    }
    assert_eq!(drawn.len(), pool.len());
}

#[test]
fn repeated_name_in_one_result_is_drawn_once() {
    let q = queries();
    let mut search = TableSearch::default().with(
        q.unthemed(CostBucket::Two),
        &["Sol Ring", "Sol Ring", "Arcane Signet"],
    );
    let mut cache = CardCache::new(q);
    let mut rng = RngState::from_seed(9);

    let first = cache.get(CostBucket::Two, false, &mut search, &mut rng).unwrap();
    let second = cache.get(CostBucket::Two, false, &mut search, &mut rng).unwrap();
    let mut drawn = vec![first.name, second.name];
    drawn.sort();
    assert_eq!(drawn, vec!["Arcane Signet", "Sol Ring"]);
    assert!(matches!(
        cache.get(CostBucket::Two, false, &mut search, &mut rng),
        Err(DeckError::CacheExhausted { bucket: CostBucket::Two, themed: false })
    ));
}

#[test]
fn fill_with_keeps_first_of_repeated_names() {
    let mut cache = CardCache::new(queries());
    cache.fill_with(
        CostBucket::Five,
        true,
        vec![
            Card::named("Sol Ring"),
            Card::named("Arcane Signet"),
            Card::named("Sol Ring"),
        ],
    );
    assert_eq!(
        names(cache.partition(CostBucket::Five, true).unwrap()),
        vec!["Sol Ring", "Arcane Signet"]
    );
}
