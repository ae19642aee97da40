use crate::{
    Card, CardCache, CardSearch, CostBucket, DeckConfig, DeckError, ManaCurve, QueryBuilder,
    RngState,
};
use std::collections::HashSet;

/// Draws the non-land part of a deck: cards that follow the mana curve,
/// stay inside the commander's colour identity, and, when a theme is set,
/// come from the themed search about half of the time.
#[derive(Debug, Clone)]
pub struct Mainboard {
    cache: CardCache,
    curve: ManaCurve,
    target: usize,
}

impl Mainboard {
    pub fn new(commander: &Card, theme: Option<String>, config: &DeckConfig) -> Self {
        Self::with_cache(
            CardCache::new(QueryBuilder::for_commander(commander, theme)),
            config.curve.clone(),
            config.mainboard_count,
        )
    }

    pub fn with_cache(cache: CardCache, curve: ManaCurve, target: usize) -> Self {
        Self {
            cache,
            curve,
            target,
        }
    }

    pub fn is_themed(&self) -> bool {
        self.cache.queries().theme().is_some()
    }

    pub fn cache(&self) -> &CardCache {
        &self.cache
    }

    /// Every (bucket, themed) pair a draw can land on.
    fn reachable_pairs(&self) -> Vec<(CostBucket, bool)> {
        let flags: &[bool] = if self.is_themed() {
            &[false, true]
        } else {
            &[false]
        };
        CostBucket::ALL
            .into_iter()
            .filter(|&bucket| self.curve.weight_of(bucket) > 0)
            .flat_map(|bucket| flags.iter().map(move |&themed| (bucket, themed)))
            .collect()
    }

    /// Fills every slot by sampling a bucket and theme flag and drawing from
    /// the cache, sampling again whenever the pair has nothing left. Pairs
    /// that ran dry are remembered and skipped; once all of them have, the
    /// build stops with `PoolExhausted`.
    pub fn build(
        &mut self,
        search: &mut dyn CardSearch,
        rng: &mut RngState,
    ) -> Result<Vec<Card>, DeckError> {
        let reachable = self.reachable_pairs();
        let themed_run = self.is_themed();
        let mut exhausted: HashSet<(CostBucket, bool)> = HashSet::new();
        let mut deck = Vec::with_capacity(self.target);

        while deck.len() < self.target {
            if reachable.iter().all(|pair| exhausted.contains(pair)) {
                return Err(DeckError::PoolExhausted {
                    drawn: deck.len(),
                    target: self.target,
                });
            }
            let Some(bucket) = self.curve.sample(rng) else {
                continue;
            };
            let themed = themed_run && rng.coin_flip();
            if exhausted.contains(&(bucket, themed)) {
                continue;
            }

            match self.cache.get(bucket, themed, search, rng) {
                Ok(card) => deck.push(card),
                Err(DeckError::CacheExhausted { bucket, themed }) => {
                    log::debug!("cmc{bucket} (themed: {themed}) exhausted, redrawing");
                    exhausted.insert((bucket, themed));
                }
                Err(err) => return Err(err),
            }
        }

        Ok(deck)
    }
}
