use rand::{rngs::StdRng, seq::SliceRandom, Rng, RngCore, SeedableRng};

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds from OS entropy; the drawn seed is kept so the run can be replayed.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Uniform index into a collection of `len` items.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Up to `amount` distinct items, without replacement.
    pub fn sample<'a, T>(&mut self, items: &'a [T], amount: usize) -> Vec<&'a T> {
        items.choose_multiple(&mut self.rng, amount).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RngState::from_seed(7);
        let mut b = RngState::from_seed(7);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn pick_index_handles_empty() {
        let mut rng = RngState::from_seed(1);
        assert_eq!(rng.pick_index(0), None);
        for _ in 0..100 {
            assert!(rng.pick_index(3).unwrap() < 3);
        }
    }

    #[test]
    fn sample_caps_at_len_and_is_distinct() {
        let mut rng = RngState::from_seed(3);
        let items = ["a", "b", "c"];
        let picked = rng.sample(&items, 10);
        assert_eq!(picked.len(), 3);
        let mut names: Vec<&str> = picked.into_iter().copied().collect();
        names.sort();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
