//! Angry emoji selection.
//!
//! A [`Rager`] hands out every emoji of its pool once, in shuffled order,
//! before reshuffling the whole pool for the next cycle. The last emoji of one
//! cycle may come out again as the first of the next.

use tracing::trace;

use crate::error::{RantError, Result};
use crate::random::RandomSource;

/// The emojis used when none are configured
pub const DEFAULT_EMOJIS: [&str; 5] = ["😤", "😡", "😠", "🤬", "👿"];

/// A non-empty list of symbols to rage with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiPool {
    symbols: Vec<String>,
}

impl EmojiPool {
    /// Build a pool, rejecting an empty symbol list
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();
        if symbols.is_empty() {
            return Err(RantError::EmptyEmojiPool);
        }
        Ok(Self { symbols })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}

impl Default for EmojiPool {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_EMOJIS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Cycles through an [`EmojiPool`] in shuffled order
pub struct Rager<'a, S: RandomSource> {
    pool: &'a EmojiPool,
    source: S,
    /// Shuffled pool indices; everything before `cursor` has been drawn
    unseen: Vec<usize>,
    cursor: usize,
}

impl<'a, S: RandomSource> Rager<'a, S> {
    pub fn new(pool: &'a EmojiPool, source: S) -> Self {
        let mut rager = Self {
            pool,
            source,
            unseen: vec![0; pool.len()],
            cursor: 0,
        };
        rager.reset();
        rager
    }

    /// Start a fresh cycle over the whole pool
    pub fn reset(&mut self) {
        for (i, slot) in self.unseen.iter_mut().enumerate() {
            *slot = i;
        }
        self.source.shuffle(&mut self.unseen);
        self.cursor = 0;
        trace!("New emoji cycle: {:?}", self.unseen);
    }

    /// Next emoji of the current cycle
    pub fn draw(&mut self) -> &'a str {
        let pool: &'a EmojiPool = self.pool;
        let index = self.unseen[self.cursor];
        self.cursor += 1;

        if self.cursor == self.unseen.len() {
            self.reset();
        }

        &pool.symbols[index]
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool_of(n: usize) -> EmojiPool {
        EmojiPool::new((0..n).map(|i| format!("e{}", i))).unwrap()
    }

    fn sorted(mut xs: Vec<&str>) -> Vec<&str> {
        xs.sort_unstable();
        xs
    }

    #[test]
    fn test_default_pool() {
        let pool = EmojiPool::default();
        assert_eq!(pool.len(), 5);
        assert_eq!(pool.symbols()[0], "😤");
    }

    #[test]
    fn test_empty_pool_rejected() {
        let result = EmojiPool::new(Vec::<String>::new());
        assert!(matches!(result, Err(RantError::EmptyEmojiPool)));
    }

    #[test]
    fn test_one_cycle_draws_every_symbol_once() {
        for n in 1..=8 {
            let pool = pool_of(n);
            let mut rager = Rager::new(&pool, StdRng::seed_from_u64(n as u64));
            let drawn: Vec<&str> = (0..n).map(|_| rager.draw()).collect();

            let expected: Vec<&str> = pool.symbols().iter().map(String::as_str).collect();
            assert_eq!(sorted(drawn), sorted(expected), "pool size {}", n);
        }
    }

    #[test]
    fn test_every_later_cycle_is_complete() {
        let pool = EmojiPool::default();
        let mut rager = Rager::new(&pool, StdRng::seed_from_u64(3));
        let expected = sorted(DEFAULT_EMOJIS.to_vec());

        for _ in 0..10 {
            let cycle: Vec<&str> = (0..pool.len()).map(|_| rager.draw()).collect();
            assert_eq!(sorted(cycle), expected);
        }
    }

    #[test]
    fn test_no_repeat_within_cycle() {
        let pool = EmojiPool::default();
        let mut rager = Rager::new(&pool, StdRng::seed_from_u64(11));
        for _ in 0..20 {
            let cycle: Vec<&str> = (0..pool.len()).map(|_| rager.draw()).collect();
            for pair in cycle.windows(2) {
                assert_ne!(pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_reset_mid_cycle_starts_full_cycle() {
        let pool = pool_of(4);
        let mut rager = Rager::new(&pool, StdRng::seed_from_u64(5));
        rager.draw();
        rager.draw();
        rager.reset();

        let drawn: Vec<&str> = (0..4).map(|_| rager.draw()).collect();
        assert_eq!(sorted(drawn), vec!["e0", "e1", "e2", "e3"]);
    }

    #[test]
    fn test_single_symbol_pool_repeats() {
        let pool = EmojiPool::new(["💢"]).unwrap();
        let mut rager = Rager::new(&pool, StdRng::seed_from_u64(0));
        assert_eq!(rager.pool_len(), 1);
        for _ in 0..3 {
            assert_eq!(rager.draw(), "💢");
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let pool = EmojiPool::default();
        let mut a = Rager::new(&pool, StdRng::seed_from_u64(99));
        let mut b = Rager::new(&pool, StdRng::seed_from_u64(99));
        for _ in 0..12 {
            assert_eq!(a.draw(), b.draw());
        }
    }
}
