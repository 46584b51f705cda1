//! Random sources for pair sampling

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform index picker used by the pair selector
pub trait RandomSource {
    /// A uniformly random index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Adapter from any [`rand::Rng`] to [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// Seeded for reproducible picks, or from OS entropy
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RngSource(StdRng::seed_from_u64(seed)),
            None => RngSource(StdRng::from_entropy()),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted
#[cfg(test)]
pub(crate) struct ScriptedSource {
    picks: Vec<usize>,
    next: usize,
    pub calls: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(picks: &[usize]) -> Self {
        ScriptedSource {
            picks: picks.to_vec(),
            next: 0,
            calls: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;
        self.calls += 1;
        pick % len
    }
}
