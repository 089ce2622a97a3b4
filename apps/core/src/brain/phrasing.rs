//! Phrase selection strategy.
//!
//! Every place that picks one phrasing out of a pool goes through a
//! [`Selector`]. Production uses [`RandomSelector`]; tests substitute
//! [`FixedSelector`] to pin the output.

use rand::rngs::ThreadRng;
use rand::Rng;

/// Chooses an index into a pool of `len` interchangeable items
pub trait Selector {
    /// `len` is always greater than zero
    fn select(&mut self, len: usize) -> usize;
}

/// Uniform random choice, unseeded by default
pub struct RandomSelector<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomSelector<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomSelector<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Use a caller-provided generator (e.g. a seeded `StdRng`)
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Selector for RandomSelector<R> {
    fn select(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same position, wrapped to the pool length
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSelector(pub usize);

impl Selector for FixedSelector {
    fn select(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// Pick one item from a pool; `None` only for an empty pool
pub fn pick<'a, T>(pool: &'a [T], selector: &mut dyn Selector) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    let index = selector.select(pool.len()).min(pool.len() - 1);
    pool.get(index)
}
