//! Index sampling for the swipe deck.
//!
//! Both samplers draw `k` distinct indices out of `0..n` and return them
//! ascending, so the chosen candidates keep their rank order.
//!
//! # Roulette weights
//!
//! Index `i` starts with weight `n - i`: the best-ranked candidate is `n`
//! times as likely as the worst on the first draw.  A drawn index leaves the
//! wheel together with its weight and the rest are renormalized.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::index;

use tt_core::SampleRng;

use crate::{SelectError, SelectResult};

/// `k` distinct indices of `0..n`, uniformly at random.
pub fn uniform_sample(n: usize, k: usize, rng: &mut SampleRng) -> SelectResult<Vec<usize>> {
    check_sample_size(n, k)?;
    let mut picked = index::sample(rng.inner(), n, k).into_vec();
    picked.sort_unstable();
    Ok(picked)
}

/// `k` distinct indices of `0..n`, favouring low (better-ranked) indices.
pub fn roulette_sample(n: usize, k: usize, rng: &mut SampleRng) -> SelectResult<Vec<usize>> {
    check_sample_size(n, k)?;

    let mut indexes: Vec<usize> = (0..n).collect();
    let mut weights: Vec<u64> = (1..=n as u64).rev().collect();
    let mut picked = Vec::with_capacity(k);

    for _ in 0..k {
        let wheel = WeightedIndex::new(&weights)
            .map_err(|e| SelectError::Sample(format!("roulette wheel: {e}")))?;
        let slot = wheel.sample(rng.inner());
        picked.push(indexes.remove(slot));
        weights.remove(slot);
    }

    picked.sort_unstable();
    Ok(picked)
}

fn check_sample_size(n: usize, k: usize) -> SelectResult<()> {
    if k > n {
        return Err(SelectError::Sample(format!(
            "cannot draw {k} distinct items from {n}"
        )));
    }
    Ok(())
}
