//! Draw generation.
//!
//! A draw is `limit` distinct numbers from `1..=total`, sorted ascending.
//! [`draw_numbers`] uses accept-reject sampling: pick uniformly, throw away
//! repeats, stop once enough unique numbers are collected. With the small
//! limit/total ratios this game uses the expected number of rejections is
//! tiny, so no shuffle-based sampler is needed.

use enum_dispatch::enum_dispatch;
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::{HashMap, VecDeque};

use super::entities::{Number, Pool, PoolKind};

/// Draw `pool.limit` unique numbers from `1..=pool.total` using `rng`.
pub fn draw_numbers<R: Rng + ?Sized>(rng: &mut R, pool: &Pool) -> Vec<Number> {
    // A validated config never has limit > total; the cap keeps the loop finite.
    let target = pool.limit.min(usize::from(pool.total));
    let mut drawn = Vec::with_capacity(target);
    while drawn.len() < target {
        let candidate = rng.random_range(1..=pool.total);
        if !drawn.contains(&candidate) {
            drawn.push(candidate);
        }
    }
    drawn.sort_unstable();
    drawn
}

/// Anything that can produce a draw for a pool.
#[enum_dispatch]
pub trait DrawSource {
    fn draw(&mut self, kind: PoolKind, pool: &Pool) -> Vec<Number>;
}

/// The draw sources a session can be built with.
#[enum_dispatch(DrawSource)]
#[derive(Debug)]
pub enum Drawer {
    RandomDraw,
    ScriptedDraw,
}

impl Default for Drawer {
    fn default() -> Self {
        RandomDraw::new().into()
    }
}

/// Uniformly random draws.
#[derive(Debug)]
pub struct RandomDraw {
    rng: StdRng,
}

impl Default for RandomDraw {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomDraw {
    /// Seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible draws for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DrawSource for RandomDraw {
    fn draw(&mut self, kind: PoolKind, pool: &Pool) -> Vec<Number> {
        let drawn = draw_numbers(&mut self.rng, pool);
        debug!("Drew {kind} numbers {drawn:?}");
        drawn
    }
}

/// Replays predetermined draws, one queue per pool.
///
/// Once a pool's queue runs dry the last draw served for that pool is
/// repeated. A pool that was never scripted yields `1..=limit`.
#[derive(Debug, Default)]
pub struct ScriptedDraw {
    queued: HashMap<PoolKind, VecDeque<Vec<Number>>>,
    last: HashMap<PoolKind, Vec<Number>>,
}

impl ScriptedDraw {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one draw for `kind`. Numbers are sorted and de-duplicated.
    #[must_use]
    pub fn push(mut self, kind: PoolKind, numbers: impl IntoIterator<Item = Number>) -> Self {
        let mut numbers: Vec<Number> = numbers.into_iter().collect();
        numbers.sort_unstable();
        numbers.dedup();
        self.queued.entry(kind).or_default().push_back(numbers);
        self
    }

    /// Queue a whole round: a regular draw and a strong draw.
    #[must_use]
    pub fn round(
        self,
        regular: impl IntoIterator<Item = Number>,
        strong: impl IntoIterator<Item = Number>,
    ) -> Self {
        self.push(PoolKind::Regular, regular)
            .push(PoolKind::Strong, strong)
    }
}

impl DrawSource for ScriptedDraw {
    fn draw(&mut self, kind: PoolKind, pool: &Pool) -> Vec<Number> {
        if let Some(next) = self.queued.get_mut(&kind).and_then(VecDeque::pop_front) {
            self.last.insert(kind, next.clone());
            return next;
        }
        self.last.get(&kind).cloned().unwrap_or_else(|| {
            let target = pool.limit.min(usize::from(pool.total));
            (1..=pool.total).take(target).collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // === Random Draw Tests ===

    #[test]
    fn test_draw_numbers_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = Pool::new(37, 6);
        let drawn = draw_numbers(&mut rng, &pool);

        assert_eq!(drawn.len(), 6);
        assert!(drawn.windows(2).all(|w| w[0] < w[1]), "sorted, no repeats");
        assert!(drawn.iter().all(|&n| pool.contains(n)));
    }

    #[test]
    fn test_draw_never_repeats_over_many_runs() {
        let mut source = RandomDraw::seeded(2024);
        let pool = Pool::new(37, 6);
        for _ in 0..10_000 {
            let drawn = source.draw(PoolKind::Regular, &pool);
            let unique: HashSet<_> = drawn.iter().collect();
            assert_eq!(unique.len(), 6);
        }
    }

    #[test]
    fn test_draw_full_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let drawn = draw_numbers(&mut rng, &Pool::new(7, 7));
        assert_eq!(drawn, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_seeded_draws_reproducible() {
        let pool = Pool::new(37, 6);
        let mut a = RandomDraw::seeded(99);
        let mut b = RandomDraw::seeded(99);
        for _ in 0..20 {
            assert_eq!(
                a.draw(PoolKind::Regular, &pool),
                b.draw(PoolKind::Regular, &pool)
            );
        }
    }

    #[test]
    fn test_draw_covers_whole_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        let pool = Pool::new(7, 1);
        let seen: HashSet<Number> = (0..500).flat_map(|_| draw_numbers(&mut rng, &pool)).collect();
        assert_eq!(seen.len(), 7);
    }

    // === Scripted Draw Tests ===

    #[test]
    fn test_scripted_draw_replays_in_order() {
        let pool = Pool::new(37, 6);
        let mut drawer: Drawer = ScriptedDraw::new()
            .push(PoolKind::Regular, [6, 5, 4, 3, 2, 1])
            .push(PoolKind::Regular, [7, 8, 9, 10, 11, 12])
            .into();

        assert_eq!(drawer.draw(PoolKind::Regular, &pool), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(drawer.draw(PoolKind::Regular, &pool), vec![7, 8, 9, 10, 11, 12]);
        // Exhausted: repeat the last one.
        assert_eq!(drawer.draw(PoolKind::Regular, &pool), vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_scripted_draw_unscripted_pool() {
        let mut drawer = ScriptedDraw::new();
        assert_eq!(drawer.draw(PoolKind::Strong, &Pool::new(7, 1)), vec![1]);
    }
}
