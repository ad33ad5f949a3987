/// Ranks every catalog entry for a set of interests.
///
/// Each entry's base score is the sum of its per-profile scores; a small
/// jitter in `[0.0, 0.3)` is added so near-ties shuffle between runs while any
/// real score gap of 0.3 or more keeps its order.
use rand::Rng;
use tracing::debug;

use crate::model::{ApiEntry, AuthPreference, Catalog, ScoredApi};
use crate::profiles::ProfileRegistry;
use crate::scorer;

/// Exclusive upper bound of the per-entry jitter.
pub const MAX_JITTER: f64 = 0.3;

/// Source of the per-entry tie-breaking jitter.
///
/// Implementations must return values in `[0.0, MAX_JITTER)`.
pub trait TieBreaker {
    fn jitter(&mut self) -> f64;
}

/// Uniform jitter drawn from any `rand` generator.
#[derive(Debug, Clone)]
pub struct UniformJitter<R> {
    rng: R,
}

impl<R: Rng> UniformJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformJitter<rand::rngs::ThreadRng> {
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> TieBreaker for UniformJitter<R> {
    fn jitter(&mut self) -> f64 {
        self.rng.random_range(0.0..MAX_JITTER)
    }
}

/// Sum of `entry`'s scores over every known interest. Unknown tags add nothing.
pub fn base_score<S: AsRef<str>>(
    entry: &ApiEntry,
    registry: &ProfileRegistry,
    interests: &[S],
    auth: AuthPreference,
) -> f64 {
    interests
        .iter()
        .filter_map(|tag| registry.get(tag.as_ref()))
        .map(|profile| scorer::score(entry, profile, auth))
        .sum()
}

pub struct Recommender<'r, T> {
    registry: &'r ProfileRegistry,
    tie_breaker: T,
}

impl<'r, T: TieBreaker> Recommender<'r, T> {
    pub fn new(registry: &'r ProfileRegistry, tie_breaker: T) -> Self {
        Self {
            registry,
            tie_breaker,
        }
    }

    /// Score all entries and return the top `limit`, best first.
    ///
    /// Returns `min(limit, catalog.entry_count())` results. Equal totals keep
    /// catalog order.
    pub fn recommend<'c, S: AsRef<str>>(
        &mut self,
        catalog: &'c Catalog,
        interests: &[S],
        auth: AuthPreference,
        limit: usize,
    ) -> Vec<ScoredApi<'c>> {
        for tag in interests {
            if !self.registry.contains(tag.as_ref()) {
                debug!(tag = tag.as_ref(), "unknown interest contributes nothing");
            }
        }

        let mut scored: Vec<ScoredApi<'c>> = catalog
            .entries()
            .map(|entry| {
                let base = base_score(entry, self.registry, interests, auth);
                ScoredApi {
                    entry,
                    score: base + self.tie_breaker.jitter(),
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(limit);

        debug!(
            entries = catalog.entry_count(),
            returned = scored.len(),
            auth = %auth,
            "recommendations ranked"
        );
        scored
    }
}
