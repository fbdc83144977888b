//! Simulated content generation.
//!
//! Generation is a timed task: wait the configured delay, then draw a
//! random batch from the static pool for the requested kind. The draw is
//! a plain shuffle-and-take; seeding the RNG makes it deterministic for
//! tests and demo recordings. Callers run [`generate`] under `tokio::spawn`
//! and may abort the handle to cancel; there is no retry and no partial
//! result.

use crate::catalog::content_pool;
use crate::types::ContentKind;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::Duration;

/// Tunables for the simulated generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Simulated generation delay.
    pub delay: Duration,
    /// Number of lines per batch.
    pub batch_size: usize,
    /// Fixed RNG seed; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(2),
            batch_size: 3,
            seed: None,
        }
    }
}

/// Draw a batch for the kind immediately, without the delay.
pub fn draw(kind: ContentKind, settings: &GeneratorSettings) -> Vec<String> {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut pool: Vec<&str> = content_pool(kind).to_vec();
    pool.shuffle(&mut rng);
    pool.truncate(settings.batch_size.min(pool.len()));
    debug!(
        "drew content batch (kind={:?}, size={}, seeded={})",
        kind,
        pool.len(),
        settings.seed.is_some()
    );
    pool.into_iter().map(str::to_string).collect()
}

/// Wait the configured delay, then draw a batch.
pub async fn generate(kind: ContentKind, settings: GeneratorSettings) -> Vec<String> {
    debug!(
        "generation started (kind={:?}, delay_ms={})",
        kind,
        settings.delay.as_millis()
    );
    tokio::time::sleep(settings.delay).await;
    draw(kind, &settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HOOK_POOL;
    use pretty_assertions::assert_eq;

    fn seeded(seed: u64) -> GeneratorSettings {
        GeneratorSettings {
            delay: Duration::from_millis(0),
            batch_size: 3,
            seed: Some(seed),
        }
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let first = draw(ContentKind::Hooks, &seeded(42));
        let second = draw(ContentKind::Hooks, &seeded(42));
        assert_eq!(first, second);
    }

    #[test]
    fn batch_items_come_from_the_pool() {
        let batch = draw(ContentKind::Hooks, &seeded(7));
        assert_eq!(batch.len(), 3);
        for line in &batch {
            assert!(HOOK_POOL.contains(&line.as_str()));
        }
    }

    #[test]
    fn batch_has_no_duplicates() {
        let batch = draw(ContentKind::Captions, &seeded(1));
        let mut unique = batch.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), batch.len());
    }

    #[test]
    fn oversized_batch_is_clamped_to_pool() {
        let settings = GeneratorSettings {
            delay: Duration::from_millis(0),
            batch_size: 50,
            seed: Some(3),
        };
        let batch = draw(ContentKind::Hashtags, &settings);
        assert_eq!(batch.len(), 5);
    }

    #[tokio::test]
    async fn generate_resolves_after_delay() {
        let settings = GeneratorSettings {
            delay: Duration::from_millis(5),
            batch_size: 2,
            seed: Some(9),
        };
        let batch = generate(ContentKind::Hooks, settings.clone()).await;
        assert_eq!(batch, draw(ContentKind::Hooks, &settings));
    }

    #[tokio::test]
    async fn aborted_generation_produces_nothing() {
        let settings = GeneratorSettings {
            delay: Duration::from_secs(60),
            batch_size: 3,
            seed: Some(4),
        };
        let handle = tokio::spawn(generate(ContentKind::Hooks, settings));
        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());
    }
}
