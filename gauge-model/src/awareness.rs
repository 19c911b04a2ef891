//! Awareness and virality scoring.
//!
//! Social traction is proxied by `log1p(followers) * engagement`: the log
//! compresses long-tailed follower counts while staying defined (and zero)
//! at zero followers. Benchmark brands aggregate into one virality score;
//! the extended variant blends in direct awareness-survey signals.

use crate::calibration::{
    DEFAULT_BENCHMARK_FOLLOWERS, DEFAULT_ENGAGEMENT_PCT, DIRECT_AWARENESS_WEIGHT,
    MAX_BENCHMARK_BRANDS, TOP_OF_MIND_WEIGHT, UNAIDED_WEIGHT, VIRALITY_CEILING, VIRALITY_WEIGHT,
};
use crate::types::{AwarenessInputs, BenchmarkBrand, ViralityAggregate};

/// Log-follower-weighted engagement: `log1p(followers) * engagement/100`.
pub fn virality_score(followers: u64, engagement_pct: f64) -> f64 {
    (followers as f64).ln_1p() * (engagement_pct / 100.0)
}

/// Aggregate social traction over the named benchmark brands.
///
/// Only entries with a non-empty name count, capped at
/// [`MAX_BENCHMARK_BRANDS`]. An empty included set is not an error: it
/// falls back to the calibration defaults (10k followers at 2.0%
/// engagement), reproducing the blank-form state of the tool.
pub fn aggregate_benchmarks(brands: &[BenchmarkBrand]) -> ViralityAggregate {
    let included: Vec<&BenchmarkBrand> = brands
        .iter()
        .filter(|b| b.is_named())
        .take(MAX_BENCHMARK_BRANDS)
        .collect();

    let (total_followers, mean_engagement_pct) = if included.is_empty() {
        (DEFAULT_BENCHMARK_FOLLOWERS, DEFAULT_ENGAGEMENT_PCT)
    } else {
        let total: u64 = included.iter().map(|b| b.followers).sum();
        let mean = included.iter().map(|b| b.engagement_pct).sum::<f64>() / included.len() as f64;
        (total, mean)
    };

    let score = virality_score(total_followers, mean_engagement_pct);

    ViralityAggregate {
        total_followers,
        mean_engagement_pct,
        virality_score: score,
        virality_normalized: (score / VIRALITY_CEILING).min(1.0),
    }
}

/// Composite awareness score in [0, 1].
///
/// With survey inputs, direct awareness (unaided 60% / top-of-mind 40%)
/// carries 70% of the score and normalized virality the remaining 30%.
/// Without them, normalized virality stands alone.
pub fn awareness_score(survey: Option<&AwarenessInputs>, virality: &ViralityAggregate) -> f64 {
    match survey {
        Some(inputs) => {
            let factor = (inputs.unaided_awareness_pct * UNAIDED_WEIGHT
                + inputs.top_of_mind_pct * TOP_OF_MIND_WEIGHT)
                / 100.0;
            (factor * DIRECT_AWARENESS_WEIGHT + virality.virality_normalized * VIRALITY_WEIGHT)
                .min(1.0)
        }
        None => virality.virality_normalized,
    }
}
