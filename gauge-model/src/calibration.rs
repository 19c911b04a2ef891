//! Centralized calibration constants for the success model.
//!
//! These values are manually tuned for early-stage CPG brands pitching
//! natural/specialty retail. Changing a constant here recalibrates the
//! model without touching any scoring logic.

/// Virality score at which social traction is considered maxed out.
/// `log1p(followers) * engagement` saturates the awareness contribution here.
pub const VIRALITY_CEILING: f64 = 2.5;

/// Monthly promotional spend (digital + offline, USD) at which the promo
/// score reaches 1.0. Spend above this buys no additional model credit.
pub const PROMO_SPEND_CEILING: f64 = 20_000.0;

/// Net margin percentage treated as the "perfect" benchmark; the margin
/// score is net margin relative to this, capped at 1.0.
pub const MARGIN_BENCHMARK_PCT: f64 = 50.0;

/// Follower count substituted when no benchmark brands are entered.
pub const DEFAULT_BENCHMARK_FOLLOWERS: u64 = 10_000;

/// Engagement rate (%) substituted when no benchmark brands are entered.
pub const DEFAULT_ENGAGEMENT_PCT: f64 = 2.0;

/// Maximum number of benchmark brands considered per evaluation.
pub const MAX_BENCHMARK_BRANDS: usize = 3;

/// Weight of unaided awareness in the direct-awareness factor.
pub const UNAIDED_WEIGHT: f64 = 0.6;

/// Weight of top-of-mind awareness in the direct-awareness factor.
pub const TOP_OF_MIND_WEIGHT: f64 = 0.4;

/// Weight of the direct-awareness factor in the composite awareness score.
pub const DIRECT_AWARENESS_WEIGHT: f64 = 0.7;

/// Weight of normalized virality in the composite awareness score.
pub const VIRALITY_WEIGHT: f64 = 0.3;

/// Margin weight in both blend schemes.
pub const MARGIN_WEIGHT: f64 = 0.4;

/// Awareness weight in the three-factor blend.
pub const AWARENESS_WEIGHT_THREE_FACTOR: f64 = 0.4;

/// Promotion weight in the three-factor blend.
pub const PROMO_WEIGHT: f64 = 0.2;

/// Awareness weight in the two-factor blend. Together with `MARGIN_WEIGHT`
/// this sums to 0.9, not 1.0 — a quirk inherited from the source model
/// that callers opting into the two-factor scheme accept as-is.
pub const AWARENESS_WEIGHT_TWO_FACTOR: f64 = 0.5;

/// Margin score below which the margin warning fires.
pub const LOW_MARGIN_SCORE: f64 = 0.5;

/// Awareness score below which the awareness warning fires.
pub const LOW_AWARENESS_SCORE: f64 = 0.3;

/// Promo score below which the promo warning fires.
pub const LOW_PROMO_SCORE: f64 = 0.3;

/// Probability (%) below which the outlook is rated a failure risk.
pub const LOW_PROBABILITY_PCT: f64 = 40.0;

/// Probability (%) below which the outlook is rated moderate.
pub const MODERATE_PROBABILITY_PCT: f64 = 70.0;
