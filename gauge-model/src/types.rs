use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Pricing types
// ---------------------------------------------------------------------------

/// Cost and margin-chain inputs for a single product.
///
/// All margins are margin-on-price percentages: each party's cut is a
/// fraction of the price *they* sell at, not a markup on cost.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PricingInputs {
    /// Cost of goods sold per unit, USD. Must be positive.
    pub cogs: f64,
    /// The brand's own margin goal, percent of its selling price.
    pub brand_margin_goal_pct: f64,
    /// Whether a distributor (e.g. KeHE/UNFI) sits in the chain.
    pub include_distributor: bool,
    /// Distributor margin percent. Ignored when `include_distributor` is false.
    #[serde(default)]
    pub distributor_margin_pct: f64,
    /// Retailer margin percent.
    pub retailer_margin_pct: f64,
}

/// Derived prices at each step of the distribution chain.
#[derive(Clone, Debug, Serialize)]
pub struct PricingResult {
    /// Price the brand sells at after hitting its margin goal.
    pub intermediate_price: f64,
    /// Price the distributor sells at, when one is in the chain.
    pub distributor_price: Option<f64>,
    /// Final retail shelf price after all markups.
    pub shelf_price: f64,
    /// Brand net margin: (shelf - cogs) / shelf, as a percentage.
    pub net_margin_pct: f64,
}

// ---------------------------------------------------------------------------
// Awareness / benchmark types
// ---------------------------------------------------------------------------

/// A competitor brand used as a social-traction benchmark.
///
/// Entries with an empty name are treated as blank form rows and excluded
/// from aggregation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchmarkBrand {
    pub name: String,
    pub followers: u64,
    pub engagement_pct: f64,
}

impl BenchmarkBrand {
    /// Whether this entry counts toward the benchmark aggregate.
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Direct brand-awareness survey signals (extended variant only).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AwarenessInputs {
    pub unaided_awareness_pct: f64,
    pub top_of_mind_pct: f64,
}

/// Monthly promotional budget (extended variant only).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PromoInputs {
    pub digital_spend: f64,
    pub offline_spend: f64,
}

/// Aggregate social traction across the included benchmark brands.
#[derive(Clone, Debug, Serialize)]
pub struct ViralityAggregate {
    pub total_followers: u64,
    pub mean_engagement_pct: f64,
    /// `log1p(total_followers) * mean_engagement`, unbounded above.
    pub virality_score: f64,
    /// Virality score relative to the calibration ceiling, capped at 1.0.
    pub virality_normalized: f64,
}

// ---------------------------------------------------------------------------
// Scoring types
// ---------------------------------------------------------------------------

/// The normalized sub-scores feeding the probability blend, each in [0, 1].
#[derive(Clone, Debug, Serialize)]
pub struct ScoreSet {
    pub margin: f64,
    pub awareness: f64,
    /// Present only when promotional spend is tracked.
    pub promo: Option<f64>,
}

/// Target retail account. A fixed set — each carries a fixed difficulty
/// modifier reflecting how hard it is to win and keep the shelf placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Retailer {
    Sprouts,
    Target,
    #[serde(rename = "ULTA", alias = "Ulta")]
    Ulta,
}

impl Retailer {
    /// Difficulty discount applied multiplicatively to the blended score.
    pub fn modifier(self) -> f64 {
        match self {
            Retailer::Sprouts => 0.7,
            Retailer::Target => 0.5,
            Retailer::Ulta => 0.6,
        }
    }

    /// All supported retailers, in display order.
    pub const ALL: [Retailer; 3] = [Retailer::Sprouts, Retailer::Target, Retailer::Ulta];
}

impl fmt::Display for Retailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Retailer::Sprouts => write!(f, "Sprouts"),
            Retailer::Target => write!(f, "Target"),
            Retailer::Ulta => write!(f, "ULTA"),
        }
    }
}

/// Final success probability with the inputs that derived it.
#[derive(Clone, Debug, Serialize)]
pub struct ProbabilityResult {
    /// Percentage in [0, 100], rounded to one decimal place.
    pub value: f64,
    pub scores: ScoreSet,
    pub retailer_modifier: f64,
}

// ---------------------------------------------------------------------------
// Risk types
// ---------------------------------------------------------------------------

/// How a risk message should be styled by the presentation layer
/// (Warning=amber, Error=red, Info=blue, Success=green).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    Warning,
    Error,
    Info,
    Success,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "Warning"),
            Severity::Error => write!(f, "Error"),
            Severity::Info => write!(f, "Info"),
            Severity::Success => write!(f, "Success"),
        }
    }
}

/// One qualitative gap/risk call-out produced by the annotator.
#[derive(Clone, Debug, Serialize)]
pub struct RiskMessage {
    pub severity: Severity,
    pub text: String,
}
