//! The single external surface: one snapshot of inputs in, one complete
//! evaluation out. Recomputed fresh on every call; nothing is retained
//! between evaluations.

use serde::{Deserialize, Serialize};

use crate::awareness::{aggregate_benchmarks, awareness_score};
use crate::error::GaugeResult;
use crate::pricing::compute_pricing;
use crate::promo::promo_score;
use crate::risk::annotate;
use crate::synthesis::{synthesize, WeightScheme};
use crate::types::{
    AwarenessInputs, BenchmarkBrand, PricingInputs, PricingResult, ProbabilityResult, PromoInputs,
    Retailer, RiskMessage, ViralityAggregate,
};

/// Everything the presentation layer collects from the user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvaluationInputs {
    pub pricing: PricingInputs,
    /// Benchmark brand rows as entered; blank-name rows are allowed here
    /// and skipped during aggregation.
    #[serde(default)]
    pub benchmarks: Vec<BenchmarkBrand>,
    /// Direct awareness-survey signals. Extended variant only.
    #[serde(default)]
    pub awareness: Option<AwarenessInputs>,
    /// Monthly promotional budget. Extended variant only.
    #[serde(default)]
    pub promo: Option<PromoInputs>,
    pub retailer: Retailer,
    pub scheme: WeightScheme,
}

/// One complete evaluation snapshot.
#[derive(Clone, Debug, Serialize)]
pub struct Evaluation {
    pub pricing: PricingResult,
    pub virality: ViralityAggregate,
    pub probability: ProbabilityResult,
    pub messages: Vec<RiskMessage>,
}

/// Run the full chain: pricing → scores → probability → risk messages.
///
/// Fails only on the pricing guards (margin ≥ 100%, non-positive cogs);
/// every downstream stage is total.
pub fn evaluate(inputs: &EvaluationInputs) -> GaugeResult<Evaluation> {
    let pricing = compute_pricing(&inputs.pricing)?;

    let virality = aggregate_benchmarks(&inputs.benchmarks);
    let awareness = awareness_score(inputs.awareness.as_ref(), &virality);
    let promo = inputs.promo.as_ref().map(promo_score);

    let probability = synthesize(&pricing, awareness, promo, inputs.retailer, inputs.scheme);
    let messages = annotate(&probability.scores, probability.value);

    Ok(Evaluation {
        pricing,
        virality,
        probability,
        messages,
    })
}
