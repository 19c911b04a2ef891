//! Core model for the CPG brand launch success gauge.
//!
//! Everything here is a pure, synchronous function of its inputs: raw inputs
//! flow one way through pricing derivation, awareness/virality scoring,
//! probability synthesis, and risk annotation. There is no shared state,
//! no caching, and no I/O. The presentation layer calls [`evaluate()`] on
//! every input change and renders the returned snapshot.

pub mod awareness;
pub mod calibration;
pub mod error;
pub mod evaluate;
pub mod pricing;
pub mod promo;
pub mod risk;
pub mod synthesis;
pub mod types;

pub use error::{GaugeError, GaugeResult};
pub use evaluate::{evaluate, Evaluation, EvaluationInputs};
pub use synthesis::WeightScheme;
pub use types::{
    AwarenessInputs, BenchmarkBrand, PricingInputs, PricingResult, ProbabilityResult, PromoInputs,
    Retailer, RiskMessage, ScoreSet, Severity, ViralityAggregate,
};
