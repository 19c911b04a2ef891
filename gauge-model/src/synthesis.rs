//! Probability synthesis: sub-scores and a retailer modifier into one number.

use serde::{Deserialize, Serialize};

use crate::calibration::{
    AWARENESS_WEIGHT_THREE_FACTOR, AWARENESS_WEIGHT_TWO_FACTOR, MARGIN_BENCHMARK_PCT,
    MARGIN_WEIGHT, PROMO_WEIGHT,
};
use crate::types::{PricingResult, ProbabilityResult, Retailer, ScoreSet};

/// Which blend of sub-scores to use.
///
/// Two schemes exist in the field and neither is a correction of the
/// other, so the caller must pick one explicitly. The two-factor weights
/// intentionally sum to 0.9 (see `calibration`); all-perfect inputs under
/// that scheme top out below the retailer modifier alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightScheme {
    /// `margin*0.4 + awareness*0.4 + promo*0.2`.
    ThreeFactor,
    /// `margin*0.4 + awareness*0.5`, no promo tracking.
    TwoFactor,
}

/// Net margin relative to the benchmark margin, capped at 1.0.
pub fn margin_score(pricing: &PricingResult) -> f64 {
    (pricing.net_margin_pct / MARGIN_BENCHMARK_PCT).min(1.0)
}

/// Blend the sub-scores, apply the retailer difficulty modifier, and round
/// to a one-decimal percentage.
///
/// Under [`WeightScheme::ThreeFactor`] a missing promo score is treated as
/// zero spend (the blank-slider state); under [`WeightScheme::TwoFactor`]
/// any promo score is ignored by the blend but still reported.
pub fn synthesize(
    pricing: &PricingResult,
    awareness: f64,
    promo: Option<f64>,
    retailer: Retailer,
    scheme: WeightScheme,
) -> ProbabilityResult {
    let margin = margin_score(pricing);

    let blend = match scheme {
        WeightScheme::ThreeFactor => {
            margin * MARGIN_WEIGHT
                + awareness * AWARENESS_WEIGHT_THREE_FACTOR
                + promo.unwrap_or(0.0) * PROMO_WEIGHT
        }
        WeightScheme::TwoFactor => {
            margin * MARGIN_WEIGHT + awareness * AWARENESS_WEIGHT_TWO_FACTOR
        }
    };

    let modifier = retailer.modifier();
    // Sub-scores in [0,1] and modifier in (0,1] keep this in [0,100].
    let value = round_one_decimal(blend * modifier * 100.0);

    ProbabilityResult {
        value,
        scores: ScoreSet {
            margin,
            awareness,
            promo,
        },
        retailer_modifier: modifier,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pricing_with_net_margin(net_margin_pct: f64) -> PricingResult {
        PricingResult {
            intermediate_price: 10.0,
            distributor_price: None,
            shelf_price: 16.67,
            net_margin_pct,
        }
    }

    #[test]
    fn margin_score_caps_at_benchmark() {
        assert!((margin_score(&pricing_with_net_margin(25.0)) - 0.5).abs() < 1e-12);
        assert_eq!(margin_score(&pricing_with_net_margin(50.0)), 1.0);
        assert_eq!(margin_score(&pricing_with_net_margin(70.0)), 1.0);
    }

    #[test]
    fn three_factor_all_ones_at_target_is_fifty() {
        let result = synthesize(
            &pricing_with_net_margin(70.0),
            1.0,
            Some(1.0),
            Retailer::Target,
            WeightScheme::ThreeFactor,
        );
        assert_eq!(result.value, 50.0);
        assert_eq!(result.retailer_modifier, 0.5);
    }

    #[test]
    fn two_factor_all_ones_at_sprouts_is_sixty_three() {
        // Weights sum to 0.9, so the ceiling is 0.9 * 0.7 * 100.
        let result = synthesize(
            &pricing_with_net_margin(70.0),
            1.0,
            None,
            Retailer::Sprouts,
            WeightScheme::TwoFactor,
        );
        assert_eq!(result.value, 63.0);
    }

    #[test]
    fn two_factor_ignores_promo_in_blend_but_reports_it() {
        let with_promo = synthesize(
            &pricing_with_net_margin(70.0),
            1.0,
            Some(1.0),
            Retailer::Sprouts,
            WeightScheme::TwoFactor,
        );
        let without = synthesize(
            &pricing_with_net_margin(70.0),
            1.0,
            None,
            Retailer::Sprouts,
            WeightScheme::TwoFactor,
        );
        assert_eq!(with_promo.value, without.value);
        assert_eq!(with_promo.scores.promo, Some(1.0));
        assert_eq!(without.scores.promo, None);
    }

    #[test]
    fn missing_promo_under_three_factor_counts_as_zero_spend() {
        let absent = synthesize(
            &pricing_with_net_margin(70.0),
            1.0,
            None,
            Retailer::Sprouts,
            WeightScheme::ThreeFactor,
        );
        let zero = synthesize(
            &pricing_with_net_margin(70.0),
            1.0,
            Some(0.0),
            Retailer::Sprouts,
            WeightScheme::ThreeFactor,
        );
        assert_eq!(absent.value, zero.value);
    }

    #[test]
    fn probability_stays_in_range_and_one_decimal() {
        for margin in [0.0, 10.0, 33.3, 70.0] {
            for awareness in [0.0, 0.17, 0.5, 1.0] {
                for retailer in Retailer::ALL {
                    let result = synthesize(
                        &pricing_with_net_margin(margin),
                        awareness,
                        Some(0.42),
                        retailer,
                        WeightScheme::ThreeFactor,
                    );
                    assert!((0.0..=100.0).contains(&result.value));
                    let tenths = result.value * 10.0;
                    assert!(
                        (tenths - tenths.round()).abs() < 1e-9,
                        "{} is not one-decimal",
                        result.value
                    );
                }
            }
        }
    }
}
