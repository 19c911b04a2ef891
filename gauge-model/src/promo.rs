//! Promotional spend scoring (extended variant).

use crate::calibration::PROMO_SPEND_CEILING;
use crate::types::PromoInputs;

/// Linear ramp over combined monthly spend, capped at the calibration
/// ceiling: `min((digital + offline) / 20_000, 1.0)`.
pub fn promo_score(inputs: &PromoInputs) -> f64 {
    ((inputs.digital_spend + inputs.offline_spend) / PROMO_SPEND_CEILING).min(1.0)
}
