//! Shelf-price derivation through the distribution chain.
//!
//! Each party's margin is margin-on-price: a fraction of the price they
//! sell at, so every step divides the previous price by `1 - margin/100`.
//! This compounds forward (brand → distributor → retailer) and must not be
//! confused with markup-on-cost.

use crate::error::{GaugeError, GaugeResult};
use crate::types::{PricingInputs, PricingResult};

/// Derive the full price chain and net margin from cost and margin inputs.
///
/// Fails when cogs is non-positive or any applied margin reaches 100%,
/// where the margin-on-price division loses its price basis. The
/// distributor margin is not validated when the distributor is excluded,
/// matching the form behavior where that field is hidden.
pub fn compute_pricing(inputs: &PricingInputs) -> GaugeResult<PricingResult> {
    if inputs.cogs <= 0.0 {
        return Err(GaugeError::NonPositiveCogs(inputs.cogs));
    }

    let intermediate_price = mark_up(inputs.cogs, inputs.brand_margin_goal_pct, "brand margin")?;

    let distributor_price = if inputs.include_distributor {
        Some(mark_up(
            intermediate_price,
            inputs.distributor_margin_pct,
            "distributor margin",
        )?)
    } else {
        None
    };

    let shelf_price = mark_up(
        distributor_price.unwrap_or(intermediate_price),
        inputs.retailer_margin_pct,
        "retailer margin",
    )?;

    let net_margin_pct = (shelf_price - inputs.cogs) / shelf_price * 100.0;

    Ok(PricingResult {
        intermediate_price,
        distributor_price,
        shelf_price,
        net_margin_pct,
    })
}

/// Apply one margin-on-price step: `price / (1 - margin/100)`.
fn mark_up(price: f64, margin_pct: f64, field: &'static str) -> GaugeResult<f64> {
    if margin_pct >= 100.0 {
        return Err(GaugeError::MarginOutOfRange {
            field,
            value: margin_pct,
        });
    }
    Ok(price / (1.0 - margin_pct / 100.0))
}
