//! JSON scenario file loader.
//!
//! A scenario file is one evaluation's worth of user inputs. Expected shape:
//! ```json
//! {
//!   "pricing": { "cogs": 5.0, "brand_margin_goal_pct": 50.0,
//!                "include_distributor": false, "retailer_margin_pct": 40.0 },
//!   "benchmarks": [ { "name": "Olipop", "followers": 100000, "engagement_pct": 2.0 } ],
//!   "awareness": { "unaided_awareness_pct": 5.0, "top_of_mind_pct": 2.0 },
//!   "promo": { "digital_spend": 5000, "offline_spend": 2000 },
//!   "retailer": "Sprouts",
//!   "scheme": "three_factor"
//! }
//! ```
//! `benchmarks`, `awareness`, `promo`, `retailer`, and `scheme` are optional;
//! retailer falls back to Sprouts, while the scheme must come from the file
//! or the `--scheme` flag — it is never picked silently.

use std::io::Read;

use serde::Deserialize;

use gauge_model::{
    AwarenessInputs, BenchmarkBrand, EvaluationInputs, PricingInputs, PromoInputs, Retailer,
    WeightScheme,
};

/// Raw scenario document, before CLI overrides are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioFile {
    pub pricing: PricingInputs,
    #[serde(default)]
    pub benchmarks: Vec<BenchmarkBrand>,
    #[serde(default)]
    pub awareness: Option<AwarenessInputs>,
    #[serde(default)]
    pub promo: Option<PromoInputs>,
    #[serde(default)]
    pub retailer: Option<Retailer>,
    #[serde(default)]
    pub scheme: Option<WeightScheme>,
}

impl ScenarioFile {
    /// Resolve the scenario plus CLI overrides into evaluation inputs.
    pub fn into_inputs(
        self,
        retailer_override: Option<Retailer>,
        scheme_override: Option<WeightScheme>,
    ) -> Result<EvaluationInputs, String> {
        let retailer = retailer_override
            .or(self.retailer)
            .unwrap_or(Retailer::Sprouts);

        let scheme = scheme_override.or(self.scheme).ok_or_else(|| {
            "no weighting scheme: set \"scheme\" in the scenario file or pass --scheme three|two"
                .to_string()
        })?;

        Ok(EvaluationInputs {
            pricing: self.pricing,
            benchmarks: self.benchmarks,
            awareness: self.awareness,
            promo: self.promo,
            retailer,
            scheme,
        })
    }
}

/// Load a scenario from a JSON reader.
pub fn load_scenario<R: Read>(reader: R) -> Result<ScenarioFile, String> {
    serde_json::from_reader(reader).map_err(|e| format!("Scenario parse error: {}", e))
}

/// Load a scenario from a JSON file path.
pub fn load_scenario_file(path: &str) -> Result<ScenarioFile, String> {
    let file =
        std::fs::File::open(path).map_err(|e| format!("Failed to open '{}': {}", path, e))?;
    load_scenario(file)
}

/// Parse a `--retailer` flag value.
pub fn parse_retailer(value: &str) -> Result<Retailer, String> {
    match value.to_lowercase().as_str() {
        "sprouts" => Ok(Retailer::Sprouts),
        "target" => Ok(Retailer::Target),
        "ulta" => Ok(Retailer::Ulta),
        other => Err(format!(
            "unknown retailer '{}' (expected sprouts, target, or ulta)",
            other
        )),
    }
}

/// Parse a `--scheme` flag value.
pub fn parse_scheme(value: &str) -> Result<WeightScheme, String> {
    match value.to_lowercase().as_str() {
        "three" | "three_factor" | "three-factor" => Ok(WeightScheme::ThreeFactor),
        "two" | "two_factor" | "two-factor" => Ok(WeightScheme::TwoFactor),
        other => Err(format!(
            "unknown scheme '{}' (expected three or two)",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"{
        "pricing": {
            "cogs": 5.0,
            "brand_margin_goal_pct": 50.0,
            "include_distributor": false,
            "retailer_margin_pct": 40.0
        },
        "benchmarks": [
            { "name": "Olipop", "followers": 100000, "engagement_pct": 2.0 },
            { "name": "", "followers": 0, "engagement_pct": 0.0 }
        ],
        "promo": { "digital_spend": 5000, "offline_spend": 2000 },
        "retailer": "Target",
        "scheme": "three_factor"
    }"#;

    #[test]
    fn load_sample_scenario() {
        let scenario = load_scenario(SAMPLE_JSON.as_bytes()).unwrap();
        assert_eq!(scenario.benchmarks.len(), 2);
        assert!(scenario.awareness.is_none());
        assert_eq!(scenario.retailer, Some(Retailer::Target));
        assert_eq!(scenario.scheme, Some(WeightScheme::ThreeFactor));
    }

    #[test]
    fn minimal_scenario_needs_only_pricing() {
        let json = r#"{
            "pricing": {
                "cogs": 5.0,
                "brand_margin_goal_pct": 50.0,
                "include_distributor": false,
                "retailer_margin_pct": 40.0
            }
        }"#;
        let scenario = load_scenario(json.as_bytes()).unwrap();
        assert!(scenario.benchmarks.is_empty());
        assert!(scenario.retailer.is_none());
    }

    #[test]
    fn overrides_beat_file_values() {
        let scenario = load_scenario(SAMPLE_JSON.as_bytes()).unwrap();
        let inputs = scenario
            .into_inputs(Some(Retailer::Ulta), Some(WeightScheme::TwoFactor))
            .unwrap();
        assert_eq!(inputs.retailer, Retailer::Ulta);
        assert_eq!(inputs.scheme, WeightScheme::TwoFactor);
    }

    #[test]
    fn missing_scheme_is_an_explicit_error() {
        let json = r#"{
            "pricing": {
                "cogs": 5.0,
                "brand_margin_goal_pct": 50.0,
                "include_distributor": false,
                "retailer_margin_pct": 40.0
            }
        }"#;
        let scenario = load_scenario(json.as_bytes()).unwrap();
        let err = scenario.into_inputs(None, None).unwrap_err();
        assert!(err.contains("--scheme"));
    }

    #[test]
    fn retailer_defaults_to_sprouts() {
        let json = r#"{
            "pricing": {
                "cogs": 5.0,
                "brand_margin_goal_pct": 50.0,
                "include_distributor": false,
                "retailer_margin_pct": 40.0
            },
            "scheme": "two_factor"
        }"#;
        let scenario = load_scenario(json.as_bytes()).unwrap();
        let inputs = scenario.into_inputs(None, None).unwrap();
        assert_eq!(inputs.retailer, Retailer::Sprouts);
    }

    #[test]
    fn flag_parsing_accepts_spelling_variants() {
        assert_eq!(parse_retailer("ULTA").unwrap(), Retailer::Ulta);
        assert_eq!(parse_scheme("three-factor").unwrap(), WeightScheme::ThreeFactor);
        assert_eq!(parse_scheme("two").unwrap(), WeightScheme::TwoFactor);
        assert!(parse_retailer("wholefoods").is_err());
        assert!(parse_scheme("four").is_err());
    }
}
