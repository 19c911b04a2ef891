use std::env;
use std::process;

use chrono::Utc;
use serde::Serialize;

use gauge_model::awareness::virality_score;
use gauge_model::{evaluate, Evaluation, EvaluationInputs, Retailer, Severity, WeightScheme};

mod scenario;

use scenario::{load_scenario_file, parse_retailer, parse_scheme};

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ReportJson<'a> {
    generated_at: String,
    scenario_path: &'a str,
    retailer: String,
    scheme: &'a str,
    #[serde(flatten)]
    evaluation: &'a Evaluation,
}

fn scheme_str(scheme: WeightScheme) -> &'static str {
    match scheme {
        WeightScheme::ThreeFactor => "three_factor",
        WeightScheme::TwoFactor => "two_factor",
    }
}

// ---------------------------------------------------------------------------
// Human-readable output
// ---------------------------------------------------------------------------

/// Severity tag for terminal output. The color mapping itself (amber, red,
/// blue, green) belongs to richer front ends.
fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => "[WARN]",
        Severity::Error => "[FAIL]",
        Severity::Info => "[INFO]",
        Severity::Success => "[ OK ]",
    }
}

fn print_human(inputs: &EvaluationInputs, evaluation: &Evaluation) {
    println!();
    println!("  ==============================================================");
    println!("           BRAND LAUNCH GAUGE - CPG Success Probability");
    println!("  ==============================================================");
    println!();

    println!("  Pricing chain (margin-on-price)");
    println!("    COGs                    ${:>8.2}", inputs.pricing.cogs);
    println!(
        "    Brand price             ${:>8.2}  ({:.0}% margin goal)",
        evaluation.pricing.intermediate_price, inputs.pricing.brand_margin_goal_pct
    );
    if let Some(distributor) = evaluation.pricing.distributor_price {
        println!(
            "    Distributor price       ${:>8.2}  ({:.0}% margin)",
            distributor, inputs.pricing.distributor_margin_pct
        );
    }
    println!(
        "    Shelf price estimate    ${:>8.2}  ({:.0}% retailer margin)",
        evaluation.pricing.shelf_price, inputs.pricing.retailer_margin_pct
    );
    println!(
        "    Brand net margin        {:>8.1}%",
        evaluation.pricing.net_margin_pct
    );
    println!();

    let named: Vec<_> = inputs.benchmarks.iter().filter(|b| b.is_named()).collect();
    if named.is_empty() {
        println!(
            "  Benchmarks: none entered; using defaults ({} followers @ {:.1}%)",
            evaluation.virality.total_followers, evaluation.virality.mean_engagement_pct
        );
    } else {
        println!("  Benchmark brands");
        println!("    {:<20} {:>12} {:>12} {:>10}", "Brand", "Followers", "Engage %", "Virality");
        for brand in &named {
            println!(
                "    {:<20} {:>12} {:>12.1} {:>10.4}",
                brand.name,
                brand.followers,
                brand.engagement_pct,
                virality_score(brand.followers, brand.engagement_pct)
            );
        }
    }
    println!(
        "    Aggregate: {} followers @ {:.1}%  ->  virality {:.4} (normalized {:.3})",
        evaluation.virality.total_followers,
        evaluation.virality.mean_engagement_pct,
        evaluation.virality.virality_score,
        evaluation.virality.virality_normalized
    );
    println!();

    let scores = &evaluation.probability.scores;
    println!("  Scores ({} scheme)", scheme_str(inputs.scheme));
    println!("    margin     {:.3}", scores.margin);
    println!("    awareness  {:.3}", scores.awareness);
    match scores.promo {
        Some(promo) => println!("    promo      {:.3}", promo),
        None => println!("    promo      (not tracked)"),
    }
    println!(
        "    retailer   {} (x{:.1})",
        inputs.retailer, evaluation.probability.retailer_modifier
    );
    println!();

    println!(
        "  Likelihood of success: {:.1}%",
        evaluation.probability.value
    );
    println!();

    for message in &evaluation.messages {
        println!("  {} {}", severity_tag(message.severity), message.text);
    }
    println!();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: gauge-server <scenario.json> [--retailer NAME] [--scheme three|two] [--json]");
        eprintln!();
        eprintln!("Options:");
        eprintln!("  --retailer  Target retail account: sprouts, target, or ulta");
        eprintln!("  --scheme    Weighting scheme: three (margin/awareness/promo) or two");
        eprintln!("  --json      Output as JSON instead of formatted text");
        eprintln!();
        eprintln!("Example:");
        eprintln!("  gauge-server fixtures/sample_scenario.json");
        eprintln!("  gauge-server fixtures/sample_scenario.json --retailer target --json");
        process::exit(1);
    }

    let scenario_path = &args[1];

    let mut retailer_override: Option<Retailer> = None;
    let mut scheme_override: Option<WeightScheme> = None;
    let mut json_output = false;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--retailer" => {
                if i + 1 < args.len() {
                    retailer_override = Some(parse_retailer(&args[i + 1]).unwrap_or_else(|e| {
                        eprintln!("Error: {}", e);
                        process::exit(1);
                    }));
                    i += 2;
                } else {
                    eprintln!("Error: --retailer requires a retailer name");
                    process::exit(1);
                }
            }
            "--scheme" => {
                if i + 1 < args.len() {
                    scheme_override = Some(parse_scheme(&args[i + 1]).unwrap_or_else(|e| {
                        eprintln!("Error: {}", e);
                        process::exit(1);
                    }));
                    i += 2;
                } else {
                    eprintln!("Error: --scheme requires three or two");
                    process::exit(1);
                }
            }
            "--json" => {
                json_output = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
    }

    let scenario = match load_scenario_file(scenario_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading scenario: {}", e);
            process::exit(1);
        }
    };

    let inputs = match scenario.into_inputs(retailer_override, scheme_override) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let evaluation = match evaluate(&inputs) {
        Ok(evaluation) => evaluation,
        Err(e) => {
            eprintln!("Error evaluating scenario: {}", e);
            process::exit(1);
        }
    };

    if json_output {
        let report = ReportJson {
            generated_at: Utc::now().to_rfc3339(),
            scenario_path: scenario_path.as_str(),
            retailer: inputs.retailer.to_string(),
            scheme: scheme_str(inputs.scheme),
            evaluation: &evaluation,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_human(&inputs, &evaluation);
    }
}
