//! Gap and risk annotation.
//!
//! Pure threshold rules over the sub-scores and final probability. The
//! sub-score warnings are independent and may all fire together; the
//! probability verdict is a single three-way branch that always produces
//! exactly one message. Order is fixed: warnings first, verdict last.

use crate::calibration::{
    LOW_AWARENESS_SCORE, LOW_MARGIN_SCORE, LOW_PROBABILITY_PCT, LOW_PROMO_SCORE,
    MODERATE_PROBABILITY_PCT,
};
use crate::types::{RiskMessage, ScoreSet, Severity};

/// Produce the ordered risk/gap call-outs for one evaluation.
pub fn annotate(scores: &ScoreSet, probability: f64) -> Vec<RiskMessage> {
    let mut messages = Vec::new();

    if scores.margin < LOW_MARGIN_SCORE {
        messages.push(RiskMessage {
            severity: Severity::Warning,
            text: "Brand margin appears too low. Consider raising price or lowering COGs.".into(),
        });
    }

    if scores.awareness < LOW_AWARENESS_SCORE {
        messages.push(RiskMessage {
            severity: Severity::Warning,
            text: "Brand awareness is low. Improve unaided/top-of-mind brand recognition.".into(),
        });
    }

    // Promo warning only applies when promotional spend is tracked at all.
    if let Some(promo) = scores.promo {
        if promo < LOW_PROMO_SCORE {
            messages.push(RiskMessage {
                severity: Severity::Warning,
                text: "Promotional spend is limited. Increase digital or offline budget.".into(),
            });
        }
    }

    let verdict = if probability < LOW_PROBABILITY_PCT {
        RiskMessage {
            severity: Severity::Error,
            text: "Success likelihood is low. Reassess positioning, pricing, or marketing strategy."
                .into(),
        }
    } else if probability < MODERATE_PROBABILITY_PCT {
        RiskMessage {
            severity: Severity::Info,
            text: "Moderate chance. May require strong retail or trade support.".into(),
        }
    } else {
        RiskMessage {
            severity: Severity::Success,
            text: "High chance of success given current assumptions!".into(),
        }
    };
    messages.push(verdict);

    messages
}
