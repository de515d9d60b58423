//! Local salary heuristic: base range by level, scaled by category, title,
//! company size and company reputation multipliers.
//!
//! Pure and total. Missing or unrecognized inputs fall back to the Engineer
//! band and neutral multipliers; nothing here performs I/O.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::job::JobDescriptor;
use crate::salary::company::{company_multiplier, NEUTRAL_COMPANY_MULTIPLIER};
use crate::salary::tables::{
    level_range, lookup, CATEGORY_MULTIPLIERS, CURRENCY_SYMBOL, ROUNDING_STEP, SIZE_MULTIPLIERS,
};
use crate::salary::title::{matching_rule, NEUTRAL_TITLE_MULTIPLIER};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Monthly and annual salary bounds for one posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryEstimate {
    pub min_monthly: u64,
    pub max_monthly: u64,
    pub min_annual: u64,
    pub max_annual: u64,
    pub currency: String,
    pub confidence: Confidence,
}

impl SalaryEstimate {
    pub fn from_monthly(min_monthly: u64, max_monthly: u64, confidence: Confidence) -> Self {
        Self {
            min_monthly,
            max_monthly,
            min_annual: min_monthly * 12,
            max_annual: max_monthly * 12,
            currency: CURRENCY_SYMBOL.to_string(),
            confidence,
        }
    }
}

/// The individual factors behind an estimate, exposed for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MultiplierBreakdown {
    pub category: f64,
    pub title: f64,
    /// Tag of the title rule that fired, if any.
    pub title_rule: Option<&'static str>,
    pub size: f64,
    pub company: f64,
}

impl MultiplierBreakdown {
    pub fn for_job(job: &JobDescriptor) -> Self {
        let title_rule = matching_rule(&job.title);
        Self {
            category: job
                .job_category()
                .and_then(|c| lookup(CATEGORY_MULTIPLIERS, c))
                .unwrap_or(1.0),
            title: title_rule
                .map(|rule| rule.multiplier)
                .unwrap_or(NEUTRAL_TITLE_MULTIPLIER),
            title_rule: title_rule.map(|rule| rule.tag),
            size: job
                .size()
                .and_then(|s| lookup(SIZE_MULTIPLIERS, s))
                .unwrap_or(1.0),
            company: company_multiplier(&job.company),
        }
    }

    pub fn total(&self) -> f64 {
        self.category * self.title * self.size * self.company
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Confidence rules
// ────────────────────────────────────────────────────────────────────────────

/// What the confidence rules get to look at.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceSignals {
    pub has_level: bool,
    pub has_job_category: bool,
    pub has_size: bool,
    pub company_multiplier: f64,
}

impl ConfidenceSignals {
    fn for_job(job: &JobDescriptor, company_multiplier: f64) -> Self {
        Self {
            has_level: job.level().is_some(),
            has_job_category: job.job_category().is_some(),
            has_size: job.size().is_some(),
            company_multiplier,
        }
    }
}

/// A tagged condition: when `applies` holds for the signals and the
/// confidence reached so far, confidence becomes `outcome`.
pub struct ConfidenceRule {
    pub tag: &'static str,
    pub applies: fn(&ConfidenceSignals, Confidence) -> bool,
    pub outcome: Confidence,
}

pub const STARTING_CONFIDENCE: Confidence = Confidence::Medium;

/// Evaluated in order, every matching rule overrides the previous result.
/// The company boost only fires from `Medium`, so a `Low` caused by missing
/// fields is never raised.
pub const CONFIDENCE_RULES: &[ConfidenceRule] = &[
    ConfidenceRule {
        tag: "complete_fields",
        applies: |s, _| s.has_level && s.has_job_category && s.has_size,
        outcome: Confidence::High,
    },
    ConfidenceRule {
        tag: "missing_level_and_category",
        applies: |s, _| !s.has_level && !s.has_job_category,
        outcome: Confidence::Low,
    },
    ConfidenceRule {
        tag: "known_company",
        applies: |s, current| {
            current == Confidence::Medium && s.company_multiplier != NEUTRAL_COMPANY_MULTIPLIER
        },
        outcome: Confidence::High,
    },
];

pub fn score_confidence(signals: &ConfidenceSignals) -> Confidence {
    CONFIDENCE_RULES
        .iter()
        .fold(STARTING_CONFIDENCE, |current, rule| {
            if (rule.applies)(signals, current) {
                trace!("confidence rule '{}' -> {:?}", rule.tag, rule.outcome);
                rule.outcome
            } else {
                current
            }
        })
}

// ────────────────────────────────────────────────────────────────────────────
// Estimation
// ────────────────────────────────────────────────────────────────────────────

/// Rounds to the nearest thousand, halves rounding up.
fn round_to_step(value: f64) -> u64 {
    ((value / ROUNDING_STEP).round() * ROUNDING_STEP).max(0.0) as u64
}

/// Computes the heuristic salary estimate for a job posting.
pub fn estimate_salary(job: &JobDescriptor) -> SalaryEstimate {
    let base = level_range(job.level());
    let multipliers = MultiplierBreakdown::for_job(job);
    let total = multipliers.total();

    let min_monthly = round_to_step(base.min * total);
    let max_monthly = round_to_step(base.max * total);

    let confidence = score_confidence(&ConfidenceSignals::for_job(job, multipliers.company));

    SalaryEstimate::from_monthly(min_monthly, max_monthly, confidence)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
