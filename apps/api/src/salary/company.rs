//! Company-name resolution against the reputation table.

use serde::{Deserialize, Serialize};

use crate::salary::tables::COMPANY_MULTIPLIERS;

pub const NEUTRAL_COMPANY_MULTIPLIER: f64 = 1.0;

/// Coarse pay tier derived from a company multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyTier {
    Top,
    High,
    Mid,
    Standard,
    Below,
}

/// Resolves a company name to its table entry.
///
/// Exact match first, then the first entry (in declaration order) where the
/// query contains the key or the key contains the query. Blank names never
/// match.
pub fn resolve_company(company_name: &str) -> Option<(&'static str, f64)> {
    let company_lower = company_name.trim().to_lowercase();
    if company_lower.is_empty() {
        return None;
    }

    let exact = COMPANY_MULTIPLIERS
        .iter()
        .find(|(known, _)| *known == company_lower);
    let partial = || {
        COMPANY_MULTIPLIERS.iter().find(|(known, _)| {
            company_lower.contains(known) || known.contains(company_lower.as_str())
        })
    };

    exact.or_else(partial).copied()
}

pub fn company_multiplier(company_name: &str) -> f64 {
    resolve_company(company_name)
        .map(|(_, multiplier)| multiplier)
        .unwrap_or(NEUTRAL_COMPANY_MULTIPLIER)
}

/// True when the company resolves to a non-neutral multiplier.
///
/// Known companies priced at exactly 1.0 carry no signal and report false.
pub fn has_company_data(company_name: &str) -> bool {
    company_multiplier(company_name) != NEUTRAL_COMPANY_MULTIPLIER
}

pub fn company_tier(company_name: &str) -> CompanyTier {
    tier_for_multiplier(company_multiplier(company_name))
}

pub fn tier_for_multiplier(multiplier: f64) -> CompanyTier {
    if multiplier >= 1.4 {
        CompanyTier::Top
    } else if multiplier >= 1.2 {
        CompanyTier::High
    } else if multiplier >= 1.05 {
        CompanyTier::Mid
    } else if multiplier >= 0.95 {
        CompanyTier::Standard
    } else {
        CompanyTier::Below
    }
}
