//! Static lookup tables for the Israeli tech salary heuristic.
//!
//! Figures are monthly base salaries in ILS, approximated from Israeli tech
//! market standards. Tables are ordered slices: company matching depends on
//! declaration order, so entries must not be reshuffled casually.

/// Currency symbol attached to every estimate.
pub const CURRENCY_SYMBOL: &str = "₪";

/// Rounding granularity for heuristic estimates.
pub const ROUNDING_STEP: f64 = 1000.0;

/// Monthly base salary bounds for one role level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

/// Level used when a posting has no level or an unrecognized one.
pub const DEFAULT_LEVEL: &str = "Engineer";

pub const LEVEL_SALARY_RANGES: &[(&str, SalaryRange)] = &[
    ("Intern", SalaryRange { min: 5_000.0, max: 10_000.0 }),
    ("Engineer", SalaryRange { min: 18_000.0, max: 35_000.0 }),
    ("Manager", SalaryRange { min: 35_000.0, max: 55_000.0 }),
    ("Executive", SalaryRange { min: 50_000.0, max: 90_000.0 }),
];

pub const CATEGORY_MULTIPLIERS: &[(&str, f64)] = &[
    ("software", 1.15),
    ("frontend", 1.1),
    ("data-science", 1.2),
    ("devops", 1.15),
    ("security", 1.2),
    ("product", 1.1),
    ("design", 0.95),
    ("qa", 0.9),
    ("hr", 0.85),
    ("marketing", 0.9),
    ("sales", 0.95),
    ("finance", 1.0),
    ("legal", 1.0),
    ("support", 0.8),
    ("admin", 0.75),
    ("business", 1.0),
    ("hardware", 1.1),
    ("procurement-operations", 0.85),
    ("project-management", 0.95),
];

/// xs: 1-10 employees, s: 11-50, m: 51-200, l: 201-1000, xl: 1001+.
pub const SIZE_MULTIPLIERS: &[(&str, f64)] = &[
    ("xs", 0.85),
    ("s", 0.9),
    ("m", 1.0),
    ("l", 1.1),
    ("xl", 1.15),
];

/// Company reputation multipliers, keyed by lower-cased name.
///
/// Substring matching walks this list top to bottom and stops at the first
/// hit, so an entry's position is part of its meaning.
pub const COMPANY_MULTIPLIERS: &[(&str, f64)] = &[
    // Top tier: FAANG and big tech
    ("google", 1.55),
    ("meta", 1.5),
    ("facebook", 1.5),
    ("apple", 1.5),
    ("amazon", 1.4),
    ("microsoft", 1.45),
    ("nvidia", 1.55),
    ("netflix", 1.5),
    ("openai", 1.6),
    ("anthropic", 1.55),
    // High tier: well-funded Israeli and international tech
    ("wiz", 1.45),
    ("monday.com", 1.35),
    ("monday", 1.35),
    ("snyk", 1.35),
    ("datadog", 1.4),
    ("cloudflare", 1.35),
    ("stripe", 1.45),
    ("salesforce", 1.3),
    ("adobe", 1.3),
    ("intel", 1.25),
    ("oracle", 1.2),
    ("ibm", 1.15),
    ("cisco", 1.2),
    ("vmware", 1.2),
    ("broadcom", 1.25),
    ("qualcomm", 1.3),
    ("mobileye", 1.35),
    ("tower semiconductor", 1.2),
    ("tower", 1.2),
    ("mellanox", 1.3),
    ("fiverr", 1.25),
    ("wix", 1.25),
    ("similarweb", 1.2),
    ("ironource", 1.25),
    ("unity", 1.25),
    ("playtika", 1.2),
    ("pagaya", 1.3),
    ("payoneer", 1.2),
    ("check point", 1.25),
    ("checkpoint", 1.25),
    ("palo alto networks", 1.35),
    ("palo alto", 1.35),
    ("cyberark", 1.25),
    ("varonis", 1.2),
    ("sentinelone", 1.3),
    ("crowdstrike", 1.35),
    ("zscaler", 1.3),
    ("orca security", 1.35),
    ("orca", 1.35),
    ("cato networks", 1.25),
    ("cato", 1.25),
    ("armis", 1.3),
    ("axonius", 1.3),
    ("rapyd", 1.25),
    ("tipalti", 1.2),
    ("jfrog", 1.25),
    ("appsflyer", 1.2),
    ("gong", 1.35),
    ("outbrain", 1.15),
    ("taboola", 1.15),
    ("walkme", 1.2),
    ("lightricks", 1.25),
    ("hibob", 1.2),
    ("bob", 1.2),
    ("papaya global", 1.25),
    ("papaya", 1.25),
    ("deel", 1.3),
    ("rippling", 1.35),
    ("riskified", 1.2),
    ("forter", 1.2),
    ("yotpo", 1.15),
    ("kaltura", 1.1),
    ("liveperson", 1.1),
    ("nice", 1.2),
    ("amdocs", 1.15),
    ("elbit", 1.15),
    ("elbit systems", 1.15),
    ("rafael", 1.2),
    ("iai", 1.15),
    ("israel aerospace", 1.15),
    // Mid tier: established companies
    ("infinidat", 1.15),
    ("cellebrite", 1.15),
    ("audiocodes", 1.1),
    ("radware", 1.1),
    ("allot", 1.05),
    ("gilat", 1.05),
    ("sapiens", 1.1),
    ("magic software", 1.05),
    ("matrix", 1.0),
    ("ness", 1.0),
    // Consulting and services
    ("accenture", 1.0),
    ("deloitte", 0.95),
    ("kpmg", 0.95),
    ("pwc", 0.95),
    ("ernst & young", 0.95),
    ("ey", 0.95),
    ("mckinsey", 1.15),
    ("bcg", 1.1),
    ("bain", 1.1),
];

/// Exact-key lookup in one of the ordered tables above.
pub fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

/// Base range for a level, falling back to the Engineer band.
pub fn level_range(level: Option<&str>) -> SalaryRange {
    level
        .and_then(|l| lookup(LEVEL_SALARY_RANGES, l))
        .or_else(|| lookup(LEVEL_SALARY_RANGES, DEFAULT_LEVEL))
        .unwrap_or(SalaryRange {
            min: 18_000.0,
            max: 35_000.0,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_range_is_ordered() {
        for (level, range) in LEVEL_SALARY_RANGES {
            assert!(range.min > 0.0, "{level} min must be positive");
            assert!(range.min <= range.max, "{level} range is inverted");
        }
    }

    #[test]
    fn test_unknown_level_falls_back_to_engineer() {
        let engineer = level_range(Some("Engineer"));
        assert_eq!(level_range(Some("Wizard")), engineer);
        assert_eq!(level_range(None), engineer);
        assert_eq!(engineer.min, 18_000.0);
        assert_eq!(engineer.max, 35_000.0);
    }

    #[test]
    fn test_level_lookup_is_case_sensitive() {
        assert_eq!(level_range(Some("manager")), level_range(Some("Engineer")));
        assert_eq!(level_range(Some("Manager")).min, 35_000.0);
    }

    #[test]
    fn test_company_keys_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for (name, _) in COMPANY_MULTIPLIERS {
            assert_eq!(*name, name.to_lowercase());
            assert!(seen.insert(*name), "duplicate company key {name}");
        }
    }

    #[test]
    fn test_multiplier_bounds() {
        assert!(CATEGORY_MULTIPLIERS
            .iter()
            .all(|(_, m)| (0.75..=1.2).contains(m)));
        assert!(SIZE_MULTIPLIERS
            .iter()
            .all(|(_, m)| (0.85..=1.15).contains(m)));
        assert!(COMPANY_MULTIPLIERS
            .iter()
            .all(|(_, m)| (0.75..=1.6).contains(m)));
    }
}
