//! Seniority multiplier derived from keywords in a job title.

/// One entry in the title cascade: if the lower-cased title contains any
/// keyword, the multiplier applies and evaluation stops.
#[derive(Debug, Clone, Copy)]
pub struct TitleRule {
    pub tag: &'static str,
    pub keywords: &'static [&'static str],
    pub multiplier: f64,
}

/// Evaluated in order; the first matching rule wins even when a later rule
/// would also match ("Senior Director" resolves to `director`).
pub const TITLE_RULES: &[TitleRule] = &[
    TitleRule {
        tag: "executive",
        keywords: &["head of", "vp"],
        multiplier: 1.8,
    },
    TitleRule {
        tag: "director",
        keywords: &["director"],
        multiplier: 1.6,
    },
    TitleRule {
        tag: "staff",
        keywords: &["staff", "principal"],
        multiplier: 1.5,
    },
    TitleRule {
        tag: "lead",
        keywords: &["lead", "tech lead"],
        multiplier: 1.4,
    },
    TitleRule {
        tag: "senior",
        keywords: &["senior", "sr."],
        multiplier: 1.3,
    },
    TitleRule {
        tag: "junior",
        keywords: &["junior", "jr."],
        multiplier: 0.75,
    },
];

pub const NEUTRAL_TITLE_MULTIPLIER: f64 = 1.0;

/// Returns the first rule whose keywords appear in `title`.
pub fn matching_rule(title: &str) -> Option<&'static TitleRule> {
    let title_lower = title.to_lowercase();
    TITLE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| title_lower.contains(kw)))
}
