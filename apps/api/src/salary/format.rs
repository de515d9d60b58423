//! Human-readable salary strings and external salary links.

use reqwest::Url;

use crate::models::job::JobDescriptor;
use crate::salary::estimator::SalaryEstimate;

const GLASSDOOR_SEARCH_URL: &str = "https://www.glassdoor.com/Search/results.htm";
/// Glassdoor location id for Israel.
const GLASSDOOR_ISRAEL_LOCATION_ID: &str = "120";

fn format_thousands(amount: u64) -> String {
    if amount >= 1_000 {
        format!("{}K", (amount as f64 / 1_000.0).round())
    } else {
        amount.to_string()
    }
}

fn format_millions(amount: u64) -> String {
    if amount >= 1_000_000 {
        // Halves round up: 2_250_000 is 2.3M.
        let millions = (amount as f64 / 100_000.0).round() / 10.0;
        format!("{millions:.1}M")
    } else {
        format_thousands(amount)
    }
}

/// `₪46K - ₪89K/mo`
pub fn format_salary_range(estimate: &SalaryEstimate) -> String {
    format!(
        "{c}{} - {c}{}/mo",
        format_thousands(estimate.min_monthly),
        format_thousands(estimate.max_monthly),
        c = estimate.currency
    )
}

/// `₪552K - ₪1.1M/yr`
pub fn format_annual_salary(estimate: &SalaryEstimate) -> String {
    format!(
        "{c}{} - {c}{}/yr",
        format_millions(estimate.min_annual),
        format_millions(estimate.max_annual),
        c = estimate.currency
    )
}

/// Glassdoor Israel search for the posting's title and company.
pub fn glassdoor_search_url(job: &JobDescriptor) -> String {
    let keyword = format!("{} {}", job.title, job.company);
    Url::parse_with_params(
        GLASSDOOR_SEARCH_URL,
        &[
            ("keyword", keyword.as_str()),
            ("locT", "N"),
            ("locId", GLASSDOOR_ISRAEL_LOCATION_ID),
        ],
    )
    .map(String::from)
    .unwrap_or_else(|_| GLASSDOOR_SEARCH_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::salary::estimator::Confidence;

    #[test]
    fn test_monthly_range_in_thousands() {
        let estimate = SalaryEstimate::from_monthly(46_000, 89_000, Confidence::High);
        assert_eq!(format_salary_range(&estimate), "₪46K - ₪89K/mo");
    }

    #[test]
    fn test_annual_range_switches_to_millions() {
        let estimate = SalaryEstimate::from_monthly(46_000, 89_000, Confidence::High);
        assert_eq!(format_annual_salary(&estimate), "₪552K - ₪1.1M/yr");
    }

    #[test]
    fn test_small_amounts_are_printed_verbatim() {
        let estimate = SalaryEstimate::from_monthly(0, 500, Confidence::Low);
        assert_eq!(format_salary_range(&estimate), "₪0 - ₪500/mo");
    }

    #[test]
    fn test_thousands_round_to_nearest() {
        assert_eq!(format_thousands(18_500), "19K");
        assert_eq!(format_thousands(18_499), "18K");
        assert_eq!(format_millions(2_400_000), "2.4M");
    }

    #[test]
    fn test_millions_round_halves_up() {
        assert_eq!(format_millions(2_250_000), "2.3M");
        assert_eq!(format_millions(1_050_000), "1.1M");
        assert_eq!(format_millions(1_000_000), "1.0M");

        let estimate = SalaryEstimate::from_monthly(150_000, 187_500, Confidence::High);
        assert_eq!(format_annual_salary(&estimate), "₪1.8M - ₪2.3M/yr");
    }

    #[test]
    fn test_glassdoor_url_encodes_query() {
        let job = JobDescriptor {
            title: "Data Engineer".to_string(),
            company: "R&D Labs".to_string(),
            ..Default::default()
        };
        let url = glassdoor_search_url(&job);
        assert!(url.starts_with("https://www.glassdoor.com/Search/results.htm?keyword="));
        assert!(url.contains("R%26D"));
        assert!(url.ends_with("&locT=N&locId=120"));
    }
}
