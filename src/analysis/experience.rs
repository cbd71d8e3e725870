//! Experience-year estimation from date ranges and explicit statements

use log::debug;
use regex::Regex;

const MAX_EXPERIENCE_YEARS: i64 = 25;
const FALLBACK_YEARS_PER_ROLE: usize = 2;
const FALLBACK_CAP: usize = 10;

/// Estimates total years of experience from text. All pattern families are
/// attempted and the maximum years value found wins; values are never summed.
pub struct ExperienceEstimator {
    closed_range: Regex,
    open_range: Regex,
    stated_years: Vec<Regex>,
    role_titles: Regex,
    reference_year: i64,
}

impl ExperienceEstimator {
    /// `reference_year` resolves open-ended ranges such as "2015 - presente".
    pub fn new(reference_year: i32) -> Self {
        Self {
            closed_range: Regex::new(r"(\d{4})\s*[-–]\s*(\d{4})").expect("invalid range pattern"),
            open_range: Regex::new(r"(\d{4})\s*[-–]\s*(?:presente|atual)")
                .expect("invalid open range pattern"),
            stated_years: vec![
                Regex::new(r"(\d{1,2})\s*anos?\s*de\s*experiência").expect("invalid years pattern"),
                Regex::new(r"experiência\s*de\s*(\d{1,2})\s*anos?").expect("invalid years pattern"),
            ],
            role_titles: Regex::new(r"desenvolvedor|analista|gerente|coordenador")
                .expect("invalid role title pattern"),
            reference_year: i64::from(reference_year),
        }
    }

    pub fn estimate(&self, text: &str) -> u8 {
        let lower = text.to_lowercase();
        let mut best: i64 = 0;
        let mut any_match = false;

        for cap in self.closed_range.captures_iter(&lower) {
            any_match = true;
            let start: i64 = cap[1].parse().unwrap_or(0);
            let end: i64 = cap[2].parse().unwrap_or(self.reference_year);
            best = best.max((end - start).max(0));
        }

        for cap in self.open_range.captures_iter(&lower) {
            any_match = true;
            let start: i64 = cap[1].parse().unwrap_or(self.reference_year);
            best = best.max((self.reference_year - start).max(0));
        }

        for pattern in &self.stated_years {
            for cap in pattern.captures_iter(&lower) {
                any_match = true;
                let years: i64 = cap[1].parse().unwrap_or(0);
                best = best.max(years);
            }
        }

        if !any_match {
            let role_count = self.role_titles.find_iter(&lower).count();
            best = (role_count * FALLBACK_YEARS_PER_ROLE).min(FALLBACK_CAP) as i64;
            debug!("No date patterns found, estimated {} years from {} role mentions", best, role_count);
        }

        best.clamp(0, MAX_EXPERIENCE_YEARS) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> ExperienceEstimator {
        ExperienceEstimator::new(2024)
    }

    #[test]
    fn test_closed_range() {
        assert_eq!(estimator().estimate("Empresa X, 2018 - 2022"), 4);
    }

    #[test]
    fn test_en_dash_separator() {
        assert_eq!(estimator().estimate("2016 – 2021, analista de sistemas"), 5);
    }

    #[test]
    fn test_open_range_uses_reference_year() {
        assert_eq!(estimator().estimate("Desenvolvedor, 2015 - presente"), 9);
        assert_eq!(estimator().estimate("2020 - atual"), 4);
    }

    #[test]
    fn test_stated_years() {
        assert_eq!(estimator().estimate("Tenho 7 anos de experiência em TI"), 7);
        assert_eq!(estimator().estimate("experiência de 12 anos na área"), 12);
    }

    #[test]
    fn test_maximum_wins_over_multiple_matches() {
        let text = "2019 - 2021 na Empresa A. 2010 - 2018 na Empresa B. 3 anos de experiência.";
        assert_eq!(estimator().estimate(text), 8);
    }

    #[test]
    fn test_inverted_range_floors_at_zero() {
        assert_eq!(estimator().estimate("2022 - 2018"), 0);
    }

    #[test]
    fn test_clamped_at_25() {
        assert_eq!(estimator().estimate("1980 - 2024"), 25);
    }

    #[test]
    fn test_fallback_counts_role_titles() {
        let text = "Desenvolvedor na empresa A. Analista na empresa B. Gerente na empresa C.";
        assert_eq!(estimator().estimate(text), 6);
    }

    #[test]
    fn test_fallback_capped_at_10() {
        let text = "desenvolvedor ".repeat(20);
        assert_eq!(estimator().estimate(&text), 10);
    }

    #[test]
    fn test_no_signal_yields_zero() {
        assert_eq!(estimator().estimate("Texto sem nenhuma pista"), 0);
    }
}
