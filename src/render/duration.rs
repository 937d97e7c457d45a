// src/render/duration.rs
//! Career duration derived from the profile's start date

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::utils::pluralize;

/// Whole years and remaining months between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceSpan {
    pub years: u32,
    pub months: u32,
}

impl ExperienceSpan {
    /// Day of month is ignored; a start after `now` yields an empty span.
    pub fn between(start: NaiveDate, now: NaiveDate) -> Self {
        let total = (now.year() - start.year()) * 12 + (now.month() as i32 - start.month() as i32);
        Self::from_total_months(total.max(0) as u32)
    }

    pub fn from_total_months(total: u32) -> Self {
        Self {
            years: total / 12,
            months: total % 12,
        }
    }

    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }

    pub fn is_empty(&self) -> bool {
        self.total_months() == 0
    }
}

impl fmt::Display for ExperienceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(2);
        if self.years > 0 {
            parts.push(pluralize(self.years, "Year"));
        }
        if self.months > 0 {
            parts.push(pluralize(self.months, "Month"));
        }
        f.write_str(&parts.join(" "))
    }
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM` or an RFC 3339 timestamp.
pub fn parse_start_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .with_context(|| format!("Unrecognized career start date: {}", raw))
}

/// Formatted duration from a raw start date up to `today`.
pub fn experience_text(start_date: &str, today: NaiveDate) -> Result<String> {
    let start = parse_start_date(start_date)?;
    Ok(ExperienceSpan::between(start, today).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn months_ago(n: u32) -> NaiveDate {
        today().checked_sub_months(Months::new(n)).unwrap()
    }

    #[test]
    fn test_same_day_is_empty() {
        let span = ExperienceSpan::between(today(), today());
        assert!(span.is_empty());
        assert_eq!(span.to_string(), "");
    }

    #[test]
    fn test_eighteen_months() {
        assert_eq!(
            ExperienceSpan::between(months_ago(18), today()).to_string(),
            "1 Year 6 Months"
        );
    }

    #[test]
    fn test_exactly_one_year() {
        assert_eq!(ExperienceSpan::between(months_ago(12), today()).to_string(), "1 Year");
    }

    #[test]
    fn test_months_only() {
        assert_eq!(ExperienceSpan::between(months_ago(5), today()).to_string(), "5 Months");
        assert_eq!(ExperienceSpan::between(months_ago(1), today()).to_string(), "1 Month");
    }

    #[test]
    fn test_years_and_single_month() {
        assert_eq!(
            ExperienceSpan::between(months_ago(25), today()).to_string(),
            "2 Years 1 Month"
        );
    }

    #[test]
    fn test_day_of_month_ignored() {
        let start = NaiveDate::from_ymd_opt(2026, 9, 30).unwrap();
        let now = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        assert_eq!(ExperienceSpan::between(start, now).to_string(), "1 Month");
    }

    #[test]
    fn test_future_start_clamps_to_zero() {
        let start = NaiveDate::from_ymd_opt(2027, 3, 1).unwrap();
        assert!(ExperienceSpan::between(start, today()).is_empty());
    }

    #[test]
    fn test_parse_start_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2019, 11, 1).unwrap();
        assert_eq!(parse_start_date("2019-11-01").unwrap(), expected);
        assert_eq!(parse_start_date("2019-11").unwrap(), expected);
        assert_eq!(parse_start_date("2019-11-01T00:00:00Z").unwrap(), expected);
        assert!(parse_start_date("November 2019").is_err());
    }

    #[test]
    fn test_experience_text() {
        assert_eq!(experience_text("2019-11-01", today()).unwrap(), "6 Years 11 Months");
    }
}
