use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Normalize a user supplied date into the stored `YYYY-MM-DD` form.
pub fn normalize_date(s: &str) -> Option<String> {
    parse_date(s.trim()).map(|d| d.format("%Y-%m-%d").to_string())
}
