/// Utilities for rendering bill fields for display
///
/// Formatting is fallible by design: a record whose date or status cannot
/// be rendered keeps its raw value, it is never dropped from the list.
use std::fmt;

use chrono::{Datelike, NaiveDate};
use contracts::domain::a001_bill::aggregate::BillStatus;

/// A date value that cannot be rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatError {
    pub raw: String,
}

impl fmt::Display for DateFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a calendar date: {:?}", self.raw)
    }
}

impl std::error::Error for DateFormatError {}

// Capitalized 3-letter French month abbreviations.
const MONTH_ABBR: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Format an ISO date for the bills table.
/// Example: "2004-04-04" -> "4 Avr. 04"
pub fn format_date(iso: &str) -> Result<String, DateFormatError> {
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d").map_err(|_| DateFormatError {
        raw: iso.to_string(),
    })?;
    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        MONTH_ABBR[date.month0() as usize],
        date.year().rem_euclid(100)
    ))
}

/// Display label for a wire status, None when the value is unknown.
pub fn format_status(raw: &str) -> Option<&'static str> {
    BillStatus::parse(raw).map(|s| s.label())
}
