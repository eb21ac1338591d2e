//! Validation of user-supplied date specifications
//!
//! Threshold dates accept `YYYY`, `YYYY-MM`, or `YYYY-MM-DD`; a missing
//! month or day defaults to `01`. Shape errors (too many components,
//! non-numeric parts, an empty spec) and calendar errors (month 13,
//! Feb 30) are distinct failures but both surface as user-facing messages.

use chrono::NaiveDate;

/// Parse a `YYYY[-MM[-DD]]` threshold specification
///
/// # Arguments
/// * `spec` - Date specification as typed by the user
///
/// # Returns
/// Result containing the parsed date or a user-facing error message
pub fn parse_date_spec(spec: &str) -> Result<NaiveDate, String> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err("Invalid date format. Use YYYY[-MM[-DD]]".to_string());
    }

    let parts: Vec<&str> = spec.split('-').collect();
    if parts.len() > 3 {
        return Err(format!("Invalid date format '{}'. Use YYYY[-MM[-DD]]", spec));
    }

    let year: i32 = parse_component(parts[0], spec)?;
    let month: u32 = match parts.get(1) {
        Some(p) => parse_component(p, spec)?,
        None => 1,
    };
    let day: u32 = match parts.get(2) {
        Some(p) => parse_component(p, spec)?,
        None => 1,
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| format!("'{}' is not a valid calendar date", spec))
}

fn parse_component<T: std::str::FromStr>(part: &str, spec: &str) -> Result<T, String> {
    part.trim()
        .parse()
        .map_err(|_| format!("Invalid date format '{}'. Use YYYY[-MM[-DD]]", spec))
}
