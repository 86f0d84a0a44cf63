use crate::error::Error;
use chrono::NaiveDate;
use itertools::Itertools;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trimmed value of a field that must not be blank.
pub fn required(field: &str, value: &str) -> Result<String, Error> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::BusinessError(format!("{} is required", field)));
    }
    Ok(value.to_owned())
}

pub fn optional_text(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Drops blank entries and trims the rest.
pub fn sanitize_names(names: Vec<String>) -> Vec<String> {
    names.into_iter().filter_map(|n| optional_text(Some(n))).collect_vec()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, Error> {
    Ok(NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)?)
}

/// Blank entries are discarded, the others must be `YYYY-MM-DD`.
pub fn parse_dates(dates: Vec<String>) -> Result<Vec<NaiveDate>, Error> {
    sanitize_names(dates).iter().map(|d| parse_date(d)).collect()
}
