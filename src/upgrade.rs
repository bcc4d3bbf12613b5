use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

use crate::birth_date::parse_short_birthday;
use crate::checksum::{check_code, weighted_sum};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum UpgradeError {
    #[error("input is not a 15-digit all-numeric ID")]
    NotLegacyFormat,

    #[error("the embedded birthday is not a real calendar date")]
    InvalidBirthDate,

    #[error("the rebuilt 17-digit prefix is malformed")]
    MalformedPrefix,
}

/// Upgrades a legacy 15-digit ID to its 18-digit equivalent: the two-digit
/// birth year is widened to four digits (century inferred against today) and
/// the MOD 11-2 check character is appended. The structural checks of
/// [`LegacyIdValidator`](crate::LegacyIdValidator) are not applied here; the
/// original registration bureaus upgraded what was on file.
pub fn upgrade_legacy_id(id: &str) -> Result<String, UpgradeError> {
    upgrade_legacy_id_at(id, Local::now().date_naive())
}

pub(crate) fn upgrade_legacy_id_at(id: &str, today: NaiveDate) -> Result<String, UpgradeError> {
    if id.len() != 15 || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UpgradeError::NotLegacyFormat);
    }

    let birth = parse_short_birthday(&id[6..12], today).ok_or(UpgradeError::InvalidBirthDate)?;

    let mut upgraded = format!("{}{}{}", &id[0..6], birth.year(), &id[8..]);
    if upgraded.len() != 17 {
        return Err(UpgradeError::MalformedPrefix);
    }

    let sum = weighted_sum(&upgraded).ok_or(UpgradeError::MalformedPrefix)?;
    upgraded.push(check_code(sum));
    Ok(upgraded)
}
