use chrono::{Datelike, Local, NaiveDateTime};

use crate::birth_date::{is_leap_year, parse_short_birthday, two_digits};
use crate::provinces;
use crate::validation::Validator;

pub struct LegacyIdValidator;

impl Validator for LegacyIdValidator {
    fn is_valid_id(&self, id: &str) -> bool {
        is_valid_at(id, Local::now().naive_local())
    }
}

/// The 15-digit legacy format carries no check digit, so validation is
/// structural: 2-digit province prefix, YYMMDD birthday at offset 6, and a
/// 3-digit sequence number. Every step below must pass.
pub(crate) fn is_valid_at(id: &str, now: NaiveDateTime) -> bool {
    if id.len() != 15 || !id.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    if !provinces::is_known_code(&id[0..2]) {
        return false;
    }

    let today = now.date();
    let Some(birth) = parse_short_birthday(&id[6..12], today) else {
        return false;
    };
    // Birth dates must lie strictly before the current moment.
    let Some(birth_midnight) = birth.and_hms_opt(0, 0, 0) else {
        return false;
    };
    if birth_midnight >= now {
        return false;
    }

    let year = two_digits(&id[6..8]);
    let month = two_digits(&id[8..10]);
    if !(1..=12).contains(&month) {
        return false;
    }
    let day = two_digits(&id[10..12]);

    // Short years below 50 must not exceed the current year's last two
    // digits. Kept verbatim from the historical rules even though the
    // century pivot already bounds inferred years.
    let current_yy = (today.year().rem_euclid(100)) as u32;
    if year < 50 && year > current_yy {
        return false;
    }

    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => (1..=31).contains(&day),
        4 | 6 | 9 | 11 => (1..=30).contains(&day),
        2 => {
            if is_leap_year(birth.year()) {
                (1..=29).contains(&day)
            } else {
                (1..=28).contains(&day)
            }
        }
        _ => false,
    }
}
