use chrono::{Datelike, NaiveDate};

/// Expands a two-digit birth year against `today`. A short year strictly
/// greater than the current year's last two digits belongs to the previous
/// century, anything else to the current one, so the inferred year is never
/// in the future. In 2026: 49 -> 1949, 26 -> 2026, 05 -> 2005.
pub(crate) fn infer_full_year(short_year: u32, today: NaiveDate) -> i32 {
    let century = today.year() - today.year() % 100;
    let candidate = century + short_year as i32;
    if candidate > today.year() {
        candidate - 100
    } else {
        candidate
    }
}

/// Parses a 6-character `YYMMDD` birthday into a real calendar date, using
/// the century rule above. `None` for non-digit input or impossible dates
/// (month 0, Feb 30, ...).
pub(crate) fn parse_short_birthday(birthday: &str, today: NaiveDate) -> Option<NaiveDate> {
    if birthday.len() != 6 || !birthday.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = infer_full_year(two_digits(&birthday[0..2]), today);
    let month = two_digits(&birthday[2..4]);
    let day = two_digits(&birthday[4..6]);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Reads a two-ASCII-digit substring. Callers must have checked the digits.
pub(crate) fn two_digits(s: &str) -> u32 {
    let bytes = s.as_bytes();
    (bytes[0] - b'0') as u32 * 10 + (bytes[1] - b'0') as u32
}

pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod test {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn century_pivots_on_the_current_year() {
        let today = day(2026, 8, 26);
        assert_eq!(infer_full_year(49, today), 1949);
        assert_eq!(infer_full_year(99, today), 1999);
        assert_eq!(infer_full_year(27, today), 1927);
        assert_eq!(infer_full_year(26, today), 2026);
        assert_eq!(infer_full_year(0, today), 2000);
        assert_eq!(infer_full_year(5, today), 2005);
    }

    #[test]
    fn parses_real_dates_only() {
        let today = day(2026, 8, 26);
        assert_eq!(
            parse_short_birthday("491231", today),
            Some(day(1949, 12, 31))
        );
        assert_eq!(parse_short_birthday("000229", today), Some(day(2000, 2, 29)));
        // 1999 is not a leap year
        assert_eq!(parse_short_birthday("990229", today), None);
        assert_eq!(parse_short_birthday("660001", today), None);
        assert_eq!(parse_short_birthday("661301", today), None);
        assert_eq!(parse_short_birthday("660132", today), None);
        assert_eq!(parse_short_birthday("66010", today), None);
        assert_eq!(parse_short_birthday("66x101", today), None);
    }

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1996));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(1999));
    }
}
