use lazy_static::lazy_static;
use regex::Regex;

/// The two formats a Chinese national ID number can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdFormat {
    /// The retired 15-digit format: 6-digit region code, YYMMDD birthday,
    /// 3-digit sequence number. No check digit.
    Legacy15,
    /// The current 18-digit format: 6-digit region code, YYYYMMDD birthday,
    /// 3-digit sequence number, 1 check character (digit or X).
    Current18,
}

lazy_static! {
    // [0-9] rather than \d keeps every accepted string pure ASCII, so the
    // semantic validators can slice by byte offset.
    static ref LEGACY_15_PATTERN: Regex =
        Regex::new(r"^[1-9][0-9]{7}(0[0-9]|1[0-2])([0-2][0-9]|3[01])[0-9]{3}$").unwrap();
    static ref CURRENT_18_PATTERN: Regex = Regex::new(
        r"^[1-9][0-9]{5}[1-9][0-9]{3}(0[0-9]|1[0-2])([0-2][0-9]|3[01])[0-9]{3}[0-9xX]$"
    )
    .unwrap();
}

/// Classifies a candidate string by shape alone. `None` means the string is
/// not syntactically an ID of either format. Month `00` and day `00` pass
/// here; the 15-digit semantic pass tightens them. Only the trailing check
/// letter is case-insensitive.
pub fn classify(id: &str) -> Option<IdFormat> {
    if LEGACY_15_PATTERN.is_match(id) {
        Some(IdFormat::Legacy15)
    } else if CURRENT_18_PATTERN.is_match(id) {
        Some(IdFormat::Current18)
    } else {
        None
    }
}
