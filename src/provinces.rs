// Two-digit prefixes of the issuing provincial-level regions, per
// GB/T 2260. Includes Taiwan (71), Hong Kong (81), Macau (82) and the
// code reserved for residents abroad (91).
pub(crate) const PROVINCE_CODES: [&str; 35] = [
    "11", "12", "13", "14", "15", "21", "22", "23", "31", "32", "33", "34", "35", "36", "37", "41",
    "42", "43", "44", "45", "46", "50", "51", "52", "53", "54", "61", "62", "63", "64", "65", "71",
    "81", "82", "91",
];

pub(crate) fn is_known_code(code: &str) -> bool {
    PROVINCE_CODES.contains(&code)
}
