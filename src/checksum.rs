// ISO 7064 MOD 11-2 as used by GB 11643-1999: the first 17 digits are
// weighted, summed and reduced mod 11 into a table of check characters.

pub(crate) const WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
pub(crate) const CHECK_CODES: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Weighted sum over exactly the first 17 characters of `input`, which must
/// all be ASCII digits. Returns `None` if a non-digit shows up or the input
/// is shorter than 17 characters; extra characters past the 17th are left
/// for the caller.
pub(crate) fn weighted_sum(input: &str) -> Option<u32> {
    let mut chars = input.chars();
    let mut sum = 0;
    for weight in WEIGHTS {
        let digit = chars.next()?.to_digit(10)?;
        sum += digit * weight;
    }
    Some(sum)
}

pub(crate) fn check_code(sum: u32) -> char {
    CHECK_CODES[(sum % 11) as usize]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn textbook_prefix_maps_to_x() {
        // 17-digit prefix of the well-known 11010519491231002X example
        let sum = weighted_sum("11010519491231002").unwrap();
        assert_eq!(sum % 11, 2);
        assert_eq!(check_code(sum), 'X');
    }

    #[test]
    fn short_or_non_digit_input_yields_no_sum() {
        assert_eq!(weighted_sum(""), None);
        assert_eq!(weighted_sum("1101051949123100"), None);
        assert_eq!(weighted_sum("1101051949123100a"), None);
        assert_eq!(weighted_sum("513231200012Àñô"), None);
    }

    #[test]
    fn trailing_characters_are_ignored() {
        let bare = weighted_sum("11010519491231002").unwrap();
        let with_check = weighted_sum("11010519491231002X").unwrap();
        assert_eq!(bare, with_check);
    }
}
