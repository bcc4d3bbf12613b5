use crate::checksum::{check_code, WEIGHTS};
use crate::validation::Validator;

pub struct CurrentIdValidator;

impl Validator for CurrentIdValidator {
    fn is_valid_id(&self, id: &str) -> bool {
        /*
         * 18-digit format per GB 11643-1999: 17 data digits followed by one
         * check character. Each of the 17 digits is multiplied by its weight,
         * the sum is reduced mod 11 and looked up in the check-code table,
         * and the result must equal the final character (X may be lowercase).
         */
        let mut chars = id.chars();

        let mut sum = 0;
        for weight in WEIGHTS {
            match chars.next().and_then(|c| c.to_digit(10)) {
                Some(digit) => sum += digit * weight,
                None => return false,
            }
        }

        let Some(supplied) = chars.next() else {
            return false;
        };
        if chars.next().is_some() {
            return false;
        }

        check_code(sum).eq_ignore_ascii_case(&supplied)
    }
}
