mod current_id;
mod legacy_id;

pub use current_id::CurrentIdValidator;
pub use legacy_id::LegacyIdValidator;

use crate::classification::{classify, IdFormat};

pub trait Validator: Send + Sync {
    fn is_valid_id(&self, id: &str) -> bool;
}

/// Validates a candidate string as a Chinese national ID in either format.
/// Classification picks the format; the matching semantic validator decides.
/// Anything that fits neither shape is simply `false` — no failure here ever
/// surfaces as a panic.
pub fn is_valid(id: &str) -> bool {
    match classify(id) {
        Some(IdFormat::Legacy15) => LegacyIdValidator.is_valid_id(id),
        Some(IdFormat::Current18) => CurrentIdValidator.is_valid_id(id),
        None => false,
    }
}
