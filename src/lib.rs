// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod birth_date;
mod checksum;
mod classification;
mod provinces;
mod upgrade;
mod validation;

// This is the public API of the cnid library
pub use classification::{classify, IdFormat};
pub use upgrade::{upgrade_legacy_id, UpgradeError};
pub use validation::{is_valid, CurrentIdValidator, LegacyIdValidator, Validator};
