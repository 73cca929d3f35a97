mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phonenumberutil;
pub mod phone_number;
pub mod phone_template;
mod phone_number_regexps_and_mappings;

use std::sync::LazyLock;

pub use enums::{Operator, PhoneNumberFormat};
pub use helper_constants::{BLANK_CHAR, COUNTRY_CALLING_CODE, DEFAULT_FORMAT, NSN_LENGTH, PLACEHOLDER_CHAR};
use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});
