//! Input masking, validation and operator lookup for Uzbekistan (+998)
//! phone numbers.
//!
//! ```
//! use uzphonenumber::{get_operator_name, is_valid_phone_number, normalize_phone_number};
//!
//! let formatted = normalize_phone_number("901234567");
//! assert_eq!("+998 (90) 123 45 67", formatted);
//! assert!(is_valid_phone_number(&formatted));
//! assert_eq!(Some("Beeline"), get_operator_name(&formatted));
//! ```

mod interfaces;
mod phonenumberutil;
mod phone_input;
mod table_based_matcher;
pub mod template_cache;
pub(crate) mod regex_util;
pub(crate) mod string_util;


pub use phonenumberutil::{
    BLANK_CHAR, COUNTRY_CALLING_CODE, DEFAULT_FORMAT, NSN_LENGTH, Operator, PHONE_NUMBER_UTIL,
    PLACEHOLDER_CHAR, PhoneNumberFormat,
    errors::{ParseError, TemplateError},
    phone_number::PhoneNumber,
    phone_template::PhoneTemplate,
    phonenumberutil::PhoneNumberUtil,
};
pub use phone_input::{PhoneInput, PhoneInputChange};
pub use template_cache::TemplateCache;

/// Masks `value` with the default template `+998 (##) ### ## ##`.
pub fn normalize_phone_number(value: &str) -> String {
    PHONE_NUMBER_UTIL.normalize(value)
}

/// Masks `value` with `format`, where every `#` is a digit slot.
pub fn normalize_phone_number_with_format(value: &str, format: &str) -> String {
    PHONE_NUMBER_UTIL.normalize_with_format(value, format)
}

pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_NUMBER_UTIL.is_valid_phone_number(phone)
}

pub fn get_operator_name(phone: &str) -> Option<&'static str> {
    PHONE_NUMBER_UTIL.get_operator_name(phone)
}
