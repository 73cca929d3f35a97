// Copyright (C) 2025 The uzphonenumber Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use log::trace;

use crate::string_util::{is_ascii_digits, strip_cow_prefix};

use super::{
    helper_constants::{BLANK_CHAR, COUNTRY_CALLING_CODE},
    phone_template::PhoneTemplate,
};

/// Keeps only the decimal digits of `value`, in order.
///
/// Decimal digits of any script are folded into ASCII first, so full-width
/// or Arabic-Indic input counts the same as `0-9`. Borrows when `value` is
/// already made of ASCII digits only.
pub(super) fn extract_digits(value: &str) -> Cow<'_, str> {
    if is_ascii_digits(value) {
        return Cow::Borrowed(value);
    }
    let folded = dec_from_char::normalize_decimals(value);
    Cow::Owned(folded.chars().filter(|c| c.is_ascii_digit()).collect())
}

/// Prepends the country calling code when a non-empty digit sequence does not
/// already start with it. After this single pass the sequence always starts
/// with the code, so there is nothing to repeat.
pub(super) fn with_country_calling_code(digits: Cow<'_, str>) -> Cow<'_, str> {
    if digits.is_empty() || digits.starts_with(COUNTRY_CALLING_CODE) {
        return digits;
    }
    trace!("Injecting country calling code into {:?}", digits);
    Cow::Owned(fast_cat::concat_str!(COUNTRY_CALLING_CODE, &*digits))
}

/// Returns the digits that follow the country calling code. Empty when there
/// are none.
pub(super) fn national_digits(digits: Cow<'_, str>) -> Cow<'_, str> {
    strip_cow_prefix(digits, COUNTRY_CALLING_CODE).unwrap_or(Cow::Borrowed(""))
}

/// Writes `digits` into the slots of `template` from left to right. Slots
/// left over are shown as blanks and surplus digits are dropped.
pub(super) fn fill_template(template: &PhoneTemplate, digits: &str) -> String {
    let mut filled = template.chars().to_vec();
    let mut digits = digits.chars();
    for &slot in template.slots() {
        filled[slot] = digits.next().unwrap_or(BLANK_CHAR);
    }
    filled.into_iter().collect()
}
