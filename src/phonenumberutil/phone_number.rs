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

use std::{fmt, str::FromStr};

use super::{
    Operator, PHONE_NUMBER_UTIL, PhoneNumberFormat,
    errors::ParseError,
    helper_constants::{COUNTRY_CALLING_CODE, OPERATOR_CODE_LENGTH},
};

/// A complete Uzbekistan phone number.
///
/// Only `PhoneNumberUtil::parse` creates it, so the national number always
/// holds exactly nine ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    national_number: String,
}

impl PhoneNumber {
    pub(super) fn new(national_number: String) -> Self {
        Self { national_number }
    }

    pub fn country_code(&self) -> &'static str {
        COUNTRY_CALLING_CODE
    }

    /// The nine digits after the country calling code.
    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    /// The first two digits of the national number.
    pub fn operator_code(&self) -> &str {
        &self.national_number[..OPERATOR_CODE_LENGTH]
    }

    pub fn operator(&self) -> Option<Operator> {
        PHONE_NUMBER_UTIL.get_operator_for_number(self)
    }
}

/// Displays the number in E.164 format.
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&PHONE_NUMBER_UTIL.format(self, PhoneNumberFormat::E164))
    }
}

impl FromStr for PhoneNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PHONE_NUMBER_UTIL.parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneNumber;
    use crate::phonenumberutil::{Operator, errors::ParseError};

    #[test]
    fn from_str_and_display() {
        let number: PhoneNumber = "+998 (93) 000 00 00".parse().unwrap();
        assert_eq!("998", number.country_code());
        assert_eq!("930000000", number.national_number());
        assert_eq!("93", number.operator_code());
        assert_eq!(Some(Operator::Ucell), number.operator());
        assert_eq!("+998930000000", number.to_string());

        assert_eq!(
            Err(ParseError::NotANumber),
            "no digits".parse::<PhoneNumber>()
        );
    }
}
