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

use std::collections::HashMap;

use regex::Regex;
use strum::IntoEnumIterator;

use crate::phonenumberutil::{
    PhoneNumberFormat,
    errors::InvalidRegexError,
    helper_constants::{
        DEFAULT_FORMAT, E164_FORMAT, INTERNATIONAL_FORMAT, NATIONAL_FORMAT, RFC3966_FORMAT,
        VALID_PHONE_NUMBER,
    },
    phone_template::PhoneTemplate,
};

pub(super) struct PhoneNumberRegExpsAndMappings {
    /// Digits of a complete number: the country calling code followed by
    /// exactly nine national digits. Applied to digit-only strings with a
    /// full match, so separators have to be stripped first.
    pub valid_phone_number_pattern: Regex,

    /// The template used when the caller does not give one.
    pub default_template: PhoneTemplate,

    /// Templates behind every `PhoneNumberFormat`, parsed once.
    pub format_templates: HashMap<PhoneNumberFormat, PhoneTemplate>,
}

impl PhoneNumberRegExpsAndMappings {
    fn initialize_format_templates(&mut self) {
        for format in PhoneNumberFormat::iter() {
            let pattern = match format {
                PhoneNumberFormat::E164 => E164_FORMAT,
                PhoneNumberFormat::International => INTERNATIONAL_FORMAT,
                PhoneNumberFormat::National => NATIONAL_FORMAT,
                PhoneNumberFormat::RFC3966 => RFC3966_FORMAT,
                PhoneNumberFormat::Masked => DEFAULT_FORMAT,
            };
            self.format_templates.insert(format, PhoneTemplate::new(pattern));
        }
    }

    pub fn new() -> Result<Self, InvalidRegexError> {
        let mut instance = Self {
            valid_phone_number_pattern: Regex::new(VALID_PHONE_NUMBER)?,
            default_template: PhoneTemplate::new(DEFAULT_FORMAT),
            format_templates: HashMap::with_capacity(5),
        };
        instance.initialize_format_templates();
        Ok(instance)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::PhoneNumberRegExpsAndMappings;
    use crate::phonenumberutil::PhoneNumberFormat;

    #[test]
    fn every_format_has_a_valid_template() {
        let reg_exps = PhoneNumberRegExpsAndMappings::new().unwrap();
        for format in PhoneNumberFormat::iter() {
            let template = &reg_exps.format_templates[&format];
            assert_eq!(Ok(()), template.validate(), "{:?}", format);
        }
        assert_eq!(Ok(()), reg_exps.default_template.validate());
    }
}
