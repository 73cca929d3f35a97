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

use std::sync::Arc;

use log::{debug, trace};

use super::{
    Operator, PhoneNumberFormat,
    errors::ParseError,
    helper_constants::{COUNTRY_CALLING_CODE, NSN_LENGTH, OPERATOR_CODE_LENGTH, RFC3966_PREFIX},
    helper_functions::{extract_digits, fill_template, national_digits, with_country_calling_code},
    phone_number::PhoneNumber,
    phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings,
    phone_template::PhoneTemplate,
};
use crate::{
    interfaces::OperatorMatcherApi, regex_util::RegexFullMatch,
    table_based_matcher::TableBasedMatcher, template_cache::TemplateCache,
};

pub struct PhoneNumberUtil {
    /// An API for operator lookup.
    matcher_api: Box<dyn OperatorMatcherApi>,

    /// Helper class holding the compiled patterns and format templates.
    reg_exps: PhoneNumberRegExpsAndMappings,

    /// Templates given as text by callers, parsed on first use.
    template_cache: TemplateCache,
}

impl PhoneNumberUtil {
    pub(super) fn new() -> Self {
        Self::new_with_matcher(Box::new(TableBasedMatcher::new()))
    }

    pub(crate) fn new_with_matcher(matcher_api: Box<dyn OperatorMatcherApi>) -> Self {
        let reg_exps = match PhoneNumberRegExpsAndMappings::new() {
            Err(err) => {
                let err_message = format!("Could not compile built-in patterns: {:?}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
            Ok(reg_exps) => reg_exps,
        };
        Self {
            matcher_api,
            reg_exps,
            template_cache: TemplateCache::with_capacity(8),
        }
    }

    /// The template used by [`PhoneNumberUtil::normalize`].
    pub fn default_template(&self) -> &PhoneTemplate {
        &self.reg_exps.default_template
    }

    /// Returns the parsed template for `format`, parsing it only once per
    /// distinct text.
    pub fn get_template(&self, format: &str) -> Arc<PhoneTemplate> {
        self.template_cache.get_template(format)
    }

    /// Formats raw input with the default template `+998 (##) ### ## ##`.
    pub fn normalize(&self, value: &str) -> String {
        self.normalize_with_template(value, &self.reg_exps.default_template)
    }

    /// Formats raw input with a caller supplied template, where every `#`
    /// is a digit slot.
    pub fn normalize_with_format(&self, value: &str, format: &str) -> String {
        let template = self.get_template(format);
        self.normalize_with_template(value, &template)
    }

    /// Masks raw input with `template`.
    ///
    /// Only decimal digits of `value` are kept. If they do not start with the
    /// country calling code it is prepended, so typing the national number
    /// alone works. The digits after the country code fill the slots from
    /// left to right and unfilled slots are shown as `_`. Never fails: input
    /// without digits gives the all-blank mask.
    pub fn normalize_with_template(&self, value: &str, template: &PhoneTemplate) -> String {
        if value.is_empty() {
            return template.blank_mask();
        }
        let digits = with_country_calling_code(extract_digits(value));
        let national_number = national_digits(digits);
        fill_template(template, &national_number)
    }

    /// Returns `true` if `phone` holds exactly the country calling code and
    /// nine national digits, ignoring every non-digit character.
    pub fn is_valid_phone_number(&self, phone: &str) -> bool {
        let digits = extract_digits(phone);
        self.reg_exps.valid_phone_number_pattern.full_match(&digits)
    }

    /// Looks up the carrier from the two digits that follow the country
    /// calling code. Returns `None` for fewer than five digits or for a code
    /// no carrier owns.
    pub fn get_operator(&self, phone: &str) -> Option<Operator> {
        let digits = extract_digits(phone);
        let code_start = COUNTRY_CALLING_CODE.len();
        let code_end = code_start + OPERATOR_CODE_LENGTH;
        if digits.len() < code_end {
            trace!("Not enough digits in {:?} to resolve the operator", phone);
            return None;
        }
        self.matcher_api
            .match_operator_code(&digits[code_start..code_end])
    }

    pub fn get_operator_name(&self, phone: &str) -> Option<&'static str> {
        self.get_operator(phone).map(|operator| operator.name())
    }

    pub fn get_operator_for_number(&self, phone_number: &PhoneNumber) -> Option<Operator> {
        self.matcher_api
            .match_operator_code(phone_number.operator_code())
    }

    /// Parses free-form input into a complete number. Applies the same digit
    /// extraction and country code injection as the normalizer, but insists
    /// on exactly nine national digits instead of masking.
    pub fn parse(&self, value: &str) -> Result<PhoneNumber, ParseError> {
        let digits = with_country_calling_code(extract_digits(value));
        if digits.is_empty() {
            debug!("No digits in {:?}", value);
            return Err(ParseError::NotANumber);
        }
        let national_number = national_digits(digits);
        let found = national_number.len();
        if found < NSN_LENGTH {
            return Err(ParseError::TooShortNsn {
                expected: NSN_LENGTH,
                found,
            });
        }
        if found > NSN_LENGTH {
            return Err(ParseError::TooLongNsn {
                expected: NSN_LENGTH,
                found,
            });
        }
        Ok(PhoneNumber::new(national_number.into_owned()))
    }

    pub fn format(&self, phone_number: &PhoneNumber, number_format: PhoneNumberFormat) -> String {
        // every format has its template, see `initialize_format_templates`
        let formatted = match self.reg_exps.format_templates.get(&number_format) {
            Some(template) => fill_template(template, phone_number.national_number()),
            None => fill_template(&self.reg_exps.default_template, phone_number.national_number()),
        };
        if let PhoneNumberFormat::RFC3966 = number_format {
            return fast_cat::concat_str!(RFC3966_PREFIX, &formatted);
        }
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneNumberUtil;
    use crate::{
        interfaces::OperatorMatcherApi,
        phonenumberutil::{Operator, PhoneNumberFormat},
    };

    struct EverythingIsUcell;

    impl OperatorMatcherApi for EverythingIsUcell {
        fn match_operator_code(&self, _operator_code: &str) -> Option<Operator> {
            Some(Operator::Ucell)
        }
    }

    #[test]
    fn operator_lookup_goes_through_matcher() {
        let util = PhoneNumberUtil::new_with_matcher(Box::new(EverythingIsUcell));
        assert_eq!(Some(Operator::Ucell), util.get_operator("+998 12 345 67 89"));
        // Too short to reach the matcher at all.
        assert_eq!(None, util.get_operator("+9981"));
    }

    #[test]
    fn format_all_styles() {
        let util = PhoneNumberUtil::new();
        let number = util.parse("90 123 45 67").unwrap();
        assert_eq!("+998901234567", util.format(&number, PhoneNumberFormat::E164));
        assert_eq!(
            "+998 90 123 45 67",
            util.format(&number, PhoneNumberFormat::International)
        );
        assert_eq!("90 123 45 67", util.format(&number, PhoneNumberFormat::National));
        assert_eq!(
            "tel:+998-90-123-45-67",
            util.format(&number, PhoneNumberFormat::RFC3966)
        );
        assert_eq!(
            "+998 (90) 123 45 67",
            util.format(&number, PhoneNumberFormat::Masked)
        );
    }
}
