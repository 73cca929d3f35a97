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

//! State of a phone number form field, without any rendering.
//!
//! A UI layer owns one [`PhoneInput`] per field and forwards its events:
//! edits go to [`PhoneInput::handle_input`], values coming from the outside
//! to [`PhoneInput::set_value`], focus changes to [`PhoneInput::focus`] and
//! [`PhoneInput::blur`], backspace and delete keys to
//! [`PhoneInput::erase_before`] and [`PhoneInput::erase_after`]. Validity and
//! operator are derived from the displayed value on every call.

use std::sync::Arc;

use log::trace;

use crate::phonenumberutil::{
    BLANK_CHAR, COUNTRY_CALLING_CODE, DEFAULT_FORMAT, Operator, PHONE_NUMBER_UTIL,
    phone_template::PhoneTemplate,
};

/// What the field reports to its owner after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneInputChange {
    pub formatted_value: String,
    pub is_valid: bool,
    pub operator: Option<Operator>,
}

#[derive(Debug, Clone)]
pub struct PhoneInput {
    /// Displayed text. Empty until the field is focused or edited, otherwise
    /// shaped like `template`.
    value: String,
    focused: bool,
    template: Arc<PhoneTemplate>,
}

impl PhoneInput {
    /// A field masked with `+998 (##) ### ## ##`.
    pub fn new(initial: &str) -> Self {
        Self::with_template(initial, DEFAULT_FORMAT)
    }

    pub fn with_template(initial: &str, format: &str) -> Self {
        let mut input = Self {
            value: String::new(),
            focused: false,
            template: PHONE_NUMBER_UTIL.get_template(format),
        };
        input.set_value(initial);
        input
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn template(&self) -> &PhoneTemplate {
        &self.template
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_valid(&self) -> bool {
        PHONE_NUMBER_UTIL.is_valid_phone_number(&self.full_digits())
    }

    pub fn operator(&self) -> Option<Operator> {
        PHONE_NUMBER_UTIL.get_operator(&self.full_digits())
    }

    /// Whether the field should be drawn in its error state. An untouched
    /// empty field is never an error.
    pub fn shows_error(&self, show_error: bool) -> bool {
        show_error && !self.value.is_empty() && !self.is_valid()
    }

    pub fn change(&self) -> PhoneInputChange {
        PhoneInputChange {
            formatted_value: self.value.clone(),
            is_valid: self.is_valid(),
            operator: self.operator(),
        }
    }

    /// Replaces the value from outside of the field, e.g. when a form is
    /// reset. No change is reported for it.
    pub fn set_value(&mut self, value: &str) {
        if value.is_empty() {
            self.value.clear();
            return;
        }
        self.value = PHONE_NUMBER_UTIL.normalize_with_template(value, &self.template);
    }

    /// Applies the text the user left in the field after an edit.
    pub fn handle_input(&mut self, raw_value: &str) -> PhoneInputChange {
        self.value = PHONE_NUMBER_UTIL.normalize_with_template(raw_value, &self.template);
        let change = self.change();
        trace!("Phone input changed: {:?}", change);
        change
    }

    /// Focusing an empty field shows the blank mask with the country code.
    pub fn focus(&mut self) {
        self.focused = true;
        if self.value.is_empty() {
            self.value = self.template.blank_mask();
        }
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Backspace with the caret at char index `cursor`: blanks the closest
    /// filled slot before it. Literals, the country code included, are
    /// skipped.
    pub fn erase_before(&mut self, cursor: usize) -> Option<PhoneInputChange> {
        let mut chars = self.masked_chars()?;
        let slot = self
            .template
            .slots()
            .iter()
            .rev()
            .copied()
            .find(|&slot| slot < cursor && chars[slot].is_ascii_digit())?;
        chars[slot] = BLANK_CHAR;
        self.value = chars.into_iter().collect();
        Some(self.change())
    }

    /// Delete with the caret at char index `cursor`: blanks the closest filled
    /// slot at or after it.
    pub fn erase_after(&mut self, cursor: usize) -> Option<PhoneInputChange> {
        let mut chars = self.masked_chars()?;
        let slot = self
            .template
            .slots()
            .iter()
            .copied()
            .find(|&slot| slot >= cursor && chars[slot].is_ascii_digit())?;
        chars[slot] = BLANK_CHAR;
        self.value = chars.into_iter().collect();
        Some(self.change())
    }

    /// The value as chars, if it has the template's shape.
    fn masked_chars(&self) -> Option<Vec<char>> {
        let chars: Vec<char> = self.value.chars().collect();
        if chars.len() != self.template.char_len() {
            return None;
        }
        Some(chars)
    }

    /// Country calling code followed by the digits entered into the slots.
    /// Validity and operator are read from this, so templates without a
    /// literal `+998` behave the same as the default one.
    fn full_digits(&self) -> String {
        let mut digits = String::with_capacity(COUNTRY_CALLING_CODE.len() + self.template.slot_count());
        digits.push_str(COUNTRY_CALLING_CODE);
        if let Some(chars) = self.masked_chars() {
            digits.extend(
                self.template
                    .slots()
                    .iter()
                    .map(|&slot| chars[slot])
                    .filter(char::is_ascii_digit),
            );
        }
        digits
    }
}

impl Default for PhoneInput {
    fn default() -> Self {
        Self::new("")
    }
}
