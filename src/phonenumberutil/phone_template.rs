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

use log::warn;

use super::{
    errors::TemplateError,
    helper_constants::{BLANK_CHAR, NSN_LENGTH, PLACEHOLDER_CHAR},
};

/// A format template split into characters, with the positions of its digit
/// slots precomputed.
///
/// Any string is a template: literal characters are copied to the output and
/// every `#` is a slot. Use [`PhoneTemplate::validate`] when the template must
/// hold exactly one national significant number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneTemplate {
    pattern: String,
    chars: Vec<char>,
    /// Char indices of `#` in `chars`, ascending.
    slots: Vec<usize>,
}

impl PhoneTemplate {
    pub fn new(pattern: &str) -> Self {
        let chars: Vec<char> = pattern.chars().collect();
        let slots = chars
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == PLACEHOLDER_CHAR)
            .map(|(i, _)| i)
            .collect();
        Self {
            pattern: pattern.to_owned(),
            chars,
            slots,
        }
    }

    /// The template text, as it was given.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Length of every string produced from this template, in chars.
    pub fn char_len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_slot(&self, index: usize) -> bool {
        self.slots.binary_search(&index).is_ok()
    }

    /// Returns the template with every slot shown as a blank.
    pub fn blank_mask(&self) -> String {
        self.chars
            .iter()
            .map(|&c| if c == PLACEHOLDER_CHAR { BLANK_CHAR } else { c })
            .collect()
    }

    /// Checks that the template holds exactly one national significant number.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.chars.is_empty() {
            warn!("Rejected empty phone template");
            return Err(TemplateError::Empty);
        }
        if self.slots.len() != NSN_LENGTH {
            warn!(
                "Rejected phone template {:?}: {} placeholders",
                self.pattern,
                self.slots.len()
            );
            return Err(TemplateError::PlaceholderCount {
                expected: NSN_LENGTH,
                found: self.slots.len(),
            });
        }
        Ok(())
    }
}

impl Default for PhoneTemplate {
    fn default() -> Self {
        Self::new(super::helper_constants::DEFAULT_FORMAT)
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneTemplate;
    use crate::phonenumberutil::errors::TemplateError;

    #[test]
    fn default_template_slots() {
        let template = PhoneTemplate::default();
        assert_eq!(9, template.slot_count());
        assert_eq!(&[6, 7, 10, 11, 12, 14, 15, 17, 18], template.slots());
        assert!(!template.is_slot(0));
        assert!(template.is_slot(6));
        assert_eq!(Ok(()), template.validate());
    }

    #[test]
    fn blank_mask() {
        assert_eq!("+998 (__) ___ __ __", PhoneTemplate::default().blank_mask());
        assert_eq!("no slots", PhoneTemplate::new("no slots").blank_mask());
        assert_eq!("", PhoneTemplate::new("").blank_mask());
    }

    #[test]
    fn validate_rejects_wrong_templates() {
        assert_eq!(Err(TemplateError::Empty), PhoneTemplate::new("").validate());
        assert_eq!(
            Err(TemplateError::PlaceholderCount {
                expected: 9,
                found: 7
            }),
            PhoneTemplate::new("### ## ##").validate()
        );
        assert_eq!(Ok(()), PhoneTemplate::new("(##) ###-##-##").validate());
    }

    #[test]
    fn non_ascii_literals_keep_char_positions() {
        let template = PhoneTemplate::new("№ ##");
        assert_eq!(&[2, 3], template.slots());
        assert_eq!(4, template.char_len());
        assert_eq!("№ __", template.blank_mask());
    }
}
