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

/// Country calling code of Uzbekistan, as it appears in the digit sequence.
pub const COUNTRY_CALLING_CODE: &'static str = "998";
/// Length of the national significant number that follows the country code.
pub const NSN_LENGTH: usize = 9;
/// The operator code is the first two digits of the national number.
pub const OPERATOR_CODE_LENGTH: usize = 2;

/// Marks a digit slot in a format template.
pub const PLACEHOLDER_CHAR: char = '#';
/// Stands in for a digit slot that the user has not filled yet.
pub const BLANK_CHAR: char = '_';

pub const RFC3966_PREFIX: &'static str = "tel:";

/// Mask used by the input field when the caller gives no format.
pub const DEFAULT_FORMAT: &'static str = "+998 (##) ### ## ##";

// Templates behind `PhoneNumberFormat`, formatting is just slot filling.
pub const E164_FORMAT: &'static str = "+998#########";
pub const INTERNATIONAL_FORMAT: &'static str = "+998 ## ### ## ##";
pub const NATIONAL_FORMAT: &'static str = "## ### ## ##";
pub const RFC3966_FORMAT: &'static str = "+998-##-###-##-##";

// Complete number once all separators are gone.
pub const VALID_PHONE_NUMBER: &'static str = "998[0-9]{9}";
