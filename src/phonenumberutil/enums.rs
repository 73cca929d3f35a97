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

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Defines the output styles `PhoneNumberUtil::format` can produce.
///
/// For the number `90 123 45 67`:
/// - **E164**: `+998901234567`
/// - **INTERNATIONAL**: `+998 90 123 45 67`
/// - **NATIONAL**: `90 123 45 67`
/// - **RFC3966**: `tel:+998-90-123-45-67`
/// - **MASKED**: `+998 (90) 123 45 67`
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// **E.164 format.**
    /// A `+`, the country code and the national number without separators.
    E164,
    /// **International format.**
    /// Country code and number groups separated by spaces.
    International,
    /// **National format.**
    /// Only the national significant number, grouped 2+3+2+2.
    National,
    /// **RFC3966 format.**
    /// Starts with "tel:" and uses hyphens as separators.
    RFC3966,
    /// **Masked format.**
    /// The same shape the input field shows, see `DEFAULT_FORMAT`.
    Masked,
}

/// Mobile carriers of Uzbekistan, in table declaration order.
///
/// When two carriers claimed the same operator code the one declared first
/// would win, so keep the order stable.
#[derive(
    Debug, Display, EnumIter, EnumString, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash,
)]
pub enum Operator {
    Beeline,
    Ucell,
    UzMobile,
    Perfectum,
    Uztelecom,
}

impl Operator {
    /// Carrier name as shown to users.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Two-digit operator codes that this carrier owns.
    pub fn codes(&self) -> &'static [&'static str] {
        match self {
            Operator::Beeline => &["90", "91"],
            Operator::Ucell => &["93", "94"],
            Operator::UzMobile => &["95", "99"],
            Operator::Perfectum => &["98"],
            Operator::Uztelecom => &["97"],
        }
    }
}
