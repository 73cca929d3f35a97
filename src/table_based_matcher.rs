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

use log::trace;
use strum::IntoEnumIterator;

use crate::{interfaces, phonenumberutil::Operator};

/// Resolves operator codes through the static carrier table.
pub struct TableBasedMatcher {
    code_to_operator: HashMap<&'static str, Operator>,
}

impl TableBasedMatcher {
    pub fn new() -> Self {
        let mut code_to_operator = HashMap::with_capacity(16);
        // Declaration order decides collisions: the first carrier keeps a code.
        for operator in Operator::iter() {
            for code in operator.codes() {
                code_to_operator.entry(*code).or_insert(operator);
            }
        }
        Self { code_to_operator }
    }
}

impl interfaces::OperatorMatcherApi for TableBasedMatcher {
    fn match_operator_code(&self, operator_code: &str) -> Option<Operator> {
        let operator = self.code_to_operator.get(operator_code).copied();
        trace!("Operator code {} resolved to {:?}", operator_code, operator);
        operator
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::TableBasedMatcher;
    use crate::{interfaces::OperatorMatcherApi, phonenumberutil::Operator};

    #[test]
    fn every_declared_code_resolves_to_its_owner() {
        let matcher = TableBasedMatcher::new();
        for operator in Operator::iter() {
            for code in operator.codes() {
                assert_eq!(Some(operator), matcher.match_operator_code(code));
            }
        }
    }

    #[test]
    fn unknown_codes() {
        let matcher = TableBasedMatcher::new();
        assert_eq!(None, matcher.match_operator_code("12"));
        assert_eq!(None, matcher.match_operator_code("92"));
        assert_eq!(None, matcher.match_operator_code("9"));
        assert_eq!(None, matcher.match_operator_code(""));
    }
}
