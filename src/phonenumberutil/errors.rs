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

use thiserror::Error;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] pub regex::Error);

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Not a number")]
    NotANumber,
    #[error("Too short nsn: {found} of {expected} digits")]
    TooShortNsn { expected: usize, found: usize },
    #[error("Too long nsn: {found} of {expected} digits")]
    TooLongNsn { expected: usize, found: usize },
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Template is empty")]
    Empty,
    #[error("Template has {found} digit placeholders, expected {expected}")]
    PlaceholderCount { expected: usize, found: usize },
}
