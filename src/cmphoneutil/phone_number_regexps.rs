// Copyright (C) 2025 Kashin Vladislav
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

use regex::Regex;

use super::helper_constants::{DIGITS, VALID_PUNCTUATION, WHITESPACE_CHARS};

pub(super) struct PhoneNumberRegExps {
    /// Matches a whole (already trimmed) input made only of ASCII digits,
    /// whitespace and valid punctuation. Anything else, including non-ASCII
    /// decimal digits, makes the input invalid before digits are extracted.
    pub valid_chars_pattern: Regex,

    /// Matches every run of characters that are not ASCII digits. Used to
    /// strip separators once the character set has been checked.
    pub non_digits_pattern: Regex,
}

impl PhoneNumberRegExps {
    pub fn new() -> Self {
        Self {
            // None of the whitespace chars is a class metacharacter, so they
            // go into the class as they are.
            valid_chars_pattern: Regex::new(&format!(
                "^[{}{}{}]*$",
                DIGITS,
                WHITESPACE_CHARS.iter().collect::<String>(),
                VALID_PUNCTUATION
            ))
            .expect("Invalid constant pattern!"),
            non_digits_pattern: Regex::new(&format!("[^{}]+", DIGITS))
                .expect("Invalid constant pattern!"),
        }
    }
}
