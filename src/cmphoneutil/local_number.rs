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

use std::{borrow::Cow, fmt};

use super::{
    errors::NormalizationError,
    helper_constants::{
        LOCAL_NUMBER_LENGTH, NATIONAL_DESTINATION_CODE_LENGTH, OVERRIDE_PREFIX_LENGTH,
    },
};

/// A Cameroonian subscriber number without country code.
///
/// Always exactly 9 ASCII digits. Instances come out of
/// [`CameroonPhoneUtil::normalize`](crate::CameroonPhoneUtil::normalize),
/// or out of `TryFrom<&str>` for input that is already bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocalNumber(String);

impl LocalNumber {
    /// Wraps a digit-only string, checking only its length.
    pub(super) fn from_digits(digits: Cow<'_, str>) -> Result<Self, NormalizationError> {
        debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        let len = digits.len();
        if len < LOCAL_NUMBER_LENGTH {
            return Err(NormalizationError::TooShort { digits: len });
        }
        if len > LOCAL_NUMBER_LENGTH {
            return Err(NormalizationError::TooLong { digits: len });
        }
        Ok(Self(digits.into_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// First 3 digits, identifying the carrier block.
    pub fn national_destination_code(&self) -> &str {
        &self.0[..NATIONAL_DESTINATION_CODE_LENGTH]
    }

    /// First 5 digits, used to look up carrier overrides inside a block.
    pub fn override_prefix(&self) -> &str {
        &self.0[..OVERRIDE_PREFIX_LENGTH]
    }
}

impl TryFrom<&str> for LocalNumber {
    type Error = NormalizationError;

    /// Accepts exactly 9 ASCII digits, no separators and no country code.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(NormalizationError::Empty);
        }
        if !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NormalizationError::InvalidChars);
        }
        Self::from_digits(Cow::Borrowed(value))
    }
}

impl AsRef<str> for LocalNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::LocalNumber;
    use crate::NormalizationError;

    #[test]
    fn try_from_bare_digits() {
        let local = LocalNumber::try_from("242261234").unwrap();
        assert_eq!(local.as_str(), "242261234");
        assert_eq!(local.national_destination_code(), "242");
        assert_eq!(local.override_prefix(), "24226");
    }

    #[test]
    fn try_from_rejects_anything_else() {
        assert_eq!(LocalNumber::try_from(""), Err(NormalizationError::Empty));
        assert_eq!(LocalNumber::try_from("650 123 456"), Err(NormalizationError::InvalidChars));
        assert_eq!(LocalNumber::try_from("+237650123456"), Err(NormalizationError::InvalidChars));
        assert_eq!(
            LocalNumber::try_from("65012345"),
            Err(NormalizationError::TooShort { digits: 8 })
        );
        assert_eq!(
            LocalNumber::try_from("237650123456"),
            Err(NormalizationError::TooLong { digits: 12 })
        );
    }
}
