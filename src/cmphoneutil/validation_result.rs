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

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::{
    enums::{Carrier, ErrorCode, LineType},
    errors::ValidationError,
    local_number::LocalNumber,
};

/// A number that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNumber {
    pub(super) carrier: Carrier,
    pub(super) line_type: LineType,
    pub(super) local_number: LocalNumber,
    pub(super) e164: String,
    pub(super) display: String,
}

impl ValidNumber {
    pub fn carrier(&self) -> Carrier {
        self.carrier
    }

    pub fn line_type(&self) -> LineType {
        self.line_type
    }

    pub fn local_number(&self) -> &LocalNumber {
        &self.local_number
    }

    /// `+237` followed by the local number.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// `+237 DDD DD DD DD`.
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// A number rejected by the first failing check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNumber {
    pub(super) error: ValidationError,
}

impl InvalidNumber {
    pub fn error(&self) -> &ValidationError {
        &self.error
    }

    pub fn code(&self) -> ErrorCode {
        self.error.code()
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Outcome of validating one raw string. Exactly one of the variants is
/// produced per call; success and failure data never coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(ValidNumber),
    Invalid(InvalidNumber),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// Owning carrier, `Carrier::Unknown` for invalid numbers.
    pub fn carrier(&self) -> Carrier {
        match self {
            ValidationResult::Valid(number) => number.carrier,
            ValidationResult::Invalid(_) => Carrier::Unknown,
        }
    }

    /// Line type, `LineType::Unknown` for invalid numbers.
    pub fn line_type(&self) -> LineType {
        match self {
            ValidationResult::Valid(number) => number.line_type,
            ValidationResult::Invalid(_) => LineType::Unknown,
        }
    }

    pub fn local_number(&self) -> Option<&str> {
        self.as_valid().map(|number| number.local_number.as_str())
    }

    pub fn e164(&self) -> Option<&str> {
        self.as_valid().map(ValidNumber::e164)
    }

    pub fn display(&self) -> Option<&str> {
        self.as_valid().map(ValidNumber::display)
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.as_invalid().map(InvalidNumber::error)
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        self.as_invalid().map(InvalidNumber::code)
    }

    pub fn error_message(&self) -> Option<String> {
        self.as_invalid().map(InvalidNumber::message)
    }

    pub fn as_valid(&self) -> Option<&ValidNumber> {
        match self {
            ValidationResult::Valid(number) => Some(number),
            ValidationResult::Invalid(_) => None,
        }
    }

    pub fn as_invalid(&self) -> Option<&InvalidNumber> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(number) => Some(number),
        }
    }

    pub fn into_result(self) -> Result<ValidNumber, ValidationError> {
        match self {
            ValidationResult::Valid(number) => Ok(number),
            ValidationResult::Invalid(number) => Err(number.error),
        }
    }
}

impl From<Result<ValidNumber, ValidationError>> for ValidationResult {
    fn from(value: Result<ValidNumber, ValidationError>) -> Self {
        match value {
            Ok(number) => ValidationResult::Valid(number),
            Err(error) => ValidationResult::Invalid(InvalidNumber { error }),
        }
    }
}

/// A validation result paired with the input that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchEntry {
    pub original: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub result: ValidationResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BatchSummary {
    pub total: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    /// Valid numbers per carrier. Every carrier has a slot, zero or not.
    pub by_carrier: BTreeMap<Carrier, usize>,
}

impl BatchSummary {
    pub fn count_for(&self, carrier: Carrier) -> usize {
        self.by_carrier.get(&carrier).copied().unwrap_or(0)
    }
}

impl Default for BatchSummary {
    fn default() -> Self {
        Self {
            total: 0,
            valid_count: 0,
            invalid_count: 0,
            by_carrier: Carrier::iter().map(|carrier| (carrier, 0)).collect(),
        }
    }
}

/// Batch outcome. `valid` and `invalid` keep the relative input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchResult {
    pub valid: Vec<BatchEntry>,
    pub invalid: Vec<BatchEntry>,
    pub summary: BatchSummary,
}

impl BatchResult {
    pub fn push(&mut self, entry: BatchEntry) {
        self.summary.total += 1;
        match &entry.result {
            ValidationResult::Valid(number) => {
                self.summary.valid_count += 1;
                *self.summary.by_carrier.entry(number.carrier).or_insert(0) += 1;
                self.valid.push(entry);
            }
            ValidationResult::Invalid(_) => {
                self.summary.invalid_count += 1;
                self.invalid.push(entry);
            }
        }
    }
}

impl FromIterator<BatchEntry> for BatchResult {
    fn from_iter<T: IntoIterator<Item = BatchEntry>>(iter: T) -> Self {
        let mut batch = BatchResult::default();
        iter.into_iter().for_each(|entry| batch.push(entry));
        batch
    }
}

impl Extend<BatchEntry> for BatchResult {
    fn extend<T: IntoIterator<Item = BatchEntry>>(&mut self, iter: T) {
        iter.into_iter().for_each(|entry| self.push(entry));
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let field_count = if self.is_valid() { 6 } else { 5 };
        let mut state = serializer.serialize_struct("ValidationResult", field_count)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("carrier", &self.carrier())?;
        state.serialize_field("type", &self.line_type())?;
        match self {
            ValidationResult::Valid(number) => {
                state.serialize_field("localNumber", &number.local_number)?;
                state.serialize_field("e164", &number.e164)?;
                state.serialize_field("display", &number.display)?;
            }
            ValidationResult::Invalid(number) => {
                state.serialize_field("errorCode", &number.code())?;
                state.serialize_field("errorMessage", &number.message())?;
            }
        }
        state.end()
    }
}
