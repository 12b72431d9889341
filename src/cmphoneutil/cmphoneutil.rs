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

use log::{debug, trace};

use super::{
    enums::{Carrier, CarrierType, LineType, PhoneNumberFormat},
    errors::{NormalizationError, UnknownPrefixError, ValidationError},
    helper_constants::WHITESPACE_CHARS,
    helper_functions::{format_local_number, strip_country_code},
    local_number::LocalNumber,
    phone_number_regexps::PhoneNumberRegExps,
    prefix_table::{PrefixEntry, PrefixTable},
    validation_result::{BatchEntry, BatchResult, ValidNumber, ValidationResult},
};
use crate::interfaces::PrefixClassifier;

pub struct CameroonPhoneUtil {
    /// An API for numbering plan lookups.
    classifier: Box<dyn PrefixClassifier + Send + Sync>,

    /// Helper holding the character-set and separator regular expressions.
    reg_exps: PhoneNumberRegExps,
}

impl CameroonPhoneUtil {
    pub(super) fn new() -> Self {
        Self::new_for_prefix_table(PrefixTable::cameroon())
    }

    /// Builds a validator over a custom numbering plan.
    pub fn new_for_prefix_table(prefix_table: PrefixTable) -> Self {
        Self::new_for_classifier(prefix_table)
    }

    pub fn new_for_classifier(classifier: impl PrefixClassifier + Send + Sync + 'static) -> Self {
        Self {
            classifier: Box::new(classifier),
            reg_exps: PhoneNumberRegExps::new(),
        }
    }

    /// Reduces a raw, human-entered number to its 9-digit local form.
    ///
    /// Leading and trailing whitespace (ECMAScript's set, see
    /// `WHITESPACE_CHARS`) is ignored. The remaining text may hold only
    /// ASCII digits, that whitespace and `+ - . ( ) /`; the character
    /// set is checked before anything is stripped. A `00237` prefix is
    /// always removed, a bare `237` only when more than 9 digits are
    /// present.
    pub fn normalize(&self, phone_number: &str) -> Result<LocalNumber, NormalizationError> {
        let phone_number = phone_number.trim_matches(&WHITESPACE_CHARS[..]);
        if phone_number.is_empty() {
            return Err(NormalizationError::Empty);
        }
        if !self.reg_exps.valid_chars_pattern.is_match(phone_number) {
            trace!("Number '{phone_number}' contains characters outside of digits and separators.");
            return Err(NormalizationError::InvalidChars);
        }
        let digits = self.reg_exps.non_digits_pattern.replace_all(phone_number, "");
        let local_digits = strip_country_code(digits);
        LocalNumber::from_digits(local_digits).inspect_err(|err| {
            trace!("Number '{phone_number}' rejected: {err}");
        })
    }

    /// Finds the carrier and line type owning the number's prefix.
    pub fn classify(&self, local_number: &LocalNumber) -> Result<PrefixEntry, UnknownPrefixError> {
        self.classifier.classify(local_number)
    }

    pub fn format(
        &self,
        local_number: &LocalNumber,
        line_type: LineType,
        number_format: PhoneNumberFormat,
    ) -> String {
        format_local_number(local_number, line_type, number_format)
    }

    fn parse(&self, phone_number: &str) -> Result<ValidNumber, ValidationError> {
        let local_number = self.normalize(phone_number)?;
        let PrefixEntry { carrier, line_type } = self.classify(&local_number)?;
        let e164 = self.format(&local_number, line_type, PhoneNumberFormat::E164);
        let display = self.format(&local_number, line_type, PhoneNumberFormat::Display);
        Ok(ValidNumber { carrier, line_type, local_number, e164, display })
    }

    /// Validates a raw phone number. Failures are reported in the result,
    /// never as a panic: checks run in the order empty, characters, length,
    /// prefix and the first one failing decides the error code.
    pub fn validate(&self, phone_number: &str) -> ValidationResult {
        self.parse(phone_number).into()
    }

    /// Same as [`Self::validate`], treating an absent value as empty input.
    pub fn validate_optional(&self, phone_number: Option<&str>) -> ValidationResult {
        self.validate(phone_number.unwrap_or_default())
    }

    /// Returns `true` if the number is valid and belongs to `carrier`.
    pub fn is_carrier(&self, phone_number: &str, carrier: Carrier) -> bool {
        self.parse(phone_number).is_ok_and(|number| number.carrier == carrier)
    }

    /// Returns `true` if the number is a valid mobile number.
    pub fn is_mobile(&self, phone_number: &str) -> bool {
        self.parse(phone_number).is_ok_and(|number| number.line_type == LineType::Mobile)
    }

    /// Normalises a number to `+237XXXXXXXXX`, `None` if invalid.
    pub fn to_e164(&self, phone_number: &str) -> Option<String> {
        self.parse(phone_number).ok().map(|number| number.e164)
    }

    /// Returns the 9-digit local number, `None` if invalid.
    pub fn to_local_number(&self, phone_number: &str) -> Option<String> {
        self.parse(phone_number)
            .ok()
            .map(|number| number.local_number.into_string())
    }

    /// Validates every number in order, keeping each result next to its
    /// input and counting valid numbers per carrier.
    pub fn validate_batch<I, S>(&self, phone_numbers: I) -> BatchResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let batch: BatchResult = phone_numbers
            .into_iter()
            .map(|phone_number| {
                let original = phone_number.as_ref();
                BatchEntry {
                    result: self.validate(original),
                    original: original.to_owned(),
                }
            })
            .collect();
        debug!(
            "Validated batch of {}: {} valid, {} invalid",
            batch.summary.total, batch.summary.valid_count, batch.summary.invalid_count
        );
        batch
    }

    /// See [`Carrier::to_carrier_type`].
    pub fn to_carrier_type(&self, carrier: Carrier) -> Option<CarrierType> {
        carrier.to_carrier_type()
    }
}
