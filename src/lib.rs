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

//! Validation of Cameroonian (+237) phone numbers.
//!
//! Numbers in free human-entered formats are reduced to the 9-digit local
//! form, classified by carrier and line type using the national numbering
//! plan, and rendered as E.164 or grouped display strings.
//!
//! ```
//! use cmphonenumber::{CM_PHONE_UTIL, Carrier, LineType};
//!
//! let result = CM_PHONE_UTIL.validate("+237 650 12 34 56");
//! assert!(result.is_valid());
//! assert_eq!(result.carrier(), Carrier::Mtn);
//! assert_eq!(result.line_type(), LineType::Mobile);
//! assert_eq!(result.e164(), Some("+237650123456"));
//! ```

mod interfaces;
mod cmphoneutil;
pub(crate) mod string_util;

/// Shortcuts for declaring numbering plan ranges.
mod macros;


pub use cmphoneutil::{
    CM_PHONE_UTIL,
    cmphoneutil::CameroonPhoneUtil,
    enums::{Carrier, CarrierType, ErrorCode, LineType, PhoneNumberFormat},
    errors::{NormalizationError, UnknownPrefixError, ValidationError},
    local_number::LocalNumber,
    prefix_table::{PrefixEntry, PrefixTable},
    validation_result::{
        BatchEntry, BatchResult, BatchSummary, InvalidNumber, ValidNumber, ValidationResult,
    },
};
pub use interfaces::PrefixClassifier;
