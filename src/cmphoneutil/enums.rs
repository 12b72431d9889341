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

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Operators owning a block of the Cameroonian numbering plan.
///
/// The string form (`Display`, `FromStr`, serde) is the `*_CM` name used
/// on the wire, e.g. `MTN_CM`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    EnumIter, Display, AsRefStr, IntoStaticStr, EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Carrier {
    /// **MTN Cameroon.** Mobile blocks 650-654 and 670-689.
    #[strum(serialize = "MTN_CM")]
    #[cfg_attr(feature = "serde", serde(rename = "MTN_CM"))]
    Mtn,
    /// **Orange Cameroon.** Mobile blocks 655-659 and 690-699.
    #[strum(serialize = "ORANGE_CM")]
    #[cfg_attr(feature = "serde", serde(rename = "ORANGE_CM"))]
    Orange,
    /// **Camtel.** The incumbent: mobile blocks 620-629 (except 624)
    /// and every fixed-line block.
    #[strum(serialize = "CAMTEL_CM")]
    #[cfg_attr(feature = "serde", serde(rename = "CAMTEL_CM"))]
    Camtel,
    /// **Nexttel.** Mobile block 660-669.
    #[strum(serialize = "NEXTTEL_CM")]
    #[cfg_attr(feature = "serde", serde(rename = "NEXTTEL_CM"))]
    Nexttel,
    /// **YooMee.** Mobile block 624 and the fixed-line sub-blocks
    /// 24226 and 24227 carved out of Camtel's 242.
    #[strum(serialize = "YOOMEE_CM")]
    #[cfg_attr(feature = "serde", serde(rename = "YOOMEE_CM"))]
    Yoomee,
    /// **Generic fixed-line operator.**
    /// Not assigned any block in the shipped plan.
    #[strum(serialize = "FIXE_CM")]
    #[cfg_attr(feature = "serde", serde(rename = "FIXE_CM"))]
    Fixe,
    /// **Unknown.** Reported by every failed validation.
    #[strum(serialize = "UNKNOWN_CM")]
    #[cfg_attr(feature = "serde", serde(rename = "UNKNOWN_CM"))]
    Unknown,
}

impl Carrier {
    /// Projects the carrier onto the reduced [`CarrierType`] vocabulary.
    /// Carriers with no equivalent (`Fixe`, `Unknown`) project to `None`.
    pub fn to_carrier_type(self) -> Option<CarrierType> {
        match self {
            Carrier::Mtn => Some(CarrierType::Mtn),
            Carrier::Orange => Some(CarrierType::Orange),
            Carrier::Camtel => Some(CarrierType::Camtel),
            Carrier::Nexttel => Some(CarrierType::Nexttel),
            Carrier::Yoomee => Some(CarrierType::Yoomee),
            Carrier::Fixe | Carrier::Unknown => None,
        }
    }
}

/// Carrier vocabulary of downstream consumers. Only real, addressable
/// operators are present.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    EnumIter, Display, AsRefStr, IntoStaticStr, EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarrierType {
    #[strum(serialize = "MTN_CM")]
    #[cfg_attr(feature = "serde", serde(rename = "MTN_CM"))]
    Mtn,
    #[strum(serialize = "ORANGE_CM")]
    #[cfg_attr(feature = "serde", serde(rename = "ORANGE_CM"))]
    Orange,
    #[strum(serialize = "CAMTEL_CM")]
    #[cfg_attr(feature = "serde", serde(rename = "CAMTEL_CM"))]
    Camtel,
    #[strum(serialize = "NEXTTEL_CM")]
    #[cfg_attr(feature = "serde", serde(rename = "NEXTTEL_CM"))]
    Nexttel,
    #[strum(serialize = "YOOMEE_CM")]
    #[cfg_attr(feature = "serde", serde(rename = "YOOMEE_CM"))]
    Yoomee,
}

/// Categorizes phone numbers based on the kind of line behind them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    EnumIter, Display, AsRefStr, IntoStaticStr, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LineType {
    /// **Mobile numbers.**
    /// These numbers are assigned to wireless devices like mobile phones.
    Mobile,
    /// **Fixed-line numbers.**
    /// Traditional landline numbers tied to a specific geographic location.
    Landline,
    /// **Unknown type.**
    /// Reported by every failed validation.
    Unknown,
}

/// Machine-readable reason of a failed validation.
///
/// Checks run in declaration order of [`ValidationError`](crate::ValidationError)
/// (empty, characters, length, prefix), so the first failing check decides
/// the reported code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    EnumIter, Display, AsRefStr, IntoStaticStr, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ErrorCode {
    /// Nothing but whitespace was given.
    Empty,
    /// Fewer than 9 digits remain once the country code is removed.
    TooShort,
    /// More than 9 digits remain once the country code is removed.
    TooLong,
    /// A character other than an ASCII digit or an accepted separator
    /// was found.
    InvalidChars,
    /// The first 3 digits are not assigned to any carrier.
    UnknownPrefix,
}

/// Defines the renderings of a validated local number.
///
/// For the MTN number `650123456`:
/// - **E164**: `+237650123456`
/// - **Display**: `+237 650 12 34 56`
/// - **Local**: `650123456`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PhoneNumberFormat {
    /// **E.164 format.**
    /// `+237` immediately followed by the 9 local digits.
    E164,
    /// **Display format.**
    /// E.164 with the local digits grouped 3-2-2-2 by single spaces.
    Display,
    /// **Local format.**
    /// The bare 9 digits, as dialled inside Cameroon.
    Local,
}
