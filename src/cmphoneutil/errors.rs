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

use thiserror::Error;

use super::enums::ErrorCode;

/// Possible outcomes when reducing raw input to a 9-digit local number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NormalizationError {
    /// Input is absent or blank.
    #[error("Phone number is empty.")]
    Empty,
    /// Input holds something besides ASCII digits, whitespace and `+-.()/`.
    #[error("Phone number contains invalid characters.")]
    InvalidChars,
    #[error("Phone number too short ({digits} digit(s), 9 required after country code).")]
    TooShort { digits: usize },
    #[error("Phone number too long ({digits} digits, 9 required after country code).")]
    TooLong { digits: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("Unknown prefix \"{prefix}\", not recognized by any Cameroonian carrier.")]
pub struct UnknownPrefixError {
    pub prefix: String,
}

/// Every way a raw string can fail to be a Cameroonian number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("{0}")]
    Normalization(#[from] NormalizationError),
    #[error("{0}")]
    UnknownPrefix(#[from] UnknownPrefixError),
}

impl NormalizationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            NormalizationError::Empty => ErrorCode::Empty,
            NormalizationError::InvalidChars => ErrorCode::InvalidChars,
            NormalizationError::TooShort { .. } => ErrorCode::TooShort,
            NormalizationError::TooLong { .. } => ErrorCode::TooLong,
        }
    }
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::Normalization(err) => err.code(),
            ValidationError::UnknownPrefix(_) => ErrorCode::UnknownPrefix,
        }
    }
}
