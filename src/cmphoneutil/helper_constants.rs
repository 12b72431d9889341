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

/// Country calling code of Cameroon.
pub const COUNTRY_CODE: &'static str = "237";
pub const PLUS_SIGN: &'static str = "+";
/// International call prefix `00` followed by the country code.
pub const INTERNATIONAL_PREFIX_WITH_COUNTRY_CODE: &'static str = "00237";

/// Every subscriber number has exactly this many digits once the country
/// code is removed.
pub const LOCAL_NUMBER_LENGTH: usize = 9;
/// Length of the block identifying a carrier in the numbering plan.
pub const NATIONAL_DESTINATION_CODE_LENGTH: usize = 3;
/// Length of the sub-blocks overriding a fixed-line block's carrier.
pub const OVERRIDE_PREFIX_LENGTH: usize = 5;

/// Digit grouping of the display format: `DDD DD DD DD`.
pub const DISPLAY_GROUPS: [usize; 4] = [3, 2, 2, 2];

/// Whitespace trimmed from the input and accepted between digits: the
/// ECMAScript WhiteSpace and LineTerminator sets. Unlike Unicode White_Space
/// this includes U+FEFF and excludes U+0085.
pub const WHITESPACE_CHARS: [char; 25] = [
    '\t', '\n', '\u{0B}', '\u{0C}', '\r', ' ', '\u{A0}', '\u{1680}',
    '\u{2000}', '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}',
    '\u{2006}', '\u{2007}', '\u{2008}', '\u{2009}', '\u{200A}',
    '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}', '\u{3000}', '\u{FEFF}',
];

// Punctuation accepted between digits, as a regex class fragment.
pub const VALID_PUNCTUATION: &'static str = r"+\-./()";
pub const DIGITS: &'static str = "0-9";

/// Fixed-line sub-blocks of Camtel's 242 assigned to YooMee.
///
/// Each entry only takes effect when its first 3 digits classify as
/// Camtel fixed-line in the base table; see `PrefixTable::dead_overrides`.
pub const YOOMEE_LANDLINE_OVERRIDES: [&'static str; 2] = ["24226", "24227"];
