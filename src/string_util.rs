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

use std::borrow::Cow;

/// Strips `prefix` from the given string Cow when it starts with it and the
/// whole string is strictly longer than `min_len_exclusive` bytes.
/// Returns `Err` with the untouched Cow otherwise, so callers can try
/// another prefix without cloning.
///
/// Calls `drain` if string is owned and re-slices if string is borrowed.
pub fn strip_cow_prefix_if_longer<'a>(
    cow: Cow<'a, str>,
    prefix: &str,
    min_len_exclusive: usize,
) -> Result<Cow<'a, str>, Cow<'a, str>> {
    if cow.len() <= min_len_exclusive || !cow.starts_with(prefix) {
        return Err(cow);
    }
    match cow {
        Cow::Borrowed(s) => Ok(Cow::Borrowed(&s[prefix.len()..])),
        Cow::Owned(mut s) => {
            s.drain(..prefix.len());
            Ok(Cow::Owned(s))
        }
    }
}

/// Splits an ASCII string into consecutive chunks of the given widths.
/// Returns `None` when the widths don't add up to the string length.
pub fn split_groups<'a, const N: usize>(s: &'a str, widths: [usize; N]) -> Option<[&'a str; N]> {
    if !s.is_ascii() || widths.iter().sum::<usize>() != s.len() {
        return None;
    }
    let mut groups = [""; N];
    let mut rest = s;
    for (group, width) in groups.iter_mut().zip(widths) {
        let (head, tail) = rest.split_at(width);
        *group = head;
        rest = tail;
    }
    Some(groups)
}
