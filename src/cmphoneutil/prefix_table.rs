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

use std::collections::{HashMap, HashSet};

use log::{trace, warn};

use crate::{interfaces::PrefixClassifier, macros::prefix_range};

use super::{
    enums::{Carrier, LineType},
    errors::UnknownPrefixError,
    helper_constants::{
        NATIONAL_DESTINATION_CODE_LENGTH, OVERRIDE_PREFIX_LENGTH, YOOMEE_LANDLINE_OVERRIDES,
    },
    local_number::LocalNumber,
};

/// Carrier and line type owning a block of the numbering plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PrefixEntry {
    pub carrier: Carrier,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub line_type: LineType,
}

impl PrefixEntry {
    pub const fn new(carrier: Carrier, line_type: LineType) -> Self {
        Self { carrier, line_type }
    }

    fn is_camtel_landline(&self) -> bool {
        self.carrier == Carrier::Camtel && self.line_type == LineType::Landline
    }
}

/// Numbering plan: 3-digit blocks mapped to their owner, plus 5-digit
/// fixed-line sub-blocks reassigned to YooMee.
///
/// A YooMee override is only consulted when the 3-digit block it starts
/// with classifies as Camtel fixed-line. The two sets are declared
/// independently, so an override whose block is missing or owned by
/// anybody else never fires. [`PrefixTable::dead_overrides`] reports such
/// entries and [`PrefixTable::new`] logs them.
#[derive(Debug, Clone)]
pub struct PrefixTable {
    entries: HashMap<&'static str, PrefixEntry>,
    yoomee_landline_overrides: HashSet<&'static str>,
}

impl PrefixTable {
    /// Builds a numbering plan. Keys that are not 3 ASCII digits and
    /// overrides that are not 5 ASCII digits are skipped with a warning;
    /// a repeated key keeps its last entry.
    pub fn new(
        entries: impl IntoIterator<Item = (&'static str, PrefixEntry)>,
        yoomee_landline_overrides: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        let entries = entries
            .into_iter()
            .filter(|(prefix, _)| {
                let ok = is_ascii_digits_of_len(prefix, NATIONAL_DESTINATION_CODE_LENGTH);
                if !ok {
                    warn!("Skipping malformed numbering plan prefix '{prefix}'");
                }
                ok
            })
            .collect();
        let yoomee_landline_overrides = yoomee_landline_overrides
            .into_iter()
            .filter(|prefix| {
                let ok = is_ascii_digits_of_len(prefix, OVERRIDE_PREFIX_LENGTH);
                if !ok {
                    warn!("Skipping malformed override prefix '{prefix}'");
                }
                ok
            })
            .collect();

        let table = Self { entries, yoomee_landline_overrides };
        for prefix in table.dead_overrides() {
            warn!(
                "Override prefix '{prefix}' has no Camtel fixed-line block \
                 in the numbering plan and will never apply"
            );
        }
        table
    }

    /// The Cameroonian numbering plan.
    pub fn cameroon() -> Self {
        let entries = prefix_range!(650 | 651 | 652 | 653 | 654 => Mtn, Mobile)
            .into_iter()
            .chain(prefix_range!(
                670 | 671 | 672 | 673 | 674 | 675 | 676 | 677 | 678 | 679 => Mtn, Mobile
            ))
            .chain(prefix_range!(
                680 | 681 | 682 | 683 | 684 | 685 | 686 | 687 | 688 | 689 => Mtn, Mobile
            ))
            .chain(prefix_range!(655 | 656 | 657 | 658 | 659 => Orange, Mobile))
            .chain(prefix_range!(
                690 | 691 | 692 | 693 | 694 | 695 | 696 | 697 | 698 | 699 => Orange, Mobile
            ))
            .chain(prefix_range!(
                660 | 661 | 662 | 663 | 664 | 665 | 666 | 667 | 668 | 669 => Nexttel, Mobile
            ))
            .chain(prefix_range!(624 => Yoomee, Mobile))
            .chain(prefix_range!(
                620 | 621 | 622 | 623 | 625 | 626 | 627 | 628 | 629 => Camtel, Mobile
            ))
            .chain(prefix_range!(
                222 | 223 | 227 | 229 | 232 | 233 | 242 | 243 | 244 => Camtel, Landline
            ));

        Self::new(entries, YOOMEE_LANDLINE_OVERRIDES)
    }

    pub fn get(&self, prefix: &str) -> Option<PrefixEntry> {
        self.entries.get(prefix).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over every 3-digit block and its owner, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, PrefixEntry)> + '_ {
        self.entries.iter().map(|(prefix, entry)| (*prefix, *entry))
    }

    pub fn is_yoomee_landline_override(&self, prefix: &str) -> bool {
        self.yoomee_landline_overrides.contains(prefix)
    }

    /// Override prefixes whose 3-digit block is absent or is not Camtel
    /// fixed-line, sorted.
    pub fn dead_overrides(&self) -> Vec<&'static str> {
        let mut dead: Vec<_> = self
            .yoomee_landline_overrides
            .iter()
            .copied()
            .filter(|prefix| {
                !self
                    .get(&prefix[..NATIONAL_DESTINATION_CODE_LENGTH])
                    .is_some_and(|entry| entry.is_camtel_landline())
            })
            .collect();
        dead.sort_unstable();
        dead
    }
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self::cameroon()
    }
}

impl PrefixClassifier for PrefixTable {
    fn classify(&self, local_number: &LocalNumber) -> Result<PrefixEntry, UnknownPrefixError> {
        let prefix = local_number.national_destination_code();
        let Some(entry) = self.get(prefix) else {
            trace!("Number '{local_number}' has unknown prefix '{prefix}'.");
            return Err(UnknownPrefixError { prefix: prefix.to_owned() });
        };
        if entry.is_camtel_landline()
            && self.is_yoomee_landline_override(local_number.override_prefix())
        {
            trace!(
                "Number '{local_number}' is a YooMee fixed line inside Camtel block '{prefix}'."
            );
            return Ok(PrefixEntry::new(Carrier::Yoomee, LineType::Landline));
        }
        trace!("Number '{local_number}' is a {} {} number.", entry.carrier, entry.line_type);
        Ok(entry)
    }
}

fn is_ascii_digits_of_len(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::{PrefixEntry, PrefixTable};
    use crate::{Carrier, LineType, LocalNumber, PrefixClassifier};

    fn classify(table: &PrefixTable, number: &str) -> Option<PrefixEntry> {
        table.classify(&LocalNumber::try_from(number).unwrap()).ok()
    }

    #[test]
    fn cameroon_plan_size() {
        let table = PrefixTable::cameroon();
        // 5 + 10 + 10 MTN, 5 + 10 Orange, 10 Nexttel, 1 YooMee,
        // 9 Camtel mobile and 9 Camtel fixed-line blocks.
        assert_eq!(table.len(), 69);
        assert!(table.dead_overrides().is_empty());
    }

    #[test]
    fn fixe_is_never_assigned() {
        let table = PrefixTable::cameroon();
        assert!(table.iter().all(|(_, entry)| entry.carrier != Carrier::Fixe));
        assert!(table.iter().all(|(_, entry)| entry.carrier != Carrier::Unknown));
    }

    #[test]
    fn override_applies_only_to_listed_sub_blocks() {
        let table = PrefixTable::cameroon();
        let yoomee = PrefixEntry::new(Carrier::Yoomee, LineType::Landline);
        let camtel = PrefixEntry::new(Carrier::Camtel, LineType::Landline);
        assert_eq!(classify(&table, "242261234"), Some(yoomee));
        assert_eq!(classify(&table, "242271234"), Some(yoomee));
        assert_eq!(classify(&table, "242281234"), Some(camtel));
        assert_eq!(classify(&table, "242111234"), Some(camtel));
        assert_eq!(classify(&table, "243261234"), Some(camtel));
    }

    #[test]
    fn unknown_prefix_reports_block() {
        let table = PrefixTable::cameroon();
        let err = table
            .classify(&LocalNumber::try_from("999123456").unwrap())
            .unwrap_err();
        assert_eq!(err.prefix, "999");
    }

    #[test]
    fn dead_overrides_are_reported() {
        let table = PrefixTable::new(
            [
                ("242", PrefixEntry::new(Carrier::Camtel, LineType::Landline)),
                ("650", PrefixEntry::new(Carrier::Mtn, LineType::Mobile)),
            ],
            ["24226", "65012", "30000"],
        );
        assert_eq!(table.dead_overrides(), vec!["30000", "65012"]);
        // A dead override never changes the carrier.
        assert_eq!(
            classify(&table, "650123456"),
            Some(PrefixEntry::new(Carrier::Mtn, LineType::Mobile))
        );
    }

    #[test]
    fn malformed_keys_are_skipped() {
        let table = PrefixTable::new(
            [
                ("65", PrefixEntry::new(Carrier::Mtn, LineType::Mobile)),
                ("6a0", PrefixEntry::new(Carrier::Mtn, LineType::Mobile)),
                ("690", PrefixEntry::new(Carrier::Orange, LineType::Mobile)),
            ],
            ["2422"],
        );
        assert_eq!(table.len(), 1);
        assert!(!table.is_yoomee_landline_override("2422"));
    }
}
