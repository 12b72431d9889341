use std::borrow::Cow;

use crate::string_util::{split_groups, strip_cow_prefix_if_longer};

use super::{
    enums::{LineType, PhoneNumberFormat},
    helper_constants::{
        COUNTRY_CODE, DISPLAY_GROUPS, INTERNATIONAL_PREFIX_WITH_COUNTRY_CODE, LOCAL_NUMBER_LENGTH,
        PLUS_SIGN,
    },
    local_number::LocalNumber,
};

/// Removes the `00237` or `237` country code from a digit-only string.
///
/// The bare `237` form is only stripped when more than 9 digits are
/// present, so a 9-digit local number starting with `237` stays intact.
pub(super) fn strip_country_code(digits: Cow<'_, str>) -> Cow<'_, str> {
    let digits =
        match strip_cow_prefix_if_longer(digits, INTERNATIONAL_PREFIX_WITH_COUNTRY_CODE, 0) {
            Ok(stripped) => return stripped,
            Err(untouched) => untouched,
        };
    strip_cow_prefix_if_longer(digits, COUNTRY_CODE, LOCAL_NUMBER_LENGTH)
        .unwrap_or_else(|untouched| untouched)
}

/// Renders a local number. `Display` falls back to the ungrouped E.164
/// form for numbers of unknown line type.
pub(super) fn format_local_number(
    local_number: &LocalNumber,
    line_type: LineType,
    number_format: PhoneNumberFormat,
) -> String {
    let local = local_number.as_str();
    match number_format {
        PhoneNumberFormat::Local => local.to_owned(),
        PhoneNumberFormat::E164 => fast_cat::concat_str!(PLUS_SIGN, COUNTRY_CODE, local),
        PhoneNumberFormat::Display => {
            let groups = match line_type {
                LineType::Mobile | LineType::Landline => split_groups(local, DISPLAY_GROUPS),
                LineType::Unknown => None,
            };
            match groups {
                Some([ndc, first, second, third]) => fast_cat::concat_str!(
                    PLUS_SIGN, COUNTRY_CODE, " ", ndc, " ", first, " ", second, " ", third
                ),
                None => fast_cat::concat_str!(PLUS_SIGN, COUNTRY_CODE, local),
            }
        }
    }
}
