mod helper_constants;
mod helper_functions;
mod phone_number_regexps;
pub mod errors;
pub mod enums;
pub mod cmphoneutil;
pub mod local_number;
pub mod prefix_table;
pub mod validation_result;

use std::sync::LazyLock;

use crate::cmphoneutil::cmphoneutil::CameroonPhoneUtil;

/// Process-wide validator over the shipped Cameroonian numbering plan.
/// Built on first use and read-only afterwards.
pub static CM_PHONE_UTIL: LazyLock<CameroonPhoneUtil> = LazyLock::new(|| {
    CameroonPhoneUtil::new()
});
