/// This macro expands a list of 3-digit prefixes into an array of
/// `(&'static str, PrefixEntry)` pairs sharing the same entry.
///
/// Prefixes are spelled out at compile time through `stringify!`, so
/// `prefix_range!(650 | 651 | 652 => Mtn, Mobile)` yields entries for
/// `"650"`, `"651"` and `"652"` without any allocation.
macro_rules! prefix_range {
    ($($prefix:literal)|+ => $carrier:ident, $line_type:ident) => {
        [$(
            (
                stringify!($prefix),
                $crate::PrefixEntry::new(
                    $crate::Carrier::$carrier,
                    $crate::LineType::$line_type,
                ),
            )
        ),+]
    };
}

pub(crate) use prefix_range;
