use crate::{LocalNumber, PrefixEntry, UnknownPrefixError};

/// Numbering plan lookup API used to isolate the prefix data from the
/// validation pipeline, so a different plan can be swapped in easily.
pub trait PrefixClassifier {
    /// Returns the carrier and line type owning the leading digits of the
    /// given local number, or the offending 3-digit prefix if no carrier
    /// owns it.
    fn classify(&self, local_number: &LocalNumber) -> Result<PrefixEntry, UnknownPrefixError>;
}
