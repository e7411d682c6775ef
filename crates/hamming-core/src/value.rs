use core::fmt;

use crate::expect_in_range;
use crate::hamming_err::HammingErr;
use crate::position::MAX_VALUE;

/// A value that can be sent through the code, 1..15.
/// 0 is a valid decoder output (empty selection) but never a value to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DataValue(u8);

impl DataValue {
    pub fn new(value: u8) -> Result<Self, HammingErr> {
        let value = expect_in_range!(value, 1..=MAX_VALUE, InvalidValue, value)?;
        Ok(DataValue(value))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Iterates all sendable values in ascending order
    pub fn all() -> impl Iterator<Item = DataValue> {
        (1..=MAX_VALUE).map(DataValue)
    }
}

impl From<DataValue> for u8 {
    fn from(v: DataValue) -> u8 {
        v.0
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
