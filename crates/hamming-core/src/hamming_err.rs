use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HammingErr {
    /// Transmitted value outside 1..15
    InvalidValue { value: u64 },
    /// Position id outside 1..7
    InvalidPosition { id: u64 },
    /// Parity group id not one of 1, 2, 4
    InvalidParityGroup { id: u64 },
    InvalidSelection { input: String, reason: &'static str },
    /// A decode result was combined with a selection it was not computed from
    Inconsistency { field: &'static str, reason: &'static str },
}

impl fmt::Display for HammingErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HammingErr::InvalidValue { value } => write!(f, "invalid value {}, expected 1..15", value),
            HammingErr::InvalidPosition { id } => write!(f, "invalid position {}, expected 1..7", id),
            HammingErr::InvalidParityGroup { id } => write!(f, "invalid parity group {}, expected 1, 2 or 4", id),
            HammingErr::InvalidSelection { input, reason } => write!(f, "invalid selection `{}`: {}", input, reason),
            HammingErr::Inconsistency { field, reason } => write!(f, "inconsistent {}: {}", field, reason),
        }
    }
}

impl std::error::Error for HammingErr {}

/// Checks whether a raw integer lies within an inclusive range.
/// Evaluates to Ok(value) or to Err(HammingErr::$variant { $field: value })
#[macro_export]
macro_rules! expect_in_range {
    ($value:expr, $range:expr, $variant:ident, $field:ident) => {{
        let val = $value;
        if ($range).contains(&val) {
            Ok(val)
        } else {
            Err($crate::HammingErr::$variant { $field: val as u64 })
        }
    }};
}
