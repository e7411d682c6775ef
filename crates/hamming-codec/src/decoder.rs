use core::fmt;

use hamming_core::{DATA_POSITIONS, Position, PositionKind, Selection};

/// Outcome of decoding one selection. Returned by value and threaded by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeResult {
    pub error_detected: bool,
    /// The single position that disagrees with the nearest codeword
    pub error_position: Option<Position>,
    /// Value after correction, 0..15
    pub corrected_value: u8,
    /// Value read straight from the selection's data positions, before correction
    pub apparent_value: u8,
    /// XOR of all selected position ids
    pub syndrome: u8,
}

impl DecodeResult {
    /// Error position as a raw id, 0 when no error was detected
    #[inline]
    pub fn error_position_id(&self) -> u8 {
        self.error_position.map_or(0, Position::id)
    }
}

impl fmt::Display for DecodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_position {
            Some(p) => write!(
                f,
                "error at {:?}, value {} corrected to {}",
                p, self.apparent_value, self.corrected_value
            ),
            None => write!(f, "no error, value {}", self.corrected_value),
        }
    }
}

/// XOR of the ids of all selected positions. Zero iff the selection is a valid codeword.
#[inline]
pub fn syndrome(selection: &Selection) -> u8 {
    selection.iter().fold(0, |acc, p| acc ^ p.id())
}

/// Value spelled by the data positions present in `selection`
pub fn read_value(selection: &Selection) -> u8 {
    DATA_POSITIONS
        .iter()
        .filter(|&&p| selection.contains(p))
        .filter_map(|p| p.data_bit_value())
        .fold(0, |acc, bit| acc | bit)
}

/// Decodes an arbitrary selection. Total over all 128 subsets of the positions.
pub fn decode(selection: &Selection) -> DecodeResult {
    let syndrome = syndrome(selection);
    let apparent_value = read_value(selection);

    let result = match Position::new(syndrome) {
        // Syndrome 0: valid codeword
        Err(_) => DecodeResult {
            error_detected: false,
            error_position: None,
            corrected_value: apparent_value,
            apparent_value,
            syndrome,
        },
        Ok(pos) => {
            let corrected_value = match pos.kind() {
                PositionKind::Parity => apparent_value,
                PositionKind::Data => apparent_value ^ pos.data_bit_value().unwrap_or(0),
            };
            tracing::debug!("decode {}: syndrome {} points at {:?}", selection, syndrome, pos);
            DecodeResult {
                error_detected: true,
                error_position: Some(pos),
                corrected_value,
                apparent_value,
                syndrome,
            }
        }
    };

    tracing::trace!("decode {} -> {}", selection, result);
    result
}
