use hamming_core::{Codeword, DATA_POSITIONS, DataValue, HammingErr, ParityGroup, Position, PositionSet};

/// Parity over the data positions checked by `group`, ignoring the parity
/// position itself. 1 if an odd number of those data positions carry a set bit.
pub fn parity_bit(value: u8, group: ParityGroup) -> u8 {
    data_appearances(value, group) & 1
}

/// Number of data positions checked by `group` whose value bit is set in `value`
pub fn data_appearances(value: u8, group: ParityGroup) -> u8 {
    DATA_POSITIONS
        .iter()
        .filter(|p| p.in_group(group) && carries_bit(value, **p))
        .count() as u8
}

#[inline]
fn carries_bit(value: u8, p: Position) -> bool {
    p.data_bit_value().is_some_and(|bit| value & bit != 0)
}

/// Data positions that are on for `value`, parity positions left out
pub fn data_bits(value: u8) -> PositionSet {
    DATA_POSITIONS.iter().copied().filter(|&p| carries_bit(value, p)).collect()
}

/// Codeword for any 4-bit value, 0 included. 0 yields the empty codeword.
pub fn codeword_for(value: u8) -> Codeword {
    debug_assert!(value <= 15, "codeword_for: value {} does not fit in 4 bits", value);
    let mut cw = data_bits(value);
    for group in ParityGroup::ALL {
        if parity_bit(value, group) == 1 {
            cw.insert(group.parity_position());
        }
    }
    cw
}

/// Encodes an already validated value
pub fn encode_value(value: DataValue) -> Codeword {
    let cw = codeword_for(value.get());
    tracing::trace!("encode {} -> {} ({})", value, cw, cw.to_bitstr());
    cw
}

/// Encodes `value` (1..15) into the set of on-positions of a valid codeword
pub fn encode(value: u8) -> Result<Codeword, HammingErr> {
    let value = DataValue::new(value)?;
    Ok(encode_value(value))
}

/// True if every parity group has an even number of on-positions
pub fn is_valid_codeword(set: &PositionSet) -> bool {
    ParityGroup::ALL
        .iter()
        .all(|&g| set.iter().filter(|p| p.in_group(g)).count() % 2 == 0)
}
