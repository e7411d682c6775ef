use hamming_codec::encode;
use hamming_core::{Position, PositionSet, Selection};

/// Selection from raw ids, for test vectors
pub fn sel(ids: &[u8]) -> Selection {
    PositionSet::from_ids(ids).expect("test vector contains invalid position")
}

/// Honest codeword of `value` with the card at `position_id` flipped
pub fn toggled(value: u8, position_id: u8) -> Selection {
    let pos = Position::new(position_id).expect("test vector contains invalid position");
    encode(value).expect("test vector contains invalid value").toggled(pos)
}
