//! The fixed 7-position model of the (7,4) code.
//!
//! Positions 1, 2 and 4 hold parity, positions 3, 5, 6 and 7 hold data. A position's
//! weight is its own id written in binary, so XOR-ing the ids of a selection yields
//! the syndrome directly.

use core::fmt;

use crate::expect_in_range;
use crate::hamming_err::HammingErr;

pub const NUM_POSITIONS: u8 = 7;

/// Highest value that fits in the four data positions
pub const MAX_VALUE: u8 = 15;

pub const ALL_POSITIONS: [Position; 7] = [
    Position(1),
    Position(2),
    Position(3),
    Position(4),
    Position(5),
    Position(6),
    Position(7),
];

pub const PARITY_POSITIONS: [Position; 3] = [Position(1), Position(2), Position(4)];

/// Data positions in ascending id order. Index in this array equals the data-bit-index.
pub const DATA_POSITIONS: [Position; 4] = [Position(3), Position(5), Position(6), Position(7)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionKind {
    Parity,
    Data,
}

/// One of the seven slots of a codeword, id in 1..7
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    pub fn new(id: u8) -> Result<Self, HammingErr> {
        let id = expect_in_range!(id, 1..=NUM_POSITIONS, InvalidPosition, id)?;
        Ok(Position(id))
    }

    #[inline]
    pub fn id(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn kind(self) -> PositionKind {
        if self.0.is_power_of_two() {
            PositionKind::Parity
        } else {
            PositionKind::Data
        }
    }

    #[inline]
    pub fn is_parity(self) -> bool {
        self.kind() == PositionKind::Parity
    }

    /// Weight bits (bit1, bit2, bit4). bit1*1 + bit2*2 + bit4*4 == id
    pub fn weight(self) -> [u8; 3] {
        [self.0 & 1, (self.0 >> 1) & 1, (self.0 >> 2) & 1]
    }

    /// True if this position is covered by the given parity group
    #[inline]
    pub fn in_group(self, group: ParityGroup) -> bool {
        self.weight()[group.into_raw().trailing_zeros() as usize] == 1
    }

    /// Index of the value bit carried by a data position.
    /// 3 -> 0, 5 -> 1, 6 -> 2, 7 -> 3. This is a fixed assignment and is not
    /// derived from the position weights. Parity positions carry no value bit.
    pub fn data_bit_index(self) -> Option<u8> {
        DATA_POSITIONS.iter().position(|&p| p == self).map(|i| i as u8)
    }

    /// Value contributed by this data position when set: 1, 2, 4 or 8
    pub fn data_bit_value(self) -> Option<u8> {
        self.data_bit_index().map(|i| 1 << i)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            PositionKind::Parity => write!(f, "P{}", self.0),
            PositionKind::Data => write!(f, "D{}", self.0),
        }
    }
}

/// The three parity groups, named by the weight bit they check
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParityGroup {
    G1 = 1,
    G2 = 2,
    G4 = 4,
}

impl ParityGroup {
    pub const ALL: [ParityGroup; 3] = [ParityGroup::G1, ParityGroup::G2, ParityGroup::G4];

    #[inline]
    pub fn into_raw(self) -> u8 {
        self as u8
    }

    pub fn try_from_raw(id: u8) -> Result<Self, HammingErr> {
        match id {
            1 => Ok(ParityGroup::G1),
            2 => Ok(ParityGroup::G2),
            4 => Ok(ParityGroup::G4),
            _ => Err(HammingErr::InvalidParityGroup { id: id as u64 }),
        }
    }

    /// The parity position that restores evenness for this group
    #[inline]
    pub fn parity_position(self) -> Position {
        Position(self.into_raw())
    }

    /// Group owned by a parity position, None for data positions
    pub fn for_position(pos: Position) -> Option<Self> {
        ParityGroup::try_from_raw(pos.id()).ok()
    }
}

/// All positions covered by a parity group, ascending. Always 4 entries,
/// the group's own parity position included.
pub fn positions_for_parity_group(group: ParityGroup) -> Vec<Position> {
    ALL_POSITIONS.iter().copied().filter(|p| p.in_group(group)).collect()
}

/// Data positions checked by a parity group, ascending. Always 3 entries.
pub fn data_positions_for_parity_group(group: ParityGroup) -> Vec<Position> {
    DATA_POSITIONS.iter().copied().filter(|p| p.in_group(group)).collect()
}

/// Data positions in ascending order, [3, 5, 6, 7]
pub fn data_positions() -> [Position; 4] {
    DATA_POSITIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(positions: &[Position]) -> Vec<u8> {
        positions.iter().map(|p| p.id()).collect()
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0).is_err());
        assert!(Position::new(8).is_err());
        for id in 1..=7 {
            assert_eq!(Position::new(id).unwrap().id(), id);
        }
    }

    #[test]
    fn test_weight_sums_to_id() {
        for p in ALL_POSITIONS {
            let w = p.weight();
            assert_eq!(w[0] + w[1] * 2 + w[2] * 4, p.id());
        }
    }

    #[test]
    fn test_kinds() {
        let parity: Vec<u8> = ALL_POSITIONS.iter().filter(|p| p.is_parity()).map(|p| p.id()).collect();
        assert_eq!(parity, vec![1, 2, 4]);
        assert_eq!(ids(&data_positions()), vec![3, 5, 6, 7]);
    }

    #[test]
    fn test_data_bit_index() {
        let expected = [(3, 0, 1), (5, 1, 2), (6, 2, 4), (7, 3, 8)];
        for (id, index, value) in expected {
            let p = Position::new(id).unwrap();
            assert_eq!(p.data_bit_index(), Some(index));
            assert_eq!(p.data_bit_value(), Some(value));
        }
        for p in PARITY_POSITIONS {
            assert_eq!(p.data_bit_index(), None);
        }
    }

    #[test]
    fn test_group_coverage() {
        assert_eq!(ids(&positions_for_parity_group(ParityGroup::G1)), vec![1, 3, 5, 7]);
        assert_eq!(ids(&positions_for_parity_group(ParityGroup::G2)), vec![2, 3, 6, 7]);
        assert_eq!(ids(&positions_for_parity_group(ParityGroup::G4)), vec![4, 5, 6, 7]);

        assert_eq!(ids(&data_positions_for_parity_group(ParityGroup::G1)), vec![3, 5, 7]);
        assert_eq!(ids(&data_positions_for_parity_group(ParityGroup::G2)), vec![3, 6, 7]);
        assert_eq!(ids(&data_positions_for_parity_group(ParityGroup::G4)), vec![5, 6, 7]);
    }

    #[test]
    fn test_parity_group_raw() {
        for g in ParityGroup::ALL {
            assert_eq!(ParityGroup::try_from_raw(g.into_raw()), Ok(g));
            assert_eq!(g.parity_position().id(), g.into_raw());
        }
        assert_eq!(ParityGroup::try_from_raw(3), Err(HammingErr::InvalidParityGroup { id: 3 }));
        assert_eq!(ParityGroup::for_position(Position::new(6).unwrap()), None);
    }
}
