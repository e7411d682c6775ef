use core::fmt;

use crate::hamming_err::HammingErr;
use crate::position::{ALL_POSITIONS, NUM_POSITIONS, Position};

/// A set of "on" positions, stored as a 7-bit mask (bit 0 is position 1).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionSet(u8);

/// A set of positions produced by the encoder. Always a valid codeword.
pub type Codeword = PositionSet;

/// A set of positions claimed by a user. Need not be a valid codeword.
pub type Selection = PositionSet;

const MASK: u8 = (1 << NUM_POSITIONS) - 1;

impl PositionSet {
    pub const fn empty() -> Self {
        PositionSet(0)
    }

    /// Build a set from raw position ids. Fails on any id outside 1..7;
    /// repeated ids collapse.
    pub fn from_ids(ids: &[u8]) -> Result<Self, HammingErr> {
        let mut set = PositionSet::empty();
        for &id in ids {
            set.insert(Position::new(id)?);
        }
        Ok(set)
    }

    pub fn from_positions<I: IntoIterator<Item = Position>>(positions: I) -> Self {
        let mut set = PositionSet::empty();
        for p in positions {
            set.insert(p);
        }
        set
    }

    /// Raw mask, bit 0 is position 1
    #[inline]
    pub fn to_mask(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn from_mask(mask: u8) -> Self {
        PositionSet(mask & MASK)
    }

    #[inline]
    fn bit(p: Position) -> u8 {
        1 << (p.id() - 1)
    }

    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.0 & Self::bit(p) != 0
    }

    #[inline]
    pub fn insert(&mut self, p: Position) {
        self.0 |= Self::bit(p);
    }

    #[inline]
    pub fn remove(&mut self, p: Position) {
        self.0 &= !Self::bit(p);
    }

    /// Flips membership of `p`. Returns true if `p` is now a member.
    pub fn toggle(&mut self, p: Position) -> bool {
        if self.contains(p) {
            self.remove(p);
            false
        } else {
            self.insert(p);
            true
        }
    }

    /// Copy of this set with membership of `p` flipped
    pub fn toggled(mut self, p: Position) -> Self {
        self.toggle(p);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        ALL_POSITIONS.iter().copied().filter(move |&p| self.contains(p))
    }

    pub fn ids(&self) -> Vec<u8> {
        self.iter().map(|p| p.id()).collect()
    }

    /// Construct a set from exactly 7 '0'/'1' characters, position 1 first.
    pub fn from_bitstr(bitstr: &str) -> Result<Self, HammingErr> {
        if bitstr.chars().count() != NUM_POSITIONS as usize {
            return Err(HammingErr::InvalidSelection {
                input: bitstr.to_string(),
                reason: "bitstring must be exactly 7 characters",
            });
        }
        let mut set = PositionSet::empty();
        for (c, p) in bitstr.chars().zip(ALL_POSITIONS) {
            match c {
                '0' => {}
                '1' => set.insert(p),
                _ => {
                    return Err(HammingErr::InvalidSelection {
                        input: bitstr.to_string(),
                        reason: "only '0' or '1' allowed in bitstring",
                    });
                }
            }
        }
        Ok(set)
    }

    /// Render as 7 '0'/'1' characters, position 1 first
    pub fn to_bitstr(&self) -> String {
        ALL_POSITIONS.iter().map(|&p| if self.contains(p) { '1' } else { '0' }).collect()
    }

    /// Parse a textual selection. Accepts a 7-character bitstring ("0100101")
    /// or a list of ids separated by commas or whitespace, optionally in braces
    /// ("2,5,7", "{2, 5, 7}", "{}"). Listing an id twice is rejected.
    pub fn parse(input: &str) -> Result<Self, HammingErr> {
        let s = input.trim();
        if s.len() == NUM_POSITIONS as usize && s.chars().all(|c| c == '0' || c == '1') {
            return Self::from_bitstr(s);
        }

        let inner = s.strip_prefix('{').unwrap_or(s);
        let inner = inner.strip_suffix('}').unwrap_or(inner);

        let mut set = PositionSet::empty();
        for tok in inner.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty()) {
            let id: u8 = tok.parse().map_err(|_| HammingErr::InvalidSelection {
                input: input.to_string(),
                reason: "position ids must be integers",
            })?;
            let p = Position::new(id)?;
            if set.contains(p) {
                return Err(HammingErr::InvalidSelection {
                    input: input.to_string(),
                    reason: "position listed more than once",
                });
            }
            set.insert(p);
        }
        Ok(set)
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        PositionSet::from_positions(iter)
    }
}

impl fmt::Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, p) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self, self.to_bitstr())
    }
}
