//! Invitation lists: for each position, which of the values 1..15 turn it on
//! when encoded honestly.
//!
//! Data position lists are a plain bit test on the value. Parity position lists
//! count in how many of the group's data-position lists a value appears, and
//! invite the value if that count is odd.

use hamming_core::{
    ALL_POSITIONS, DataValue, HammingErr, MAX_VALUE, NUM_POSITIONS, ParityGroup, Position, PositionKind,
    data_positions_for_parity_group,
};

use crate::encoder;

/// Sorted values in 1..15 whose encoding turns on position `position_id` (1..7)
pub fn invitees(position_id: u8) -> Result<Vec<u8>, HammingErr> {
    let pos = Position::new(position_id)?;
    Ok(invitees_for(pos))
}

pub fn invitees_for(pos: Position) -> Vec<u8> {
    let list: Vec<u8> = match ParityGroup::for_position(pos) {
        Some(group) => parity_invitees(group),
        None => DataValue::all()
            .map(DataValue::get)
            .filter(|&v| pos.data_bit_value().is_some_and(|bit| v & bit != 0))
            .collect(),
    };
    tracing::trace!("invitees {:?} -> {:?}", pos, list);
    list
}

/// Values whose data bits give odd parity over the data positions of `group`
pub fn parity_invitees(group: ParityGroup) -> Vec<u8> {
    (1..=MAX_VALUE).filter(|&v| encoder::parity_bit(v, group) == 1).collect()
}

/// How a single value was judged during an invitation scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplanationRow {
    pub visitor: u8,
    /// Number of the group's data-position lists this value appears in
    pub appearances: u8,
    pub invited: bool,
}

/// Result of scanning all values for one parity group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationScan {
    pub group: ParityGroup,
    /// Data positions whose lists were consulted
    pub houses_to_check: Vec<Position>,
    pub invitees: Vec<u8>,
    /// One row for each of the first `explain_rows` values
    pub explanation: Vec<ExplanationRow>,
}

/// Scans 1..15 for `group` and records why the first `explain_rows` values
/// were or were not invited.
pub fn scan_parity_group(group: ParityGroup, explain_rows: usize) -> InvitationScan {
    let mut invitees = Vec::with_capacity(8);
    let mut explanation = Vec::with_capacity(explain_rows.min(MAX_VALUE as usize));

    for visitor in 1..=MAX_VALUE {
        let appearances = encoder::data_appearances(visitor, group);
        let invited = appearances % 2 == 1;
        if invited {
            invitees.push(visitor);
        }
        if explanation.len() < explain_rows {
            explanation.push(ExplanationRow { visitor, appearances, invited });
        }
    }

    tracing::debug!("scan group {} -> {} invitees", group.into_raw(), invitees.len());
    InvitationScan {
        group,
        houses_to_check: data_positions_for_parity_group(group),
        invitees,
        explanation,
    }
}

/// All seven invitation lists, derived from the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipTable {
    lists: [Vec<u8>; NUM_POSITIONS as usize],
}

impl MembershipTable {
    pub fn build() -> Self {
        Self { lists: ALL_POSITIONS.map(invitees_for) }
    }

    pub fn list(&self, pos: Position) -> &[u8] {
        &self.lists[(pos.id() - 1) as usize]
    }

    /// Positions whose list contains `value`, i.e. the codeword of `value`
    pub fn positions_listing(&self, value: u8) -> Vec<Position> {
        ALL_POSITIONS.iter().copied().filter(|&p| self.list(p).contains(&value)).collect()
    }

    /// Lists in position order, tagged with their kind
    pub fn iter(&self) -> impl Iterator<Item = (Position, PositionKind, &[u8])> + '_ {
        ALL_POSITIONS.iter().map(move |&p| (p, p.kind(), self.list(p)))
    }
}
