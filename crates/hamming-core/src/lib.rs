//! Core types for the Hamming(7,4) teaching codec
//!
//! This crate provides the fixed model the codec operates on:
//! - Position, ParityGroup and the static position tables
//! - DataValue for values 1..15
//! - PositionSet for codewords and user selections
//! - HammingErr error taxonomy and logging setup

pub mod debug;
pub mod hamming_err;
pub mod position;
pub mod position_set;
pub mod value;

// Re-export commonly used items
pub use hamming_err::HammingErr;
pub use position::{
    ALL_POSITIONS, DATA_POSITIONS, MAX_VALUE, NUM_POSITIONS, PARITY_POSITIONS, ParityGroup, Position, PositionKind,
    data_positions, data_positions_for_parity_group, positions_for_parity_group,
};
pub use position_set::{Codeword, PositionSet, Selection};
pub use value::DataValue;
