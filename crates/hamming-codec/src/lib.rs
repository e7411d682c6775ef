//! Hamming(7,4) encoder, invitation list generator, syndrome decoder and error classifier
//!
//! Every operation is a pure function of its inputs and the fixed position model
//! in `hamming_core`. Nothing is cached between calls.

pub mod classifier;
pub mod decoder;
pub mod encoder;
pub mod membership;

use hamming_core::{Codeword, HammingErr, Selection};

pub use classifier::{ErrorType, classify, correct};
pub use decoder::{DecodeResult, decode, syndrome};
pub use encoder::{encode, encode_value, is_valid_codeword};
pub use membership::{InvitationScan, MembershipTable, invitees, scan_parity_group};

/// Block code as seen by a presentation layer: values in, position sets out and back
pub trait BlockCodec {
    fn encode(&self, value: u8) -> Result<Codeword, HammingErr>;
    fn decode(&self, selection: &Selection) -> DecodeResult;
    fn invitees(&self, position_id: u8) -> Result<Vec<u8>, HammingErr>;
    fn classify(&self, selection: &Selection, result: &DecodeResult) -> Result<ErrorType, HammingErr>;
}

/// The single-error-correcting (7,4) code with data bits on positions 3, 5, 6, 7
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming74;

impl BlockCodec for Hamming74 {
    fn encode(&self, value: u8) -> Result<Codeword, HammingErr> {
        encoder::encode(value)
    }

    fn decode(&self, selection: &Selection) -> DecodeResult {
        decoder::decode(selection)
    }

    fn invitees(&self, position_id: u8) -> Result<Vec<u8>, HammingErr> {
        membership::invitees(position_id)
    }

    fn classify(&self, selection: &Selection, result: &DecodeResult) -> Result<ErrorType, HammingErr> {
        classifier::classify(selection, result)
    }
}
