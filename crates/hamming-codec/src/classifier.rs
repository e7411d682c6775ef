use core::fmt;

use hamming_core::{Codeword, HammingErr, Selection};

use crate::decoder::{self, DecodeResult};
use crate::encoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    None,
    /// Position should have been selected but was not
    Omission,
    /// Position was selected but should not have been
    Commission,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::None => write!(f, "none"),
            ErrorType::Omission => write!(f, "omission"),
            ErrorType::Commission => write!(f, "commission"),
        }
    }
}

/// Labels the deviation of `selection` at the decoder's error position.
/// `result` must have been produced by decoding `selection`; a result that
/// belongs to a different selection is reported as an inconsistency.
pub fn classify(selection: &Selection, result: &DecodeResult) -> Result<ErrorType, HammingErr> {
    if *result != decoder::decode(selection) {
        return Err(HammingErr::Inconsistency {
            field: "result",
            reason: "decode result does not belong to this selection",
        });
    }

    let Some(pos) = result.error_position.filter(|_| result.error_detected) else {
        return Ok(ErrorType::None);
    };

    let correct = encoder::codeword_for(result.corrected_value);
    let should_be_selected = correct.contains(pos);
    let was_selected = selection.contains(pos);

    let error_type = match (should_be_selected, was_selected) {
        (true, false) => ErrorType::Omission,
        (false, true) => ErrorType::Commission,
        _ => {
            return Err(HammingErr::Inconsistency {
                field: "error_position",
                reason: "selection agrees with the corrected codeword at the error position",
            });
        }
    };
    tracing::debug!("classify {} at {:?}: {}", selection, pos, error_type);
    Ok(error_type)
}

/// The valid codeword nearest to `selection`: the selection with its error position flipped
pub fn correct(selection: &Selection, result: &DecodeResult) -> Codeword {
    match result.error_position {
        Some(pos) => selection.toggled(pos),
        None => *selection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;
    use hamming_core::PositionSet;

    fn sel(ids: &[u8]) -> Selection {
        PositionSet::from_ids(ids).unwrap()
    }

    #[test]
    fn test_classify_none() {
        let s = sel(&[2, 5, 7]);
        assert_eq!(classify(&s, &decode(&s)), Ok(ErrorType::None));
    }

    #[test]
    fn test_classify_omission() {
        let s = sel(&[5, 7]);
        assert_eq!(classify(&s, &decode(&s)), Ok(ErrorType::Omission));
        let s = sel(&[2, 7]);
        assert_eq!(classify(&s, &decode(&s)), Ok(ErrorType::Omission));
    }

    #[test]
    fn test_classify_commission() {
        let s = sel(&[1, 2, 5, 7]);
        assert_eq!(classify(&s, &decode(&s)), Ok(ErrorType::Commission));
        // A lone data card decodes to 0 with that card flagged
        let s = sel(&[3]);
        let r = decode(&s);
        assert_eq!(r.corrected_value, 0);
        assert_eq!(classify(&s, &r), Ok(ErrorType::Commission));
    }

    #[test]
    fn test_classify_mismatched_result() {
        let r = decode(&sel(&[5, 7]));
        assert!(matches!(
            classify(&sel(&[1, 2, 5, 7]), &r),
            Err(HammingErr::Inconsistency { field: "result", .. })
        ));
    }

    #[test]
    fn test_classify_rejects_altered_value() {
        let s = sel(&[5, 7]);
        let mut r = decode(&s);
        r.corrected_value = 200;
        assert!(matches!(classify(&s, &r), Err(HammingErr::Inconsistency { field: "result", .. })));
    }

    #[test]
    fn test_classify_rejects_detected_without_position() {
        let s = sel(&[5, 7]);
        let mut r = decode(&s);
        assert!(r.error_detected);
        r.error_position = None;
        assert!(matches!(classify(&s, &r), Err(HammingErr::Inconsistency { field: "result", .. })));
    }

    #[test]
    fn test_correct() {
        let s = sel(&[2, 7]);
        let fixed = correct(&s, &decode(&s));
        assert_eq!(fixed.ids(), vec![2, 5, 7]);
        let s = sel(&[2, 5, 7]);
        assert_eq!(correct(&s, &decode(&s)), s);
    }

    #[test]
    fn test_classify_every_selection() {
        for mask in 0u8..128 {
            let s = PositionSet::from_mask(mask);
            let r = decode(&s);
            let t = classify(&s, &r).unwrap();
            assert_eq!(t == ErrorType::None, !r.error_detected);
        }
    }
}
