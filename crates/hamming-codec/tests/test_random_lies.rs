use hamming_codec::{ErrorType, classify, correct, decode, encode};
use hamming_core::{ALL_POSITIONS, PositionSet};

/// Plays the guessing game many times with a random value and at most one lying card
#[test]
fn test_random_single_lies() {
    for _ in 0..1000 {
        let value: u8 = rand::random_range(1..=15);
        let honest = encode(value).unwrap();

        let lie = if rand::random_bool(0.7) {
            Some(ALL_POSITIONS[rand::random_range(0..7usize)])
        } else {
            None
        };
        let shown = match lie {
            Some(p) => honest.toggled(p),
            None => honest,
        };

        let r = decode(&shown);
        assert_eq!(r.corrected_value, value);
        assert_eq!(r.error_position, lie);
        assert_eq!(correct(&shown, &r), honest);

        let t = classify(&shown, &r).unwrap();
        match lie {
            None => assert_eq!(t, ErrorType::None),
            Some(p) if honest.contains(p) => assert_eq!(t, ErrorType::Omission),
            Some(_) => assert_eq!(t, ErrorType::Commission),
        }
    }
}

/// Two lies are beyond a single-error code: the decoder still lands on some
/// valid codeword, but never the original one.
#[test]
fn test_double_lie_misleads() {
    for value in 1..=15u8 {
        let honest = encode(value).unwrap();
        for a in 0..7usize {
            for b in (a + 1)..7 {
                let shown: PositionSet = honest.toggled(ALL_POSITIONS[a]).toggled(ALL_POSITIONS[b]);
                let r = decode(&shown);
                assert!(r.error_detected);
                assert_ne!(correct(&shown, &r), honest);
            }
        }
    }
}
