use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hamming_codec::encode_value;
use hamming_core::{ALL_POSITIONS, DataValue, Position, Selection, assert_warn};

/// One round of the guessing game: a secret value and the cards shown for it
#[derive(Debug, Clone, Copy)]
pub struct Game {
    pub value: DataValue,
    pub lie: Option<Position>,
    pub shown: Selection,
}

pub fn play(seed: Option<u64>, lie_chance: f64) -> Game {
    assert_warn!((0.0..=1.0).contains(&lie_chance), "lie chance {} outside 0..1, clamped", lie_chance);
    let lie_chance = if lie_chance.is_nan() { 0.0 } else { lie_chance.clamp(0.0, 1.0) };
    match seed {
        Some(seed) => play_with(&mut StdRng::seed_from_u64(seed), lie_chance),
        None => play_with(&mut rand::rng(), lie_chance),
    }
}

fn play_with<R: Rng>(rng: &mut R, lie_chance: f64) -> Game {
    let value = pick_value(rng);
    let honest = encode_value(value);
    let lie = rng
        .random_bool(lie_chance)
        .then(|| ALL_POSITIONS[rng.random_range(0..ALL_POSITIONS.len())]);
    let shown = match lie {
        Some(p) => honest.toggled(p),
        None => honest,
    };
    Game { value, lie, shown }
}

fn pick_value<R: Rng>(rng: &mut R) -> DataValue {
    let values: Vec<DataValue> = DataValue::all().collect();
    values[rng.random_range(0..values.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamming_codec::decode;

    #[test]
    fn test_seeded_game_is_reproducible() {
        let a = play(Some(42), 0.5);
        let b = play(Some(42), 0.5);
        assert_eq!(a.value, b.value);
        assert_eq!(a.lie, b.lie);
        assert_eq!(a.shown, b.shown);
    }

    #[test]
    fn test_decoder_reveals_game() {
        for seed in 0..200 {
            let game = play(Some(seed), 0.8);
            let r = decode(&game.shown);
            assert_eq!(r.corrected_value, game.value.get());
            assert_eq!(r.error_position, game.lie);
        }
    }

    #[test]
    fn test_no_lies() {
        for seed in 0..50 {
            assert_eq!(play(Some(seed), 0.0).lie, None);
        }
    }

    #[test]
    fn test_lie_chance_clamped() {
        for seed in 0..20 {
            assert!(play(Some(seed), 7.5).lie.is_some());
            assert_eq!(play(Some(seed), -1.0).lie, None);
            assert_eq!(play(Some(seed), f64::NAN).lie, None);
        }
    }
}
