//! Random pairs used to fill the input field of the demo front-ends.

use rand::Rng;

use crate::Result;

/// The largest amount of pairs `random_pairs` generates.
pub const MAX_PAIRS: i32 = 100;

/// A uniformly distributed integer in `[min, max]`.
pub fn random_number<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    if min >= max {
        return min;
    }

    rng.random_range(min..=max)
}

/// Between 1 and `MAX_PAIRS` pairs with both coordinates in `[min, max]`.
pub fn random_pairs<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> Vec<[i32; 2]> {
    let len = random_number(rng, 1, MAX_PAIRS);

    (0..len)
        .map(|_| [random_number(rng, min, max), random_number(rng, min, max)])
        .collect()
}

/// `random_pairs` serialized as a JSON array of `[x, y]` arrays.
pub fn random_pairs_json<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> Result<String> {
    Ok(serde_json::to_string(&random_pairs(rng, min, max))?)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn numbers_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        assert!((0..1000).all(|_| (0..=10).contains(&random_number(&mut rng, 0, 10))));
        assert_eq!(random_number(&mut rng, 4, 4), 4);
    }

    #[test]
    fn pairs_shape() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            let pairs = random_pairs(&mut rng, 0, 10);
            assert!((1..=MAX_PAIRS as usize).contains(&pairs.len()));
            assert!(pairs.iter().flatten().all(|v| (0..=10).contains(v)));
        }
    }

    #[test]
    fn json_round_trips() {
        let mut rng = StdRng::seed_from_u64(2);
        let json = random_pairs_json(&mut rng, 0, 10).unwrap();
        let pairs: Vec<[i32; 2]> = serde_json::from_str(&json).unwrap();

        assert!(json.starts_with("[["));
        assert!(!pairs.is_empty());
    }
}
