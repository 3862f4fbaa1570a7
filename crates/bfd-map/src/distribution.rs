//! Selection among comma-separated alternatives.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one alternative from a comma-separated `value`.
///
/// Values without a comma are returned unchanged. Alternatives are trimmed.
/// With `use_first` the first alternative is always taken and `rng` is not
/// touched; otherwise one is drawn uniformly from `rng`.
pub fn select_distribution<R: Rng + ?Sized>(value: &str, use_first: bool, rng: &mut R) -> String {
    if !value.contains(',') {
        return value.to_string();
    }
    let options: Vec<&str> = value.split(',').map(str::trim).collect();
    let index = if use_first {
        0
    } else {
        rng.gen_range(0..options.len())
    };
    options[index].to_string()
}

/// Random source for one person, reproducible from its seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_value_is_unchanged() {
        let mut rng = seeded_rng(1);
        assert_eq!(select_distribution("INSERT", false, &mut rng), "INSERT");
        assert_eq!(select_distribution("", false, &mut rng), "");
    }

    #[test]
    fn use_first_takes_first_option() {
        let mut rng = seeded_rng(1);
        assert_eq!(select_distribution("1,2,3", true, &mut rng), "1");
        assert_eq!(select_distribution(" A , B", true, &mut rng), "A");
    }

    #[test]
    fn random_choice_is_one_of_the_options() {
        let mut rng = seeded_rng(99);
        for _ in 0..50 {
            let value = select_distribution("A, B, C", false, &mut rng);
            assert!(["A", "B", "C"].contains(&value.as_str()));
        }
    }

    #[test]
    fn empty_alternatives_survive() {
        let mut rng = seeded_rng(3);
        assert_eq!(select_distribution(",X", true, &mut rng), "");
    }
}
