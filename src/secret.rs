use rand::Rng;

pub const MIN_GUESS: i32 = 1;
pub const MAX_GUESS: i32 = 100;

/// The number the player has to find. Always within `MIN_GUESS..=MAX_GUESS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretNumber {
    value: i32,
}

impl SecretNumber {
    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        let value = rng.random_range(MIN_GUESS..=MAX_GUESS);
        Self { value }
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("secret number `{0}` is outside 1..=100")]
pub struct SecretOutOfRange(pub i32);

impl TryFrom<i32> for SecretNumber {
    type Error = SecretOutOfRange;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if (MIN_GUESS..=MAX_GUESS).contains(&value) {
            Ok(Self { value })
        } else {
            Err(SecretOutOfRange(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    const SAMPLES: usize = 100_000;

    #[test]
    fn test_draw_stays_in_bounds_and_hits_both_ends() {
        let mut rng = StdRng::seed_from_u64(0x5EC2E7);
        let mut counts = [0usize; MAX_GUESS as usize];
        for _ in 0..SAMPLES {
            let secret = SecretNumber::draw(&mut rng);
            assert!((MIN_GUESS..=MAX_GUESS).contains(&secret.value()));
            counts[(secret.value() - MIN_GUESS) as usize] += 1;
        }
        assert!(counts[0] > 0, "lower bound never drawn");
        assert!(counts[counts.len() - 1] > 0, "upper bound never drawn");
    }

    #[test]
    fn test_draw_is_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let bins = (MAX_GUESS - MIN_GUESS + 1) as usize;
        let mut counts = vec![0usize; bins];
        for _ in 0..SAMPLES {
            counts[(SecretNumber::draw(&mut rng).value() - MIN_GUESS) as usize] += 1;
        }

        let expected = SAMPLES as f64 / bins as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        // 99 degrees of freedom, p = 0.001 critical value is ~148.2
        assert!(chi_square < 148.2, "chi-square too large: {chi_square}");
    }

    #[test]
    fn test_try_from_accepts_bounds() {
        assert_eq!(SecretNumber::try_from(1).map(|s| s.value()), Ok(1));
        assert_eq!(SecretNumber::try_from(100).map(|s| s.value()), Ok(100));
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(SecretNumber::try_from(0), Err(SecretOutOfRange(0)));
        assert_eq!(SecretNumber::try_from(101), Err(SecretOutOfRange(101)));
        assert_eq!(SecretNumber::try_from(-7), Err(SecretOutOfRange(-7)));
    }
}
