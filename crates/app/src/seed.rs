//! Seed selection for the session RNG. The scared-ghost wander is the only
//! consumer, but a fixed `--seed` still makes a whole run reproducible.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy =
        (now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ pid.rotate_left(17) ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Pick the seed from `--seed N` / `--seed=N` if present, otherwise fall
/// back to `generated_seed`.
pub fn resolve_seed_from_args(args: &[String], generated_seed: u64) -> Result<SeedChoice, String> {
    let mut selected = None;
    let mut index = 1usize;
    while index < args.len() {
        let raw = if args[index] == "--seed" {
            index += 1;
            match args.get(index) {
                Some(value) => Some(value.as_str()),
                None => return Err("missing value for --seed".to_string()),
            }
        } else {
            args[index].strip_prefix("--seed=")
        };
        if let Some(raw) = raw {
            if selected.is_some() {
                return Err("seed provided more than once".to_string());
            }
            let seed = raw
                .parse::<u64>()
                .map_err(|_| format!("seed value '{raw}' must be a number"))?;
            selected = Some(seed);
        }
        index += 1;
    }
    Ok(match selected {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    })
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn falls_back_to_the_generated_seed() {
        let choice = resolve_seed_from_args(&as_args(&["pacman"]), 424_242).unwrap();
        assert_eq!(choice, SeedChoice::Generated(424_242));
    }

    #[test]
    fn parses_both_seed_flag_forms() {
        let choice = resolve_seed_from_args(&as_args(&["pacman", "--seed", "7"]), 1).unwrap();
        assert_eq!(choice, SeedChoice::Cli(7));
        let choice = resolve_seed_from_args(&as_args(&["pacman", "--seed=2026"]), 1).unwrap();
        assert_eq!(choice, SeedChoice::Cli(2026));
    }

    #[test]
    fn rejects_missing_duplicate_and_non_numeric_values() {
        assert!(resolve_seed_from_args(&as_args(&["pacman", "--seed"]), 1).is_err());
        assert!(resolve_seed_from_args(&as_args(&["pacman", "--seed=1", "--seed", "2"]), 1).is_err());
        assert!(resolve_seed_from_args(&as_args(&["pacman", "--seed=abc"]), 1).is_err());
    }

    #[test]
    fn generated_seeds_differ_between_calls() {
        assert_ne!(generate_runtime_seed(), generate_runtime_seed());
    }
}
