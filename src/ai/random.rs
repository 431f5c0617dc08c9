use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::policy::{Difficulty, OpponentPolicy};

/// A policy that selects uniformly at random from legal columns.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        RandomPolicy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic policy for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        RandomPolicy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentPolicy for RandomPolicy {
    fn select_move(&mut self, legal: &[usize]) -> usize {
        assert!(!legal.is_empty(), "No legal columns available");
        let idx = self.rng.random_range(0..legal.len());
        legal[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Build the opponent policy for a difficulty label.
///
/// The label is decorative: all tiers map to [`RandomPolicy`].
pub fn policy_for(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn OpponentPolicy> {
    tracing::debug!(difficulty = difficulty.label(), ?seed, "building opponent policy");
    match seed {
        Some(seed) => Box::new(RandomPolicy::with_seed(seed)),
        None => Box::new(RandomPolicy::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    #[test]
    fn test_random_policy_selects_legal_column() {
        let mut policy = RandomPolicy::new();
        let legal = vec![1, 4, 6];

        for _ in 0..100 {
            let column = policy.select_move(&legal);
            assert!(legal.contains(&column), "Column {} is not legal", column);
        }
    }

    #[test]
    fn test_random_policy_covers_every_column() {
        let mut policy = RandomPolicy::with_seed(7);
        let legal = vec![0, 2, 3, 5];
        let mut seen = [0usize; 7];

        for _ in 0..4000 {
            seen[policy.select_move(&legal)] += 1;
        }

        for &col in &legal {
            // Expected ~1000 per column
            assert!(seen[col] > 800 && seen[col] < 1200, "column {col}: {}", seen[col]);
        }
        assert_eq!(seen[1] + seen[4] + seen[6], 0);
    }

    #[test]
    fn test_seeded_policies_agree() {
        let mut a = RandomPolicy::with_seed(42);
        let mut b = RandomPolicy::with_seed(42);
        let legal: Vec<usize> = (0..7).collect();

        for _ in 0..20 {
            assert_eq!(a.select_move(&legal), b.select_move(&legal));
        }
    }

    #[test]
    fn test_single_legal_column() {
        let mut policy = RandomPolicy::new();
        assert_eq!(policy.select_move(&[5]), 5);
    }

    #[test]
    #[should_panic(expected = "No legal columns available")]
    fn test_empty_legal_set_panics() {
        let mut policy = RandomPolicy::new();
        policy.select_move(&[]);
    }

    #[test]
    fn test_random_policies_play_full_game() {
        let mut policy1 = policy_for(Difficulty::Easy, Some(1));
        let mut policy2 = policy_for(Difficulty::Hard, Some(2));
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            let column = if turn % 2 == 0 {
                policy1.select_move(&state.legal_columns())
            } else {
                policy2.select_move(&state.legal_columns())
            };
            state.apply_move(column).unwrap();
            turn += 1;
        }

        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_random_policy_name() {
        let policy = policy_for(Difficulty::Normal, None);
        assert_eq!(policy.name(), "Random");
    }
}
