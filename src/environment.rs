use crate::errors::EnvironmentError;

use rand::Rng;
use std::fmt;

/// Stochastic K-armed reward source. Immutable after construction and
/// owns no generator, so a single instance can back any number of
/// concurrent policy runs.
#[derive(Clone, Debug)]
pub struct Environment {
    reward_probabilities: Vec<f64>,
    actual_rewards: Vec<f64>,
}

impl Environment {
    pub fn new(
        reward_probabilities: Vec<f64>,
        actual_rewards: Vec<f64>,
    ) -> Result<Self, EnvironmentError> {
        if reward_probabilities.len() != actual_rewards.len() {
            return Err(EnvironmentError::LengthMismatch {
                probabilities: reward_probabilities.len(),
                rewards: actual_rewards.len(),
            });
        }

        if reward_probabilities.is_empty() {
            return Err(EnvironmentError::NoArms);
        }

        // NaN fails the range check as well
        if let Some(&p) = reward_probabilities
            .iter()
            .find(|p| !(0.0..=1.0).contains(*p))
        {
            return Err(EnvironmentError::ProbabilityOutOfRange(p));
        }

        Ok(Self {
            reward_probabilities,
            actual_rewards,
        })
    }

    pub fn k_arms(&self) -> usize {
        self.reward_probabilities.len()
    }

    /// One Bernoulli-style trial: a hit pays the arm's full magnitude, a
    /// miss pays nothing. Every call is independent of all previous calls.
    pub fn choose_arm<R: Rng + ?Sized>(
        &self,
        arm: usize,
        rng: &mut R,
    ) -> Result<f64, EnvironmentError> {
        let probability =
            *self
                .reward_probabilities
                .get(arm)
                .ok_or(EnvironmentError::ArmOutOfRange {
                    arm,
                    max: self.k_arms() - 1,
                })?;

        if rng.random::<f64>() < probability {
            Ok(self.actual_rewards[arm])
        } else {
            Ok(0.0)
        }
    }

    pub fn expected_reward(&self, arm: usize) -> Option<f64> {
        Some(self.reward_probabilities.get(arm)? * self.actual_rewards.get(arm)?)
    }

    /// Expected per-pull payoff of the optimal arm, used as the baseline
    /// for regret.
    pub fn best_expected_reward(&self) -> f64 {
        self.reward_probabilities
            .iter()
            .zip(&self.actual_rewards)
            .map(|(p, r)| p * r)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Environment with {} arms\nReward Probabilities: {:?}\nActual Rewards: {:?}",
            self.k_arms(),
            self.reward_probabilities,
            self.actual_rewards
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    const SEED: u64 = 1234;

    #[test]
    fn reject_mismatched_lengths() {
        let result = Environment::new(vec![0.5, 0.5], vec![1.0]);
        assert!(matches!(
            result,
            Err(EnvironmentError::LengthMismatch {
                probabilities: 2,
                rewards: 1
            })
        ));
    }

    #[test]
    fn reject_probability_out_of_range() {
        assert!(Environment::new(vec![0.5, 1.5], vec![1.0, 1.0]).is_err());
        assert!(Environment::new(vec![-0.1, 0.5], vec![1.0, 1.0]).is_err());
        assert!(Environment::new(vec![f64::NAN, 0.5], vec![1.0, 1.0]).is_err());
    }

    #[test]
    fn reject_empty() {
        assert!(matches!(
            Environment::new(vec![], vec![]),
            Err(EnvironmentError::NoArms)
        ));
    }

    #[test]
    fn reject_arm_out_of_range() {
        let environment = Environment::new(vec![0.5, 0.5], vec![1.0, 1.0]).unwrap();
        let mut rng = SmallRng::seed_from_u64(SEED);

        assert!(matches!(
            environment.choose_arm(2, &mut rng),
            Err(EnvironmentError::ArmOutOfRange { arm: 2, max: 1 })
        ));
    }

    #[test]
    fn certain_arm_always_pays() {
        let environment = Environment::new(vec![1.0, 0.0], vec![5.0, 5.0]).unwrap();
        let mut rng = SmallRng::seed_from_u64(SEED);

        for _ in 0..100 {
            assert_eq!(environment.choose_arm(0, &mut rng).unwrap(), 5.0);
            assert_eq!(environment.choose_arm(1, &mut rng).unwrap(), 0.0);
        }
    }

    #[test]
    fn best_expected_reward_scales_by_magnitude() {
        let environment = Environment::new(vec![0.9, 0.2], vec![1.0, 10.0]).unwrap();
        assert_eq!(environment.best_expected_reward(), 2.0);
        assert_eq!(environment.expected_reward(0), Some(0.9));
        assert_eq!(environment.expected_reward(2), None);
    }

    #[test]
    fn display_summarizes_arms() {
        let environment = Environment::new(vec![0.5, 0.5], vec![1.0, 1.0]).unwrap();
        assert!(environment.to_string().contains("2 arms"));
    }
}
