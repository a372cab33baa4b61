use super::errors::PolicyError;
use super::estimator::Estimator;
use super::policy::{CloneBoxedPolicy, Policy, PolicyType};

use rand::{rngs::SmallRng, Rng};
use serde::{Deserialize, Serialize};

/// Exploit the best estimate, except with probability `epsilon` explore a
/// uniformly random arm. `epsilon` is fixed for the run, no decay.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl CloneBoxedPolicy for EpsilonGreedy {
    fn clone_box(&self) -> Box<dyn Policy + Send> {
        Box::new(*self)
    }
}

#[typetag::serde]
impl Policy for EpsilonGreedy {
    fn policy_type(&self) -> PolicyType {
        PolicyType::EpsilonGreedy {
            epsilon: self.epsilon,
        }
    }

    fn select_arm(
        &self,
        estimator: &Estimator,
        _step: u64,
        rng: &mut SmallRng,
    ) -> Result<usize, PolicyError> {
        if rng.random::<f64>() < self.epsilon {
            Ok(rng.random_range(0..estimator.k_arms()))
        } else {
            Ok(estimator.best_arm())
        }
    }
}
