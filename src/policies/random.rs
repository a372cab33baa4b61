use super::errors::PolicyError;
use super::estimator::Estimator;
use super::policy::{CloneBoxedPolicy, Policy, PolicyType};

use rand::{rngs::SmallRng, Rng};
use serde::{Deserialize, Serialize};

/// Pure exploration: every arm is equally likely on every step,
/// independent of history.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Random {}

impl CloneBoxedPolicy for Random {
    fn clone_box(&self) -> Box<dyn Policy + Send> {
        Box::new(*self)
    }
}

#[typetag::serde]
impl Policy for Random {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Random
    }

    fn select_arm(
        &self,
        estimator: &Estimator,
        _step: u64,
        rng: &mut SmallRng,
    ) -> Result<usize, PolicyError> {
        Ok(rng.random_range(0..estimator.k_arms()))
    }
}
