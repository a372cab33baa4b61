use super::errors::PolicyError;
use super::estimator::Estimator;
use super::policy::{CloneBoxedPolicy, Policy, PolicyType};

use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

/// Pure exploitation of the current estimates. All estimates start at
/// zero, so the first-max tie-break keeps this policy on arm 0 until
/// observed rewards reorder the estimates.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Greedy {}

impl CloneBoxedPolicy for Greedy {
    fn clone_box(&self) -> Box<dyn Policy + Send> {
        Box::new(*self)
    }
}

#[typetag::serde]
impl Policy for Greedy {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Greedy
    }

    fn select_arm(
        &self,
        estimator: &Estimator,
        _step: u64,
        _rng: &mut SmallRng,
    ) -> Result<usize, PolicyError> {
        Ok(estimator.best_arm())
    }
}
