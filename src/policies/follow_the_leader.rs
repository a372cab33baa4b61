use super::errors::PolicyError;
use super::estimator::Estimator;
use super::policy::{CloneBoxedPolicy, Policy, PolicyType};

use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

/// Same decision rule as `Greedy`: highest average reward so far, untried
/// arms counting as zero, ties toward the lowest index. Kept as a named
/// policy so comparisons keep a stable label.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct FollowTheLeader {}

impl CloneBoxedPolicy for FollowTheLeader {
    fn clone_box(&self) -> Box<dyn Policy + Send> {
        Box::new(*self)
    }
}

#[typetag::serde]
impl Policy for FollowTheLeader {
    fn policy_type(&self) -> PolicyType {
        PolicyType::FollowTheLeader
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
