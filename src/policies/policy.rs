use super::epsilon_greedy::EpsilonGreedy;
use super::errors::PolicyError;
use super::estimator::Estimator;
use super::follow_the_leader::FollowTheLeader;
use super::greedy::Greedy;
use super::random::Random;
use super::softmax::Softmax;
use super::ucb::Ucb;

use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

/// Selection rule plus its hyperparameters. Per-run state (estimates,
/// counts, reward history) lives in the simulation loop, so one policy
/// value can seed any number of independent runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyType {
    Random,
    Greedy,
    EpsilonGreedy { epsilon: f64 },
    Softmax { tau: f64 },
    Ucb { c: f64 },
    FollowTheLeader,
}

impl PolicyType {
    pub fn into_inner(self) -> Box<dyn Policy + Send> {
        match self {
            PolicyType::Random => Box::new(Random {}),
            PolicyType::Greedy => Box::new(Greedy {}),
            PolicyType::EpsilonGreedy { epsilon } => Box::new(EpsilonGreedy::new(epsilon)),
            PolicyType::Softmax { tau } => Box::new(Softmax::new(tau)),
            PolicyType::Ucb { c } => Box::new(Ucb::new(c)),
            PolicyType::FollowTheLeader => Box::new(FollowTheLeader {}),
        }
    }
}

impl Clone for Box<dyn Policy + Send> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

pub trait CloneBoxedPolicy {
    fn clone_box(&self) -> Box<dyn Policy + Send>;
}

#[typetag::serde(tag = "type")]
pub trait Policy: Send + CloneBoxedPolicy {
    fn policy_type(&self) -> PolicyType;

    /// Pick the next arm given the shared estimates. `step` counts
    /// iterations from 1.
    fn select_arm(
        &self,
        estimator: &Estimator,
        step: u64,
        rng: &mut SmallRng,
    ) -> Result<usize, PolicyError>;
}
