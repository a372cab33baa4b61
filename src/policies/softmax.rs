use super::errors::PolicyError;
use super::estimator::Estimator;
use super::policy::{CloneBoxedPolicy, Policy, PolicyType};

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

/// Boltzmann exploration: sample the next arm from a categorical
/// distribution proportional to `exp(estimate / tau)`, recomputed fresh
/// from the current estimates every step. Smaller `tau` concentrates on
/// the current best arm, larger `tau` approaches uniform.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Softmax {
    tau: f64,
}

impl Softmax {
    pub fn new(tau: f64) -> Self {
        Self { tau }
    }
}

impl CloneBoxedPolicy for Softmax {
    fn clone_box(&self) -> Box<dyn Policy + Send> {
        Box::new(*self)
    }
}

#[typetag::serde]
impl Policy for Softmax {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Softmax { tau: self.tau }
    }

    fn select_arm(
        &self,
        estimator: &Estimator,
        _step: u64,
        rng: &mut SmallRng,
    ) -> Result<usize, PolicyError> {
        // shift exponents by the max before exponentiating; the shift
        // cancels in the normalization and keeps exp out of overflow
        let max_estimate = estimator
            .estimates()
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        let weights = estimator
            .estimates()
            .iter()
            .map(|estimate| ((estimate - max_estimate) / self.tau).exp());

        let distribution =
            WeightedIndex::new(weights).map_err(|err| PolicyError::Sampling(err.to_string()))?;

        Ok(distribution.sample(rng))
    }
}
