use super::errors::PolicyError;
use super::estimator::Estimator;
use super::policy::{CloneBoxedPolicy, Policy, PolicyType};

use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

// keeps the count division total; the forced-exploration phase makes a
// zero count unreachable once the score formula runs
const COUNT_EPS: f64 = 1e-10;

/// Optimism under uncertainty: each arm scores its estimate plus a
/// confidence bonus that shrinks with its pull count and grows with the
/// log of elapsed steps. `c` scales the bonus.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Ucb {
    c: f64,
}

impl Ucb {
    pub fn new(c: f64) -> Self {
        Self { c }
    }
}

impl CloneBoxedPolicy for Ucb {
    fn clone_box(&self) -> Box<dyn Policy + Send> {
        Box::new(*self)
    }
}

#[typetag::serde]
impl Policy for Ucb {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Ucb { c: self.c }
    }

    fn select_arm(
        &self,
        estimator: &Estimator,
        step: u64,
        _rng: &mut SmallRng,
    ) -> Result<usize, PolicyError> {
        // pull every arm once before trusting the confidence scores
        if step <= estimator.k_arms() as u64 {
            return Ok((step - 1) as usize);
        }

        let log_step = (step as f64).ln();
        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;

        for arm in 0..estimator.k_arms() {
            let bonus = self.c * (log_step / (estimator.pulls(arm) as f64 + COUNT_EPS)).sqrt();
            let score = estimator.estimate(arm) + bonus;

            if score > best_score {
                best = arm;
                best_score = score;
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const SEED: u64 = 1234;

    #[test]
    fn first_k_steps_visit_arms_in_order() {
        let policy = Ucb::new(2.0);
        let mut estimator = Estimator::new(4);
        // estimates never matter during the forced phase
        estimator.record_pull(3, 100.0);
        let mut rng = SmallRng::seed_from_u64(SEED);

        for step in 1..=4 {
            let arm = policy.select_arm(&estimator, step, &mut rng).unwrap();
            assert_eq!(arm as u64, step - 1);
        }
    }

    #[test]
    fn prefers_the_less_pulled_arm_on_equal_estimates() {
        let policy = Ucb::new(2.0);
        let mut estimator = Estimator::new(2);
        for _ in 0..5 {
            estimator.record_pull(0, 0.0);
        }
        estimator.record_pull(1, 0.0);
        let mut rng = SmallRng::seed_from_u64(SEED);

        assert_eq!(policy.select_arm(&estimator, 7, &mut rng).unwrap(), 1);
    }

    #[test]
    fn prefers_the_better_estimate_on_equal_counts() {
        let policy = Ucb::new(2.0);
        let mut estimator = Estimator::new(2);
        estimator.record_pull(0, 1.0);
        estimator.record_pull(1, 0.0);
        let mut rng = SmallRng::seed_from_u64(SEED);

        assert_eq!(policy.select_arm(&estimator, 3, &mut rng).unwrap(), 0);
    }

    #[test]
    fn ties_break_toward_arm_0_past_the_forced_phase() {
        let policy = Ucb::new(2.0);
        let estimator = Estimator::new(3);
        let mut rng = SmallRng::seed_from_u64(SEED);

        // zero counts everywhere: the epsilon guard keeps every score
        // finite and identical, so the first maximum wins
        assert_eq!(policy.select_arm(&estimator, 4, &mut rng).unwrap(), 0);
    }
}
