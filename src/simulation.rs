use crate::environment::Environment;
use crate::errors::SimulationError;
use crate::policies::{Estimator, MaybeSeededRng, Policy};

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

/// Outcome of one complete run. The reward histories keep a leading 0.0
/// placeholder: index 0 reads "before any pulls", so `rewards` and
/// `cumulative_rewards` both have `iterations + 1` entries.
#[derive(Clone, Debug, Serialize)]
pub struct RunRecord {
    pub run_id: Uuid,
    pub arm_counts: Vec<u64>,
    pub arm_rewards: Vec<f64>,
    pub q_values: Vec<f64>,
    pub rewards: Vec<f64>,
    pub cumulative_rewards: Vec<f64>,
}

impl RunRecord {
    pub fn total_reward(&self) -> f64 {
        self.arm_rewards.iter().sum()
    }

    /// Shortfall against always pulling the best arm in expectation.
    pub fn regret(&self, environment: &Environment) -> f64 {
        let total_pulls: u64 = self.arm_counts.iter().sum();
        environment.best_expected_reward() * total_pulls as f64 - self.total_reward()
    }
}

/// Drives one policy against one environment for a fixed number of
/// steps. Each instance owns its RNG and per-run estimator state
/// exclusively, so independent simulations can run on separate threads
/// against the same shared environment.
pub struct Simulation<'a> {
    environment: &'a Environment,
    policy: Box<dyn Policy + Send>,
    iterations: u64,
    rng: MaybeSeededRng,
}

impl<'a> Simulation<'a> {
    pub fn new(
        environment: &'a Environment,
        policy: Box<dyn Policy + Send>,
        iterations: u64,
        seed: Option<u64>,
    ) -> Self {
        Self {
            environment,
            policy,
            iterations,
            rng: MaybeSeededRng::new(seed),
        }
    }

    /// Executes exactly `iterations` steps: select an arm, draw its
    /// reward, fold the reward into the shared estimates, extend the
    /// histories. No early termination and no retries; any environment or
    /// sampling failure aborts the run.
    pub fn run(&mut self) -> Result<RunRecord, SimulationError> {
        debug!(
            policy = ?self.policy.policy_type(),
            k_arms = self.environment.k_arms(),
            iterations = self.iterations,
            seed = self.rng.seed,
            "Starting simulation run"
        );

        let mut estimator = Estimator::new(self.environment.k_arms());
        let mut rewards = Vec::with_capacity(self.iterations as usize + 1);
        let mut cumulative_rewards = Vec::with_capacity(self.iterations as usize + 1);
        rewards.push(0.0);
        cumulative_rewards.push(0.0);

        let mut total = 0.0;
        for step in 1..=self.iterations {
            let arm = self
                .policy
                .select_arm(&estimator, step, self.rng.get_rng())?;
            let reward = self.environment.choose_arm(arm, self.rng.get_rng())?;

            estimator.record_pull(arm, reward);
            total += reward;
            rewards.push(reward);
            cumulative_rewards.push(total / rewards.len() as f64);
        }

        let (arm_counts, arm_rewards, q_values) = estimator.into_parts();
        let record = RunRecord {
            run_id: Uuid::new_v4(),
            arm_counts,
            arm_rewards,
            q_values,
            rewards,
            cumulative_rewards,
        };

        info!(
            run_id = %record.run_id,
            total_reward = record.total_reward(),
            "Simulation run complete"
        );

        Ok(record)
    }
}
