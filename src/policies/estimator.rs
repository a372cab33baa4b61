use serde::Serialize;

/// Incremental per-arm value estimator shared by every policy: pull
/// counts, cumulative rewards and running mean estimates, updated once
/// per pull.
#[derive(Clone, Debug, Serialize)]
pub struct Estimator {
    pulls: Vec<u64>,
    rewards: Vec<f64>,
    values: Vec<f64>,
}

impl Estimator {
    pub fn new(k_arms: usize) -> Self {
        Self {
            pulls: vec![0; k_arms],
            rewards: vec![0.0; k_arms],
            values: vec![0.0; k_arms],
        }
    }

    pub fn k_arms(&self) -> usize {
        self.values.len()
    }

    /// Exact incremental sample mean: after n pulls of an arm the estimate
    /// equals the arithmetic mean of the n observed rewards.
    pub fn record_pull(&mut self, arm: usize, reward: f64) {
        self.pulls[arm] += 1;
        self.rewards[arm] += reward;
        self.values[arm] += (reward - self.values[arm]) / self.pulls[arm] as f64;
    }

    pub fn estimate(&self, arm: usize) -> f64 {
        self.values[arm]
    }

    pub fn estimates(&self) -> &[f64] {
        &self.values
    }

    pub fn pulls(&self, arm: usize) -> u64 {
        self.pulls[arm]
    }

    /// Arm with the highest estimate. Ties break toward the lowest index:
    /// the scan replaces the incumbent only on strict improvement.
    pub fn best_arm(&self) -> usize {
        let mut best = 0;
        let mut best_value = self.values[0];

        for (arm, &value) in self.values.iter().enumerate().skip(1) {
            if value > best_value {
                best = arm;
                best_value = value;
            }
        }

        best
    }

    pub(crate) fn into_parts(self) -> (Vec<u64>, Vec<f64>, Vec<f64>) {
        (self.pulls, self.rewards, self.values)
    }
}
