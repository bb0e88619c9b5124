//! Search procedures for the set cover problem.

use serde_json::{json, Value};

use crate::cover::{SetCoverInstance, Solution};

/// trivial strategies (take everything, random subset)
pub mod trivial;

/// random add/remove walk until a cover is found
pub mod greedy_local_search;

/// Chvátal's cost-effectiveness greedy
pub mod greedy_chvatal;

/// removal of the sets covered by the other selected sets
pub mod redundancy;

/// single flip hill climbing
pub mod hill_climbing;

/// outcome of a search procedure
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// solution found
    pub solution: Solution,
    /// its cost
    pub cost: f64,
    /// true if it covers the universe
    pub valid: bool,
    /// number of iterations performed
    pub nb_iter: u64,
}

impl SearchResult {
    /// evaluates a solution and wraps it
    pub fn new(inst:&SetCoverInstance, solution:Solution, nb_iter:u64) -> Self {
        let cost = inst.cost(&solution);
        let valid = inst.is_valid(&solution);
        Self { solution, cost, valid, nb_iter }
    }

    /// statistics of the search as a JSON object
    pub fn json_statistics(&self) -> Value {
        json!({
            "cost": self.cost,
            "valid": self.valid,
            "nb_iter": self.nb_iter,
            "nb_selected": self.solution.iter().filter(|b| **b).count(),
        })
    }
}
