use crate::{
    dynamic::solve_exact,
    error::Result,
    greedy::{GreedyDensitySolver, InOrderSolver},
    item_set::ItemSet,
    solution::Solution,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Largest item count that is still solved exactly.
pub const EXACT_ITEM_THRESHOLD: usize = 200;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Exact up to the item threshold, greedy above it.
    #[default]
    Auto,
    Exact,
    Greedy,
    InOrder,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    pub strategy: Strategy,
    pub exact_item_threshold: usize,
    /// Upper bound on `(N + 1) * (capacity + 1)` for an automatic exact solve.
    pub max_table_cells: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            exact_item_threshold: EXACT_ITEM_THRESHOLD,
            max_table_cells: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: SolverConfig,
}

impl Dispatcher {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The strategy `solve` will run for `item_set`. Never returns `Strategy::Auto`.
    pub fn select_strategy(&self, item_set: &ItemSet) -> Strategy {
        match self.config.strategy {
            Strategy::Auto => {
                if item_set.len() > self.config.exact_item_threshold {
                    debug!(
                        "{} items above threshold {}, using greedy",
                        item_set.len(),
                        self.config.exact_item_threshold
                    );
                    return Strategy::Greedy;
                }
                match (self.config.max_table_cells, item_set.table_cells()) {
                    (Some(max_cells), Some(cells)) if cells <= max_cells => Strategy::Exact,
                    (Some(max_cells), cells) => {
                        debug!(
                            "table of {:?} cells exceeds limit {}, using greedy",
                            cells, max_cells
                        );
                        Strategy::Greedy
                    }
                    (None, _) => Strategy::Exact,
                }
            }
            strategy => strategy,
        }
    }

    pub fn solve(&self, item_set: &ItemSet) -> Result<Solution> {
        let strategy = self.select_strategy(item_set);
        let solution = match strategy {
            Strategy::Exact => solve_exact(item_set)?,
            Strategy::Greedy => GreedyDensitySolver::solve(item_set),
            Strategy::InOrder => InOrderSolver::solve(item_set),
            Strategy::Auto => unreachable!("select_strategy resolves Auto"),
        };
        info!(
            "solved {} items with {:?}: value {}, weight {}/{}, optimal {}",
            item_set.len(),
            strategy,
            solution.total_value,
            solution.total_weight,
            item_set.capacity(),
            solution.is_optimal
        );
        Ok(solution)
    }
}

/// Validates `(value, weight)` pairs and solves them with the default dispatch rule.
pub fn solve(items: &[(i64, i64)], capacity: i64) -> Result<Solution> {
    solve_item_set(&ItemSet::new(items, capacity)?)
}

pub fn solve_item_set(item_set: &ItemSet) -> Result<Solution> {
    Dispatcher::default().solve(item_set)
}
