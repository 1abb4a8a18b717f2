use crate::{
    error::{Error, Result},
    item_set::ItemSet,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub taken: Vec<bool>,
    pub total_value: u64,
    pub total_weight: u64,
    pub is_optimal: bool,
}

impl Solution {
    pub fn empty(num_items: usize, is_optimal: bool) -> Self {
        Self {
            taken: vec![false; num_items],
            total_value: 0,
            total_weight: 0,
            is_optimal,
        }
    }

    /// Builds a solution from an indicator vector, summing totals from `item_set`.
    pub fn from_taken(item_set: &ItemSet, taken: Vec<bool>, is_optimal: bool) -> Self {
        let (total_value, total_weight) = taken
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t)
            .fold((0, 0), |(v, w), (i, _)| {
                (v + item_set.value(i), w + item_set.weight(i))
            });
        Self {
            taken,
            total_value,
            total_weight,
            is_optimal,
        }
    }

    pub fn items(&self) -> Vec<usize> {
        self.taken
            .iter()
            .enumerate()
            .filter_map(|(i, &t)| if t { Some(i) } else { None })
            .collect()
    }

    pub fn indicators(&self) -> Vec<u8> {
        self.taken.iter().map(|&t| t as u8).collect()
    }

    pub fn optimality_flag(&self) -> u8 {
        self.is_optimal as u8
    }
}

impl ItemSet {
    /// Total value of a list of selected item indices, rejecting duplicates,
    /// out of range indices and selections over capacity.
    pub fn evaluate_total_value(&self, items: &[usize]) -> Result<u64> {
        let selected_items: HashSet<usize> = items.iter().cloned().collect();
        if selected_items.len() != items.len() {
            return Err(Error::InvalidSolution("Duplicate items selected.".into()));
        }

        let total_weight = selected_items
            .iter()
            .map(|&item| {
                if item >= self.len() {
                    return Err(Error::InvalidSolution(format!(
                        "Item ({}) is out of bounds",
                        item
                    )));
                }
                Ok(self.weight(item))
            })
            .collect::<Result<Vec<_>>>()?
            .iter()
            .try_fold(0u64, |acc, &w| acc.checked_add(w));

        let total_weight = total_weight.ok_or_else(|| {
            Error::InvalidSolution(format!(
                "Total weight exceeded capacity ({})",
                self.capacity()
            ))
        })?;
        if total_weight > self.capacity() {
            return Err(Error::InvalidSolution(format!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity()
            )));
        }

        Ok(selected_items.iter().map(|&i| self.value(i)).sum())
    }

    /// Checks every invariant a solution must satisfy against this instance.
    pub fn verify_solution(&self, solution: &Solution) -> Result<u64> {
        if solution.taken.len() != self.len() {
            return Err(Error::InvalidSolution(format!(
                "Solution covers {} items but instance has {}",
                solution.taken.len(),
                self.len()
            )));
        }
        let total_value = self.evaluate_total_value(&solution.items())?;
        if total_value != solution.total_value {
            return Err(Error::InvalidSolution(format!(
                "Declared total value ({}) does not match selected items ({})",
                solution.total_value, total_value
            )));
        }
        let total_weight: u64 = solution.items().iter().map(|&i| self.weight(i)).sum();
        if total_weight != solution.total_weight {
            return Err(Error::InvalidSolution(format!(
                "Declared total weight ({}) does not match selected items ({})",
                solution.total_weight, total_weight
            )));
        }
        Ok(total_value)
    }
}
