use crate::{item_set::ItemSet, solution::Solution};
use log::trace;

/// Scale of the value tie-break added to each item's density.
pub const TIE_BREAK_SCALE: f64 = 10000.0;

/// Density of an item, with zero-weight items ranked first when they carry value.
fn density(value: u64, weight: u64) -> f64 {
    match (value, weight) {
        (0, 0) => 0.0,
        (_, 0) => f64::INFINITY,
        (v, w) => v as f64 / w as f64,
    }
}

fn tie_break(value: u64, max_value: u64) -> f64 {
    if max_value == 0 {
        0.0
    } else {
        value as f64 / (max_value as f64 * TIE_BREAK_SCALE)
    }
}

/// Priority score for every item: value density plus `value / (max_value * 10000)`.
///
/// The second term only separates items of equal or near-equal density in favour
/// of the larger absolute value. It is a heuristic and can invert two items whose
/// densities differ by less than the tie-break scale.
pub fn priority_scores(item_set: &ItemSet) -> Vec<f64> {
    let max_value = item_set.max_value();
    item_set
        .items()
        .map(|item| density(item.value, item.weight) + tie_break(item.value, max_value))
        .collect()
}

/// Item indices in the order the greedy scan visits them.
pub fn priority_order(item_set: &ItemSet) -> Vec<usize> {
    let max_value = item_set.max_value();
    let scores = priority_scores(item_set);
    let tie_breaks: Vec<f64> = item_set
        .values()
        .iter()
        .map(|&v| tie_break(v, max_value))
        .collect();
    let mut order: Vec<usize> = (0..item_set.len()).collect();
    // Infinite scores swallow the tie-break term, so it is compared again on its own.
    // sort_by is stable, so items equal on both keep their original order
    order.sort_by(|&a, &b| {
        scores[b]
            .total_cmp(&scores[a])
            .then_with(|| tie_breaks[b].total_cmp(&tie_breaks[a]))
    });
    order
}

/// Takes each item in `order` that still fits. Items that do not fit are skipped
/// for good, but the scan always continues since a later item may be lighter.
fn fill_in_order(item_set: &ItemSet, order: impl IntoIterator<Item = usize>) -> Solution {
    let capacity = item_set.capacity();
    let mut taken = vec![false; item_set.len()];
    let mut total_weight = 0u64;
    let mut total_value = 0u64;
    for i in order {
        let weight = item_set.weight(i);
        match total_weight.checked_add(weight) {
            Some(new_weight) if new_weight <= capacity => {
                taken[i] = true;
                total_weight = new_weight;
                total_value += item_set.value(i);
            }
            _ => trace!("skipping item {} (weight {})", i, weight),
        }
    }
    Solution {
        taken,
        total_value,
        total_weight,
        is_optimal: false,
    }
}

/// Single pass heuristic ordered by value density.
pub struct GreedyDensitySolver;

impl GreedyDensitySolver {
    pub fn solve(item_set: &ItemSet) -> Solution {
        fill_in_order(item_set, priority_order(item_set))
    }
}

/// Baseline that takes items in their original order.
pub struct InOrderSolver;

impl InOrderSolver {
    pub fn solve(item_set: &ItemSet) -> Solution {
        fill_in_order(item_set, 0..item_set.len())
    }
}
