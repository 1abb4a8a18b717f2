use crate::{
    error::{Error, Result},
    item_set::ItemSet,
    solution::Solution,
};
use log::debug;

/// Best value per `(remaining capacity, items considered)` for one instance.
///
/// Rows are indexed by the number of leading items considered, columns by the
/// remaining capacity. Rows are appended in ascending order and never written
/// again, so every entry is final once it can be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoTable {
    capacity: u64,
    width: usize,
    rows: usize,
    cells: Vec<u64>,
}

impl MemoTable {
    fn allocate(capacity: u64, num_items: usize) -> Option<Self> {
        let width = usize::try_from(capacity).ok()?.checked_add(1)?;
        let total = width.checked_mul(num_items.checked_add(1)?)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(total).ok()?;
        Some(Self {
            capacity,
            width,
            rows: 0,
            cells,
        })
    }

    fn push_row(&mut self, row: impl Iterator<Item = u64>) {
        let before = self.cells.len();
        self.cells.extend(row);
        debug_assert_eq!(self.cells.len() - before, self.width);
        self.rows += 1;
    }

    fn row(&self, k: usize) -> &[u64] {
        &self.cells[k * self.width..(k + 1) * self.width]
    }

    /// Best value using the first `k` items under `capacity`, if that cell exists.
    pub fn get(&self, capacity: u64, k: usize) -> Option<u64> {
        if capacity > self.capacity || k >= self.rows {
            return None;
        }
        Some(self.row(k)[capacity as usize])
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of items the table covers (one less than its row count).
    pub fn item_count(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn best_value(&self) -> u64 {
        self.get(self.capacity, self.item_count()).unwrap_or(0)
    }
}

/// Exact solver over the `f(capacity, k)` recurrence, filled bottom-up.
pub struct ExactDpSolver;

impl ExactDpSolver {
    pub fn solve(item_set: &ItemSet) -> Result<(u64, MemoTable)> {
        Self::fill(item_set, item_set.capacity())
    }

    /// Solves under `capacity` instead of the instance's own bound.
    pub fn solve_with_capacity(item_set: &ItemSet, capacity: i64) -> Result<(u64, MemoTable)> {
        if capacity < 0 {
            return Err(Error::CapacityOverflow {
                capacity,
                items: item_set.len(),
            });
        }
        Self::fill(item_set, capacity as u64)
    }

    fn fill(item_set: &ItemSet, capacity: u64) -> Result<(u64, MemoTable)> {
        let n = item_set.len();
        let mut memo = MemoTable::allocate(capacity, n).ok_or(Error::TableTooLarge {
            capacity,
            items: n,
        })?;
        debug!(
            "filling exact table: {} items, capacity {}, {} cells",
            n,
            capacity,
            memo.width * (n + 1)
        );

        let width = memo.width;
        // f(c, 0) = 0
        memo.push_row(std::iter::repeat(0).take(width));

        for k in 1..=n {
            let value = item_set.value(k - 1);
            let weight = item_set.weight(k - 1);
            let previous = memo.row(k - 1).to_vec();
            memo.push_row((0..width).map(|c| {
                let without = previous[c];
                if weight <= c as u64 {
                    without.max(previous[c - weight as usize] + value)
                } else {
                    without
                }
            }));
        }

        Ok((memo.best_value(), memo))
    }
}

/// Recovers one optimal subset from a filled [`MemoTable`].
pub struct SolutionReconstructor;

impl SolutionReconstructor {
    /// Walks the table from `(capacity, N)` down to row 0. Item `k` is taken only
    /// when it strictly improves on `k - 1` items at the running capacity, so
    /// equal-value alternatives resolve toward leaving the item out.
    pub fn reconstruct(item_set: &ItemSet, memo: &MemoTable) -> Vec<bool> {
        let n = item_set.len();
        assert_eq!(
            memo.item_count(),
            n,
            "memo table does not cover this item set"
        );
        let mut taken = vec![false; n];
        let mut capacity = memo.capacity() as usize;
        for k in (1..=n).rev() {
            if memo.row(k)[capacity] > memo.row(k - 1)[capacity] {
                taken[k - 1] = true;
                capacity -= item_set.weight(k - 1) as usize;
            }
        }
        taken
    }
}

/// Fills a fresh table, reconstructs from it and drops it.
pub fn solve_exact(item_set: &ItemSet) -> Result<Solution> {
    let (best_value, memo) = ExactDpSolver::solve(item_set)?;
    let taken = SolutionReconstructor::reconstruct(item_set, &memo);
    let solution = Solution::from_taken(item_set, taken, true);
    debug_assert_eq!(solution.total_value, best_value);
    Ok(solution)
}
