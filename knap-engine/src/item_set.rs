use crate::error::{Error, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub index: usize,
    pub value: u64,
    pub weight: u64,
}

/// Parameters for a generated instance. `budget` is the capacity as a
/// percentage of the total item weight.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub num_items: usize,
    pub budget: u32,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            num_items: 100,
            budget: 25,
        }
    }
}

fn checked_total(xs: &[u64]) -> Option<u64> {
    xs.iter().try_fold(0u64, |acc, &x| acc.checked_add(x))
}

#[derive(Serialize, Deserialize)]
struct ItemSetData {
    values: Vec<u64>,
    weights: Vec<u64>,
    capacity: u64,
}

/// Read-only view over parallel value/weight arrays plus a capacity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "ItemSetData", into = "ItemSetData")]
pub struct ItemSet {
    values: Vec<u64>,
    weights: Vec<u64>,
    capacity: u64,
}

impl ItemSet {
    pub fn new(pairs: &[(i64, i64)], capacity: i64) -> Result<Self> {
        if capacity < 0 {
            return Err(Error::InvalidInstance(format!(
                "Capacity ({}) is negative",
                capacity
            )));
        }
        let mut values = Vec::with_capacity(pairs.len());
        let mut weights = Vec::with_capacity(pairs.len());
        for (i, &(value, weight)) in pairs.iter().enumerate() {
            if value < 0 {
                return Err(Error::InvalidInstance(format!(
                    "Item {} has negative value ({})",
                    i, value
                )));
            }
            if weight < 0 {
                return Err(Error::InvalidInstance(format!(
                    "Item {} has negative weight ({})",
                    i, weight
                )));
            }
            values.push(value as u64);
            weights.push(weight as u64);
        }
        Self::from_parts(values, weights, capacity as u64)
    }

    /// Like [`ItemSet::new`], but also checks the item count declared by a problem header.
    pub fn with_declared_count(
        declared: usize,
        pairs: &[(i64, i64)],
        capacity: i64,
    ) -> Result<Self> {
        if declared != pairs.len() {
            return Err(Error::InvalidInstance(format!(
                "Declared {} items but found {}",
                declared,
                pairs.len()
            )));
        }
        Self::new(pairs, capacity)
    }

    pub fn from_parts(values: Vec<u64>, weights: Vec<u64>, capacity: u64) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(Error::InvalidInstance(format!(
                "Got {} values but {} weights",
                values.len(),
                weights.len()
            )));
        }
        // Every total a solver computes is bounded by these two sums
        checked_total(&values).ok_or_else(|| {
            Error::InvalidInstance("Total value does not fit in 64 bits".into())
        })?;
        checked_total(&weights).ok_or_else(|| {
            Error::InvalidInstance("Total weight does not fit in 64 bits".into())
        })?;
        Ok(Self {
            values,
            weights,
            capacity,
        })
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> anyhow::Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());

        // Weakly correlated: value sits within +/- 10 of the weight
        let weights: Vec<u64> = (0..track.num_items)
            .map(|_| rng.gen_range(1..=50))
            .collect();
        let values: Vec<u64> = weights
            .iter()
            .map(|&w| (w + rng.gen_range(0..=20)).saturating_sub(10))
            .collect();

        let capacity = (track.budget as f64 / 100.0 * weights.iter().sum::<u64>() as f64) as u64;

        Ok(Self::from_parts(values, weights, capacity)?)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn value(&self, index: usize) -> u64 {
        self.values[index]
    }

    pub fn weight(&self, index: usize) -> u64 {
        self.weights[index]
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    pub fn item(&self, index: usize) -> Item {
        Item {
            index,
            value: self.values[index],
            weight: self.weights[index],
        }
    }

    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        (0..self.len()).map(move |i| self.item(i))
    }

    pub fn max_value(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Number of cells an exact table over this instance needs, if it fits in a `u64`.
    pub fn table_cells(&self) -> Option<u64> {
        (self.len() as u64 + 1).checked_mul(self.capacity.checked_add(1)?)
    }
}

impl TryFrom<ItemSetData> for ItemSet {
    type Error = Error;

    fn try_from(data: ItemSetData) -> Result<Self> {
        ItemSet::from_parts(data.values, data.weights, data.capacity)
    }
}

impl From<ItemSet> for ItemSetData {
    fn from(set: ItemSet) -> Self {
        Self {
            values: set.values,
            weights: set.weights,
            capacity: set.capacity,
        }
    }
}
