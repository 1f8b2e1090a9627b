use crate::analysis::{Analysis, Scenario};
use std::collections::{HashMap, VecDeque};

/// Exact identity of a computation: the bit patterns of every input plus the
/// sampling resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputKey([u64; 5]);

impl InputKey {
    pub fn new(scenario: &Scenario, num_points: usize) -> Self {
        // Adding 0.0 folds -0.0 into 0.0 so both hit the same entry.
        let bits = |value: f64| (value + 0.0).to_bits();
        let economics = &scenario.economics;
        Self([
            bits(economics.price()),
            bits(economics.unit_cost()),
            bits(economics.fixed_cost()),
            bits(scenario.max_quantity),
            num_points as u64,
        ])
    }
}

/// Recently computed analyses keyed by their inputs, owned by the caller.
///
/// Oldest entries are evicted first once `capacity` is reached.
#[derive(Debug)]
pub struct ResultCache {
    capacity: usize,
    entries: HashMap<InputKey, Analysis>,
    order: VecDeque<InputKey>,
    hits: u64,
    misses: u64,
}

impl ResultCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Returns the cached analysis for `key`, computing and storing it on a miss.
    pub fn get_or_compute<E>(
        &mut self,
        key: InputKey,
        compute: impl FnOnce() -> Result<Analysis, E>,
    ) -> Result<&Analysis, E> {
        if self.entries.contains_key(&key) {
            self.hits += 1;
            tracing::debug!(?key, "Result cache hit.");
        } else {
            self.misses += 1;
            let analysis = compute()?;
            if self.entries.len() >= self.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.entries.remove(&oldest);
                }
            }
            self.entries.insert(key, analysis);
            self.order.push_back(key);
        }
        Ok(&self.entries[&key])
    }
}
