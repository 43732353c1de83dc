//! Sort engine - bubble sort advanced one comparison at a time
//!
//! The engine owns the dataset and the `(i, j)` cursor. There is no early
//! exit: the dataset counts as sorted only once the cursor has walked every
//! pass, so any input of length `n` takes exactly `n(n-1)/2` steps.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::DatasetConfig;
use crate::types::{Cursor, SortStats, StepOutcome};

/// Step-wise bubble sort over a randomly generated dataset
#[derive(Debug)]
pub struct SortEngine {
    data: Vec<u32>,
    cursor: Cursor,
    stats: SortStats,
    value_range: RangeInclusive<u32>,
    rng: StdRng,
}

impl SortEngine {
    /// Create an engine with a freshly generated dataset
    ///
    /// Uses the configured seed when present, otherwise seeds from the OS.
    pub fn new(config: &DatasetConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut engine = Self {
            data: Vec::new(),
            cursor: Cursor::START,
            stats: SortStats::default(),
            value_range: config.value_range(),
            rng,
        };
        engine.reset(config.len);
        engine
    }

    /// Create an engine over a known dataset
    ///
    /// Later calls to [`reset`](Self::reset) generate values in the default
    /// range.
    pub fn from_values(values: Vec<u32>) -> Self {
        let config = DatasetConfig::default();
        Self {
            data: values,
            cursor: Cursor::START,
            stats: SortStats::default(),
            value_range: config.value_range(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the dataset with `len` fresh random values and rewind the cursor
    pub fn reset(&mut self, len: usize) {
        let range = self.value_range.clone();
        self.data = (0..len)
            .map(|_| self.rng.random_range(range.clone()))
            .collect();
        self.cursor = Cursor::START;
        self.stats = SortStats::default();
        log::debug!("engine: generated {} values in {:?}", len, range);
    }

    /// True once every pass has been walked (`i >= n - 1`)
    pub fn is_sorted(&self) -> bool {
        self.cursor.i >= self.data.len().saturating_sub(1)
    }

    /// The pair the next [`step`](Self::step) will compare, if any
    pub fn next_pair(&self) -> Option<(usize, usize)> {
        if self.is_sorted() {
            None
        } else {
            Some((self.cursor.j, self.cursor.j + 1))
        }
    }

    /// Perform one comparison (and swap if out of order), then advance
    ///
    /// Returns `None` without touching anything once sorted.
    pub fn step(&mut self) -> Option<StepOutcome> {
        let (a, b) = self.next_pair()?;

        let swapped = self.data[a] > self.data[b];
        if swapped {
            self.data.swap(a, b);
            self.stats.swaps += 1;
        }
        self.stats.comparisons += 1;

        let n = self.data.len();
        self.cursor.j += 1;
        if self.cursor.j >= n - 1 - self.cursor.i {
            self.cursor.j = 0;
            self.cursor.i += 1;
        }

        Some(StepOutcome {
            pair: (a, b),
            swapped,
            cursor: self.cursor,
        })
    }

    pub fn values(&self) -> &[u32] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn stats(&self) -> SortStats {
        self.stats
    }

    /// Range new values are drawn from
    pub fn value_range(&self) -> RangeInclusive<u32> {
        self.value_range.clone()
    }
}
