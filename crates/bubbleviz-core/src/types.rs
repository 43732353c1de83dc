//! Shared value types for the sort engine and its callers

/// Default number of elements in a generated dataset
pub const DEFAULT_DATASET_LEN: usize = 30;

/// Smallest value a generated element may take
pub const DEFAULT_MIN_VALUE: u32 = 10;

/// Largest value a generated element may take
pub const DEFAULT_MAX_VALUE: u32 = 100;

/// Default delay between animation phases, in milliseconds
pub const DEFAULT_SPEED_MS: u32 = 500;

/// Bubble sort progress: outer pass `i`, inner comparison `j`
///
/// Points at the *next* comparison to perform, i.e. `data[j]` against
/// `data[j + 1]` during pass `i`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Outer pass index; reaching `n - 1` means sorted-complete
    pub i: usize,
    /// Inner comparison index within the current pass
    pub j: usize,
}

impl Cursor {
    /// Cursor at the very first comparison
    pub const START: Cursor = Cursor { i: 0, j: 0 };

    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

/// What a single engine step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Indices that were compared (always adjacent)
    pub pair: (usize, usize),
    /// Whether the two elements were exchanged
    pub swapped: bool,
    /// Cursor after the step was applied
    pub cursor: Cursor,
}

/// Running totals since the last dataset reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: usize,
    pub swaps: usize,
}
