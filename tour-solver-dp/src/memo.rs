//! Visit-state bitmasks and the per-solve memo table.

use std::collections::HashMap;

use tour_core::EdgeWeight;

/// Set of visited landmarks, one bit per canonical landmark index.
///
/// # Examples
/// ```
/// use tour_solver_dp::VisitState;
///
/// let state = VisitState::single(0).with(2);
/// assert!(state.contains(0));
/// assert!(!state.contains(1));
/// assert_eq!(state.len(), 2);
/// assert!(!state.covers(3));
/// assert!(state.with(1).covers(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VisitState(u32);

impl VisitState {
    /// Largest landmark universe a state can describe.
    pub const CAPACITY: usize = u32::BITS as usize;

    /// State containing only `index`.
    #[must_use]
    pub fn single(index: usize) -> Self {
        Self::default().with(index)
    }

    /// State with `index` added.
    ///
    /// Indices at or beyond [`Self::CAPACITY`] are ignored.
    #[must_use]
    pub fn with(self, index: usize) -> Self {
        Self(self.0 | bit(index))
    }

    /// Whether `index` has been visited.
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        self.0 & bit(index) != 0
    }

    /// Number of visited landmarks.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether no landmark has been visited.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every landmark of a `count`-sized universe has been visited.
    #[must_use]
    pub fn covers(self, count: usize) -> bool {
        let full = if count >= Self::CAPACITY {
            u32::MAX
        } else {
            bit(count).wrapping_sub(1)
        };
        self.0 & full == full
    }
}

fn bit(index: usize) -> u32 {
    u32::try_from(index)
        .ok()
        .and_then(|shift| 1_u32.checked_shl(shift))
        .unwrap_or(0)
}

/// Cached result for one `(current, visited)` state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MemoEntry {
    /// Best score and time achievable from the state, closing leg included.
    pub(crate) totals: EdgeWeight,
    /// Canonical index of the landmark to visit next.
    pub(crate) next: usize,
}

/// Write-once memo table owned by a single solve.
#[derive(Debug, Default)]
pub(crate) struct MemoTable {
    entries: HashMap<(usize, VisitState), MemoEntry>,
}

impl MemoTable {
    pub(crate) fn get(&self, current: usize, visited: VisitState) -> Option<MemoEntry> {
        self.entries.get(&(current, visited)).copied()
    }

    /// Store the first result computed for a state; later writes are ignored.
    pub(crate) fn record(&mut self, current: usize, visited: VisitState, entry: MemoEntry) {
        self.entries.entry((current, visited)).or_insert(entry);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
