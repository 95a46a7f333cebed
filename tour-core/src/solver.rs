//! Solver boundary: request, response and error types.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Landmark;

/// Parameters for a solve request.
///
/// # Examples
/// ```rust
/// use tour_core::{Landmark, SolveRequest};
///
/// let request = SolveRequest::default();
/// assert_eq!(request.start, Landmark::hotel());
///
/// let custom = SolveRequest::from_start("Station");
/// assert_eq!(custom.start.as_str(), "Station");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    /// Landmark the tour starts from and returns to.
    pub start: Landmark,
}

impl SolveRequest {
    /// Request a tour anchored at `start`.
    pub fn from_start(start: impl Into<Landmark>) -> Self {
        Self {
            start: start.into(),
        }
    }
}

impl Default for SolveRequest {
    fn default() -> Self {
        Self {
            start: Landmark::hotel(),
        }
    }
}

/// A closed tour with its accumulated totals.
///
/// `landmarks` begins and ends at the start landmark and lists every other
/// landmark exactly once in between.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tour {
    /// Visiting order, including the closing return to the start.
    pub landmarks: Vec<Landmark>,
    /// Sum of derived attractiveness over every leg.
    pub total_score: f64,
    /// Sum of travel time over every leg.
    pub total_time: f64,
}

impl Tour {
    /// Number of legs travelled.
    pub fn legs(&self) -> usize {
        self.landmarks.len().saturating_sub(1)
    }
}

/// Metadata about how a response was produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent in the solver.
    pub solve_time: Duration,
    /// Distinct search states evaluated and cached.
    pub states_evaluated: u64,
}

/// Response from a successful solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveResponse {
    /// The optimal tour.
    pub tour: Tour,
    /// Solver diagnostics.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The start landmark does not appear in the graph.
    #[error("start landmark {start} is not part of the graph")]
    UnknownStart {
        /// Requested start label.
        start: Landmark,
    },
    /// The landmark universe is too large for exhaustive search.
    #[error("{count} landmarks exceed the solver limit of {limit}")]
    TooManyLandmarks {
        /// Landmarks in the graph.
        count: usize,
        /// Configured upper bound.
        limit: usize,
    },
    /// An edge needed to continue the tour does not exist.
    #[error("no edge from {from} to {to}; every landmark must be reachable")]
    MissingIntermediateEdge {
        /// Landmark the tour was at.
        from: Landmark,
        /// Unvisited landmark with no incoming edge from `from`.
        to: Landmark,
    },
    /// Following cached decisions did not produce a complete tour.
    #[error("no cached decision while rebuilding the tour at {at}")]
    IncompleteReconstruction {
        /// Landmark where reconstruction stopped.
        at: Landmark,
    },
}

/// Find the best closed tour through a landmark graph.
///
/// Implementations return a [`SolveError`] rather than a partial tour when no
/// complete tour can be produced.
/// Solvers must be `Send + Sync` to operate safely across threads.
pub trait Solver: Send + Sync {
    /// Solve a request, producing a tour or an error.
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError>;
}
