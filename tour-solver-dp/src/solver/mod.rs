//! `HeldKarpSolver` implementation.
//!
//! The search is a depth-first recursion over `(current, visited)` states.
//! Each state is evaluated once and cached; the tour is rebuilt afterwards by
//! replaying the cached next-landmark decisions from the start.

use std::time::Instant;

use log::{debug, info};
use thiserror::Error;
use tour_core::{
    AttractivenessModel, Diagnostics, EdgeRecord, EdgeWeight, FactorTable, GraphError, Landmark,
    SolveError, SolveRequest, SolveResponse, Solver, Tour, TourGraph,
};

use crate::memo::{MemoEntry, MemoTable, VisitState};

/// Configuration for [`HeldKarpSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeldKarpSolverConfig {
    /// Largest landmark universe the solver accepts.
    ///
    /// Values above [`VisitState::CAPACITY`] are capped to it.
    pub max_landmarks: usize,
}

impl Default for HeldKarpSolverConfig {
    fn default() -> Self {
        Self { max_landmarks: 20 }
    }
}

/// Exact solver visiting every landmark once and returning to the start.
///
/// The solver owns an immutable [`TourGraph`]. Each call to
/// [`Solver::solve`] creates its own memo table and drops it on return, so
/// repeated solves never observe each other's state.
#[derive(Debug, Clone)]
pub struct HeldKarpSolver {
    graph: TourGraph,
    config: HeldKarpSolverConfig,
}

impl HeldKarpSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new(graph: TourGraph) -> Self {
        Self::with_config(graph, HeldKarpSolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(graph: TourGraph, config: HeldKarpSolverConfig) -> Self {
        Self { graph, config }
    }

    /// Graph the solver searches.
    #[must_use]
    pub const fn graph(&self) -> &TourGraph {
        &self.graph
    }

    fn limit(&self) -> usize {
        self.config.max_landmarks.min(VisitState::CAPACITY)
    }
}

impl Solver for HeldKarpSolver {
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
        let started_at = Instant::now();
        let start =
            self.graph
                .index_of(request.start.as_str())
                .ok_or_else(|| SolveError::UnknownStart {
                    start: request.start.clone(),
                })?;
        let count = self.graph.len();
        let limit = self.limit();
        if count > limit {
            return Err(SolveError::TooManyLandmarks { count, limit });
        }

        debug!("searching tours over {count} landmarks from {}", request.start);
        let mut search = Search::new(&self.graph, start);
        let totals = search.best_from(start, VisitState::single(start))?;
        let landmarks = search.reconstruct()?;
        let states_evaluated = u64::try_from(search.memo.len()).unwrap_or(u64::MAX);
        info!(
            "optimal tour of {} legs scores {} in {} time units",
            landmarks.len().saturating_sub(1),
            totals.score,
            totals.time
        );

        Ok(SolveResponse {
            tour: Tour {
                landmarks,
                total_score: totals.score,
                total_time: totals.time,
            },
            diagnostics: Diagnostics {
                solve_time: started_at.elapsed(),
                states_evaluated,
            },
        })
    }
}

/// State for one solve: the graph, the anchor and the private memo table.
struct Search<'graph> {
    graph: &'graph TourGraph,
    start: usize,
    memo: MemoTable,
}

impl<'graph> Search<'graph> {
    fn new(graph: &'graph TourGraph, start: usize) -> Self {
        Self {
            graph,
            start,
            memo: MemoTable::default(),
        }
    }

    /// Best `(score, time)` collectable from `current` having seen `visited`.
    #[expect(
        clippy::float_arithmetic,
        reason = "tour totals accumulate floating-point edge weights"
    )]
    fn best_from(&mut self, current: usize, visited: VisitState) -> Result<EdgeWeight, SolveError> {
        if visited.covers(self.graph.len()) {
            return Ok(self.closing_leg(current));
        }
        if let Some(entry) = self.memo.get(current, visited) {
            return Ok(entry.totals);
        }

        let mut best: Option<MemoEntry> = None;
        for next in 0..self.graph.len() {
            if visited.contains(next) {
                continue;
            }
            let edge = self
                .graph
                .weight_between(current, next)
                .ok_or_else(|| self.missing_edge(current, next))?;
            let rest = self.best_from(next, visited.with(next))?;
            let candidate = MemoEntry {
                totals: EdgeWeight::new(edge.score + rest.score, edge.time + rest.time),
                next,
            };
            if best.is_none_or(|incumbent| improves(candidate.totals, incumbent.totals)) {
                best = Some(candidate);
            }
        }

        let Some(entry) = best else {
            return Ok(self.closing_leg(current));
        };
        self.memo.record(current, visited, entry);
        Ok(entry.totals)
    }

    fn closing_leg(&self, current: usize) -> EdgeWeight {
        if self.graph.weight_between(current, self.start).is_none() {
            debug!(
                "no return edge from {} to {}; counting it as zero",
                self.label(current),
                self.label(self.start)
            );
        }
        self.graph.return_weight(current, self.start)
    }

    /// Replay cached decisions from the start into a closed tour.
    fn reconstruct(&self) -> Result<Vec<Landmark>, SolveError> {
        let count = self.graph.len();
        let mut landmarks = Vec::with_capacity(count + 1);
        let mut current = self.start;
        let mut visited = VisitState::single(current);
        landmarks.push(self.label(current));
        while !visited.covers(count) {
            let entry = self.memo.get(current, visited).ok_or_else(|| {
                SolveError::IncompleteReconstruction {
                    at: self.label(current),
                }
            })?;
            current = entry.next;
            visited = visited.with(current);
            landmarks.push(self.label(current));
        }
        landmarks.push(self.label(self.start));
        Ok(landmarks)
    }

    fn missing_edge(&self, from: usize, to: usize) -> SolveError {
        SolveError::MissingIntermediateEdge {
            from: self.label(from),
            to: self.label(to),
        }
    }

    fn label(&self, index: usize) -> Landmark {
        self.graph
            .landmark(index)
            .cloned()
            .unwrap_or_else(|| Landmark::new(format!("#{index}")))
    }
}

/// Higher score wins; an exactly equal score falls back to lower time.
///
/// A full tie keeps the incumbent, which was found earlier in canonical order.
/// A NaN total never beats a comparable one, even when it was found first.
#[expect(
    clippy::float_cmp,
    reason = "exact score ties are the documented tie-break trigger"
)]
fn improves(candidate: EdgeWeight, incumbent: EdgeWeight) -> bool {
    if incumbent.score.is_nan() {
        return !candidate.score.is_nan();
    }
    candidate.score > incumbent.score
        || (candidate.score == incumbent.score && candidate.time < incumbent.time)
}

/// Errors from [`solve_optimal_tour`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The raw input could not be turned into a graph.
    #[error("invalid tour input: {0}")]
    Graph(#[from] GraphError),
    /// The solver could not produce a complete tour.
    #[error("no complete tour: {0}")]
    Solve(#[from] SolveError),
}

/// Derive the graph from raw inputs and solve it from `start`.
///
/// # Errors
/// Returns [`PlanError::Graph`] for input that fails validation and
/// [`PlanError::Solve`] when no complete tour exists.
pub fn solve_optimal_tour(
    edges: &[EdgeRecord],
    interest: FactorTable,
    load: FactorTable,
    start: &Landmark,
) -> Result<SolveResponse, PlanError> {
    let model = AttractivenessModel::new(interest, load)?;
    let graph = TourGraph::build(edges, &model)?;
    let solver = HeldKarpSolver::new(graph);
    Ok(solver.solve(&SolveRequest {
        start: start.clone(),
    })?)
}
