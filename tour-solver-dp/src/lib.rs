//! Exact optimal-tour solver for small landmark universes.
//!
//! This crate provides [`HeldKarpSolver`], an implementation of the
//! [`Solver`](tour_core::Solver) trait that runs a memoised exhaustive search
//! over subsets of visited landmarks. The search maximises total
//! attractiveness and, among equally attractive tours, minimises total travel
//! time. Remaining ties go to the tour whose first differing landmark comes
//! earlier in canonical order.
//!
//! Work grows as `O(n^2 * 2^n)` in the number of landmarks, so the solver
//! refuses universes above [`HeldKarpSolverConfig::max_landmarks`].
//!
//! # Examples
//!
//! ```
//! use tour_core::{EdgeRecord, FactorTable, Landmark};
//! use tour_solver_dp::solve_optimal_tour;
//!
//! # fn main() -> Result<(), tour_solver_dp::PlanError> {
//! let edges = [
//!     EdgeRecord::new("Hotel", "Tower", 6.0, 10.0),
//!     EdgeRecord::new("Tower", "Hotel", 0.0, 10.0),
//! ];
//! let interest = FactorTable::from_iter([(Landmark::new("Tower"), 1.0)]);
//! let response = solve_optimal_tour(&edges, interest, FactorTable::new(), &Landmark::hotel())?;
//!
//! assert_eq!(response.tour.landmarks.len(), 3);
//! assert_eq!(response.tour.total_score, 6.0);
//! assert_eq!(response.tour.total_time, 20.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod memo;
mod solver;

pub use memo::VisitState;
pub use solver::{HeldKarpSolver, HeldKarpSolverConfig, PlanError, solve_optimal_tour};
