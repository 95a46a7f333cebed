//! Facade crate for landmark tour planning.
//!
//! This crate re-exports the core domain types and exposes the exact
//! Held-Karp solver behind the `solver-dp` feature.

#![forbid(unsafe_code)]

pub use tour_core::{
    AttractivenessModel, Diagnostics, EdgeRecord, EdgeWeight, FactorKind, FactorTable,
    GraphError, HOTEL, Landmark, SolveError, SolveRequest, SolveResponse, Solver, Tour,
    TourGraph,
};

#[cfg(feature = "solver-dp")]
pub use tour_solver_dp::{
    HeldKarpSolver, HeldKarpSolverConfig, PlanError, VisitState, solve_optimal_tour,
};
