//! Core domain types for landmark tour planning.
//!
//! The crate models a small universe of named landmarks connected by directed
//! edges. Each edge carries a derived attractiveness score and a travel time.
//! The [`AttractivenessModel`] turns raw edge records into weights, the
//! [`TourGraph`] holds them for lookup, and the [`Solver`] trait describes
//! engines that turn a graph into an optimal closed [`Tour`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod attractiveness;
pub mod graph;
pub mod model;
pub mod solver;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use attractiveness::AttractivenessModel;
pub use graph::{GraphError, TourGraph};
pub use model::{EdgeRecord, EdgeWeight, FactorKind, FactorTable, HOTEL, Landmark};
pub use solver::{Diagnostics, SolveError, SolveRequest, SolveResponse, Solver, Tour};
