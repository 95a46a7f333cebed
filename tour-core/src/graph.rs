//! Directed graph of derived edge weights over a canonical landmark list.
//!
//! The landmark universe is every label seen as either endpoint of a raw
//! record, ordered by first appearance. Only edges present in the records
//! exist; the graph is never assumed complete. Weights are stored in a dense
//! `n x n` table indexed by canonical position so the solver can address
//! landmarks by index.

use std::collections::HashMap;

use log::warn;
use thiserror::Error;

use crate::attractiveness::AttractivenessModel;
use crate::model::{EdgeRecord, EdgeWeight, FactorKind, Landmark};

/// Errors raised while validating raw input against the data model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A record named an empty or whitespace-only landmark.
    #[error("edge record {position} has an empty landmark label")]
    EmptyLandmark {
        /// Zero-based position of the record in the input sequence.
        position: usize,
    },
    /// A record carried a NaN or infinite base score or travel time, or its
    /// derived score overflowed.
    #[error("edge {from} -> {to} has a non-finite score or travel time")]
    NonFiniteEdge {
        /// Source landmark.
        from: Landmark,
        /// Destination landmark.
        to: Landmark,
    },
    /// An interest or load value was NaN or infinite.
    #[error("{kind} value for {landmark} is not finite")]
    NonFiniteFactor {
        /// Landmark whose value is invalid.
        landmark: Landmark,
        /// Table the value came from.
        kind: FactorKind,
    },
}

/// Immutable weighted graph built once from raw records.
///
/// # Examples
/// ```
/// use tour_core::{AttractivenessModel, EdgeRecord, FactorTable, TourGraph};
///
/// # fn main() -> Result<(), tour_core::GraphError> {
/// let interest = FactorTable::from_iter([("A".into(), 1.0), ("Hotel".into(), 1.0)]);
/// let model = AttractivenessModel::new(interest, FactorTable::new())?;
/// let records = [
///     EdgeRecord::new("Hotel", "A", 4.0, 2.0),
///     EdgeRecord::new("A", "Hotel", 0.0, 2.0),
/// ];
/// let graph = TourGraph::build(&records, &model)?;
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.weight("Hotel", "A").map(|w| w.score), Some(4.0));
/// assert!(graph.weight("A", "A").is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TourGraph {
    landmarks: Vec<Landmark>,
    positions: HashMap<Landmark, usize>,
    weights: Vec<Option<EdgeWeight>>,
}

impl TourGraph {
    /// Derive weights for every record and index the landmark universe.
    ///
    /// A later record for the same ordered pair replaces the earlier weight.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyLandmark`] for blank labels and
    /// [`GraphError::NonFiniteEdge`] for NaN or infinite base values, or for
    /// a derived score that overflows once interest and load are applied.
    pub fn build(records: &[EdgeRecord], model: &AttractivenessModel) -> Result<Self, GraphError> {
        let mut landmarks = Vec::new();
        let mut positions = HashMap::new();
        for (position, record) in records.iter().enumerate() {
            validate_record(position, record)?;
            for landmark in [&record.from, &record.to] {
                if !positions.contains_key(landmark) {
                    positions.insert(landmark.clone(), landmarks.len());
                    landmarks.push(landmark.clone());
                }
            }
        }

        let size = landmarks.len();
        let mut weights = vec![None; size * size];
        for record in records {
            let (Some(&from), Some(&to)) = (positions.get(&record.from), positions.get(&record.to))
            else {
                continue;
            };
            let weight = model.derive(record);
            if !weight.score.is_finite() {
                return Err(GraphError::NonFiniteEdge {
                    from: record.from.clone(),
                    to: record.to.clone(),
                });
            }
            if let Some(slot) = weights.get_mut(from * size + to) {
                if slot.is_some() {
                    warn!(
                        "duplicate edge {} -> {}; keeping the later record",
                        record.from, record.to
                    );
                }
                *slot = Some(weight);
            }
        }

        Ok(Self {
            landmarks,
            positions,
            weights,
        })
    }

    /// Landmarks in first-appearance order.
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Number of landmarks in the universe.
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Whether the graph has no landmarks.
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Canonical position of a landmark.
    pub fn index_of(&self, landmark: &str) -> Option<usize> {
        self.positions.get(landmark).copied()
    }

    /// Landmark at a canonical position.
    pub fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Weight of the directed edge between two labels, if it exists.
    pub fn weight(&self, from: &str, to: &str) -> Option<EdgeWeight> {
        let from_index = self.index_of(from)?;
        let to_index = self.index_of(to)?;
        self.weight_between(from_index, to_index)
    }

    /// Weight of the directed edge between two canonical positions.
    pub fn weight_between(&self, from: usize, to: usize) -> Option<EdgeWeight> {
        if from >= self.len() || to >= self.len() {
            return None;
        }
        self.weights.get(from * self.len() + to).copied().flatten()
    }

    /// Weight of the closing leg back to `start`.
    ///
    /// This is the only lookup that defaults: an absent edge contributes
    /// [`EdgeWeight::ZERO`].
    pub fn return_weight(&self, from: usize, start: usize) -> EdgeWeight {
        self.weight_between(from, start).unwrap_or(EdgeWeight::ZERO)
    }
}

fn validate_record(position: usize, record: &EdgeRecord) -> Result<(), GraphError> {
    if record.from.is_blank() || record.to.is_blank() {
        return Err(GraphError::EmptyLandmark { position });
    }
    if !record.base_score.is_finite() || !record.base_travel_time.is_finite() {
        return Err(GraphError::NonFiniteEdge {
            from: record.from.clone(),
            to: record.to.clone(),
        });
    }
    Ok(())
}
