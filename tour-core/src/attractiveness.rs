//! Derive edge weights from raw records and per-destination factors.
//!
//! The score of an edge depends only on its own base score and on the
//! destination: `base_score * interest(to) * (1 - load(to))`. Travel time is
//! passed through unchanged.

use crate::graph::GraphError;
use crate::model::{EdgeRecord, EdgeWeight, FactorKind, FactorTable};

/// Personal interest and visitor load used to weight edges.
///
/// # Examples
/// ```
/// use tour_core::{AttractivenessModel, EdgeRecord, FactorTable};
///
/// # fn main() -> Result<(), tour_core::GraphError> {
/// let interest = FactorTable::from_iter([("Museum".into(), 0.5)]);
/// let load = FactorTable::from_iter([("Museum".into(), 0.2)]);
/// let model = AttractivenessModel::new(interest, load)?;
///
/// let weight = model.derive(&EdgeRecord::new("Hotel", "Museum", 10.0, 7.0));
/// assert!((weight.score - 4.0).abs() < 1e-12);
/// assert_eq!(weight.time, 7.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttractivenessModel {
    interest: FactorTable,
    load: FactorTable,
}

impl AttractivenessModel {
    /// Validate and construct a model.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteFactor`] when any interest or load value
    /// is NaN or infinite.
    pub fn new(interest: FactorTable, load: FactorTable) -> Result<Self, GraphError> {
        check_finite(&interest, FactorKind::Interest)?;
        check_finite(&load, FactorKind::Load)?;
        Ok(Self { interest, load })
    }

    /// Interest values keyed by destination.
    pub fn interest(&self) -> &FactorTable {
        &self.interest
    }

    /// Load values keyed by destination.
    pub fn load(&self) -> &FactorTable {
        &self.load
    }

    /// Derive the weight for a single record.
    ///
    /// Destinations absent from either table read as `0.0`, so a missing
    /// interest zeroes the score and a missing load applies no penalty.
    pub fn derive(&self, record: &EdgeRecord) -> EdgeWeight {
        let destination = record.to.as_str();
        let interest = self.interest.factor(destination);
        let load = self.load.factor(destination);
        EdgeWeight::new(
            record.base_score * interest * (1.0 - load),
            record.base_travel_time,
        )
    }
}

fn check_finite(table: &FactorTable, kind: FactorKind) -> Result<(), GraphError> {
    match table.iter().find(|(_, value)| !value.is_finite()) {
        Some((landmark, _)) => Err(GraphError::NonFiniteFactor {
            landmark: landmark.clone(),
            kind,
        }),
        None => Ok(()),
    }
}
