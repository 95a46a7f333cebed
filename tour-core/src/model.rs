//! Raw and derived data shared by the graph and the solvers.
//!
//! Landmarks are opaque labels. Raw [`EdgeRecord`]s and the per-landmark
//! [`FactorTable`]s arrive from the input layer already parsed; the
//! [`EdgeWeight`] pair is only ever produced by the
//! [`AttractivenessModel`](crate::AttractivenessModel).

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Label of the conventional start and end landmark.
pub const HOTEL: &str = "Hotel";

/// A named location in the tour universe.
///
/// # Examples
/// ```
/// use tour_core::Landmark;
///
/// let landmark = Landmark::new("Museum");
/// assert_eq!(landmark.as_str(), "Museum");
/// assert_eq!(Landmark::hotel().to_string(), "Hotel");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Landmark(String);

impl Landmark {
    /// Wrap a label as a landmark.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The conventional start and end landmark, `"Hotel"`.
    pub fn hotel() -> Self {
        Self::new(HOTEL)
    }

    /// Borrow the landmark label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the label is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Landmark {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Landmark {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Landmark {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Landmark {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// One raw directed connection as read from the edge table.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    /// Source landmark.
    pub from: Landmark,
    /// Destination landmark.
    pub to: Landmark,
    /// Base attractiveness before interest and load are applied.
    pub base_score: f64,
    /// Travel time, carried through unchanged.
    pub base_travel_time: f64,
}

impl EdgeRecord {
    /// Construct a record from its four fields.
    ///
    /// # Examples
    /// ```
    /// use tour_core::EdgeRecord;
    ///
    /// let record = EdgeRecord::new("Hotel", "Museum", 10.0, 5.0);
    /// assert_eq!(record.to.as_str(), "Museum");
    /// ```
    pub fn new(
        from: impl Into<Landmark>,
        to: impl Into<Landmark>,
        base_score: f64,
        base_travel_time: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            base_score,
            base_travel_time,
        }
    }
}

/// Derived weight attached to a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeWeight {
    /// Attractiveness collected by taking the edge.
    pub score: f64,
    /// Time spent travelling the edge.
    pub time: f64,
}

impl EdgeWeight {
    /// Weight of an absent closing leg.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Construct a weight pair.
    pub const fn new(score: f64, time: f64) -> Self {
        Self { score, time }
    }
}

/// Which per-landmark factor a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorKind {
    /// Personal interest in the destination.
    Interest,
    /// Visitor load at the destination.
    Load,
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interest => f.write_str("interest"),
            Self::Load => f.write_str("load"),
        }
    }
}

/// Per-landmark real values such as interest or load.
///
/// Missing landmarks read as `0.0`.
///
/// # Examples
/// ```
/// use tour_core::FactorTable;
///
/// let table = FactorTable::from_iter([("Museum".into(), 0.8)]);
/// assert_eq!(table.factor("Museum"), 0.8);
/// assert_eq!(table.factor("Park"), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FactorTable {
    values: HashMap<Landmark, f64>,
}

impl FactorTable {
    /// Construct an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value for a landmark, returning the previous one.
    pub fn insert(&mut self, landmark: Landmark, value: f64) -> Option<f64> {
        self.values.insert(landmark, value)
    }

    /// Return the stored value, if any.
    pub fn get(&self, landmark: &str) -> Option<f64> {
        self.values.get(landmark).copied()
    }

    /// Return the stored value or `0.0` when the landmark is absent.
    pub fn factor(&self, landmark: &str) -> f64 {
        self.get(landmark).unwrap_or(0.0)
    }

    /// Iterate over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Landmark, f64)> {
        self.values.iter().map(|(landmark, value)| (landmark, *value))
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Landmark, f64)> for FactorTable {
    fn from_iter<I: IntoIterator<Item = (Landmark, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<Landmark, f64>> for FactorTable {
    fn from(values: HashMap<Landmark, f64>) -> Self {
        Self { values }
    }
}
