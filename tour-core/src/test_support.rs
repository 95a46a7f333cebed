//! Graph builders shared by unit, behaviour and property tests.

use crate::{AttractivenessModel, EdgeRecord, FactorTable, GraphError, Landmark, TourGraph};

/// Model with interest `1.0` and no load for every destination in `records`,
/// so derived scores equal the raw base scores.
pub fn raw_model(records: &[EdgeRecord]) -> AttractivenessModel {
    let interest = records
        .iter()
        .map(|record| (record.to.clone(), 1.0))
        .collect::<FactorTable>();
    AttractivenessModel::new(interest, FactorTable::new()).unwrap_or_default()
}

/// Build a graph whose edge scores equal the raw base scores.
///
/// # Errors
/// Propagates [`GraphError`] for blank labels or non-finite values.
pub fn raw_graph(records: &[EdgeRecord]) -> Result<TourGraph, GraphError> {
    TourGraph::build(records, &raw_model(records))
}

/// Records for every ordered pair of distinct `labels`, weighted by `weigh`.
///
/// `weigh` receives the source and destination positions within `labels`
/// and returns `(base_score, base_travel_time)`.
pub fn complete_records<F>(labels: &[&str], mut weigh: F) -> Vec<EdgeRecord>
where
    F: FnMut(usize, usize) -> (f64, f64),
{
    let mut records = Vec::with_capacity(labels.len() * labels.len());
    for (from_index, from) in labels.iter().enumerate() {
        for (to_index, to) in labels.iter().enumerate() {
            if from_index == to_index {
                continue;
            }
            let (score, time) = weigh(from_index, to_index);
            records.push(EdgeRecord::new(*from, *to, score, time));
        }
    }
    records
}

/// Hotel plus two sights where visiting `A` first clearly dominates.
pub fn scenic_records() -> Vec<EdgeRecord> {
    vec![
        EdgeRecord::new("Hotel", "A", 10.0, 5.0),
        EdgeRecord::new("Hotel", "B", 1.0, 1.0),
        EdgeRecord::new("A", "B", 8.0, 2.0),
        EdgeRecord::new("B", "A", 2.0, 9.0),
        EdgeRecord::new("A", "Hotel", 0.0, 5.0),
        EdgeRecord::new("B", "Hotel", 0.0, 1.0),
    ]
}

/// Hotel plus two sights where both orders collect the same score and
/// visiting `B` first is faster.
pub fn tied_score_records() -> Vec<EdgeRecord> {
    vec![
        EdgeRecord::new("Hotel", "A", 5.0, 10.0),
        EdgeRecord::new("Hotel", "B", 5.0, 3.0),
        EdgeRecord::new("A", "B", 1.0, 1.0),
        EdgeRecord::new("B", "A", 1.0, 1.0),
        EdgeRecord::new("A", "Hotel", 0.0, 1.0),
        EdgeRecord::new("B", "Hotel", 0.0, 1.0),
    ]
}

/// Drop every record for the ordered pair `from -> to`.
pub fn without_edge(records: &[EdgeRecord], from: &str, to: &str) -> Vec<EdgeRecord> {
    records
        .iter()
        .filter(|record| !(record.from.as_str() == from && record.to.as_str() == to))
        .cloned()
        .collect()
}

/// Labels `Hotel, L1, L2, ...` for a universe of `count` landmarks.
pub fn numbered_landmarks(count: usize) -> Vec<Landmark> {
    std::iter::once(Landmark::hotel())
        .chain((1..count).map(|index| Landmark::new(format!("L{index}"))))
        .collect()
}
