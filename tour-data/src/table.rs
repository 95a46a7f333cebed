//! Parsers for the interest, load and landmark map tables.

use std::io::{BufRead, BufReader};

use camino::Utf8Path;
use log::{debug, info};
use tour_core::{EdgeRecord, FactorTable, Landmark};

use crate::error::{RecordIssue, TableError};
use crate::fs::open_table_file;

const FACTOR_FIELDS: usize = 2;
const EDGE_FIELDS: usize = 4;

/// Parse a `name value` table such as personal interest or visitor load.
///
/// The first line is a header and is skipped. A repeated name replaces the
/// earlier value.
///
/// # Examples
/// ```
/// use tour_data::parse_factor_table;
///
/// let input = "Landmark Interest\nMuseum 0.8\nPark 0.3\n";
/// let table = parse_factor_table(input.as_bytes(), "interest")?;
/// assert_eq!(table.factor("Museum"), 0.8);
/// assert_eq!(table.factor("Lake"), 0.0);
/// # Ok::<(), tour_data::TableError>(())
/// ```
///
/// # Errors
/// Returns [`TableError::MalformedRecord`] for lines that do not hold exactly
/// a name and a finite number, and [`TableError::Read`] for unreadable lines.
pub fn parse_factor_table<R: BufRead>(reader: R, origin: &str) -> Result<FactorTable, TableError> {
    let mut table = FactorTable::new();
    for_each_record(reader, origin, FACTOR_FIELDS, |fields, line| {
        let [name, value] = fields else {
            return Err(field_count(origin, line, FACTOR_FIELDS, fields.len()));
        };
        let parsed = parse_real(origin, line, "value", value)?;
        table.insert(Landmark::new(*name), parsed);
        Ok(())
    })?;
    Ok(table)
}

/// Parse a `from to score time` landmark map table.
///
/// The first line is a header and is skipped. Records keep their file order,
/// which fixes the canonical landmark order downstream.
///
/// # Examples
/// ```
/// use tour_data::parse_edge_table;
///
/// let input = "From To Score Time\nHotel Museum 10 5\nMuseum Hotel 0 5\n";
/// let records = parse_edge_table(input.as_bytes(), "map")?;
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].to.as_str(), "Museum");
/// # Ok::<(), tour_data::TableError>(())
/// ```
///
/// # Errors
/// Returns [`TableError::MalformedRecord`] for lines that do not hold two
/// names followed by two finite numbers, and [`TableError::Read`] for
/// unreadable lines.
pub fn parse_edge_table<R: BufRead>(reader: R, origin: &str) -> Result<Vec<EdgeRecord>, TableError> {
    let mut records = Vec::new();
    for_each_record(reader, origin, EDGE_FIELDS, |fields, line| {
        let [from, to, score, time] = fields else {
            return Err(field_count(origin, line, EDGE_FIELDS, fields.len()));
        };
        records.push(EdgeRecord::new(
            *from,
            *to,
            parse_real(origin, line, "score", score)?,
            parse_real(origin, line, "travel time", time)?,
        ));
        Ok(())
    })?;
    Ok(records)
}

/// Open and parse a factor table from disk.
///
/// # Errors
/// Returns [`TableError::Open`] when the file cannot be opened, otherwise as
/// [`parse_factor_table`].
pub fn read_factor_table(path: &Utf8Path) -> Result<FactorTable, TableError> {
    let reader = open_reader(path)?;
    let table = parse_factor_table(reader, path.as_str())?;
    info!("read {} entries from {path}", table.len());
    Ok(table)
}

/// Open and parse a landmark map table from disk.
///
/// # Errors
/// Returns [`TableError::Open`] when the file cannot be opened, otherwise as
/// [`parse_edge_table`].
pub fn read_edge_table(path: &Utf8Path) -> Result<Vec<EdgeRecord>, TableError> {
    let reader = open_reader(path)?;
    let records = parse_edge_table(reader, path.as_str())?;
    info!("read {} edge records from {path}", records.len());
    Ok(records)
}

fn open_reader(path: &Utf8Path) -> Result<impl BufRead, TableError> {
    let file = open_table_file(path).map_err(|source| TableError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Split every data line into fields and hand them to `visit`.
///
/// Line 1 is the header. Blank lines are skipped.
fn for_each_record<R, F>(
    reader: R,
    origin: &str,
    expected: usize,
    mut visit: F,
) -> Result<(), TableError>
where
    R: BufRead,
    F: FnMut(&[&str], usize) -> Result<(), TableError>,
{
    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let text = line.map_err(|source| TableError::Read {
            origin: origin.to_owned(),
            line: number,
            source,
        })?;
        if number == 1 {
            continue;
        }
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.is_empty() {
            debug!("skipping blank line {number} of {origin}");
            continue;
        }
        if fields.len() != expected {
            return Err(field_count(origin, number, expected, fields.len()));
        }
        visit(&fields, number)?;
    }
    Ok(())
}

fn parse_real(origin: &str, line: usize, field: &'static str, raw: &str) -> Result<f64, TableError> {
    let malformed = |issue: RecordIssue| TableError::MalformedRecord {
        origin: origin.to_owned(),
        line,
        issue,
    };
    let value: f64 = raw.parse().map_err(|_| {
        malformed(RecordIssue::InvalidNumber {
            field,
            value: raw.to_owned(),
        })
    })?;
    if !value.is_finite() {
        return Err(malformed(RecordIssue::NonFinite {
            field,
            value: raw.to_owned(),
        }));
    }
    Ok(value)
}

fn field_count(origin: &str, line: usize, expected: usize, found: usize) -> TableError {
    TableError::MalformedRecord {
        origin: origin.to_owned(),
        line,
        issue: RecordIssue::FieldCount { expected, found },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn issue_of(err: TableError) -> (usize, RecordIssue) {
        match err {
            TableError::MalformedRecord { line, issue, .. } => (line, issue),
            other => panic!("expected MalformedRecord, found {other:?}"),
        }
    }

    #[rstest]
    fn header_is_skipped_even_when_it_looks_like_data() {
        let table = parse_factor_table("Hotel 1.0\nMuseum 0.5\n".as_bytes(), "interest")
            .expect("valid table");
        assert_eq!(table.get("Hotel"), None);
        assert_eq!(table.get("Museum"), Some(0.5));
    }

    #[rstest]
    fn blank_and_padded_lines_are_tolerated() {
        let input = "From To Score Time\n\n  Hotel\tA 3 4  \n\nA Hotel 0 4\n";
        let records = parse_edge_table(input.as_bytes(), "map").expect("valid table");
        assert_eq!(
            records,
            [
                EdgeRecord::new("Hotel", "A", 3.0, 4.0),
                EdgeRecord::new("A", "Hotel", 0.0, 4.0),
            ]
        );
    }

    #[rstest]
    fn empty_input_yields_empty_tables() {
        assert!(parse_factor_table("".as_bytes(), "load").expect("empty").is_empty());
        assert!(parse_edge_table("From To Score Time\n".as_bytes(), "map")
            .expect("header only")
            .is_empty());
    }

    #[rstest]
    #[case("Name Value\nMuseum\n", 2, RecordIssue::FieldCount { expected: 2, found: 1 })]
    #[case("Name Value\nMuseum 0.5 extra\n", 2, RecordIssue::FieldCount { expected: 2, found: 3 })]
    #[case(
        "Name Value\nPark 0.1\nMuseum high\n",
        3,
        RecordIssue::InvalidNumber { field: "value", value: "high".into() }
    )]
    #[case(
        "Name Value\nMuseum inf\n",
        2,
        RecordIssue::NonFinite { field: "value", value: "inf".into() }
    )]
    fn malformed_factor_lines_are_rejected(
        #[case] input: &str,
        #[case] line: usize,
        #[case] issue: RecordIssue,
    ) {
        let err = parse_factor_table(input.as_bytes(), "interest").expect_err("malformed");
        assert_eq!(issue_of(err), (line, issue));
    }

    #[rstest]
    #[case("F T S T\nHotel A 3\n", RecordIssue::FieldCount { expected: 4, found: 3 })]
    #[case(
        "F T S T\nHotel A 3 soon\n",
        RecordIssue::InvalidNumber { field: "travel time", value: "soon".into() }
    )]
    #[case(
        "F T S T\nHotel A NaN 2\n",
        RecordIssue::NonFinite { field: "score", value: "NaN".into() }
    )]
    fn malformed_edge_lines_are_rejected(#[case] input: &str, #[case] issue: RecordIssue) {
        let err = parse_edge_table(input.as_bytes(), "map").expect_err("malformed");
        assert_eq!(issue_of(err), (2, issue));
    }

    #[rstest]
    fn invalid_utf8_is_a_read_error() {
        let input: &[u8] = b"Name Value\n\xff\xfe 0.5\n";
        let err = parse_factor_table(input, "load").expect_err("invalid utf-8");
        assert!(matches!(err, TableError::Read { line: 2, .. }));
    }
}
