//! Contains the in-memory `ObservationTable` and the per-interaction `StationView`
//! derived from it.

use crate::types::column::ObservationColumn;
use crate::types::observation::Observation;
use crate::views::error::{View, ViewError};
use crate::views::figure::Title;
use std::collections::{BTreeMap, BTreeSet};

/// The full observation data set, read-only after loading.
///
/// Rows keep file order. Stations are recorded in first-seen order, which is the order
/// the station selector offers them in.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationTable {
    rows: Vec<Observation>,
    stations: Vec<String>,
    columns: BTreeSet<ObservationColumn>,
}

impl ObservationTable {
    /// Builds a table from parsed rows and the set of columns that were present in the source.
    ///
    /// `datetime` and `station` are always considered present since every
    /// [`Observation`] carries them.
    pub fn new(rows: Vec<Observation>, columns: impl IntoIterator<Item = ObservationColumn>) -> Self {
        let mut seen = BTreeSet::new();
        let mut stations = Vec::new();
        for row in &rows {
            if seen.insert(row.station.as_str()) {
                stations.push(row.station.clone());
            }
        }

        let mut columns: BTreeSet<ObservationColumn> = columns.into_iter().collect();
        columns.insert(ObservationColumn::Datetime);
        columns.insert(ObservationColumn::Station);

        Self {
            rows,
            stations,
            columns,
        }
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct station identifiers in first-seen order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    pub fn has_column(&self, column: ObservationColumn) -> bool {
        self.columns.contains(&column)
    }

    pub fn columns(&self) -> impl Iterator<Item = ObservationColumn> + '_ {
        self.columns.iter().copied()
    }

    /// Checks that every column a view depends on was present in the source file.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MissingColumn`] naming the first absent column.
    pub fn require(&self, view: View, columns: &[ObservationColumn]) -> Result<(), ViewError> {
        match columns.iter().find(|c| !self.has_column(**c)) {
            Some(column) => Err(ViewError::MissingColumn {
                view,
                column: *column,
            }),
            None => Ok(()),
        }
    }

    /// Builds the Filtered View: every row whose station equals `station`, in file order.
    ///
    /// An unknown station yields an empty view rather than an error.
    pub fn filter_station(&self, station: &str) -> StationView<'_> {
        StationView {
            table: self,
            station: station.to_string(),
            rows: self.rows.iter().filter(|r| r.station == station).collect(),
        }
    }

    /// Groups rows by station, ordered by station name.
    pub fn group_by_station(&self) -> BTreeMap<&str, Vec<&Observation>> {
        let mut groups: BTreeMap<&str, Vec<&Observation>> = BTreeMap::new();
        for row in &self.rows {
            groups.entry(row.station.as_str()).or_default().push(row);
        }
        groups
    }
}

/// The rows of a single station, borrowed from an [`ObservationTable`].
///
/// Built on every selection change and dropped once the page has been rendered.
#[derive(Debug, Clone)]
pub struct StationView<'a> {
    table: &'a ObservationTable,
    station: String,
    rows: Vec<&'a Observation>,
}

impl<'a> StationView<'a> {
    pub fn station(&self) -> &str {
        &self.station
    }

    pub fn rows(&self) -> &[&'a Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn require(&self, view: View, columns: &[ObservationColumn]) -> Result<(), ViewError> {
        self.table.require(view, columns)
    }

    /// Chart title `"{base} at {station}"`, or just `base` for the empty (unselected) station.
    pub fn title(&self, base: &str) -> Title {
        if self.station.is_empty() {
            Title::new(base)
        } else {
            Title::new(format!("{base} at {}", self.station))
        }
    }
}
