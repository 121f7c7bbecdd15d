//! Defines the columns of the air-quality observation file and the subset of numeric
//! columns that take part in correlation analysis.

use serde::Serialize;
use std::fmt;

/// A column of the observation CSV file.
///
/// The header names are fixed by the upstream data preparation step and are matched
/// case-sensitively (`PM2.5`, `TEMP`, ... are upper case, `datetime`, `station`, ... are not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObservationColumn {
    /// Timestamp of the reading. Required.
    Datetime,
    /// Monitoring station identifier. Required.
    Station,
    /// Fine particulate matter concentration (µg/m³).
    Pm25,
    /// Air temperature (°C).
    Temp,
    /// Air pressure (hPa).
    Pres,
    /// Dew point temperature (°C).
    Dewp,
    /// Precipitation (mm).
    Rain,
    /// Wind speed (m/s).
    Wspm,
    /// Season label such as `Winter`.
    Season,
    /// Externally assigned cluster label.
    Cluster,
}

impl ObservationColumn {
    /// Every known column, in the order they are read from the file.
    pub const ALL: [ObservationColumn; 10] = [
        ObservationColumn::Datetime,
        ObservationColumn::Station,
        ObservationColumn::Pm25,
        ObservationColumn::Temp,
        ObservationColumn::Pres,
        ObservationColumn::Dewp,
        ObservationColumn::Rain,
        ObservationColumn::Wspm,
        ObservationColumn::Season,
        ObservationColumn::Cluster,
    ];

    /// The CSV header name of the column.
    ///
    /// # Examples
    ///
    /// ```
    /// use air_quality_dashboard::ObservationColumn;
    ///
    /// assert_eq!(ObservationColumn::Pm25.header(), "PM2.5");
    /// assert_eq!(ObservationColumn::Season.header(), "season");
    /// ```
    pub fn header(&self) -> &'static str {
        match self {
            ObservationColumn::Datetime => "datetime",
            ObservationColumn::Station => "station",
            ObservationColumn::Pm25 => "PM2.5",
            ObservationColumn::Temp => "TEMP",
            ObservationColumn::Pres => "PRES",
            ObservationColumn::Dewp => "DEWP",
            ObservationColumn::Rain => "RAIN",
            ObservationColumn::Wspm => "WSPM",
            ObservationColumn::Season => "season",
            ObservationColumn::Cluster => "cluster",
        }
    }

    /// Whether the file cannot be used at all without this column.
    pub(crate) fn is_required(&self) -> bool {
        matches!(
            self,
            ObservationColumn::Datetime | ObservationColumn::Station
        )
    }
}

impl fmt::Display for ObservationColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// The six numeric columns used by the correlation heatmap. Serializes as the CSV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum NumericColumn {
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "TEMP")]
    Temp,
    #[serde(rename = "PRES")]
    Pres,
    #[serde(rename = "DEWP")]
    Dewp,
    #[serde(rename = "RAIN")]
    Rain,
    #[serde(rename = "WSPM")]
    Wspm,
}

impl NumericColumn {
    /// Heatmap order: the pollutant first, then the meteorological covariates.
    pub const ALL: [NumericColumn; 6] = [
        NumericColumn::Pm25,
        NumericColumn::Temp,
        NumericColumn::Pres,
        NumericColumn::Dewp,
        NumericColumn::Rain,
        NumericColumn::Wspm,
    ];

    pub fn column(&self) -> ObservationColumn {
        match self {
            NumericColumn::Pm25 => ObservationColumn::Pm25,
            NumericColumn::Temp => ObservationColumn::Temp,
            NumericColumn::Pres => ObservationColumn::Pres,
            NumericColumn::Dewp => ObservationColumn::Dewp,
            NumericColumn::Rain => ObservationColumn::Rain,
            NumericColumn::Wspm => ObservationColumn::Wspm,
        }
    }

    pub fn header(&self) -> &'static str {
        self.column().header()
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn headers_are_unique() {
        let headers: HashSet<_> = ObservationColumn::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(headers.len(), ObservationColumn::ALL.len());
    }

    #[test]
    fn numeric_columns_map_onto_observation_columns() {
        let headers: Vec<_> = NumericColumn::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(headers, ["PM2.5", "TEMP", "PRES", "DEWP", "RAIN", "WSPM"]);
        assert!(NumericColumn::ALL.iter().all(|c| !c.column().is_required()));
    }

    #[test]
    fn only_datetime_and_station_are_required() {
        let required: Vec<_> = ObservationColumn::ALL
            .iter()
            .filter(|c| c.is_required())
            .copied()
            .collect();
        assert_eq!(
            required,
            [ObservationColumn::Datetime, ObservationColumn::Station]
        );
    }
}
