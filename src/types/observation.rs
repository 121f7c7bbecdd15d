use crate::types::column::NumericColumn;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One row of the observation file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub datetime: NaiveDateTime, // datetime
    pub station: String,         // station
    pub pm25: Option<f64>,       // PM2.5 (µg/m³)
    pub temp: Option<f64>,       // TEMP (°C)
    pub pres: Option<f64>,       // PRES (hPa)
    pub dewp: Option<f64>,       // DEWP (°C)
    pub rain: Option<f64>,       // RAIN (mm)
    pub wspm: Option<f64>,       // WSPM (m/s)
    pub season: Option<String>,  // season
    pub cluster: Option<i64>,    // cluster
}

impl Observation {
    /// Typed accessor for the six correlation columns.
    pub fn value(&self, column: NumericColumn) -> Option<f64> {
        match column {
            NumericColumn::Pm25 => self.pm25,
            NumericColumn::Temp => self.temp,
            NumericColumn::Pres => self.pres,
            NumericColumn::Dewp => self.dewp,
            NumericColumn::Rain => self.rain,
            NumericColumn::Wspm => self.wspm,
        }
    }
}
