use crate::observations::error::LoadError;
use crate::observations::table::ObservationTable;
use crate::types::column::ObservationColumn;
use crate::types::observation::Observation;
use chrono::{NaiveDate, NaiveDateTime};
use log::{info, warn};
use polars::prelude::{CsvReadOptions, DataFrame, SerReader, StringChunked};
use std::path::Path;

const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";
/// Matched case-insensitively; the same set pandas' CSV reader treats as missing by default.
const MISSING_TOKENS: [&str; 16] = [
    "na", "n/a", "#n/a", "#n/a n/a", "#na", "<na>", "nan", "-nan", "null", "none", "-1.#ind",
    "1.#ind", "-1.#qnan", "1.#qnan", "-nan(ind)", "nan(ind)",
];

/// Reads the observation CSV at `path` into an [`ObservationTable`].
///
/// Every column is read as text by polars and then converted into typed [`Observation`]
/// rows, so the conversion rules do not depend on polars' schema inference.
///
/// # Errors
///
/// * [`LoadError::FileNotFound`] if `path` does not exist.
/// * [`LoadError::CsvRead`] if the file is not valid CSV.
/// * [`LoadError::MissingColumn`] if `datetime` or `station` is absent.
/// * [`LoadError::DatetimeParse`] if any datetime value cannot be parsed.
/// * [`LoadError::MissingStation`] if any row has no station.
pub fn load_observations(path: &Path) -> Result<ObservationTable, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }
    info!("Loading observations from {}", path.display());

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| LoadError::CsvRead(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| LoadError::CsvRead(path.to_path_buf(), e))?;

    let table = frame_to_table(&df)?;
    info!(
        "Loaded {} observations for {} stations from {}",
        table.len(),
        table.stations().len(),
        path.display()
    );
    Ok(table)
}

/// Converts a frame whose columns are all text into typed rows.
pub(crate) fn frame_to_table(df: &DataFrame) -> Result<ObservationTable, LoadError> {
    let mut present = Vec::new();
    for column in ObservationColumn::ALL {
        if df.column(column.header()).is_ok() {
            present.push(column);
        } else if column.is_required() {
            return Err(LoadError::MissingColumn(column));
        } else {
            warn!("Column '{}' not found, views that need it will be unavailable", column);
        }
    }

    let datetimes = text_column(df, ObservationColumn::Datetime)?
        .ok_or(LoadError::MissingColumn(ObservationColumn::Datetime))?;
    let stations = text_column(df, ObservationColumn::Station)?
        .ok_or(LoadError::MissingColumn(ObservationColumn::Station))?;

    let pm25 = float_values(df, ObservationColumn::Pm25)?;
    let temp = float_values(df, ObservationColumn::Temp)?;
    let pres = float_values(df, ObservationColumn::Pres)?;
    let dewp = float_values(df, ObservationColumn::Dewp)?;
    let rain = float_values(df, ObservationColumn::Rain)?;
    let wspm = float_values(df, ObservationColumn::Wspm)?;
    let cluster = cluster_values(df)?;
    let season = text_column(df, ObservationColumn::Season)?;

    let mut rows = Vec::with_capacity(df.height());
    for (idx, (datetime, station)) in datetimes.into_iter().zip(stations).enumerate() {
        let row = idx + 1;
        let datetime = datetime
            .and_then(parse_datetime)
            .ok_or_else(|| LoadError::DatetimeParse {
                row,
                value: datetime.unwrap_or_default().to_string(),
            })?;
        let station = station
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(LoadError::MissingStation { row })?;

        rows.push(Observation {
            datetime,
            station: station.to_string(),
            pm25: value_at(&pm25, idx),
            temp: value_at(&temp, idx),
            pres: value_at(&pres, idx),
            dewp: value_at(&dewp, idx),
            rain: value_at(&rain, idx),
            wspm: value_at(&wspm, idx),
            season: season
                .and_then(|ca| ca.get(idx))
                .filter(|s| !is_missing(s))
                .map(|s| s.trim().to_string()),
            cluster: value_at(&cluster, idx),
        });
    }

    Ok(ObservationTable::new(rows, present))
}

fn text_column(
    df: &DataFrame,
    column: ObservationColumn,
) -> Result<Option<&StringChunked>, LoadError> {
    match df.column(column.header()) {
        Ok(col) => col
            .str()
            .map(Some)
            .map_err(|e| LoadError::ColumnRead { column, source: e }),
        Err(_) => Ok(None),
    }
}

fn float_values(
    df: &DataFrame,
    column: ObservationColumn,
) -> Result<Option<Vec<Option<f64>>>, LoadError> {
    parse_column(df, column, parse_float)
}

fn cluster_values(df: &DataFrame) -> Result<Option<Vec<Option<i64>>>, LoadError> {
    parse_column(df, ObservationColumn::Cluster, parse_label)
}

/// Parses an optional text column value by value. Missing tokens become `None`; values that
/// are present but unparsable also become `None` and are reported once per column.
fn parse_column<T>(
    df: &DataFrame,
    column: ObservationColumn,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<Vec<Option<T>>>, LoadError> {
    let Some(ca) = text_column(df, column)? else {
        return Ok(None);
    };

    let mut unparsable = 0usize;
    let values = ca
        .into_iter()
        .map(|value| match value {
            Some(s) if !is_missing(s) => {
                let parsed = parse(s.trim());
                if parsed.is_none() {
                    unparsable += 1;
                }
                parsed
            }
            _ => None,
        })
        .collect();

    if unparsable > 0 {
        warn!(
            "Column '{}' has {} unparsable values, treating them as missing",
            column, unparsable
        );
    }
    Ok(Some(values))
}

fn value_at<T: Copy>(values: &Option<Vec<Option<T>>>, idx: usize) -> Option<T> {
    values.as_ref().and_then(|v| v.get(idx).copied().flatten())
}

fn is_missing(value: &str) -> bool {
    let value = value.trim();
    value.is_empty()
        || MISSING_TOKENS
            .iter()
            .any(|token| value.eq_ignore_ascii_case(token))
}

fn parse_float(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Cluster labels are integers, but files written after a missing-value pass often carry
/// them as `2.0`.
fn parse_label(value: &str) -> Option<i64> {
    // `i64::MAX as f64` rounds up to 2^63, hence the exclusive upper bound.
    value.parse::<i64>().ok().or_else(|| {
        parse_float(value)
            .filter(|v| v.fract() == 0.0 && *v >= i64::MIN as f64 && *v < i64::MAX as f64)
            .map(|v| v as i64)
    })
}

pub(crate) fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
