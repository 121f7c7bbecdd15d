//! Fixtures shared by the unit tests.

use crate::observations::data_loader::parse_datetime;
use crate::types::observation::Observation;
use std::io::Write;
use tempfile::NamedTempFile;

pub(crate) fn observation(station: &str, datetime: &str, pm25: Option<f64>) -> Observation {
    Observation {
        datetime: parse_datetime(datetime).expect("valid fixture datetime"),
        station: station.to_string(),
        pm25,
        temp: None,
        pres: None,
        dewp: None,
        rain: None,
        wspm: None,
        season: None,
        cluster: None,
    }
}

/// `values` are PM2.5, TEMP, PRES, DEWP, RAIN, WSPM.
pub(crate) fn full_observation(station: &str, datetime: &str, values: [f64; 6]) -> Observation {
    let [pm25, temp, pres, dewp, rain, wspm] = values;
    Observation {
        pm25: Some(pm25),
        temp: Some(temp),
        pres: Some(pres),
        dewp: Some(dewp),
        rain: Some(rain),
        wspm: Some(wspm),
        season: Some("Spring".to_string()),
        cluster: Some(0),
        ..observation(station, datetime, None)
    }
}

pub(crate) fn seasonal_observation(
    station: &str,
    datetime: &str,
    pm25: Option<f64>,
    season: Option<&str>,
) -> Observation {
    Observation {
        season: season.map(str::to_string),
        ..observation(station, datetime, pm25)
    }
}

pub(crate) fn clustered_observation(
    station: &str,
    temp: f64,
    pm25: Option<f64>,
    cluster: Option<i64>,
) -> Observation {
    Observation {
        temp: Some(temp),
        cluster,
        ..observation(station, "2013-03-01 00:00:00", pm25)
    }
}

pub(crate) fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}

/// Two stations, four seasons each, with one missing PM2.5 reading.
pub(crate) fn sample_csv() -> String {
    let mut csv = String::from("datetime,station,PM2.5,TEMP,PRES,DEWP,RAIN,WSPM,season,cluster\n");
    let readings = [
        ("2013-03-01 00:00:00", "Spring", 4.0, 5.0),
        ("2013-06-01 00:00:00", "Summer", 35.0, 28.0),
        ("2013-09-01 00:00:00", "Autumn", 60.0, 18.0),
        ("2013-12-01 00:00:00", "Winter", 150.0, -4.0),
    ];
    for station in ["Beijing-A", "Beijing-B"] {
        for (i, (datetime, season, pm25, temp)) in readings.iter().enumerate() {
            let pm25 = if station == "Beijing-B" && i == 2 {
                "NA".to_string()
            } else {
                pm25.to_string()
            };
            csv.push_str(&format!(
                "{datetime},{station},{pm25},{temp},{pres},{dewp},0.0,{wspm},{season},{cluster}\n",
                pres = 1020.0 - i as f64 * 3.0,
                dewp = -10.0 + i as f64 * 4.5,
                wspm = 1.0 + i as f64 * 0.7,
                cluster = i % 3,
            ));
        }
    }
    csv
}
