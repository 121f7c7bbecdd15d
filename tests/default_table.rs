//! Runs in its own test binary: it changes the working directory of the process.

use air_quality_dashboard::{get_observation_table, LoadError, DEFAULT_DATA_FILE};
use std::sync::Arc;

#[test]
fn default_table_is_loaded_once_from_the_working_directory() -> Result<(), LoadError> {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(DEFAULT_DATA_FILE),
        "datetime,station,PM2.5,TEMP,PRES,DEWP,RAIN,WSPM,season,cluster\n\
         2013-03-01 00:00:00,Dongsi,9.0,0.3,1020.8,-18.8,0.0,4.4,Spring,0\n\
         2013-07-01 00:00:00,Wanliu,85.0,31.2,1002.1,22.4,0.2,1.8,Summer,1\n",
    )
    .unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let first = get_observation_table()?;
    std::fs::remove_file(dir.path().join(DEFAULT_DATA_FILE)).unwrap();
    let second = get_observation_table()?;

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.stations(), ["Dongsi", "Wanliu"]);
    assert_eq!(first.len(), 2);
    Ok(())
}
