//! Memoizes the observation table so that repeated interactions never re-read the file.

use crate::observations::data_loader::load_observations;
use crate::observations::error::LoadError;
use crate::observations::table::ObservationTable;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// File name the dashboard reads when no other path is configured.
pub const DEFAULT_DATA_FILE: &str = "main_data.csv";

static DEFAULT_CACHE: OnceLock<ObservationCache> = OnceLock::new();

/// Lazily loads and then holds the [`ObservationTable`] for one file.
///
/// The first successful [`ObservationCache::get`] reads the file; every later call returns
/// the same shared table. A failed load is not cached, the next call tries again.
#[derive(Debug)]
pub struct ObservationCache {
    path: PathBuf,
    table: OnceLock<Arc<ObservationTable>>,
}

impl ObservationCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the table has already been loaded.
    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// Returns the cached table, loading it on first use.
    ///
    /// # Errors
    ///
    /// Propagates any [`LoadError`] from the initial load.
    pub fn get(&self) -> Result<Arc<ObservationTable>, LoadError> {
        if let Some(table) = self.table.get() {
            debug!("Cache hit for observations at {}", self.path.display());
            return Ok(Arc::clone(table));
        }

        info!(
            "Cache miss for observations at {}, reading file",
            self.path.display()
        );
        let loaded = Arc::new(load_observations(&self.path)?);
        Ok(Arc::clone(self.table.get_or_init(|| loaded)))
    }
}

/// Process-wide accessor for the table stored in [`DEFAULT_DATA_FILE`] in the working
/// directory. Loads on the first call and returns the cached table afterwards.
pub fn get_observation_table() -> Result<Arc<ObservationTable>, LoadError> {
    DEFAULT_CACHE
        .get_or_init(|| ObservationCache::new(DEFAULT_DATA_FILE))
        .get()
}
