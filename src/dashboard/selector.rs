use crate::error::DashboardError;

/// The sidebar dropdown: a fixed list of stations and the current choice.
///
/// Starts on the first option. An empty option list has no selection.
#[derive(Debug, Clone, PartialEq)]
pub struct StationSelector {
    options: Vec<String>,
    selected: Option<usize>,
}

impl StationSelector {
    pub fn new(options: Vec<String>) -> Self {
        let selected = (!options.is_empty()).then_some(0);
        Self { options, selected }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.map(|idx| self.options[idx].as_str())
    }

    /// Changes the selection.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::UnknownStation`] if `station` is not one of the options; the
    /// previous selection is kept.
    pub fn select(&mut self, station: &str) -> Result<&str, DashboardError> {
        let idx = self
            .options
            .iter()
            .position(|o| o == station)
            .ok_or_else(|| DashboardError::UnknownStation(station.to_string()))?;
        self.selected = Some(idx);
        Ok(self.options[idx].as_str())
    }
}
