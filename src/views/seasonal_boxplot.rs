use crate::observations::table::StationView;
use crate::types::column::ObservationColumn;
use crate::views::error::{View, ViewError};
use crate::views::figure::{Axis, AxisType, BoxPoints, BoxTrace, Figure, Layout};

/// PM2.5 values of one season.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonGroup {
    pub season: String,
    pub values: Vec<f64>,
}

/// Splits the view's PM2.5 readings by season, in the order seasons first appear.
///
/// Rows without a season are left out. A season whose readings are all missing still gets
/// a (empty) group so the category shows on the axis.
pub fn season_groups(view: &StationView) -> Vec<SeasonGroup> {
    let mut groups: Vec<SeasonGroup> = Vec::new();
    for row in view.rows() {
        let Some(season) = row.season.as_deref() else {
            continue;
        };
        let idx = match groups.iter().position(|g| g.season == season) {
            Some(idx) => idx,
            None => {
                groups.push(SeasonGroup {
                    season: season.to_string(),
                    values: Vec::new(),
                });
                groups.len() - 1
            }
        };
        if let Some(value) = row.pm25 {
            groups[idx].values.push(value);
        }
    }
    groups
}

/// Boxplot of PM2.5 grouped by season for the selected station, one box per season.
pub fn seasonal_boxplot(view: &StationView) -> Result<Figure, ViewError> {
    view.require(
        View::SeasonalBoxplot,
        &[ObservationColumn::Pm25, ObservationColumn::Season],
    )?;

    let layout = Layout {
        title: Some(view.title("PM2.5 Distribution by Season")),
        xaxis: Some(Axis {
            axis_type: Some(AxisType::Category),
            ..Axis::titled("season")
        }),
        yaxis: Some(Axis::titled("PM2.5")),
        showlegend: Some(false),
        height: Some(480),
    };

    Ok(season_groups(view)
        .into_iter()
        .fold(Figure::new(layout), |figure, group| {
            figure.with_trace(BoxTrace {
                name: group.season,
                y: group.values,
                boxpoints: BoxPoints::Outliers,
            })
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observations::table::ObservationTable;
    use crate::test_support::seasonal_observation;
    use crate::views::figure::Trace;

    fn table() -> ObservationTable {
        ObservationTable::new(
            vec![
                seasonal_observation("Dongsi", "2013-03-01 00:00:00", Some(9.0), Some("Spring")),
                seasonal_observation("Dongsi", "2013-06-01 00:00:00", Some(40.0), Some("Summer")),
                seasonal_observation("Dongsi", "2013-03-02 00:00:00", Some(15.0), Some("Spring")),
                seasonal_observation("Dongsi", "2013-09-01 00:00:00", None, Some("Autumn")),
                seasonal_observation("Dongsi", "2013-12-01 00:00:00", Some(120.0), Some("Winter")),
                seasonal_observation("Dongsi", "2013-12-02 00:00:00", Some(80.0), None),
                seasonal_observation("Wanliu", "2013-12-01 00:00:00", Some(1.0), Some("Winter")),
            ],
            ObservationColumn::ALL,
        )
    }

    #[test]
    fn groups_follow_first_appearance() {
        let table = table();
        let groups = season_groups(&table.filter_station("Dongsi"));
        let seasons: Vec<_> = groups.iter().map(|g| g.season.as_str()).collect();
        assert_eq!(seasons, ["Spring", "Summer", "Autumn", "Winter"]);
        assert_eq!(groups[0].values, vec![9.0, 15.0]);
        assert!(groups[2].values.is_empty());
        assert_eq!(groups[3].values, vec![120.0]);
    }

    #[test]
    fn one_box_per_season() -> Result<(), ViewError> {
        let table = table();
        let figure = seasonal_boxplot(&table.filter_station("Dongsi"))?;

        assert_eq!(figure.data.len(), 4);
        assert!(figure
            .data
            .iter()
            .all(|t| matches!(t, Trace::Box(b) if b.boxpoints == BoxPoints::Outliers)));
        assert_eq!(
            figure.title(),
            Some("PM2.5 Distribution by Season at Dongsi")
        );
        Ok(())
    }

    #[test]
    fn empty_view_has_no_boxes() -> Result<(), ViewError> {
        let table = table();
        let figure = seasonal_boxplot(&table.filter_station("Nowhere"))?;
        assert!(figure.data.is_empty());
        Ok(())
    }

    #[test]
    fn needs_a_season_column() {
        let table = ObservationTable::new(Vec::new(), [ObservationColumn::Pm25]);
        let err = seasonal_boxplot(&table.filter_station("Dongsi")).unwrap_err();
        assert_eq!(
            err,
            ViewError::MissingColumn {
                view: View::SeasonalBoxplot,
                column: ObservationColumn::Season
            }
        );
    }
}
