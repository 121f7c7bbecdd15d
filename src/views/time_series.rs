use crate::observations::table::StationView;
use crate::types::column::ObservationColumn;
use crate::views::error::{View, ViewError};
use crate::views::figure::{Axis, AxisType, Datum, Figure, Layout, Mode, ScatterTrace};

pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Line chart of PM2.5 against time for the selected station.
///
/// Points follow the row order of the file; missing readings leave gaps in the line.
/// An empty view gives a figure with an empty trace.
pub fn time_series(view: &StationView) -> Result<Figure, ViewError> {
    view.require(View::TimeSeries, &[ObservationColumn::Pm25])?;

    let (x, y): (Vec<Datum>, Vec<Option<f64>>) = view
        .rows()
        .iter()
        .map(|r| {
            (
                Datum::Text(r.datetime.format(TIMESTAMP_FORMAT).to_string()),
                r.pm25,
            )
        })
        .unzip();

    let layout = Layout {
        title: Some(view.title("PM2.5 Levels")),
        xaxis: Some(Axis {
            tickangle: Some(-45.0),
            axis_type: Some(AxisType::Date),
            ..Axis::titled("Date")
        }),
        yaxis: Some(Axis::titled("PM2.5")),
        showlegend: Some(false),
        height: Some(480),
    };

    Ok(Figure::new(layout).with_trace(ScatterTrace {
        x,
        y,
        mode: Mode::Lines,
        name: Some("PM2.5".to_string()),
        marker: None,
    }))
}
