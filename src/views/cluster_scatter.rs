use crate::observations::table::StationView;
use crate::types::column::ObservationColumn;
use crate::views::error::{View, ViewError};
use crate::views::figure::{
    Axis, ColorBar, ColorScale, Datum, Figure, Layout, Marker, Mode, ScatterTrace, Title,
};

/// Scatter of temperature against PM2.5, coloured by the pre-computed cluster label.
///
/// Rows missing any of the three values are not drawn. The labels are only used for colour;
/// nothing here derives or checks them.
pub fn cluster_scatter(view: &StationView) -> Result<Figure, ViewError> {
    view.require(
        View::ClusterScatter,
        &[
            ObservationColumn::Temp,
            ObservationColumn::Pm25,
            ObservationColumn::Cluster,
        ],
    )?;

    let mut x = Vec::new();
    let mut y = Vec::new();
    let mut color = Vec::new();
    for row in view.rows() {
        if let (Some(temp), Some(pm25), Some(cluster)) = (row.temp, row.pm25, row.cluster) {
            x.push(Datum::Number(temp));
            y.push(Some(pm25));
            color.push(cluster as f64);
        }
    }

    let layout = Layout {
        title: Some(view.title("Clustering of PM2.5 and Temperature")),
        xaxis: Some(Axis::titled("Temperature")),
        yaxis: Some(Axis::titled("PM2.5")),
        showlegend: Some(false),
        height: Some(480),
    };

    Ok(Figure::new(layout).with_trace(ScatterTrace {
        x,
        y,
        mode: Mode::Markers,
        name: None,
        marker: Some(Marker {
            color: Some(color),
            colorscale: Some(ColorScale::Named("Viridis")),
            showscale: Some(true),
            colorbar: Some(ColorBar {
                title: Title::new("cluster"),
            }),
            size: Some(6.0),
        }),
    }))
}
