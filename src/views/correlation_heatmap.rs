use crate::analysis::correlation::{correlation_matrix, CorrelationMatrix};
use crate::observations::table::StationView;
use crate::types::column::NumericColumn;
use crate::views::error::{View, ViewError};
use crate::views::figure::{
    Axis, AutoRange, AxisType, ColorScale, Figure, HeatmapTrace, Layout, COOLWARM,
};

/// Correlation matrix of the six numeric columns for the selected station.
pub fn station_correlations(view: &StationView) -> Result<CorrelationMatrix, ViewError> {
    let columns: Vec<_> = NumericColumn::ALL.iter().map(|c| c.column()).collect();
    view.require(View::CorrelationHeatmap, &columns)?;
    Ok(correlation_matrix(view.rows(), &NumericColumn::ALL))
}

/// Annotated heatmap of [`station_correlations`] on a diverging scale centred at zero.
pub fn correlation_heatmap(view: &StationView) -> Result<Figure, ViewError> {
    let matrix = station_correlations(view)?;
    let labels: Vec<String> = matrix.columns.iter().map(|c| c.header().to_string()).collect();
    let text: Vec<Vec<String>> = matrix
        .values
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| v.map(|v| format!("{v:.2}")).unwrap_or_default())
                .collect::<Vec<String>>()
        })
        .collect();

    let layout = Layout {
        title: Some(view.title("Correlation between PM2.5 and Meteorological Factors")),
        xaxis: Some(Axis {
            axis_type: Some(AxisType::Category),
            ..Default::default()
        }),
        yaxis: Some(Axis {
            axis_type: Some(AxisType::Category),
            autorange: Some(AutoRange::Reversed),
            ..Default::default()
        }),
        showlegend: None,
        height: Some(560),
    };

    Ok(Figure::new(layout).with_trace(HeatmapTrace {
        x: labels.clone(),
        y: labels,
        z: matrix.values,
        text,
        texttemplate: "%{text}".to_string(),
        colorscale: ColorScale::Stops(COOLWARM.to_vec()),
        zmin: -1.0,
        zmid: 0.0,
        zmax: 1.0,
        showscale: true,
    }))
}
