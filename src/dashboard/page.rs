//! HTML rendering of a [`DashboardPage`].
//!
//! The page is a single self-contained document. Figures are embedded as Plotly.js JSON and
//! drawn client side; the station dropdown submits a plain GET form.

use crate::dashboard::app::DashboardPage;
use crate::dashboard::narrative::{CONCLUSIONS, CONCLUSIONS_INTRO, SIDEBAR_HEADER, SIDEBAR_NOTE};
use crate::views::error::{View, ViewError};
use crate::views::figure::Figure;
use crate::views::summary::StationSummary;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

impl DashboardPage {
    /// Renders the whole page as an HTML document.
    pub fn to_html(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{plotly}"></script>
    <style>{css}</style>
</head>
<body>
    <aside class="sidebar">
        {sidebar}
    </aside>
    <main class="content">
        <h1>{title}</h1>
        <section>
            <h2>Overview of PM2.5 Levels</h2>
            {summary}
        </section>
        <section>
            <h2>PM2.5 Levels Over Time</h2>
            {time_series}
        </section>
        <section>
            <h2>Seasonal Patterns of PM2.5</h2>
            {seasonal_boxplot}
        </section>
        <section>
            <h2>Correlation between PM2.5 and Meteorological Factors</h2>
            {correlation_heatmap}
        </section>
        <section>
            <h2>Advanced Analysis: Clustering</h2>
            <h3>Clustering Results</h3>
            {cluster_scatter}
        </section>
        <section>
            <h2>Conclusions</h2>
            {conclusions}
        </section>
    </main>
</body>
</html>"#,
            title = html_escape(&self.title),
            plotly = PLOTLY_CDN,
            css = inline_css(),
            sidebar = render_sidebar(self),
            summary = match &self.summary {
                Ok(rows) => render_summary_table(rows),
                Err(err) => render_view_error(err),
            },
            time_series = render_chart(View::TimeSeries, &self.time_series),
            seasonal_boxplot = render_chart(View::SeasonalBoxplot, &self.seasonal_boxplot),
            correlation_heatmap =
                render_chart(View::CorrelationHeatmap, &self.correlation_heatmap),
            cluster_scatter = render_chart(View::ClusterScatter, &self.cluster_scatter),
            conclusions = render_conclusions(),
        )
    }
}

/// A standalone error page, used when no dashboard can be rendered at all.
pub fn render_error_page(title: &str, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <main class="content">
        <h1>{title}</h1>
        <div class="view-error">{message}</div>
        <p><a href="/">Back to the dashboard</a></p>
    </main>
</body>
</html>"#,
        title = html_escape(title),
        css = inline_css(),
        message = html_escape(message),
    )
}

fn render_sidebar(page: &DashboardPage) -> String {
    let options: String = page
        .stations
        .iter()
        .map(|station| {
            let selected = if page.selected_station.as_deref() == Some(station.as_str()) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{value}"{selected}>{value}</option>"#,
                value = html_escape(station),
            )
        })
        .collect();

    format!(
        r#"<h2>{header}</h2>
        <form method="get" action="/">
            <label for="station">Select Station</label>
            <select id="station" name="station" onchange="this.form.submit()">{options}</select>
            <noscript><button type="submit">Show</button></noscript>
        </form>
        <p class="note">{note}</p>"#,
        header = SIDEBAR_HEADER,
        note = html_escape(SIDEBAR_NOTE),
    )
}

fn render_summary_table(rows: &[StationSummary]) -> String {
    let body: String = rows
        .iter()
        .map(|row| {
            let s = &row.statistics;
            format!(
                "<tr><th>{}</th><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                html_escape(&row.station),
                s.count,
                format_stat(s.mean),
                format_stat(s.std),
                format_stat(s.min),
                format_stat(s.q25),
                format_stat(s.median),
                format_stat(s.q75),
                format_stat(s.max),
            )
        })
        .collect();

    format!(
        r#"<table class="summary">
                <thead><tr><th>station</th><th>count</th><th>mean</th><th>std</th><th>min</th><th>25%</th><th>50%</th><th>75%</th><th>max</th></tr></thead>
                <tbody>{body}</tbody>
            </table>"#
    )
}

fn format_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "NaN".to_string(), |v| format!("{v:.2}"))
}

fn render_chart(view: View, figure: &Result<Figure, ViewError>) -> String {
    let figure = match figure {
        Ok(figure) => figure,
        Err(err) => return render_view_error(err),
    };
    let json = match figure.to_json() {
        Ok(json) => json,
        Err(err) => {
            return render_view_error(&ViewError::Serialization {
                view,
                message: err.to_string(),
            })
        }
    };
    let id = chart_id(view);

    format!(
        r#"<div id="{id}" class="chart"></div>
            <script>(function () {{ const fig = {json}; Plotly.newPlot("{id}", fig.data, fig.layout, {{responsive: true}}); }})();</script>"#,
        json = escape_script(&json),
    )
}

fn chart_id(view: View) -> &'static str {
    match view {
        View::Summary => "summary",
        View::TimeSeries => "time-series",
        View::SeasonalBoxplot => "seasonal-boxplot",
        View::CorrelationHeatmap => "correlation-heatmap",
        View::ClusterScatter => "cluster-scatter",
    }
}

fn render_view_error(err: &ViewError) -> String {
    format!(
        r#"<div class="view-error">{}</div>"#,
        html_escape(&err.to_string())
    )
}

fn render_conclusions() -> String {
    let items: String = CONCLUSIONS
        .iter()
        .enumerate()
        .map(|(i, text)| format!("<li>{}. {}</li>", i + 1, html_escape(text)))
        .collect();
    format!(
        r#"<p>{intro}</p>
            <ul class="conclusions">{items}</ul>"#,
        intro = CONCLUSIONS_INTRO,
    )
}

fn inline_css() -> &'static str {
    r#"
body { margin: 0; display: flex; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; color: #262730; }
.sidebar { width: 18rem; min-height: 100vh; padding: 1.5rem; background: #f0f2f6; box-sizing: border-box; }
.sidebar select { width: 100%; margin-top: 0.5rem; padding: 0.4rem; }
.sidebar .note { margin-top: 1.5rem; padding: 0.75rem; background: #e6f0fb; border-radius: 0.4rem; font-size: 0.9rem; }
.content { flex: 1; padding: 1.5rem 3rem; max-width: 64rem; }
table.summary { border-collapse: collapse; width: 100%; font-size: 0.9rem; }
table.summary th, table.summary td { padding: 0.35rem 0.6rem; border-bottom: 1px solid #e0e0e0; text-align: right; }
table.summary th:first-child { text-align: left; }
.chart { width: 100%; min-height: 480px; }
.view-error { padding: 0.75rem 1rem; color: #7d353b; background: #ffe2e0; border-radius: 0.4rem; }
.conclusions { list-style: none; padding-left: 0; }
"#
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// JSON inside a `<script>` element must not close it or open a comment.
///
/// `<`, `>` and `&` can only occur inside JSON strings, where the `\uXXXX` forms decode to
/// the same text.
fn escape_script(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::describe::describe;
    use crate::types::column::ObservationColumn;
    use crate::views::figure::{Layout, Title};

    fn page() -> DashboardPage {
        let figure = Figure::new(Layout {
            title: Some(Title::new("PM2.5 Levels at Dongsi")),
            ..Default::default()
        });
        DashboardPage {
            title: "Air Quality Analysis in Beijing".into(),
            stations: vec!["Dongsi".into(), "Wanliu & <Co>".into()],
            selected_station: Some("Dongsi".into()),
            station_rows: 3,
            summary: Ok(vec![
                StationSummary {
                    station: "Dongsi".into(),
                    statistics: describe(&[10.0, 20.0, 30.0]),
                },
                StationSummary {
                    station: "Empty".into(),
                    statistics: describe(&[]),
                },
            ]),
            time_series: Ok(figure.clone()),
            seasonal_boxplot: Err(ViewError::MissingColumn {
                view: View::SeasonalBoxplot,
                column: ObservationColumn::Season,
            }),
            correlation_heatmap: Ok(figure.clone()),
            cluster_scatter: Ok(figure),
        }
    }

    #[test]
    fn sections_appear_in_order() {
        let html = page().to_html();
        let headers = [
            "Air Quality Analysis in Beijing</h1>",
            "Overview of PM2.5 Levels",
            "PM2.5 Levels Over Time",
            "Seasonal Patterns of PM2.5",
            "Correlation between PM2.5 and Meteorological Factors",
            "Advanced Analysis: Clustering",
            "Clustering Results",
            "Conclusions",
        ];
        let positions: Vec<usize> = headers
            .iter()
            .map(|h| html.find(h).unwrap_or_else(|| panic!("missing {h}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn failed_view_shows_inline_error() {
        let html = page().to_html();
        assert!(html.contains(
            r#"<div class="view-error">The seasonal boxplot needs column &#39;season&#39;, which is missing from the data</div>"#
        ));
        assert!(!html.contains(r#"id="seasonal-boxplot""#));
        assert!(html.contains(r#"id="time-series""#));
        assert!(html.contains(r#"id="cluster-scatter""#));
    }

    #[test]
    fn dropdown_marks_selection_and_escapes_names() {
        let html = page().to_html();
        assert!(html.contains(r#"<option value="Dongsi" selected>Dongsi</option>"#));
        assert!(html.contains("Wanliu &amp; &lt;Co&gt;"));
        assert!(!html.contains("<Co>"));
        assert!(html.contains(r#"onchange="this.form.submit()""#));
    }

    #[test]
    fn summary_rounds_and_marks_missing() {
        let html = page().to_html();
        assert!(html.contains("<tr><th>Dongsi</th><td>3</td><td>20.00</td><td>10.00</td>"));
        assert!(html.contains("<tr><th>Empty</th><td>0</td><td>NaN</td>"));
    }

    #[test]
    fn script_json_cannot_close_the_tag() {
        let mut page = page();
        page.time_series = Ok(Figure::new(Layout {
            title: Some(Title::new("</script><b>")),
            ..Default::default()
        }));
        let html = page.to_html();
        assert!(html.contains(r#"\u003c/script\u003e\u003cb\u003e"#));
        assert_eq!(html.matches("</script>").count(), 1 + 3);
    }

    #[test]
    fn script_json_cannot_open_a_comment() {
        let mut page = page();
        page.stations.push("<!--<script".into());
        page.cluster_scatter = Ok(Figure::new(Layout {
            title: Some(Title::new("Clustering at <!--<script")),
            ..Default::default()
        }));
        let html = page.to_html();

        assert!(!html.contains("<!--"));
        assert!(html.contains(r#"Clustering at \u003c!--\u003cscript"#));
        assert!(html.contains("&lt;!--&lt;script"));
    }

    #[test]
    fn escaped_script_json_still_parses() -> Result<(), serde_json::Error> {
        let figure = Figure::new(Layout {
            title: Some(Title::new("a < b && c > d </script>")),
            ..Default::default()
        });
        let escaped = escape_script(&figure.to_json()?);
        let value: serde_json::Value = serde_json::from_str(&escaped)?;
        assert_eq!(value["layout"]["title"]["text"], "a < b && c > d </script>");
        Ok(())
    }

    #[test]
    fn error_page_escapes_message() {
        let html = render_error_page("Not found", "Station '<x>' is not in the data");
        assert!(html.contains("Station &#39;&lt;x&gt;&#39; is not in the data"));
    }
}
