use crate::models::JobDetail;

/// Series colors assigned to datasets that carry no explicit color,
/// cycled by dataset index.
pub const SERIES_PALETTE: [&str; 6] = [
    "#36a2eb", "#ff6384", "#ff9f40", "#ffcd56", "#4bc0c0", "#9966ff",
];

/// Hex alpha suffix turning a series color into its translucent area fill.
const FILL_ALPHA: &str = "33";

/// Curve smoothing applied to every series.
const SMOOTHING: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisOptions {
    pub begin_at_zero: bool,
    pub integer_ticks: bool,
}

/// Declarative chart description consumed by the presenting layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: Option<String>,
    /// Shared category axis; the first dataset's labels are authoritative.
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub legend: LegendPosition,
    pub y_axis: AxisOptions,
}

/// One filled, smoothed series of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    pub color: String,
    pub fill_color: String,
    pub smoothing: f64,
}

/// Build the chart spec for a job, or `None` when it has no datasets.
pub fn build_chart_spec(detail: &JobDetail) -> Option<ChartSpec> {
    if detail.datasets.is_empty() {
        return None;
    }

    let categories = detail.datasets[0].labels.clone();
    let series = detail
        .datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| {
            let color = dataset
                .color
                .clone()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| SERIES_PALETTE[index % SERIES_PALETTE.len()].to_string());
            Series {
                label: dataset
                    .label
                    .clone()
                    .filter(|l| !l.trim().is_empty())
                    .unwrap_or_else(|| format!("series {}", index + 1)),
                values: dataset.values.clone(),
                fill_color: format!("{color}{FILL_ALPHA}"),
                color,
                smoothing: SMOOTHING,
            }
        })
        .collect();

    Some(ChartSpec {
        title: detail.chart_title.clone(),
        categories,
        series,
        legend: LegendPosition::Bottom,
        y_axis: AxisOptions {
            begin_at_zero: true,
            integer_ticks: true,
        },
    })
}

/// A mounted chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    pub spec: ChartSpec,
}

/// Owner of the single live chart instance.
///
/// Every render path disposes of the previous instance before mounting a
/// new one; the empty-state placeholder and a mounted chart are mutually
/// exclusive.
#[derive(Debug, Clone, Default)]
pub struct ChartSlot {
    instance: Option<ChartInstance>,
}

impl ChartSlot {
    pub fn render(&mut self, detail: &JobDetail) {
        self.destroy();
        if let Some(spec) = build_chart_spec(detail) {
            tracing::debug!(series = spec.series.len(), "mounting chart");
            self.instance = Some(ChartInstance { spec });
        }
    }

    /// Tear down the current instance, if any.
    pub fn destroy(&mut self) {
        if self.instance.take().is_some() {
            tracing::debug!("disposed previous chart instance");
        }
    }

    pub fn instance(&self) -> Option<&ChartInstance> {
        self.instance.as_ref()
    }

    /// The placeholder is shown exactly when no instance is mounted.
    pub fn is_placeholder(&self) -> bool {
        self.instance.is_none()
    }
}
