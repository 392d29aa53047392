//! Report model: turn each file's series into scaled, labelled chart views.

use crate::Result;
use crate::log::SeriesSet;
use crate::source::ProcessLabel;
use anyhow::bail;
use serde::Serialize;
use std::path::PathBuf;

const X_LABEL: &str = "Time, ms";
const KIB: f64 = 1024.0;

/// How one metric is drawn: which series, how it is scaled, how it is labelled.
struct ChartSpec {
    title: &'static str,
    y_label: &'static str,
    divisor: f64,
    series: fn(&SeriesSet) -> &[f64],
}

/// Charts per file, in display order.
const CHARTS: [ChartSpec; 6] = [
    ChartSpec {
        title: "Memory usage",
        y_label: "Memory RAM, MB",
        divisor: 1.0,
        series: |s| &s.memory,
    },
    ChartSpec {
        title: "CPU usage",
        y_label: "CPU usage, %",
        divisor: 1.0,
        series: |s| &s.cpu,
    },
    ChartSpec {
        title: "Written bytes",
        y_label: "Bytes written, KB",
        divisor: KIB,
        series: |s| &s.write_bytes,
    },
    ChartSpec {
        title: "Read bytes",
        y_label: "Bytes read, KB",
        divisor: KIB,
        series: |s| &s.read_bytes,
    },
    ChartSpec {
        title: "Total read bytes",
        y_label: "Bytes read, MB",
        divisor: KIB * KIB,
        series: |s| &s.total_read,
    },
    ChartSpec {
        title: "Total written bytes",
        y_label: "Bytes written, MB",
        divisor: KIB * KIB,
        series: |s| &s.total_write,
    },
];

/// One parsed input file.
#[derive(Debug, Clone)]
pub struct LoadedLog {
    pub path: PathBuf,
    pub label: ProcessLabel,
    pub series: SeriesSet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub last: f64,
}

impl SeriesStats {
    /// None for an empty series.
    pub fn of(values: &[f64]) -> Option<Self> {
        let last = *values.last()?;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Some(Self {
            min,
            max,
            mean,
            last,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// (time ms, scaled value) in file order.
    pub points: Vec<[f64; 2]>,
    pub stats: Option<SeriesStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReportView {
    pub path: String,
    pub label: String,
    pub pid: Option<String>,
    pub process_name: Option<String>,
    pub samples: usize,
    pub charts: Vec<ChartView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalsView {
    pub files: usize,
    pub samples: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub files: Vec<FileReportView>,
    pub totals: TotalsView,
}

/// Build report data. Performs:
/// - check every series of a file has one value per time sample (error)
/// - warn about files without any samples
pub fn build_report_data(logs: &[LoadedLog]) -> Result<ReportData> {
    let mut files = Vec::with_capacity(logs.len());
    let mut samples = 0usize;

    for log in logs {
        let series = &log.series;
        for spec in &CHARTS {
            let ys = (spec.series)(series);
            if ys.len() != series.time.len() {
                bail!(
                    "series '{}' of {} has {} values for {} time samples",
                    spec.title,
                    log.path.display(),
                    ys.len(),
                    series.time.len()
                );
            }
        }

        if series.is_empty() {
            tracing::warn!(path = %log.path.display(), "log file contains no samples");
        }

        files.push(FileReportView {
            path: log.path.display().to_string(),
            label: log.label.display(),
            pid: log.label.pid.clone(),
            process_name: log.label.process_name.clone(),
            samples: series.len(),
            charts: CHARTS.iter().map(|spec| build_chart(spec, series)).collect(),
        });
        samples += series.len();
    }

    Ok(ReportData {
        totals: TotalsView {
            files: files.len(),
            samples,
        },
        files,
    })
}

fn build_chart(spec: &ChartSpec, series: &SeriesSet) -> ChartView {
    let ys: Vec<f64> = (spec.series)(series)
        .iter()
        .map(|v| v / spec.divisor)
        .collect();
    let points = series
        .time
        .iter()
        .zip(&ys)
        .map(|(&t, &y)| [t, y])
        .collect();

    ChartView {
        title: spec.title.to_string(),
        x_label: X_LABEL.to_string(),
        y_label: spec.y_label.to_string(),
        points,
        stats: SeriesStats::of(&ys),
    }
}
