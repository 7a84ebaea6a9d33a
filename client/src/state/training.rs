//! Display formatting for training-run reports.

#[cfg(test)]
#[path = "training_test.rs"]
mod training_test;

use wire::TrainingRunDetail;
use wire::training::{AccuracyBand, ClassMetrics, ClassReportEntry, REPORT_SUMMARY_ROWS, heat_intensity};

/// Accuracy given as a 0..1 fraction, e.g. `"95.00%"`.
pub fn fraction_label(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// CSS class for an accuracy given as a 0..1 fraction.
pub fn fraction_band(fraction: f64) -> &'static str {
    AccuracyBand::from_percent(fraction * 100.0).css_class()
}

/// CSS class for an accuracy already given in percent.
pub fn percent_band(percent: f64) -> &'static str {
    AccuracyBand::from_percent(percent).css_class()
}

pub fn loss_label(loss: Option<f64>) -> String {
    loss.map_or_else(|| "-".to_owned(), |l| format!("{l:.4}"))
}

/// Inline background for a confusion-matrix cell.
pub fn heat_style(value: u64, max: u64) -> String {
    format!("background: rgba(59, 130, 246, {:.3})", heat_intensity(value, max))
}

/// One rendered row of the classification report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub label: String,
    pub precision: String,
    pub recall: String,
    pub f1_score: String,
    pub support: String,
    pub summary: bool,
}

/// Per-class rows followed by the summary rows the report contains.
pub fn report_rows(detail: &TrainingRunDetail) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> =
        detail.class_rows().into_iter().map(|(name, m)| metrics_row(name, &m, false)).collect();
    for key in REPORT_SUMMARY_ROWS {
        match detail.classification_report.get(key) {
            Some(ClassReportEntry::Metrics(m)) => rows.push(metrics_row(key.to_owned(), m, true)),
            Some(ClassReportEntry::Scalar(accuracy)) => rows.push(ReportRow {
                label: key.to_owned(),
                precision: String::new(),
                recall: String::new(),
                f1_score: metric(*accuracy),
                support: detail.test_samples.to_string(),
                summary: true,
            }),
            None => {}
        }
    }
    rows
}

fn metrics_row(label: String, m: &ClassMetrics, summary: bool) -> ReportRow {
    ReportRow {
        label,
        precision: metric(m.precision),
        recall: metric(m.recall),
        f1_score: metric(m.f1_score),
        support: format!("{}", m.support),
        summary,
    }
}

fn metric(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
