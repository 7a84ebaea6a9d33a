//! Training-run report payloads (`/api/training/*`).
//!
//! The list endpoint reports accuracies as percentages (already multiplied by
//! 100 server-side); the detail endpoint reports raw 0..1 fractions.

#[cfg(test)]
#[path = "training_test.rs"]
mod training_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Accuracy bands used to colour report cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccuracyBand {
    Good,
    Fair,
    Poor,
}

impl AccuracyBand {
    /// Classify a percentage accuracy: `>= 90` good, `>= 70` fair, else poor.
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 90.0 {
            Self::Good
        } else if percent >= 70.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Good => "accuracy--good",
            Self::Fair => "accuracy--fair",
            Self::Poor => "accuracy--poor",
        }
    }
}

/// Row in the training history list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingRunSummary {
    pub id: i64,
    #[serde(default)]
    pub trained_at: Option<Timestamp>,
    #[serde(default)]
    pub split_ratio: Option<serde_json::Value>,
    #[serde(default)]
    pub epochs_run: Option<u32>,
    #[serde(default)]
    pub total_samples: Option<u64>,
    pub train_accuracy: f64,
    pub val_accuracy: f64,
    pub test_accuracy: f64,
}

/// One row of a scikit-learn style classification report.
///
/// The `accuracy` row is a bare number; every other row carries metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassReportEntry {
    Metrics(ClassMetrics),
    Scalar(f64),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    #[serde(default)]
    pub precision: f64,
    #[serde(default)]
    pub recall: f64,
    #[serde(default, rename = "f1-score")]
    pub f1_score: f64,
    #[serde(default)]
    pub support: f64,
}

/// Summary rows of the classification report, in display order.
pub const REPORT_SUMMARY_ROWS: [&str; 3] = ["accuracy", "macro avg", "weighted avg"];

/// Full report of a single training run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingRunDetail {
    pub id: i64,
    #[serde(default)]
    pub trained_at: Option<Timestamp>,
    #[serde(default)]
    pub split_ratio: Option<serde_json::Value>,
    #[serde(default)]
    pub epochs_run: Option<u32>,
    #[serde(default)]
    pub total_samples: u64,
    #[serde(default)]
    pub train_samples: u64,
    #[serde(default)]
    pub val_samples: u64,
    #[serde(default)]
    pub test_samples: u64,
    #[serde(default)]
    pub train_accuracy: f64,
    #[serde(default)]
    pub val_accuracy: f64,
    #[serde(default)]
    pub test_accuracy: f64,
    #[serde(default)]
    pub train_loss: Option<f64>,
    #[serde(default)]
    pub val_loss: Option<f64>,
    #[serde(default)]
    pub test_loss: Option<f64>,
    #[serde(default)]
    pub num_classes: Option<u32>,
    #[serde(default)]
    pub confusion_matrix: Vec<Vec<u64>>,
    #[serde(default)]
    pub class_names: Vec<String>,
    #[serde(default)]
    pub classification_report: BTreeMap<String, ClassReportEntry>,
}

impl TrainingRunDetail {
    /// Share of all samples in a split, as a rounded percentage.
    #[must_use]
    pub fn split_percent(&self, samples: u64) -> u64 {
        if self.total_samples == 0 {
            return 0;
        }
        (samples * 100 + self.total_samples / 2) / self.total_samples
    }

    /// Largest confusion-matrix cell, at least 1.
    #[must_use]
    pub fn confusion_max(&self) -> u64 {
        self.confusion_matrix.iter().flatten().copied().max().unwrap_or(0).max(1)
    }

    /// Per-class report rows, in `class_names` order when the run lists them.
    #[must_use]
    pub fn class_rows(&self) -> Vec<(String, ClassMetrics)> {
        let metrics_for = |name: &str| match self.classification_report.get(name) {
            Some(ClassReportEntry::Metrics(m)) => Some((name.to_owned(), m.clone())),
            _ => None,
        };
        if self.class_names.is_empty() {
            self.classification_report
                .keys()
                .filter(|name| !REPORT_SUMMARY_ROWS.contains(&name.as_str()))
                .filter_map(|name| metrics_for(name))
                .collect()
        } else {
            self.class_names.iter().filter_map(|name| metrics_for(name)).collect()
        }
    }
}

/// Render a `split_ratio` value (`"70:15:15"` or a number) for display.
#[must_use]
pub fn split_ratio_label(ratio: Option<&serde_json::Value>) -> String {
    match ratio {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => "-".to_owned(),
        Some(other) => other.to_string(),
    }
}

/// Background opacity of a confusion-matrix cell: `0.1 + 0.8 * value / max`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn heat_intensity(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.1;
    }
    0.1 + (value as f64 / max as f64) * 0.8
}
