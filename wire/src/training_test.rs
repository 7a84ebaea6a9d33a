use super::*;

fn sample_detail() -> TrainingRunDetail {
    serde_json::from_value(serde_json::json!({
        "id": 3,
        "trained_at": "2025-02-01T08:30:00",
        "total_samples": 200,
        "train_samples": 140,
        "val_samples": 30,
        "test_samples": 30,
        "train_accuracy": 0.95,
        "val_accuracy": 0.81,
        "test_accuracy": 0.78,
        "train_loss": 0.12,
        "val_loss": 0.4,
        "test_loss": 0.45,
        "confusion_matrix": [[9, 1], [2, 18]],
        "class_names": ["salam", "biaya"],
        "classification_report": {
            "biaya": {"precision": 0.94, "recall": 0.9, "f1-score": 0.92, "support": 20},
            "salam": {"precision": 0.81, "recall": 0.9, "f1-score": 0.85, "support": 10},
            "accuracy": 0.9,
            "macro avg": {"precision": 0.87, "recall": 0.9, "f1-score": 0.88, "support": 30},
            "weighted avg": {"precision": 0.9, "recall": 0.9, "f1-score": 0.9, "support": 30}
        }
    }))
    .expect("detail")
}

#[test]
fn accuracy_band_thresholds() {
    assert_eq!(AccuracyBand::from_percent(90.0), AccuracyBand::Good);
    assert_eq!(AccuracyBand::from_percent(89.99), AccuracyBand::Fair);
    assert_eq!(AccuracyBand::from_percent(70.0), AccuracyBand::Fair);
    assert_eq!(AccuracyBand::from_percent(69.5), AccuracyBand::Poor);
}

#[test]
fn split_percent_rounds_and_guards_zero_total() {
    let detail = sample_detail();
    assert_eq!(detail.split_percent(detail.train_samples), 70);
    assert_eq!(detail.split_percent(detail.val_samples), 15);

    let empty = TrainingRunDetail { total_samples: 0, ..detail };
    assert_eq!(empty.split_percent(5), 0);
}

#[test]
fn confusion_max_is_at_least_one() {
    let detail = sample_detail();
    assert_eq!(detail.confusion_max(), 18);
    let empty = TrainingRunDetail { confusion_matrix: Vec::new(), ..detail };
    assert_eq!(empty.confusion_max(), 1);
}

#[test]
fn heat_intensity_scales_between_bounds() {
    assert!((heat_intensity(0, 10) - 0.1).abs() < f64::EPSILON);
    assert!((heat_intensity(10, 10) - 0.9).abs() < 1e-9);
    assert!((heat_intensity(3, 0) - 0.1).abs() < f64::EPSILON);
}

#[test]
fn report_accuracy_row_is_scalar() {
    let detail = sample_detail();
    assert_eq!(detail.classification_report.get("accuracy"), Some(&ClassReportEntry::Scalar(0.9)));
}

#[test]
fn class_rows_follow_class_names_order() {
    let rows = sample_detail().class_rows();
    let names: Vec<&str> = rows.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["salam", "biaya"]);
    assert!((rows[1].1.f1_score - 0.92).abs() < 1e-9);
}

#[test]
fn class_rows_without_names_skip_summary_rows() {
    let detail = TrainingRunDetail { class_names: Vec::new(), ..sample_detail() };
    let names: Vec<String> = detail.class_rows().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["biaya".to_owned(), "salam".to_owned()]);
}

#[test]
fn summary_accepts_percent_accuracies() {
    let run: TrainingRunSummary = serde_json::from_value(serde_json::json!({
        "id": 1,
        "trained_at": "2025-02-01T08:30:00.123456",
        "split_ratio": "70:15:15",
        "epochs_run": 42,
        "total_samples": 200,
        "train_accuracy": 95.5,
        "val_accuracy": 81.0,
        "test_accuracy": 78.25
    }))
    .expect("summary");
    assert_eq!(run.epochs_run, Some(42));
    assert_eq!(AccuracyBand::from_percent(run.train_accuracy), AccuracyBand::Good);
}

#[test]
fn split_ratio_label_handles_strings_numbers_and_absence() {
    assert_eq!(split_ratio_label(Some(&serde_json::json!("70:15:15"))), "70:15:15");
    assert_eq!(split_ratio_label(Some(&serde_json::json!(0.8))), "0.8");
    assert_eq!(split_ratio_label(Some(&serde_json::Value::Null)), "-");
    assert_eq!(split_ratio_label(None), "-");
}

#[test]
fn num_classes_is_optional() {
    assert_eq!(sample_detail().num_classes, None);
}
