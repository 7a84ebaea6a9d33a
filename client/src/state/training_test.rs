use super::*;

fn detail() -> TrainingRunDetail {
    serde_json::from_value(serde_json::json!({
        "id": 3,
        "total_samples": 200,
        "train_samples": 140,
        "val_samples": 30,
        "test_samples": 30,
        "train_accuracy": 0.95,
        "val_accuracy": 0.81,
        "test_accuracy": 0.5,
        "confusion_matrix": [[9, 1], [2, 18]],
        "class_names": ["salam", "biaya"],
        "classification_report": {
            "biaya": {"precision": 0.94, "recall": 0.9, "f1-score": 0.92, "support": 20},
            "salam": {"precision": 0.8, "recall": 0.9, "f1-score": 0.85, "support": 10},
            "accuracy": 0.9,
            "weighted avg": {"precision": 0.9, "recall": 0.9, "f1-score": 0.9, "support": 30}
        }
    }))
    .expect("detail")
}

#[test]
fn fraction_formatting_and_bands() {
    assert_eq!(fraction_label(0.95), "95.00%");
    assert_eq!(fraction_band(0.95), "accuracy--good");
    assert_eq!(fraction_band(0.75), "accuracy--fair");
    assert_eq!(fraction_band(0.5), "accuracy--poor");
    assert_eq!(percent_band(91.0), "accuracy--good");
}

#[test]
fn loss_label_has_four_decimals() {
    assert_eq!(loss_label(Some(0.123_456)), "0.1235");
    assert_eq!(loss_label(None), "-");
}

#[test]
fn heat_style_scales_with_max() {
    assert_eq!(heat_style(0, 18), "background: rgba(59, 130, 246, 0.100)");
    assert_eq!(heat_style(18, 18), "background: rgba(59, 130, 246, 0.900)");
}

#[test]
fn report_rows_follow_class_order_then_summaries() {
    let rows = report_rows(&detail());
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["salam", "biaya", "accuracy", "weighted avg"]);
    assert_eq!(rows[0].precision, "80.0%");
    assert_eq!(rows[0].support, "10");
    assert!(!rows[0].summary);
}

#[test]
fn accuracy_row_reports_test_samples() {
    let rows = report_rows(&detail());
    let accuracy = rows.iter().find(|r| r.label == "accuracy").expect("accuracy row");
    assert!(accuracy.summary);
    assert_eq!(accuracy.precision, "");
    assert_eq!(accuracy.f1_score, "90.0%");
    assert_eq!(accuracy.support, "30");
}
