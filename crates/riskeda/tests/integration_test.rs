//! Integration tests for riskeda.

use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, TempDir};

use riskeda::chart;
use riskeda::{
    BOXPLOT_FILE, CLASS_DISTRIBUTION_FILE, COMBINED_FILE, CORRELATION_FILE, DENSITY_FILE,
    EdaError, Feature, ImageFormat, Loader, Mark, ReportConfig, ReportGenerator, SplitConfig,
    generate_eda_report, render_to_bytes, save_chart, train_test_split,
};

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn sample_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test_data/maternal_risk_sample.csv")
}

fn prefix(dir: &TempDir, rest: &str) -> String {
    format!("{}/{}", dir.path().display(), rest)
}

// =============================================================================
// End-to-end report
// =============================================================================

#[test]
fn test_report_creates_missing_output_directory() {
    let dir = TempDir::new().unwrap();
    let output = prefix(&dir, "out/");
    assert!(!dir.path().join("out").exists());

    let summary = generate_eda_report(sample_data(), &output).expect("report failed");

    let names: Vec<&str> = summary.artifacts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            COMBINED_FILE,
            DENSITY_FILE,
            BOXPLOT_FILE,
            CLASS_DISTRIBUTION_FILE,
            CORRELATION_FILE
        ]
    );

    for artifact in &summary.artifacts {
        let bytes = std::fs::read(&artifact.path).expect("artifact missing");
        assert!(bytes.starts_with(PNG_MAGIC), "{} is not a PNG", artifact.name);
        assert_eq!(bytes.len() as u64, artifact.bytes);
    }
    assert!(dir.path().join("out").join(COMBINED_FILE).is_file());
    assert_eq!(std::fs::read_dir(dir.path().join("out")).unwrap().count(), 5);
}

#[test]
fn test_report_summary_counts() {
    let dir = TempDir::new().unwrap();
    let summary = generate_eda_report(sample_data(), &prefix(&dir, "")).unwrap();

    assert_eq!(summary.source.row_count, 30);
    assert_eq!(summary.source.column_count, 7);
    assert_eq!(summary.source.format, "csv");
    assert!(summary.source.hash.starts_with("sha256:"));
    assert_eq!(summary.test_rows, 6);
    assert_eq!(summary.train_rows, 24);
    assert!(summary.risk_levels.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_report_summary_serializes() {
    let dir = TempDir::new().unwrap();
    let summary = generate_eda_report(sample_data(), &prefix(&dir, "")).unwrap();

    let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["train_rows"], 24);
    assert_eq!(json["source"]["file"], "maternal_risk_sample.csv");
    assert_eq!(json["artifacts"][0]["name"], COMBINED_FILE);
    assert_eq!(json["artifacts"].as_array().map(Vec::len), Some(5));
}

#[test]
fn test_report_prefix_is_concatenated_not_joined() {
    let dir = TempDir::new().unwrap();
    let output = prefix(&dir, "run1_");
    generate_eda_report(sample_data(), &output).unwrap();

    assert!(dir.path().join("run1_EDA.png").is_file());
    assert!(dir.path().join("run1_output_32_0.png").is_file());
}

#[test]
fn test_existing_output_directory_is_reused() {
    let dir = TempDir::new().unwrap();
    let output = prefix(&dir, "");
    generate_eda_report(sample_data(), &output).unwrap();
    generate_eda_report(sample_data(), &output).unwrap();
    assert!(dir.path().join(COMBINED_FILE).is_file());
}

#[test]
fn test_non_missing_directory_error_is_not_retried() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let err = generate_eda_report(sample_data(), &prefix(&dir, "blocker/")).unwrap_err();

    assert!(matches!(err, EdaError::Io { .. }), "unexpected error: {err}");
    assert!(!err.is_missing_path());
    assert!(blocker.is_file());
}

#[test]
fn test_missing_data_file() {
    let dir = TempDir::new().unwrap();
    let err = generate_eda_report(dir.path().join("nope.csv"), &prefix(&dir, "")).unwrap_err();
    assert!(matches!(err, EdaError::Io { .. }));
    assert!(!dir.path().join(COMBINED_FILE).exists());
}

#[test]
fn test_blank_cell_is_skipped_not_fatal() {
    let mut content = std::fs::read_to_string(sample_data()).unwrap();
    content.push_str("30,,80,7.5,98,70,low risk\n");
    let file = create_test_file(&content);
    let dir = TempDir::new().unwrap();

    let summary = generate_eda_report(file.path(), &prefix(&dir, "")).expect("report failed");

    assert_eq!(summary.source.row_count, 31);
    assert_eq!(summary.artifacts.len(), 5);
    assert!(dir.path().join(COMBINED_FILE).is_file());

    let (dataset, _) = Loader::new().load(file.path()).unwrap();
    let systolic = dataset.feature_values(Feature::SystolicBP);
    assert_eq!(systolic.iter().filter(|v| v.is_nan()).count(), 1);

    let boxes = chart::boxplot_grid(&dataset);
    for panel in boxes.panels() {
        if let Mark::Boxplot { boxes } = &panel.mark {
            assert!(boxes.iter().all(|b| b.data.min.is_finite() && b.data.max.is_finite()));
        }
    }
}

#[test]
fn test_missing_columns_fail_before_rendering() {
    let file = create_test_file(
        "Age,SystolicBP,BS,RiskLevel\n\
         25,130,15,high risk\n\
         35,140,13,low risk\n",
    );
    let dir = TempDir::new().unwrap();

    let err = generate_eda_report(file.path(), &prefix(&dir, "")).unwrap_err();
    match err {
        EdaError::MissingColumns(columns) => {
            assert_eq!(columns, vec!["DiastolicBP", "BodyTemp", "HeartRate"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_invalid_scale_factor_is_rejected() {
    let dir = TempDir::new().unwrap();
    let generator = ReportGenerator::with_config(ReportConfig {
        scale_factor: 0.0,
        ..ReportConfig::default()
    });
    let err = generator.generate(sample_data(), &prefix(&dir, "")).unwrap_err();
    assert!(matches!(err, EdaError::Render(_)));
}

// =============================================================================
// Split
// =============================================================================

#[test]
fn test_split_is_reproducible_across_loads() {
    let loader = Loader::new();
    let (first, _) = loader.load(sample_data()).unwrap();
    let (second, _) = loader.load(sample_data()).unwrap();

    let a = train_test_split(&first, SplitConfig::default()).unwrap();
    let b = train_test_split(&second, SplitConfig::default()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.train.len() + a.test.len(), first.len());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_unsupported_extension_writes_nothing() {
    let (dataset, _) = Loader::new().load(sample_data()).unwrap();
    let node = chart::class_distribution(&dataset);
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("chart.txt");

    let err = save_chart(&node, &target, 1.0).unwrap_err();
    assert!(matches!(err, EdaError::UnsupportedFormat(_)));
    assert!(err.to_string().contains("Only svg and png formats are supported"));
    assert!(!target.exists());
}

#[test]
fn test_svg_and_png_encodings() {
    let (dataset, _) = Loader::new().load(sample_data()).unwrap();
    let node = chart::boxplot_grid(&dataset);

    let svg = render_to_bytes(&node, ImageFormat::Svg, 1.0).unwrap();
    let text = String::from_utf8(svg).expect("svg should be text");
    assert!(text.contains("<svg"));

    let png = render_to_bytes(&node, ImageFormat::Png, 1.0).unwrap();
    assert!(png.starts_with(PNG_MAGIC));
}

#[test]
fn test_scale_factor_grows_png() {
    let (dataset, _) = Loader::new().load(sample_data()).unwrap();
    let node = chart::class_distribution(&dataset);
    let dir = TempDir::new().unwrap();

    let small = dir.path().join("small.png");
    let large = dir.path().join("large.png");
    save_chart(&node, &small, 1.0).unwrap();
    save_chart(&node, &large, 2.0).unwrap();

    let small = image::open(&small).unwrap();
    let large = image::open(&large).unwrap();
    assert!(large.width() > small.width());
    assert!(large.height() > small.height());
}

#[test]
fn test_save_chart_uppercase_extension() {
    let (dataset, _) = Loader::new().load(sample_data()).unwrap();
    let node = chart::class_distribution(&dataset);
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("chart.SVG");

    save_chart(&node, &target, 1.0).unwrap();
    let text = std::fs::read_to_string(&target).unwrap();
    assert!(text.contains("<svg"));
}
