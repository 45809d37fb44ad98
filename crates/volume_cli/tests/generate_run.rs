//! End-to-end tests for the generator run.

use clap::Parser;
use std::path::{Path, PathBuf};
use volume_cli::{generate, run, AppConfig, Cli, CliError};
use volume_core::SeriesError;

/// Sample configuration shipped at the workspace root
fn sample_config() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    Path::new(&manifest_dir).join("../../config/volume.toml")
}

fn read_rows(path: &Path) -> Vec<(String, u64)> {
    let mut reader = csv::Reader::from_path(path).expect("Should open output CSV");
    let headers = reader.headers().expect("Should have headers").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["date", "volume"]);

    reader
        .records()
        .map(|r| {
            let record = r.expect("Each record should be valid");
            (
                record[0].to_string(),
                record[1].parse().expect("volume should be a non-negative integer"),
            )
        })
        .collect()
}

#[test]
fn test_sample_config_matches_defaults() {
    let config = AppConfig::load(&sample_config()).expect("Should load sample config");
    let defaults = AppConfig::default();

    assert_eq!(config.output, defaults.output);
    assert_eq!(config.date_range().unwrap(), defaults.date_range().unwrap());
    assert_eq!(
        config.model_parameters().unwrap(),
        defaults.model_parameters().unwrap()
    );
}

#[test]
fn test_run_with_sample_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("volume.csv");
    let sample = sample_config();

    let cli = Cli::parse_from([
        "volume-gen",
        "--config",
        sample.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--seed",
        "42",
    ]);
    let report = run(&cli).unwrap();

    assert_eq!(report.seed, 42);
    assert_eq!(report.written.rows, 1096);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 1096);
    assert_eq!(rows.first().unwrap().0, "2022-01-01");
    assert_eq!(rows.last().unwrap().0, "2024-12-31");
    assert_eq!(report.summary.unwrap().days, 1096);
}

#[test]
fn test_seeded_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    for path in [&first, &second] {
        let mut config = AppConfig::default();
        config.output = path.clone();
        config.seed = Some(7);
        generate(&config).unwrap();
    }

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn test_reference_week_without_noise() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("week.csv");

    let mut config = AppConfig::from_toml(
        r#"
        [range]
        start = "2022-01-01"
        end = "2022-01-07"

        [model]
        trend_slope = 0.0
        yearly_amplitude = 0.0
        noise_std_dev = 0.0
        "#,
    )
    .unwrap();
    config.output = output.clone();
    generate(&config).unwrap();

    let volumes: Vec<u64> = read_rows(&output).into_iter().map(|(_, v)| v).collect();
    assert_eq!(volumes, vec![80, 85, 120, 115, 105, 90, 110]);
}

#[test]
fn test_largest_base_volume_summarises() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("huge.csv");

    let mut config = AppConfig::from_toml(
        r#"
        [range]
        start = "2022-01-01"
        end = "2022-01-03"

        [model]
        base_volume = 9223372036854775807
        noise_std_dev = 0.0
        "#,
    )
    .unwrap();
    config.output = output.clone();
    let report = generate(&config).unwrap();

    let summary = report.summary.unwrap();
    assert_eq!(summary.days, 3);
    assert!(summary.total > u128::from(u64::MAX));
    assert_eq!(read_rows(&output).len(), 3);
}

#[test]
fn test_components_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("volume.csv");
    let components = dir.path().join("components.csv");

    let cli = Cli::parse_from([
        "volume-gen",
        "--output",
        output.to_str().unwrap(),
        "--components",
        components.to_str().unwrap(),
        "--start",
        "2022-06-01",
        "--end",
        "2022-06-30",
    ]);
    let report = run(&cli).unwrap();
    assert_eq!(report.components.as_ref().unwrap().rows, 30);

    let mut reader = csv::Reader::from_path(&components).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["date", "base", "trend", "yearly", "weekly", "noise", "volume"]
    );

    // volumes in both files agree
    let series: Vec<String> = read_rows(&output).into_iter().map(|(_, v)| v.to_string()).collect();
    let breakdown: Vec<String> = reader
        .records()
        .map(|r| r.unwrap()[6].to_string())
        .collect();
    assert_eq!(series, breakdown);
}

#[test]
fn test_reversed_range_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("volume.csv");

    let cli = Cli::parse_from([
        "volume-gen",
        "--output",
        output.to_str().unwrap(),
        "--start",
        "2022-02-01",
        "--end",
        "2022-01-01",
    ]);
    let result = run(&cli);

    assert!(matches!(
        result,
        Err(CliError::Series(SeriesError::InvalidDateRange { .. }))
    ));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_destination() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("no_such_dir").join("volume.csv");

    let mut config = AppConfig::default();
    config.output = output.clone();
    let result = generate(&config);

    assert!(matches!(
        result,
        Err(CliError::Series(SeriesError::Io { .. }))
    ));
    assert!(!output.exists());
}

#[test]
fn test_missing_config_file() {
    let cli = Cli::parse_from(["volume-gen", "--config", "definitely/missing.toml"]);
    assert!(matches!(run(&cli), Err(CliError::Config(_))));
}
