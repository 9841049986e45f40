//! End-to-end tests for the snapshot → HTML pipeline.
//!
//! Each test writes a snapshot document to a scratch directory, runs the
//! full pipeline (config, decoding, projection, askama rendering) and
//! inspects the written HTML.

use std::path::{Path, PathBuf};

use visitor_stats::config::Config;
use visitor_stats::pipeline::{self, PipelineError};

/// Scratch directory unique to one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "visitor-stats-{}-{name}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("scratch directory should be creatable");
    dir
}

/// Build a config reading `snapshot` and writing into the same directory.
fn config_for(name: &str, snapshot: &serde_json::Value) -> (Config, PathBuf) {
    let dir = scratch_dir(name);
    let snapshot_path = dir.join("snapshot.json");
    let output_path = dir.join("stats.html");
    std::fs::write(&snapshot_path, snapshot.to_string()).expect("snapshot should be writable");

    let mut config = Config::default();
    config.input.snapshot = snapshot_path;
    config.output.path = Some(output_path.clone());
    (config, output_path)
}

fn run_and_read(config: &Config, output: &Path) -> String {
    pipeline::run(config).expect("pipeline should succeed");
    std::fs::read_to_string(output).expect("output should exist")
}

// ---------------------------------------------------------------------------
// Populated cards
// ---------------------------------------------------------------------------

#[test]
fn should_render_populated_cards_from_snapshot_file() {
    let snapshot = serde_json::json!({
        "durationStats": {"formattedAverage": "12 menit", "formattedMedian": "10 menit"},
        "peakHours": [
            {"hour": "14:00", "visits": 10, "isPeak": true},
            {"hour": "15:00", "visits": 25, "isPeak": true},
            {"hour": "09:00", "visits": 5, "isPeak": false}
        ],
        "totalMonthVisits": 125_000
    });
    let (config, output) = config_for("populated", &snapshot);

    let html = run_and_read(&config, &output);

    assert_eq!(html.matches("class=\"stat-card stat-card--").count(), 3);
    assert!(html.contains("12 menit"));
    assert!(html.contains("Median: 10 menit"));
    assert!(html.contains("15:00"));
    assert!(html.contains("25 pengunjung \u{2022} 2 jam peak"));
    assert!(html.contains("125.000"));
}

#[test]
fn should_render_zero_valued_cards_from_empty_snapshot() {
    let (config, output) = config_for("empty", &serde_json::json!({}));

    let html = run_and_read(&config, &output);

    assert!(html.contains("Median: 0 menit"));
    assert!(html.contains("<span class=\"stat-value\">-</span>"));
    assert!(html.contains("0 pengunjung \u{2022} 0 jam peak"));
    assert!(html.contains("<span class=\"stat-value\">0</span>"));
}

#[test]
fn should_pick_first_of_tied_hours() {
    let snapshot = serde_json::json!({
        "peakHours": [
            {"hour": "A", "visits": 10, "isPeak": true},
            {"hour": "B", "visits": 10, "isPeak": true}
        ]
    });
    let (config, output) = config_for("tie", &snapshot);

    let html = run_and_read(&config, &output);

    assert!(html.contains("<span class=\"stat-value\">A</span>"));
    assert!(!html.contains("<span class=\"stat-value\">B</span>"));
}

// ---------------------------------------------------------------------------
// Loading and page mode
// ---------------------------------------------------------------------------

#[test]
fn should_render_placeholders_when_loading() {
    let snapshot = serde_json::json!({"totalMonthVisits": 125_000});
    let (mut config, output) = config_for("loading", &snapshot);
    config.render.loading = true;

    let html = run_and_read(&config, &output);

    assert_eq!(html.matches("class=\"stat-card-skeleton").count(), 3);
    assert!(!html.contains("125.000"));
}

#[test]
fn should_write_standalone_document() {
    let (mut config, output) = config_for("standalone", &serde_json::json!({}));
    config.output.standalone = true;

    let html = run_and_read(&config, &output);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn should_fail_on_malformed_snapshot() {
    let (config, _) = config_for("malformed", &serde_json::json!({"peakHours": "often"}));

    let result = pipeline::run(&config);

    assert!(matches!(result, Err(PipelineError::Snapshot(_))));
}

#[test]
fn should_fail_when_output_directory_missing() {
    let (mut config, _) = config_for("unwritable", &serde_json::json!({}));
    config.output.path = Some(scratch_dir("unwritable").join("missing").join("stats.html"));

    let result = pipeline::run(&config);

    assert!(matches!(result, Err(PipelineError::Write(_))));
}
