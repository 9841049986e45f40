//! Snapshot → view model → HTML.

use std::io::Write;
use std::path::{Path, PathBuf};

use visitor_stats_adapter_html_askama::{RenderError, render, render_document};
use visitor_stats_domain::error::VisitorStatsError;
use visitor_stats_domain::input::VisitorStatsInput;
use visitor_stats_domain::view::VisitorStatsView;

use crate::config::Config;

/// Errors raised while producing the rendered output.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to read snapshot {}", .path.display())]
    ReadSnapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write output")]
    Write(#[source] std::io::Error),
    #[error(transparent)]
    Snapshot(#[from] VisitorStatsError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Read and decode the snapshot document at `path`.
///
/// # Errors
///
/// Returns [`PipelineError::ReadSnapshot`] if the file cannot be read and
/// [`PipelineError::Snapshot`] if it is not a valid snapshot.
pub fn read_snapshot(path: &Path) -> Result<VisitorStatsInput, PipelineError> {
    let document = std::fs::read_to_string(path).map_err(|source| PipelineError::ReadSnapshot {
        path: path.to_path_buf(),
        source,
    })?;
    let input = VisitorStatsInput::from_json(&document)?;
    tracing::debug!(
        path = %path.display(),
        hour_buckets = input.hour_buckets().len(),
        has_duration = input.duration_stats.is_some(),
        has_month_total = input.total_month_visits.is_some(),
        "snapshot decoded"
    );
    Ok(input)
}

/// Render `input` with the configured loading flag and page mode.
///
/// # Errors
///
/// Returns [`PipelineError::Render`] if the template fails to render.
pub fn render_input(input: &VisitorStatsInput, config: &Config) -> Result<String, PipelineError> {
    let view = VisitorStatsView::project(input, config.render.loading);
    let html = if config.output.standalone {
        render_document(&view)?
    } else {
        render(&view)?
    };
    Ok(html)
}

/// Produce the HTML for the configured snapshot.
///
/// While `render.loading` is set the snapshot is not read at all: the
/// placeholders do not depend on it and it may not exist yet.
///
/// # Errors
///
/// Propagates snapshot and render failures.
pub fn produce(config: &Config) -> Result<String, PipelineError> {
    let input = if config.render.loading {
        tracing::debug!("loading flag set, skipping snapshot");
        VisitorStatsInput::default()
    } else {
        read_snapshot(&config.input.snapshot)?
    };
    render_input(&input, config)
}

/// Produce the HTML and write it to the configured destination.
///
/// # Errors
///
/// Propagates snapshot, render and write failures.
pub fn run(config: &Config) -> Result<(), PipelineError> {
    let html = produce(config)?;

    match &config.output.path {
        Some(path) => {
            std::fs::write(path, &html).map_err(PipelineError::Write)?;
            tracing::info!(path = %path.display(), bytes = html.len(), "visitor stats written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(PipelineError::Write)?;
            tracing::info!(bytes = html.len(), "visitor stats written to stdout");
        }
    }

    Ok(())
}
