//! Rendering error mapping.

/// Error returned when a template fails to render.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to render template")]
    Template(#[from] askama::Error),
}
