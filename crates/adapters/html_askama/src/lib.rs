//! # visitor-stats-adapter-html-askama
//!
//! Server-side rendered HTML for the visitor stats cards (no JavaScript).
//!
//! ## Responsibilities
//! - Render a [`VisitorStatsView`](visitor_stats_domain::view::VisitorStatsView)
//!   as an HTML fragment (grid of three cards or three skeletons)
//! - Wrap the fragment in a standalone page with the stylesheet inlined
//!
//! ## Dependency rule
//! Depends on `visitor-stats-domain` only. Never computes statistics itself.

pub mod error;
pub mod page;

pub use error::RenderError;
pub use page::{render, render_document};
