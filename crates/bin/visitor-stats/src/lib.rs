//! # visitor-stats — composition root
//!
//! Wires the domain projection and the HTML adapter behind a one-shot
//! command.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Read the pre-computed statistics snapshot
//! - Project it into the view model and render it as HTML
//! - Write the result to a file or stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on every other crate.
//! It is the wiring layer — no statistics logic belongs here.

pub mod config;
pub mod pipeline;
