//! # visitor-stats-domain
//!
//! Pure model behind the visitor statistics cards of the analytics dashboard.
//!
//! ## Responsibilities
//! - Define the **inputs** supplied by the aggregation layer (duration
//!   statistics, hourly visit buckets, monthly total)
//! - Derive the **peak hour** and the number of flagged peak hours
//! - Format visit counts with Indonesian digit grouping
//! - Project everything into a framework-neutral **view model**
//!   ([`view::VisitorStatsView`]) that every renderer consumes
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import a UI framework, a template engine, or IO crates.
//! Renderers live in the adapter crates.

pub mod error;

pub mod card;
pub mod duration;
pub mod input;
pub mod number;
pub mod traffic;
pub mod view;
