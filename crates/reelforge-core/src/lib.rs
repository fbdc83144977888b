//! Core domain model for ReelForge.
//!
//! Owns the record types shown on every screen, the immutable startup
//! catalog, the search/filter engine, the simulated content generator, and
//! the metric formatting helpers shared by the TUI.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod generator;
pub mod metrics;
pub mod types;

pub use catalog::Catalog;
pub use error::CoreError;
pub use filter::{Query, Searchable, TagFilter, filter_records, matches};
pub use generator::{GeneratorSettings, draw, generate};
pub use types::{
    ContentKind, ContentStyle, DailyStat, Project, ProjectStatus, StatCard, Template,
    TemplateCategory, TopVideo, TypeShare, VideoSummary,
};
