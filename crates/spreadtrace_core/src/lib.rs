//! Contact-tracing core: population registry, meeting graph and single-seed
//! risk propagation.
//! This crate is the single source of truth for graph and scoring invariants.

pub mod config;
pub mod graph;
pub mod logging;
pub mod model;
pub mod report;
pub mod service;

pub use config::{ConfigError, RiskParameters, TierThresholds, TraceConfig};
pub use graph::contact_graph::ContactGraph;
pub use graph::registry::PersonRegistry;
pub use graph::{GraphError, GraphResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::meeting::{Meeting, MeetingId, MeetingValidationError};
pub use model::person::{Person, PersonId};
pub use report::{build_recommendations, RecommendationRow, SortKey, Tier};
pub use service::propagation::{PropagationEngine, PropagationStats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
