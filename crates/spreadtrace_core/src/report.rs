//! Tier classification and report-row assembly.
//!
//! # Responsibility
//! - Classify final risk scores into the three treatment tiers.
//! - Assemble per-person rows in a deterministic order for rendering.
//!
//! The rendering itself (templates, output files) lives with the CLI; this
//! module stays free of I/O.

use crate::config::TierThresholds;
use crate::graph::contact_graph::ContactGraph;
use crate::model::person::{Person, PersonId};
use serde::Serialize;

/// Treatment recommendation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    MedicalSupervision,
    RegularQuarantine,
    Clean,
}

impl Tier {
    /// Buckets one score. Both comparisons are strict: a score exactly at a
    /// threshold falls into the lower tier.
    pub fn classify(score: f64, thresholds: &TierThresholds) -> Tier {
        if score > thresholds.medical_supervision {
            Tier::MedicalSupervision
        } else if score > thresholds.regular_quarantine {
            Tier::RegularQuarantine
        } else {
            Tier::Clean
        }
    }
}

/// Sort orders offered by the report surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    Age,
    Risk,
}

/// One input row for the rendered report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRow {
    pub name: String,
    pub id: PersonId,
    pub age: u32,
    pub risk_score: f64,
    pub tier: Tier,
}

/// Builds report rows for every registered person.
///
/// Rows follow registration order unless a sort key is given; sorts are
/// stable, so ties keep registration order.
pub fn build_recommendations(
    graph: &ContactGraph,
    thresholds: &TierThresholds,
    sort: Option<SortKey>,
) -> Vec<RecommendationRow> {
    let mut people: Vec<&Person> = graph.people().collect();
    if let Some(key) = sort {
        let compare = match key {
            SortKey::Id => Person::by_id,
            SortKey::Name => Person::by_name,
            SortKey::Age => Person::by_age,
            SortKey::Risk => Person::by_risk,
        };
        people.sort_by(|a, b| compare(a, b));
    }

    people
        .into_iter()
        .map(|person| RecommendationRow {
            name: person.name.clone(),
            id: person.id,
            age: person.age,
            risk_score: person.risk_score(),
            tier: Tier::classify(person.risk_score(), thresholds),
        })
        .collect()
}
