//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical record for one individual in the population.
//! - Provide the orderings used by report sorting.
//!
//! # Invariants
//! - `id` is stable and never reused for another person.
//! - `risk_score` stays in `[0.0, 1.0]`; only the propagation engine writes
//!   it after construction.
//! - `outgoing` holds graph-owned meeting indexes in insertion order and is
//!   only appended to by the graph.

use crate::model::meeting::MeetingId;
use std::cmp::Ordering;

/// Stable identifier for every person in a registry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = u64;

/// Canonical record for one individual.
///
/// Identity, name, age and the initial infection flag are fixed at load
/// time; the risk score is the only state that changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Stable numeric ID used for lookup, meeting endpoints and reporting.
    pub id: PersonId,
    /// Display name as it appears in the input record.
    pub name: String,
    /// Age in whole years.
    pub age: u32,
    /// Whether this person was flagged infected at load time.
    pub is_sick: bool,
    risk_score: f64,
    outgoing: Vec<MeetingId>,
}

impl Person {
    /// Creates a person with the initial risk implied by the sick flag:
    /// `1.0` when flagged infected, `0.0` otherwise.
    pub fn new(id: PersonId, name: impl Into<String>, age: u32, is_sick: bool) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            is_sick,
            risk_score: if is_sick { 1.0 } else { 0.0 },
            outgoing: Vec::new(),
        }
    }

    /// Current estimated infection likelihood in `[0, 1]`.
    pub fn risk_score(&self) -> f64 {
        self.risk_score
    }

    /// Meetings where this person is the `from` participant, oldest first.
    pub fn outgoing_meetings(&self) -> &[MeetingId] {
        &self.outgoing
    }

    pub(crate) fn set_risk_score(&mut self, score: f64) {
        self.risk_score = score;
    }

    pub(crate) fn push_outgoing(&mut self, meeting: MeetingId) {
        self.outgoing.push(meeting);
    }

    /// Orders by id, ascending.
    pub fn by_id(a: &Person, b: &Person) -> Ordering {
        a.id.cmp(&b.id)
    }

    /// Orders by display name, ascending.
    pub fn by_name(a: &Person, b: &Person) -> Ordering {
        a.name.cmp(&b.name)
    }

    /// Orders by age, oldest first.
    pub fn by_age(a: &Person, b: &Person) -> Ordering {
        b.age.cmp(&a.age)
    }

    /// Orders by risk score, highest first.
    pub fn by_risk(a: &Person, b: &Person) -> Ordering {
        b.risk_score
            .partial_cmp(&a.risk_score)
            .unwrap_or(Ordering::Equal)
    }
}
