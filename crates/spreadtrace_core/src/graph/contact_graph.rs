//! Contact graph: authoritative owner of people and meetings.
//!
//! # Responsibility
//! - Validate every insertion against current graph state.
//! - Expose the adjacency view the propagation engine traverses.
//!
//! # Invariants
//! - Meetings are append-only, so the `MeetingId`s handed to people stay
//!   valid for the graph lifetime.
//! - Failed insertions leave no partial state behind.

use crate::graph::registry::PersonRegistry;
use crate::graph::{GraphError, GraphResult};
use crate::model::meeting::{Meeting, MeetingId};
use crate::model::person::{Person, PersonId};

/// The in-memory meeting graph for one run.
#[derive(Debug, Default)]
pub struct ContactGraph {
    registry: PersonRegistry,
    meetings: Vec<Meeting>,
}

impl ContactGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one person.
    ///
    /// # Errors
    /// Returns `GraphError::DuplicateIdentity` when the id is already taken.
    pub fn add_person(&mut self, person: Person) -> GraphResult<()> {
        self.registry.register(person)
    }

    /// Records one directed meeting between two registered people and links
    /// it onto `from`'s outgoing list.
    ///
    /// # Errors
    /// - `UnknownPerson` when either endpoint is unregistered.
    /// - `DuplicateMeeting` when the ordered pair was already recorded.
    /// - `InvalidMeeting` for non-positive duration or distance.
    pub fn add_meeting(
        &mut self,
        from: PersonId,
        to: PersonId,
        duration_minutes: f64,
        distance_meters: f64,
    ) -> GraphResult<MeetingId> {
        if self.registry.lookup(from).is_none() {
            return Err(GraphError::UnknownPerson(from));
        }
        if self.registry.lookup(to).is_none() {
            return Err(GraphError::UnknownPerson(to));
        }
        if self.meeting_between(from, to).is_some() {
            return Err(GraphError::DuplicateMeeting { from, to });
        }

        let meeting = Meeting::new(from, to, duration_minutes, distance_meters)?;
        let meeting_id = self.meetings.len();
        let origin = self
            .registry
            .lookup_mut(from)
            .ok_or(GraphError::UnknownPerson(from))?;
        origin.push_outgoing(meeting_id);
        self.meetings.push(meeting);
        Ok(meeting_id)
    }

    /// Returns the meeting `from` recorded toward `to`, if any.
    pub fn meeting_between(&self, from: PersonId, to: PersonId) -> Option<&Meeting> {
        let origin = self.registry.lookup(from)?;
        origin
            .outgoing_meetings()
            .iter()
            .filter_map(|&meeting_id| self.meetings.get(meeting_id))
            .find(|meeting| meeting.to == to)
    }

    /// Current risk score for one person.
    ///
    /// # Errors
    /// Returns `GraphError::NotFound` for unregistered ids instead of a
    /// sentinel value.
    pub fn get_risk(&self, id: PersonId) -> GraphResult<f64> {
        self.registry
            .lookup(id)
            .map(Person::risk_score)
            .ok_or(GraphError::NotFound(id))
    }

    /// Number of registered people.
    pub fn people_count(&self) -> usize {
        self.registry.count()
    }

    /// Number of recorded meetings.
    pub fn meeting_count(&self) -> usize {
        self.meetings.len()
    }

    /// Returns one person by id.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.registry.lookup(id)
    }

    /// Iterates people in registration order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.registry.iter()
    }

    /// Resolves a meeting back-reference.
    pub fn meeting(&self, id: MeetingId) -> Option<&Meeting> {
        self.meetings.get(id)
    }

    pub(crate) fn person_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        self.registry.lookup_mut(id)
    }
}
