//! Contact graph layer: person registry and the meeting graph.
//!
//! # Responsibility
//! - Own every `Person` and `Meeting` record for a run.
//! - Enforce referential integrity before any meeting is stored.
//!
//! # Invariants
//! - Person ids are unique within one registry.
//! - At most one meeting exists per ordered `(from, to)` pair.
//! - Meetings only reference people that are already registered.

pub mod contact_graph;
pub mod registry;

use crate::model::meeting::MeetingValidationError;
use crate::model::person::PersonId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph construction and lookup errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A person with this id is already registered.
    DuplicateIdentity(PersonId),
    /// A meeting endpoint is not in the registry.
    UnknownPerson(PersonId),
    /// The ordered `(from, to)` pair was already recorded.
    DuplicateMeeting { from: PersonId, to: PersonId },
    /// Risk lookup for an id that was never registered.
    NotFound(PersonId),
    /// Meeting measurements the risk formula cannot take.
    InvalidMeeting(MeetingValidationError),
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateIdentity(id) => write!(f, "person id already registered: {id}"),
            Self::UnknownPerson(id) => write!(f, "meeting references unknown person: {id}"),
            Self::DuplicateMeeting { from, to } => {
                write!(f, "meeting already recorded: {from} -> {to}")
            }
            Self::NotFound(id) => write!(f, "person not found: {id}"),
            Self::InvalidMeeting(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GraphError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidMeeting(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MeetingValidationError> for GraphError {
    fn from(value: MeetingValidationError) -> Self {
        Self::InvalidMeeting(value)
    }
}
