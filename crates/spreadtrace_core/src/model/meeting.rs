//! Meeting domain model.
//!
//! # Invariants
//! - A meeting is immutable once constructed.
//! - `duration_minutes` and `distance_meters` are strictly positive; the
//!   risk formula divides by the distance.

use crate::model::person::PersonId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Index of a meeting inside the graph's meeting collection.
///
/// People hold these as non-owning back-references; the graph resolves them
/// during traversal and owns the meeting's lifetime.
pub type MeetingId = usize;

/// Validation failures for meeting measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeetingValidationError {
    NonPositiveDuration(f64),
    NonPositiveDistance(f64),
}

impl Display for MeetingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveDuration(value) => {
                write!(f, "meeting duration must be positive minutes, got {value}")
            }
            Self::NonPositiveDistance(value) => {
                write!(f, "meeting distance must be positive meters, got {value}")
            }
        }
    }
}

impl Error for MeetingValidationError {}

/// One directed contact fact between two registered people.
#[derive(Debug, Clone, PartialEq)]
pub struct Meeting {
    /// The person this meeting propagates risk from.
    pub from: PersonId,
    /// The person this meeting propagates risk to.
    pub to: PersonId,
    /// Contact duration in minutes.
    pub duration_minutes: f64,
    /// Contact distance in meters.
    pub distance_meters: f64,
}

impl Meeting {
    /// Builds a meeting, rejecting measurements the risk formula cannot
    /// take.
    ///
    /// # Errors
    /// Returns `MeetingValidationError` for zero, negative or NaN duration
    /// or distance.
    pub fn new(
        from: PersonId,
        to: PersonId,
        duration_minutes: f64,
        distance_meters: f64,
    ) -> Result<Self, MeetingValidationError> {
        if duration_minutes <= 0.0 || duration_minutes.is_nan() {
            return Err(MeetingValidationError::NonPositiveDuration(duration_minutes));
        }
        if distance_meters <= 0.0 || distance_meters.is_nan() {
            return Err(MeetingValidationError::NonPositiveDistance(distance_meters));
        }
        Ok(Self {
            from,
            to,
            duration_minutes,
            distance_meters,
        })
    }
}
