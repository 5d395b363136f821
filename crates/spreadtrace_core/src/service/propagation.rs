//! Risk propagation over the contact graph.
//!
//! # Responsibility
//! - Walk outgoing meetings depth-first from the first infected person.
//! - Recompute each visited person's risk from live upstream scores.
//!
//! # Invariants
//! - Scores are clamped to `1.0` before they are stored.
//! - Traversal follows meeting insertion order at every person; when
//!   several paths reach a person, the last write along the walk wins.
//! - A chain never exceeds `people_count()` edges, so cyclic input
//!   terminates instead of recursing forever. An acyclic graph cannot
//!   produce a chain that long, so the cap never changes its scores.

use crate::config::RiskParameters;
use crate::graph::contact_graph::ContactGraph;
use crate::model::meeting::MeetingId;
use crate::model::person::PersonId;
use log::{info, warn};

/// Outcome summary of one propagation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropagationStats {
    /// The seed the walk started from; `None` when nobody is sick.
    pub seed: Option<PersonId>,
    /// Number of meeting edges traversed, revisits included.
    pub edges_traversed: usize,
    /// True when the chain-depth cap cut the walk short (cyclic input).
    pub depth_truncated: bool,
}

/// Depth-first, single-seed risk propagation.
///
/// Only the first sick person in registration order seeds the walk; later
/// sick people keep their initial score unless some chain reaches them.
pub struct PropagationEngine {
    params: RiskParameters,
}

impl PropagationEngine {
    pub fn new(params: RiskParameters) -> Self {
        Self { params }
    }

    /// Propagates risk scores through the graph.
    ///
    /// Never fails: with no sick person registered this is a no-op and
    /// every score keeps its initial value.
    pub fn propagate(&self, graph: &mut ContactGraph) -> PropagationStats {
        let seed = graph.people().find(|person| person.is_sick).map(|p| p.id);
        let Some(seed) = seed else {
            info!("event=propagation_skipped reason=no_infected_seed");
            return PropagationStats {
                seed: None,
                edges_traversed: 0,
                depth_truncated: false,
            };
        };

        info!(
            "event=propagation_start seed={seed} people={} meetings={}",
            graph.people_count(),
            graph.meeting_count()
        );

        let max_chain = graph.people_count();
        let mut stack: Vec<(MeetingId, usize)> = Vec::new();
        let mut edges_traversed = 0usize;
        let mut depth_truncated = false;

        expand_from(graph, seed, 0, max_chain, &mut stack, &mut depth_truncated);

        while let Some((meeting_id, depth)) = stack.pop() {
            let Some(meeting) = graph.meeting(meeting_id) else {
                continue;
            };
            let to = meeting.to;
            let duration = meeting.duration_minutes;
            let distance = meeting.distance_meters;
            let Ok(upstream) = graph.get_risk(meeting.from) else {
                continue;
            };

            let Some(target) = graph.person_mut(to) else {
                continue;
            };
            let score = self.contact_risk(upstream, duration, distance, target.age);
            target.set_risk_score(score);
            edges_traversed += 1;

            expand_from(
                graph,
                to,
                depth + 1,
                max_chain,
                &mut stack,
                &mut depth_truncated,
            );
        }

        if depth_truncated {
            warn!(
                "event=propagation_truncated seed={seed} max_chain={max_chain} \
                 reason=cycle_in_meeting_log"
            );
        }
        info!("event=propagation_done seed={seed} edges={edges_traversed}");

        PropagationStats {
            seed: Some(seed),
            edges_traversed,
            depth_truncated,
        }
    }

    /// Scores one contact from the upstream person's current risk.
    fn contact_risk(&self, upstream: f64, duration: f64, distance: f64, age: u32) -> f64 {
        let mut score =
            upstream * (duration * self.params.min_distance) / (distance * self.params.max_duration);
        if age > self.params.age_threshold {
            score += self.params.age_risk_bonus;
        }
        if score > 1.0 {
            score = 1.0;
        }
        score
    }
}

/// Pushes `person`'s outgoing meetings for traversal at `depth`, reversed so
/// the stack pops them in insertion order.
///
/// Refuses to push past the chain cap and flags truncation when that
/// actually drops edges.
fn expand_from(
    graph: &ContactGraph,
    person: PersonId,
    depth: usize,
    max_chain: usize,
    stack: &mut Vec<(MeetingId, usize)>,
    truncated: &mut bool,
) {
    let Some(origin) = graph.person(person) else {
        return;
    };
    if depth >= max_chain {
        if !origin.outgoing_meetings().is_empty() {
            *truncated = true;
        }
        return;
    }
    for &meeting_id in origin.outgoing_meetings().iter().rev() {
        stack.push((meeting_id, depth));
    }
}
