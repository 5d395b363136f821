use spreadtrace_core::{ContactGraph, Person, PropagationEngine, RiskParameters};

const EPS: f64 = 1e-12;

fn engine() -> PropagationEngine {
    PropagationEngine::new(RiskParameters::default())
}

/// Score factor one meeting contributes under the default calibration
/// (`min_distance = 1.0`, `max_duration = 45.0`).
fn meeting_factor(duration: f64, distance: f64) -> f64 {
    (duration * 1.0) / (distance * 45.0)
}

fn graph_with_people(specs: &[(u64, &str, u32, bool)]) -> ContactGraph {
    let mut graph = ContactGraph::new();
    for &(id, name, age, is_sick) in specs {
        graph
            .add_person(Person::new(id, name, age, is_sick))
            .expect("registration should succeed");
    }
    graph
}

#[test]
fn no_infected_seed_is_a_noop() {
    let mut graph = graph_with_people(&[(1, "ada", 36, false), (2, "grace", 45, false)]);
    graph
        .add_meeting(1, 2, 10.0, 1.0)
        .expect("meeting should be recorded");

    let stats = engine().propagate(&mut graph);

    assert_eq!(stats.seed, None);
    assert_eq!(stats.edges_traversed, 0);
    assert_eq!(graph.get_risk(1).expect("registered id"), 0.0);
    assert_eq!(graph.get_risk(2).expect("registered id"), 0.0);
}

#[test]
fn linear_chain_uses_live_intermediate_scores() {
    let mut graph = graph_with_people(&[
        (1, "dana", 40, true),
        (2, "omri", 30, false),
        (3, "noa", 30, false),
    ]);
    graph
        .add_meeting(1, 2, 10.0, 1.0)
        .expect("meeting 1 -> 2 should be recorded");
    graph
        .add_meeting(2, 3, 10.0, 1.0)
        .expect("meeting 2 -> 3 should be recorded");

    let stats = engine().propagate(&mut graph);
    assert_eq!(stats.seed, Some(1));
    assert!(!stats.depth_truncated);
    assert_eq!(stats.edges_traversed, 2);

    let expected_b = 1.0 * meeting_factor(10.0, 1.0);
    let risk_b = graph.get_risk(2).expect("registered id");
    assert!((risk_b - expected_b).abs() < EPS);

    // C is scored from B's freshly written value, not from the seed.
    let expected_c = expected_b * meeting_factor(10.0, 1.0);
    let risk_c = graph.get_risk(3).expect("registered id");
    assert!((risk_c - expected_c).abs() < EPS);
}

#[test]
fn age_bonus_applies_strictly_above_threshold() {
    let mut graph = graph_with_people(&[
        (1, "dana", 40, true),
        (2, "saul", 56, false),
        (3, "lior", 55, false),
    ]);
    graph
        .add_meeting(1, 2, 10.0, 1.0)
        .expect("meeting 1 -> 2 should be recorded");
    graph
        .add_meeting(1, 3, 10.0, 1.0)
        .expect("meeting 1 -> 3 should be recorded");

    engine().propagate(&mut graph);

    let base = meeting_factor(10.0, 1.0);
    let risk_older = graph.get_risk(2).expect("registered id");
    assert!((risk_older - (base + 0.08)).abs() < EPS);

    // Age 55 sits exactly at the threshold and gets no bonus.
    let risk_at_threshold = graph.get_risk(3).expect("registered id");
    assert!((risk_at_threshold - base).abs() < EPS);
}

#[test]
fn scores_clamp_at_exactly_one() {
    let mut graph = graph_with_people(&[(1, "dana", 40, true), (2, "omri", 30, false)]);
    graph
        .add_meeting(1, 2, 500.0, 1.0)
        .expect("meeting should be recorded");

    engine().propagate(&mut graph);

    assert_eq!(graph.get_risk(2).expect("registered id"), 1.0);
}

#[test]
fn unreachable_people_keep_initial_scores() {
    let mut graph = graph_with_people(&[
        (1, "dana", 40, true),
        (2, "omri", 30, false),
        (3, "isolated", 30, false),
    ]);
    graph
        .add_meeting(1, 2, 10.0, 1.0)
        .expect("meeting should be recorded");

    engine().propagate(&mut graph);

    assert!(graph.get_risk(2).expect("registered id") > 0.0);
    assert_eq!(graph.get_risk(3).expect("registered id"), 0.0);
}

#[test]
fn only_first_seed_in_registration_order_propagates() {
    // Two sick people; only the first (id 2 by registration order) may walk.
    let mut graph = graph_with_people(&[
        (1, "healthy", 30, false),
        (2, "first-sick", 40, true),
        (3, "second-sick", 40, true),
        (4, "contact-of-second", 30, false),
    ]);
    graph
        .add_meeting(2, 1, 10.0, 1.0)
        .expect("meeting 2 -> 1 should be recorded");
    graph
        .add_meeting(3, 4, 10.0, 1.0)
        .expect("meeting 3 -> 4 should be recorded");

    let stats = engine().propagate(&mut graph);

    assert_eq!(stats.seed, Some(2));
    assert!(graph.get_risk(1).expect("registered id") > 0.0);
    // The second seed keeps its own flag-derived score but never walks.
    assert_eq!(graph.get_risk(3).expect("registered id"), 1.0);
    assert_eq!(graph.get_risk(4).expect("registered id"), 0.0);
}

#[test]
fn later_paths_overwrite_earlier_scores() {
    // A's meetings in insertion order: direct A -> B, then A -> C with a
    // follow-on C -> B. Depth-first order scores B twice; the C path runs
    // last and wins.
    let mut graph = graph_with_people(&[
        (1, "dana", 40, true),
        (2, "omri", 30, false),
        (3, "noa", 30, false),
    ]);
    graph
        .add_meeting(1, 2, 40.0, 1.0)
        .expect("meeting 1 -> 2 should be recorded");
    graph
        .add_meeting(1, 3, 10.0, 1.0)
        .expect("meeting 1 -> 3 should be recorded");
    graph
        .add_meeting(3, 2, 10.0, 1.0)
        .expect("meeting 3 -> 2 should be recorded");

    let stats = engine().propagate(&mut graph);
    assert_eq!(stats.edges_traversed, 3);

    let risk_c = meeting_factor(10.0, 1.0);
    let expected_b = risk_c * meeting_factor(10.0, 1.0);
    let risk_b = graph.get_risk(2).expect("registered id");
    assert!((risk_b - expected_b).abs() < EPS);
}

#[test]
fn two_person_cycle_terminates_and_reports_truncation() {
    let mut graph = graph_with_people(&[(1, "dana", 40, true), (2, "omri", 30, false)]);
    graph
        .add_meeting(1, 2, 10.0, 1.0)
        .expect("meeting 1 -> 2 should be recorded");
    graph
        .add_meeting(2, 1, 10.0, 1.0)
        .expect("meeting 2 -> 1 should be recorded");

    let stats = engine().propagate(&mut graph);

    assert!(stats.depth_truncated);
    assert!(stats.edges_traversed >= 2);
    let risk_a = graph.get_risk(1).expect("registered id");
    let risk_b = graph.get_risk(2).expect("registered id");
    assert!((0.0..=1.0).contains(&risk_a));
    assert!((0.0..=1.0).contains(&risk_b));
}

#[test]
fn custom_parameters_drive_the_formula() {
    let params = RiskParameters {
        min_distance: 2.0,
        max_duration: 60.0,
        age_threshold: 30,
        age_risk_bonus: 0.5,
    };
    let mut graph = graph_with_people(&[(1, "dana", 40, true), (2, "saul", 31, false)]);
    graph
        .add_meeting(1, 2, 30.0, 4.0)
        .expect("meeting should be recorded");

    PropagationEngine::new(params).propagate(&mut graph);

    // 1.0 * (30 * 2) / (4 * 60) = 0.25, plus the 0.5 age bonus.
    let risk = graph.get_risk(2).expect("registered id");
    assert!((risk - 0.75).abs() < EPS);
}
