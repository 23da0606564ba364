//! End-to-end test: build a theory, then refine it with new observations.

use mentis_engine::{Mentis, MentisConfig, Pair, SQUARE_LAW_LABEL};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn data(raw: &[(i64, i64)]) -> Vec<Pair> {
    raw.iter().map(|&p| Pair::from(p)).collect()
}

fn seeded() -> Mentis {
    let mut m = Mentis::new(MentisConfig::default());
    m.build_theory(&data(&[(1, 1), (2, 4)])).unwrap();
    m
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn demo_sequence() {
    let mut m = Mentis::new(MentisConfig::default());

    let (theory, _) = m.build_theory(&data(&[(1, 1), (2, 4)])).unwrap();
    assert_eq!(theory.as_deref(), Some(SQUARE_LAW_LABEL));

    m.update(&data(&[(3, 9)])).unwrap();
    assert_eq!(m.best_hypothesis(), Some(SQUARE_LAW_LABEL));
}

#[test]
fn square_pair_scores_one() {
    for (x, y) in [(0, 0), (1, 1), (-4, 16), (12, 144)] {
        let mut m = Mentis::default();
        let label = m.hypothesize(&[Pair::new(x, y)]).unwrap();
        assert_eq!(label.as_deref(), Some(SQUARE_LAW_LABEL));
        assert_eq!(m.score(SQUARE_LAW_LABEL), Some(1.0));
    }
}

#[test]
fn non_square_pair_scores_zero() {
    for (x, y) in [(1, 2), (-4, -16), (3, 10)] {
        let mut m = Mentis::default();
        m.hypothesize(&[Pair::new(x, y)]).unwrap();
        assert_eq!(m.score(SQUARE_LAW_LABEL), Some(0.0));
    }
}

#[test]
fn batch_score_reflects_last_pair() {
    let mut m = Mentis::default();
    let label = m.hypothesize(&data(&[(1, 1), (2, 4)])).unwrap();
    assert_eq!(label.as_deref(), Some(SQUARE_LAW_LABEL));
    assert_eq!(m.score(SQUARE_LAW_LABEL), Some(1.0));

    m.hypothesize(&data(&[(2, 4), (2, 3)])).unwrap();
    assert_eq!(m.score(SQUARE_LAW_LABEL), Some(0.0));
}

#[test]
fn theory_graph_shape() {
    let m = seeded();
    let graph = m.graph();

    let mut nodes = graph.nodes();
    nodes.sort_unstable();
    let mut expected = vec!["1^2", SQUARE_LAW_LABEL, "1", "2^2", "4"];
    expected.sort_unstable();
    assert_eq!(nodes, expected);

    let edges = graph.edges();
    assert_eq!(edges.len(), 4);
    for edge in [
        ("1^2", SQUARE_LAW_LABEL),
        (SQUARE_LAW_LABEL, "1"),
        ("2^2", SQUARE_LAW_LABEL),
        (SQUARE_LAW_LABEL, "4"),
    ] {
        assert!(edges.contains(&edge), "missing edge {:?}", edge);
    }
}

#[test]
fn update_with_matching_pair_moves_toward_one() {
    let mut m = seeded();
    let report = m.update(&data(&[(3, 9)])).unwrap();
    let u = &report.updates[0];
    assert_eq!(u.reward, 1.0);
    assert!((u.posterior - u.prior - 0.01 * (1.0 - u.prior)).abs() < 1e-12);
    assert_eq!(m.score(SQUARE_LAW_LABEL), Some(u.posterior));
}

#[test]
fn update_with_mismatching_pair_moves_toward_minus_one() {
    let mut m = seeded();
    let report = m.update(&data(&[(3, 10)])).unwrap();
    let u = &report.updates[0];
    assert_eq!(u.reward, -1.0);
    assert!((u.posterior - u.prior - 0.01 * (-1.0 - u.prior)).abs() < 1e-12);
    assert!(m.score(SQUARE_LAW_LABEL).unwrap() < 0.0);
}

#[test]
fn update_batch_applies_each_pair_in_order() {
    let mut m = seeded();
    let report = m.update(&data(&[(3, 10), (4, 16)])).unwrap();
    assert_eq!(report.updates.len(), 2);
    assert_eq!(report.updates[0].reward, -1.0);
    assert_eq!(report.updates[1].reward, 1.0);
    // The second generation step overwrites the first update's result.
    assert_eq!(report.updates[1].prior, 1.0);
    assert_eq!(m.score(SQUARE_LAW_LABEL), Some(1.0));
}

#[test]
fn empty_inputs_are_no_ops() {
    let mut m = seeded();
    let before = m.snapshot();

    assert_eq!(m.hypothesize(&[]).unwrap().as_deref(), Some(SQUARE_LAW_LABEL));
    assert!(m.update(&[]).unwrap().is_empty());
    let (label, graph) = m.build_theory(&[]).unwrap();
    // A non-empty store still names its best label; the graph is untouched.
    assert_eq!(label.as_deref(), Some(SQUARE_LAW_LABEL));
    assert_eq!(graph.snapshot(), before.graph);
    assert_eq!(m.snapshot(), before);

    let mut fresh = Mentis::default();
    assert_eq!(fresh.hypothesize(&[]).unwrap(), None);
    let (label, graph) = fresh.build_theory(&[]).unwrap();
    assert!(label.is_none());
    assert!(graph.is_empty());
}
