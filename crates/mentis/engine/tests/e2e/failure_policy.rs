//! End-to-end test: evaluation failures are skipped by default and surfaced
//! under the abort policy.

use mentis_engine::{
    FailurePolicy, Mentis, MentisConfig, MentisError, Number, Pair, Verdict, SQUARE_LAW_LABEL,
};

fn nan_y() -> Pair {
    Pair::new(2, f64::NAN)
}

fn infinite_x() -> Pair {
    Pair::new(f64::INFINITY, 4)
}

#[test]
fn skip_policy_never_errors() {
    let mut m = Mentis::default();
    let batch = [Pair::new(1, 1), nan_y(), infinite_x(), Pair::new(3, 9)];

    assert!(m.hypothesize(&batch).is_ok());
    assert!(m.update(&batch).is_ok());
    assert!(m.build_theory(&batch).is_ok());
}

#[test]
fn skip_policy_distinguishes_skipped_from_false() {
    let mut m = Mentis::default();
    let report = m
        .hypothesize_report(&[nan_y(), Pair::new(3, 10), infinite_x()])
        .unwrap();

    assert!(report.outcomes[0].was_skipped());
    assert!(matches!(report.outcomes[0].verdict, Verdict::Unevaluable(_)));

    assert!(!report.outcomes[1].was_skipped());
    assert_eq!(report.outcomes[1].verdict, Verdict::Fails);

    // A failed test still records 0.0 for the label.
    assert!(!report.outcomes[2].was_skipped());
    assert!(matches!(report.outcomes[2].verdict, Verdict::Unevaluable(_)));
    assert_eq!(m.score(SQUARE_LAW_LABEL), Some(0.0));
}

#[test]
fn skipped_pair_leaves_store_untouched() {
    let mut m = Mentis::default();
    m.hypothesize(&[Pair::new(2, 4)]).unwrap();
    m.hypothesize(&[nan_y()]).unwrap();
    assert_eq!(m.score(SQUARE_LAW_LABEL), Some(1.0));
}

#[test]
fn abort_policy_stops_update_batch() {
    let config = MentisConfig::default().with_failure_policy(FailurePolicy::Abort);
    let mut m = Mentis::new(config);

    let err = m
        .update(&[Pair::new(3, 9), infinite_x(), Pair::new(4, 16)])
        .unwrap_err();
    match err {
        MentisError::Evaluation { pair, .. } => assert_eq!(pair.y, Number::Integer(4)),
        other => panic!("unexpected error: {}", other),
    }
    // The first pair's update stands.
    assert_eq!(m.score(SQUARE_LAW_LABEL), Some(1.0));
}

#[test]
fn abort_policy_leaves_graph_unchanged_on_failure() {
    let config = MentisConfig::default().with_failure_policy(FailurePolicy::Abort);
    let mut m = Mentis::new(config);

    assert!(m.build_theory(&[Pair::new(1, 1), nan_y()]).is_err());
    assert!(m.graph().is_empty());
}
