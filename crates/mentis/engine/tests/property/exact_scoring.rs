//! Property tests: exact scoring agrees with integer arithmetic.

use mentis_engine::{
    HypothesisForm, Mentis, Pair, Scorer, SquareLaw, Verdict, SQUARE_LAW_LABEL,
};
use proptest::prelude::*;

proptest! {
    /// The square law holds exactly when y == x^2.
    #[test]
    fn verdict_matches_integer_square(
        x in -1_000_000i64..1_000_000,
        y in -1_000_000_000_000i64..1_000_000_000_000,
    ) {
        let pair = Pair::new(x, y);
        let hypothesis = SquareLaw.propose(&pair).unwrap();
        let verdict = Scorer::new().test(&hypothesis, &pair);
        prop_assert_eq!(verdict.holds(), x * x == y);
    }

    /// Every true square scores 1.0 through the engine.
    #[test]
    fn true_squares_score_one(x in any::<i32>()) {
        let x = i64::from(x);
        let mut m = Mentis::default();
        m.hypothesize(&[Pair::new(x, x * x)]).unwrap();
        prop_assert_eq!(m.score(SQUARE_LAW_LABEL), Some(1.0));
    }

    /// Off-by-one values never score.
    #[test]
    fn neighbours_of_squares_score_zero(
        x in any::<i32>(),
        delta in prop_oneof![Just(-1i64), Just(1i64)],
    ) {
        let x = i64::from(x);
        let mut m = Mentis::default();
        m.hypothesize(&[Pair::new(x, x * x + delta)]).unwrap();
        prop_assert_eq!(m.score(SQUARE_LAW_LABEL), Some(0.0));
    }

    /// Halves square exactly as doubles.
    #[test]
    fn dyadic_reals_are_exact(k in -10_000i32..10_000) {
        let x = f64::from(k) / 2.0;
        let pair = Pair::new(x, x * x);
        let hypothesis = SquareLaw.propose(&pair).unwrap();
        prop_assert_eq!(Scorer::new().test(&hypothesis, &pair), Verdict::Holds);
    }

    /// Odd multiples of powers of two square exactly across the double range.
    #[test]
    fn scaled_odd_values_square_exactly(e in -500i32..500, m in 1u32..64) {
        let x = f64::from(m * 2 + 1) * 2f64.powi(e);
        let mut engine = Mentis::default();
        let best = engine.hypothesize(&[Pair::new(x, x * x)]).unwrap();
        prop_assert_eq!(best.as_deref(), Some(SQUARE_LAW_LABEL));
        prop_assert_eq!(engine.score(SQUARE_LAW_LABEL), Some(1.0));
    }
}
