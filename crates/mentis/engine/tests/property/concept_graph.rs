//! Property tests: theory building links every pair and never removes anything.

use mentis_engine::{EdgePolicy, Mentis, MentisConfig, Pair, SQUARE_LAW_LABEL};
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_pairs() -> impl Strategy<Value = Vec<Pair>> {
    prop::collection::vec((-20i64..20, -20i64..400), 1..15)
        .prop_map(|raw| raw.into_iter().map(Pair::from).collect())
}

proptest! {
    #[test]
    fn every_pair_is_linked(pairs in arb_pairs()) {
        let mut m = Mentis::default();
        let (label, graph) = m.build_theory(&pairs).unwrap();
        prop_assert_eq!(label.as_deref(), Some(SQUARE_LAW_LABEL));
        for p in &pairs {
            let x_node = format!("{}^2", p.x);
            let y_node = p.y.to_string();
            prop_assert!(graph.contains_edge(&x_node, SQUARE_LAW_LABEL));
            prop_assert!(graph.contains_edge(SQUARE_LAW_LABEL, &y_node));
        }
    }

    #[test]
    fn collapse_counts_distinct_edges(pairs in arb_pairs()) {
        let mut m = Mentis::default();
        m.build_theory(&pairs).unwrap();

        let inbound: HashSet<String> = pairs.iter().map(|p| format!("{}^2", p.x)).collect();
        let outbound: HashSet<String> = pairs.iter().map(|p| p.y.to_string()).collect();
        prop_assert_eq!(m.graph().edge_count(), inbound.len() + outbound.len());
    }

    #[test]
    fn accumulate_counts_every_edge(pairs in arb_pairs(), rounds in 1usize..4) {
        let config = MentisConfig::default().with_edge_policy(EdgePolicy::Accumulate);
        let mut m = Mentis::new(config);
        for _ in 0..rounds {
            m.build_theory(&pairs).unwrap();
        }
        prop_assert_eq!(m.graph().edge_count(), 2 * pairs.len() * rounds);
    }

    #[test]
    fn graph_only_grows(first in arb_pairs(), second in arb_pairs()) {
        let mut m = Mentis::default();
        m.build_theory(&first).unwrap();
        let before = m.graph().snapshot();
        m.build_theory(&second).unwrap();
        m.update(&second).unwrap();
        let after = m.graph().snapshot();
        for node in &before.nodes {
            prop_assert!(after.nodes.contains(node));
        }
        for edge in &before.edges {
            prop_assert!(after.edges.contains(edge));
        }
    }
}
