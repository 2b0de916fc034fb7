//! Property tests over generated pool networks

use proptest::prelude::*;
use route_explorer::*;
use std::collections::HashSet;

const ASSETS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn pool_strategy() -> impl Strategy<Value = Pool> {
    (0..ASSETS.len(), 1.0f64..1e9, 0..ASSETS.len(), 1.0f64..1e9)
        .prop_filter("distinct assets", |(a, _, b, _)| a != b)
        .prop_map(|(a, ra, b, rb)| Pool::new(ASSETS[a], ra, ASSETS[b], rb))
}

/// Simple paths in the undirected multigraph, counted independently of the explorer
fn count_simple_paths(pools: &[Pool], node: &str, to: &str, visited: &mut Vec<String>) -> usize {
    if node == to {
        return 1;
    }
    visited.push(node.to_string());
    let mut count = 0;
    for pool in pools {
        let next = if pool.token_a.symbol == node {
            &pool.token_b.symbol
        } else if pool.token_b.symbol == node {
            &pool.token_a.symbol
        } else {
            continue;
        };
        if !visited.contains(next) {
            count += count_simple_paths(pools, next, to, visited);
        }
    }
    visited.pop();
    count
}

proptest! {
    #[test]
    fn prop_routes_are_simple_and_end_at_destination(
        pools in prop::collection::vec(pool_strategy(), 0..10),
        amount in 0.001f64..1e6,
    ) {
        let exchange = Exchange::new(&pools);
        let routes = exchange.find_all_paths("A", amount, "F").unwrap();

        for route in &routes {
            let unique: HashSet<&String> = route.route.iter().collect();
            prop_assert_eq!(unique.len(), route.route.len());
            prop_assert!(!route.route.iter().any(|s| s == "A"));
            prop_assert_eq!(route.destination(), Some("F"));
            prop_assert!(route.rate.is_finite() && route.rate > 0.0);
        }
    }

    #[test]
    fn prop_route_count_matches_simple_paths(
        pools in prop::collection::vec(pool_strategy(), 0..10),
    ) {
        let exchange = Exchange::new(&pools);
        let routes = exchange.find_all_paths("A", 1.0, "F").unwrap();

        let expected = count_simple_paths(&pools, "A", "F", &mut Vec::new());
        prop_assert_eq!(routes.len(), expected);
    }
}
