//! Integration tests for the route explorer

use route_explorer::*;
use std::collections::HashSet;

fn sample_pools() -> Vec<Pool> {
    vec![
        Pool::new("VND", 1_000_000.0, "AUD", 2_000_000.0),
        Pool::new("AUD", 2_000_000.0, "AUF", 3_000_000.0),
        Pool::new("AUF", 1_000_000.0, "AUG", 4_000_000.0),
        Pool::new("AUG", 4_000_000.0, "AUH", 2_000_000.0),
        Pool::new("AUH", 2_000_000.0, "VND", 5_000_000.0),
        Pool::new("VND", 5_000_000.0, "AUJ", 2_000_000.0),
        Pool::new("AUJ", 5_000_000.0, "USD", 20_000_000.0),
        Pool::new("AUH", 1_000_000.0, "AUJ", 6_000_000.0),
        Pool::new("AUJ", 3_000_000.0, "AUK", 2_000_000.0),
        Pool::new("AUK", 1_000_000.0, "USD", 20_000_000.0),
    ]
}

fn symbols(result: &RouteAndRate) -> Vec<&str> {
    result.route.iter().map(String::as_str).collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        ((actual - expected) / expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_sample_network_routes() {
    let exchange = Exchange::new(&sample_pools());
    let routes = exchange
        .find_all_paths("VND", 5.0, "USD")
        .expect("Failed to search routes");

    let found: Vec<Vec<&str>> = routes.iter().map(symbols).collect();
    assert_eq!(
        found,
        vec![
            vec!["AUD", "AUF", "AUG", "AUH", "AUJ", "USD"],
            vec!["AUD", "AUF", "AUG", "AUH", "AUJ", "AUK", "USD"],
            vec!["AUH", "AUJ", "USD"],
            vec!["AUH", "AUJ", "AUK", "USD"],
            vec!["AUJ", "USD"],
            vec!["AUJ", "AUK", "USD"],
        ]
    );

    let golden = [
        143.9847376178125,
        479.8800299925018,
        9.599948160279935,
        31.99952000719989,
        1.5999977600031356,
        5.333317333381332,
    ];
    for (route, expected) in routes.iter().zip(golden) {
        assert_close(route.rate, expected);
        assert_close(route.amount_out, expected * 5.0);
    }
}

#[test]
fn test_sample_network_long_route_composes_each_hop() {
    let exchange = Exchange::new(&sample_pools());
    let routes = exchange.find_all_paths("VND", 5.0, "USD").unwrap();

    let hops = [
        (1_000_000.0, 2_000_000.0),
        (2_000_000.0, 3_000_000.0),
        (1_000_000.0, 4_000_000.0),
        (4_000_000.0, 2_000_000.0),
        (1_000_000.0, 6_000_000.0),
        (5_000_000.0, 20_000_000.0),
    ];
    let expected = hops.iter().fold(5.0, |amount, (reserve_in, reserve_out)| {
        calculator::calculate_amount_out(amount, *reserve_in, *reserve_out)
    });

    assert_eq!(symbols(&routes[0]), vec!["AUD", "AUF", "AUG", "AUH", "AUJ", "USD"]);
    assert_eq!(routes[0].amount_out, expected);
    assert_eq!(routes[0].rate, expected / 5.0);
}

#[test]
fn test_route_invariants() {
    let exchange = Exchange::new(&sample_pools());

    for (from, to) in [("VND", "USD"), ("USD", "VND"), ("AUF", "AUK"), ("AUJ", "AUD")] {
        let routes = exchange.find_all_paths(from, 5.0, to).unwrap();
        assert!(!routes.is_empty());

        for route in &routes {
            let unique: HashSet<&str> = symbols(route).into_iter().collect();
            assert_eq!(unique.len(), route.hop_count(), "repeated asset in {:?}", route.route);
            assert!(!unique.contains(from));
            assert_eq!(route.destination(), Some(to));
            assert_eq!(route.route.iter().filter(|s| *s == to).count(), 1);
            assert!(route.rate.is_finite() && route.rate > 0.0);
        }
    }
}

#[test]
fn test_unreachable_destination() {
    let mut pools = sample_pools();
    pools.push(Pool::new("EUR", 1_000.0, "GBP", 1_000.0));
    let exchange = Exchange::new(&pools);

    assert!(exchange.find_all_paths("VND", 5.0, "EUR").unwrap().is_empty());
    assert!(exchange.find_all_paths("JPY", 5.0, "USD").unwrap().is_empty());
}

#[test]
fn test_strict_exchange_on_sample_network() {
    let strict = Exchange::strict(&sample_pools()).expect("sample pools are valid");
    let permissive = Exchange::new(&sample_pools());

    assert_eq!(
        strict.find_all_paths("VND", 5.0, "USD").unwrap(),
        permissive.find_all_paths("VND", 5.0, "USD").unwrap()
    );
}

#[test]
fn test_degenerate_pool_policies() {
    let pools = vec![
        Pool::new("A", 1_000.0, "B", 1_000.0),
        Pool::new("B", 0.0, "C", 1_000.0),
    ];

    // Permissive: 0 reserve in passes through and still prices
    let routes = Exchange::new(&pools).find_all_paths("A", 10.0, "C").unwrap();
    assert_eq!(routes.len(), 1);
    assert!(routes[0].rate.is_finite());

    assert!(matches!(
        Exchange::strict(&pools),
        Err(RouterError::InvalidLiquidity { index: 1, .. })
    ));
}

#[test]
fn test_routes_from_loaded_json() {
    let json = serde_json::to_string(&sample_pools()).unwrap();
    let pools = loader::parse_pools_json(&json).unwrap();
    assert_eq!(pools, sample_pools());

    let routes = Exchange::new(&pools).find_all_paths("VND", 5.0, "USD").unwrap();
    assert_eq!(routes.len(), 6);
}

#[test]
fn test_json_output_shape() {
    let exchange = Exchange::new(&[Pool::new("X", 1_000_000.0, "Y", 2_000_000.0)]);
    let routes = exchange.find_all_paths("X", 5.0, "Y").unwrap();

    let value = serde_json::to_value(&routes).unwrap();
    assert_eq!(value[0]["route"], serde_json::json!(["Y"]));
    assert!(value[0]["rate"].as_f64().unwrap() > 1.99);
    assert!(value[0]["amountOut"].as_f64().unwrap() > 9.99);
}
