//! Detailed demo showing how routes are discovered and priced
//!
//! Run with: cargo run --example detailed_demo

use route_explorer::*;

/// Prints every projected swap as the explorer walks the graph
struct PrintObserver;

impl SwapObserver for PrintObserver {
    fn on_swap(&self, hop: &SwapHop) {
        println!(
            "   {:>3} -> {:<3}  reserves {:>10} / {:<10}  in {:>14.6}  out {:>14.6}",
            hop.from, hop.to, hop.reserve_in, hop.reserve_out, hop.amount_in, hop.amount_out
        );
    }
}

fn main() {
    println!("\n📊 STEP 1: Pools");
    println!("─────────────────────────────────────────────────────────────");
    let pools = vec![
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
    ];
    for pool in &pools {
        println!(
            "   {} {:>10}  <->  {} {:>10}",
            pool.token_a.symbol, pool.token_a.amount, pool.token_b.symbol, pool.token_b.amount
        );
    }

    println!("\n🕸  STEP 2: Graph");
    println!("─────────────────────────────────────────────────────────────");
    let graph = Graph::build(&pools);
    let mut assets: Vec<&str> = graph.symbols().collect();
    assets.sort();
    for asset in assets {
        let neighbors: Vec<&str> = graph
            .edges(asset)
            .unwrap_or_default()
            .iter()
            .map(|edge| edge.symbol.as_str())
            .collect();
        println!("   {} -> {}", asset, neighbors.join(", "));
    }

    println!("\n🔍 STEP 3: Depth-first search VND -> USD, 5 VND");
    println!("─────────────────────────────────────────────────────────────");
    let routes = match RouteExplorer::new(&graph)
        .with_observer(&PrintObserver)
        .find_all_paths("VND", 5.0, "USD")
    {
        Ok(routes) => routes,
        Err(e) => {
            eprintln!("❌ Search failed: {}", e);
            return;
        }
    };

    println!("\n💰 STEP 4: Routes");
    println!("─────────────────────────────────────────────────────────────");
    for (idx, route) in routes.iter().enumerate() {
        println!(
            "   {}. VND -> {:<40} rate {:.6}",
            idx + 1,
            route.route.join(" -> "),
            route.rate
        );
    }
    println!();
}
