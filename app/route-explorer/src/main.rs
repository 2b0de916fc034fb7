//! Route Explorer
//!
//! Lists every swap route between two assets and the rate each one yields

use clap::Parser;
use log::{error, info, warn};
use route_explorer::config::OutputFormat;
use route_explorer::router::LogObserver;
use route_explorer::*;

fn main() {
    // Parse CLI arguments
    let args = config::CliArgs::parse();
    let config = Config::from_args(args);

    // Initialize logger
    if matches!(&config, Ok(c) if c.verbose || c.trace) {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    if let Err(e) = config.and_then(run) {
        error!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let pools = match &config.pools_path {
        Some(path) => loader::load_pools(path)?,
        None => {
            info!("🎯 No pool file given, using the sample network");
            sample_pools()
        }
    };

    let mut exchange = if config.strict {
        Exchange::strict(&pools)?
    } else {
        Exchange::new(&pools)
    };
    if config.trace {
        exchange = exchange.with_observer(LogObserver);
    }

    info!(
        "📊 {} pools, {} assets",
        pools.len(),
        exchange.graph().node_count()
    );
    info!(
        "🔍 Searching routes {} -> {} for {} {}",
        config.from, config.to, config.amount, config.from
    );

    let routes = exchange.find_all_paths(&config.from, config.amount, &config.to)?;
    if routes.is_empty() {
        warn!("No route from {} to {}", config.from, config.to);
    }

    let non_finite = routes.iter().filter(|r| !r.has_finite_rate()).count();
    if non_finite > 0 {
        // serde_json writes NaN and infinity as null
        warn!(
            "{} of {} routes have a non-finite rate (degenerate reserves or input amount); use --strict to reject them",
            non_finite,
            routes.len()
        );
    }

    match config.format {
        OutputFormat::Text => print_routes(&config, &routes),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&routes).map_err(anyhow::Error::from)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn print_routes(config: &Config, routes: &[RouteAndRate]) {
    info!("\n💰 {} routes found:", routes.len());

    for (idx, route) in routes.iter().enumerate() {
        info!("\n   Route {}:", idx + 1);
        info!("      Path:       {} -> {}", config.from, route.route.join(" -> "));
        info!("      Hops:       {}", route.hop_count());
        info!("      Amount Out: {}", route.amount_out);
        info!("      Rate:       {}", route.rate);
    }
}

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
