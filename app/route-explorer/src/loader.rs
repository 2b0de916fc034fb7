//! Pool list loading from JSON and TOML files

use crate::error::{Result, RouterError};
use crate::types::Pool;
use log::info;
use serde::Deserialize;
use std::path::Path;

/// TOML layout: a `[[pools]]` array of tables
#[derive(Debug, Deserialize)]
struct PoolsFile {
    pools: Vec<Pool>,
}

/// Load pools from a `.json` or `.toml` file
pub fn load_pools(path: &Path) -> Result<Vec<Pool>> {
    let contents = std::fs::read_to_string(path)?;

    let pools = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_pools_json(&contents)?,
        Some("toml") => parse_pools_toml(&contents)?,
        _ => {
            return Err(RouterError::PoolParseError(format!(
                "Unsupported pool file: {}",
                path.display()
            )));
        }
    };

    info!("Loaded {} pools from {}", pools.len(), path.display());
    Ok(pools)
}

/// Parse a JSON array of `{"tokenA": ..., "tokenB": ...}` records
pub fn parse_pools_json(contents: &str) -> Result<Vec<Pool>> {
    serde_json::from_str(contents).map_err(|e| RouterError::PoolParseError(e.to_string()))
}

pub fn parse_pools_toml(contents: &str) -> Result<Vec<Pool>> {
    toml::from_str::<PoolsFile>(contents)
        .map(|file| file.pools)
        .map_err(|e| RouterError::PoolParseError(e.to_string()))
}
