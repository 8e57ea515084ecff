use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rl::SimulatorConfig;

/// Load a simulator configuration from a JSON file. Missing fields keep
/// their defaults.
pub fn load(path: &Path) -> Result<SimulatorConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = from_str(&json).with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(config)
}

pub fn from_str(json: &str) -> Result<SimulatorConfig> {
    let config: SimulatorConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}
