use anyhow::{Context, Result};
use frontier_agents::StrategyConfig;
use std::path::Path;

/// Load a policy file, or the built-in strategy when none is given.
pub fn load_strategy(path: Option<&Path>) -> Result<StrategyConfig> {
    let Some(path) = path else {
        return Ok(StrategyConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading policy file {}", path.display()))?;
    let strategy: StrategyConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing policy file {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded policy");
    Ok(strategy)
}
