use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Reads a JSON array of theme queries, e.g. `["(t:dragon)", "(o:dies)"]`.
pub fn load_themes(path: &Path) -> anyhow::Result<Vec<String>> {
    let themes: Vec<String> = load_json(path)?;
    let themes: Vec<String> = themes
        .into_iter()
        .map(|theme| theme.trim().to_string())
        .filter(|theme| !theme.is_empty())
        .collect();
    if themes.is_empty() {
        bail!("{} contains no themes", path.display());
    }
    Ok(themes)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
