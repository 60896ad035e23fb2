use crate::error::{RepscoreError, Result};
use crate::types::config::RepscoreConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "repscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".repscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/repscore/config.toml";

/// Load configuration for a run. An explicit `--config` path must exist;
/// otherwise `repscore.toml` in the working directory is used when present.
/// Layers merge global -> repo -> local, later layers winning per key.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<RepscoreConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_layers(explicit, Path::new("."), global.as_deref())
}

pub(crate) fn load_config_layers(
    explicit: Option<&Path>,
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<RepscoreConfig>> {
    let repo_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(RepscoreError::PathNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = root.join(DEFAULT_CONFIG_FILE);
            if !candidate.exists() {
                return Ok(None);
            }
            candidate
        }
    };

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: RepscoreConfig = merged.try_into()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RepscoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
