use crate::error::{RefereeError, Result};
use crate::types::config::RefereeConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "referee.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".referee/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/referee/config.toml";

pub fn load_config(root: &Path) -> Result<RefereeConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Catalog sources, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigLayer {
    Global,
    Project,
    Local,
}

impl ConfigLayer {
    fn label(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Project => "project",
            Self::Local => "local",
        }
    }
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<RefereeConfig> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Err(RefereeError::ConfigNotFound(repo_path.display().to_string()));
    }

    let local_path = root.join(DEFAULT_LOCAL_FILE);
    let layers = global_path
        .map(|path| (ConfigLayer::Global, path))
        .into_iter()
        .chain([
            (ConfigLayer::Project, repo_path.as_path()),
            (ConfigLayer::Local, local_path.as_path()),
        ]);

    let mut merged = Value::Table(Map::new());
    let mut applied = Vec::new();
    for (layer, path) in layers {
        if let Some(overlay) = read_layer(layer, path)? {
            merge_toml(&mut merged, overlay);
            applied.push(layer.label());
        }
    }

    let cfg: RefereeConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| RefereeError::ConfigParse(e.to_string()))?;
    tracing::debug!(
        layers = %applied.join(" -> "),
        technologies = cfg.technologies.len(),
        criteria = cfg.criteria.len(),
        "loaded catalog from {}",
        repo_path.display()
    );
    Ok(cfg)
}

/// `None` when an optional layer has no file on disk.
fn read_layer(layer: ConfigLayer, path: &Path) -> Result<Option<Value>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str::<Value>(&content).map(Some).map_err(|e| {
        RefereeError::ConfigParse(format!("{} layer {}: {}", layer.label(), path.display(), e))
    })
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
