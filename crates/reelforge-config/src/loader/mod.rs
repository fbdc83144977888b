//! Layered configuration loader.
//!
//! Discovers configuration layers (system/user/project/etc), checks each
//! layer's shape, merges them, and produces a final `ReelForgeConfig`.

mod layer_io;
mod merge;

#[cfg(test)]
mod tests;

use crate::{ConfigError, ReelForgeConfig};
use log::{debug, info};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config filename in local layers.
const DEFAULT_CONFIG_FILE: &str = "reelforge.json5";
/// Default config directory under user or repo roots.
const DEFAULT_CONFIG_DIR: &str = ".reelforge";
/// Marker files/dirs that identify a project root.
const DEFAULT_PROJECT_ROOT_MARKERS: &[&str] = &[".git"];

#[cfg(unix)]
/// Default system config path on Unix.
const SYSTEM_CONFIG_PATH: &str = "/etc/reelforge/reelforge.json5";
#[cfg(windows)]
/// Default system config path on Windows.
const SYSTEM_CONFIG_PATH: &str = "C:\\ProgramData\\reelforge\\reelforge.json5";

/// Effective config plus metadata about which layers were loaded.
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// The merged, validated config.
    pub config: ReelForgeConfig,
    /// Metadata for each layer considered during load.
    pub layers: Vec<ConfigLayer>,
}

/// Origin for a single config layer in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLayerSource {
    /// System-wide configuration.
    System,
    /// User-specific configuration.
    User,
    /// Project root configuration.
    Project,
    /// Current working directory configuration.
    Cwd,
    /// Repo-local configuration.
    Repo,
    /// Runtime overrides (highest precedence).
    Runtime,
}

/// Metadata about a config layer considered during a load.
#[derive(Debug, Clone)]
pub struct ConfigLayer {
    /// Layer origin (system, user, runtime, etc).
    pub source: ConfigLayerSource,
    /// Location on disk if present.
    pub path: Option<PathBuf>,
}

/// Options controlling layered config discovery and overrides.
#[derive(Debug, Clone)]
pub struct LayeredConfigOptions {
    /// Working directory used to resolve relative paths and local layers.
    pub cwd: PathBuf,
    /// Optional system config path (defaults to `/etc/reelforge/reelforge.json5` on Unix).
    pub system_config_path: Option<PathBuf>,
    /// Optional user config path (defaults to `~/.reelforge/reelforge.json5`).
    pub user_config_path: Option<PathBuf>,
    /// Runtime override config paths applied last.
    pub runtime_paths: Vec<PathBuf>,
    /// Marker files/dirs used to detect the project root.
    pub project_root_markers: Vec<String>,
}

impl LayeredConfigOptions {
    /// Create options with default layer locations for the provided cwd.
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        let cwd = cwd.as_ref().to_path_buf();
        Self {
            cwd,
            system_config_path: layer_io::default_system_config_path(),
            user_config_path: layer_io::default_user_config_path(),
            runtime_paths: Vec::new(),
            project_root_markers: DEFAULT_PROJECT_ROOT_MARKERS
                .iter()
                .map(|marker| marker.to_string())
                .collect(),
        }
    }

    /// Add a runtime override config path that is applied last.
    pub fn with_runtime_path(mut self, path: impl AsRef<Path>) -> Self {
        self.runtime_paths.push(path.as_ref().to_path_buf());
        self
    }
}

impl ReelForgeConfig {
    /// Load a single config from a path (no layering).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        let value: Value = json5::from_str(&contents)?;
        config_from_value(value)
    }

    /// Load a single config from JSON5 contents (no layering).
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        config_from_value(value)
    }

    /// Load a layered config stack using the default layer locations.
    pub fn load_layered(cwd: impl AsRef<Path>) -> Result<LayeredConfig, ConfigError> {
        info!(
            "loading layered config with defaults (cwd={})",
            cwd.as_ref().display()
        );
        let options = LayeredConfigOptions::new(cwd);
        Self::load_layered_with_options(options)
    }

    /// Load a layered config stack using explicit layer locations and overrides.
    ///
    /// Layer precedence (low -> high): system, user, project, cwd, repo,
    /// runtime overrides.
    pub fn load_layered_with_options(
        options: LayeredConfigOptions,
    ) -> Result<LayeredConfig, ConfigError> {
        let cwd = layer_io::resolve_cwd(&options.cwd)?;
        debug!("normalized cwd for config load: {}", cwd.display());
        let mut layers = Vec::new();
        let mut merge_layers = Vec::new();
        let mut seen_paths = HashSet::new();

        for (source, path) in [
            (
                ConfigLayerSource::System,
                options.system_config_path.as_deref(),
            ),
            (ConfigLayerSource::User, options.user_config_path.as_deref()),
        ] {
            if let Some(layer) = layer_io::load_optional_layer(source, path)? {
                debug!("loaded {:?} layer", source);
                layers.push(layer.meta.clone());
                merge_layers.push(layer);
            }
        }

        let project_root = layer_io::project_root(&cwd, &options.project_root_markers);
        if let Some(project_root) = project_root.as_ref() {
            debug!("resolved project root: {}", project_root.display());
        } else {
            debug!("project root not found; skipping project/repo layers");
        }

        let mut local_layers = Vec::new();
        if let Some(project_root) = project_root.as_ref() {
            local_layers.push(LocalLayer {
                source: ConfigLayerSource::Project,
                path: project_root.join(DEFAULT_CONFIG_FILE),
            });
        }

        local_layers.push(LocalLayer {
            source: ConfigLayerSource::Cwd,
            path: cwd.join(DEFAULT_CONFIG_FILE),
        });

        if let Some(repo_root) = project_root.as_ref() {
            local_layers.push(LocalLayer {
                source: ConfigLayerSource::Repo,
                path: repo_root.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILE),
            });
        }

        for layer in local_layers {
            load_local_layer(layer, &mut layers, &mut merge_layers, &mut seen_paths)?;
        }

        for runtime_path in &options.runtime_paths {
            let loaded = layer_io::load_required_layer(ConfigLayerSource::Runtime, runtime_path)?;
            debug!("loaded runtime layer (path={})", runtime_path.display());
            layers.push(loaded.meta.clone());
            merge_layers.push(loaded);
        }

        let mut merged = Value::Object(serde_json::Map::new());
        for layer in merge_layers {
            merge::deep_merge(&mut merged, &layer.value);
        }

        let config = config_from_value(merged)?;
        info!("layered config loaded (layers={})", layers.len());
        Ok(LayeredConfig { config, layers })
    }
}

/// Internal representation of a loaded config layer.
#[derive(Debug, Clone)]
struct LoadedLayer {
    meta: ConfigLayer,
    value: Value,
}

/// Internal representation for layer candidates on disk.
#[derive(Debug, Clone)]
struct LocalLayer {
    source: ConfigLayerSource,
    path: PathBuf,
}

fn config_from_value(value: Value) -> Result<ReelForgeConfig, ConfigError> {
    let config: ReelForgeConfig = serde_json::from_value(value)?;
    config.validate()?;
    Ok(config)
}

fn load_local_layer(
    layer: LocalLayer,
    layers: &mut Vec<ConfigLayer>,
    merge_layers: &mut Vec<LoadedLayer>,
    seen_paths: &mut HashSet<PathBuf>,
) -> Result<(), ConfigError> {
    if !layer.path.exists() {
        debug!(
            "skipping missing layer (source={:?}, path={})",
            layer.source,
            layer.path.display()
        );
        return Ok(());
    }
    let unique = layer_io::dedup_key(&layer.path);
    if !seen_paths.insert(unique) {
        debug!(
            "skipping duplicate layer (source={:?}, path={})",
            layer.source,
            layer.path.display()
        );
        return Ok(());
    }
    let loaded = layer_io::load_required_layer(layer.source, &layer.path)?;
    debug!(
        "loaded layer (source={:?}, path={})",
        layer.source,
        layer.path.display()
    );
    layers.push(loaded.meta.clone());
    merge_layers.push(loaded);
    Ok(())
}
