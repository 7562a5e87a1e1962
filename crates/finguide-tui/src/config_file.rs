use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
    pub fps: Option<u32>,
}

impl ConfigFile {
    pub fn theme(&self) -> Option<&str> {
        self.display.as_ref()?.theme.as_deref()
    }

    pub fn fps(&self) -> Option<u32> {
        self.display.as_ref()?.fps
    }
}

/// Platform config path: `<config_dir>/finguide/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("finguide").join("config.toml"))
}

/// Load config by cascading CWD `.finguide.toml` over the platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".finguide.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&contents) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
            None
        }
    }
}

/// Field-wise merge: `over` wins wherever it sets a value.
fn merge(base: ConfigFile, over: ConfigFile) -> ConfigFile {
    let base_display = base.display.unwrap_or_default();
    let over_display = over.display.unwrap_or_default();
    ConfigFile {
        display: Some(DisplayConfig {
            theme: over_display.theme.or(base_display.theme),
            fps: over_display.fps.or(base_display.fps),
        }),
    }
}

/// Persist the display settings to the platform config file.
pub fn save_config(theme: &str, fps: u32) -> anyhow::Result<()> {
    let path = config_path().ok_or_else(|| anyhow::anyhow!("no platform config directory"))?;
    let config = ConfigFile {
        display: Some(DisplayConfig {
            theme: Some(theme.to_string()),
            fps: Some(fps),
        }),
    };
    save_to_path(&path, &config)
}

fn save_to_path(path: &Path, config: &ConfigFile) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}
