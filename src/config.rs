use serde::{Deserialize, Serialize};

pub const WINDOW_CLASS: &str = "CVE-2023-31320";

/// Everything a run can vary. Built from the compile-time profile; nothing is
/// read from disk or the command line.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReproConfig {
    /// Request the D3D11 debug layer at device creation.
    #[serde(default)]
    pub debug_layer: bool,
    /// Compile shaders with `D3DCOMPILE_DEBUG | D3DCOMPILE_SKIP_OPTIMIZATION`.
    #[serde(default)]
    pub debug_shaders: bool,
    #[serde(default = "ReproConfig::default_window_class")]
    pub window_class: String,
    /// `env_logger` filter used when `RUST_LOG` is unset.
    #[serde(default = "ReproConfig::default_log_filter")]
    pub log_filter: String,
}

impl ReproConfig {
    pub fn from_build() -> Self {
        let debug = cfg!(debug_assertions);
        Self {
            debug_layer: debug,
            debug_shaders: debug,
            ..Default::default()
        }
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn default_window_class() -> String {
        WINDOW_CLASS.to_string()
    }

    fn default_log_filter() -> String {
        "warn".to_string()
    }
}

impl Default for ReproConfig {
    fn default() -> Self {
        Self {
            debug_layer: false,
            debug_shaders: false,
            window_class: Self::default_window_class(),
            log_filter: Self::default_log_filter(),
        }
    }
}
