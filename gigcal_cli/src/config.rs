use crate::output::OutputFormat;
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use gigcal_core::IgnoreFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the configuration file, below the platform config dir
const APP_CONFIG_DIR: &str = "gigcal";

const CONFIG_FILE: &str = "config.toml";

/// Prefix of environment variables overriding configuration values
pub const ENV_PREFIX: &str = "GIGCAL_";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings of the `images` source
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ImagesConfig {
    /// Root of the photo tree
    pub rootdir: PathBuf,
    /// Location pattern; empty means no matching
    pub pattern: String,
    /// Treat the root directory's own name as the first path component
    pub include_parent: bool,
    /// Directories whose path contains any of these are skipped
    pub ignore_dirs: Vec<String>,
    /// Reject malformed numbers instead of reading them as zero
    pub strict_numeric: bool,
    pub date_from_exif: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_enabled: bool,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            rootdir: PathBuf::from("."),
            pattern: String::new(),
            include_parent: false,
            ignore_dirs: Vec::new(),
            strict_numeric: false,
            date_from_exif: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color_enabled: true,
        }
    }
}

/// Command line values for the `images` source.
///
/// `None` and `false` leave the configured value alone.
#[derive(Debug, Clone, Default)]
pub struct ImagesOverrides {
    pub rootdir: Option<PathBuf>,
    pub pattern: Option<String>,
    pub include_parent: bool,
    /// Comma separated, as typed on the command line
    pub ignore_dirs: Option<String>,
    pub strict_numeric: bool,
    pub date_from_exif: bool,
    pub format: Option<OutputFormat>,
}

impl AppConfig {
    /// Apply CLI argument overrides to the configuration
    pub fn apply_images_overrides(&mut self, overrides: ImagesOverrides) {
        if let Some(rootdir) = overrides.rootdir {
            self.images.rootdir = rootdir;
        }
        if let Some(pattern) = overrides.pattern {
            self.images.pattern = pattern;
        }
        if let Some(ignore_dirs) = overrides.ignore_dirs {
            self.images.ignore_dirs = IgnoreFilter::from_comma_separated(&ignore_dirs)
                .entries()
                .to_vec();
        }
        if let Some(format) = overrides.format {
            self.output.format = format;
        }

        self.images.include_parent |= overrides.include_parent;
        self.images.strict_numeric |= overrides.strict_numeric;
        self.images.date_from_exif |= overrides.date_from_exif;
    }

    /// The configured ignore list
    pub fn ignore_filter(&self) -> IgnoreFilter {
        IgnoreFilter::new(self.images.ignore_dirs.iter().cloned())
    }
}

/// Configuration manager that handles XDG-compliant paths and layered configuration
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with default XDG-compliant paths
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a ConfigManager with a specific path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        #[cfg(not(target_os = "windows"))]
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config.is_empty()
        {
            return PathBuf::from(xdg_config)
                .join(APP_CONFIG_DIR)
                .join(CONFIG_FILE);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_CONFIG_DIR)
            .join(CONFIG_FILE)
    }

    /// Load configuration with layered priority: ENV > File > Defaults.
    ///
    /// CLI flags are applied on top by the caller.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(AppConfig::default()));

        // Layer 2: Config file (if exists)
        if self.config_path.exists() {
            log::debug!("Loading configuration from {}", self.config_path.display());
            figment = figment.merge(Toml::file(&self.config_path));
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().context("Failed to load configuration")
    }

    /// Render the effective configuration as TOML
    pub fn show(&self) -> Result<String> {
        let config = self.load()?;
        toml::to_string_pretty(&config).context("Failed to render configuration")
    }
}
