//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "minwon-desk";
const PROJECT_FILES: [&str; 2] = ["minwon.toml", ".minwon.toml"];
const ENV_PREFIX: &str = "MINWON_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables `MINWON_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./minwon.toml` or `./.minwon.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/minwon-desk/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load from defaults and files only, ignoring the environment
    pub fn load_files(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/minwon-desk/config.toml if set,
    /// otherwise falls back to the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations in priority order
    pub fn config_sources(config_path: Option<&Path>) -> Vec<(String, Option<PathBuf>)> {
        let mut sources = Vec::new();

        sources.push((
            format!("Environment: {}<SECTION>__<KEY>", ENV_PREFIX),
            None,
        ));
        if let Some(path) = config_path {
            sources.push(("Explicit".to_string(), Some(path.to_path_buf())));
        }
        sources.push((
            "Project: ./minwon.toml or ./.minwon.toml".to_string(),
            Self::project_config_path(),
        ));
        if let Some(path) = Self::global_config_path() {
            let found = path.exists().then_some(path.clone());
            sources.push((format!("Global: {}", path.display()), found));
        }
        sources.push(("Default: built-in defaults".to_string(), None));

        sources
    }
}
