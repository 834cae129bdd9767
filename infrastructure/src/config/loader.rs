//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const PROJECT_FILES: [&str; 2] = ["council.toml", ".council.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./council.toml` or `./.council.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/sortition-council/config.toml`
    /// 4. Environment: `COUNCIL_<SECTION>__<KEY>`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// The merged provider stack behind [`load`](Self::load)
    pub fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Env::prefixed("COUNCIL_").split("__"));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
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
    /// Returns XDG_CONFIG_HOME/sortition-council/config.toml if set,
    /// otherwise falls back to ~/.config/sortition-council/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("sortition-council").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<7}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND  ] Project: {}", path.display());
        } else {
            println!("  [       ] Project: ./council.toml or ./.council.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "" };
            println!("  [{:<7}] Global:  {}", mark, path.display());
        }

        println!("  [       ] Env:     COUNCIL_<SECTION>__<KEY>");
        println!("  [       ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.council.committee_size, 3);
        assert!(config.council.admin.is_none());
        assert!(config.validators.is_empty());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("sortition-council"));
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[council]
committee_size = 4
admin = "0xBoard"

[sortition]
seed = 9

[[validators]]
address = "0xa"
profile = "cid-a"
"#
        )
        .unwrap();

        let path = file.path().to_path_buf();
        let config = ConfigLoader::load(Some(&path)).unwrap();

        assert_eq!(config.council.committee_size, 4);
        assert_eq!(config.council.feedback_delimiter, "|");
        assert_eq!(config.admin().unwrap().as_str(), "0xboard");
        assert_eq!(config.sortition.seed, Some(9));
        assert_eq!(config.validators.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[council]\ncommittee_size = \"three\"").unwrap();

        let path = file.path().to_path_buf();
        assert!(ConfigLoader::load(Some(&path)).is_err());
    }
}
