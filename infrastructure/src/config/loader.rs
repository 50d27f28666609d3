//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["course-planner.toml", ".course-planner.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./course-planner.toml` or `./.course-planner.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/course-planner/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path(),
            Self::project_config_path(),
            config_path,
        )?
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(
        global: Option<PathBuf>,
        project: Option<PathBuf>,
        explicit: Option<&PathBuf>,
    ) -> Result<Figment, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(project_path) = project {
            figment = figment.merge(Toml::file(project_path));
        }

        // An explicitly requested file must exist
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment)
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/course-planner/config.toml` if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("course-planner").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./course-planner.toml or ./.course-planner.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.generation.max_attempts, 2);
        assert!(config.generation.command.is_empty());
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("course-planner"));
    }

    #[test]
    fn test_priority_explicit_over_project_over_global() {
        let dir = TempDir::new().unwrap();
        let global = write(
            &dir,
            "global.toml",
            "[budget]\nfood_cost = \"global\"\nwine_cost = \"global\"\n[generation]\nmax_attempts = 7\n",
        );
        let project = write(
            &dir,
            "project.toml",
            "[budget]\nfood_cost = \"project\"\nwine_cost = \"project\"\n",
        );
        let explicit = write(&dir, "explicit.toml", "[budget]\nfood_cost = \"explicit\"\n");

        let config: FileConfig =
            ConfigLoader::figment(Some(global), Some(project), Some(&explicit))
                .unwrap()
                .extract()
                .unwrap();

        assert_eq!(config.budget.food_cost.as_deref(), Some("explicit"));
        assert_eq!(config.budget.wine_cost.as_deref(), Some("project"));
        assert_eq!(config.generation.max_attempts, 7);
        assert!(config.generation.fallback);
    }

    #[test]
    fn test_missing_global_is_ignored() {
        let dir = TempDir::new().unwrap();
        let config: FileConfig =
            ConfigLoader::figment(Some(dir.path().join("absent.toml")), None, None)
                .unwrap()
                .extract()
                .unwrap();
        assert_eq!(config.generation.max_attempts, 2);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = ConfigLoader::figment(None, None, Some(&missing)).err().unwrap();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = TempDir::new().unwrap();
        let explicit = write(&dir, "bad.toml", "[generation]\nmax_attempts = \"many\"\n");
        let result: Result<FileConfig, _> = ConfigLoader::figment(None, None, Some(&explicit))
            .unwrap()
            .extract();
        assert!(result.is_err());
    }
}
