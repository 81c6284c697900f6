//! Theme loading and registry.
//!
//! This module provides:
//! - `ThemeRegistry`: A pure data structure holding all loaded configurations
//! - `ThemeLoader`: Scans and loads theme files into a registry

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::types::{ThemeConfiguration, DEFAULT_THEME, DEFAULT_THEME_NAME};
use crate::error::ThemeError;

/// Name and origin of a registered configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeInfo {
    pub name: String,
    /// "builtin", "user" or "user/<subdir>"
    pub pack: String,
}

impl ThemeInfo {
    pub fn new(name: impl Into<String>, pack: &str) -> Self {
        Self {
            name: name.into(),
            pack: pack.to_string(),
        }
    }
}

fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}

/// A registry holding all loaded theme configurations.
///
/// This is a pure data structure - no I/O operations.
/// Use `ThemeLoader` to create and populate a registry.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    /// All loaded configurations, keyed by normalized name
    themes: HashMap<String, ThemeConfiguration>,
    /// Metadata for listing, in load order
    theme_list: Vec<ThemeInfo>,
}

impl ThemeRegistry {
    /// Get a configuration by name.
    pub fn get(&self, name: &str) -> Option<&ThemeConfiguration> {
        self.themes.get(&normalize_name(name))
    }

    /// Get a cloned configuration by name.
    pub fn get_cloned(&self, name: &str) -> Option<ThemeConfiguration> {
        self.get(name).cloned()
    }

    /// List all available configurations with metadata.
    pub fn list(&self) -> &[ThemeInfo] {
        &self.theme_list
    }

    pub fn names(&self) -> Vec<String> {
        self.theme_list.iter().map(|t| t.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(&normalize_name(name))
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    fn insert(&mut self, name: String, pack: &str, config: ThemeConfiguration) {
        self.theme_list.push(ThemeInfo::new(name.clone(), pack));
        self.themes.insert(name, config);
    }
}

/// Default user themes directory: `<config dir>/mermaid-theme/themes`.
pub fn default_themes_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mermaid-theme").join("themes"))
}

/// Loads theme files and creates a ThemeRegistry.
pub struct ThemeLoader {
    user_themes_dir: Option<PathBuf>,
}

impl ThemeLoader {
    /// Create a ThemeLoader with the given user themes directory.
    pub fn new(user_themes_dir: PathBuf) -> Self {
        Self {
            user_themes_dir: Some(user_themes_dir),
        }
    }

    /// Create a ThemeLoader for the built-in configuration only.
    pub fn embedded_only() -> Self {
        Self {
            user_themes_dir: None,
        }
    }

    pub fn user_themes_dir(&self) -> Option<&Path> {
        self.user_themes_dir.as_deref()
    }

    /// Load and validate a single theme file.
    ///
    /// Fields missing from the file keep their built-in values.
    pub fn load_file(path: &Path) -> Result<ThemeConfiguration, ThemeError> {
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ThemeConfiguration =
            serde_json::from_str(&content).map_err(|source| ThemeError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the built-in configuration plus every user theme file into a registry.
    pub fn load_all(&self) -> ThemeRegistry {
        let mut registry = ThemeRegistry {
            themes: HashMap::new(),
            theme_list: Vec::new(),
        };

        registry.insert(
            DEFAULT_THEME_NAME.to_string(),
            "builtin",
            DEFAULT_THEME.clone(),
        );

        if let Some(ref user_dir) = self.user_themes_dir {
            if user_dir.is_dir() {
                self.scan_directory(user_dir, "user", &mut registry);
            } else {
                tracing::debug!("Themes directory {:?} does not exist", user_dir);
            }
        }

        tracing::info!("Loaded {} theme configurations", registry.len());
        registry
    }

    /// Recursively scan a directory for theme files.
    fn scan_directory(&self, dir: &Path, pack: &str, registry: &mut ThemeRegistry) {
        let entries = match std::fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("Failed to read themes directory {:?}: {}", dir, e);
                return;
            }
        };

        let mut paths: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
        paths.sort();

        for path in paths {
            if path.is_dir() {
                let Some(subdir_name) = path.file_name().map(|n| n.to_string_lossy().into_owned())
                else {
                    continue;
                };
                let new_pack = format!("{}/{}", pack, subdir_name);
                self.scan_directory(&path, &new_pack, registry);
            } else if path.extension().is_some_and(|ext| ext == "json") {
                let Some(stem) = path.file_stem() else {
                    continue;
                };
                let name = normalize_name(&stem.to_string_lossy());

                // Skip if already loaded (built-in takes priority)
                if registry.contains(&name) {
                    tracing::warn!("Skipping {:?}: theme '{}' is already loaded", path, name);
                    continue;
                }

                match Self::load_file(&path) {
                    Ok(config) => {
                        tracing::debug!("Loaded theme '{}' from {:?}", name, path);
                        registry.insert(name, pack, config);
                    }
                    Err(e) => tracing::warn!("Skipping theme file: {}", e),
                }
            }
        }
    }
}
