//! Per-domain configuration objects.
//!
//! Each domain (engine, build, package, project) is a named collection of
//! sections backed by a single `.ini` file under the user config directory.
//! Defaults are populated in memory at construction, then overlaid by
//! on-disk values during `load()`.

pub mod build;
pub mod engine;
pub mod package;
pub mod project;

use std::{
    fs::{create_dir_all, read_to_string, write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{error::ConfigError, ini::IniDocument};

pub use {
    build::BuildConfig, engine::EngineConfig, package::PackageConfig, project::ProjectConfig,
};

/// A named configuration domain backed by one on-disk file.
#[derive(Debug, Clone)]
pub struct DomainConfig {
    /// Domain name; the backing file is `<name>.ini`.
    name: &'static str,
    /// Path to the backing file under the user config directory.
    path: PathBuf,
    /// In-memory document, pre-populated with the domain's defaults.
    document: IniDocument,
}

impl DomainConfig {
    /// Creates a domain backed by `<name>.ini` under `user_dir`, seeded
    /// from the given default table.
    #[must_use]
    pub fn new(name: &'static str, user_dir: &Path, defaults: &[(&str, &str, &str)]) -> Self {
        let mut document = IniDocument::new();
        for (section, key, value) in defaults {
            document.set(section, key, value);
        }

        Self {
            name,
            path: user_dir.join(format!("{name}.ini")),
            document,
        }
    }

    /// The domain name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Path to the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sets a value in memory; not persisted until `save()`.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.document.set(section, key, value);
    }

    /// Gets a string value, returning `default` when absent.
    #[must_use]
    pub fn get(&self, section: &str, key: &str, default: &str) -> String {
        self.document.get(section, key, default)
    }

    /// Gets a boolean value, returning `default` when absent or unparseable.
    #[must_use]
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.document.get_bool(section, key, default)
    }

    /// Gets an integer value, returning `default` when absent or unparseable.
    #[must_use]
    pub fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.document.get_int(section, key, default)
    }

    /// Overlays on-disk values over the in-memory defaults.
    ///
    /// A missing file is tolerated: the defaults stand and the file
    /// materializes on the first `save()`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        if !self.path.exists() {
            debug!("No config file for domain '{}' at {:?}", self.name, self.path);
            return Ok(());
        }

        debug!("Loading domain '{}' from {:?}", self.name, self.path);
        let contents = read_to_string(&self.path)?;
        let on_disk = IniDocument::parse(&contents)?;
        for (section, key, value) in on_disk.entries() {
            self.document.set(section, key, value);
        }
        Ok(())
    }

    /// Writes the current in-memory state back to disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or its parent directory cannot be
    /// written.
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            create_dir_all(parent)?;
        }

        debug!("Saving domain '{}' to {:?}", self.name, self.path);
        write(&self.path, self.document.to_ini_string())?;
        Ok(())
    }
}

/// Shared accessor surface for typed configuration domains.
pub trait ConfigDomain {
    /// The underlying domain store.
    fn domain(&self) -> &DomainConfig;

    /// The underlying domain store, mutably.
    fn domain_mut(&mut self) -> &mut DomainConfig;

    /// Sets a value in memory; not persisted until [`ConfigDomain::save`].
    fn set(&mut self, section: &str, key: &str, value: &str) {
        self.domain_mut().set(section, key, value);
    }

    /// Gets a string value, returning `default` when absent.
    fn get(&self, section: &str, key: &str, default: &str) -> String {
        self.domain().get(section, key, default)
    }

    /// Gets a boolean value, returning `default` when absent or unparseable.
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.domain().get_bool(section, key, default)
    }

    /// Gets an integer value, returning `default` when absent or unparseable.
    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.domain().get_int(section, key, default)
    }

    /// Overlays on-disk values over the in-memory state.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the backing file cannot be read or parsed.
    fn load(&mut self) -> Result<(), ConfigError> {
        self.domain_mut().load()
    }

    /// Writes the current in-memory state back to disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the backing file cannot be written.
    fn save(&self) -> Result<(), ConfigError> {
        self.domain().save()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::domain::DomainConfig;

    const DEFAULTS: &[(&str, &str, &str)] = &[
        ("section", "kept", "default"),
        ("section", "overridden", "default"),
    ];

    #[test]
    fn test_defaults_populated_at_construction() {
        let dir = tempdir().unwrap();
        let domain = DomainConfig::new("sample", dir.path(), DEFAULTS);
        assert_eq!(domain.get("section", "kept", ""), "default");
        assert!(domain.path().ends_with("sample.ini"));
    }

    #[test]
    fn test_load_overlays_disk_values_over_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("sample.ini"),
            "[section]\noverridden = from-disk\nextra = new\n",
        )
        .unwrap();

        let mut domain = DomainConfig::new("sample", dir.path(), DEFAULTS);
        domain.load().unwrap();
        assert_eq!(domain.get("section", "overridden", ""), "from-disk");
        assert_eq!(domain.get("section", "kept", ""), "default");
        assert_eq!(domain.get("section", "extra", ""), "new");
    }

    #[test]
    fn test_load_tolerates_missing_file() {
        let dir = tempdir().unwrap();
        let mut domain = DomainConfig::new("sample", dir.path(), DEFAULTS);
        domain.load().unwrap();
        assert_eq!(domain.get("section", "kept", ""), "default");
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let mut domain = DomainConfig::new("sample", dir.path(), DEFAULTS);
        domain.set("section", "overridden", "edited");
        domain.save().unwrap();

        let mut reloaded = DomainConfig::new("sample", dir.path(), DEFAULTS);
        reloaded.load().unwrap();
        assert_eq!(reloaded.get("section", "overridden", ""), "edited");
    }

    #[test]
    fn test_load_propagates_parse_errors() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("sample.ini"), "not an ini line\n").unwrap();

        let mut domain = DomainConfig::new("sample", dir.path(), DEFAULTS);
        assert!(domain.load().is_err());
    }
}
