//! Configuration registry: owns the four configuration domains and seeds
//! default files on first run.
//!
//! The registry is constructed once at process start and passed by reference
//! to consumers; there are no global singletons and no lazy construction.

use std::fs::copy;

use tracing::info;

use crate::{
    domain::{BuildConfig, ConfigDomain, EngineConfig, PackageConfig, ProjectConfig},
    error::ConfigError,
    paths::ConfigPaths,
};

/// Config files seeded from the bundled directory on first run.
///
/// `compiler.ini` has no domain object of its own; compiler settings are
/// read through the build domain's `compiler` section.
pub const CONFIG_FILE_NAMES: [&str; 5] = [
    "engine.ini",
    "build.ini",
    "package.ini",
    "compiler.ini",
    "project.ini",
];

/// Holds the four configuration domains and their resolved directories.
#[derive(Debug, Clone)]
pub struct ConfigRegistry {
    paths: ConfigPaths,
    /// Engine runtime settings (`engine.ini`).
    pub engine: EngineConfig,
    /// Build pipeline settings (`build.ini`).
    pub build: BuildConfig,
    /// Packaging settings (`package.ini`).
    pub package: PackageConfig,
    /// Project identity settings (`project.ini`).
    pub project: ProjectConfig,
}

impl ConfigRegistry {
    /// Creates a registry with all four domains populated from their
    /// default tables. Nothing is read from disk until [`Self::initialize`].
    #[must_use]
    pub fn new(paths: ConfigPaths) -> Self {
        let user_dir = paths.user_dir().clone();
        Self {
            engine: EngineConfig::new(&user_dir),
            build: BuildConfig::new(&user_dir),
            package: PackageConfig::new(&user_dir),
            project: ProjectConfig::new(&user_dir),
            paths,
        }
    }

    /// The resolved configuration directories.
    #[must_use]
    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Seeds default files, then loads all four domains from disk.
    ///
    /// Idempotent: seeding never overwrites existing files and re-loading
    /// overlays the same values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if seeding or any domain load fails.
    pub fn initialize(&mut self) -> Result<(), ConfigError> {
        self.seed_default_files()?;

        self.engine.load()?;
        self.build.load()?;
        self.package.load()?;
        self.project.load()?;

        info!("Configuration loaded from {}", self.paths.user_dir().display());
        Ok(())
    }

    /// Writes all four domains to disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any domain save fails.
    pub fn save_all(&self) -> Result<(), ConfigError> {
        self.engine.save()?;
        self.build.save()?;
        self.package.save()?;
        self.project.save()?;

        info!("Configuration saved to {}", self.paths.user_dir().display());
        Ok(())
    }

    /// Copies each bundled default file into the user directory when the
    /// destination does not already exist. User edits are never overwritten.
    fn seed_default_files(&self) -> Result<(), ConfigError> {
        for file_name in CONFIG_FILE_NAMES {
            let source = self.paths.bundled_dir().join(file_name);
            let destination = self.paths.user_dir().join(file_name);

            if source.exists() && !destination.exists() {
                copy(&source, &destination)?;
                info!("Created default config file: {}", destination.display());
            }
        }
        Ok(())
    }
}
