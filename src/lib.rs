//! Ares Config - persistent configuration for the Ares engine toolchain.
//!
//! This crate manages hierarchical, INI-backed configuration for the engine
//! and its build pipeline: it resolves a platform-appropriate user config
//! directory, seeds bundled default files on first run, and exposes typed
//! accessors per configuration domain (engine, build, package, project).

pub mod domain;
pub mod error;
pub mod ini;
pub mod paths;
pub mod registry;

// Re-export key types for convenience
pub use {
    domain::{BuildConfig, ConfigDomain, DomainConfig, EngineConfig, PackageConfig, ProjectConfig},
    error::ConfigError,
    ini::{IniDocument, IniError},
    paths::{CONFIG_DIR_ENV, ConfigPaths, Platform, bundled_config_dir, user_config_dir},
    registry::{CONFIG_FILE_NAMES, ConfigRegistry},
};
