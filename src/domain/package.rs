//! Package configuration domain: distribution metadata and bundled data
//! layout for packaged builds.

use std::path::Path;

use crate::domain::{ConfigDomain, DomainConfig};

/// Default key/value table for the package domain.
const PACKAGE_DEFAULTS: &[(&str, &str, &str)] = &[
    // Package section
    ("package", "output_dir", "dist"),
    ("package", "format", "auto"),
    ("package", "include_readme", "True"),
    ("package", "include_license", "True"),
    // Data section
    ("data", "include_patterns", "*.ini, *.png, *.wav, *.ttf"),
    ("data", "data_dir", "ares/data"),
    // Dependencies section
    ("dependencies", "bundle_runtime", "True"),
    ("dependencies", "check_versions", "True"),
];

/// Package configuration backed by `package.ini`.
#[derive(Debug, Clone)]
pub struct PackageConfig {
    domain: DomainConfig,
}

impl PackageConfig {
    /// Creates the package domain with its default table populated.
    #[must_use]
    pub fn new(user_dir: &Path) -> Self {
        Self {
            domain: DomainConfig::new("package", user_dir, PACKAGE_DEFAULTS),
        }
    }

    /// Output directory for packaged artifacts.
    #[must_use]
    pub fn output_dir(&self) -> String {
        self.get("package", "output_dir", "dist")
    }
}

impl ConfigDomain for PackageConfig {
    fn domain(&self) -> &DomainConfig {
        &self.domain
    }

    fn domain_mut(&mut self) -> &mut DomainConfig {
        &mut self.domain
    }
}
