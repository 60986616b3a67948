//! Project configuration domain: identity of the project built on top of
//! the engine.

use std::path::Path;

use crate::domain::{ConfigDomain, DomainConfig};

/// Default key/value table for the project domain.
const PROJECT_DEFAULTS: &[(&str, &str, &str)] = &[
    // Project section
    ("project", "product_name", "Ares Engine"),
    ("project", "company_name", "Ares Engine Team"),
    ("project", "description", "A project built with Ares Engine"),
    ("project", "homepage", ""),
    // Paths section
    ("paths", "source_dir", "src"),
    ("paths", "assets_dir", "assets"),
];

/// Project configuration backed by `project.ini`.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    domain: DomainConfig,
}

impl ProjectConfig {
    /// Creates the project domain with its default table populated.
    #[must_use]
    pub fn new(user_dir: &Path) -> Self {
        Self {
            domain: DomainConfig::new("project", user_dir, PROJECT_DEFAULTS),
        }
    }

    /// The product name shown in window titles and installers.
    #[must_use]
    pub fn product_name(&self) -> String {
        self.get("project", "product_name", "Ares Engine")
    }
}

impl ConfigDomain for ProjectConfig {
    fn domain(&self) -> &DomainConfig {
        &self.domain
    }

    fn domain_mut(&mut self) -> &mut DomainConfig {
        &mut self.domain
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::domain::{ConfigDomain, project::ProjectConfig};

    #[test]
    fn test_product_name_round_trip() {
        let dir = tempdir().unwrap();
        let mut project = ProjectConfig::new(dir.path());
        assert_eq!(project.product_name(), "Ares Engine");

        project.set("project", "product_name", "My Game");
        assert_eq!(project.product_name(), "My Game");
    }
}
