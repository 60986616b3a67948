//! Build configuration domain: packaging, assets, versioning, and compiler
//! settings for the build pipeline.

use std::path::Path;

use crate::{
    domain::{ConfigDomain, DomainConfig},
    paths::Platform,
};

/// Default key/value table for the build domain.
const BUILD_DEFAULTS: &[(&str, &str, &str)] = &[
    // Packager section
    ("packager", "include_debug_files", "False"),
    ("packager", "create_installer", "True"),
    ("packager", "compression_level", "9"),
    ("packager", "onefile", "True"),
    ("packager", "icon_file", "ares/assets/icons/app.ico"),
    ("packager", "target_platform", "auto"),
    ("packager", "splash_screen", "ares/assets/images/splash.png"),
    ("packager", "add_version_info", "True"),
    ("packager", "company_name", "Ares Engine Team"),
    ("packager", "product_name", "Ares Engine"),
    (
        "packager",
        "file_description",
        "Cross-platform game engine with Cython acceleration",
    ),
    // Assets section
    ("assets", "compress_textures", "True"),
    ("assets", "audio_quality", "medium"),
    ("assets", "bundle_assets", "True"),
    (
        "assets",
        "exclude_patterns",
        "*.psd, *.xcf, *.blend, *.max, *.mb, *.ma, *.fbx",
    ),
    ("assets", "include_source_maps", "False"),
    ("assets", "convert_models", "True"),
    ("assets", "optimize_assets", "True"),
    ("assets", "asset_compression", "zlib"),
    // Version section
    ("version", "major", "0"),
    ("version", "minor", "1"),
    ("version", "patch", "0"),
    ("version", "release_type", "alpha"),
    ("version", "build", "auto"),
    // Build section
    ("build", "use_ninja", "True"),
    ("build", "optimize", "3"),
    ("build", "parallel", "True"),
    ("build", "inplace", "True"),
    ("build", "package_config", "package"),
    // Cython section
    ("cython", "language_level", "3"),
    ("cython", "boundscheck", "False"),
    ("cython", "wraparound", "False"),
    ("cython", "cdivision", "True"),
];

/// Build configuration backed by `build.ini`.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    domain: DomainConfig,
}

impl BuildConfig {
    /// Creates the build domain with its default table populated.
    #[must_use]
    pub fn new(user_dir: &Path) -> Self {
        Self {
            domain: DomainConfig::new("build", user_dir, BUILD_DEFAULTS),
        }
    }

    /// Maps the configured optimization level and debug-symbols flag into a
    /// platform-specific compiler flag list.
    ///
    /// `compiler.additional_flags` is whitespace-split and appended verbatim.
    #[must_use]
    pub fn compiler_flags(&self, platform: Platform) -> Vec<String> {
        let mut flags = Vec::new();

        let opt_level = self.get("compiler", "optimization_level", "O2");
        if platform == Platform::Windows {
            let flag = match opt_level.as_str() {
                "O0" => "/Od",
                "O1" => "/O1",
                "O3" => "/Ox",
                _ => "/O2",
            };
            flags.push(flag.to_string());

            if self.get_bool("compiler", "debug_symbols", false) {
                flags.push("/Zi".to_string());
            }
        } else {
            flags.push(format!("-{opt_level}"));

            if self.get_bool("compiler", "debug_symbols", false) {
                flags.push("-g".to_string());
            }
        }

        let additional = self.get("compiler", "additional_flags", "");
        flags.extend(additional.split_whitespace().map(str::to_string));

        flags
    }

    /// Formats the version as `major.minor.patch-release_type`.
    #[must_use]
    pub fn version_string(&self) -> String {
        let major = self.get_int("version", "major", 0);
        let minor = self.get_int("version", "minor", 1);
        let patch = self.get_int("version", "patch", 0);
        let release = self.get("version", "release_type", "alpha");

        format!("{major}.{minor}.{patch}-{release}")
    }

    /// Increments the patch version in memory; not persisted until `save()`.
    pub fn increment_patch_version(&mut self) {
        let current = self.get_int("version", "patch", 0);
        self.set("version", "patch", &(current + 1).to_string());
    }

    /// Name of the package configuration used for package data lookups.
    #[must_use]
    pub fn package_data_config(&self) -> String {
        self.get("build", "package_config", "package")
    }
}

impl ConfigDomain for BuildConfig {
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

    use crate::{
        domain::{ConfigDomain, build::BuildConfig},
        paths::Platform,
    };

    #[test]
    fn test_default_version_string() {
        let dir = tempdir().unwrap();
        let build = BuildConfig::new(dir.path());
        assert_eq!(build.version_string(), "0.1.0-alpha");
    }

    #[test]
    fn test_increment_patch_version_in_memory() {
        let dir = tempdir().unwrap();
        let mut build = BuildConfig::new(dir.path());
        build.increment_patch_version();
        assert_eq!(build.get_int("version", "patch", 0), 1);
        assert_eq!(build.version_string(), "0.1.1-alpha");
        // Nothing persisted yet
        assert!(!build.domain().path().exists());
    }

    #[test]
    fn test_compiler_flags_windows_tables() {
        let dir = tempdir().unwrap();
        let mut build = BuildConfig::new(dir.path());
        build.set("compiler", "optimization_level", "O3");

        let flags = build.compiler_flags(Platform::Windows);
        assert!(flags.contains(&"/Ox".to_string()));
        assert!(!flags.contains(&"/Zi".to_string()));

        build.set("compiler", "debug_symbols", "True");
        let flags = build.compiler_flags(Platform::Windows);
        assert!(flags.contains(&"/Zi".to_string()));

        build.set("compiler", "optimization_level", "O0");
        assert!(
            build
                .compiler_flags(Platform::Windows)
                .contains(&"/Od".to_string())
        );
    }

    #[test]
    fn test_compiler_flags_unix_tables() {
        let dir = tempdir().unwrap();
        let mut build = BuildConfig::new(dir.path());
        build.set("compiler", "optimization_level", "O3");

        let flags = build.compiler_flags(Platform::Linux);
        assert!(flags.contains(&"-O3".to_string()));
        assert!(!flags.contains(&"-g".to_string()));

        build.set("compiler", "debug_symbols", "True");
        let flags = build.compiler_flags(Platform::MacOs);
        assert!(flags.contains(&"-g".to_string()));
    }

    #[test]
    fn test_compiler_flags_unknown_level_defaults_to_o2() {
        let dir = tempdir().unwrap();
        let mut build = BuildConfig::new(dir.path());
        build.set("compiler", "optimization_level", "Ofast");

        assert!(
            build
                .compiler_flags(Platform::Windows)
                .contains(&"/O2".to_string())
        );
    }

    #[test]
    fn test_additional_flags_appended_verbatim() {
        let dir = tempdir().unwrap();
        let mut build = BuildConfig::new(dir.path());
        build.set("compiler", "additional_flags", "-march=native  -flto");

        let flags = build.compiler_flags(Platform::Linux);
        assert_eq!(flags[0], "-O2");
        assert!(flags.contains(&"-march=native".to_string()));
        assert!(flags.contains(&"-flto".to_string()));
    }

    #[test]
    fn test_default_table_values() {
        let dir = tempdir().unwrap();
        let build = BuildConfig::new(dir.path());
        assert!(build.get_bool("build", "use_ninja", false));
        assert_eq!(build.get_int("packager", "compression_level", 0), 9);
        assert!(!build.get_bool("cython", "boundscheck", true));
        assert_eq!(build.package_data_config(), "package");
    }
}
