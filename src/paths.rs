//! Platform-specific directory resolution for persisted configuration.
//!
//! This module derives the user-writable configuration directory following
//! each platform's convention and resolves the bundled default-file source
//! directory, honoring the `ARES_CONFIG_DIR` environment override.

use std::{
    env::var,
    fmt::{Display, Formatter, Result as FmtResult},
    fs::create_dir_all,
    io::Error as StdError,
    path::PathBuf,
};

use tracing::info;

/// Top-level directory name under the platform base path.
const CONFIG_BASE: &str = "AresEngine";

/// Application directory name used for the XDG data-dir scheme on Linux.
const XDG_APP_DIR: &str = "ares-engine";

/// Environment variable overriding the bundled default-config directory.
pub const CONFIG_DIR_ENV: &str = "ARES_CONFIG_DIR";

/// Supported platform identifiers for path resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows (local app data convention).
    Windows,
    /// macOS (Application Support convention).
    MacOs,
    /// Linux and other Unix-likes (XDG data-dir convention).
    Linux,
}

impl Platform {
    /// Returns the platform the binary was compiled for.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Directory name used as the last path component (`Saved/Config/<name>`).
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "MacOS",
            Platform::Linux => "Linux",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.dir_name())
    }
}

/// Resolved configuration directories, computed once at startup.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User-writable runtime config directory.
    user_dir: PathBuf,
    /// Bundled default-config source directory.
    bundled_dir: PathBuf,
}

impl ConfigPaths {
    /// Resolves both directories for the current platform and creates them.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if either directory cannot be created.
    pub fn resolve() -> Result<Self, StdError> {
        let paths = Self {
            user_dir: user_config_dir(Platform::current()),
            bundled_dir: bundled_config_dir(),
        };
        create_dir_all(&paths.user_dir)?;
        create_dir_all(&paths.bundled_dir)?;
        Ok(paths)
    }

    /// Creates paths from explicit directories (for testing).
    #[must_use]
    pub fn with_dirs(user_dir: PathBuf, bundled_dir: PathBuf) -> Self {
        Self {
            user_dir,
            bundled_dir,
        }
    }

    /// The user-writable runtime config directory.
    #[must_use]
    pub fn user_dir(&self) -> &PathBuf {
        &self.user_dir
    }

    /// The bundled default-config source directory.
    #[must_use]
    pub fn bundled_dir(&self) -> &PathBuf {
        &self.bundled_dir
    }
}

/// Returns the user config directory for the given platform.
///
/// The result always ends in `Saved/Config/<PlatformName>`:
/// - Windows: `%LOCALAPPDATA%\AresEngine\Saved\Config\Windows`
/// - macOS: `~/Library/Application Support/AresEngine/Saved/Config/MacOS`
/// - Linux: `$XDG_DATA_HOME/ares-engine/Saved/Config/Linux`, defaulting to
///   `~/.local/share/ares-engine` per the XDG Base Directory specification
///
/// Missing environment variables fall back to home-relative defaults; this
/// function never fails.
#[must_use]
pub fn user_config_dir(platform: Platform) -> PathBuf {
    let base = match platform {
        Platform::Windows => {
            let local_app_data = if let Ok(dir) = var("LOCALAPPDATA")
                && !dir.is_empty()
            {
                PathBuf::from(dir)
            } else {
                home_dir().join("AppData").join("Local")
            };
            local_app_data.join(CONFIG_BASE)
        }
        Platform::MacOs => home_dir()
            .join("Library")
            .join("Application Support")
            .join(CONFIG_BASE),
        Platform::Linux => {
            let data_home = if let Ok(dir) = var("XDG_DATA_HOME")
                && !dir.is_empty()
            {
                PathBuf::from(dir)
            } else {
                home_dir().join(".local").join("share")
            };
            data_home.join(XDG_APP_DIR)
        }
    };

    base.join("Saved").join("Config").join(platform.dir_name())
}

/// Returns the bundled default-config source directory.
///
/// Uses `ARES_CONFIG_DIR` when set, otherwise the crate's bundled `ini`
/// directory.
#[must_use]
pub fn bundled_config_dir() -> PathBuf {
    if let Ok(dir) = var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        info!("Using configuration directory from environment: {}", dir);
        return PathBuf::from(dir);
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("ini")
}

/// Gets the home directory from `HOME`, falling back to `USERPROFILE`.
///
/// Falls back to the current directory if neither is set (shouldn't happen
/// on any supported platform).
fn home_dir() -> PathBuf {
    if let Ok(home) = var("HOME")
        && !home.is_empty()
    {
        return PathBuf::from(home);
    }

    if let Ok(profile) = var("USERPROFILE")
        && !profile.is_empty()
    {
        return PathBuf::from(profile);
    }

    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::paths::{ConfigPaths, Platform, user_config_dir};

    #[test]
    fn test_platform_dir_names() {
        assert_eq!(Platform::Windows.dir_name(), "Windows");
        assert_eq!(Platform::MacOs.dir_name(), "MacOS");
        assert_eq!(Platform::Linux.dir_name(), "Linux");
        assert_eq!(Platform::Linux.to_string(), "Linux");
    }

    #[test]
    fn test_user_config_dir_suffix_per_platform() {
        for platform in [Platform::Windows, Platform::MacOs, Platform::Linux] {
            let dir = user_config_dir(platform);
            let suffix = Path::new("Saved")
                .join("Config")
                .join(platform.dir_name());
            assert!(
                dir.ends_with(&suffix),
                "{} does not end with {}",
                dir.display(),
                suffix.display()
            );
        }
    }

    #[test]
    fn test_macos_dir_uses_application_support() {
        let dir = user_config_dir(Platform::MacOs);
        let components: Vec<_> = dir
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        assert!(components.contains(&"Application Support".to_string()));
        assert!(components.contains(&"AresEngine".to_string()));
    }

    #[test]
    fn test_with_dirs_keeps_explicit_paths() {
        let paths = ConfigPaths::with_dirs("/tmp/user".into(), "/tmp/bundled".into());
        assert_eq!(paths.user_dir(), Path::new("/tmp/user"));
        assert_eq!(paths.bundled_dir(), Path::new("/tmp/bundled"));
    }
}
