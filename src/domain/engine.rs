//! Engine runtime configuration domain: display, graphics, audio, and input
//! settings.

use std::path::Path;

use crate::domain::{ConfigDomain, DomainConfig};

/// Default key/value table for the engine domain.
const ENGINE_DEFAULTS: &[(&str, &str, &str)] = &[
    // Display section
    ("display", "width", "1280"),
    ("display", "height", "720"),
    ("display", "fullscreen", "False"),
    ("display", "resizable", "True"),
    ("display", "vsync", "True"),
    // Graphics section
    ("graphics", "renderer", "auto"),
    ("graphics", "msaa_samples", "4"),
    ("graphics", "texture_filtering", "anisotropic"),
    ("graphics", "max_fps", "0"),
    // Audio section
    ("audio", "frequency", "44100"),
    ("audio", "channels", "2"),
    ("audio", "buffer_size", "1024"),
    ("audio", "master_volume", "100"),
    // Input section
    ("input", "controller_support", "True"),
    ("input", "controller_deadzone", "8000"),
    ("input", "key_repeat_delay", "500"),
    // Debug section
    ("debug", "show_fps", "False"),
    ("debug", "log_level", "info"),
];

/// Engine configuration backed by `engine.ini`.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    domain: DomainConfig,
}

impl EngineConfig {
    /// Creates the engine domain with its default table populated.
    #[must_use]
    pub fn new(user_dir: &Path) -> Self {
        Self {
            domain: DomainConfig::new("engine", user_dir, ENGINE_DEFAULTS),
        }
    }

    /// The configured window resolution as `(width, height)`.
    #[must_use]
    pub fn resolution(&self) -> (i64, i64) {
        (
            self.get_int("display", "width", 1280),
            self.get_int("display", "height", 720),
        )
    }
}

impl ConfigDomain for EngineConfig {
    fn domain(&self) -> &DomainConfig {
        &self.domain
    }

    fn domain_mut(&mut self) -> &mut DomainConfig {
        &mut self.domain
    }
}
