//! Ares Config - configuration inspection tool.
//!
//! Resolves the platform config directories, seeds missing default files,
//! loads all configuration domains, and reports where configuration lives.

use tracing_subscriber::EnvFilter;

use ares_config::{ConfigPaths, ConfigRegistry, Platform};

fn main() -> anyhow::Result<()> {
    // Structured logging; level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let paths = ConfigPaths::resolve()?;
    let mut registry = ConfigRegistry::new(paths);
    registry.initialize()?;

    println!(
        "{} {}",
        registry.project.product_name(),
        registry.build.version_string()
    );
    println!("Platform: {}", Platform::current());
    println!(
        "User config directory: {}",
        registry.paths().user_dir().display()
    );
    println!(
        "Bundled config directory: {}",
        registry.paths().bundled_dir().display()
    );
    println!(
        "Compiler flags: {}",
        registry.build.compiler_flags(Platform::current()).join(" ")
    );

    Ok(())
}
