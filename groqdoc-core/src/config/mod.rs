//! Configuration for groqdoc.
//! TOML-based, layered resolution: env > project file > defaults.

pub mod groqdoc_config;

pub use groqdoc_config::GroqdocConfig;
