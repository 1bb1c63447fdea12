// macicon - platform/mod.rs
//
// Platform abstraction layer: config directory, config.toml, image files.
// Must NOT depend on: app.

pub mod config;
pub mod fs;
