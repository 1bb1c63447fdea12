// macicon - core/mod.rs
//
// Core logic layer: size table, layout, pixel transforms, manifest model.
// Must NOT depend on: platform, app, or touch the filesystem directly.

pub mod compose;
pub mod geometry;
pub mod manifest;
pub mod mask;
pub mod sizes;
