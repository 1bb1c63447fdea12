// macicon - lib.rs
//
// Library entry point, exposing the rendering pipeline for integration
// testing and programmatic use. The CLI lives in `main.rs`.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;

pub use app::renderer::{render, RenderOptions, RenderReport};
