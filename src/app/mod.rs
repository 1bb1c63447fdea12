// macicon - app/mod.rs
//
// Application layer: orchestrates core transforms and platform I/O.

pub mod prompt;
pub mod renderer;
