// Inti App - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, chrono, serde, tracing.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod model;
pub mod status;
