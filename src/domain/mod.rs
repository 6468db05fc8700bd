// Domain layer: pure Rust, no rendering
pub mod mock;
pub mod models;
