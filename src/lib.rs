// Library exports for testing
#[cfg(feature = "render")]
pub mod canvas;
pub mod config;
pub mod constants;
pub mod generator;
pub mod geometry;
pub mod logging;
pub mod placeholder;
