//! Pipeline module - orchestrates the build steps

pub mod config;
pub mod convert;
pub mod header;
pub mod render;
pub mod sanitize;
pub mod workspace;

pub use config::*;
pub use convert::*;
pub use header::*;
pub use render::*;
pub use sanitize::*;
pub use workspace::*;
