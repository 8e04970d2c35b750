//! Library half of the `sharpen` binary: argument definitions, config and
//! snapshot loading, the diagnostic reporter and the command drivers.

pub mod args;
pub mod config;
pub mod driver;
pub mod reporter;
pub mod snapshot;
pub mod tracing_config;
