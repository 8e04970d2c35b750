//! Log output for the `sharpen` binary.
//!
//! Logging is off unless `SHARPEN_LOG` (or `RUST_LOG`) carries filter
//! directives. `SHARPEN_LOG_FORMAT` picks `text` (default), `tree` for an
//! indented span hierarchy, or `json`. Everything goes to stderr.
//!
//! ```bash
//! SHARPEN_LOG=sharpen_ide=trace SHARPEN_LOG_FORMAT=tree sharpen check workspace.json
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};
use tracing_tree::HierarchicalLayer;

const LOG_VAR: &str = "SHARPEN_LOG";
const LOG_FORMAT_VAR: &str = "SHARPEN_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("tree") {
            Self::Tree
        } else if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// The directives to install: `SHARPEN_LOG` over `RUST_LOG`, blank
/// values ignored.
pub fn filter_directives(sharpen_log: Option<String>, rust_log: Option<String>) -> Option<String> {
    [sharpen_log, rust_log]
        .into_iter()
        .flatten()
        .find(|directives| !directives.trim().is_empty())
}

pub fn init_tracing() {
    let Some(directives) = filter_directives(std::env::var(LOG_VAR).ok(), std::env::var("RUST_LOG").ok())
    else {
        return;
    };
    let registry = tracing_subscriber::registry().with(EnvFilter::builder().parse_lossy(directives));
    let format = LogFormat::parse(&std::env::var(LOG_FORMAT_VAR).unwrap_or_default());
    match format {
        LogFormat::Text => registry.with(fmt::layer().with_writer(std::io::stderr)).init(),
        LogFormat::Tree => registry
            .with(HierarchicalLayer::new(2).with_targets(true).with_deferred_spans(true))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}
