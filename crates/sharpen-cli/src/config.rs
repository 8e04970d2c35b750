//! Loading `sharpen.json`.
//!
//! The file holds `AnalyzerOptions` in camelCase JSON with comments and
//! trailing commas allowed. An `"extends"` key names a base file, resolved
//! relative to the extending file; keys of the extending file override the
//! base key by key, recursing into nested objects.

use anyhow::{Context, Result, anyhow, bail};
use rustc_hash::FxHashSet;
use serde_json::{Map, Value};
use sharpen_ide::AnalyzerOptions;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "sharpen.json";

const EXTENDS_KEY: &str = "extends";

/// Options from `explicit`, or from `sharpen.json` in `cwd` when present,
/// or the defaults.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<AnalyzerOptions> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    let candidate = cwd.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        return load_config(&candidate);
    }
    tracing::debug!(cwd = %cwd.display(), "no config file, using defaults");
    Ok(AnalyzerOptions::default())
}

pub fn load_config(path: &Path) -> Result<AnalyzerOptions> {
    let mut visited = FxHashSet::default();
    let merged = load_config_inner(path, &mut visited)?;
    serde_json::from_value(merged)
        .with_context(|| format!("invalid configuration in {}", path.display()))
}

/// Parse a single config document, without following `extends`.
pub fn parse_config(source: &str) -> Result<AnalyzerOptions> {
    let mut value = parse_config_value(source)?;
    if let Value::Object(map) = &mut value {
        map.remove(EXTENDS_KEY);
    }
    serde_json::from_value(value).context("invalid configuration")
}

fn parse_config_value(source: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(&strip_jsonc(source)).context("failed to parse config JSON")?;
    if !value.is_object() {
        bail!("config must be a JSON object");
    }
    Ok(value)
}

fn load_config_inner(path: &Path, visited: &mut FxHashSet<PathBuf>) -> Result<Value> {
    let canonical = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(canonical.clone()) {
        bail!("config extends cycle detected at {}", canonical.display());
    }

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let mut value = parse_config_value(&source)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;

    let extends = match &mut value {
        Value::Object(map) => map.remove(EXTENDS_KEY),
        _ => None,
    };
    if let Some(extends) = extends {
        let Value::String(extends) = extends else {
            bail!("\"extends\" in {} must be a string", path.display());
        };
        let base_path = resolve_extends_path(path, &extends)?;
        tracing::debug!(config = %path.display(), base = %base_path.display(), "extending config");
        let base = load_config_inner(&base_path, visited)?;
        value = merge_values(base, value);
    }

    visited.remove(&canonical);
    Ok(value)
}

fn resolve_extends_path(current_path: &Path, extends: &str) -> Result<PathBuf> {
    let base_dir = current_path
        .parent()
        .ok_or_else(|| anyhow!("config has no parent directory"))?;
    let mut candidate = PathBuf::from(extends);
    if candidate.extension().is_none() {
        candidate.set_extension("json");
    }

    if candidate.is_absolute() {
        Ok(candidate)
    } else {
        Ok(base_dir.join(candidate))
    }
}

/// Child keys win; objects present on both sides merge recursively.
fn merge_values(base: Value, child: Value) -> Value {
    match (base, child) {
        (Value::Object(base), Value::Object(child)) => {
            let mut merged: Map<String, Value> = base;
            for (key, child_value) in child {
                let value = match merged.remove(&key) {
                    Some(base_value) => merge_values(base_value, child_value),
                    None => child_value,
                };
                merged.insert(key, value);
            }
            Value::Object(merged)
        }
        (_, child) => child,
    }
}

/// Reduce JSONC to plain JSON: comments and trailing commas are dropped.
fn strip_jsonc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            match ch {
                _ if escape => escape = false,
                '\\' => escape = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (ch, chars.peek().copied()) {
            ('/', Some('/')) => {
                // Keep the line break so parse errors report the right line.
                if chars.by_ref().any(|next| next == '\n') {
                    out.push('\n');
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut previous = '\0';
                for next in chars.by_ref() {
                    if previous == '*' && next == '/' {
                        break;
                    }
                    previous = next;
                }
            }
            ('}' | ']', _) => {
                let trimmed = out.trim_end();
                if trimmed.ends_with(',') {
                    let comma = trimmed.len() - 1;
                    out.truncate(comma);
                }
                out.push(ch);
            }
            ('"', _) => {
                in_string = true;
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }

    out
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod config_tests;
