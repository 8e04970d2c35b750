//! Analyzer configuration.
//!
//! Every field has a default, so any subset of keys may be given; unknown
//! keys are ignored.

use crate::formatting::FormattingOptions;
use crate::generator::AttributeTargets;
use serde::{Deserialize, Serialize};
use sharpen_common::{Severity, well_known};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzerOptions {
    pub localisable_string: LocalisableStringOptions,
    pub attribute_usage: AttributeUsageOptions,
    pub formatting: FormattingOptions,
    /// Run the simplifier after annotating.
    pub simplify: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            localisable_string: LocalisableStringOptions::default(),
            attribute_usage: AttributeUsageOptions::default(),
            formatting: FormattingOptions::default(),
            simplify: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalisableStringOptions {
    pub enabled: bool,
    /// Metadata name of the base view type.
    pub view_type: String,
    pub severity: Severity,
}

impl Default for LocalisableStringOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            view_type: well_known::XAMARIN_FORMS_VIEW.to_string(),
            severity: Severity::Warning,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeUsageOptions {
    pub target: AttributeTargets,
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod config_tests;
