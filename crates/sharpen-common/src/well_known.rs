//! Metadata names of types the analyzers look up by name.
//!
//! Names are namespace-qualified metadata names (`System.Attribute`), the key
//! used by `SymbolUniverse::type_by_metadata_name`.

// =============================================================================
// Core library
// =============================================================================

/// Root of every reference type.
pub const SYSTEM_OBJECT: &str = "System.Object";

/// Base of every struct.
pub const SYSTEM_VALUE_TYPE: &str = "System.ValueType";

pub const SYSTEM_ENUM: &str = "System.Enum";

pub const SYSTEM_STRING: &str = "System.String";

/// Base class a type must derive from to be usable as an attribute.
pub const SYSTEM_ATTRIBUTE: &str = "System.Attribute";

pub const ATTRIBUTE_USAGE_ATTRIBUTE: &str = "System.AttributeUsageAttribute";

pub const ATTRIBUTE_TARGETS: &str = "System.AttributeTargets";

// =============================================================================
// Attribute syntax
// =============================================================================

/// Qualified name written into generated `AttributeUsage` annotations.
pub const ATTRIBUTE_USAGE_SYNTAX: &str = "System.AttributeUsage";

/// Suffix that may be omitted when an attribute is named in source.
pub const ATTRIBUTE_SUFFIX: &str = "Attribute";

// =============================================================================
// UI frameworks
// =============================================================================

/// Default view type for the localisable string analyzer.
pub const XAMARIN_FORMS_VIEW: &str = "Xamarin.Forms.View";
