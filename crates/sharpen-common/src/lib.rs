//! Common types and utilities for the sharpen analyzer toolkit.
//!
//! This crate provides foundational types used across all sharpen crates:
//! - Source spans (`Span`)
//! - Position/Range types and the `LineMap` for line/column conversion
//! - Diagnostic records and descriptors
//! - Cooperative cancellation (`CancellationToken`, `Cancelled`)
//! - Metadata names of well-known types

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position/Range types for line/column source locations
pub mod position;
pub use position::{LineMap, Position, Range};

// Diagnostic records reported to the host
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticDescriptor, Location, Severity};

// Polled cancellation shared across one logical operation
pub mod cancellation;
pub use cancellation::{CancellationToken, Cancelled};

// Metadata names of well-known types
pub mod well_known;
