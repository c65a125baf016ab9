//! Core utilities for cgql.
//!
//! This crate provides foundational types used throughout cgql:
//! - `span`: Source location tracking
//! - `diagnostics`: Warning and error reporting

pub mod diagnostics;
pub mod span;

pub use diagnostics::{Diagnostic, DiagnosticBag, DiagnosticSeverity, Label};
pub use span::Span;
