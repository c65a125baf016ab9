//! Typed fatal errors for the transformation.

use cgql_core::diagnostics::{codes, Diagnostic};
use cgql_core::Span;
use thiserror::Error;

/// A fatal condition that aborts a single transformation call.
///
/// Advisory conditions (extra arguments) are not errors; they go through
/// the [`DiagnosticBag`](cgql_core::DiagnosticBag) side channel instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The transformation was invoked with no literal argument.
    #[error("expected a string or template literal argument, found none")]
    MissingArgument,

    /// The supplied node is neither a plain string nor a template literal.
    #[error("cannot condense a {kind} at bytes {span}: only plain string and template literals are supported")]
    UnsupportedLiteralKind {
        /// Host-reported name of the offending kind.
        kind: String,
        /// Span of the offending node.
        span: Span,
    },

    /// A template literal whose segment and expression counts don't line up.
    #[error("template literal at bytes {span} has {segments} segment(s) for {expressions} expression(s); expected one more segment than expressions")]
    InvariantViolation {
        /// Number of text segments reported by the host.
        segments: usize,
        /// Number of interpolation expressions reported by the host.
        expressions: usize,
        /// Span of the template literal.
        span: Span,
    },
}

impl TransformError {
    /// Returns the stable diagnostic code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingArgument => codes::MISSING_ARGUMENT,
            Self::UnsupportedLiteralKind { .. } => codes::UNSUPPORTED_LITERAL,
            Self::InvariantViolation { .. } => codes::SEGMENT_COUNT_MISMATCH,
        }
    }

    /// Returns the span of the offending construct, if one is known.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::MissingArgument => None,
            Self::UnsupportedLiteralKind { span, .. }
            | Self::InvariantViolation { span, .. } => Some(*span),
        }
    }

    /// Converts this error into a diagnostic, for hosts that collect
    /// diagnostics rather than propagate errors.
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code(), self.to_string());
        match self.span() {
            Some(span) => diag.with_span(span, "in this literal"),
            None => diag,
        }
    }
}
