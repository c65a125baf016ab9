//! Neutral literal and replacement descriptions.
//!
//! These types are the whole surface a host shares with the core: a host
//! reads its own syntax tree into a [`Literal`], and splices the returned
//! [`Replacement`] back in however its tree API wants. Interpolation
//! expressions stay opaque; the core moves them through untouched.

use cgql_core::Span;

use crate::error::TransformError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A plain string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StringLiteral {
    /// Span of the whole literal, delimiters included.
    pub span: Span,
    /// The string value.
    pub value: String,
}

impl StringLiteral {
    /// Creates a new string literal description.
    pub fn new(span: Span, value: impl Into<String>) -> Self {
        Self {
            span,
            value: value.into(),
        }
    }
}

/// One static text chunk of a template literal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemplateSegment {
    /// Span of this segment within the source.
    pub span: Span,
    /// The raw segment text.
    pub raw: String,
}

impl TemplateSegment {
    /// Creates a new template segment.
    pub fn new(span: Span, raw: impl Into<String>) -> Self {
        Self {
            span,
            raw: raw.into(),
        }
    }
}

/// A template literal: text segments interleaved with opaque expressions.
///
/// The first and last entries of `segments` are always text; an empty
/// segment stands in when the literal begins or ends with an interpolation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemplateLiteral<E> {
    /// Span of the whole literal, delimiters included.
    pub span: Span,
    /// The static text segments, in order.
    pub segments: Vec<TemplateSegment>,
    /// The interpolation expressions, in order. `segments.len()` must be
    /// `expressions.len() + 1`.
    pub expressions: Vec<E>,
}

impl<E> TemplateLiteral<E> {
    /// Creates a new template literal description.
    pub fn new(span: Span, segments: Vec<TemplateSegment>, expressions: Vec<E>) -> Self {
        Self {
            span,
            segments,
            expressions,
        }
    }

    /// Checks the segment/expression count invariant.
    pub fn validate(&self) -> Result<(), TransformError> {
        if self.segments.len() == self.expressions.len() + 1 {
            Ok(())
        } else {
            Err(TransformError::InvariantViolation {
                segments: self.segments.len(),
                expressions: self.expressions.len(),
                span: self.span,
            })
        }
    }
}

/// A literal node as reported by a host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal<E> {
    /// A plain string literal.
    Str(StringLiteral),
    /// A template literal.
    Template(TemplateLiteral<E>),
    /// Anything else. `kind` is the host's name for the node kind and is
    /// echoed back in the resulting error.
    Unsupported {
        /// Host-reported kind name, e.g. `"integer literal"`.
        kind: String,
        /// Span of the offending node.
        span: Span,
    },
}

impl<E> Literal<E> {
    /// Returns the span of the described node.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Str(s) => s.span,
            Self::Template(t) => t.span,
            Self::Unsupported { span, .. } => *span,
        }
    }

    /// Returns a human-readable name for the node kind.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Str(_) => "string literal",
            Self::Template(_) => "template literal",
            Self::Unsupported { kind, .. } => kind,
        }
    }
}

/// The replacement a transformation produces.
///
/// Replacements carry no spans; they describe fresh nodes that have no
/// position until the host splices them in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Replacement<E> {
    /// A condensed plain string.
    Str(String),
    /// A condensed template: processed segment texts plus the original
    /// expressions, order preserved.
    Template {
        /// Processed segment texts.
        segments: Vec<String>,
        /// The untouched interpolation expressions.
        expressions: Vec<E>,
    },
}
