//! Host-neutral whitespace condensing for GraphQL literals.
//!
//! This crate implements the transformation behind the `condense!` macro
//! without knowing anything about a particular syntax tree. A host hands it
//! a neutral description of a literal (kind, span, text or segments) and
//! receives a neutral description of the replacement back; splicing that
//! replacement into the host's tree is the host's job.
//!
//! - `condense`: The whitespace condensing algorithm
//! - `segment`: Padding trimming and per-segment processing
//! - `literal`: The neutral literal and replacement data model
//! - `template`: Template literal reassembly
//! - `transform`: Dispatch and the call-level entry point
//! - `error`: Typed fatal errors

pub mod condense;
pub mod error;
pub mod literal;
pub mod segment;
pub mod template;
pub mod transform;

pub use condense::condense;
pub use error::TransformError;
pub use literal::{Literal, Replacement, StringLiteral, TemplateLiteral, TemplateSegment};
pub use segment::{process_segment, trim_leading_space, trim_trailing_space};
pub use template::condense_template;
pub use transform::{transform_call, transform_literal};
