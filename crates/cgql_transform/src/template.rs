//! Template literal reassembly.

use crate::error::TransformError;
use crate::literal::{Replacement, TemplateLiteral};
use crate::segment::process_segment;

/// Condenses every segment of a template literal.
///
/// Each segment is processed independently; whether its outer padding gets
/// trimmed depends on where it sits relative to the whole literal. A
/// segment starting right after the opening delimiter is first, a segment
/// ending right before the closing delimiter is last, and a template with
/// no interpolations has one segment that is both. The interpolation
/// expressions come back unchanged, in their original order.
pub fn condense_template<E>(tpl: TemplateLiteral<E>) -> Result<Replacement<E>, TransformError> {
    tpl.validate()?;

    // Inner bounds skip the literal's own delimiter characters.
    let inner_start = tpl.span.start + 1;
    let inner_end = tpl.span.end - 1;

    let segments = tpl
        .segments
        .iter()
        .map(|seg| {
            let is_first = seg.span.start == inner_start;
            let is_last = seg.span.end == inner_end;
            process_segment(&seg.raw, is_first, is_last)
        })
        .collect();

    Ok(Replacement::Template {
        segments,
        expressions: tpl.expressions,
    })
}
