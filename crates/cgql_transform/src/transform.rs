//! Dispatch and the call-level entry point.

use cgql_core::diagnostics::codes;
use cgql_core::DiagnosticBag;
use tracing::{debug, warn};

use crate::error::TransformError;
use crate::literal::{Literal, Replacement};
use crate::segment::process_segment;
use crate::template::condense_template;

/// Transforms a single literal into its condensed replacement.
///
/// Plain strings are condensed with both outer edges trimmed; templates go
/// through per-segment reassembly. Anything else is rejected with
/// [`TransformError::UnsupportedLiteralKind`].
pub fn transform_literal<E>(lit: Literal<E>) -> Result<Replacement<E>, TransformError> {
    match lit {
        Literal::Str(s) => {
            debug!(span = ?s.span, "condensing string literal");
            Ok(Replacement::Str(process_segment(&s.value, true, true)))
        }
        Literal::Template(tpl) => {
            debug!(span = ?tpl.span, segments = tpl.segments.len(), "condensing template literal");
            condense_template(tpl)
        }
        Literal::Unsupported { kind, span } => {
            Err(TransformError::UnsupportedLiteralKind { kind, span })
        }
    }
}

/// Transforms the argument list of one macro invocation.
///
/// Exactly one literal argument is expected. Zero arguments is fatal. More
/// than one is advisory: a warning lands in `diagnostics`, the first
/// argument is processed and the rest are dropped. On a fatal error no
/// replacement is produced at all.
pub fn transform_call<E>(
    args: Vec<Literal<E>>,
    diagnostics: &mut DiagnosticBag,
) -> Result<Replacement<E>, TransformError> {
    let mut args = args.into_iter();
    let first = args.next().ok_or(TransformError::MissingArgument)?;

    let extra: Vec<_> = args.collect();
    if let Some(head) = extra.first() {
        let span = extra
            .iter()
            .fold(head.span(), |acc, lit| acc.merge(lit.span()));
        warn!(ignored = extra.len(), span = ?span, "extra arguments ignored");
        diagnostics.warning(
            codes::EXTRA_ARGUMENTS,
            "extra arguments ignored",
            span,
            format!(
                "{} extra argument(s) ignored; only the first literal is condensed",
                extra.len()
            ),
        );
    }

    transform_literal(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::StringLiteral;
    use cgql_core::Span;

    fn plain(value: &str) -> Literal<()> {
        let end = u32::try_from(value.len()).unwrap() + 2;
        Literal::Str(StringLiteral::new(Span::new(0, end), value))
    }

    #[test]
    fn test_plain_string_is_condensed_and_trimmed() {
        let result = transform_literal(plain("  a    b  ")).unwrap();
        assert_eq!(result, Replacement::Str("a b".into()));
    }

    #[test]
    fn test_unsupported_kind_is_fatal() {
        let lit: Literal<()> = Literal::Unsupported {
            kind: "numeric literal".into(),
            span: Span::new(3, 5),
        };
        let err = transform_literal(lit).unwrap_err();
        assert!(err.to_string().contains("numeric literal"));
    }

    #[test]
    fn test_no_arguments_is_fatal() {
        let mut diagnostics = DiagnosticBag::new();
        let err = transform_call::<()>(Vec::new(), &mut diagnostics).unwrap_err();
        assert_eq!(err, TransformError::MissingArgument);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_extra_arguments_warn_and_use_first() {
        let mut diagnostics = DiagnosticBag::new();
        let result =
            transform_call(vec![plain("a  b"), plain("ignored")], &mut diagnostics).unwrap();
        assert_eq!(result, Replacement::Str("a b".into()));
        assert_eq!(diagnostics.warnings().count(), 1);
        assert!(!diagnostics.has_errors());
    }
}
