//! Procedural macros for condensing GraphQL literals at compile time.
//!
//! The macros here are the host adapter around [`cgql_transform`]: they read
//! literal arguments out of the invocation token stream, describe them to
//! the host-neutral core, and splice the condensed replacement back in.
//!
//! # Example
//!
//! ```ignore
//! use cgql_macros::condense;
//!
//! // A plain string literal condenses to a `&'static str`.
//! let query = condense!("query {\n  viewer {\n    id\n  }\n}");
//! assert_eq!(query, "query{viewer{id}}");
//!
//! // String segments interleaved with `{ ... }` interpolations condense
//! // to a `format!` call; the expressions are left untouched.
//! let id = 42;
//! let query = condense!("query {\n  user(id: " {id} ") { name }\n}");
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{braced, Expr, Lit, LitStr, Token};

use cgql_core::{DiagnosticBag, Span};
use cgql_transform::{
    transform_call, Literal, Replacement, StringLiteral, TemplateLiteral, TemplateSegment,
    TransformError,
};

/// Condenses a string or template literal at compile time.
///
/// Accepts either a single string literal, or string segments interleaved
/// with brace-wrapped interpolation expressions. Extra comma-separated
/// arguments are ignored with a compile-time warning; anything that is not
/// a string segment or interpolation is a compile error naming the kind.
#[proc_macro]
pub fn condense(input: TokenStream) -> TokenStream {
    expand(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Alias for [`condense!`], matching the original package name.
#[proc_macro]
pub fn condense_graphql(input: TokenStream) -> TokenStream {
    expand(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// One comma-separated macro argument.
enum MacroArg {
    /// A single string literal.
    Plain(LitStr),
    /// String segments interleaved with `{ ... }` interpolations. Always
    /// one more segment than expressions; empty segments stand in where
    /// the argument begins or ends with an interpolation.
    Template {
        segments: Vec<LitStr>,
        expressions: Vec<Expr>,
    },
    /// Any other literal or expression, kept for the core to reject.
    Unsupported {
        kind: &'static str,
        span: proc_macro2::Span,
    },
}

impl MacroArg {
    /// The invocation-site span used for error reporting.
    fn site(&self) -> proc_macro2::Span {
        match self {
            Self::Plain(lit) => lit.span(),
            Self::Template { segments, .. } => segments
                .first()
                .map_or_else(proc_macro2::Span::call_site, LitStr::span),
            Self::Unsupported { span, .. } => *span,
        }
    }
}

impl Parse for MacroArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if !input.peek(LitStr) && !input.peek(syn::token::Brace) {
            let expr: Expr = input.parse()?;
            let kind = match &expr {
                Expr::Lit(lit) => lit_kind(&lit.lit),
                _ => "expression",
            };
            return Ok(Self::Unsupported {
                kind,
                span: expr.span(),
            });
        }

        let mut segments: Vec<LitStr> = Vec::new();
        let mut expressions: Vec<Expr> = Vec::new();
        let mut last_was_segment = false;

        while !input.is_empty() && !input.peek(Token![,]) {
            if input.peek(LitStr) {
                if last_was_segment {
                    return Err(input
                        .error("expected a `{ ... }` interpolation between string segments"));
                }
                segments.push(input.parse()?);
                last_was_segment = true;
            } else if input.peek(syn::token::Brace) {
                if !last_was_segment {
                    // Stand-in for a template beginning with (or chaining)
                    // interpolations.
                    segments.push(LitStr::new("", input.span()));
                }
                let content;
                braced!(content in input);
                expressions.push(content.parse()?);
                last_was_segment = false;
            } else {
                return Err(input.error(
                    "expected a string literal segment or a `{ ... }` interpolation",
                ));
            }
        }

        if !last_was_segment {
            segments.push(LitStr::new("", input.span()));
        }

        if expressions.is_empty() {
            // With no interpolations the loop pushed exactly one segment.
            match segments.pop() {
                Some(lit) => Ok(Self::Plain(lit)),
                None => Err(input.error("expected a string literal")),
            }
        } else {
            Ok(Self::Template {
                segments,
                expressions,
            })
        }
    }
}

struct CondenseInput {
    args: Vec<MacroArg>,
}

impl Parse for CondenseInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let args = Punctuated::<MacroArg, Token![,]>::parse_terminated(input)?;
        Ok(Self {
            args: args.into_iter().collect(),
        })
    }
}

fn expand(input: TokenStream2) -> syn::Result<TokenStream2> {
    let CondenseInput { args } = syn::parse2(input)?;

    let first_site = args
        .first()
        .map_or_else(proc_macro2::Span::call_site, MacroArg::site);

    // Keep the pieces we need to rebuild tokens from the replacement.
    let spans: Vec<proc_macro2::Span> = args.iter().map(MacroArg::site).collect();
    let literals: Vec<Literal<Expr>> = args.into_iter().map(describe).collect();

    let mut diagnostics = DiagnosticBag::new();
    let replacement = transform_call(literals, &mut diagnostics)
        .map_err(|err| error_at(&err, first_site, &spans))?;

    let output = match replacement {
        Replacement::Str(value) => {
            let lit = LitStr::new(&value, first_site);
            lit.into_token_stream()
        }
        Replacement::Template {
            segments,
            expressions,
        } => {
            let fmt = segments
                .iter()
                .map(|s| escape_braces(s))
                .collect::<Vec<_>>()
                .join("{}");
            let fmt = LitStr::new(&fmt, first_site);
            quote! { ::std::format!(#fmt #(, #expressions)*) }
        }
    };

    let shims: Vec<TokenStream2> = diagnostics
        .warnings()
        .map(|d| {
            let note = match &d.message {
                Some(message) => format!("{}: {}", d.title, message),
                None => d.title.clone(),
            };
            warning_shim(&note)
        })
        .collect();

    if shims.is_empty() {
        Ok(output)
    } else {
        Ok(quote! {{ #(#shims)* #output }})
    }
}

/// Describes one parsed argument to the host-neutral core, synthesizing
/// byte offsets as if the literal were written `` `seg0${e0}seg1...` ``
/// with one-byte delimiters. Only the first/last position tests depend on
/// these offsets, and those hold by construction.
fn describe(arg: MacroArg) -> Literal<Expr> {
    match arg {
        MacroArg::Plain(lit) => {
            let value = lit.value();
            let end = offset(value.len()) + 2;
            Literal::Str(StringLiteral::new(Span::new(0, end), value))
        }
        MacroArg::Template {
            segments,
            expressions,
        } => {
            let mut pos = 1u32;
            let mut segs = Vec::with_capacity(segments.len());
            for (i, lit) in segments.iter().enumerate() {
                let raw = lit.value();
                let end = pos + offset(raw.len());
                segs.push(TemplateSegment::new(Span::new(pos, end), raw));
                pos = end;
                if let Some(expr) = expressions.get(i) {
                    let rendered = expr.to_token_stream().to_string();
                    pos += offset(rendered.len()) + 3; // ${ ... }
                }
            }
            Literal::Template(TemplateLiteral::new(
                Span::new(0, pos + 1),
                segs,
                expressions,
            ))
        }
        MacroArg::Unsupported { kind, span } => {
            let len = offset(span.source_text().map_or(1, |t| t.len().max(1)));
            Literal::Unsupported {
                kind: kind.to_string(),
                span: Span::new(0, len),
            }
        }
    }
}

fn error_at(
    err: &TransformError,
    first_site: proc_macro2::Span,
    spans: &[proc_macro2::Span],
) -> syn::Error {
    // Fatal errors always concern the first (or absent) argument.
    let site = spans.first().copied().unwrap_or(first_site);
    syn::Error::new(site, err.to_string())
}

/// Emits a block that trips the `deprecated` lint, the stable way to
/// surface a warning from a macro expansion.
fn warning_shim(note: &str) -> TokenStream2 {
    quote! {
        {
            #[deprecated(note = #note)]
            #[allow(non_upper_case_globals)]
            const extra_arguments_ignored: () = ();
            let _ = extra_arguments_ignored;
        }
    }
}

/// Escapes literal braces so condensed text survives `format!`.
fn escape_braces(s: &str) -> String {
    s.replace('{', "{{").replace('}', "}}")
}

fn lit_kind(lit: &Lit) -> &'static str {
    match lit {
        Lit::Str(_) => "string literal",
        Lit::ByteStr(_) => "byte string literal",
        Lit::Byte(_) => "byte literal",
        Lit::Char(_) => "character literal",
        Lit::Int(_) => "integer literal",
        Lit::Float(_) => "float literal",
        Lit::Bool(_) => "boolean literal",
        _ => "literal",
    }
}

/// Byte length as a span offset. Macro input never approaches `u32::MAX`.
fn offset(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
