//! Error types for parsing.
use proc_macro2::Span;
use thiserror::Error;

/// Wrapper for a parse error which includes a span.
#[derive(Debug)]
pub struct ParseErrorWithSpan {
    /// Parse error
    error: ParseError,
    /// Span
    span: Span,
}

impl ParseErrorWithSpan {
    /// The underlying error.
    pub fn error(&self) -> &ParseError {
        &self.error
    }

    /// Convert into a `syn::Error` so a proc-macro can emit it as `compile_error!`.
    pub fn into_syn_error(self) -> syn::Error {
        match self.error {
            ParseError::SynError(err) => err,
            error => syn::Error::new(self.span, error),
        }
    }
}

impl std::error::Error for ParseErrorWithSpan {}

impl std::fmt::Display for ParseErrorWithSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start = self.span.start();
        write!(
            f,
            "{}, on line {} and column {}",
            self.error, start.line, start.column
        )
    }
}

impl From<syn::Error> for ParseErrorWithSpan {
    fn from(err: syn::Error) -> Self {
        let span = err.span();
        ParseError::SynError(err).with_span(span)
    }
}

/// Errors that can occur while parsing a choice enum.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ParseError {
    #[error("{0}")]
    SynError(#[from] syn::Error),
    #[error("choice enum `{enum_ident}` cannot have generic parameters")]
    GenericEnum { enum_ident: String },
    #[error("variant `{variant}` of choice enum `{enum_ident}` must not have fields")]
    NonUnitVariant { enum_ident: String, variant: String },
    #[error("variant `{variant}` of choice enum `{enum_ident}` needs an integer value, e.g. `{variant} = 1`")]
    MissingValue { enum_ident: String, variant: String },
    #[error("the value of `{variant}` must be an integer literal")]
    NonLiteralValue { variant: String },
    #[error("the value of `{variant}` does not fit in an i64")]
    ValueOutOfRange { variant: String },
    #[error("choice enum `{enum_ident}` has more than one member named `{name}`")]
    DuplicateName { enum_ident: String, name: String },
}

/// Parse error types that can capture a span and convert
/// into the top level [ParseErrorWithSpan] type.
pub trait WithSpan {
    /// Convert [Self] into a [`ParseErrorWithSpan`].
    fn with_span(self, span: Span) -> ParseErrorWithSpan;
}

impl WithSpan for ParseError {
    fn with_span(self, span: Span) -> ParseErrorWithSpan {
        ParseErrorWithSpan { error: self, span }
    }
}
