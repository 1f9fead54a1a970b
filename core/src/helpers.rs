use syn::{punctuated::Punctuated, Attribute, Expr, Lit, Meta, Token, UnOp};

use crate::error::ParseError;

const DERIVE: &str = "derive";
const CHOICE_ENUM: &str = "ChoiceEnum";

/// Checks the given attrs for `#[derive(ChoiceEnum)]`, also as `choice_enum::ChoiceEnum`.
pub(crate) fn has_choice_enum_derive(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(DERIVE))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
                .ok()
        })
        .flatten()
        .any(|path| {
            path.segments
                .last()
                .is_some_and(|segment| segment.ident == CHOICE_ENUM)
        })
}

/// Parses any comment out of the given slice of attributes
pub(crate) fn parse_comment_attrs(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(name_value) if name_value.path.is_ident("doc") => {
                expr_to_string(&name_value.value)
            }
            _ => None,
        })
        .collect()
}

/// A member description taken from its doc comment: the non-empty lines joined by spaces.
pub(crate) fn doc_description(attrs: &[Attribute]) -> Option<String> {
    let lines = parse_comment_attrs(attrs)
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>();
    (!lines.is_empty()).then(|| lines.join(" "))
}

/// The `i64` value of an explicit discriminant such as `1`, `-1` or `(2)`.
pub(crate) fn discriminant_value(expr: &Expr, variant: &str) -> Result<i64, ParseError> {
    let out_of_range = || ParseError::ValueOutOfRange {
        variant: variant.to_string(),
    };

    match expr {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            Lit::Int(int) => int.base10_parse::<i64>().map_err(|_| out_of_range()),
            _ => Err(ParseError::NonLiteralValue {
                variant: variant.to_string(),
            }),
        },
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
            let magnitude = match unary.expr.as_ref() {
                Expr::Lit(expr_lit) => match &expr_lit.lit {
                    Lit::Int(int) => int.base10_parse::<i128>().map_err(|_| out_of_range())?,
                    _ => {
                        return Err(ParseError::NonLiteralValue {
                            variant: variant.to_string(),
                        })
                    }
                },
                _ => {
                    return Err(ParseError::NonLiteralValue {
                        variant: variant.to_string(),
                    })
                }
            };
            i64::try_from(-magnitude).map_err(|_| out_of_range())
        }
        Expr::Paren(paren) => discriminant_value(&paren.expr, variant),
        Expr::Group(group) => discriminant_value(&group.expr, variant),
        _ => Err(ParseError::NonLiteralValue {
            variant: variant.to_string(),
        }),
    }
}

/// The discriminant as written in the source, such as `0x10`, `-1` or `(2)`.
///
/// Only meaningful once [`discriminant_value`] accepted the expression.
pub(crate) fn discriminant_literal(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            Lit::Int(int) => Some(int.to_string()),
            _ => None,
        },
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
            discriminant_literal(&unary.expr).map(|literal| format!("-{literal}"))
        }
        Expr::Paren(paren) => {
            discriminant_literal(&paren.expr).map(|literal| format!("({literal})"))
        }
        Expr::Group(group) => discriminant_literal(&group.expr),
        _ => None,
    }
}

fn expr_to_string(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(expr_lit) => match &expr_lit.lit {
            Lit::Str(str) => Some(str.value().trim().to_string()),
            _ => None,
        },
        _ => None,
    }
}
