use crate::{
    choice_attrs::{ChoiceEnumAttrs, ChoiceMemberAttrs},
    context::ParseFileContext,
    error::{ParseError, ParseErrorWithSpan, WithSpan},
    helpers::{
        discriminant_literal, discriminant_value, doc_description, has_choice_enum_derive,
        parse_comment_attrs,
    },
    inline_comment::inline_description,
    parsed_types::{ParsedChoiceEnum, ParsedData, ParsedMember},
};
use log::debug;
use std::collections::HashSet;
use syn::{spanned::Spanned, Fields, Item, ItemEnum};

/// Quick filter: files that never name the derive hold no choice enums.
const CHOICE_ENUM: &str = "ChoiceEnum";

/// Parse the given Rust source into the choice enums it declares.
///
/// Returns `None` when the file declares none.
pub fn parse(
    ParseFileContext {
        source_code,
        file_path,
    }: ParseFileContext,
) -> Result<Option<ParsedData>, ParseErrorWithSpan> {
    // We will only produce output for files that contain the derive, so this
    // is a quick and easy performance win.
    if !source_code.contains(CHOICE_ENUM) {
        debug!("skipping {}", file_path.display());
        return Ok(None);
    }

    let file = syn::parse_file(&source_code)?;

    let enums = flatten_items(file.items.iter())
        .filter_map(|item| match item {
            Item::Enum(e) if has_choice_enum_derive(&e.attrs) => Some(e),
            _ => None,
        })
        .map(|e| parse_choice_enum(e, Some(&source_code)))
        .collect::<Result<Vec<_>, _>>()?;

    if enums.is_empty() {
        return Ok(None);
    }

    debug!(
        "parsed {} choice enum(s) from {}",
        enums.len(),
        file_path.display()
    );
    Ok(Some(ParsedData { file_path, enums }))
}

/// Given an iterator over items, will return an iterator that flattens the contents of embedded
/// module items into the iterator.
fn flatten_items<'a>(items: impl Iterator<Item = &'a Item>) -> impl Iterator<Item = &'a Item> {
    items.flat_map(|item| {
        match item {
            Item::Mod(syn::ItemMod {
                content: Some((_, items)),
                ..
            }) => flatten_items(items.iter()).collect(),
            item => vec![item],
        }
        .into_iter()
    })
}

/// Parses a `#[derive(ChoiceEnum)]` enum.
///
/// Descriptions come from `#[choice(description)]`, then doc comments. For an
/// enum marked `#[choice(source = "...")]`, trailing `//` comments in
/// `source` fill in members that have neither. The derive passes
/// `source: None` and resolves those at runtime from the included file, so
/// both ways of reading an enum agree on its descriptions.
pub fn parse_choice_enum(
    e: &ItemEnum,
    source: Option<&str>,
) -> Result<ParsedChoiceEnum, ParseErrorWithSpan> {
    let enum_ident = e.ident.to_string();

    if !e.generics.params.is_empty() {
        return Err(ParseError::GenericEnum { enum_ident }.with_span(e.generics.span()));
    }

    let enum_attrs = ChoiceEnumAttrs::from_attrs(&e.attrs)?;
    // Trailing comments are only read for enums with `#[choice(source)]`.
    let inline_text = source.filter(|_| enum_attrs.source.is_some());

    let mut names = HashSet::new();
    let mut members = Vec::with_capacity(e.variants.len());
    for variant in &e.variants {
        let ident = variant.ident.to_string();
        let variant_span = variant.span();

        if !matches!(variant.fields, Fields::Unit) {
            return Err(ParseError::NonUnitVariant {
                enum_ident,
                variant: ident,
            }
            .with_span(variant.fields.span()));
        }

        let (value, literal) = match &variant.discriminant {
            Some((_, expr)) => (
                discriminant_value(expr, &ident).map_err(|err| err.with_span(expr.span()))?,
                discriminant_literal(expr).unwrap_or_default(),
            ),
            None => {
                return Err(ParseError::MissingValue {
                    enum_ident,
                    variant: ident,
                }
                .with_span(variant_span))
            }
        };

        let member_attrs = ChoiceMemberAttrs::from_attrs(&variant.attrs)?;
        let name = member_attrs
            .rename
            .or_else(|| enum_attrs.rename_all.map(|rule| rule.apply(&ident)))
            .unwrap_or_else(|| ident.clone());

        if !names.insert(name.clone()) {
            return Err(ParseError::DuplicateName { enum_ident, name }.with_span(variant_span));
        }

        let description = member_attrs
            .description
            .filter(|description| !description.is_empty())
            .or_else(|| doc_description(&variant.attrs))
            .or_else(|| {
                let found = inline_description(inline_text?, &enum_ident, &ident, &literal);
                if found.is_none() {
                    debug!("no trailing comment for {enum_ident}::{ident}");
                }
                found
            });

        members.push(ParsedMember {
            ident,
            name,
            value,
            literal,
            description,
        });
    }

    Ok(ParsedChoiceEnum {
        ident: enum_ident,
        comments: parse_comment_attrs(&e.attrs),
        members,
        inline_source: enum_attrs.source,
    })
}
