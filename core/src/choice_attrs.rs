//! `#[choice(...)]` attribute arguments.
use crate::rename::RenameRule;

use std::ops::Add;
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, LitStr, Token};

pub const CHOICE_ATTR: &str = "choice";

mod keywords {
    syn::custom_keyword!(rename);
    syn::custom_keyword!(rename_all);
    syn::custom_keyword!(description);
    syn::custom_keyword!(source);
}

/// Arguments on the enum: `#[choice(rename_all = "snake_case", source = "file.rs")]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChoiceEnumAttrs {
    pub rename_all: Option<RenameRule>,
    pub source: Option<String>,
}

impl ChoiceEnumAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self, syn::Error> {
        choice_attrs(attrs)
    }
}

impl Add for ChoiceEnumAttrs {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            rename_all: self.rename_all.or(rhs.rename_all),
            source: self.source.or(rhs.source),
        }
    }
}

impl Parse for ChoiceEnumAttrs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut result = Self::default();
        while !input.is_empty() {
            let lookahead = input.lookahead1();
            if lookahead.peek(keywords::rename_all) {
                input.parse::<keywords::rename_all>()?;
                input.parse::<Token![=]>()?;
                let rule = input.parse::<LitStr>()?;
                let parsed = rule.value().parse::<RenameRule>().map_err(|_| {
                    syn::Error::new(
                        rule.span(),
                        format!("unknown rename rule `{}`", rule.value()),
                    )
                })?;
                result.rename_all = Some(parsed);
            } else if lookahead.peek(keywords::source) {
                input.parse::<keywords::source>()?;
                input.parse::<Token![=]>()?;
                result.source = Some(input.parse::<LitStr>()?.value());
            } else {
                return Err(lookahead.error());
            }
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(result)
    }
}

/// Arguments on a variant: `#[choice(rename = "...", description = "...")]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChoiceMemberAttrs {
    pub rename: Option<String>,
    pub description: Option<String>,
}

impl ChoiceMemberAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self, syn::Error> {
        choice_attrs(attrs)
    }
}

impl Add for ChoiceMemberAttrs {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            rename: self.rename.or(rhs.rename),
            description: self.description.or(rhs.description),
        }
    }
}

impl Parse for ChoiceMemberAttrs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut result = Self::default();
        while !input.is_empty() {
            let lookahead = input.lookahead1();
            if lookahead.peek(keywords::rename) {
                input.parse::<keywords::rename>()?;
                input.parse::<Token![=]>()?;
                result.rename = Some(input.parse::<LitStr>()?.value());
            } else if lookahead.peek(keywords::description) {
                input.parse::<keywords::description>()?;
                input.parse::<Token![=]>()?;
                result.description = Some(input.parse::<LitStr>()?.value().trim().to_string());
            } else {
                return Err(lookahead.error());
            }
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(result)
    }
}

/// Merge every `#[choice(...)]` attribute in `attrs`; the first occurrence of an argument wins.
fn choice_attrs<T>(attrs: &[Attribute]) -> Result<T, syn::Error>
where
    T: Parse + Default + Add<Output = T>,
{
    let mut result = T::default();
    for attr in attrs {
        if attr.path().is_ident(CHOICE_ATTR) {
            result = result + attr.parse_args::<T>()?;
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{parse_quote, ItemEnum};

    #[test]
    fn enum_attrs() {
        let item: ItemEnum = parse_quote! {
            #[derive(ChoiceEnum)]
            #[choice(rename_all = "snake_case")]
            #[choice(source = "email.rs")]
            enum EmailType { Other = 0 }
        };
        let attrs = ChoiceEnumAttrs::from_attrs(&item.attrs).unwrap();
        assert_eq!(attrs.rename_all, Some(RenameRule::Snake));
        assert_eq!(attrs.source.as_deref(), Some("email.rs"));
    }

    #[test]
    fn member_attrs() {
        let item: ItemEnum = parse_quote! {
            enum EmailType {
                #[choice(rename = "home", description = " for home ")]
                Personal = 1,
            }
        };
        let attrs = ChoiceMemberAttrs::from_attrs(&item.variants[0].attrs).unwrap();
        assert_eq!(attrs.rename.as_deref(), Some("home"));
        assert_eq!(attrs.description.as_deref(), Some("for home"));
    }

    #[test]
    fn rejects_unknown_arguments() {
        let item: ItemEnum = parse_quote! {
            #[choice(rename_all = "Snake Case")]
            enum EmailType {
                #[choice(skip)]
                Personal = 1,
            }
        };
        let err = ChoiceEnumAttrs::from_attrs(&item.attrs).unwrap_err();
        assert_eq!(err.to_string(), "unknown rename rule `Snake Case`");
        assert!(ChoiceMemberAttrs::from_attrs(&item.variants[0].attrs).is_err());
    }
}
