//! Defines `#[derive(ChoiceEnum)]`.

extern crate proc_macro;
use choice_enum_core::{parsed_types::ParsedChoiceEnum, parser::parse_choice_enum};
use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, ItemEnum};

/// Turns a fieldless enum with integer values into a choice enum.
///
/// Every variant needs an explicit integer value. The derive implements
/// `choice_enum::ChoiceEnum`, `Display` (the member name), `From<_> for i64`,
/// `TryFrom<i64>`, `FromStr`, and equality against `i64`, `str`, `&str` and
/// `String` in both directions. Equality between members, `Clone`, `Copy`,
/// `Eq` and `Hash` come from the usual derives.
///
/// # Example
///
/// ```ignore
/// use choice_enum::ChoiceEnum;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ChoiceEnum)]
/// #[choice(rename_all = "snake_case")]
/// pub enum EmailType {
///     Other = 0,
///     /// for home
///     Personal = 1,
///     #[choice(description = "for work")]
///     Corporate = 2,
/// }
/// ```
///
/// # Trailing comments
///
/// With `#[choice(source = "this_file.rs")]` on the enum, members without a
/// doc comment or `description` take the trailing `//` comment of their
/// declaration line. The path is relative to the file holding the enum, like
/// `include_str!`.
#[proc_macro_derive(ChoiceEnum, attributes(choice))]
pub fn derive_choice_enum(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as DeriveInput);
    if !matches!(derive_input.data, Data::Enum(_)) {
        return syn::Error::new_spanned(
            &derive_input.ident,
            "ChoiceEnum can only be derived for enums",
        )
        .to_compile_error()
        .into();
    }

    let item: ItemEnum = match syn::parse2(quote!(#derive_input)) {
        Ok(item) => item,
        Err(err) => return err.to_compile_error().into(),
    };

    match parse_choice_enum(&item, None) {
        Ok(parsed) => expand(&item, &parsed).into(),
        Err(err) => err.into_syn_error().to_compile_error().into(),
    }
}

fn expand(item: &ItemEnum, parsed: &ParsedChoiceEnum) -> TokenStream2 {
    let ident = &item.ident;
    let type_name = &parsed.ident;
    let variants: Vec<&Ident> = item.variants.iter().map(|variant| &variant.ident).collect();
    let names = parsed.members.iter().map(|member| member.name.as_str());
    let values: Vec<i64> = parsed.members.iter().map(|member| member.value).collect();
    let description = description_body(parsed, &variants);

    quote! {
        impl ::choice_enum::ChoiceEnum for #ident {
            const TYPE_NAME: &'static str = #type_name;
            const MEMBERS: &'static [Self] = &[#(Self::#variants),*];

            fn name(&self) -> &'static str {
                match *self {
                    #(Self::#variants => #names,)*
                }
            }

            fn value(&self) -> i64 {
                match *self {
                    #(Self::#variants => #values,)*
                }
            }

            fn description(&self) -> ::core::option::Option<&'static str> {
                #description
            }
        }

        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::choice_enum::ChoiceEnum::name(self))
            }
        }

        impl ::core::convert::From<#ident> for i64 {
            fn from(member: #ident) -> i64 {
                ::choice_enum::ChoiceEnum::value(&member)
            }
        }

        impl ::core::convert::From<&#ident> for i64 {
            fn from(member: &#ident) -> i64 {
                ::choice_enum::ChoiceEnum::value(member)
            }
        }

        impl ::core::convert::TryFrom<i64> for #ident {
            type Error = ::choice_enum::ChoiceError;

            fn try_from(value: i64) -> ::core::result::Result<Self, Self::Error> {
                <Self as ::choice_enum::ChoiceEnum>::from_value(value).ok_or(
                    ::choice_enum::ChoiceError::UnknownValue {
                        type_name: #type_name,
                        value,
                    },
                )
            }
        }

        impl ::core::str::FromStr for #ident {
            type Err = ::choice_enum::ChoiceError;

            fn from_str(name: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as ::choice_enum::ChoiceEnum>::from_name(name).ok_or_else(|| {
                    ::choice_enum::ChoiceError::UnknownName {
                        type_name: #type_name,
                        name: name.into(),
                    }
                })
            }
        }

        impl ::core::cmp::PartialEq<i64> for #ident {
            fn eq(&self, other: &i64) -> bool {
                ::choice_enum::ChoiceEnum::value(self) == *other
            }
        }

        impl ::core::cmp::PartialEq<#ident> for i64 {
            fn eq(&self, other: &#ident) -> bool {
                *self == ::choice_enum::ChoiceEnum::value(other)
            }
        }

        impl ::core::cmp::PartialEq<str> for #ident {
            fn eq(&self, other: &str) -> bool {
                ::choice_enum::ChoiceEnum::name(self) == other
            }
        }

        impl ::core::cmp::PartialEq<#ident> for str {
            fn eq(&self, other: &#ident) -> bool {
                self == ::choice_enum::ChoiceEnum::name(other)
            }
        }

        impl<'a> ::core::cmp::PartialEq<&'a str> for #ident {
            fn eq(&self, other: &&'a str) -> bool {
                ::choice_enum::ChoiceEnum::name(self) == *other
            }
        }

        impl<'a> ::core::cmp::PartialEq<#ident> for &'a str {
            fn eq(&self, other: &#ident) -> bool {
                *self == ::choice_enum::ChoiceEnum::name(other)
            }
        }

        impl ::core::cmp::PartialEq<::std::string::String> for #ident {
            fn eq(&self, other: &::std::string::String) -> bool {
                ::choice_enum::ChoiceEnum::name(self) == other.as_str()
            }
        }

        impl ::core::cmp::PartialEq<#ident> for ::std::string::String {
            fn eq(&self, other: &#ident) -> bool {
                self.as_str() == ::choice_enum::ChoiceEnum::name(other)
            }
        }
    }
}

/// Body of `ChoiceEnum::description`.
///
/// Explicit descriptions are baked in. With `#[choice(source)]`, the trailing
/// comments are read from the included file on first use and kept for the
/// rest of the process.
fn description_body(parsed: &ParsedChoiceEnum, variants: &[&Ident]) -> TokenStream2 {
    let explicit = parsed.members.iter().map(|member| match &member.description {
        Some(description) => quote!(::core::option::Option::Some(#description)),
        None => quote!(::core::option::Option::None),
    });
    let explicit = quote! {
        match *self {
            #(Self::#variants => #explicit,)*
        }
    };

    let Some(source) = &parsed.inline_source else {
        return explicit;
    };

    let type_name = &parsed.ident;
    let idents = parsed.members.iter().map(|member| member.ident.as_str());
    let literals = parsed.members.iter().map(|member| member.literal.as_str());
    let indices = 0..variants.len();

    quote! {
        static INLINE: ::std::sync::OnceLock<
            ::std::vec::Vec<::core::option::Option<::std::string::String>>,
        > = ::std::sync::OnceLock::new();

        let explicit: ::core::option::Option<&'static str> = #explicit;
        explicit.or_else(|| {
            let inline = INLINE.get_or_init(|| {
                const SOURCE: &str = include_str!(#source);
                ::std::vec![
                    #(::choice_enum::inline_description(SOURCE, #type_name, #idents, #literals)),*
                ]
            });
            let index: usize = match *self {
                #(Self::#variants => #indices,)*
            };
            inline[index].as_deref()
        })
    }
}
