//! The core library for choice-enum.
//!
//! Holds the member model and its text renderings, the rename rules, and the
//! trailing-comment lookup. With the `rust-parsing` feature (on by default) it
//! also parses Rust source into [`parsed_types::ParsedChoiceEnum`]s; both the
//! derive macro and the command line tool go through [`parser::parse_choice_enum`].

pub mod display;
pub mod inline_comment;
pub mod parsed_types;
mod rename;

#[cfg(feature = "rust-parsing")]
pub mod choice_attrs;
#[cfg(feature = "rust-parsing")]
pub mod context;
#[cfg(feature = "rust-parsing")]
mod error;
#[cfg(feature = "rust-parsing")]
mod helpers;
/// Parsing Rust code into choice enums
#[cfg(feature = "rust-parsing")]
pub mod parser;

#[cfg(feature = "rust-parsing")]
pub use error::{ParseError, ParseErrorWithSpan, WithSpan};
pub use rename::{RenameExt, RenameRule};
