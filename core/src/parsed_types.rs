//! Choice enums as read from source, independent of how they were read.
use crate::display::{type_repr, Label};
use serde::Serialize;
use std::path::PathBuf;

/// One member of a choice enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedMember {
    /// Identifier of the variant as written in Rust.
    pub ident: String,
    /// Public name: the identifier after any rename.
    pub name: String,
    pub value: i64,
    /// The value as written in the source, used to find its declaration line.
    #[serde(skip)]
    pub literal: String,
    pub description: Option<String>,
}

impl ParsedMember {
    /// `name (description)` or the bare name.
    pub fn label(&self) -> String {
        Label::new(&self.name, self.description.as_deref()).to_string()
    }
}

/// A parsed `#[derive(ChoiceEnum)]` enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedChoiceEnum {
    /// Identifier of the enum.
    pub ident: String,
    /// Doc comment lines on the enum itself.
    pub comments: Vec<String>,
    /// Members in declaration order.
    pub members: Vec<ParsedMember>,
    /// File named by `#[choice(source = "...")]`, read for trailing comments at runtime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_source: Option<String>,
}

impl ParsedChoiceEnum {
    /// `(name, value)` pairs in declaration order.
    pub fn items(&self) -> Vec<(&str, i64)> {
        self.members
            .iter()
            .map(|member| (member.name.as_str(), member.value))
            .collect()
    }

    /// `(value, label)` pairs in declaration order.
    pub fn choices(&self) -> Vec<(i64, String)> {
        self.members
            .iter()
            .map(|member| (member.value, member.label()))
            .collect()
    }

    pub fn repr(&self) -> String {
        type_repr(&self.ident, self.items()).to_string()
    }
}

/// The choice enums found in one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedData {
    /// Path of the file the enums were read from.
    pub file_path: PathBuf,
    pub enums: Vec<ParsedChoiceEnum>,
}

impl ParsedData {
    /// Add the parsed data from `other` to `self`.
    pub fn add(&mut self, mut other: Self) {
        self.enums.append(&mut other.enums);
    }
}
