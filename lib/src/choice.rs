use choice_enum_core::display::{type_repr, Label};
use std::hash::Hash;
use std::iter::Copied;
use std::slice;

/// Iterator over the members of a choice enum, in declaration order.
pub type Members<E> = Copied<slice::Iter<'static, E>>;

/// A closed set of named, integer-valued members.
///
/// Implemented by `#[derive(ChoiceEnum)]`; the required items come from the
/// enum declaration and everything else is derived from them. Members hash
/// and compare with each other through the enum's own derives. Equality with
/// `i64` and strings comes from the derive too, but is not reflected in
/// `Hash`, so don't mix members and raw values as keys of one map.
pub trait ChoiceEnum: Copy + Eq + Hash + Sized + 'static {
    /// Name of the enum type.
    const TYPE_NAME: &'static str;

    /// Every member, in declaration order.
    const MEMBERS: &'static [Self];

    /// The member's public name.
    fn name(&self) -> &'static str;

    /// The member's integer value.
    fn value(&self) -> i64;

    /// Human-readable description, if one was given.
    fn description(&self) -> Option<&'static str>;

    /// `name (description)`, or the bare name without a description.
    fn label(&self) -> String {
        Label::new(self.name(), self.description()).to_string()
    }

    fn members() -> Members<Self> {
        Self::MEMBERS.iter().copied()
    }

    /// `(name, value)` pairs in declaration order.
    fn items() -> Vec<(&'static str, i64)> {
        Self::members()
            .map(|member| (member.name(), member.value()))
            .collect()
    }

    /// `(value, label)` pairs in declaration order, the shape a choice field expects.
    fn choices() -> Vec<(i64, String)> {
        Self::members()
            .map(|member| (member.value(), member.label()))
            .collect()
    }

    /// `TypeName(('name', value), ...)`
    fn type_repr() -> String {
        type_repr(
            Self::TYPE_NAME,
            Self::members().map(|member| (member.name(), member.value())),
        )
        .to_string()
    }

    /// The first member with the given value.
    fn from_value(value: i64) -> Option<Self> {
        Self::members().find(|member| member.value() == value)
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::members().find(|member| member.name() == name)
    }
}
