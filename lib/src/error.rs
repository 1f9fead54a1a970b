use thiserror::Error;

/// Failure to turn a raw integer or name into a member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("{value} is not a valid {type_name} value")]
    UnknownValue { type_name: &'static str, value: i64 },
    #[error("`{name}` is not a valid {type_name} name")]
    UnknownName { type_name: &'static str, name: String },
}
