//! `#[serde(with = "...")]` helpers for choice enum fields.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Email {
//!     address: String,
//!     #[serde(with = "choice_enum::serde::as_value")]
//!     email_type: EmailType,
//! }
//! ```

/// Store the member as its integer value.
pub mod as_value {
    use crate::{ChoiceEnum, ChoiceError};
    use ::serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<E, S>(member: &E, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: ChoiceEnum,
        S: Serializer,
    {
        serializer.serialize_i64(member.value())
    }

    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
    where
        E: ChoiceEnum,
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        E::from_value(value).ok_or_else(|| {
            D::Error::custom(ChoiceError::UnknownValue {
                type_name: E::TYPE_NAME,
                value,
            })
        })
    }
}

/// Store the member as its name.
pub mod as_name {
    use crate::{ChoiceEnum, ChoiceError};
    use ::serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::borrow::Cow;

    pub fn serialize<E, S>(member: &E, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: ChoiceEnum,
        S: Serializer,
    {
        serializer.serialize_str(member.name())
    }

    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<E, D::Error>
    where
        E: ChoiceEnum,
        D: Deserializer<'de>,
    {
        let name = Cow::<'de, str>::deserialize(deserializer)?;
        E::from_name(&name).ok_or_else(|| {
            D::Error::custom(ChoiceError::UnknownName {
                type_name: E::TYPE_NAME,
                name: name.into_owned(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ChoiceEnum;
    use ::serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ChoiceEnum)]
    #[choice(rename_all = "snake_case")]
    enum EmailType {
        Other = 0,
        Personal = 1,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Email {
        #[serde(with = "crate::serde::as_value")]
        stored: EmailType,
        #[serde(with = "crate::serde::as_name")]
        shown: EmailType,
    }

    #[test]
    fn serializes_value_and_name() {
        let email = Email {
            stored: EmailType::Personal,
            shown: EmailType::Other,
        };
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, r#"{"stored":1,"shown":"other"}"#);
        assert_eq!(serde_json::from_str::<Email>(&json).unwrap(), email);
    }

    #[test]
    fn rejects_unknown_inputs() {
        let err = serde_json::from_str::<Email>(r#"{"stored":7,"shown":"other"}"#).unwrap_err();
        assert!(err.to_string().contains("7 is not a valid EmailType value"));

        let err =
            serde_json::from_str::<Email>(r#"{"stored":0,"shown":"Other"}"#).unwrap_err();
        assert!(err.to_string().contains("`Other` is not a valid EmailType name"));
    }
}
