//! Enums whose members are declared once and used as integers, names, or
//! members interchangeably, mainly to back a web framework's choice fields.
//!
//! ```ignore
//! use choice_enum::ChoiceEnum;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ChoiceEnum)]
//! #[choice(rename_all = "snake_case")]
//! pub enum EmailType {
//!     Other = 0,
//!     /// for home
//!     Personal = 1,
//!     /// for work
//!     Corporate = 2,
//! }
//!
//! assert_eq!(EmailType::Personal, 1);
//! assert_eq!(EmailType::Personal, "personal");
//! assert_eq!(EmailType::choices()[1], (1, "personal (for home)".to_string()));
//! ```

// Lets the derive's `::choice_enum` paths resolve inside this crate's own tests.
extern crate self as choice_enum;

mod choice;
mod error;
pub mod serde;

pub use choice::{ChoiceEnum, Members};
pub use choice_enum_annotation::ChoiceEnum;
pub use error::ChoiceError;

#[doc(hidden)]
pub use choice_enum_core::inline_comment::inline_description;
