//! Text renderings shared by the runtime trait and parsed enums.
//!
//! A member label is `name (description)`, or the bare name when there is no
//! description. A type renders as `TypeName(('name', value), ...)`.
use joinery::JoinableIterator;
use lazy_format::lazy_format;
use std::fmt::{self, Display, Formatter};

/// Display label of one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

impl<'a> Label<'a> {
    pub fn new(name: &'a str, description: Option<&'a str>) -> Self {
        Self { name, description }
    }
}

impl Display for Label<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.description {
            Some(description) => write!(f, "{} ({description})", self.name),
            None => f.write_str(self.name),
        }
    }
}

/// Quotes a name the way a Python-style tuple repr does: single quotes,
/// with backslashes and single quotes escaped.
#[derive(Debug, Clone, Copy)]
struct Quoted<'a>(&'a str);

impl Display for Quoted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for ch in self.0.chars() {
            match ch {
                '\\' => f.write_str("\\\\")?,
                '\'' => f.write_str("\\'")?,
                ch => write!(f, "{ch}")?,
            }
        }
        f.write_str("'")
    }
}

/// Type-level representation built from `(name, value)` items.
pub fn type_repr<'a, I>(type_name: &'a str, items: I) -> impl Display + 'a
where
    I: IntoIterator<Item = (&'a str, i64)>,
    I::IntoIter: Clone + 'a,
{
    let items = items
        .into_iter()
        .map(|(name, value)| lazy_format!("({}, {})", Quoted(name), value))
        .join_with(", ");
    lazy_format!("{type_name}({items})")
}
