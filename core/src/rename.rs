use strum::EnumString;

/// Case conversion applied to variant identifiers by `#[choice(rename_all = "...")]`.
///
/// Mirrors the spellings accepted by serde's `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum RenameRule {
    #[strum(serialize = "lowercase")]
    Lower,
    #[strum(serialize = "UPPERCASE")]
    Upper,
    #[strum(serialize = "camelCase")]
    Camel,
    #[strum(serialize = "PascalCase")]
    Pascal,
    #[strum(serialize = "snake_case")]
    Snake,
    #[strum(serialize = "SCREAMING_SNAKE_CASE")]
    ScreamingSnake,
    #[strum(serialize = "kebab-case")]
    Kebab,
    #[strum(serialize = "SCREAMING-KEBAB-CASE")]
    ScreamingKebab,
}

impl RenameRule {
    /// Apply the rule to a variant identifier.
    pub fn apply(self, ident: &str) -> String {
        match self {
            RenameRule::Lower => ident.to_ascii_lowercase(),
            RenameRule::Upper => ident.to_ascii_uppercase(),
            RenameRule::Camel => ident.to_camel_case(),
            RenameRule::Pascal => ident.to_pascal_case(),
            RenameRule::Snake => ident.to_snake_case(),
            RenameRule::ScreamingSnake => ident.to_snake_case().to_ascii_uppercase(),
            RenameRule::Kebab => ident.to_snake_case().replace('_', "-"),
            RenameRule::ScreamingKebab => ident.to_snake_case().replace('_', "-").to_ascii_uppercase(),
        }
    }
}

/// Case conversions on identifiers.
pub trait RenameExt {
    fn to_camel_case(&self) -> String;
    fn to_pascal_case(&self) -> String;
    fn to_snake_case(&self) -> String;
}

impl RenameExt for str {
    fn to_camel_case(&self) -> String {
        let pascal = self.to_pascal_case();
        match pascal.chars().next() {
            Some(first) => first.to_ascii_lowercase().to_string() + &pascal[first.len_utf8()..],
            None => pascal,
        }
    }

    fn to_pascal_case(&self) -> String {
        let mut pascal = String::with_capacity(self.len());
        let mut capitalize = true;
        // All-caps identifiers such as "URL" don't keep their casing.
        let to_lowercase = self.to_ascii_uppercase() == self;

        for ch in self.chars() {
            if ch == '_' {
                capitalize = true;
            } else if capitalize {
                pascal.push(ch.to_ascii_uppercase());
                capitalize = false;
            } else if to_lowercase {
                pascal.push(ch.to_ascii_lowercase());
            } else {
                pascal.push(ch);
            }
        }
        pascal
    }

    fn to_snake_case(&self) -> String {
        let mut snake = String::with_capacity(self.len() + 4);
        let is_uppercase = self.to_ascii_uppercase() == self;
        for (i, ch) in self.char_indices() {
            if i > 0 && ch.is_uppercase() && !is_uppercase && !snake.ends_with('_') {
                snake.push('_');
            }
            snake.push(ch.to_ascii_lowercase());
        }
        snake
    }
}
