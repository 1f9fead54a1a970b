use choice_enum::ChoiceEnum;

/// Kind of e-mail address stored on a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ChoiceEnum)]
#[choice(rename_all = "snake_case", source = "input.rs")]
pub enum EmailType {
    Other = 0,
    Personal = 1,    // for home
    Corporate = 2,   // for work
}
