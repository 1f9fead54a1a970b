use choice_enum::ChoiceEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ChoiceEnum)]
#[choice(rename_all = "snake_case")]
pub enum EmailType {
    Other = 0,
    Personal = 1,    // for home
    /// for work
    Corporate = 2,
}
