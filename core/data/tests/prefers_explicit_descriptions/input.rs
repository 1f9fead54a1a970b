#[derive(Clone, Copy, PartialEq, Eq, Hash, choice_enum::ChoiceEnum)]
#[choice(source = "input.rs")]
pub enum PhoneType {
    /// portable
    #[choice(description = "cell phone")]
    Mobile = 1, // ignored
    /// fixed line
    Landline = 2, // also ignored
    Fax = 3, // rarely used
    Pager = 4,
}
