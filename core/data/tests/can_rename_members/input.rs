use choice_enum::ChoiceEnum;

#[derive(Clone, Copy, PartialEq, Eq, Hash, ChoiceEnum)]
#[choice(rename_all = "kebab-case")]
pub enum TicketStatus {
    NewlyOpened = 1,
    InProgress = 2,
    #[choice(rename = "closed")]
    Resolved = 3,
}
