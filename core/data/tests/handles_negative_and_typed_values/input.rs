use choice_enum::ChoiceEnum;

#[derive(Clone, Copy, PartialEq, Eq, Hash, ChoiceEnum)]
#[repr(i64)]
#[choice(source = "input.rs")]
pub enum Adjustment {
    Refund = -1, // money back
    Nothing = 0,
    Charge = 1i64, // money in
    Bulk = 1_000, // bulk order
    Flags = 0x10, // hex
}
