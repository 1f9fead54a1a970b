pub mod contacts {
    use choice_enum::ChoiceEnum;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, ChoiceEnum)]
    #[choice(source = "input.rs")]
    pub enum AddressKind {
        Billing = 10, // invoices go here
        Shipping = 20,
    }

    #[derive(Debug)]
    pub enum NotAChoice {
        Something = 1, // never read
    }

    pub mod nested {
        /// How urgent a ticket is.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, choice_enum::ChoiceEnum)]
        pub enum Priority {
            Low = 1,
            High = 2, // no source, so not a description
        }
    }
}
