use choice_enum::{ChoiceEnum, ChoiceError};
use choice_enum_core::{context::ParseFileContext, parser::parse};
use std::{collections::HashSet, fs, path::Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ChoiceEnum)]
#[choice(rename_all = "snake_case", source = "email_type.rs")]
enum EmailType {
    Other = 0,
    Personal = 1,  // for home
    Corporate = 2, // for work
}

/// Members documented in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ChoiceEnum)]
enum Priority {
    /// can wait
    Low = -1,
    Normal = 0,
    #[choice(rename = "URGENT", description = "drop everything")]
    High = 10,
}

/// Values spelled in other ways still find their comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ChoiceEnum)]
#[choice(source = "email_type.rs")]
enum Batch {
    /* sizes } */
    Small = 0x10, // sixteen
    Bulk = 1_000, // bulk order
    Single = 1,
}

/// Trailing comments without `source` are not descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ChoiceEnum)]
enum Channel {
    Inbox = 1, // not read
    Sms = 2,
}

#[test]
fn compares_with_integers() {
    assert_eq!(EmailType::Personal, 1_i64);
    assert_eq!(1_i64, EmailType::Personal);
    assert_ne!(EmailType::Personal, 2_i64);
    assert_ne!(0_i64, EmailType::Corporate);
    assert_eq!(Priority::Low, -1_i64);
}

#[test]
fn compares_with_names() {
    assert_eq!(EmailType::Personal, "personal");
    assert_eq!("personal", EmailType::Personal);
    assert_eq!(EmailType::Corporate, *"corporate");
    assert_eq!(EmailType::Other, "other".to_string());
    assert_eq!("other".to_string(), EmailType::Other);
    assert_ne!(EmailType::Personal, "Personal");
    assert_eq!(Priority::High, "URGENT");
}

#[test]
fn compares_members() {
    assert_eq!(EmailType::Personal, EmailType::Personal);
    assert_ne!(EmailType::Personal, EmailType::Corporate);

    let set: HashSet<EmailType> = EmailType::members().collect();
    assert_eq!(set.len(), 3);
    assert!(set.contains(&EmailType::Other));
}

#[test]
fn converts_to_name_and_value() {
    assert_eq!(EmailType::Personal.to_string(), "personal");
    assert_eq!(format!("{}", EmailType::Corporate), "corporate");
    assert_eq!(i64::from(EmailType::Corporate), 2);
    assert_eq!(i64::from(&Priority::Low), -1);
}

#[test]
fn lists_items_and_choices() {
    assert_eq!(
        EmailType::items(),
        vec![("other", 0), ("personal", 1), ("corporate", 2)]
    );
    assert_eq!(
        EmailType::choices(),
        vec![
            (0, "other".to_string()),
            (1, "personal (for home)".to_string()),
            (2, "corporate (for work)".to_string()),
        ]
    );
    assert_eq!(
        Priority::choices(),
        vec![
            (-1, "Low (can wait)".to_string()),
            (0, "Normal".to_string()),
            (10, "URGENT (drop everything)".to_string()),
        ]
    );
}

#[test]
fn renders_type_repr() {
    assert_eq!(
        EmailType::type_repr(),
        "EmailType(('other', 0), ('personal', 1), ('corporate', 2))"
    );
    assert_eq!(
        Priority::type_repr(),
        "Priority(('Low', -1), ('Normal', 0), ('URGENT', 10))"
    );
}

#[test]
fn reads_trailing_comments_once() {
    assert_eq!(EmailType::Other.description(), None);
    let first = EmailType::Personal.description();
    assert_eq!(first, Some("for home"));

    // Later lookups hand out the same cached string.
    let second = EmailType::Personal.description();
    assert!(std::ptr::eq(first.unwrap(), second.unwrap()));
    assert_eq!(EmailType::Corporate.label(), "corporate (for work)");
}

#[test]
fn parses_values_and_names() {
    assert_eq!(EmailType::try_from(2_i64), Ok(EmailType::Corporate));
    assert_eq!(
        EmailType::try_from(3_i64),
        Err(ChoiceError::UnknownValue {
            type_name: "EmailType",
            value: 3,
        })
    );

    assert_eq!("personal".parse::<EmailType>(), Ok(EmailType::Personal));
    let err = "Personal".parse::<EmailType>().unwrap_err();
    assert_eq!(err.to_string(), "`Personal` is not a valid EmailType name");
    assert_eq!(
        EmailType::try_from(7_i64).unwrap_err().to_string(),
        "7 is not a valid EmailType value"
    );
}

#[test]
fn exposes_type_metadata() {
    assert_eq!(EmailType::TYPE_NAME, "EmailType");
    assert_eq!(
        EmailType::MEMBERS,
        &[EmailType::Other, EmailType::Personal, EmailType::Corporate]
    );
    assert_eq!(Priority::from_value(10), Some(Priority::High));
    assert_eq!(Priority::from_name("High"), None);
}

#[test]
fn reads_comments_for_any_literal_spelling() {
    assert_eq!(Batch::Small, 16_i64);
    assert_eq!(Batch::Small.label(), "Small (sixteen)");
    assert_eq!(Batch::Bulk, 1000_i64);
    assert_eq!(Batch::Bulk.label(), "Bulk (bulk order)");
    assert_eq!(Batch::Single.description(), None);
}

#[test]
fn ignores_trailing_comments_without_source() {
    assert_eq!(Channel::Inbox.description(), None);
    assert_eq!(
        Channel::choices(),
        vec![(1, "Inbox".to_string()), (2, "Sms".to_string())]
    );
}

#[test]
fn source_parser_agrees_with_the_derive() {
    let file_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/email_type.rs");
    let parsed = parse(ParseFileContext {
        source_code: fs::read_to_string(&file_path).unwrap(),
        file_path,
    })
    .unwrap()
    .unwrap();

    let choices = |ident: &str| {
        parsed
            .enums
            .iter()
            .find(|choice_enum| choice_enum.ident == ident)
            .unwrap()
            .choices()
    };
    assert_eq!(choices("EmailType"), EmailType::choices());
    assert_eq!(choices("Priority"), Priority::choices());
    assert_eq!(choices("Batch"), Batch::choices());
    assert_eq!(choices("Channel"), Channel::choices());
    assert_eq!(parsed.enums.len(), 4);
}
