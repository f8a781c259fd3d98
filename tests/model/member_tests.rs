//! Member aggregate tests.

use std::collections::BTreeSet;

use rollcall::model::{
    Address, Attendance, Birthday, Email, Instrument, MatriculationYear, Member, Name, Phone, Tag,
};

fn member_with_tags(tag_names: &[&str]) -> Member {
    let tags: BTreeSet<Tag> = tag_names
        .iter()
        .map(|name| Tag::parse(name).unwrap())
        .collect();

    Member::new(
        Name::parse("Alice Tan").unwrap(),
        Phone::parse("98765432").unwrap(),
        Email::parse("alice@example.com").unwrap(),
        Address::parse("311 Clementi Ave 2").unwrap(),
        Birthday::parse("2000-01-01").unwrap(),
        MatriculationYear::parse("2019").unwrap(),
        Instrument::parse("Violin").unwrap(),
        tags,
        BTreeSet::new(),
    )
}

#[test]
fn member_round_trips_semantic_values() {
    let member = member_with_tags(&["soprano"]);

    assert_eq!(member.name.as_str(), "Alice Tan");
    assert_eq!(member.phone.as_str(), "98765432");
    assert_eq!(member.email.as_str(), "alice@example.com");
    assert_eq!(member.address.as_str(), "311 Clementi Ave 2");
    assert_eq!(format!("{}", member.birthday), "2000-01-01");
    assert_eq!(member.matriculation_year.year(), 2019);
    assert_eq!(member.instrument.as_str(), "Violin");
}

#[test]
fn member_tag_sets_ignore_order_and_duplicates() {
    let a = member_with_tags(&["soprano", "committee"]);
    let b = member_with_tags(&["committee", "soprano", "soprano"]);
    assert_eq!(a, b);
}

#[test]
fn member_attendances_keyed_by_date() {
    let mut attendances = BTreeSet::new();
    attendances.insert(Attendance::parse("2024-05-10").unwrap());
    attendances.insert(Attendance::parse("2024-05-10").unwrap());
    attendances.insert(Attendance::parse("2024-05-17").unwrap());

    let member = Member::new(
        Name::parse("Alice Tan").unwrap(),
        Phone::parse("98765432").unwrap(),
        Email::parse("alice@example.com").unwrap(),
        Address::parse("311 Clementi Ave 2").unwrap(),
        Birthday::parse("2000-01-01").unwrap(),
        MatriculationYear::parse("2019").unwrap(),
        Instrument::parse("Violin").unwrap(),
        BTreeSet::new(),
        attendances,
    );
    assert_eq!(member.attendances.len(), 2);
}
