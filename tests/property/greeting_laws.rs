// Copyright (c) 2025 - Cowboy AI, Inc.
//! Greeting Laws
//!
//! For every pair of names, a person greets with the fixed template and the
//! command copied from it greets identically.

use proptest::prelude::*;
use reactive_examples::domain::{Named, Person, PersonCommand};
use test_case::test_case;

proptest! {
    #[test]
    fn greeting_follows_template(first in ".*", last in ".*") {
        let person = Person::new(first.clone(), last.clone());
        prop_assert_eq!(
            person.say_my_name(),
            format!("My Name is {} {}.", first, last)
        );
    }

    #[test]
    fn command_greets_like_its_person(first in "\\PC*", last in "\\PC*") {
        let person = Person::new(first, last);
        let command = PersonCommand::from(&person);
        prop_assert_eq!(command.say_my_name(), person.say_my_name());
    }

    #[test]
    fn strict_greeting_agrees_when_names_present(first in "[A-Za-z]{1,12}", last in "[A-Za-z]{1,12}") {
        let person = Person::new(first, last);
        prop_assert_eq!(person.try_say_my_name().unwrap(), person.say_my_name());
    }
}

#[test_case("Michael", "Weston" => "My Name is Michael Weston." ; "michael")]
#[test_case("Fiona", "Glenanne" => "My Name is Fiona Glenanne." ; "fiona")]
#[test_case("Sam", "Axe" => "My Name is Sam Axe." ; "sam")]
#[test_case("Jesse", "Porter" => "My Name is Jesse Porter." ; "jesse")]
#[test_case("", "" => "My Name is  ." ; "empty names are kept verbatim")]
fn greeting_table(first: &str, last: &str) -> String {
    PersonCommand::from(Person::new(first, last)).say_my_name()
}
