// Copyright (c) 2025 - Cowboy AI, Inc.
//! PersonCommand record, a detached copy of a [`Person`]

use serde::{Deserialize, Serialize};
use std::fmt;

use super::named::Named;
use super::person::Person;

/// Command form of a person
///
/// Structurally identical to [`Person`]. Converting from a person copies
/// both names; the command keeps no link back to its source.
///
/// # Examples
///
/// ```rust
/// use reactive_examples::domain::{Named, Person, PersonCommand};
///
/// let fiona = Person::new("Fiona", "Glenanne");
/// let command = PersonCommand::from(&fiona);
/// assert_eq!(command.say_my_name(), fiona.say_my_name());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonCommand {
    first_name: Option<String>,
    last_name: Option<String>,
}

impl PersonCommand {
    /// Create a command with both names set
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    /// Replace the first name
    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = Some(first_name.into());
    }

    /// Replace the last name
    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = Some(last_name.into());
    }
}

impl From<&Person> for PersonCommand {
    fn from(person: &Person) -> Self {
        Self {
            first_name: person.first_name().map(str::to_owned),
            last_name: person.last_name().map(str::to_owned),
        }
    }
}

impl From<Person> for PersonCommand {
    fn from(person: Person) -> Self {
        Self::from(&person)
    }
}

impl Named for PersonCommand {
    fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }
}

impl fmt::Display for PersonCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_person_copies_names() {
        let person = Person::new("Fiona", "Glenanne");
        let command = PersonCommand::from(&person);

        assert_eq!(command.first_name(), Some("Fiona"));
        assert_eq!(command.last_name(), Some("Glenanne"));
        assert_eq!(command.say_my_name(), "My Name is Fiona Glenanne.");
    }

    #[test]
    fn test_copy_is_detached() {
        let mut person = Person::new("Michael", "Weston");
        let command = PersonCommand::from(&person);

        person.set_first_name("Jesse");
        assert_eq!(command.first_name(), Some("Michael"));
    }

    #[test]
    fn test_from_default_person() {
        let command = PersonCommand::from(Person::default());
        assert_eq!(command, PersonCommand::default());
        assert_eq!(command.say_my_name(), "My Name is null null.");
    }

    #[test]
    fn test_two_argument_constructor() {
        let command = PersonCommand::new("Sam", "Axe");
        assert_eq!(command.say_my_name(), Person::new("Sam", "Axe").say_my_name());
    }

    #[test]
    fn test_setters_overwrite() {
        let mut command = PersonCommand::default();
        command.set_first_name("Jesse");
        command.set_last_name("Porter");
        assert_eq!(command, PersonCommand::new("Jesse", "Porter"));
    }
}
