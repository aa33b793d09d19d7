// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shared greeting behaviour for records that carry a first and last name

use thiserror::Error;

/// Text rendered in place of a name that has not been set
pub const ABSENT_NAME: &str = "null";

/// Record validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Name field is not set: {0}")]
    MissingName(&'static str),
}

/// A record holding an optional first and last name
///
/// The greeting methods are provided so that every name-bearing record
/// formats identically.
///
/// # Examples
///
/// ```rust
/// use reactive_examples::domain::{Named, Person};
///
/// let person = Person::new("Michael", "Weston");
/// assert_eq!(person.say_my_name(), "My Name is Michael Weston.");
///
/// let nobody = Person::default();
/// assert_eq!(nobody.say_my_name(), "My Name is null null.");
/// assert!(nobody.try_say_my_name().is_err());
/// ```
pub trait Named {
    /// The first name, if set
    fn first_name(&self) -> Option<&str>;

    /// The last name, if set
    fn last_name(&self) -> Option<&str>;

    /// Format the greeting, rendering unset names as [`ABSENT_NAME`]
    fn say_my_name(&self) -> String {
        format!(
            "My Name is {} {}.",
            self.first_name().unwrap_or(ABSENT_NAME),
            self.last_name().unwrap_or(ABSENT_NAME)
        )
    }

    /// Format the greeting, failing if either name is unset
    fn try_say_my_name(&self) -> Result<String, RecordError> {
        let first = self
            .first_name()
            .ok_or(RecordError::MissingName("first_name"))?;
        let last = self
            .last_name()
            .ok_or(RecordError::MissingName("last_name"))?;
        Ok(format!("My Name is {first} {last}."))
    }

    /// Full name as "first last", with the same placeholder rule as the greeting
    fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name().unwrap_or(ABSENT_NAME),
            self.last_name().unwrap_or(ABSENT_NAME)
        )
    }
}
