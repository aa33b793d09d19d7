// Copyright (c) 2025 - Cowboy AI, Inc.
//! Person record

use serde::{Deserialize, Serialize};
use std::fmt;

use super::named::Named;

/// A person with a first and last name
///
/// Both names are optional: a default person has neither set, and setters
/// accept any text without validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    first_name: Option<String>,
    last_name: Option<String>,
}

impl Person {
    /// Create a person with both names set
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

impl Named for Person {
    fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
