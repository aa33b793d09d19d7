// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for reactive-examples
//!
//! Fixed people shared by the integration tests. Tests build sequences from
//! these helpers rather than constructing records inline.

#![allow(dead_code)]

use reactive_examples::domain::Person;

pub fn michael() -> Person {
    Person::new("Michael", "Weston")
}

pub fn fiona() -> Person {
    Person::new("Fiona", "Glenanne")
}

pub fn sam() -> Person {
    Person::new("Sam", "Axe")
}

pub fn jesse() -> Person {
    Person::new("Jesse", "Porter")
}

/// Michael, Fiona, Sam and Jesse, in that order
pub fn crew() -> Vec<Person> {
    vec![michael(), fiona(), sam(), jesse()]
}

/// Install a tracing subscriber that writes through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}
