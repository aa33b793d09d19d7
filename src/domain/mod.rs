// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain Records
//!
//! Two plain records used by the publisher examples:
//!
//! - [`Person`] - first and last name with a greeting
//! - [`PersonCommand`] - the same shape, built by copying a person
//!
//! Both implement [`Named`], which supplies the shared greeting format.

pub mod command;
pub mod named;
pub mod person;

pub use command::PersonCommand;
pub use named::{Named, RecordError, ABSENT_NAME};
pub use person::Person;
