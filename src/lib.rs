//! Reactive publisher examples over person and command records
//!
//! This crate provides two small domain records and a set of cold,
//! tokio-backed publishers used to demonstrate mapping, filtering, delayed
//! emission, subscription and completion signaling.

pub mod config;
pub mod domain;
pub mod errors;
pub mod reactive;

// Re-export commonly used types
pub use config::ReactiveConfig;
pub use domain::{Named, Person, PersonCommand};
pub use errors::{ReactiveError, ReactiveResult};
pub use reactive::{CountDownLatch, Flux, Mono, Publisher, StepVerifier, Subscription};
