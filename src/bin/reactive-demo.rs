// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reactive Demo
//!
//! Walks through the publisher examples end to end:
//! - Mono transform from Person to PersonCommand
//! - Ordered Flux subscription
//! - Delayed Flux awaited through a completion latch
//! - Delayed then filtered Flux awaited through its subscription
//! - The same delayed filter checked with a step verifier
//!
//! Run with: cargo run --bin reactive-demo
//!
//! Environment:
//! - REACTIVE_ELEMENT_DELAY_MS - per-element delay (default 1000)
//! - REACTIVE_CHANNEL_CAPACITY - subscription channel capacity (default 256)
//! - REACTIVE_VERIFY_TIMEOUT_MS - step verifier deadline (default 10000)
//! - RUST_LOG - tracing filter (default info)

use anyhow::{Context, Result};
use reactive_examples::domain::{Named, Person, PersonCommand};
use reactive_examples::reactive::{CountDownLatch, FnSubscriber, Flux, Mono, Publisher};
use reactive_examples::{ReactiveConfig, StepVerifier};
use tracing::{debug, info};

fn burn_notice_crew() -> Vec<Person> {
    vec![
        Person::new("Michael", "Weston"),
        Person::new("Fiona", "Glenanne"),
        Person::new("Sam", "Axe"),
        Person::new("Jesse", "Porter"),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("🚀 Starting reactive demo");

    let config = ReactiveConfig::from_env().context("Invalid reactive configuration")?;
    info!("📋 Configuration loaded:");
    info!("  - Element delay: {:?}", config.element_delay);
    info!("  - Channel capacity: {}", config.channel_capacity);
    info!("  - Verify timeout: {:?}", config.verify_timeout);

    let people = Flux::just(burn_notice_crew());

    // Mono transform
    let command = Mono::just(Person::new("Fiona", "Glenanne"))
        .map(PersonCommand::from)
        .log("mono.transform")
        .block()
        .await
        .context("Mono completed without a value")?;
    info!("🔄 {}", command.say_my_name());
    debug!(
        "PersonCommand as JSON: {}",
        serde_json::to_string(&command).context("Failed to serialize command")?
    );

    // Ordered subscription
    people
        .subscribe(|person| info!("👤 {}", person.say_my_name()))
        .await_completion()
        .await
        .context("Ordered subscription failed")?;

    // Delayed, completion observed through a latch
    let latch = CountDownLatch::new(1);
    let done = latch.clone();
    let _subscription = people
        .clone()
        .delay_elements(config.element_delay)
        .do_on_complete(move || done.count_down())
        .subscribe_with_config(
            FnSubscriber::new(|person: Person| info!("⏱️ {}", person.say_my_name())),
            &config,
        );
    latch.wait().await;
    info!("✅ Delayed sequence complete");

    // Delayed, then filtered
    let contains_i =
        |person: &Person| person.first_name().is_some_and(|name| name.contains('i'));
    people
        .clone()
        .delay_elements(config.element_delay)
        .filter(contains_i)
        .log("flux.filter_delay")
        .subscribe_with_config(
            FnSubscriber::new(|person: Person| info!("🔍 {}", person.say_my_name())),
            &config,
        )
        .await_completion()
        .await
        .context("Filtered subscription failed")?;

    let elapsed = StepVerifier::create_with_config(
        people.delay_elements(config.element_delay).filter(contains_i),
        &config,
    )
    .expect_next(Person::new("Michael", "Weston"))
    .expect_next(Person::new("Fiona", "Glenanne"))
    .verify_complete()
    .await
    .context("Filtered sequence did not verify")?;
    info!("🧪 Filtered sequence verified in {:?}", elapsed);

    info!("🏁 Demo finished");
    Ok(())
}
