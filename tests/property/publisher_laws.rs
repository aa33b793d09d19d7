// Copyright (c) 2025 - Cowboy AI, Inc.
//! Publisher Laws
//!
//! Functor and filter laws for Flux and Mono, checked by collecting each
//! side on a fresh runtime.

use proptest::prelude::*;
use reactive_examples::reactive::{Flux, Mono, Publisher};

fn collect<T: Send + 'static>(flux: Flux<T>) -> Vec<T> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
        .block_on(async move { flux.collect_list().block().await.unwrap_or_default() })
}

fn block<T: Send + 'static>(mono: Mono<T>) -> Option<T> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
        .block_on(async move { mono.block().await })
}

proptest! {
    #[test]
    fn flux_map_identity(items in prop::collection::vec(any::<i32>(), 0..32)) {
        let mapped = collect(Flux::just(items.clone()).map(|x| x));
        prop_assert_eq!(mapped, items);
    }

    #[test]
    fn flux_map_composition(items in prop::collection::vec(-1000i64..1000, 0..32)) {
        let f = |x: i64| x + 1;
        let g = |x: i64| x * 2;

        let chained = collect(Flux::just(items.clone()).map(f).map(g));
        let fused = collect(Flux::just(items).map(move |x| g(f(x))));
        prop_assert_eq!(chained, fused);
    }

    #[test]
    fn flux_filter_matches_iterator(items in prop::collection::vec(any::<u8>(), 0..32)) {
        let expected: Vec<u8> = items.iter().copied().filter(|x| x % 3 == 0).collect();
        let filtered = collect(Flux::just(items).filter(|x| x % 3 == 0));
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn flux_preserves_order(items in prop::collection::vec(any::<u16>(), 0..64)) {
        prop_assert_eq!(collect(Flux::just(items.clone())), items);
    }

    #[test]
    fn mono_map_composition(value in any::<i32>()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);

        let chained = block(Mono::just(value).map(f).map(g));
        let fused = block(Mono::just(value).map(move |x| g(f(x))));
        prop_assert_eq!(chained, fused);
    }

    #[test]
    fn mono_filter_keeps_or_drops(value in any::<i32>()) {
        let kept = block(Mono::just(value).filter(|x| x % 2 == 0));
        prop_assert_eq!(kept, Some(value).filter(|x| x % 2 == 0));
    }
}
