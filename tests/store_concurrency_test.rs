// ABOUTME: Concurrency tests for the shared entry store
// ABOUTME: Racing registrations of one name admit exactly one; readers never see partial state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used)]

mod common;

use cookbook_server::errors::{RegistrationError, ResolutionError};
use cookbook_server::models::EntryRequest;
use cookbook_server::store::EntryStore;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_registrations_admit_one() {
    common::init_test_logging();
    let store = EntryStore::new();

    let handles: Vec<_> = (0..32)
        .map(|cook_time| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .register(EntryRequest::ingredient("Saffron", cook_time))
                    .await
            })
        })
        .collect();

    let mut accepted = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(RegistrationError::DuplicateName { .. }) => duplicates += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(accepted, 1);
    assert_eq!(duplicates, 31);
    assert_eq!(store.len().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_summaries_during_registration() {
    let store = EntryStore::new();
    store
        .register(EntryRequest::recipe("Paella", &[("Rice", 2), ("Saffron", 1)]))
        .await
        .unwrap();

    let reader = {
        let store = store.clone();
        tokio::spawn(async move {
            let mut outcomes = Vec::new();
            for _ in 0..200 {
                outcomes.push(store.summarize("Paella").await);
                tokio::task::yield_now().await;
            }
            outcomes
        })
    };

    store
        .register(EntryRequest::ingredient("Rice", 10))
        .await
        .unwrap();
    store
        .register(EntryRequest::ingredient("Saffron", 1))
        .await
        .unwrap();

    // Every observation is either a clean failure or the complete summary
    for outcome in reader.await.unwrap() {
        match outcome {
            Ok(summary) => {
                assert_eq!(summary.cook_time, 21);
                assert_eq!(summary.quantity_of("Rice"), Some(2));
                assert_eq!(summary.quantity_of("Saffron"), Some(1));
            }
            Err(err) => assert!(matches!(err, ResolutionError::ResolutionFailure { .. })),
        }
    }

    assert_eq!(store.summarize("Paella").await.unwrap().cook_time, 21);
}
