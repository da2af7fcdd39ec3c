// ABOUTME: Integration tests for recipe name normalization
// ABOUTME: Covers canonical outputs, rejected inputs, and output shape properties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used)]

use cookbook_server::errors::NormalizationError;
use cookbook_server::services::normalizer::normalize;

#[test]
fn test_known_names() {
    let cases = [
        ("Riz@z RISO00tto!", "Rizz Risotto"),
        ("alpHa-alFRedo", "Alpha Alfredo"),
        ("kAisenDon-----", "Kaisendon"),
        ("----yummy-wagyu", "Yummy Wagyu"),
        ("meatball", "Meatball"),
        ("skibidi_spaghetti", "Skibidi Spaghetti"),
        ("  many   spaces here ", "Many Spaces Here"),
        ("tab\tjoined", "Tabjoined"),
    ];

    for (raw, expected) in cases {
        assert_eq!(normalize(raw).unwrap(), expected, "input {raw:?}");
    }
}

#[test]
fn test_rejected_inputs() {
    assert_eq!(normalize(""), Err(NormalizationError::EmptyInput));
    for raw in ["@@@1122334", "     ", "-_-", "42"] {
        assert!(normalize(raw).is_err(), "input {raw:?} should be rejected");
    }
}

#[test]
fn test_output_shape() {
    let inputs = [
        "Riz@z RISO00tto!",
        "a-b_c d",
        "ÜBER ñame",
        "x",
        "--Hello--World--",
        "MiXeD CaSe WoRdS",
    ];

    for raw in inputs {
        let Ok(name) = normalize(raw) else {
            continue;
        };

        assert!(!name.is_empty());
        assert_eq!(name.trim(), name, "no outer whitespace in {name:?}");
        assert!(!name.contains("  "), "no double spaces in {name:?}");
        assert!(
            name.chars().all(|c| c.is_ascii_alphabetic() || c == ' '),
            "only letters and spaces in {name:?}"
        );
        for word in name.split(' ') {
            let mut chars = word.chars();
            assert!(chars.next().is_some_and(|c| c.is_ascii_uppercase()));
            assert!(chars.all(|c| c.is_ascii_lowercase()));
        }

        // Normalizing twice changes nothing
        assert_eq!(normalize(&name).unwrap(), name);
    }
}
