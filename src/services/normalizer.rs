// ABOUTME: Turns free-form handwritten recipe names into canonical title-cased display names
// ABOUTME: Pure text transform with no side effects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::NormalizationError;

/// Normalize a handwritten recipe name
///
/// Steps, in order: `-` and `_` become spaces, everything but ASCII letters
/// and spaces is dropped, each space-delimited word is title-cased, the
/// result is trimmed, and runs of spaces collapse to one.
///
/// # Errors
///
/// Returns [`NormalizationError::EmptyInput`] for an empty input and
/// [`NormalizationError::NothingLeft`] if no letters survive.
pub fn normalize(raw: &str) -> Result<String, NormalizationError> {
    if raw.is_empty() {
        return Err(NormalizationError::EmptyInput);
    }

    let filtered: String = raw
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();

    let titled = title_case(&filtered);
    let normalized = collapse_spaces(titled.trim());

    if normalized.is_empty() {
        return Err(NormalizationError::NothingLeft);
    }
    Ok(normalized)
}

/// Lower-case everything, then upper-case the first letter of each word
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c == ' ' {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

fn collapse_spaces(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_space = false;
    for c in input.chars() {
        if c == ' ' {
            if !previous_space {
                out.push(c);
            }
            previous_space = true;
        } else {
            out.push(c);
            previous_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_and_punctuation() {
        assert_eq!(
            normalize("basic-burger_recipe!!").unwrap(),
            "Basic Burger Recipe"
        );
    }

    #[test]
    fn test_mixed_case_and_digits() {
        assert_eq!(normalize("Riz@z RISO00tto!").unwrap(), "Rizz Risotto");
        assert_eq!(normalize("alpHa-alFRedo").unwrap(), "Alpha Alfredo");
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        assert_eq!(normalize("kAisenDon-----").unwrap(), "Kaisendon");
        assert_eq!(normalize("----yummy-wagyu").unwrap(), "Yummy Wagyu");
    }

    #[test]
    fn test_collapses_inner_runs() {
        assert_eq!(normalize("meat   ball__sub").unwrap(), "Meat Ball Sub");
    }

    #[test]
    fn test_tabs_are_stripped_not_treated_as_separators() {
        assert_eq!(normalize("fried\trice").unwrap(), "Friedrice");
    }

    #[test]
    fn test_rejects_empty_and_letterless_input() {
        assert_eq!(normalize(""), Err(NormalizationError::EmptyInput));
        assert_eq!(normalize("---"), Err(NormalizationError::NothingLeft));
        assert_eq!(normalize("@@@1122334"), Err(NormalizationError::NothingLeft));
        assert_eq!(normalize("     "), Err(NormalizationError::NothingLeft));
    }

    #[test]
    fn test_idempotent() {
        for raw in [
            "basic-burger_recipe!!",
            "Riz@z RISO00tto!",
            "  __Skibidi   spaghetti__ ",
            "ALREADY Clean",
        ] {
            let once = normalize(raw).unwrap();
            assert_eq!(normalize(&once).unwrap(), once, "input: {raw:?}");
        }
    }
}
