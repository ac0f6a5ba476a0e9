// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generated titles for bug cards.
//!
//! Titles follow `Bug-RandomWord-<n>` with `n` in `0..=999`. The word is a
//! fixed placeholder; only the numeric suffix is random.

use rand::Rng;

/// Fixed word embedded in every generated bug title.
pub const BUG_TITLE_WORD: &str = "RandomWord";

/// Largest numeric suffix a generated title can carry.
pub const MAX_BUG_SUFFIX: u16 = 999;

/// Formats a bug title with the given suffix.
pub fn bug_title(suffix: u16) -> String {
    format!("Bug-{BUG_TITLE_WORD}-{suffix}")
}

/// Generates a bug title using `rng` for the suffix.
pub fn random_bug_title<R: Rng>(rng: &mut R) -> String {
    bug_title(rng.gen_range(0..=MAX_BUG_SUFFIX))
}

/// Returns the suffix if `title` is a well-formed generated bug title.
pub fn parse_bug_title(title: &str) -> Option<u16> {
    let suffix = title
        .strip_prefix("Bug-")?
        .strip_prefix(BUG_TITLE_WORD)?
        .strip_prefix('-')?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok().filter(|n| *n <= MAX_BUG_SUFFIX)
}

#[cfg(test)]
#[path = "title_tests.rs"]
mod tests;
