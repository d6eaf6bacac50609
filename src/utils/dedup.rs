//! Deduplication of repeatable metadata elements.

use std::collections::HashSet;

/// Remove empty strings and duplicate values from a repeatable element,
/// preserving first-seen order.
///
/// Pure and idempotent: deduplicating an already deduplicated sequence
/// returns it unchanged.
pub fn dedup_strings(items: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unique = Vec::new();

    for item in items {
        if item.is_empty() {
            continue;
        }
        if seen.insert(item.as_str()) {
            unique.push(item.clone());
        }
    }

    unique
}
