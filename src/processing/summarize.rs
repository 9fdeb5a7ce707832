//! Prefix list summarization.
//!
//! Collapses a list of prefixes into the shortest equivalent list by
//! dropping covered entries and joining sibling blocks into their parent.

use crate::models::Prefix;

/// Summarize a list of prefixes.
///
/// # Arguments
/// * `prefixes` - Prefixes of either family, in any order, host bits allowed
///
/// # Returns
/// Masked prefixes sorted by address then length. IPv4 and IPv6 entries
/// are never merged together. The input slice is left untouched.
///
/// # Examples
/// ```
/// use ipnetwork_calc::models::Prefix;
/// use ipnetwork_calc::processing::summarize;
///
/// let input: Vec<Prefix> = ["10.0.1.0/24", "10.0.0.0/24"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(summarize(&input), vec!["10.0.0.0/23".parse::<Prefix>().unwrap()]);
/// ```
pub fn summarize(prefixes: &[Prefix]) -> Vec<Prefix> {
    let mut current: Vec<Prefix> = prefixes.iter().map(Prefix::masked).collect();
    current.sort();

    loop {
        let mut merged = merge_pass(&current);
        if merged.len() == current.len() {
            return merged;
        }
        // a parent can land after one of its own halves
        merged.sort();
        current = merged;
    }
}

/// One left-to-right pass merging adjacent pairs. An entry consumed by a
/// merge is not considered again until the next pass.
fn merge_pass(prefixes: &[Prefix]) -> Vec<Prefix> {
    let mut result = Vec::with_capacity(prefixes.len());
    let mut i = 0;
    while i < prefixes.len() {
        let prefix = prefixes[i];
        match prefixes.get(i + 1).and_then(|next| merge_pair(&prefix, next)) {
            Some(merged) => {
                result.push(merged);
                i += 2;
            }
            None => {
                result.push(prefix);
                i += 1;
            }
        }
    }
    result
}

/// Merge two sorted neighbours into one prefix, if possible.
fn merge_pair(first: &Prefix, second: &Prefix) -> Option<Prefix> {
    if first.addr().is_v4() != second.addr().is_v4() {
        return None;
    }
    if first.overlaps(second) {
        return Some(*first);
    }
    if first.bits() != second.bits() {
        return None;
    }
    // siblings share the parent one bit up
    let parent = first.parent()?;
    if second.parent()? == parent {
        return Some(parent);
    }
    None
}
