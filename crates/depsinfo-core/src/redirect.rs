//! Redirect chain resolution.

use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};

/// Follows `redirects` from `specifier` until it reaches a specifier that
/// isn't itself redirected.
///
/// # Errors
/// Returns `Error::RedirectCycle` if a specifier recurs during resolution.
pub fn resolve(redirects: &HashMap<String, String>, specifier: &str) -> Result<String> {
    let mut current = specifier;
    let mut seen: HashSet<&str> = HashSet::new();
    let mut chain: Vec<&str> = Vec::new();

    while let Some(next) = redirects.get(current) {
        seen.insert(current);
        chain.push(current);

        if seen.contains(next.as_str()) {
            chain.push(next);
            return Err(Error::RedirectCycle {
                chain: chain.into_iter().map(str::to_string).collect(),
            });
        }
        current = next;
    }

    Ok(current.to_string())
}
