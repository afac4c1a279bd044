//! Closest-name suggestions for template and field names.

use crate::constants::{MAX_NAME_SUGGESTIONS, SIMILARITY_THRESHOLD_PERCENT};
use strsim::levenshtein;

/// Find names similar to `target` using Levenshtein distance.
///
/// Returns at most [`MAX_NAME_SUGGESTIONS`] candidates, closest first, whose
/// distance is within [`SIMILARITY_THRESHOLD_PERCENT`] of the target length.
/// Ties keep the order of `available`.
///
/// # Examples
///
/// ```
/// use flashprompt::utils::find_similar_names;
///
/// let names = vec!["greeting".to_string(), "standup".to_string()];
/// assert_eq!(find_similar_names("greting", &names), vec!["greeting".to_string()]);
/// ```
#[must_use]
pub fn find_similar_names<S: AsRef<str>>(target: &str, available: &[S]) -> Vec<String> {
    let limit = target.chars().count().max(1) * SIMILARITY_THRESHOLD_PERCENT / 100;

    let mut scored: Vec<_> = available
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| *name != target)
        .map(|name| (name, levenshtein(target, name)))
        .filter(|(_, dist)| *dist <= limit)
        .collect();

    scored.sort_by_key(|(_, dist)| *dist);

    scored.into_iter().take(MAX_NAME_SUGGESTIONS).map(|(name, _)| name.to_string()).collect()
}
