//! Group Merger.

/// Appends `incoming` after `existing`.
///
/// Both orders are preserved. Nothing is deduplicated or sorted, so the result
/// always holds `existing.len() + incoming.len()` entries.
#[must_use]
pub fn merge_groups(existing: &[String], incoming: Vec<String>) -> Vec<String> {
    let mut merged = Vec::with_capacity(existing.len() + incoming.len());
    merged.extend_from_slice(existing);
    merged.extend(incoming);
    merged
}
