use itertools::Itertools as _;

use super::collections::Collections;
use super::types::DropResult;

/// Items that appear more than once across all collections (an item can only live in one place).
pub fn collection_integrity_issues(collections: &Collections) -> Vec<String> {
    collections
        .iter()
        .flat_map(|(collection_id, items)| items.iter().map(move |item| (item, collection_id)))
        .into_group_map()
        .into_iter()
        .filter(|(_, homes)| homes.len() > 1)
        .sorted_by(|a, b| a.0.cmp(b.0))
        .map(|(item, homes)| {
            format!(
                "integrity: item {item:?} appears {} times in {homes:?}",
                homes.len()
            )
        })
        .collect()
}

/// Everything that would make `result` fail (or be silently wrong) against `collections`.
///
/// Empty for no-op results.
pub fn drop_result_issues(result: &DropResult, collections: &Collections) -> Vec<String> {
    let mut issues = Vec::new();
    if result.is_noop() {
        return issues;
    }

    let source = &result.source;
    match collections.get(&source.collection_id) {
        None => issues.push(format!(
            "integrity: source collection {:?} missing",
            source.collection_id
        )),
        Some(items) => match items.get(source.index) {
            None => issues.push(format!(
                "integrity: source {source} out of bounds (len {})",
                items.len()
            )),
            Some(found) if *found != result.item_id => issues.push(format!(
                "integrity: source {source} holds {found:?}, not dragged item {:?}",
                result.item_id
            )),
            Some(_) => {}
        },
    }

    if let Some(destination) = &result.destination {
        match collections.len_of(&destination.collection_id) {
            None => issues.push(format!(
                "integrity: destination collection {:?} missing",
                destination.collection_id
            )),
            Some(len) if destination.index > len => issues.push(format!(
                "integrity: destination {destination} out of bounds (len {len})"
            )),
            Some(_) => {}
        }
    }

    issues
}
