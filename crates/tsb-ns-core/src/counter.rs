use serde_json::Value;

use crate::entity::EntityRecord;

const SELECTOR_NAMES_KEY: &str = "names";

/// Number of namespaces named by the entity's namespace selector.
///
/// A missing selector, a selector that is not an object, or a selector
/// without a `names` list all count as zero. Duplicate names are counted.
pub fn count_namespaces(entity: &EntityRecord) -> usize {
    entity
        .namespace_selector()
        .and_then(Value::as_object)
        .and_then(|selector| selector.get(SELECTOR_NAMES_KEY))
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// Sum of [`count_namespaces`] over a group listing.
pub fn sum_namespaces(entities: &[EntityRecord]) -> usize {
    entities.iter().map(count_namespaces).sum()
}
