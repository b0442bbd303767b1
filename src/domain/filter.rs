use super::models::{Catalog, Item};

/// Computes the suggestion list: catalog items not yet selected whose name
/// contains `query` case-insensitively, in catalog order.
///
/// Pure and idempotent; the caller re-invokes it whenever the query or the
/// selection changes instead of caching the result.
#[must_use]
pub fn suggestions<'a>(catalog: &'a Catalog, selected: &[String], query: &str) -> Vec<&'a Item> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|item| !selected.iter().any(|name| name == &item.name))
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}
