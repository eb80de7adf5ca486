//! Deterministic grouping and sorting of entities.

use std::cmp::Ordering;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::data::Entity;

/// Bucket items by key.
///
/// Groups appear in the order their first member was seen and each bucket
/// keeps input order. A tuple key gives nested sectioning in component order.
pub fn group_by<'a, T, K, I, F>(items: I, mut key: F) -> IndexMap<K, Vec<&'a T>>
where
    T: ?Sized + 'a,
    K: Hash + Eq,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<&'a T>> = IndexMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item);
    }
    groups
}

/// Entities ordered by display name; equal names keep their input order.
pub fn sorted_by_display_name<'a, T, I>(items: I) -> Vec<&'a T>
where
    T: Entity + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut indexed: Vec<(usize, &'a T)> = items.into_iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| {
        a.display_name()
            .cmp(b.display_name())
            .then_with(|| ia.cmp(ib))
    });
    indexed.into_iter().map(|(_, item)| item).collect()
}

/// Reorder groups in place by a comparison over their keys; the sort is
/// stable, so equal keys keep first-seen order.
pub fn sort_groups_by<K, V, F>(groups: &mut IndexMap<K, V>, mut compare: F)
where
    F: FnMut(&K, &K) -> Ordering,
{
    groups.sort_by(|ka, _, kb, _| compare(ka, kb));
}
