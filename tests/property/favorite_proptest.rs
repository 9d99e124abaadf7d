//! Property-based tests for FavoritesRecord

use campsite_favorites::shared::{BulkAddOutcome, BulkAddPolicy, CampsiteId, FavoritesRecord};
use proptest::prelude::*;
use std::collections::HashSet;
use uuid::Uuid;

fn id(raw: &str) -> CampsiteId {
    CampsiteId::parse(raw).unwrap()
}

fn ids(raw: &[String]) -> Vec<CampsiteId> {
    raw.iter().map(|c| id(c)).collect()
}

proptest! {
    #[test]
    fn test_operations_never_duplicate(
        initial in proptest::collection::vec("[a-e]", 0..6),
        batch in proptest::collection::vec("[a-h]", 1..8),
        single in "[a-h]",
    ) {
        let mut record = FavoritesRecord::new(Uuid::new_v4());
        record.add_campsites(ids(&initial), BulkAddPolicy::Skip);
        record.add_campsites(ids(&batch), BulkAddPolicy::Skip);
        record.add_campsite(id(&single));

        let mut seen = HashSet::new();
        for campsite in &record.campsites {
            prop_assert!(seen.insert(campsite.clone()));
        }
        prop_assert!(record.contains(&id(&single)));
    }

    #[test]
    fn test_remove_preserves_relative_order(
        entries in proptest::collection::hash_set("[a-j]", 1..8),
        pick in any::<proptest::sample::Index>(),
    ) {
        let entries: Vec<String> = entries.into_iter().collect();
        let mut record = FavoritesRecord::new(Uuid::new_v4());
        record.campsites = ids(&entries);
        let target = pick.get(&entries).clone();

        record.remove_campsite(&id(&target));

        let expected: Vec<CampsiteId> = entries
            .iter()
            .filter(|c| **c != target)
            .map(|c| id(c))
            .collect();
        prop_assert_eq!(record.campsites, expected);
    }

    #[test]
    fn test_rejected_bulk_add_leaves_record_unchanged(
        initial in proptest::collection::hash_set("[a-e]", 1..5),
        batch in proptest::collection::vec("[a-h]", 1..8),
    ) {
        let initial: Vec<String> = initial.into_iter().collect();
        let mut record = FavoritesRecord::new(Uuid::new_v4());
        record.campsites = ids(&initial);
        let before = record.clone();

        match record.add_campsites(ids(&batch), BulkAddPolicy::Reject) {
            BulkAddOutcome::Rejected(existing) => {
                prop_assert!(initial.contains(&existing.as_str().to_string()));
                prop_assert_eq!(record, before);
            }
            BulkAddOutcome::Added(added) => {
                prop_assert!(batch.iter().all(|c| !initial.contains(c)));
                prop_assert_eq!(record.campsites.len(), initial.len() + added.len());
            }
        }
    }
}
