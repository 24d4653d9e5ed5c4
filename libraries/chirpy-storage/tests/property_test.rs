//! Property-based tests for the record store
//!
//! Uses proptest to drive random create/delete sequences against a real file.

use chirpy_core::{AuthorFilter, SortOrder, UserId};
use chirpy_storage::{chirps, JsonStore};
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Op {
    Create { author: u64 },
    /// Delete the n-th (modulo) identity handed out so far
    Delete { pick: usize },
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u64..4).prop_map(|author| Op::Create { author }),
        1 => any::<usize>().prop_map(|pick| Op::Delete { pick }),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: identities strictly increase and are never reissued, and the
    /// listed set is exactly what was created minus what was deleted
    #[test]
    fn identities_are_monotonic_and_never_reused(
        ops in prop::collection::vec(arbitrary_op(), 1..40)
    ) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("database.json"));
        let rt = runtime();

        let mut issued: Vec<u64> = Vec::new();
        let mut live: BTreeSet<u64> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Create { author } => {
                    let chirp = rt
                        .block_on(chirps::create(&store, "body", UserId::new(author)))
                        .unwrap();
                    let id = chirp.id.get();
                    if let Some(&last) = issued.last() {
                        prop_assert!(id > last, "id {} not greater than {}", id, last);
                    }
                    issued.push(id);
                    live.insert(id);
                }
                Op::Delete { pick } => {
                    if issued.is_empty() {
                        continue;
                    }
                    let id = issued[pick % issued.len()];
                    rt.block_on(chirps::delete(&store, chirpy_core::ChirpId::new(id)))
                        .unwrap();
                    live.remove(&id);
                }
            }
        }

        let listed: BTreeSet<u64> = rt
            .block_on(chirps::list(&store, AuthorFilter::All, SortOrder::Asc))
            .unwrap()
            .iter()
            .map(|c| c.id.get())
            .collect();
        prop_assert_eq!(listed, live);
    }

    /// Property: filtering by author returns exactly that author's chirps
    #[test]
    fn author_filter_is_exact(authors in prop::collection::vec(0u64..5, 1..30), target in 0u64..5) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("database.json"));
        let rt = runtime();

        for author in &authors {
            rt.block_on(chirps::create(&store, "x", UserId::new(*author))).unwrap();
        }

        let filtered = rt
            .block_on(chirps::list(&store, AuthorFilter::Author(UserId::new(target)), SortOrder::Asc))
            .unwrap();
        let expected = authors.iter().filter(|a| **a == target).count();

        prop_assert_eq!(filtered.len(), expected);
        prop_assert!(filtered.iter().all(|c| c.author_id == UserId::new(target)));
    }
}
