//! # Collection materialization and optimistic merging
//!
//! The remote API exposes single-resource-by-id endpoints but no listing
//! endpoints, so every "get all" in the client is synthesized here:
//! [`materialize`] probes a bounded id range concurrently and keeps the
//! hits, in probe order. Locally-initiated mutations are then folded into
//! the materialized snapshot with [`append_created`] / [`remove_by_id`]
//! instead of re-fetching the whole range.
//!
//! ## Probing
//!
//! Each probe settles to a [`Probe`]: `Found(record)` on a decoded 2xx,
//! `Absent` on anything else. Absence is an expected outcome at this layer
//! (most ids in the range simply don't exist), so errors are swallowed here
//! and never reach the caller — a zero-member collection is a valid result,
//! indistinguishable from "nothing exists at ids 1..=bound".
//!
//! The fan-in join preserves input order, so results come back sorted by
//! ascending probed id no matter how network completions interleave.
//! Records with ids above the probe bound are invisible to this operation;
//! that completeness bound is a documented limitation, not an error.
//!
//! ## Merging
//!
//! Created records append to the end of the snapshot: a fresh
//! materialization might interleave them by id, but the in-memory view is
//! deliberately time-ordered for newly created items. Deletes remove the
//! matching id; a missing match means the snapshot was already consistent
//! and the merge is a silent no-op.

use std::future::Future;

use futures::future::join_all;

/// The outcome of probing a single id.
#[derive(Clone, Debug, PartialEq)]
pub enum Probe<T> {
    Found(T),
    Absent,
}

impl<T> Probe<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Probe::Found(record) => Some(record),
            Probe::Absent => None,
        }
    }
}

/// A record that carries a server-assigned numeric id.
pub trait Identified {
    fn id(&self) -> i64;
}

/// Reconstruct a collection by probing ids `1..=bound` concurrently.
///
/// `fetch_one` is one by-id fetch; any error it returns counts as "no such
/// id". The call completes once every probe has settled and never fails.
pub async fn materialize<T, E, F, Fut>(bound: i64, fetch_one: F) -> Vec<T>
where
    F: Fn(i64) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let probes = (1..=bound).map(|id| {
        let fetch = fetch_one(id);
        async move {
            match fetch.await {
                Ok(record) => Probe::Found(record),
                Err(_) => Probe::Absent,
            }
        }
    });

    let settled = join_all(probes).await;
    let found: Vec<T> = settled
        .into_iter()
        .filter_map(Probe::into_option)
        .collect();

    tracing::debug!("materialized {} of {} probed ids", found.len(), bound);
    found
}

/// Fold a successful create into the snapshot.
///
/// The server-assigned record goes to the end: newly created items always
/// sort after everything that was materialized before them.
pub fn append_created<T>(snapshot: &mut Vec<T>, created: T) {
    snapshot.push(created);
}

/// Fold a successful delete into the snapshot.
///
/// Returns `false` when no member matched — e.g. a stale view already
/// dropped it — which callers treat as already-consistent, not an error.
pub fn remove_by_id<T: Identified>(snapshot: &mut Vec<T>, id: i64) -> bool {
    let before = snapshot.len();
    snapshot.retain(|record| record.id() != id);
    snapshot.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    #[derive(Clone, Debug, PartialEq)]
    struct Record {
        id: i64,
        label: String,
    }

    impl Identified for Record {
        fn id(&self) -> i64 {
            self.id
        }
    }

    fn backing(ids: &[i64]) -> HashMap<i64, Record> {
        ids.iter()
            .map(|&id| {
                (
                    id,
                    Record {
                        id,
                        label: format!("record-{id}"),
                    },
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn materialize_returns_existing_ids_in_probe_order() {
        let records = backing(&[2, 4]);

        let found = materialize(5, |id| {
            let record = records.get(&id).cloned();
            async move { record.ok_or("not found") }
        })
        .await;

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, 2);
        assert_eq!(found[1].id, 4);
    }

    #[tokio::test]
    async fn materialize_order_is_independent_of_latency() {
        // Low ids respond slowest; output must still be ascending.
        let records = backing(&[1, 3, 5, 7]);

        let found = materialize(8, |id| {
            let record = records.get(&id).cloned();
            async move {
                tokio::time::sleep(Duration::from_millis(20 - 2 * id as u64)).await;
                record.ok_or("not found")
            }
        })
        .await;

        let ids: Vec<i64> = found.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 5, 7]);
    }

    #[tokio::test]
    async fn materialize_empty_range_is_not_an_error() {
        let found: Vec<Record> =
            materialize(10, |_| async { Err::<Record, &str>("not found") }).await;
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn materialize_swallows_mixed_failures() {
        // id 2 exists, id 1 errors like a 500, the rest are plain misses.
        let records = backing(&[2]);

        let found = materialize(4, |id| {
            let record = records.get(&id).cloned();
            async move {
                if id == 1 {
                    Err("server exploded")
                } else {
                    record.ok_or("not found")
                }
            }
        })
        .await;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn append_created_places_record_last() {
        let mut snapshot = vec![
            Record {
                id: 5,
                label: "five".into(),
            },
            Record {
                id: 9,
                label: "nine".into(),
            },
        ];

        // A created record whose id would interleave still lands at the end
        append_created(
            &mut snapshot,
            Record {
                id: 7,
                label: "seven".into(),
            },
        );

        assert_eq!(snapshot.last().unwrap().id, 7);
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn remove_by_id_keeps_relative_order() {
        let mut snapshot: Vec<Record> = [1, 2, 3, 4]
            .iter()
            .map(|&id| Record {
                id,
                label: format!("r{id}"),
            })
            .collect();

        assert!(remove_by_id(&mut snapshot, 3));

        let ids: Vec<i64> = snapshot.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn remove_by_id_missing_is_a_silent_no_op() {
        let mut snapshot: Vec<Record> = [1, 2]
            .iter()
            .map(|&id| Record {
                id,
                label: format!("r{id}"),
            })
            .collect();

        assert!(!remove_by_id(&mut snapshot, 42));
        assert_eq!(snapshot.len(), 2);
    }
}
