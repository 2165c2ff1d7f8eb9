// ============================================================================
// src/rank/store.rs - Persisting rank changes
// ============================================================================

use crate::core::{RankError, Record, Result, Value};
use crate::rank::reorder::RankChange;
use crate::tasks;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{Instrument, Level, event, info_span};

/// Destination for rank changes produced by a reorder
#[async_trait]
pub trait RankStore: Send + Sync {
    fn name(&self) -> &'static str;

    /// Persist the new rank of one record
    async fn save_rank(&self, record: &Record, rank_field: &str, change: &RankChange)
        -> Result<()>;
}

/// How a batch of changes is pushed through a [`RankStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistMode {
    /// One write at a time; the first failure stops the batch
    #[default]
    Sequential,
    /// All writes at once; every write runs to completion
    Parallel,
}

/// Push every change through `store`.
///
/// `records` is the sequence the changes were computed against.
pub async fn persist_changes(
    store: &dyn RankStore,
    records: &[Record],
    rank_field: &str,
    changes: &[RankChange],
    mode: PersistMode,
) -> Result<()> {
    let span = info_span!(
        "rank.persist",
        store = store.name(),
        changes = changes.len(),
        mode = ?mode
    );

    let len = records.len();
    if let Some(bad) = changes.iter().find(|c| c.index >= len) {
        return Err(RankError::IndexOutOfBounds { index: bad.index, len });
    }

    let outcome = match mode {
        PersistMode::Sequential => {
            tasks::queue(changes, |change| {
                store.save_rank(&records[change.index], rank_field, change)
            })
            .instrument(span.clone())
            .await
        }
        PersistMode::Parallel => {
            tasks::parallel(changes, |change| {
                store.save_rank(&records[change.index], rank_field, change)
            })
            .instrument(span.clone())
            .await
        }
    };

    if let Err(err) = &outcome {
        let _enter = span.enter();
        event!(Level::ERROR, error = %err, "rank persistence failed");
    }
    outcome.map(|_| ())
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// Keeps the latest persisted rank per record index
#[derive(Debug, Default)]
pub struct MemoryRankStore {
    ranks: Mutex<HashMap<usize, Value>>,
    writes: Mutex<Vec<usize>>,
}

impl MemoryRankStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last persisted rank for the record at `index`
    pub fn rank(&self, index: usize) -> Result<Option<Value>> {
        Ok(self.ranks.lock()?.get(&index).cloned())
    }

    /// Record indices in the order their writes completed
    pub fn write_log(&self) -> Result<Vec<usize>> {
        Ok(self.writes.lock()?.clone())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.ranks.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl RankStore for MemoryRankStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn save_rank(
        &self,
        _record: &Record,
        _rank_field: &str,
        change: &RankChange,
    ) -> Result<()> {
        self.ranks.lock()?.insert(change.index, change.current.clone());
        self.writes.lock()?.push(change.index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(index: usize, previous: i64, current: i64) -> RankChange {
        RankChange {
            index,
            previous: Value::Integer(previous),
            current: Value::Integer(current),
        }
    }

    #[test]
    fn test_memory_store_sequential() {
        let store = MemoryRankStore::new();
        let records = vec![Record::new(), Record::new()];
        let changes = vec![change(1, 20, 10), change(0, 10, 20)];

        tokio_test::block_on(persist_changes(
            &store,
            &records,
            "rank",
            &changes,
            PersistMode::Sequential,
        ))
        .unwrap();

        assert_eq!(store.rank(0).unwrap(), Some(Value::Integer(20)));
        assert_eq!(store.rank(1).unwrap(), Some(Value::Integer(10)));
        assert_eq!(store.write_log().unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_persist_rejects_stale_index() {
        let store = MemoryRankStore::new();
        let records = vec![Record::new()];
        let changes = vec![change(3, 1, 2)];

        let err = tokio_test::block_on(persist_changes(
            &store,
            &records,
            "rank",
            &changes,
            PersistMode::Parallel,
        ))
        .unwrap_err();

        assert!(matches!(err, RankError::IndexOutOfBounds { index: 3, len: 1 }));
        assert!(store.is_empty().unwrap());
    }
}
