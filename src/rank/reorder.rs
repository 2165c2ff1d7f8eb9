// ============================================================================
// src/rank/reorder.rs - Rank rotation over a contiguous block of rank values
// ============================================================================
//
// Moving a record from one rank to another never renumbers the whole
// sequence. Only records whose rank lies between the source rank and the
// target rank (inclusive) take part: their rank values are rotated by one
// slot, so the moved record lands on the target rank and every other record
// in the block shifts one slot toward the rank it vacated.
//
// Positions inside the slice are never touched; display order is expected
// to be derived by sorting on the rank field.
//
// ============================================================================

use crate::core::{RankError, Record, Result, Value};
use crate::rank::config::{DuplicateRankPolicy, ReorderConfig};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{Level, event, info_span};

/// One rank reassignment produced by a reorder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankChange {
    /// Position of the record in the sequence
    pub index: usize,
    /// Rank before the move
    pub previous: Value,
    /// Rank after the move
    pub current: Value,
}

// ============================================================================
// REORDER ENGINE
// ============================================================================

/// Computes and applies rank rotations
#[derive(Debug, Clone, Default)]
pub struct RankReorder {
    config: ReorderConfig,
}

impl RankReorder {
    pub fn new(config: ReorderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Move the record at `source` onto the rank currently held by the record
    /// at `target`, mutating rank fields in place.
    ///
    /// Returns the affected records in rotation order, source first. An empty
    /// list means nothing moved (equal ranks, including `source == target`).
    ///
    /// # Examples
    ///
    /// ```
    /// use rankshift::{record, RankReorder};
    ///
    /// let mut rows = vec![
    ///     record! { "rank" => 10 },
    ///     record! { "rank" => 20 },
    ///     record! { "rank" => 30 },
    /// ];
    /// let changed = RankReorder::default().reorder(&mut rows, "rank", 0, 2)?;
    ///
    /// assert_eq!(changed.len(), 3);
    /// assert_eq!(rows[0].get("rank"), Some(&30.into()));
    /// # Ok::<(), rankshift::RankError>(())
    /// ```
    pub fn reorder(
        &self,
        records: &mut [Record],
        rank_field: &str,
        source: usize,
        target: usize,
    ) -> Result<Vec<RankChange>> {
        let span = info_span!(
            "rank.reorder",
            rank_field = %rank_field,
            source = source,
            target = target
        );
        let _enter = span.enter();

        let changes = self.plan(records, rank_field, source, target)?;
        Self::apply(records, rank_field, &changes)?;

        event!(Level::DEBUG, changed = changes.len(), "rank rotation applied");
        Ok(changes)
    }

    /// Like [`reorder`](Self::reorder), with both records located by identifier.
    pub fn reorder_by_id(
        &self,
        records: &mut [Record],
        rank_field: &str,
        id_field: &str,
        source_id: &Value,
        target_id: &Value,
    ) -> Result<Vec<RankChange>> {
        let source = self.resolve_id(records, id_field, source_id)?;
        let target = self.resolve_id(records, id_field, target_id)?;
        self.reorder(records, rank_field, source, target)
    }

    /// Compute the rotation without mutating anything.
    pub fn plan(
        &self,
        records: &[Record],
        rank_field: &str,
        source: usize,
        target: usize,
    ) -> Result<Vec<RankChange>> {
        let source_rank = rank_at(records, rank_field, source)?;
        let target_rank = rank_at(records, rank_field, target)?;

        let direction = source_rank.compare(target_rank)?;
        if direction == Ordering::Equal {
            return Ok(Vec::new());
        }
        let forward = direction == Ordering::Less;
        let (lo, hi) = if forward {
            (source_rank, target_rank)
        } else {
            (target_rank, source_rank)
        };

        let mut block: Vec<(usize, &Value)> = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let rank = record.get(rank_field).filter(|v| v.is_numeric())?;
                within(rank, lo, hi).then_some((index, rank))
            })
            .collect();

        // Stable: tied ranks keep their positional order.
        block.sort_by(|(_, a), (_, b)| {
            let ordering = a.compare(b).unwrap_or(Ordering::Equal);
            if forward { ordering } else { ordering.reverse() }
        });

        if self.config.duplicate_ranks == DuplicateRankPolicy::Reject {
            let tied = block
                .windows(2)
                .find(|w| w[0].1.compare(w[1].1).ok() == Some(Ordering::Equal));
            if let Some(pair) = tied {
                return Err(RankError::DuplicateRank {
                    field: rank_field.to_string(),
                    rank: pair[0].1.to_string(),
                });
            }
        }

        Ok(rotate(&block))
    }

    /// Write planned changes back onto `records`.
    ///
    /// Every index is checked before the first write, so a bad change list
    /// leaves the sequence untouched.
    pub fn apply(records: &mut [Record], rank_field: &str, changes: &[RankChange]) -> Result<()> {
        let len = records.len();
        if let Some(bad) = changes.iter().find(|c| c.index >= len) {
            return Err(RankError::IndexOutOfBounds { index: bad.index, len });
        }

        for change in changes {
            records[change.index].set(rank_field, change.current.clone());
        }
        Ok(())
    }

    /// Position of the first record whose `id_field` equals `id`.
    pub fn resolve_id(&self, records: &[Record], id_field: &str, id: &Value) -> Result<usize> {
        if records.len() > self.config.id_lookup_warn_threshold {
            event!(
                Level::DEBUG,
                len = records.len(),
                id_field = %id_field,
                "linear identifier scan over large sequence"
            );
        }

        records
            .iter()
            .position(|record| record.get(id_field) == Some(id))
            .ok_or_else(|| RankError::IdNotFound {
                field: id_field.to_string(),
                id: id.to_string(),
            })
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn rank_at<'a>(records: &'a [Record], rank_field: &str, index: usize) -> Result<&'a Value> {
    let record = records.get(index).ok_or(RankError::IndexOutOfBounds {
        index,
        len: records.len(),
    })?;
    let rank = record
        .get(rank_field)
        .ok_or_else(|| RankError::MissingField(rank_field.to_string()))?;

    if !rank.is_numeric() {
        return Err(RankError::TypeMismatch(format!(
            "Rank field '{}' at index {} holds {}, expected a number",
            rank_field,
            index,
            rank.type_name()
        )));
    }
    Ok(rank)
}

fn within(rank: &Value, lo: &Value, hi: &Value) -> bool {
    matches!(rank.compare(lo), Ok(Ordering::Greater | Ordering::Equal))
        && matches!(rank.compare(hi), Ok(Ordering::Less | Ordering::Equal))
}

/// Shift every rank one slot forward through the block; the head of the
/// block receives the last rank.
fn rotate(block: &[(usize, &Value)]) -> Vec<RankChange> {
    let Some(&(head_index, head_rank)) = block.first() else {
        return Vec::new();
    };

    let mut carry = head_rank.clone();
    let mut tail = Vec::with_capacity(block.len() - 1);
    for &(index, rank) in &block[1..] {
        tail.push(RankChange {
            index,
            previous: rank.clone(),
            current: std::mem::replace(&mut carry, rank.clone()),
        });
    }

    let mut changes = Vec::with_capacity(block.len());
    changes.push(RankChange {
        index: head_index,
        previous: head_rank.clone(),
        current: carry,
    });
    changes.extend(tail);
    changes
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// [`RankReorder::reorder`] with the default configuration.
pub fn reorder(
    records: &mut [Record],
    rank_field: &str,
    source: usize,
    target: usize,
) -> Result<Vec<RankChange>> {
    RankReorder::default().reorder(records, rank_field, source, target)
}

/// [`RankReorder::reorder_by_id`] with the default configuration.
pub fn reorder_by_id(
    records: &mut [Record],
    rank_field: &str,
    id_field: &str,
    source_id: &Value,
    target_id: &Value,
) -> Result<Vec<RankChange>> {
    RankReorder::default().reorder_by_id(records, rank_field, id_field, source_id, target_id)
}
