// ============================================================================
// rankshift Library
// ============================================================================

//! Rank-based record reordering and tabular record utilities.
//!
//! The core is [`RankReorder`]: records carry a numeric rank field, and
//! moving one record onto another's rank rotates the ranks of the records in
//! between instead of renumbering the whole sequence.
//!
//! ```
//! use rankshift::{record, reorder, Value};
//!
//! let mut tasks = vec![
//!     record! { "id" => "a", "sort" => 10 },
//!     record! { "id" => "b", "sort" => 20 },
//!     record! { "id" => "c", "sort" => 30 },
//!     record! { "id" => "d", "sort" => 40 },
//! ];
//!
//! // Move "c" in front of "a"
//! let changed = reorder(&mut tasks, "sort", 2, 0)?;
//!
//! assert_eq!(changed.len(), 3);
//! assert_eq!(tasks[2].get("sort"), Some(&Value::Integer(10)));
//! assert_eq!(tasks[0].get("sort"), Some(&Value::Integer(20)));
//! assert_eq!(tasks[1].get("sort"), Some(&Value::Integer(30)));
//! # Ok::<(), rankshift::RankError>(())
//! ```

pub mod collection;
pub mod core;
pub mod json;
pub mod rank;
pub mod tasks;
pub mod text;

// Re-export main types for convenience
pub use crate::core::{RankError, Record, Result, Value};
pub use crate::rank::{
    DuplicateRankPolicy, MemoryRankStore, PersistMode, RankChange, RankReorder, RankStore,
    ReorderConfig, persist_changes, reorder, reorder_by_id,
};
