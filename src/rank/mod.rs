//! Rank-based reordering
//!
//! Records carry a numeric rank field; display order is the order of that
//! field. Moving one record onto another's rank rotates the rank values of
//! every record between them instead of renumbering the sequence.
//!
//! - `reorder.rs` - rotation engine (`RankReorder`)
//! - `config.rs` - engine configuration
//! - `store.rs` - persistence seam for the resulting changes

mod config;
mod reorder;
mod store;

pub use config::{DuplicateRankPolicy, ReorderConfig};
pub use reorder::{RankChange, RankReorder, reorder, reorder_by_id};
pub use store::{MemoryRankStore, PersistMode, RankStore, persist_changes};
