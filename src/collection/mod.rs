//! Pure collection helpers over slices and records
//!
//! - `unique.rs` - order-preserving deduplication
//! - `group.rs` - grouping by canonical (serialized) key
//! - `sort.rs` - multi-key comparator composition
//! - `product.rs` - n-ary cartesian product of record sets
//! - `lookup.rs` - find / index helpers
//! - `tree.rs` - flat list to parent/child forest

mod group;
mod lookup;
mod product;
mod sort;
mod tree;
mod unique;

pub use group::{Group, canonical_key, group_by, group_by_field};
pub use lookup::{entries_to_records, find, find_index, includes_all, index_by};
pub use product::cartesian_product;
pub use sort::{NullOrdering, RecordComparator, SortKey, comparator_all, sort_records};
pub use tree::{TreeKeys, TreeNode, to_tree};
pub use unique::{unique, unique_by};
