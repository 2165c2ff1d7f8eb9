/// What to do when two records in the rotated interval share a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateRankPolicy {
    /// Rotate anyway. Ties keep their positional order, so the result is
    /// reproducible but not meaningful.
    #[default]
    Allow,
    /// Fail with [`RankError::DuplicateRank`](crate::RankError::DuplicateRank)
    /// before mutating anything.
    Reject,
}

/// Reorder engine configuration
#[derive(Debug, Clone)]
pub struct ReorderConfig {
    /// Handling of tied ranks inside the affected interval
    pub duplicate_ranks: DuplicateRankPolicy,

    /// Identifier scans longer than this emit a debug event
    pub id_lookup_warn_threshold: usize,
}

impl ReorderConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            duplicate_ranks: DuplicateRankPolicy::Allow,
            id_lookup_warn_threshold: 10_000,
        }
    }

    /// Set the duplicate rank policy
    pub fn duplicate_ranks(mut self, policy: DuplicateRankPolicy) -> Self {
        self.duplicate_ranks = policy;
        self
    }

    /// Shorthand for [`DuplicateRankPolicy::Reject`]
    pub fn strict(self) -> Self {
        self.duplicate_ranks(DuplicateRankPolicy::Reject)
    }

    /// Set the identifier scan threshold
    pub fn id_lookup_warn_threshold(mut self, threshold: usize) -> Self {
        self.id_lookup_warn_threshold = threshold;
        self
    }
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self::new()
    }
}
