//! Arc policy and graph configuration.
//!
//! The edge store counts parallel edges, but neighbor queries and the edge
//! removal step of the sort only look at whether a count is *admitted* as an
//! arc. [`ArcPolicy`] decides that.

/// Rule deciding which edge counts are treated as an arc.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ArcPolicy {
    /// Only a count of exactly one is an arc. Parallel edges (count >= 2) are
    /// invisible to `neighbors` and are never removed during sorting, so their
    /// target keeps a non-zero in-degree.
    #[default]
    PresenceFlag,
    /// Any non-zero count is an arc; sorting removes all parallel edges at once.
    Multiplicity,
}

impl ArcPolicy {
    /// Whether an edge count of `count` is admitted as an arc.
    #[inline]
    pub fn admits(self, count: u32) -> bool {
        match self {
            ArcPolicy::PresenceFlag => count == 1,
            ArcPolicy::Multiplicity => count > 0,
        }
    }

    /// How much the target's working in-degree drops when an admitted arc of
    /// `count` parallel edges is removed.
    #[inline]
    pub fn removal_weight(self, count: u32) -> u32 {
        match self {
            ArcPolicy::PresenceFlag => 1,
            ArcPolicy::Multiplicity => count,
        }
    }
}

/// Construction-time options for a multigraph.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GraphConfig {
    /// Arc admission rule, see [`ArcPolicy`].
    pub arc_policy: ArcPolicy,
}

impl GraphConfig {
    /// Config with the multiplicity-aware policy.
    pub fn multiplicity() -> Self {
        Self {
            arc_policy: ArcPolicy::Multiplicity,
        }
    }
}
