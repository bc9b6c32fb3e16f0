//! Kahn-style topological scheduling over incoming-edge counters.
//!
//! The loop repeatedly scans the working counters for the lowest vertex with
//! zero in-degree, consumes it, and removes its admitted outgoing arcs.
//!
//! ## Complexity
//! - Time: **O(V²)** for the scans plus one row enumeration per vertex.
//! - Space: **O(V)** for the working counters and the schedule.
//!
//! # Errors
//! * [`GraphError::CycleDetected`]: a scan found no zero in-degree vertex
//!   before all vertices were scheduled. The error carries the partial schedule.

use crate::graph_error::GraphError;
use crate::topology::policy::ArcPolicy;
use crate::topology::storage::EdgeStorage;
use crate::topology::vertex::VertexId;

/// Working counter value of a vertex already placed in the schedule.
const CONSUMED: i64 = -1;

/// Outcome of scanning the working counters for a schedulable vertex.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ZeroScan {
    /// Lowest vertex whose working in-degree is exactly zero.
    Found(VertexId),
    /// Every remaining vertex still has incoming arcs.
    NoneFound,
}

/// First vertex (lowest ID) whose counter is exactly zero.
pub fn scan_incident(working: &[i64]) -> ZeroScan {
    working
        .iter()
        .position(|&d| d == 0)
        .map_or(ZeroScan::NoneFound, ZeroScan::Found)
}

/// Live state of one scheduling run.
struct KahnRun<'g, S: EdgeStorage> {
    storage: &'g S,
    policy: ArcPolicy,
    working: Vec<i64>,
    schedule: Vec<VertexId>,
}

impl<'g, S: EdgeStorage> KahnRun<'g, S> {
    fn new(storage: &'g S, incoming: &[u32], policy: ArcPolicy) -> Self {
        Self {
            storage,
            policy,
            working: incoming.iter().map(|&d| i64::from(d)).collect(),
            schedule: Vec::with_capacity(incoming.len()),
        }
    }

    /// Consume `v`: append it and virtually remove its admitted outgoing arcs.
    fn consume(&mut self, v: VertexId) {
        let storage = self.storage;
        self.working[v] = CONSUMED;
        self.schedule.push(v);
        for (j, count) in storage.row(v) {
            if self.policy.admits(count) {
                self.working[j] -= i64::from(self.policy.removal_weight(count));
            }
        }
        log::trace!(
            "kahn: scheduled vertex {v} ({} of {})",
            self.schedule.len(),
            self.working.len()
        );
    }

    fn finish(mut self) -> Result<Vec<VertexId>, GraphError> {
        for _ in 0..self.working.len() {
            match scan_incident(&self.working) {
                ZeroScan::Found(v) => self.consume(v),
                ZeroScan::NoneFound => {
                    log::warn!(
                        "kahn: cycle detected, {} of {} vertices scheduled",
                        self.schedule.len(),
                        self.working.len()
                    );
                    return Err(GraphError::CycleDetected {
                        partial: self.schedule,
                    });
                }
            }
        }
        Ok(self.schedule)
    }
}

/// Compute a topological schedule of all `incoming.len()` vertices.
///
/// `incoming` is only read; the run works on its own copy of the counters.
/// Ties between zero in-degree vertices go to the lowest ID.
pub fn kahn_order<S: EdgeStorage>(
    storage: &S,
    incoming: &[u32],
    policy: ArcPolicy,
) -> Result<Vec<VertexId>, GraphError> {
    debug_assert_eq!(storage.vertex_count(), incoming.len());
    KahnRun::new(storage, incoming, policy).finish()
}
