//! Shared endpoint state.
//!
//! # Responsibilities
//! - Hold one `EndpointState` per configured endpoint, in registration order
//! - Accept whole-record updates from the scheduler (single writer)
//! - Hand out consistent point-in-time snapshots to any number of readers
//!
//! # Design Decisions
//! - Records are replaced whole under the write lock; readers can observe
//!   state from the tick in progress or the prior one, never a torn record
//! - Lock hold times are bounded by a Vec clone, so dashboard reads do not
//!   stall behind in-flight probe network calls

use std::sync::RwLock;

use crate::config::schema::EndpointConfig;
use crate::monitor::state::EndpointState;

/// Concurrency-safe holder of all endpoint records.
pub struct StateStore {
    states: RwLock<Vec<EndpointState>>,
}

impl StateStore {
    /// Seed one unchecked record per configured endpoint, preserving order.
    pub fn new(endpoints: &[EndpointConfig]) -> Self {
        let states = endpoints
            .iter()
            .map(|e| EndpointState::new(e.name.clone(), e.url.clone()))
            .collect();
        Self {
            states: RwLock::new(states),
        }
    }

    /// Replace the record at `index` with a freshly updated one.
    ///
    /// Called only by the scheduler; indices correspond to registration
    /// order and never change.
    pub fn update(&self, index: usize, state: EndpointState) {
        let mut states = self.states.write().expect("state lock poisoned");
        states[index] = state;
    }

    /// Consistent point-in-time copy of every record.
    pub fn snapshot(&self) -> Vec<EndpointState> {
        self.states.read().expect("state lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.states.read().expect("state lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
