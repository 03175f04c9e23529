//! Scheduler tick loop.
//!
//! # Responsibilities
//! - Periodically probe every registered endpoint
//! - Apply outcomes to endpoint records and publish them to the store
//! - Invoke the notifier once an endpoint crosses the alert threshold

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time;

use crate::config::schema::EndpointConfig;
use crate::monitor::state::EndpointState;
use crate::monitor::store::StateStore;
use crate::notify::{Notifier, ALERT_THRESHOLD};
use crate::probe::Probe;

/// Background task that checks all endpoints on one shared cadence.
///
/// The scheduler owns the working copy of every `EndpointState`; the store
/// only ever receives finished records. One endpoint failing (or timing
/// out) never prevents the rest of the tick from running.
pub struct Scheduler {
    endpoints: Vec<EndpointConfig>,
    states: Vec<EndpointState>,
    probe: Probe,
    store: Arc<StateStore>,
    notifier: Arc<dyn Notifier>,
    tick: Duration,
}

impl Scheduler {
    pub fn new(
        endpoints: Vec<EndpointConfig>,
        store: Arc<StateStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_probe(endpoints, store, notifier, Probe::new())
    }

    /// Like [`Scheduler::new`] with a custom probe (shorter timeouts in tests).
    pub fn with_probe(
        endpoints: Vec<EndpointConfig>,
        store: Arc<StateStore>,
        notifier: Arc<dyn Notifier>,
        probe: Probe,
    ) -> Self {
        let states = endpoints
            .iter()
            .map(|e| EndpointState::new(e.name.clone(), e.url.clone()))
            .collect();
        let tick = tick_period(&endpoints);

        Self {
            endpoints,
            states,
            probe,
            store,
            notifier,
            tick,
        }
    }

    /// The shared cadence: the minimum interval among all endpoints.
    pub fn tick_period(&self) -> Duration {
        self.tick
    }

    /// Run the check loop until the shutdown signal fires.
    ///
    /// The first pass runs immediately; subsequent passes follow the tick
    /// period.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            endpoints = self.endpoints.len(),
            tick_secs = self.tick.as_secs(),
            "Scheduler starting"
        );

        let mut ticker = time::interval(self.tick);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick().await;
                }
                _ = shutdown.recv() => {
                    tracing::info!("Scheduler received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    /// One pass over every endpoint, in registration order.
    pub async fn tick(&mut self) {
        for (index, state) in self.states.iter_mut().enumerate() {
            let outcome = self.probe.check(&state.url).await;
            state.apply(&outcome);

            if state.is_healthy() {
                tracing::debug!(
                    endpoint = %state.name,
                    latency_secs = outcome.latency_secs,
                    "Check ok"
                );
            } else {
                tracing::warn!(
                    endpoint = %state.name,
                    status = %outcome.status,
                    consecutive_errors = state.consecutive_errors,
                    "Check failed"
                );
            }

            self.store.update(index, state.clone());

            if state.consecutive_errors >= ALERT_THRESHOLD {
                self.notifier.maybe_alert(state).await;
            }
        }
    }
}

fn tick_period(endpoints: &[EndpointConfig]) -> Duration {
    let secs = endpoints
        .iter()
        .map(|e| e.interval_secs)
        .min()
        .unwrap_or(60);
    Duration::from_secs(secs)
}
