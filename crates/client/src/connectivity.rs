// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Immo Labs

//! Connectivity tracking.
//!
//! The monitor is a thin wrapper over a [`tokio::sync::watch`] channel: the
//! host application feeds it online/offline transitions and the coordinator
//! subscribes to drain the queue when the device comes back online.

use tokio::sync::watch;

/// Whether the device currently has network access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityState {
    Online,
    Offline,
}

impl ConnectivityState {
    pub fn is_online(self) -> bool {
        matches!(self, ConnectivityState::Online)
    }
}

/// Shared connectivity signal.
///
/// Clones observe and drive the same underlying channel.
#[derive(Debug, Clone)]
pub struct ConnectivityMonitor {
    tx: watch::Sender<ConnectivityState>,
}

impl ConnectivityMonitor {
    /// Create a monitor in the given initial state.
    pub fn new(initial: ConnectivityState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        ConnectivityMonitor { tx }
    }

    /// Current state.
    pub fn state(&self) -> ConnectivityState {
        *self.tx.borrow()
    }

    pub fn is_online(&self) -> bool {
        self.state().is_online()
    }

    /// Record a connectivity transition.
    ///
    /// Subscribers are only woken when the state actually changes.
    pub fn set_state(&self, state: ConnectivityState) {
        self.tx.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<ConnectivityState> {
        self.tx.subscribe()
    }
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self::new(ConnectivityState::Online)
    }
}

#[cfg(test)]
#[path = "connectivity_tests.rs"]
mod tests;
