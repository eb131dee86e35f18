//! Test utilities for link handshakes.
//!
//! Deterministic clocks and collaborators that record every call.
//! Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust
//! use link_handshake::testing::ManualClock;
//! use link_handshake::ClockSource;
//!
//! let clock = ManualClock::new(1000);
//! clock.advance(5);
//! assert_eq!(clock.refresh().as_secs(), 1005);
//! assert_eq!(clock.refresh_count(), 1);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{PeerId, ReasonText, Timestamp};
use crate::ports::{
    AutoconnectControl, ClockSource, LinkLog, LinkLogEntry, OperatorNotice, OperatorNotifier,
    PeerDirectory, SessionTerminator,
};
use crate::service::LinkCollaborators;

/// A clock that always reads the same timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    timestamp: i64,
}

impl FixedClock {
    pub fn new(timestamp: i64) -> Self {
        Self { timestamp }
    }
}

impl ClockSource for FixedClock {
    fn refresh(&self) -> Timestamp {
        Timestamp::new(self.timestamp)
    }
}

/// A clock moved by hand that counts how often it was refreshed.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
    refreshes: AtomicUsize,
}

impl ManualClock {
    pub fn new(timestamp: i64) -> Self {
        Self {
            now: AtomicI64::new(timestamp),
            refreshes: AtomicUsize::new(0),
        }
    }

    pub fn set(&self, timestamp: i64) {
        self.now.store(timestamp, Ordering::SeqCst);
    }

    pub fn advance(&self, secs: i64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }

    /// Number of `refresh` calls so far.
    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

impl ClockSource for ManualClock {
    fn refresh(&self) -> Timestamp {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        Timestamp::new(self.now.load(Ordering::SeqCst))
    }
}

/// Records terminated sessions.
#[derive(Debug, Default)]
pub struct RecordingTerminator {
    terminated: Mutex<Vec<(PeerId, ReasonText)>>,
}

impl RecordingTerminator {
    pub fn terminated(&self) -> Vec<(PeerId, ReasonText)> {
        self.terminated.lock().clone()
    }
}

impl SessionTerminator for RecordingTerminator {
    fn terminate(&self, peer: PeerId, reason: &ReasonText) {
        self.terminated.lock().push((peer, reason.clone()));
    }
}

/// Records servers whose autoconnect was disabled.
#[derive(Debug, Default)]
pub struct RecordingAutoconnect {
    disabled: Mutex<Vec<String>>,
}

impl RecordingAutoconnect {
    pub fn disabled(&self) -> Vec<String> {
        self.disabled.lock().clone()
    }
}

impl AutoconnectControl for RecordingAutoconnect {
    fn disable_autoconnect(&self, server_name: &str) {
        self.disabled.lock().push(server_name.to_string());
    }
}

/// Records operator notices.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<OperatorNotice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<OperatorNotice> {
        self.notices.lock().clone()
    }
}

impl OperatorNotifier for RecordingNotifier {
    fn notify(&self, notice: OperatorNotice) {
        self.notices.lock().push(notice);
    }
}

/// Records server log entries.
#[derive(Debug, Default)]
pub struct RecordingLog {
    entries: Mutex<Vec<LinkLogEntry>>,
}

impl RecordingLog {
    pub fn entries(&self) -> Vec<LinkLogEntry> {
        self.entries.lock().clone()
    }
}

impl LinkLog for RecordingLog {
    fn record(&self, entry: LinkLogEntry) {
        self.entries.lock().push(entry);
    }
}

/// Name table for peer handles.
///
/// Unknown peers resolve to their `Display` form.
#[derive(Debug, Default)]
pub struct StaticPeerDirectory {
    peers: HashMap<PeerId, (String, String)>,
}

impl StaticPeerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a peer by server name and remote address.
    #[must_use]
    pub fn with_peer(mut self, peer: PeerId, name: &str, address: &str) -> Self {
        self.peers
            .insert(peer, (name.to_string(), address.to_string()));
        self
    }
}

impl PeerDirectory for StaticPeerDirectory {
    fn server_name(&self, peer: PeerId) -> String {
        self.peers
            .get(&peer)
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| peer.to_string())
    }

    fn display_name(&self, peer: PeerId) -> String {
        self.peers
            .get(&peer)
            .map(|(name, address)| format!("{name}[{address}]"))
            .unwrap_or_else(|| peer.to_string())
    }
}

/// Every recording collaborator, with shared handles for assertions.
#[derive(Clone)]
pub struct RecordingCollaborators {
    pub terminator: Arc<RecordingTerminator>,
    pub autoconnect: Arc<RecordingAutoconnect>,
    pub notifier: Arc<RecordingNotifier>,
    pub log: Arc<RecordingLog>,
    pub directory: Arc<StaticPeerDirectory>,
}

impl RecordingCollaborators {
    pub fn new(directory: StaticPeerDirectory) -> Self {
        Self {
            terminator: Arc::new(RecordingTerminator::default()),
            autoconnect: Arc::new(RecordingAutoconnect::default()),
            notifier: Arc::new(RecordingNotifier::default()),
            log: Arc::new(RecordingLog::default()),
            directory: Arc::new(directory),
        }
    }

    /// Collaborator set to hand to the service.
    pub fn collaborators(&self) -> LinkCollaborators {
        LinkCollaborators {
            terminator: self.terminator.clone(),
            autoconnect: self.autoconnect.clone(),
            notifier: self.notifier.clone(),
            log: self.log.clone(),
            directory: self.directory.clone(),
        }
    }

    /// True when no collaborator has been called.
    pub fn is_quiet(&self) -> bool {
        self.terminator.terminated().is_empty()
            && self.autoconnect.disabled().is_empty()
            && self.notifier.notices().is_empty()
            && self.log.entries().is_empty()
    }
}
