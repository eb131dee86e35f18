//! Clock adapters.

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::RwLock;

use crate::domain::Timestamp;
use crate::ports::ClockSource;

// ============================================================================
// SystemClock - Production Clock
// ============================================================================

/// Production clock reading `std::time::SystemTime`.
///
/// # Example
///
/// ```rust
/// use link_handshake::adapters::SystemClock;
/// use link_handshake::ports::ClockSource;
///
/// let clock = SystemClock::new();
/// assert!(clock.refresh().as_secs() > 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ClockSource for SystemClock {
    fn refresh(&self) -> Timestamp {
        let secs = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_secs())
                .map(|secs| -secs)
                .unwrap_or(i64::MIN),
        };
        Timestamp::new(secs)
    }
}

// ============================================================================
// CachedClock - Process-Wide "Current Time"
// ============================================================================

/// Process-wide cached "current time", refreshed from an inner clock.
///
/// Other server code reads [`current`](CachedClock::current) cheaply; the
/// handshake path calls [`refresh`](ClockSource::refresh) so it never compares
/// against a stale value. Concurrent refreshes are serialized by a lock; the
/// last writer wins, which is fine since every writer stores "now".
#[derive(Debug)]
pub struct CachedClock<C> {
    inner: C,
    cached: RwLock<Timestamp>,
}

impl<C: ClockSource> CachedClock<C> {
    /// Wrap `inner`, taking an initial reading.
    pub fn new(inner: C) -> Self {
        let now = inner.refresh();
        Self {
            inner,
            cached: RwLock::new(now),
        }
    }

    /// Last refreshed time, without touching the inner clock.
    pub fn current(&self) -> Timestamp {
        *self.cached.read()
    }
}

impl<C: ClockSource> ClockSource for CachedClock<C> {
    fn refresh(&self) -> Timestamp {
        let mut cached = self.cached.write();
        let now = self.inner.refresh();
        *cached = now;
        now
    }
}
