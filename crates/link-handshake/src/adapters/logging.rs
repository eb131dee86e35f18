//! Tracing-backed notice and log sinks.
//!
//! For hosts that route operator notices and the server log through
//! `tracing` instead of a dedicated delivery mechanism.

use tracing::{error, warn};

use crate::domain::{FindingDetails, NoticeScope, Severity};
use crate::ports::{LinkLog, LinkLogEntry, OperatorNotice, OperatorNotifier};

/// Emits operator notices as tracing events under the `link_notice` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl OperatorNotifier for TracingNotifier {
    fn notify(&self, notice: OperatorNotice) {
        let network_wide = notice.scope == NoticeScope::NetworkWide;
        match notice.severity {
            Severity::Error => {
                error!(target: "link_notice", network_wide, "{}", notice.text)
            }
            Severity::Warning => {
                warn!(target: "link_notice", network_wide, "{}", notice.text)
            }
        }
    }
}

/// Writes link log entries as tracing events under the `link_log` target.
///
/// Besides `peer` and `kind`, each event carries the finding's values as
/// fields: `peer_current_version` and `peer_min_version` for revision
/// mismatches, `local_ts`, `peer_ts` and `delta` for clock findings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLinkLog;

impl TracingLinkLog {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Structured values of a finding; unset fields are not recorded
#[derive(Default)]
struct DetailFields {
    peer_current_version: Option<i64>,
    peer_min_version: Option<i64>,
    local_ts: Option<i64>,
    peer_ts: Option<i64>,
    delta: Option<u64>,
}

impl From<&FindingDetails> for DetailFields {
    fn from(details: &FindingDetails) -> Self {
        match details {
            FindingDetails::Version(mismatch) => Self {
                peer_current_version: Some(mismatch.peer_current_version),
                peer_min_version: Some(mismatch.peer_min_version),
                ..Self::default()
            },
            FindingDetails::Skew(skew) => Self {
                local_ts: Some(skew.local_time.as_secs()),
                peer_ts: Some(skew.peer_time.as_secs()),
                delta: Some(skew.delta),
                ..Self::default()
            },
        }
    }
}

macro_rules! link_log_event {
    ($level:ident, $entry:ident, $fields:ident) => {
        $level!(
            target: "link_log",
            peer = %$entry.peer,
            kind = %$entry.kind,
            peer_current_version = $fields.peer_current_version,
            peer_min_version = $fields.peer_min_version,
            local_ts = $fields.local_ts,
            peer_ts = $fields.peer_ts,
            delta = $fields.delta,
            "{}",
            $entry.message
        )
    };
}

impl LinkLog for TracingLinkLog {
    fn record(&self, entry: LinkLogEntry) {
        let fields = DetailFields::from(&entry.details);
        match entry.severity {
            Severity::Error => link_log_event!(error, entry, fields),
            Severity::Warning => link_log_event!(warn, entry, fields),
        }
    }
}
