//! Per-call error channel.
//!
//! Repository operations never raise through normal control flow: a failed
//! call degrades to an empty read or a no-op write, and one [`ErrorReport`]
//! lands here per failure. The interactive layer drains the channel after
//! each command and shows the messages; tests assert on report counts and
//! kinds.

use std::sync::Mutex;

/// Classification of a reported failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Store unreachable or misconfigured at acquire time.
    ConnectionUnavailable,
    /// A single SQL statement failed (constraint, malformed value).
    StatementRejected,
    /// A delete was vetoed because dependent rows exist.
    ReferentialConflict,
    /// A mutating call was made by a non-admin identity.
    PermissionDenied,
}

/// One reported failure: what went wrong and a user-facing message.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub kind: ReportKind,
    pub message: String,
}

/// Collects [`ErrorReport`]s across calls within a logical session.
///
/// The mutex is uncontended in practice — one logical thread of control
/// drives all store access — but makes the channel shareable across the
/// async service methods.
#[derive(Debug, Default)]
pub struct ErrorChannel {
    reports: Mutex<Vec<ErrorReport>>,
}

impl ErrorChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push one report, also emitting it on the tracing error channel.
    pub fn report(&self, kind: ReportKind, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(?kind, "{message}");
        self.reports
            .lock()
            .expect("error channel poisoned")
            .push(ErrorReport { kind, message });
    }

    /// Take all accumulated reports, leaving the channel empty.
    #[must_use]
    pub fn drain(&self) -> Vec<ErrorReport> {
        std::mem::take(&mut *self.reports.lock().expect("error channel poisoned"))
    }

    /// Number of reports currently in the channel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.lock().expect("error channel poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_channel() {
        let channel = ErrorChannel::new();
        channel.report(ReportKind::StatementRejected, "boom");
        channel.report(ReportKind::ReferentialConflict, "in use");
        assert_eq!(channel.len(), 2);

        let reports = channel.drain();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].kind, ReportKind::StatementRejected);
        assert!(channel.is_empty());
    }
}
