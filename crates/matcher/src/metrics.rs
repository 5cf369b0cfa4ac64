use std::time::Duration;

use crate::types::CheckKind;

/// Observer for checker activity.
///
/// Implementations typically forward to a metrics backend. The recorder is
/// owned by a [`Checker`](crate::Checker) and passed in with
/// [`Checker::with_metrics`](crate::Checker::with_metrics); there is no
/// process-wide recorder.
pub trait CheckMetrics: Send + Sync {
    /// Called once per completed check.
    fn record_check(&self, kind: CheckKind, latency: Duration, checked: usize, matched: usize);

    /// Called once per completed comparison.
    fn record_compare(&self, latency: Duration, used_embeddings: bool);
}
