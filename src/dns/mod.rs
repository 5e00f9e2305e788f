//! DNS reconnaissance core.
//!
//! Three stages, wired together by [`audit_domain`]:
//! - query planning: the fixed (name, record kind) battery for a domain;
//! - parallel dispatch: every query in flight at once, one outcome per
//!   query, failures isolated per position;
//! - classification: folding the aligned outcomes into the SPF / DMARC /
//!   DKIM / standard record buckets.

mod classify;
mod dispatch;
mod plan;

// Re-export public API
pub use classify::{classify, DkimRecord, Summary};
pub use dispatch::{dispatch_all, normalize_record, QueryOutcome, Resolve};
pub use plan::{plan_queries, Query, RecordKind};

/// Runs the full audit pipeline for one domain: plan, dispatch,
/// classify.
///
/// Never fails; queries that error out simply leave their buckets empty
/// and are reported on the debug log. An empty `selectors` slice probes
/// the built-in DKIM selector list.
pub async fn audit_domain<R: Resolve + ?Sized>(
    resolver: &R,
    domain: &str,
    selectors: &[String],
) -> Summary {
    let queries = plan_queries(domain, selectors);
    let outcomes = dispatch_all(resolver, &queries).await;
    classify(&queries, &outcomes)
}
