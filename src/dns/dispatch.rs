//! Resolver adapter and parallel query dispatch.
//!
//! [`Resolve`] is the seam to the actual DNS transport: one operation,
//! name + record kind in, normalized answer strings out. The production
//! implementation wraps the hickory `TokioResolver`; tests substitute a
//! map-backed mock.
//!
//! [`dispatch_all`] fans an entire query battery out concurrently and
//! collects one outcome per query, failures included.

use async_trait::async_trait;
use futures::future::join_all;
use hickory_resolver::proto::rr::RData;
use hickory_resolver::TokioResolver;

use crate::dns::plan::{Query, RecordKind};
use crate::error_handling::QueryError;

/// Outcome of a single query: the normalized answer strings, or the
/// captured failure. Outcome `i` always belongs to query `i` of the
/// dispatched batch.
pub type QueryOutcome = Result<Vec<String>, QueryError>;

/// The resolver boundary.
///
/// Everything above this trait is transport-agnostic: the planner and
/// classifier never see hickory types.
#[async_trait]
pub trait Resolve: Send + Sync {
    /// Resolves `name` for the given record kind, returning the answer
    /// strings in resolver order.
    async fn resolve(&self, name: &str, kind: RecordKind) -> QueryOutcome;
}

#[async_trait]
impl Resolve for TokioResolver {
    async fn resolve(&self, name: &str, kind: RecordKind) -> QueryOutcome {
        match self.lookup(name, kind.into()).await {
            Ok(lookup) => {
                let records: Vec<String> = lookup
                    .iter()
                    .filter_map(|rdata| render_rdata(kind, rdata))
                    .map(|record| normalize_record(&record))
                    .collect();
                Ok(records)
            }
            Err(e) => Err(QueryError::from_resolve(&e)),
        }
    }
}

/// Renders one answer record as a string, keeping only the requested
/// kind. An A query answered through a CNAME chain also carries the
/// intermediate CNAME records; those are dropped so each bucket holds
/// exactly its own record type.
fn render_rdata(kind: RecordKind, rdata: &RData) -> Option<String> {
    match (kind, rdata) {
        (RecordKind::A, RData::A(a)) => Some(a.to_string()),
        (RecordKind::Mx, RData::MX(mx)) => {
            Some(format!("{} {}", mx.preference(), mx.exchange().to_utf8()))
        }
        (RecordKind::Ns, RData::NS(ns)) => Some(ns.to_utf8()),
        (RecordKind::Cname, RData::CNAME(cname)) => Some(cname.to_utf8()),
        (RecordKind::Txt, RData::TXT(txt)) => {
            // TXT records can be split across multiple byte segments - join them
            Some(
                txt.iter()
                    .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                    .collect::<Vec<String>>()
                    .join(""),
            )
        }
        _ => None,
    }
}

/// Normalizes a raw answer string: strips surrounding quote characters
/// and a trailing root-zone dot.
pub fn normalize_record(record: &str) -> String {
    let trimmed = record.trim_matches('"');
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}

/// Executes every query of the batch concurrently and returns one
/// outcome per query.
///
/// Invariants, relied on by the classifier:
/// - the output has the same length and order as `queries`, regardless
///   of the order in which the lookups complete;
/// - a failed lookup is captured as the `Err` outcome for its position
///   and never cancels or aborts sibling queries;
/// - the call returns only once every query has an outcome.
///
/// No retries happen at this layer; retry and pool failover belong to
/// the resolver behind [`Resolve`].
pub async fn dispatch_all<R: Resolve + ?Sized>(
    resolver: &R,
    queries: &[Query],
) -> Vec<QueryOutcome> {
    let lookups = queries
        .iter()
        .map(|query| resolver.resolve(&query.name, query.kind));
    let outcomes = join_all(lookups).await;
    log::debug!(
        "dispatched {} queries ({} failed)",
        outcomes.len(),
        outcomes.iter().filter(|o| o.is_err()).count()
    );
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_quotes() {
        assert_eq!(
            normalize_record("\"v=spf1 include:_spf.example.com ~all\""),
            "v=spf1 include:_spf.example.com ~all"
        );
    }

    #[test]
    fn test_normalize_strips_trailing_root_dot() {
        assert_eq!(normalize_record("mail.example.com."), "mail.example.com");
        assert_eq!(normalize_record("10 aspmx.l.google.com."), "10 aspmx.l.google.com");
    }

    #[test]
    fn test_normalize_leaves_clean_strings_alone() {
        assert_eq!(normalize_record("93.184.216.34"), "93.184.216.34");
        assert_eq!(normalize_record("v=DMARC1; p=reject;"), "v=DMARC1; p=reject;");
    }

    #[test]
    fn test_normalize_preserves_interior_dots_and_quotes() {
        assert_eq!(normalize_record("a.b.c"), "a.b.c");
        assert_eq!(normalize_record("\"seg1\" \"seg2\""), "seg1\" \"seg2");
    }
}
