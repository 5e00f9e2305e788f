//! Result classification.
//!
//! Consumes the (query, outcome) pairs produced by the dispatcher and
//! folds them into a [`Summary`]. The interesting part is TXT routing:
//! SPF, DMARC and DKIM all live in TXT records and are told apart by
//! naming convention and content pattern.

use serde::Serialize;

use crate::dns::dispatch::QueryOutcome;
use crate::dns::plan::{Query, RecordKind};

/// DKIM key records found for one selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DkimRecord {
    pub selector: String,
    pub records: Vec<String>,
}

/// Classified record buckets for one audited domain.
///
/// All eight buckets are always present, however sparse; a failed query
/// leaves its bucket empty rather than failing the audit. Callers that
/// need to distinguish "no record" from "query failed" must watch the
/// diagnostic log channel.
///
/// Serialized field names keep the legacy `*_records` report shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    #[serde(rename = "A_records")]
    pub a: Vec<String>,
    #[serde(rename = "CNAME_records")]
    pub cname: Vec<String>,
    #[serde(rename = "NS_records")]
    pub ns: Vec<String>,
    #[serde(rename = "MX_records")]
    pub mx: Vec<String>,
    #[serde(rename = "TXT_records")]
    pub txt: Vec<String>,
    #[serde(rename = "SPF_records")]
    pub spf: Vec<String>,
    #[serde(rename = "DMARC_records")]
    pub dmarc: Vec<String>,
    #[serde(rename = "DKIM_records")]
    pub dkim: Vec<DkimRecord>,
}

/// Folds the aligned (query, outcome) pairs into a [`Summary`].
///
/// Pure and total: never fails, regardless of the mix of successes and
/// failures, and identical input always yields an identical summary.
/// Relies on the dispatcher's positional alignment — outcome `i` is
/// interpreted through query `i`'s name and record kind.
///
/// Routing rules:
/// - failed outcome: logged with its index and query, then skipped;
/// - A/MX/NS/CNAME: overwrite the matching bucket (each is queried once);
/// - TXT on a `_dmarc.` name: overwrite the DMARC bucket;
/// - TXT on a `_domainkey` name: DKIM selector probe, see
///   [`classify_dkim_probe`];
/// - any other TXT: append to the TXT bucket, mirroring `v=spf1 `
///   records into the SPF bucket as well.
pub fn classify(queries: &[Query], outcomes: &[QueryOutcome]) -> Summary {
    let mut summary = Summary::default();

    for (i, (query, outcome)) in queries.iter().zip(outcomes.iter()).enumerate() {
        let records = match outcome {
            Ok(records) => records,
            Err(e) => {
                log::debug!(
                    "query {} failed: {} {} - {}",
                    i,
                    query.kind.as_str(),
                    query.name,
                    e
                );
                continue;
            }
        };

        match query.kind {
            RecordKind::A => summary.a = records.clone(),
            RecordKind::Mx => summary.mx = records.clone(),
            RecordKind::Ns => summary.ns = records.clone(),
            RecordKind::Cname => summary.cname = records.clone(),
            RecordKind::Txt => classify_txt(&mut summary, &query.name, records),
        }
    }

    summary
}

/// Routes a TXT answer by the queried name.
fn classify_txt(summary: &mut Summary, name: &str, records: &[String]) {
    if name.starts_with("_dmarc.") {
        // Overwrite rather than append: only one DMARC query exists per
        // domain, and a repeated query should replace, not duplicate.
        summary.dmarc = records.to_vec();
    } else if name.contains("_domainkey") {
        classify_dkim_probe(summary, name, records);
    } else {
        for record in records {
            summary.txt.push(record.clone());
            if record.to_lowercase().starts_with("v=spf1 ") {
                summary.spf.push(record.clone());
            }
        }
    }
}

/// Handles one DKIM selector probe.
///
/// The selector is the label before the first `.` of the queried name.
/// A record counts as DKIM material if it starts with `p=`, contains
/// `;p=` or ` p=`, or contains `v=dkim1` case-insensitively. Matching
/// records are stored with the `" "` splice artifact (adjacent-quote
/// join of concatenated TXT segments) removed.
///
/// Wildcard suppression: some resolvers hand back the same default key
/// for every selector that does not exist. To keep that from flooding
/// the bucket, a candidate is dropped when its first record equals the
/// first record of the FIRST stored entry. Only the first entry is
/// consulted, never the most recent.
fn classify_dkim_probe(summary: &mut Summary, name: &str, records: &[String]) {
    let selector = name.split('.').next().unwrap_or(name);

    let candidates: Vec<String> = records
        .iter()
        .filter(|r| {
            r.starts_with("p=")
                || r.contains(";p=")
                || r.contains(" p=")
                || r.to_lowercase().contains("v=dkim1")
        })
        .map(|r| r.replace("\" \"", ""))
        .collect();

    if candidates.is_empty() {
        return;
    }

    let duplicate_of_first = summary
        .dkim
        .first()
        .is_some_and(|first| first.records.first() == candidates.first());
    if !duplicate_of_first {
        summary.dkim.push(DkimRecord {
            selector: selector.to_string(),
            records: candidates,
        });
    }
}
