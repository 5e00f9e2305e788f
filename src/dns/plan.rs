//! Query planning.
//!
//! Builds the fixed battery of DNS queries issued for a domain audit:
//! the DMARC name, the bare domain across the standard record types,
//! and one TXT probe per candidate DKIM selector.

use hickory_resolver::proto::rr::RecordType;

use crate::config::DEFAULT_DKIM_SELECTORS;

/// Record types the audit queries for.
///
/// A closed enum rather than raw record-type strings so the classifier
/// can match it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    A,
    Mx,
    Ns,
    Cname,
    Txt,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::Mx => "MX",
            RecordKind::Ns => "NS",
            RecordKind::Cname => "CNAME",
            RecordKind::Txt => "TXT",
        }
    }
}

impl From<RecordKind> for RecordType {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::A => RecordType::A,
            RecordKind::Mx => RecordType::MX,
            RecordKind::Ns => RecordType::NS,
            RecordKind::Cname => RecordType::CNAME,
            RecordKind::Txt => RecordType::TXT,
        }
    }
}

/// A single planned DNS query. Immutable once constructed; consumed by
/// the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub name: String,
    pub kind: RecordKind,
}

impl Query {
    pub fn new(name: impl Into<String>, kind: RecordKind) -> Self {
        Query {
            name: name.into(),
            kind,
        }
    }
}

/// Builds the ordered query battery for a domain.
///
/// The order is fixed and the classifier's buckets depend on the names
/// produced here:
///
/// 1. `_dmarc.<domain>` TXT
/// 2. `<domain>` TXT
/// 3. `<domain>` A
/// 4. `<domain>` MX
/// 5. `<domain>` NS
/// 6. `<domain>` CNAME
/// 7. `<selector>._domainkey.<domain>` TXT, one per selector in order
///
/// An empty `selectors` slice substitutes [`DEFAULT_DKIM_SELECTORS`].
/// Pure function: no network, no side effects.
pub fn plan_queries(domain: &str, selectors: &[String]) -> Vec<Query> {
    let mut queries = vec![
        Query::new(format!("_dmarc.{domain}"), RecordKind::Txt),
        Query::new(domain, RecordKind::Txt),
        Query::new(domain, RecordKind::A),
        Query::new(domain, RecordKind::Mx),
        Query::new(domain, RecordKind::Ns),
        Query::new(domain, RecordKind::Cname),
    ];

    if selectors.is_empty() {
        for selector in DEFAULT_DKIM_SELECTORS {
            queries.push(Query::new(
                format!("{selector}._domainkey.{domain}"),
                RecordKind::Txt,
            ));
        }
    } else {
        for selector in selectors {
            queries.push(Query::new(
                format!("{selector}._domainkey.{domain}"),
                RecordKind::Txt,
            ));
        }
    }

    queries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_with_default_selectors_yields_27_queries() {
        let queries = plan_queries("example.com", &[]);
        assert_eq!(queries.len(), 6 + 21);
    }

    #[test]
    fn test_plan_fixed_head_order() {
        let queries = plan_queries("example.com", &[]);
        assert_eq!(
            queries[0],
            Query::new("_dmarc.example.com", RecordKind::Txt)
        );
        assert_eq!(queries[1], Query::new("example.com", RecordKind::Txt));
        assert_eq!(queries[2], Query::new("example.com", RecordKind::A));
        assert_eq!(queries[3], Query::new("example.com", RecordKind::Mx));
        assert_eq!(queries[4], Query::new("example.com", RecordKind::Ns));
        assert_eq!(queries[5], Query::new("example.com", RecordKind::Cname));
    }

    #[test]
    fn test_plan_selector_probes_preserve_order() {
        let selectors = vec!["google".to_string(), "selector1".to_string()];
        let queries = plan_queries("example.com", &selectors);
        assert_eq!(queries.len(), 8);
        assert_eq!(
            queries[6],
            Query::new("google._domainkey.example.com", RecordKind::Txt)
        );
        assert_eq!(
            queries[7],
            Query::new("selector1._domainkey.example.com", RecordKind::Txt)
        );
    }

    #[test]
    fn test_plan_default_selector_probes_follow_constant_order() {
        let queries = plan_queries("example.com", &[]);
        for (i, selector) in DEFAULT_DKIM_SELECTORS.iter().enumerate() {
            assert_eq!(
                queries[6 + i].name,
                format!("{selector}._domainkey.example.com")
            );
            assert_eq!(queries[6 + i].kind, RecordKind::Txt);
        }
    }

    #[test]
    fn test_plan_is_deterministic() {
        assert_eq!(
            plan_queries("example.com", &[]),
            plan_queries("example.com", &[])
        );
    }
}
