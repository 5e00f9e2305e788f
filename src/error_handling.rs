use hickory_resolver::ResolveError;
use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Broad classification of a failed DNS query.
///
/// The classifier treats every kind the same way (the bucket stays
/// empty); the distinction only matters on the diagnostic channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    /// The queried name does not exist (NXDOMAIN).
    NxDomain,
    /// The name exists but holds no records of the requested type.
    NoAnswer,
    /// The query timed out against every pool member.
    Timeout,
    /// Transport-level failure (connection refused, unreachable, ...).
    Transport,
    /// The response could not be parsed.
    Malformed,
}

impl QueryErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryErrorKind::NxDomain => "NXDOMAIN",
            QueryErrorKind::NoAnswer => "no answer",
            QueryErrorKind::Timeout => "timeout",
            QueryErrorKind::Transport => "transport error",
            QueryErrorKind::Malformed => "malformed response",
        }
    }
}

/// Failure outcome of a single DNS query.
///
/// One `QueryError` never aborts the batch: the dispatcher captures it
/// in place of that query's records and the classifier skips over it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} ({})", .message, .kind.as_str())]
pub struct QueryError {
    pub kind: QueryErrorKind,
    pub message: String,
}

impl QueryError {
    pub fn new(kind: QueryErrorKind, message: impl Into<String>) -> Self {
        QueryError {
            kind,
            message: message.into(),
        }
    }

    /// Classifies a resolver error into a [`QueryErrorKind`].
    ///
    /// Classification matches on the error's display text rather than
    /// the resolver's error enum: the message wording ("no records
    /// found", "NXDomain", "timed out") has stayed stable across
    /// hickory releases while the enum shape has not.
    pub fn from_resolve(error: &ResolveError) -> Self {
        let message = error.to_string();
        QueryError {
            kind: classify_message(&message),
            message,
        }
    }
}

fn classify_message(message: &str) -> QueryErrorKind {
    let lower = message.to_lowercase();
    if lower.contains("nxdomain") || lower.contains("name not found") {
        QueryErrorKind::NxDomain
    } else if lower.contains("no records found") || lower.contains("no answer") {
        QueryErrorKind::NoAnswer
    } else if lower.contains("timed out") || lower.contains("timeout") {
        QueryErrorKind::Timeout
    } else if lower.contains("malformed") || lower.contains("decode") || lower.contains("parse") {
        QueryErrorKind::Malformed
    } else {
        QueryErrorKind::Transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_nxdomain() {
        assert_eq!(
            classify_message("no records found for Query { name: Name(\"x.invalid.\") } NXDomain"),
            QueryErrorKind::NxDomain
        );
    }

    #[test]
    fn test_classify_no_answer() {
        assert_eq!(
            classify_message("no records found for Query { name: Name(\"example.com.\") }"),
            QueryErrorKind::NoAnswer
        );
    }

    #[test]
    fn test_classify_timeout() {
        assert_eq!(
            classify_message("request timed out"),
            QueryErrorKind::Timeout
        );
        assert_eq!(
            classify_message("Timeout waiting for response"),
            QueryErrorKind::Timeout
        );
    }

    #[test]
    fn test_classify_malformed() {
        assert_eq!(
            classify_message("failed to decode response message"),
            QueryErrorKind::Malformed
        );
    }

    #[test]
    fn test_classify_transport_fallback() {
        assert_eq!(
            classify_message("connection refused"),
            QueryErrorKind::Transport
        );
    }

    #[test]
    fn test_query_error_display_includes_kind() {
        let err = QueryError::new(QueryErrorKind::Timeout, "request timed out");
        let rendered = err.to_string();
        assert!(rendered.contains("request timed out"));
        assert!(rendered.contains("timeout"));
    }
}
