use thiserror::Error;

/// Lookup failures against a page's seed records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
}

/// Rejected filter input from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown filter `{key}` (try: {expected})")]
    UnknownKey { key: String, expected: String },

    #[error("no `{key}` option matches `{value}`")]
    UnknownValue { key: String, value: String },

    #[error("expected key:value, got `{0}`")]
    Malformed(String),
}
