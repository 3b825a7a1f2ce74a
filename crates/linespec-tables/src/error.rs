/// Decode failures are fatal: an unreadable row means the table itself is
/// wrong, not that the input merely varies. Skipped rows are not errors.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: unknown {column} token: {token}")]
    UnknownToken {
        line: usize,
        column: &'static str,
        token: String,
    },
    #[error("input ended before the {section} section")]
    MissingSection { section: &'static str },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
