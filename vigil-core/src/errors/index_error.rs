//! Issue index feed errors.

/// Errors raised while building or scrolling an issue index query.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The caller passed more issue keys than one scroll may bind.
    /// A contract violation, never retried.
    #[error("Cannot scroll more than {limit} issue keys at once ({count} provided). Provide the keys in smaller chunks.")]
    TooManyIssueKeys { limit: usize, count: usize },

    /// Preparing or executing the scroll statement failed. Fatal to this
    /// scroller; retrying means constructing a new one.
    #[error("Failed to prepare issue scroll statement: {message}")]
    PrepareFailed { message: String },

    /// Fetching or decoding the next row from the live cursor failed.
    #[error("Failed to read issue row: {message}")]
    RowRead { message: String },

    /// A row violated a column precondition the transformer relies on.
    #[error("Malformed issue row ({column}): {message}")]
    MalformedRow { column: &'static str, message: String },

    /// `next_doc` was called after the cursor reported exhaustion.
    #[error("Issue cursor is exhausted")]
    CursorExhausted,
}
