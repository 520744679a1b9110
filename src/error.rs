use thiserror::Error;

/// Errors raised by the parsing and patching core.
///
/// `UnterminatedBlock` invalidates the shared reference data and aborts the
/// whole run. The other two are scoped to a single locale file; the driver
/// decides whether to continue (it currently fails fast).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("could not find end of getter block for `{name}`")]
    UnterminatedBlock { name: String },

    #[error("{file}: missing fallback blocks for: {}", .names.join(", "))]
    UnresolvedGetters { file: String, names: Vec<String> },

    #[error("{file}: could not find class closing brace")]
    MissingClosingBrace { file: String },
}
