use std::fmt;

/// Generation failure
///
/// Returned by [`generate`](crate::generator::generate) when the input
/// description or namespace is rejected. Generation is all-or-nothing: on
/// error nothing has been rendered, and there is no partial output to clean
/// up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A declaration failed structural validation
    ///
    /// `index` is the 0-based position of the offending declaration in the
    /// description; `name` is its declared name when one was present.
    MalformedDescription {
        /// Position of the offending declaration
        index: usize,
        /// Declared name, if the declaration had a non-empty one
        name: Option<String>,
        /// What was wrong with it
        reason: String,
    },
    /// The requested namespace is not an identifier-like string
    InvalidNamespace {
        /// The rejected namespace string
        namespace: String,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::MalformedDescription {
                index,
                name,
                reason,
            } => match name {
                Some(name) => write!(
                    f,
                    "malformed description: declaration #{} ('{}'): {}",
                    index, name, reason
                ),
                None => write!(f, "malformed description: declaration #{}: {}", index, reason),
            },
            GenerateError::InvalidNamespace { namespace } => write!(
                f,
                "invalid namespace '{}': expected '::'-separated C++ identifiers",
                namespace
            ),
        }
    }
}

impl std::error::Error for GenerateError {}
