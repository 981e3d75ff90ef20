use thiserror::Error;

/// Errors surfaced by configuration and icon handling.
#[derive(Debug, Error)]
pub enum CalloutError {
    /// Theme name that is not one of the built-in themes.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
    /// Options document could not be deserialized.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
    /// Icon markup could not be parsed into a tree fragment.
    #[error("Icon markup error: {message}")]
    IconMarkup {
        /// Parser message
        message: String,
    },
    /// A container did not have the shape the rewrite expected.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl CalloutError {
    /// Create an icon markup error
    pub fn icon_markup(message: impl Into<String>) -> Self {
        Self::IconMarkup {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CalloutError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidOptions(err.to_string())
    }
}

impl From<serde_yaml::Error> for CalloutError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::InvalidOptions(err.to_string())
    }
}

/// A node turned out to have an unexpected shape while a container was being
/// rewritten. Always scoped to a single container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The container has no first block left to work with.
    #[error("container has no first block")]
    MissingFirstBlock,
    /// Expected an element child at the given index.
    #[error("expected an element at index {index}")]
    ExpectedElement {
        /// Child index
        index: usize,
    },
    /// Expected a text child at the given index.
    #[error("expected a text node at index {index}")]
    ExpectedText {
        /// Child index
        index: usize,
    },
    /// The callout marker no longer matches after normalization.
    #[error("callout marker no longer matches after normalization")]
    MarkerVanished,
}
