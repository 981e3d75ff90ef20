use callouts_core::CalloutError;
use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Optional document identifier (file path, batch id)
    pub file: Option<String>,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            file: None,
            line,
            column,
        }
    }

    /// Attach a document identifier
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{}:{}:{}", file, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Errors that can occur while rendering a Markdown document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// markdown-rs rejected the input.
    #[error("Parse error at {location}: {message}")]
    Parse {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// Callout configuration failed to resolve.
    #[error(transparent)]
    Callout(#[from] CalloutError),
}

impl RenderError {
    /// Create a parse error with location
    pub fn parse_error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Parse {
            message: message.into(),
            location: SourceLocation::new(line, column),
        }
    }

    /// Location of the error, if it has one
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            RenderError::Parse { location, .. } => Some(location),
            RenderError::Callout(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display() {
        assert_eq!(SourceLocation::new(3, 7).to_string(), "3:7");
        assert_eq!(
            SourceLocation::new(1, 1).in_file("docs/a.md").to_string(),
            "docs/a.md:1:1"
        );
    }

    #[test]
    fn parse_error_message() {
        let err = RenderError::parse_error("Unexpected end", 2, 5);
        assert_eq!(err.to_string(), "Parse error at 2:5: Unexpected end");
        assert_eq!(err.location(), Some(&SourceLocation::new(2, 5)));
    }

    #[test]
    fn wraps_callout_errors() {
        let err: RenderError = CalloutError::UnknownTheme("docusaurus".into()).into();
        assert_eq!(err.to_string(), "Unknown theme: docusaurus");
        assert_eq!(err.location(), None);
    }
}
