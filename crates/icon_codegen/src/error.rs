//! Structured generator error types.

use std::fmt::{self, Display, Formatter};
use std::path::Path;

/// Stable error categories for generator failures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CodegenErrorCategory {
    /// Missing or invalid command-line arguments.
    Usage,
    /// Invalid or unreadable configuration.
    Config,
    /// SVG input that cannot be turned into a component.
    Parse,
    /// Filesystem or general I/O failure.
    Io,
    /// File watcher setup or delivery failure.
    Watch,
}

/// Structured generator error with contextual metadata.
///
/// The display output is CLI-friendly. Optional `operation`, `target`, and `hint` fields can be
/// attached as the error propagates so the final message names what was being done and where.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CodegenError {
    /// High-level error category.
    pub category: CodegenErrorCategory,
    /// Human-readable message.
    pub message: String,
    /// Optional operation name.
    pub operation: Option<String>,
    /// Optional path target.
    pub target: Option<String>,
    /// Optional remediation hint.
    pub hint: Option<String>,
}

/// Convenience result type for generator internals.
pub type CodegenResult<T> = Result<T, CodegenError>;

impl CodegenError {
    /// Create an error with the given category and message.
    pub fn new(category: CodegenErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            operation: None,
            target: None,
            hint: None,
        }
    }

    /// Create a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(CodegenErrorCategory::Usage, message)
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(CodegenErrorCategory::Config, message)
    }

    /// Create an SVG parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(CodegenErrorCategory::Parse, message)
    }

    /// Create an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(CodegenErrorCategory::Io, message)
    }

    /// Create a watcher error.
    pub fn watch(message: impl Into<String>) -> Self {
        Self::new(CodegenErrorCategory::Watch, message)
    }

    /// Attach an operation label.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Attach a target path.
    pub fn with_path(mut self, path: &Path) -> Self {
        self.target = Some(path.display().to_string());
        self
    }

    /// Attach a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for CodegenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(operation) = &self.operation {
            write!(f, " [operation: {operation}]")?;
        }
        if let Some(target) = &self.target {
            write!(f, " [target: {target}]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " [hint: {hint}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for CodegenError {}

impl From<std::io::Error> for CodegenError {
    fn from(value: std::io::Error) -> Self {
        CodegenError::io(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_appends_context_in_order() {
        let err = CodegenError::io("failed to write icon")
            .with_operation("write-icon")
            .with_path(Path::new("out/check.rs"))
            .with_hint("check directory permissions");

        assert_eq!(
            err.to_string(),
            "failed to write icon [operation: write-icon] [target: out/check.rs] [hint: check directory permissions]"
        );
    }

    #[test]
    fn io_errors_map_to_io_category() {
        let err: CodegenError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category, CodegenErrorCategory::Io);
        assert_eq!(err.message, "gone");
    }
}
