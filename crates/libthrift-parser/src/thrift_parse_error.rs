use crate::ThriftParseErrorKind;
use std::path::Path;

/// The single error reported when a Thrift document fails to parse.
///
/// Parsing stops at the first declaration that cannot be parsed; this error
/// describes the deepest point the parser reached inside that declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct ThriftParseError {
    /// Human-readable description of the failed expectation.
    ///
    /// Examples: "expected identifier, found `{`", "expected `}`, found end
    /// of input"
    message: String,

    /// Up to [`ThriftParseError::CONTEXT_CHAR_LEN`] raw characters of source
    /// text starting at the failure point, unmodified.
    context: String,

    /// 1-based line of the failure point.
    ///
    /// Derived from the larger of the `\n` and `\r` counts seen so far (see
    /// [`crate::SourcePosition::line`]), so it is approximate for files that
    /// mix line-ending conventions.
    line: usize,

    /// Categorized error kind for programmatic handling.
    kind: ThriftParseErrorKind,
}

impl ThriftParseError {
    /// Number of characters of source captured in [`Self::context`].
    pub const CONTEXT_CHAR_LEN: usize = 50;

    pub fn new(
        message: impl Into<String>,
        context: impl Into<String>,
        line: usize,
        kind: ThriftParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            context: context.into(),
            line,
            kind,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn kind(&self) -> ThriftParseErrorKind {
        self.kind
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// <input>:3: error: expected `=`, found `4`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("<input>:{}: error: {}", self.line, self.message)
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `=`, found `4`
    ///   --> service.thrift:3
    ///    |
    ///    | 42
    ///    | ^
    /// ```
    ///
    /// Only the first line of the context is shown.
    pub fn format_detailed(&self, file_path: Option<&Path>) -> String {
        let file_name = file_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string());
        let context_line = self
            .context
            .split(['\n', '\r'])
            .next()
            .unwrap_or_default();

        let mut output = String::new();
        output.push_str(&format!("error: {}\n", self.message));
        output.push_str(&format!("  --> {file_name}:{}\n", self.line));
        output.push_str("   |\n");
        output.push_str(&format!("   | {context_line}\n"));
        output.push_str("   | ^\n");
        output
    }
}
