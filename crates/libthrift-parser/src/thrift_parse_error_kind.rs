/// Categorizes parse failures for programmatic handling.
///
/// The `#[error(...)]` messages are concise/programmatic. Full
/// human-readable messages are in `ThriftParseError::message()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ThriftParseErrorKind {
    /// A scanner's expected character class matched nothing, or matched
    /// text that does not form a valid token.
    ///
    /// # Example
    /// ```text
    /// struct { }
    ///        ^ expected identifier, found `{`
    /// ```
    #[error("lexical failure")]
    LexicalFailure,

    /// No alternative of an ordered choice matched.
    ///
    /// # Example
    /// ```text
    /// structure Foo {}
    /// ^ unexpected token, expected a declaration keyword
    /// ```
    #[error("grammar failure")]
    GrammarFailure,

    /// A mandatory delimiter (`{`, `}`, `(`, `)`, `<`, `>`, `[`, `]`, `:`,
    /// `=`) was absent where the grammar requires it.
    ///
    /// # Example
    /// ```text
    /// const i32 ANSWER 42
    ///                  ^ expected `=`, found `4`
    /// ```
    #[error("structural failure")]
    StructuralFailure,
}
