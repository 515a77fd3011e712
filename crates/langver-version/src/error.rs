use miette::{Diagnostic, SourceSpan};

/// Why a string could not be parsed as a [`LanguageVersion`](crate::LanguageVersion).
///
/// The offset is zero-based, but the rendered message counts characters from 1.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
#[error("{message} (at character {})", .offset + 1)]
#[diagnostic(code(langver::invalid_version))]
pub struct VersionFormatError {
    message: String,

    /// The input, exactly as it was given to the parser.
    #[source_code]
    source_code: String,

    offset: usize,

    #[label("{message}")]
    span: SourceSpan,
}

impl VersionFormatError {
    pub(crate) fn new(message: impl Into<String>, source_code: &str, offset: usize) -> Self {
        // Highlight the offending character, or nothing when the input ran out.
        let len = source_code
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);

        Self {
            message: message.into(),
            source_code: source_code.to_owned(),
            offset,
            span: SourceSpan::new(offset.into(), len),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The text that failed to parse.
    pub fn source_text(&self) -> &str {
        &self.source_code
    }

    /// Zero-based index into [`Self::source_text`] where the problem was found.
    ///
    /// Everything before the offset is ASCII, so this is both a byte and a character index.
    pub fn offset(&self) -> usize {
        self.offset
    }
}
