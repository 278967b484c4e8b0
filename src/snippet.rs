use serde::{Deserialize, Serialize};

use crate::HighlightLanguage;

/// Text shown above every code snippet.
pub const INTRO_TEXT: &str = "Replace the placeholders with your real targeting attribute values. \
This enables you to target feature flags based on user attributes.";

/// A rendered documentation block: explanatory paragraphs followed by an optional code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Paragraphs shown before the code.
    pub notes: Vec<String>,
    /// Code, absent for message-only snippets.
    pub code: Option<CodeBlock>,
}

/// Code passed to the syntax highlighter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Highlighter language.
    pub language: HighlightLanguage,
    /// Source text.
    pub code: String,
}

impl Snippet {
    /// A code block preceded by [`INTRO_TEXT`].
    pub fn code(language: HighlightLanguage, code: impl Into<String>) -> Self {
        Snippet {
            notes: vec![INTRO_TEXT.to_owned()],
            code: Some(CodeBlock {
                language,
                code: code.into(),
            }),
        }
    }

    /// A message without code.
    pub fn message(text: impl Into<String>) -> Self {
        Snippet {
            notes: vec![text.into()],
            code: None,
        }
    }

    /// Insert a paragraph before the existing notes.
    pub fn with_leading_note(mut self, note: impl Into<String>) -> Self {
        self.notes.insert(0, note.into());
        self
    }

    /// Source text of the code block, if any.
    pub fn code_text(&self) -> Option<&str> {
        self.code.as_ref().map(|block| block.code.as_str())
    }
}
