use std::collections::HashMap;

use crate::{templates, ExampleAttributes, FormatOptions, SdkLanguage, Snippet};

/// Renders example attributes as a snippet for one language.
///
/// Implemented for closures, so a custom formatter can be registered directly:
///
/// ```
/// # use targeting_snippets::{ExampleAttributes, FormatOptions, FormatterRegistry, HighlightLanguage, SdkLanguage, Snippet};
/// let mut registry = FormatterRegistry::default();
/// registry.register(SdkLanguage::EdgeFastly, |attributes: &ExampleAttributes, _: &FormatOptions| {
///     Some(Snippet::code(HighlightLanguage::JavaScript, format!("// {} attributes", attributes.len())))
/// });
/// ```
pub trait SnippetFormatter {
    /// Render `attributes`, or return `None` when there is nothing to show.
    fn format(&self, attributes: &ExampleAttributes, options: &FormatOptions) -> Option<Snippet>;
}

impl<T: Fn(&ExampleAttributes, &FormatOptions) -> Option<Snippet>> SnippetFormatter for T {
    fn format(&self, attributes: &ExampleAttributes, options: &FormatOptions) -> Option<Snippet> {
        self(attributes, options)
    }
}

/// Table of formatters by language.
///
/// [`FormatterRegistry::default()`] contains formatters for every language that has a snippet.
/// Adding a language is a matter of calling [`register`](FormatterRegistry::register).
pub struct FormatterRegistry {
    formatters: HashMap<SdkLanguage, Box<dyn SnippetFormatter + Send + Sync>>,
}

impl FormatterRegistry {
    /// A registry without any formatters.
    pub fn empty() -> Self {
        FormatterRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register `formatter` for `language`, replacing any previous one.
    pub fn register(
        &mut self,
        language: SdkLanguage,
        formatter: impl SnippetFormatter + Send + Sync + 'static,
    ) -> &mut Self {
        self.formatters.insert(language, Box::new(formatter));
        self
    }

    /// Formatter registered for `language`.
    pub fn get(&self, language: SdkLanguage) -> Option<&(dyn SnippetFormatter + Send + Sync)> {
        self.formatters.get(&language).map(|f| f.as_ref())
    }

    /// Whether `language` has a formatter.
    pub fn supports(&self, language: SdkLanguage) -> bool {
        self.formatters.contains_key(&language)
    }

    /// Format `attributes` for `language`. Returns `None` if no formatter is registered.
    pub fn format(
        &self,
        language: SdkLanguage,
        attributes: &ExampleAttributes,
        options: &FormatOptions,
    ) -> Option<Snippet> {
        let Some(formatter) = self.get(language) else {
            log::debug!(target: "snippets", language = language.as_str(); "no snippet formatter for language");
            return None;
        };
        formatter.format(attributes, options)
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        let mut registry = FormatterRegistry::empty();
        templates::register_builtin(&mut registry);
        registry
    }
}

impl std::fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.formatters.keys()).finish()
    }
}
