use crate::{
    AttributeSchema, ExampleAttributes, FormatOptions, FormatterRegistry, SdkLanguage, Snippet,
};

/// Renders "set attributes" snippets for an attribute schema.
///
/// In order to create a renderer, first create [`FormatOptions`].
///
/// # Examples
/// ```
/// # use targeting_snippets::{AttributeSchema, FormatOptions, SdkLanguage};
/// let schema = AttributeSchema::from_json(r#"[{"property": "id", "datatype": "string"}]"#)?;
/// let renderer = FormatOptions::new().to_renderer();
///
/// let snippet = renderer.render(Some(&schema), SdkLanguage::JavaScript).unwrap();
/// assert_eq!(snippet.code_text(), Some(r#"growthbook.setAttributes({"id": "foo"});"#));
/// # Ok::<(), targeting_snippets::Error>(())
/// ```
#[derive(Debug)]
pub struct SnippetRenderer {
    options: FormatOptions,
    registry: FormatterRegistry,
}

impl SnippetRenderer {
    /// Create a renderer with the built-in formatters.
    pub fn new(options: FormatOptions) -> Self {
        Self::with_registry(options, FormatterRegistry::default())
    }

    /// Create a renderer with a custom formatter table.
    pub fn with_registry(options: FormatOptions, registry: FormatterRegistry) -> Self {
        SnippetRenderer { options, registry }
    }

    /// Options used for every snippet.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Access the formatter table, e.g. to register a formatter for another language.
    pub fn registry_mut(&mut self) -> &mut FormatterRegistry {
        &mut self.registry
    }

    /// Synthesize example attributes for `schema` using this renderer's options.
    pub fn example_attributes(&self, schema: Option<&AttributeSchema>) -> ExampleAttributes {
        ExampleAttributes::synthesize(schema, &self.options)
    }

    /// Render the snippet for `language`. Returns `None` when the language has no snippet.
    pub fn render(&self, schema: Option<&AttributeSchema>, language: SdkLanguage) -> Option<Snippet> {
        let attributes = self.example_attributes(schema);
        let snippet = self.registry.format(language, &attributes, &self.options);

        log::trace!(target: "snippets",
                    language = language.as_str(),
                    attributes:serde = attributes,
                    rendered = snippet.is_some();
                    "rendered attributes snippet");

        snippet
    }

    /// Same as [`render`](Self::render) but takes the host's language identifier. Unknown
    /// identifiers render nothing.
    pub fn render_id(&self, schema: Option<&AttributeSchema>, language: &str) -> Option<Snippet> {
        let language = language
            .parse::<SdkLanguage>()
            .inspect_err(|err| {
                log::debug!(target: "snippets", language; "not rendering snippet: {}", err);
            })
            .ok()?;
        self.render(schema, language)
    }
}
