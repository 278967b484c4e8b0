//! Code snippets that show how to set targeting attributes with a feature flagging SDK.
//!
//! # Overview
//!
//! Documentation pages show users how to pass their targeting attributes to the SDK. The snippets
//! are built from the user's [`AttributeSchema`] in two steps:
//!
//! 1. [`ExampleAttributes::synthesize`] fills every declared attribute with an example value of the
//!    right type (`"foo"`, `123`, `true`, ...). Dot-separated properties become nested objects and
//!    secure attributes can be hashed with a salt.
//! 2. A [`SnippetFormatter`] renders the example attributes as source code for one
//!    [`SdkLanguage`]. Formatters live in a [`FormatterRegistry`]; the default registry covers every
//!    language that has a snippet and more can be registered.
//!
//! [`SnippetRenderer`] ties both steps together. Create one from [`FormatOptions`]:
//!
//! ```
//! # use targeting_snippets::{AttributeSchema, FormatOptions, SdkLanguage};
//! let schema = AttributeSchema::from_json(
//!     r#"[{"property": "id", "datatype": "string"}, {"property": "premium", "datatype": "boolean"}]"#,
//! )?;
//! let renderer = FormatOptions::new().to_renderer();
//!
//! let snippet = renderer.render(Some(&schema), SdkLanguage::Python).unwrap();
//! assert_eq!(
//!     snippet.code_text(),
//!     Some(r#"gb.set_attributes({"id": "foo", "premium": True})"#)
//! );
//! # Ok::<(), targeting_snippets::Error>(())
//! ```
//!
//! # Error Handling
//!
//! Rendering never fails. Unknown datatypes produce `null` values and languages without a
//! formatter produce no snippet. [`Error`] is only returned when decoding host input strictly.
//!
//! # Logging
//!
//! The crate uses the [`log`](https://docs.rs/log/latest/log/) crate with the `snippets` target.
//! Skipped schema entries and unsupported languages are reported at `debug` level.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(missing_docs)]

mod attributes;
mod config;
mod error;
mod formatter;
mod language;
mod renderer;
mod schema;
mod snippet;
mod templates;
mod version;

pub mod literal;
pub mod obfuscation;

pub use attributes::ExampleAttributes;
pub use config::FormatOptions;
pub use error::{Error, Result};
pub use formatter::{FormatterRegistry, SnippetFormatter};
pub use language::{HighlightLanguage, SdkLanguage};
pub use renderer::SnippetRenderer;
pub use schema::{AttributeSchema, AttributeSchemaEntry, Datatype};
pub use snippet::{CodeBlock, Snippet, INTRO_TEXT};
pub use templates::{
    AUTOMATIC_ATTRIBUTES, NOCODE_AUTOMATIC_NOTE, NOCODE_MANUAL_NOTE, NODEJS_SCOPED_INSTANCE_VERSION,
};
pub use version::{compare_versions, SdkVersion};
