use serde::{Deserialize, Serialize};

use crate::SnippetRenderer;

/// Options that control example value synthesis and SDK-version dependent templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub(crate) hash_secure_attributes: bool,
    pub(crate) secure_attribute_salt: String,
    pub(crate) version: Option<String>,
}

impl FormatOptions {
    /// Create options with hashing disabled and no SDK version.
    ///
    /// ```
    /// # use targeting_snippets::FormatOptions;
    /// let options = FormatOptions::new();
    /// assert!(!options.hashes_secure_attributes());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash `secureString` and `secureString[]` example values with the given salt.
    ///
    /// ```
    /// # use targeting_snippets::FormatOptions;
    /// let mut options = FormatOptions::new();
    /// options.hash_secure_attributes("s3cr3t");
    /// ```
    pub fn hash_secure_attributes(&mut self, salt: impl Into<String>) -> &mut Self {
        self.hash_secure_attributes = true;
        self.secure_attribute_salt = salt.into();
        self
    }

    /// Set the SDK version the snippet targets. Some templates change with the version.
    pub fn version(&mut self, version: impl Into<String>) -> &mut Self {
        self.version = Some(version.into());
        self
    }

    /// Whether secure values are hashed.
    pub fn hashes_secure_attributes(&self) -> bool {
        self.hash_secure_attributes
    }

    /// Salt prepended to secure values before hashing.
    pub fn secure_attribute_salt(&self) -> &str {
        &self.secure_attribute_salt
    }

    /// SDK version set with [`version`](Self::version), if any.
    pub fn sdk_version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Create a new [`SnippetRenderer`] with the built-in language formatters.
    ///
    /// ```
    /// # use targeting_snippets::{FormatOptions, SnippetRenderer};
    /// let renderer: SnippetRenderer = FormatOptions::new().version("1.4.0").clone().to_renderer();
    /// ```
    pub fn to_renderer(self) -> SnippetRenderer {
        SnippetRenderer::new(self)
    }
}
