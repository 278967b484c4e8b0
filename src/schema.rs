use serde::{Deserialize, Serialize};

use crate::Result;

/// Declared type of a targeting attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Datatype {
    /// `true` / `false`.
    #[serde(rename = "boolean")]
    Boolean,
    /// Any JSON number.
    #[serde(rename = "number")]
    Number,
    /// Free-form text.
    #[serde(rename = "string")]
    String,
    /// Text that may be hashed before it reaches the SDK.
    #[serde(rename = "secureString")]
    SecureString,
    /// List of numbers.
    #[serde(rename = "number[]")]
    NumberArray,
    /// List of strings.
    #[serde(rename = "string[]")]
    StringArray,
    /// List of secure strings.
    #[serde(rename = "secureString[]")]
    SecureStringArray,
    /// One of the values in the entry's enum list.
    #[serde(rename = "enum")]
    Enum,
    /// Any datatype this crate does not know about. Produces a `null` example value.
    #[serde(other)]
    Unknown,
}

impl Datatype {
    /// Identifier used by the host schema.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Datatype::Boolean => "boolean",
            Datatype::Number => "number",
            Datatype::String => "string",
            Datatype::SecureString => "secureString",
            Datatype::NumberArray => "number[]",
            Datatype::StringArray => "string[]",
            Datatype::SecureStringArray => "secureString[]",
            Datatype::Enum => "enum",
            Datatype::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declaration in the host's attribute schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSchemaEntry {
    /// Dot-separated path of the attribute, e.g. `"company.plan"`.
    pub property: String,
    /// Declared type, which selects the example value.
    pub datatype: Datatype,
    /// Comma-separated list of allowed values for [`Datatype::Enum`].
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_list: Option<String>,
}

impl AttributeSchemaEntry {
    /// An entry without an enum list.
    pub fn new(property: impl Into<String>, datatype: Datatype) -> Self {
        AttributeSchemaEntry {
            property: property.into(),
            datatype,
            enum_list: None,
        }
    }

    /// Set the comma-separated enum values.
    pub fn with_enum_list(mut self, enum_list: impl Into<String>) -> Self {
        self.enum_list = Some(enum_list.into());
        self
    }
}

/// `TryParse` lets a single schema entry fail to parse without failing the whole schema.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TryParse<T> {
    Parsed(T),
    ParseFailed(serde_json::Value),
}

/// Ordered list of attribute declarations, as supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSchema(Vec<AttributeSchemaEntry>);

impl AttributeSchema {
    /// Schema with `entries` in declaration order.
    pub fn new(entries: Vec<AttributeSchemaEntry>) -> Self {
        AttributeSchema(entries)
    }

    /// Parse the host's JSON representation of the schema.
    ///
    /// The top level must be an array (or `null`, meaning no schema). Individual entries that
    /// don't have the expected shape are skipped.
    ///
    /// ```
    /// # use targeting_snippets::AttributeSchema;
    /// let schema = AttributeSchema::from_json(r#"[{"property": "id", "datatype": "string"}]"#)?;
    /// assert_eq!(schema.len(), 1);
    /// # Ok::<(), targeting_snippets::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Option<Vec<TryParse<AttributeSchemaEntry>>> = serde_json::from_str(json)?;
        let entries = entries
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| match entry {
                TryParse::Parsed(entry) => Some(entry),
                TryParse::ParseFailed(value) => {
                    log::debug!(target: "snippets", entry:serde = value; "skipping malformed attribute schema entry");
                    None
                }
            })
            .collect();
        Ok(AttributeSchema(entries))
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[AttributeSchemaEntry] {
        &self.0
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the schema declares no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<AttributeSchemaEntry>> for AttributeSchema {
    fn from(value: Vec<AttributeSchemaEntry>) -> Self {
        AttributeSchema(value)
    }
}

impl FromIterator<AttributeSchemaEntry> for AttributeSchema {
    fn from_iter<I: IntoIterator<Item = AttributeSchemaEntry>>(iter: I) -> Self {
        AttributeSchema(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AttributeSchema {
    type Item = &'a AttributeSchemaEntry;
    type IntoIter = std::slice::Iter<'a, AttributeSchemaEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
