use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    obfuscation::sha256_hex,
    schema::{AttributeSchema, AttributeSchemaEntry, Datatype},
    FormatOptions,
};

/// Nested example attributes synthesized from an [`AttributeSchema`].
///
/// Keys keep the order in which the schema declares them. Dot-separated properties become nested
/// objects:
///
/// ```
/// # use targeting_snippets::{AttributeSchema, AttributeSchemaEntry, Datatype, ExampleAttributes, FormatOptions};
/// let schema: AttributeSchema = [AttributeSchemaEntry::new("a.b.c", Datatype::Number)]
///     .into_iter()
///     .collect();
/// let attributes = ExampleAttributes::synthesize(Some(&schema), &FormatOptions::new());
/// assert_eq!(attributes.to_json(), serde_json::json!({"a": {"b": {"c": 123}}}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExampleAttributes(Map<String, Value>);

const EXAMPLE_STRING: &str = "foo";
const EXAMPLE_STRINGS: [&str; 2] = ["foo", "bar"];

impl ExampleAttributes {
    /// Build example attributes for every entry of `schema`. An absent schema yields no
    /// attributes.
    pub fn synthesize(schema: Option<&AttributeSchema>, options: &FormatOptions) -> Self {
        let mut root = Map::new();
        let Some(schema) = schema else {
            return ExampleAttributes(root);
        };

        for entry in schema {
            let mut parts = entry.property.split('.').collect::<Vec<_>>();
            let leaf = parts.pop().unwrap_or_default();

            let Some(parent) = walk_or_create(&mut root, &parts) else {
                log::debug!(target: "snippets", property = entry.property.as_str();
                    "attribute path crosses a non-object value, skipping");
                continue;
            };

            parent.insert(leaf.to_owned(), example_value(entry, options));
        }

        ExampleAttributes(root)
    }

    /// Wrap an already built attributes object.
    pub fn from_map(map: Map<String, Value>) -> Self {
        ExampleAttributes(map)
    }

    /// The underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Top-level attribute by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Top-level keys in schema order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Top-level attributes in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of top-level attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no attributes at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Attributes as a generic JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Split top-level attributes into those whose key satisfies `predicate` and the rest.
    pub fn partition(&self, predicate: impl Fn(&str) -> bool) -> (Self, Self) {
        let (matching, rest): (Map<_, _>, Map<_, _>) = self
            .0
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .partition(|(k, _)| predicate(k));
        (ExampleAttributes(matching), ExampleAttributes(rest))
    }
}

impl From<ExampleAttributes> for Value {
    fn from(value: ExampleAttributes) -> Self {
        Value::Object(value.0)
    }
}

/// Descend into `root` following `path`, creating objects where nothing or an empty value (`null`,
/// `false`, `0`, `""`) is present. Returns `None` if the path runs into any other non-object value.
fn walk_or_create<'a>(
    root: &'a mut Map<String, Value>,
    path: &[&str],
) -> Option<&'a mut Map<String, Value>> {
    let mut current = root;
    for part in path {
        let slot = current
            .entry(*part)
            .or_insert_with(|| Value::Object(Map::new()));
        if is_empty_value(slot) {
            *slot = Value::Object(Map::new());
        }
        current = slot.as_object_mut()?;
    }
    Some(current)
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn example_value(entry: &AttributeSchemaEntry, options: &FormatOptions) -> Value {
    let secure = |s: &str| -> Value {
        if options.hash_secure_attributes {
            sha256_hex(&options.secure_attribute_salt, s).into()
        } else {
            s.into()
        }
    };

    match entry.datatype {
        Datatype::Boolean => true.into(),
        Datatype::Number => 123.into(),
        Datatype::String => EXAMPLE_STRING.into(),
        Datatype::SecureString => secure(EXAMPLE_STRING),
        Datatype::NumberArray => Value::Array(vec![1.into(), 2.into(), 3.into()]),
        Datatype::StringArray => Value::Array(EXAMPLE_STRINGS.iter().map(|&s| s.into()).collect()),
        Datatype::SecureStringArray => {
            Value::Array(EXAMPLE_STRINGS.iter().map(|&s| secure(s)).collect())
        }
        Datatype::Enum => entry
            .enum_list
            .as_deref()
            .and_then(|list| list.split(',').next())
            .map(|first| first.trim().into())
            .unwrap_or(Value::Null),
        Datatype::Unknown => {
            log::trace!(target: "snippets", property = entry.property.as_str();
                "unknown attribute datatype, using null");
            Value::Null
        }
    }
}
