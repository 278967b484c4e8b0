//! Literal syntax tree used to print example attributes in different languages.
//!
//! Attributes are converted into a [`Literal`] tree, optionally rewritten (e.g., replacing a value
//! with a framework expression), and only then printed with a [`Dialect`]. Printing follows the
//! "pretty compact" layout: a container stays on one line when it fits into [`MAX_LINE_LENGTH`],
//! otherwise each element goes on its own line indented by [`INDENT`]. Widths are always measured
//! on the JSON spelling, so every dialect breaks lines at the same places.
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Number, Value};

/// Maximum width of a line, including indentation.
pub const MAX_LINE_LENGTH: usize = 80;
/// One level of indentation.
pub const INDENT: &str = "  ";

/// A value in a source-code literal.
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum Literal {
    /// `null` in JSON.
    #[from(skip)]
    Null,
    /// Boolean.
    Bool(bool),
    /// Number, printed as JSON prints it.
    Number(Number),
    /// Quoted and escaped string.
    String(String),
    /// List of values.
    Array(Vec<Literal>),
    /// Object members in insertion order.
    Object(Vec<(String, Literal)>),
    /// Source text inserted verbatim, e.g. `req.user.id`.
    #[from(skip)]
    Expr(String),
}

impl From<&Value> for Literal {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Literal::Null,
            Value::Bool(b) => Literal::Bool(*b),
            Value::Number(n) => Literal::Number(n.clone()),
            Value::String(s) => Literal::String(s.clone()),
            Value::Array(items) => Literal::Array(items.iter().map(Literal::from).collect()),
            Value::Object(members) => Literal::Object(
                members
                    .iter()
                    .map(|(k, v)| (k.clone(), Literal::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl Literal {
    /// Verbatim source text, see [`Literal::Expr`].
    pub fn expr(source: impl Into<String>) -> Self {
        Literal::Expr(source.into())
    }

    /// Replace the value of every object member whose key has a replacement with the replacement
    /// expression. Applies at any depth. Replaced values are not visited further.
    pub fn substitute(&mut self, replacements: &[(&str, &str)]) {
        match self {
            Literal::Object(members) => {
                for (key, value) in members.iter_mut() {
                    match replacements.iter().find(|(k, _)| *k == key.as_str()) {
                        Some((_, expr)) => *value = Literal::expr(*expr),
                        None => value.substitute(replacements),
                    }
                }
            }
            Literal::Array(items) => {
                for item in items.iter_mut() {
                    item.substitute(replacements);
                }
            }
            _ => {}
        }
    }

    /// Print the literal using `dialect` at the top level of a snippet.
    pub fn render(&self, dialect: &Dialect) -> String {
        self.render_at(dialect, "", 0)
    }

    fn render_at(&self, dialect: &Dialect, current_indent: &str, reserved: usize) -> String {
        let available = MAX_LINE_LENGTH
            .saturating_sub(current_indent.len())
            .saturating_sub(reserved);
        if self.render_inline(&Dialect::JSON).chars().count() <= available {
            return self.render_inline(dialect);
        }

        let next_indent = format!("{current_indent}{INDENT}");
        let (open, close, items) = match self {
            Literal::Array(items) if !items.is_empty() => {
                let last = items.len() - 1;
                let items = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| item.render_at(dialect, &next_indent, usize::from(i != last)))
                    .collect::<Vec<_>>();
                (dialect.array_open, dialect.array_close, items)
            }
            Literal::Object(members) if !members.is_empty() => {
                let last = members.len() - 1;
                let items = members
                    .iter()
                    .enumerate()
                    .map(|(i, (key, value))| {
                        let key = quote(key);
                        let reserved = key.chars().count()
                            + Dialect::JSON.key_separator.len()
                            + usize::from(i != last);
                        format!(
                            "{key}{}{}",
                            dialect.key_separator,
                            value.render_at(dialect, &next_indent, reserved)
                        )
                    })
                    .collect::<Vec<_>>();
                (dialect.object_open, dialect.object_close, items)
            }
            // Scalars and empty containers are never split.
            _ => return self.render_inline(dialect),
        };

        format!(
            "{open}\n{next_indent}{}\n{current_indent}{close}",
            items.join(&format!(",\n{next_indent}"))
        )
    }

    fn render_inline(&self, dialect: &Dialect) -> String {
        match self {
            Literal::Null => dialect.null.to_owned(),
            Literal::Bool(true) => dialect.true_literal.to_owned(),
            Literal::Bool(false) => dialect.false_literal.to_owned(),
            Literal::Number(n) => n.to_string(),
            Literal::String(s) => quote(s),
            Literal::Expr(source) => source.clone(),
            Literal::Array(items) => {
                let items = items
                    .iter()
                    .map(|item| item.render_inline(dialect))
                    .collect::<Vec<_>>();
                format!("{}{}{}", dialect.array_open, items.join(", "), dialect.array_close)
            }
            Literal::Object(members) if members.is_empty() => dialect.empty_object.to_owned(),
            Literal::Object(members) => {
                let members = members
                    .iter()
                    .map(|(key, value)| {
                        format!(
                            "{}{}{}",
                            quote(key),
                            dialect.key_separator,
                            value.render_inline(dialect)
                        )
                    })
                    .collect::<Vec<_>>();
                format!(
                    "{}{}{}",
                    dialect.object_open,
                    members.join(", "),
                    dialect.object_close
                )
            }
        }
    }
}

/// Token spelling of a target language's map/list literal syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Opens a non-empty map.
    pub object_open: &'static str,
    /// Closes a non-empty map.
    pub object_close: &'static str,
    /// A map without members.
    pub empty_object: &'static str,
    /// Opens a list.
    pub array_open: &'static str,
    /// Closes a list.
    pub array_close: &'static str,
    /// Between a key and its value.
    pub key_separator: &'static str,
    /// Boolean true.
    pub true_literal: &'static str,
    /// Boolean false.
    pub false_literal: &'static str,
    /// Absent value.
    pub null: &'static str,
}

impl Dialect {
    /// JSON, also valid JavaScript and TypeScript.
    pub const JSON: Dialect = Dialect {
        object_open: "{",
        object_close: "}",
        empty_object: "{}",
        array_open: "[",
        array_close: "]",
        key_separator: ": ",
        true_literal: "true",
        false_literal: "false",
        null: "null",
    };

    /// Python dict literals.
    pub const PYTHON: Dialect = Dialect {
        true_literal: "True",
        false_literal: "False",
        null: "None",
        ..Dialect::JSON
    };

    /// Ruby hash literals with string keys.
    pub const RUBY: Dialect = Dialect {
        null: "nil",
        ..Dialect::JSON
    };

    /// PHP associative arrays.
    pub const PHP: Dialect = Dialect {
        object_open: "[",
        object_close: "]",
        empty_object: "[]",
        key_separator: " => ",
        ..Dialect::JSON
    };

    /// Swift dictionary literals.
    pub const SWIFT: Dialect = Dialect {
        object_open: "[",
        object_close: "]",
        empty_object: "[:]",
        ..Dialect::JSON
    };
}

pub(crate) fn quote(s: &str) -> String {
    Value::String(s.to_owned()).to_string()
}

/// Conventional multi-line JSON with every element on its own line, indented by `indent`.
pub fn pretty_json(value: &Value, indent: &str) -> String {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    match value.serialize(&mut serializer) {
        Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| value.to_string()),
        Err(_) => value.to_string(),
    }
}
