//! Built-in snippet templates, one function per SDK language.
use serde_json::Value;

use crate::{
    literal::{pretty_json, quote, Dialect, Literal},
    ExampleAttributes, FormatOptions, FormatterRegistry, HighlightLanguage, SdkLanguage, SdkVersion,
    Snippet,
};

/// First Node.js SDK version with `client.getScopedInstance()`.
pub const NODEJS_SCOPED_INSTANCE_VERSION: &str = "1.3.1";

/// Attributes the no-code script tag collects by itself.
pub const AUTOMATIC_ATTRIBUTES: [&str; 12] = [
    "id",
    "url",
    "path",
    "host",
    "query",
    "deviceType",
    "browser",
    "utmSource",
    "utmMedium",
    "utmCampaign",
    "utmTerm",
    "utmContent",
];

/// Express request properties that stand in for attribute placeholders.
const NODEJS_REQUEST_ATTRIBUTES: [(&str, &str); 6] = [
    ("id", "req.user.id"),
    ("email", "req.user.email"),
    ("url", "req.originalUrl"),
    ("path", "req.path"),
    ("host", "req.hostname"),
    ("query", "req.query"),
];

/// Shown above the no-code script when some attributes must be set by hand.
pub const NOCODE_MANUAL_NOTE: &str = "Some attributes are set automatically, but you will need to \
manually set the following ones. This must be added BEFORE the GrowthBook snippet.";

/// Shown instead of code when the no-code script collects every attribute.
pub const NOCODE_AUTOMATIC_NOTE: &str =
    "All of your attributes are set automatically, no configuration required.";

pub(crate) fn register_builtin(registry: &mut FormatterRegistry) {
    for language in SdkLanguage::ALL.into_iter().filter(SdkLanguage::is_nocode) {
        registry.register(language, nocode);
    }
    registry
        .register(SdkLanguage::JavaScript, javascript)
        .register(SdkLanguage::React, react)
        .register(SdkLanguage::NodeJs, nodejs)
        .register(SdkLanguage::Android, android)
        .register(SdkLanguage::Ios, ios)
        .register(SdkLanguage::Go, go)
        .register(SdkLanguage::Ruby, ruby)
        .register(SdkLanguage::Php, php)
        .register(SdkLanguage::Python, python)
        .register(SdkLanguage::Java, java)
        .register(SdkLanguage::Flutter, flutter)
        .register(SdkLanguage::CSharp, csharp)
        .register(SdkLanguage::Elixir, elixir);
}

fn literal(attributes: &ExampleAttributes) -> Literal {
    Literal::from(&attributes.to_json())
}

/// Continue every line after the first at the given indentation.
fn indent_lines(code: &str, indent: usize) -> String {
    code.split('\n')
        .collect::<Vec<_>>()
        .join(&format!("\n{}", " ".repeat(indent)))
}

/// One statement per top-level attribute, with the value as compact JSON.
fn per_attribute(attributes: &ExampleAttributes, statement: impl Fn(String, String) -> String) -> Vec<String> {
    attributes
        .iter()
        .map(|(key, value)| statement(quote(key), value.to_string()))
        .collect()
}

fn nocode(attributes: &ExampleAttributes, _: &FormatOptions) -> Option<Snippet> {
    let (_, manual) = attributes.partition(|key| AUTOMATIC_ATTRIBUTES.contains(&key));
    if manual.is_empty() {
        return Some(Snippet::message(NOCODE_AUTOMATIC_NOTE));
    }

    let code = format!(
        "<script>
window.growthbook_config = window.growthbook_config || {{}};
window.growthbook_config.attributes = {};
</script>",
        literal(&manual).render(&Dialect::JSON)
    );
    Some(Snippet::code(HighlightLanguage::Html, code).with_leading_note(NOCODE_MANUAL_NOTE))
}

fn javascript(attributes: &ExampleAttributes, _: &FormatOptions) -> Option<Snippet> {
    let code = format!(
        "growthbook.setAttributes({});",
        literal(attributes).render(&Dialect::JSON)
    );
    Some(Snippet::code(HighlightLanguage::JavaScript, code))
}

fn react(attributes: &ExampleAttributes, _: &FormatOptions) -> Option<Snippet> {
    let code = format!(
        "growthbook.setAttributes({});",
        literal(attributes).render(&Dialect::JSON)
    );
    Some(Snippet::code(HighlightLanguage::Tsx, code))
}

fn nodejs(attributes: &ExampleAttributes, options: &FormatOptions) -> Option<Snippet> {
    let version = SdkVersion::parse_opt(options.sdk_version());
    let scoped = version >= SdkVersion::parse(NODEJS_SCOPED_INSTANCE_VERSION);
    log::trace!(target: "snippets", version:% = version, scoped; "selected nodejs template");

    let code = if scoped {
        let mut attributes = literal(attributes);
        attributes.substitute(&NODEJS_REQUEST_ATTRIBUTES);
        format!(
            "app.use((req, res, next) => {{
  const userContext = {{
    attributes: {}
  }}
  \n  req.growthbook = client.getScopedInstance(userContext);
}});",
            indent_lines(&attributes.render(&Dialect::JSON), 4)
        )
    } else {
        format!(
            "app.use(function(req, res, next) {{
  req.growthbook.setAttributes({});
  next();
}})",
            indent_lines(&literal(attributes).render(&Dialect::JSON), 2)
        )
    };
    Some(Snippet::code(HighlightLanguage::JavaScript, code))
}

fn android(attributes: &ExampleAttributes, _: &FormatOptions) -> Option<Snippet> {
    let puts = per_attribute(attributes, |key, value| format!("attrs.put({key}, {value})"));
    let code = format!(
        "val attrs = HashMap<String, Any>()\n{}\n\ngb.setAttributes(attrs)",
        puts.join("\n")
    );
    Some(Snippet::code(HighlightLanguage::Kotlin, code))
}

fn ios(attributes: &ExampleAttributes, _: &FormatOptions) -> Option<Snippet> {
    let code = format!(
        "var attrs = {}\ngb.setAttributes(attrs)",
        literal(attributes).render(&Dialect::SWIFT)
    );
    Some(Snippet::code(HighlightLanguage::Swift, code))
}

fn go(attributes: &ExampleAttributes, _: &FormatOptions) -> Option<Snippet> {
    let code = format!(
        "data := []byte(`{}`)
var jsonMap map[string]any
if err := json.Unmarshal(data, &jsonMap); err != nil {{
  log.Fatal(\"Invalid JSON\")
}}
client,err := client.WithAttributes(gb.Attributes(jsonMap))",
        pretty_json(&Value::from(attributes.clone()), " ")
    );
    Some(Snippet::code(HighlightLanguage::Go, code))
}

fn ruby(attributes: &ExampleAttributes, _: &FormatOptions) -> Option<Snippet> {
    let code = format!("gb.attributes={}", literal(attributes).render(&Dialect::RUBY));
    Some(Snippet::code(HighlightLanguage::Ruby, code))
}

fn php(attributes: &ExampleAttributes, _: &FormatOptions) -> Option<Snippet> {
    let code = format!(
        "$growthbook->withAttributes({});",
        literal(attributes).render(&Dialect::PHP)
    );
    Some(Snippet::code(HighlightLanguage::Php, code))
}

fn python(attributes: &ExampleAttributes, _: &FormatOptions) -> Option<Snippet> {
    let code = format!(
        "gb.set_attributes({})",
        literal(attributes).render(&Dialect::PYTHON)
    );
    Some(Snippet::code(HighlightLanguage::Python, code))
}

fn java(attributes: &ExampleAttributes, _: &FormatOptions) -> Option<Snippet> {
    let puts = per_attribute(attributes, |key, value| {
        format!("userAttributesObj.put({key}, {value});")
    });
    let code = format!(
        "JSONObject userAttributesObj = new JSONObject();
{}
String userAttributesJson = userAttributesObj.toString();
growthBook.setAttributes(userAttributesJson);",
        puts.join("\n")
    );
    Some(Snippet::code(HighlightLanguage::Java, code))
}

fn flutter(attributes: &ExampleAttributes, _: &FormatOptions) -> Option<Snippet> {
    let puts = per_attribute(attributes, |key, value| format!("attrs.put({key}, {value})"));
    let code = format!(
        "val attrs = HashMap<String, Any>()\n{}\ngb.setAttributes(attrs);",
        puts.join("\n")
    );
    Some(Snippet::code(HighlightLanguage::Dart, code))
}

fn csharp(attributes: &ExampleAttributes, _: &FormatOptions) -> Option<Snippet> {
    let adds = per_attribute(attributes, |key, value| format!("attrs.Add({key}, {value});"));
    let code = format!(
        "var attrs = new JObject();\n{}\ngb.SetAttributes(attrs);",
        adds.join("\n")
    );
    Some(Snippet::code(HighlightLanguage::CSharp, code))
}

fn elixir(attributes: &ExampleAttributes, _: &FormatOptions) -> Option<Snippet> {
    let members = per_attribute(attributes, |key, value| format!("  {key} => {value}"));
    let code = format!(
        "attrs = %{{
{}
}}

context = %GrowthBook.Context{{
  features: features,
  attributes: attrs
}}",
        members.join(",\n")
    );
    Some(Snippet::code(HighlightLanguage::Elixir, code))
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use crate::{
        AttributeSchema, AttributeSchemaEntry, Datatype, ExampleAttributes, FormatOptions,
        FormatterRegistry, HighlightLanguage, SdkLanguage, INTRO_TEXT,
    };

    use super::{NOCODE_AUTOMATIC_NOTE, NOCODE_MANUAL_NOTE};

    fn attributes(entries: Vec<AttributeSchemaEntry>) -> ExampleAttributes {
        ExampleAttributes::synthesize(Some(&AttributeSchema::new(entries)), &FormatOptions::new())
    }

    fn small() -> ExampleAttributes {
        attributes(vec![
            AttributeSchemaEntry::new("id", Datatype::String),
            AttributeSchemaEntry::new("loggedIn", Datatype::Boolean),
            AttributeSchemaEntry::new("plan", Datatype::Enum),
        ])
    }

    /// The blank line of the scoped middleware keeps the body's indentation.
    fn scoped(expected: &str) -> String {
        expected.replace("}\n\n  req.growthbook", "}\n  \n  req.growthbook")
    }

    fn render(language: SdkLanguage, attributes: &ExampleAttributes, options: &FormatOptions) -> String {
        let snippet = FormatterRegistry::default()
            .format(language, attributes, options)
            .unwrap();
        snippet.code.unwrap().code
    }

    #[test]
    fn javascript_and_react() {
        let registry = FormatterRegistry::default();
        let js = registry
            .format(SdkLanguage::JavaScript, &small(), &FormatOptions::new())
            .unwrap();
        assert_eq!(js.notes, [INTRO_TEXT]);
        let block = js.code.unwrap();
        assert_eq!(block.language, HighlightLanguage::JavaScript);
        assert_eq!(
            block.code,
            r#"growthbook.setAttributes({"id": "foo", "loggedIn": true, "plan": null});"#
        );

        let react = registry
            .format(SdkLanguage::React, &small(), &FormatOptions::new())
            .unwrap()
            .code
            .unwrap();
        assert_eq!(react.language, HighlightLanguage::Tsx);
        assert_eq!(react.code, block.code);
    }

    #[test]
    fn python_ruby_php_swift_spelling() {
        let options = FormatOptions::new();
        assert_eq!(
            render(SdkLanguage::Python, &small(), &options),
            r#"gb.set_attributes({"id": "foo", "loggedIn": True, "plan": None})"#
        );
        assert_eq!(
            render(SdkLanguage::Ruby, &small(), &options),
            r#"gb.attributes={"id": "foo", "loggedIn": true, "plan": nil}"#
        );
        assert_eq!(
            render(SdkLanguage::Php, &small(), &options),
            r#"$growthbook->withAttributes(["id" => "foo", "loggedIn" => true, "plan" => null]);"#
        );
        assert_eq!(
            render(SdkLanguage::Ios, &small(), &options),
            "var attrs = [\"id\": \"foo\", \"loggedIn\": true, \"plan\": null]\ngb.setAttributes(attrs)"
        );
    }

    #[test]
    fn php_keeps_json_line_breaks() {
        let attributes = attributes(
            ["aa", "bb", "cc", "dd", "ee", "ff", "gg"]
                .into_iter()
                .map(|key| AttributeSchemaEntry::new(key, Datatype::Number))
                .collect(),
        );
        let options = FormatOptions::new();

        assert_eq!(
            render(SdkLanguage::JavaScript, &attributes, &options),
            r#"growthbook.setAttributes({"aa": 123, "bb": 123, "cc": 123, "dd": 123, "ee": 123, "ff": 123, "gg": 123});"#
        );
        assert_eq!(
            render(SdkLanguage::Php, &attributes, &options),
            r#"$growthbook->withAttributes(["aa" => 123, "bb" => 123, "cc" => 123, "dd" => 123, "ee" => 123, "ff" => 123, "gg" => 123]);"#
        );
    }

    #[test]
    fn nodejs_scoped_instance_substitutes_request_properties() {
        let attributes = attributes(vec![
            AttributeSchemaEntry::new("id", Datatype::String),
            AttributeSchemaEntry::new("email", Datatype::String),
            AttributeSchemaEntry::new("country", Datatype::String),
        ]);
        let mut options = FormatOptions::new();
        options.version("1.3.1");

        assert_eq!(
            render(SdkLanguage::NodeJs, &attributes, &options),
            scoped(
                r#"app.use((req, res, next) => {
  const userContext = {
    attributes: {"id": req.user.id, "email": req.user.email, "country": "foo"}
  }

  req.growthbook = client.getScopedInstance(userContext);
});"#
            )
        );
    }

    #[test]
    fn nodejs_scoped_instance_indents_multi_line_attributes() {
        let attributes = attributes(vec![
            AttributeSchemaEntry::new("id", Datatype::String),
            AttributeSchemaEntry::new("deviceId", Datatype::String),
            AttributeSchemaEntry::new("company", Datatype::String),
            AttributeSchemaEntry::new("loggedIn", Datatype::Boolean),
            AttributeSchemaEntry::new("employee", Datatype::Boolean),
            AttributeSchemaEntry::new("country", Datatype::String),
        ]);
        let mut options = FormatOptions::new();
        options.version("2.0.0");

        assert_eq!(
            render(SdkLanguage::NodeJs, &attributes, &options),
            scoped(
                r#"app.use((req, res, next) => {
  const userContext = {
    attributes: {
      "id": req.user.id,
      "deviceId": "foo",
      "company": "foo",
      "loggedIn": true,
      "employee": true,
      "country": "foo"
    }
  }

  req.growthbook = client.getScopedInstance(userContext);
});"#
            )
        );
    }

    #[test]
    fn nodejs_legacy_middleware() {
        let legacy = r#"app.use(function(req, res, next) {
  req.growthbook.setAttributes({"id": "foo", "loggedIn": true, "plan": null});
  next();
})"#;

        let mut options = FormatOptions::new();
        options.version("1.2.9");
        assert_eq!(render(SdkLanguage::NodeJs, &small(), &options), legacy);

        // No version at all counts as the oldest SDK.
        assert_eq!(render(SdkLanguage::NodeJs, &small(), &FormatOptions::new()), legacy);
    }

    #[test]
    fn per_attribute_statements() {
        let attributes = attributes(vec![
            AttributeSchemaEntry::new("id", Datatype::String),
            AttributeSchemaEntry::new("company.size", Datatype::Number),
            AttributeSchemaEntry::new("tags", Datatype::StringArray),
        ]);
        let options = FormatOptions::new();

        assert_eq!(
            render(SdkLanguage::Android, &attributes, &options),
            r#"val attrs = HashMap<String, Any>()
attrs.put("id", "foo")
attrs.put("company", {"size":123})
attrs.put("tags", ["foo","bar"])

gb.setAttributes(attrs)"#
        );
        assert_eq!(
            render(SdkLanguage::Java, &attributes, &options),
            r#"JSONObject userAttributesObj = new JSONObject();
userAttributesObj.put("id", "foo");
userAttributesObj.put("company", {"size":123});
userAttributesObj.put("tags", ["foo","bar"]);
String userAttributesJson = userAttributesObj.toString();
growthBook.setAttributes(userAttributesJson);"#
        );
        assert_eq!(
            render(SdkLanguage::Flutter, &attributes, &options),
            r#"val attrs = HashMap<String, Any>()
attrs.put("id", "foo")
attrs.put("company", {"size":123})
attrs.put("tags", ["foo","bar"])
gb.setAttributes(attrs);"#
        );
        assert_eq!(
            render(SdkLanguage::CSharp, &attributes, &options),
            r#"var attrs = new JObject();
attrs.Add("id", "foo");
attrs.Add("company", {"size":123});
attrs.Add("tags", ["foo","bar"]);
gb.SetAttributes(attrs);"#
        );
        assert_eq!(
            render(SdkLanguage::Elixir, &attributes, &options),
            r#"attrs = %{
  "id" => "foo",
  "company" => {"size":123},
  "tags" => ["foo","bar"]
}

context = %GrowthBook.Context{
  features: features,
  attributes: attrs
}"#
        );
    }

    #[test]
    fn go_embeds_indented_json() {
        let attributes = attributes(vec![AttributeSchemaEntry::new("a.b", Datatype::Number)]);
        assert_eq!(
            render(SdkLanguage::Go, &attributes, &FormatOptions::new()),
            "data := []byte(`{\n \"a\": {\n  \"b\": 123\n }\n}`)
var jsonMap map[string]any
if err := json.Unmarshal(data, &jsonMap); err != nil {
  log.Fatal(\"Invalid JSON\")
}
client,err := client.WithAttributes(gb.Attributes(jsonMap))"
        );
    }

    #[test]
    fn nocode_only_lists_manual_attributes() {
        let attributes = attributes(vec![
            AttributeSchemaEntry::new("id", Datatype::String),
            AttributeSchemaEntry::new("url", Datatype::String),
            AttributeSchemaEntry::new("plan", Datatype::String),
        ]);
        let snippet = FormatterRegistry::default()
            .format(SdkLanguage::NocodeWebflow, &attributes, &FormatOptions::new())
            .unwrap();

        assert_eq!(snippet.notes, [NOCODE_MANUAL_NOTE, INTRO_TEXT]);
        let block = snippet.code.unwrap();
        assert_eq!(block.language, HighlightLanguage::Html);
        assert_eq!(
            block.code,
            r#"<script>
window.growthbook_config = window.growthbook_config || {};
window.growthbook_config.attributes = {"plan": "foo"};
</script>"#
        );
    }

    #[test]
    fn nocode_with_only_automatic_attributes() {
        let attributes = attributes(vec![
            AttributeSchemaEntry::new("id", Datatype::String),
            AttributeSchemaEntry::new("utmSource", Datatype::String),
        ]);
        for language in SdkLanguage::ALL.into_iter().filter(SdkLanguage::is_nocode) {
            let snippet = FormatterRegistry::default()
                .format(language, &attributes, &FormatOptions::new())
                .unwrap();
            assert_eq!(snippet.notes, [NOCODE_AUTOMATIC_NOTE]);
            assert_eq!(snippet.code, None);
        }
    }

    #[test]
    fn empty_attributes_render_without_entries() {
        let empty = ExampleAttributes::default();
        let options = FormatOptions::new();

        assert_eq!(
            render(SdkLanguage::JavaScript, &empty, &options),
            "growthbook.setAttributes({});"
        );
        assert_eq!(
            render(SdkLanguage::Php, &empty, &options),
            "$growthbook->withAttributes([]);"
        );
        assert_eq!(
            render(SdkLanguage::Android, &empty, &options),
            "val attrs = HashMap<String, Any>()\n\n\ngb.setAttributes(attrs)"
        );
        let nocode = FormatterRegistry::default()
            .format(SdkLanguage::NocodeOther, &empty, &options)
            .unwrap();
        assert_eq!(nocode.code, None);
    }

    #[test]
    fn json_compatible_output_round_trips() {
        let schema: AttributeSchema =
            serde_json::from_reader(File::open("tests/data/attribute-schema.json").unwrap())
                .unwrap();
        let mut options = FormatOptions::new();
        options.hash_secure_attributes("salt");
        let attributes = ExampleAttributes::synthesize(Some(&schema), &options);

        let code = render(SdkLanguage::JavaScript, &attributes, &options);
        let literal = code
            .strip_prefix("growthbook.setAttributes(")
            .and_then(|s| s.strip_suffix(");"))
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(literal).unwrap();
        assert_eq!(parsed, attributes.to_json());

        let go = render(SdkLanguage::Go, &attributes, &options);
        let embedded = go
            .strip_prefix("data := []byte(`")
            .and_then(|s| s.split_once("`)"))
            .map(|(json, _)| json)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(embedded).unwrap();
        assert_eq!(parsed, attributes.to_json());
    }
}
