use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// SDK languages a host can connect with.
///
/// Not every language has a snippet: edge runtimes and `other` render nothing unless a formatter is
/// registered for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SdkLanguage {
    /// Webflow no-code integration.
    #[serde(rename = "nocode-webflow")]
    NocodeWebflow,
    /// WordPress plugin.
    #[serde(rename = "nocode-wordpress")]
    NocodeWordpress,
    /// Shopify app.
    #[serde(rename = "nocode-shopify")]
    NocodeShopify,
    /// Any other no-code script tag.
    #[serde(rename = "nocode-other")]
    NocodeOther,
    /// Browser JavaScript SDK.
    #[serde(rename = "javascript")]
    JavaScript,
    /// Node.js SDK.
    #[serde(rename = "nodejs")]
    NodeJs,
    /// React SDK.
    #[serde(rename = "react")]
    React,
    /// PHP SDK.
    #[serde(rename = "php")]
    Php,
    /// Ruby SDK.
    #[serde(rename = "ruby")]
    Ruby,
    /// Python SDK.
    #[serde(rename = "python")]
    Python,
    /// Go SDK.
    #[serde(rename = "go")]
    Go,
    /// Java SDK.
    #[serde(rename = "java")]
    Java,
    /// C# SDK.
    #[serde(rename = "csharp")]
    CSharp,
    /// Kotlin SDK for Android.
    #[serde(rename = "android")]
    Android,
    /// Swift SDK for iOS.
    #[serde(rename = "ios")]
    Ios,
    /// Flutter SDK.
    #[serde(rename = "flutter")]
    Flutter,
    /// Elixir SDK.
    #[serde(rename = "elixir")]
    Elixir,
    /// Cloudflare Workers.
    #[serde(rename = "edge-cloudflare")]
    EdgeCloudflare,
    /// Fastly Compute.
    #[serde(rename = "edge-fastly")]
    EdgeFastly,
    /// AWS Lambda@Edge.
    #[serde(rename = "edge-lambda")]
    EdgeLambda,
    /// Any other edge runtime.
    #[serde(rename = "edge-other")]
    EdgeOther,
    /// Anything else.
    #[serde(rename = "other")]
    Other,
}

impl SdkLanguage {
    /// Every language, in the order the host lists them.
    pub const ALL: [SdkLanguage; 22] = [
        SdkLanguage::NocodeWebflow,
        SdkLanguage::NocodeWordpress,
        SdkLanguage::NocodeShopify,
        SdkLanguage::NocodeOther,
        SdkLanguage::JavaScript,
        SdkLanguage::NodeJs,
        SdkLanguage::React,
        SdkLanguage::Php,
        SdkLanguage::Ruby,
        SdkLanguage::Python,
        SdkLanguage::Go,
        SdkLanguage::Java,
        SdkLanguage::CSharp,
        SdkLanguage::Android,
        SdkLanguage::Ios,
        SdkLanguage::Flutter,
        SdkLanguage::Elixir,
        SdkLanguage::EdgeCloudflare,
        SdkLanguage::EdgeFastly,
        SdkLanguage::EdgeLambda,
        SdkLanguage::EdgeOther,
        SdkLanguage::Other,
    ];

    /// Identifier used by the host.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SdkLanguage::NocodeWebflow => "nocode-webflow",
            SdkLanguage::NocodeWordpress => "nocode-wordpress",
            SdkLanguage::NocodeShopify => "nocode-shopify",
            SdkLanguage::NocodeOther => "nocode-other",
            SdkLanguage::JavaScript => "javascript",
            SdkLanguage::NodeJs => "nodejs",
            SdkLanguage::React => "react",
            SdkLanguage::Php => "php",
            SdkLanguage::Ruby => "ruby",
            SdkLanguage::Python => "python",
            SdkLanguage::Go => "go",
            SdkLanguage::Java => "java",
            SdkLanguage::CSharp => "csharp",
            SdkLanguage::Android => "android",
            SdkLanguage::Ios => "ios",
            SdkLanguage::Flutter => "flutter",
            SdkLanguage::Elixir => "elixir",
            SdkLanguage::EdgeCloudflare => "edge-cloudflare",
            SdkLanguage::EdgeFastly => "edge-fastly",
            SdkLanguage::EdgeLambda => "edge-lambda",
            SdkLanguage::EdgeOther => "edge-other",
            SdkLanguage::Other => "other",
        }
    }

    /// No-code integrations set most attributes automatically from a script tag.
    pub const fn is_nocode(&self) -> bool {
        matches!(
            self,
            SdkLanguage::NocodeWebflow
                | SdkLanguage::NocodeWordpress
                | SdkLanguage::NocodeShopify
                | SdkLanguage::NocodeOther
        )
    }
}

impl std::fmt::Display for SdkLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SdkLanguage {
    type Err = Error;

    /// Parse a host identifier. Unlisted `nocode-*` identifiers map to
    /// [`SdkLanguage::NocodeOther`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(language) = SdkLanguage::ALL.iter().find(|l| l.as_str() == s) {
            return Ok(*language);
        }
        if s.starts_with("nocode") {
            return Ok(SdkLanguage::NocodeOther);
        }
        Err(Error::UnknownLanguage(s.to_owned()))
    }
}

/// Language identifier passed to the syntax highlighter alongside the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightLanguage {
    /// HTML.
    Html,
    /// JavaScript.
    JavaScript,
    /// TypeScript with JSX.
    Tsx,
    /// Kotlin.
    Kotlin,
    /// Swift.
    Swift,
    /// Go.
    Go,
    /// Ruby.
    Ruby,
    /// PHP.
    Php,
    /// Python.
    Python,
    /// Java.
    Java,
    /// Dart.
    Dart,
    /// C#.
    CSharp,
    /// Elixir.
    Elixir,
}

impl HighlightLanguage {
    /// Identifier understood by the highlighter.
    pub const fn as_str(&self) -> &'static str {
        match self {
            HighlightLanguage::Html => "html",
            HighlightLanguage::JavaScript => "javascript",
            HighlightLanguage::Tsx => "tsx",
            HighlightLanguage::Kotlin => "kotlin",
            HighlightLanguage::Swift => "swift",
            HighlightLanguage::Go => "go",
            HighlightLanguage::Ruby => "ruby",
            HighlightLanguage::Php => "php",
            HighlightLanguage::Python => "python",
            HighlightLanguage::Java => "java",
            HighlightLanguage::Dart => "dart",
            HighlightLanguage::CSharp => "csharp",
            HighlightLanguage::Elixir => "elixir",
        }
    }
}

impl std::fmt::Display for HighlightLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for language in SdkLanguage::ALL {
            assert_eq!(language.as_str().parse::<SdkLanguage>().unwrap(), language);
            assert_eq!(
                serde_json::to_string(&language).unwrap(),
                format!("\"{}\"", language.as_str())
            );
        }
    }

    #[test]
    fn unlisted_nocode_platform() {
        assert_eq!(
            "nocode-squarespace".parse::<SdkLanguage>().unwrap(),
            SdkLanguage::NocodeOther
        );
    }

    #[test]
    fn unknown_identifier() {
        assert!(matches!(
            "cobol".parse::<SdkLanguage>(),
            Err(Error::UnknownLanguage(s)) if s == "cobol"
        ));
    }

    #[test]
    fn nocode_family() {
        assert!(SdkLanguage::NocodeShopify.is_nocode());
        assert!(!SdkLanguage::JavaScript.is_nocode());
    }

    #[test]
    fn highlight_identifiers() {
        assert_eq!(HighlightLanguage::CSharp.as_str(), "csharp");
        assert_eq!(
            serde_json::to_string(&HighlightLanguage::JavaScript).unwrap(),
            "\"javascript\""
        );
    }
}
