//! Lenient SDK version ordering.
//!
//! SDK versions reported by hosts are not always strict semver: they may carry a leading `v`, omit
//! the patch component or have extra components. [`SdkVersion`] accepts all of these and compares
//! numeric components numerically, treating missing components as zero.
use std::{cmp::Ordering, sync::LazyLock};

use regex::Regex;
use semver::Prerelease;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?(?P<core>[0-9]+(?:\.[0-9]+)*)(?:-(?P<pre>[0-9A-Za-z.-]+))?(?:\+.*)?$")
        .expect("version regex is valid")
});

/// A dotted numeric version with an optional pre-release tag.
///
/// Unparseable input is treated as version `0`.
///
/// ```
/// # use targeting_snippets::SdkVersion;
/// assert!(SdkVersion::parse("1.3.10") > SdkVersion::parse("1.3.1"));
/// assert!(SdkVersion::parse("1.3") == SdkVersion::parse("1.3.0"));
/// assert!(SdkVersion::parse("1.3.1-beta.2") < SdkVersion::parse("1.3.1"));
/// ```
#[derive(Debug, Clone)]
pub struct SdkVersion {
    components: Vec<u64>,
    pre: Prerelease,
}

impl SdkVersion {
    /// Parse `input`, falling back to `0` when it is not a version.
    pub fn parse(input: &str) -> SdkVersion {
        let input = input.trim();
        let Some(captures) = VERSION_RE.captures(input) else {
            log::trace!(target: "snippets", version = input; "unparseable sdk version, treating as 0");
            return SdkVersion::zero();
        };

        let mut components: Vec<u64> = Vec::new();
        for part in captures["core"].split('.') {
            match part.parse() {
                Ok(n) => components.push(n),
                // Only possible on overflow.
                Err(_) => return SdkVersion::zero(),
            }
        }

        let pre = match captures.name("pre") {
            Some(pre) => Prerelease::new(pre.as_str()).unwrap_or_else(|_| {
                log::trace!(target: "snippets", version = input; "invalid pre-release tag, ignoring it");
                Prerelease::EMPTY
            }),
            None => Prerelease::EMPTY,
        };

        SdkVersion { components, pre }
    }

    /// Parse an optional version, treating an absent version as `0`.
    pub fn parse_opt(input: Option<&str>) -> SdkVersion {
        input.map_or_else(SdkVersion::zero, SdkVersion::parse)
    }

    /// Version `0`, older than every released SDK.
    pub fn zero() -> SdkVersion {
        SdkVersion {
            components: vec![0],
            pre: Prerelease::EMPTY,
        }
    }

    /// Numeric components as written.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Pre-release tag without the leading `-`.
    pub fn pre_release(&self) -> Option<&str> {
        (!self.pre.is_empty()).then(|| self.pre.as_str())
    }
}

impl From<&str> for SdkVersion {
    fn from(value: &str) -> Self {
        SdkVersion::parse(value)
    }
}

impl Ord for SdkVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| {
                let a = self.components.get(i).copied().unwrap_or(0);
                let b = other.components.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ordering| ordering.is_ne())
            // An empty pre-release sorts after any non-empty one.
            .unwrap_or_else(|| self.pre.cmp(&other.pre))
    }
}

impl PartialOrd for SdkVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SdkVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for SdkVersion {}

impl std::fmt::Display for SdkVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for component in &self.components {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
            first = false;
        }
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        Ok(())
    }
}

/// Compare two version strings.
///
/// ```
/// # use targeting_snippets::compare_versions;
/// assert!(compare_versions("1.3.1", "1.3.1").is_ge());
/// assert!(compare_versions("1.2.9", "1.3.1").is_lt());
/// ```
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    SdkVersion::parse(a).cmp(&SdkVersion::parse(b))
}
