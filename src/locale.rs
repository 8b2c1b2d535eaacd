//! Locale tag parsing and normalization.
//!
//! A [`LocaleTag`] is the decomposed form of a BCP-47-style locale specifier:
//! language, script, region, and variant, each optional. Parsing never fails;
//! unrecognizable input simply yields a tag with fewer components, and the
//! rest of the crate degrades to Western defaults for anything it does not
//! know. Canonical casing is applied on construction (language lowercase,
//! script title-case, region uppercase) and tags are immutable afterwards.

use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// A parsed locale specifier, e.g. `zh-Hans-CN` or the partial `US`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocaleTag {
    language: Option<String>,
    script: Option<String>,
    region: Option<String>,
    variant: Option<String>,
}

impl LocaleTag {
    /// Parse a locale specifier. Underscores are accepted as separators.
    ///
    /// Well-formed language-first tags go through `unic-langid` for
    /// canonicalization; partial tags (`US`, `Hans`, `419`) fall back to
    /// shape-based classification of each dash-separated part.
    pub fn parse(spec: &str) -> LocaleTag {
        let cleaned = spec.trim().replace('_', "-");
        if cleaned.is_empty() {
            return LocaleTag::default();
        }

        let first = cleaned.split('-').next().unwrap_or("");
        if is_language_shape(first) {
            if let Ok(id) = LanguageIdentifier::from_str(&cleaned) {
                let language = match id.language.as_str() {
                    "und" => None,
                    lang => Some(lang.to_string()),
                };
                return LocaleTag {
                    language,
                    script: id.script.map(|s| s.as_str().to_string()),
                    region: id.region.map(|r| r.as_str().to_string()),
                    variant: id.variants().next().map(|v| v.as_str().to_lowercase()),
                };
            }
        }

        let mut tag = LocaleTag::default();
        for part in cleaned.split('-').filter(|p| !p.is_empty()) {
            if tag.language.is_none() && is_language_shape(part) {
                tag.language = Some(part.to_lowercase());
            } else if tag.script.is_none() && is_script_shape(part) {
                tag.script = Some(titlecase(part));
            } else if tag.region.is_none() && is_region_shape(part) {
                tag.region = Some(part.to_uppercase());
            } else if tag.variant.is_none() {
                tag.variant = Some(part.to_lowercase());
            }
        }
        tag
    }

    /// Build a tag from individual components, applying canonical casing.
    pub fn from_parts(
        language: Option<&str>,
        script: Option<&str>,
        region: Option<&str>,
        variant: Option<&str>,
    ) -> LocaleTag {
        fn clean(part: Option<&str>) -> Option<&str> {
            part.map(str::trim).filter(|p| !p.is_empty())
        }
        LocaleTag {
            language: clean(language).map(str::to_lowercase),
            script: clean(script).map(titlecase),
            region: clean(region).map(str::to_uppercase),
            variant: clean(variant).map(str::to_lowercase),
        }
    }

    /// The ISO 639 language subtag, lowercase.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The ISO 15924 script subtag, title-case.
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// The ISO 3166 region subtag (or UN M.49 area code), uppercase.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The variant subtag, lowercase.
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// The canonical dash-joined specifier, e.g. `zh-Hans-CN`.
    pub fn spec(&self) -> String {
        [
            self.language.as_deref(),
            self.script.as_deref(),
            self.region.as_deref(),
            self.variant.as_deref(),
        ]
        .iter()
        .flatten()
        .copied()
        .collect::<Vec<_>>()
        .join("-")
    }

    /// A copy of this tag reduced to its language component.
    pub fn language_only(&self) -> LocaleTag {
        LocaleTag {
            language: self.language.clone(),
            ..LocaleTag::default()
        }
    }

    /// True when no component is set.
    pub fn is_empty(&self) -> bool {
        self.language.is_none()
            && self.script.is_none()
            && self.region.is_none()
            && self.variant.is_none()
    }

    /// True when language, script, and region are all present.
    pub fn is_fully_specified(&self) -> bool {
        self.language.is_some() && self.script.is_some() && self.region.is_some()
    }
}

impl FromStr for LocaleTag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LocaleTag::parse(s))
    }
}

impl From<&str> for LocaleTag {
    fn from(spec: &str) -> Self {
        LocaleTag::parse(spec)
    }
}

impl Display for LocaleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spec())
    }
}

fn is_language_shape(part: &str) -> bool {
    (2..=3).contains(&part.len())
        && part.chars().all(|c| c.is_ascii_lowercase())
}

fn is_script_shape(part: &str) -> bool {
    part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_region_shape(part: &str) -> bool {
    (part.len() == 2 && part.chars().all(|c| c.is_ascii_uppercase()))
        || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
}

fn titlecase(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => {
            first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
        }
        None => String::new(),
    }
}
