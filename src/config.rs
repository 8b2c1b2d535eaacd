//! Validated checker configuration.
//!
//! Raw configuration arrives as loosely typed, locale-keyed maps (the shape
//! a lint config file provides). It is normalized and validated once, at
//! checker construction: unknown punctuation-kind names and unusable locale
//! keys fail fast with a descriptive error instead of surfacing as confusing
//! behavior at check time. Per-locale punctuation overrides are partial and
//! merge over the built-in defaults for that locale's language.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;
use crate::locale::LocaleTag;
use crate::typography::{self, PunctuationKind};

const DEFAULT_SOURCE_LOCALE: &str = "en-US";
const DEFAULT_MINIMUM_LENGTH: usize = 10;

/// Strictness of the quote style checker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteCheckMode {
    /// ASCII quotes in the target are tolerated alongside the native style.
    #[default]
    Standard,
    /// Only the localized quote style is allowed; results become errors.
    LocaleOnly,
}

/// Configuration for [`crate::checks::quote_style::QuoteStyleCheck`].
#[derive(Debug, Clone)]
pub struct QuoteStyleConfig {
    pub(crate) mode: QuoteCheckMode,
    pub(crate) source_locale: LocaleTag,
}

impl Default for QuoteStyleConfig {
    fn default() -> Self {
        QuoteStyleConfig {
            mode: QuoteCheckMode::Standard,
            source_locale: LocaleTag::parse(DEFAULT_SOURCE_LOCALE),
        }
    }
}

impl QuoteStyleConfig {
    pub fn new() -> QuoteStyleConfig {
        QuoteStyleConfig::default()
    }

    /// Sets the checking mode.
    pub fn with_mode(mut self, mode: QuoteCheckMode) -> QuoteStyleConfig {
        self.mode = mode;
        self
    }

    /// Sets the source locale (defaults to en-US).
    pub fn with_source_locale(mut self, locale: &str) -> QuoteStyleConfig {
        self.source_locale = LocaleTag::parse(locale);
        self
    }

    /// Build from the raw configuration shape, validating the mode name.
    pub fn from_raw(raw: RawQuoteStyleConfig) -> Result<QuoteStyleConfig, Error> {
        let mode = match raw.param.as_deref() {
            None => QuoteCheckMode::Standard,
            Some("localeOnly") => QuoteCheckMode::LocaleOnly,
            Some(other) => {
                return Err(Error::invalid_configuration(format!(
                    "unknown quote style param `{}`; the only valid param is `localeOnly`",
                    other
                )));
            }
        };
        let mut config = QuoteStyleConfig::new().with_mode(mode);
        if let Some(source_locale) = raw.source_locale.as_deref() {
            config = config.with_source_locale(source_locale);
        }
        Ok(config)
    }

    /// Build from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<QuoteStyleConfig, Error> {
        QuoteStyleConfig::from_raw(serde_json::from_str(json)?)
    }
}

/// Raw, unvalidated quote style configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawQuoteStyleConfig {
    pub param: Option<String>,
    pub source_locale: Option<String>,
}

/// Configuration for [`crate::checks::sentence_ending::SentenceEndingCheck`].
#[derive(Debug, Clone)]
pub struct SentenceEndingConfig {
    pub(crate) minimum_length: usize,
    pub(crate) source_locale: LocaleTag,
    /// language → fully merged kind→mark map (built-ins plus overrides)
    overrides: BTreeMap<String, BTreeMap<PunctuationKind, String>>,
    /// language → source strings to skip entirely
    exceptions: BTreeMap<String, Vec<String>>,
}

impl Default for SentenceEndingConfig {
    fn default() -> Self {
        SentenceEndingConfig {
            minimum_length: DEFAULT_MINIMUM_LENGTH,
            source_locale: LocaleTag::parse(DEFAULT_SOURCE_LOCALE),
            overrides: BTreeMap::new(),
            exceptions: BTreeMap::new(),
        }
    }
}

impl SentenceEndingConfig {
    pub fn new() -> SentenceEndingConfig {
        SentenceEndingConfig::default()
    }

    /// Sets the minimum source length below which the check is skipped.
    pub fn with_minimum_length(mut self, minimum_length: usize) -> SentenceEndingConfig {
        self.minimum_length = minimum_length;
        self
    }

    /// Sets the source locale (defaults to en-US).
    pub fn with_source_locale(mut self, locale: &str) -> SentenceEndingConfig {
        self.source_locale = LocaleTag::parse(locale);
        self
    }

    /// Override one punctuation mark for a locale. Overrides are stored per
    /// language, so `ja-JP` configuration applies to all Japanese locales;
    /// unspecified kinds keep the built-in defaults for that language.
    pub fn with_override(
        mut self,
        locale: &str,
        kind: PunctuationKind,
        mark: impl Into<String>,
    ) -> Result<SentenceEndingConfig, Error> {
        let language = language_of(locale)?;
        self.overrides
            .entry(language.clone())
            .or_insert_with(|| typography::language_punctuation(&language))
            .insert(kind, mark.into());
        Ok(self)
    }

    /// Sets the exception list for a locale: source strings (matched
    /// case-insensitively against the whole trimmed source) that are never
    /// checked.
    pub fn with_exceptions(
        mut self,
        locale: &str,
        exceptions: Vec<String>,
    ) -> Result<SentenceEndingConfig, Error> {
        let language = language_of(locale)?;
        self.exceptions.insert(language, exceptions);
        Ok(self)
    }

    /// Build from the raw configuration shape. Unknown punctuation kinds
    /// and locale keys without a language are rejected here, eagerly.
    pub fn from_raw(raw: RawSentenceEndingConfig) -> Result<SentenceEndingConfig, Error> {
        let mut config = SentenceEndingConfig::new();
        if let Some(minimum_length) = raw.minimum_length {
            config.minimum_length = minimum_length;
        }
        for (locale_key, options) in raw.locales {
            for (kind_name, mark) in options.punctuation {
                let kind = PunctuationKind::from_str(&kind_name)?;
                config = config.with_override(&locale_key, kind, mark)?;
            }
            if !options.exceptions.is_empty() {
                config = config.with_exceptions(&locale_key, options.exceptions)?;
            }
        }
        Ok(config)
    }

    /// Build from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<SentenceEndingConfig, Error> {
        SentenceEndingConfig::from_raw(serde_json::from_str(json)?)
    }

    /// The expected mark for a language and kind, configuration overrides
    /// applied over the built-in table.
    pub(crate) fn punctuation_for(&self, language: &str, kind: PunctuationKind) -> String {
        if let Some(map) = self.overrides.get(language) {
            if let Some(mark) = map.get(&kind) {
                return mark.clone();
            }
        }
        typography::language_ending(language, kind).to_string()
    }

    /// All marks for a language except the colon, concatenated; used for
    /// sentence splitting so mid-sentence colons never split.
    pub(crate) fn enders_without_colon(&self, language: &str) -> String {
        PunctuationKind::ALL
            .iter()
            .filter(|&&kind| kind != PunctuationKind::Colon)
            .map(|&kind| self.punctuation_for(language, kind))
            .collect()
    }

    /// Single-character marks contributed by configuration overrides, for
    /// the tail-classification superset.
    pub(crate) fn override_punctuation_chars(&self) -> BTreeSet<char> {
        let mut set = BTreeSet::new();
        for map in self.overrides.values() {
            for mark in map.values() {
                if mark.chars().count() == 1 {
                    set.extend(mark.chars());
                }
            }
        }
        set
    }

    pub(crate) fn exceptions_for(&self, language: &str) -> Option<&[String]> {
        self.exceptions.get(language).map(Vec::as_slice)
    }
}

fn language_of(locale: &str) -> Result<String, Error> {
    LocaleTag::parse(locale)
        .language()
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidLocaleKey(locale.to_string()))
}

/// Raw, unvalidated sentence-ending configuration: optional fixed options
/// plus a locale-keyed map of per-kind overrides and exception lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSentenceEndingConfig {
    pub minimum_length: Option<usize>,
    #[serde(flatten)]
    pub locales: BTreeMap<String, RawLocaleOptions>,
}

/// Per-locale raw options: punctuation-kind name → mark, plus exceptions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLocaleOptions {
    pub exceptions: Vec<String>,
    #[serde(flatten)]
    pub punctuation: BTreeMap<String, String>,
}
