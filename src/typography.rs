//! The locale typography table: quote pairs, sentence-ending punctuation,
//! spacing rules, and per-locale special behaviors.
//!
//! Everything locale-specific that the checkers consume is centralized here.
//! [`TypographyProfile::for_locale`] is a pure, total function: any locale
//! this table knows nothing about falls back to the Western/English
//! defaults. Profiles are cheap to build but checkers memoize them through
//! [`ProfileCache`], which is owned per checker instance so tests never
//! share state.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Display;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::locale::LocaleTag;

/// The kinds of sentence-ending punctuation the checkers understand.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PunctuationKind {
    Period,
    Question,
    Exclamation,
    Ellipsis,
    Colon,
}

impl PunctuationKind {
    pub const ALL: [PunctuationKind; 5] = [
        PunctuationKind::Period,
        PunctuationKind::Question,
        PunctuationKind::Exclamation,
        PunctuationKind::Ellipsis,
        PunctuationKind::Colon,
    ];

    /// The configuration key name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            PunctuationKind::Period => "period",
            PunctuationKind::Question => "question",
            PunctuationKind::Exclamation => "exclamation",
            PunctuationKind::Ellipsis => "ellipsis",
            PunctuationKind::Colon => "colon",
        }
    }
}

impl Display for PunctuationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PunctuationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "period" => Ok(PunctuationKind::Period),
            "question" => Ok(PunctuationKind::Question),
            "exclamation" => Ok(PunctuationKind::Exclamation),
            "ellipsis" => Ok(PunctuationKind::Ellipsis),
            "colon" => Ok(PunctuationKind::Colon),
            _ => Err(Error::UnknownPunctuationKind {
                given: s.to_string(),
                valid: PunctuationKind::ALL
                    .iter()
                    .map(|k| k.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

/// Default Western punctuation for each kind.
pub(crate) fn default_punctuation(kind: PunctuationKind) -> &'static str {
    match kind {
        PunctuationKind::Period => ".",
        PunctuationKind::Question => "?",
        PunctuationKind::Exclamation => "!",
        PunctuationKind::Ellipsis => "…",
        PunctuationKind::Colon => ":",
    }
}

type QuoteChars = [char; 4]; // start, end, alternate start, alternate end

lazy_static! {
    /// Quote pairs by locale key. Language keys carry the CLDR default for
    /// the language; more specific keys override where a script or region
    /// changes the convention (e.g. `zh-Hant`, `pt-PT`).
    static ref QUOTES: BTreeMap<&'static str, QuoteChars> = {
        let mut m: BTreeMap<&'static str, QuoteChars> = BTreeMap::new();
        for lang in ["de", "cs", "sk", "sl", "bg", "et", "lt"] {
            m.insert(lang, ['„', '“', '‚', '‘']);
        }
        for lang in ["hr", "sr", "mk"] {
            m.insert(lang, ['„', '”', '‚', '‘']);
        }
        for lang in ["pl", "ro"] {
            m.insert(lang, ['„', '”', '«', '»']);
        }
        m.insert("hu", ['„', '”', '»', '«']);
        for lang in ["it", "es", "el", "hy", "fa", "ca", "pt-PT"] {
            m.insert(lang, ['«', '»', '“', '”']);
        }
        // French nests guillemets rather than switching to curly quotes
        m.insert("fr", ['«', '»', '«', '»']);
        for lang in ["no", "nb", "nn"] {
            m.insert(lang, ['«', '»', '‘', '’']);
        }
        for lang in ["ru", "uk", "be"] {
            m.insert(lang, ['«', '»', '„', '“']);
        }
        for lang in ["sv", "fi", "da"] {
            m.insert(lang, ['”', '”', '’', '’']);
        }
        m.insert("ar", ['”', '“', '’', '‘']);
        for key in ["ja", "zh-Hant", "zh-TW", "zh-HK", "zh-MO"] {
            m.insert(key, ['「', '」', '『', '』']);
        }
        // “ ” / ‘ ’ is both the global default and the explicit convention
        // for these
        for lang in ["en", "af", "nl", "ko", "zh", "tr", "pt", "vi", "id", "he"] {
            m.insert(lang, ['“', '”', '‘', '’']);
        }
        m
    };

    /// Sentence-ending punctuation by language, for the kinds that differ
    /// from the Western defaults.
    static ref SENTENCE_ENDINGS: BTreeMap<&'static str, BTreeMap<PunctuationKind, &'static str>> = {
        use PunctuationKind::*;
        let mut m: BTreeMap<&'static str, BTreeMap<PunctuationKind, &'static str>> =
            BTreeMap::new();
        let mut insert = |lang: &'static str, rows: &[(PunctuationKind, &'static str)]| {
            m.insert(lang, rows.iter().copied().collect());
        };
        insert("ja", &[(Period, "。"), (Question, "？"), (Exclamation, "！"), (Ellipsis, "…"), (Colon, "：")]);
        insert("zh", &[(Period, "。"), (Question, "？"), (Exclamation, "！"), (Ellipsis, "…"), (Colon, "：")]);
        insert("el", &[(Period, "."), (Question, ";"), (Exclamation, "!"), (Ellipsis, "..."), (Colon, ":")]);
        insert("ar", &[(Period, "."), (Question, "؟"), (Exclamation, "!"), (Ellipsis, "…"), (Colon, ":")]);
        insert("bo", &[(Period, "།"), (Question, "།"), (Exclamation, "།"), (Ellipsis, "…"), (Colon, "།")]);
        insert("am", &[(Period, "።"), (Question, "፧"), (Exclamation, "!"), (Ellipsis, "…"), (Colon, ":")]);
        insert("ur", &[(Period, "۔"), (Question, "؟"), (Exclamation, "!"), (Ellipsis, "…"), (Colon, ":")]);
        insert("km", &[(Period, "។"), (Question, "?"), (Exclamation, "!"), (Ellipsis, "…"), (Colon, ":")]);
        for lang in ["as", "hi", "or", "pa", "kn", "bn"] {
            insert(lang, &[(Period, "।"), (Question, "?"), (Exclamation, "!"), (Ellipsis, "…"), (Colon, ":")]);
        }
        m
    };

    /// Every single-character sentence-ending mark known to the built-in
    /// tables, used when classifying the tail of a string.
    static ref BUILTIN_PUNCTUATION_CHARS: BTreeSet<char> = {
        let mut set: BTreeSet<char> = BTreeSet::new();
        for kind in PunctuationKind::ALL {
            let s = default_punctuation(kind);
            if s.chars().count() == 1 {
                set.extend(s.chars());
            }
        }
        for table in SENTENCE_ENDINGS.values() {
            for s in table.values() {
                if s.chars().count() == 1 {
                    set.extend(s.chars());
                }
            }
        }
        set
    };
}

/// Locales that require a thin no-break space before `! ? :`. This is a
/// hard-coded allow-list of European French variants; `fr-CA` and the
/// African French variants behave like English.
const FRENCH_SPACING_LOCALES: &[&str] = &["fr-FR", "fr-BE", "fr-CH", "fr-LU"];

/// Languages where terminal punctuation is conventionally optional: a
/// missing mark in the target is never an error.
const OPTIONAL_PUNCTUATION_LANGUAGES: &[&str] =
    &["th", "lo", "my", "km", "vi", "id", "ms", "tl", "jv", "su"];

/// Languages where quotes may be dropped from the translation entirely.
const QUOTE_OPTIONAL_LANGUAGES: &[&str] = &["sv", "it"];

/// The locale-specific typography rules consumed by the checkers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypographyProfile {
    pub quote_start: char,
    pub quote_end: char,
    pub quote_start_alt: char,
    pub quote_end_alt: char,
    pub sentence_ending: BTreeMap<PunctuationKind, String>,
    /// Thin no-break space required before `! ? :` (European French only).
    pub requires_nbsp: bool,
    /// A missing terminal mark in the target is acceptable.
    pub optional_punctuation: bool,
    /// Leading `¿`/`¡` required for questions/exclamations (Spanish).
    pub inverted_punctuation: bool,
    /// Quotes may be omitted from the target entirely (Swedish, Italian).
    pub skip_quote_check: bool,
    /// Square brackets accepted as an alternate quote pair (Japanese).
    pub accepts_square_brackets: bool,
}

impl TypographyProfile {
    /// Build the profile for a locale. Pure and total: unknown locales get
    /// the Western defaults.
    pub fn for_locale(tag: &LocaleTag) -> TypographyProfile {
        let language = tag.language().unwrap_or("");
        let [quote_start, quote_end, quote_start_alt, quote_end_alt] = quote_chars_for(tag);

        let sentence_ending = language_punctuation(language);

        let lang_region = match (tag.language(), tag.region()) {
            (Some(lang), Some(region)) => format!("{}-{}", lang, region),
            _ => String::new(),
        };

        TypographyProfile {
            quote_start,
            quote_end,
            quote_start_alt,
            quote_end_alt,
            sentence_ending,
            requires_nbsp: FRENCH_SPACING_LOCALES.contains(&lang_region.as_str()),
            optional_punctuation: OPTIONAL_PUNCTUATION_LANGUAGES.contains(&language),
            inverted_punctuation: language == "es",
            skip_quote_check: QUOTE_OPTIONAL_LANGUAGES.contains(&language),
            accepts_square_brackets: language == "ja",
        }
    }

    /// The sentence-ending mark for a punctuation kind in this locale.
    pub fn ending_for(&self, kind: PunctuationKind) -> &str {
        self.sentence_ending
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| default_punctuation(kind))
    }
}

/// The built-in per-kind punctuation map for a language, fully populated.
pub(crate) fn language_punctuation(language: &str) -> BTreeMap<PunctuationKind, String> {
    let overrides = SENTENCE_ENDINGS.get(language);
    PunctuationKind::ALL
        .iter()
        .map(|&kind| {
            let mark = overrides
                .and_then(|table| table.get(&kind).copied())
                .unwrap_or_else(|| default_punctuation(kind));
            (kind, mark.to_string())
        })
        .collect()
}

/// The built-in mark for one language and kind, defaults applied.
pub(crate) fn language_ending(language: &str, kind: PunctuationKind) -> &'static str {
    SENTENCE_ENDINGS
        .get(language)
        .and_then(|table| table.get(&kind).copied())
        .unwrap_or_else(|| default_punctuation(kind))
}

/// All single-character sentence-ending marks from the built-in tables.
pub(crate) fn builtin_punctuation_chars() -> &'static BTreeSet<char> {
    &BUILTIN_PUNCTUATION_CHARS
}

fn quote_chars_for(tag: &LocaleTag) -> QuoteChars {
    let mut keys: Vec<String> = Vec::new();
    let spec = tag.spec();
    if !spec.is_empty() {
        keys.push(spec);
    }
    if let (Some(lang), Some(script)) = (tag.language(), tag.script()) {
        keys.push(format!("{}-{}", lang, script));
    }
    if let (Some(lang), Some(region)) = (tag.language(), tag.region()) {
        keys.push(format!("{}-{}", lang, region));
    }
    if let Some(lang) = tag.language() {
        keys.push(lang.to_string());
    }
    if let Some(script) = tag.script() {
        keys.push(script.to_string());
    }
    for key in &keys {
        if let Some(chars) = QUOTES.get(key.as_str()) {
            return *chars;
        }
    }
    ['“', '”', '‘', '’']
}

/// Memoizing wrapper around [`TypographyProfile::for_locale`], keyed by the
/// normalized locale spec. Safe for concurrent read/fill; recomputation on a
/// race is harmless because the profile is deterministic.
#[derive(Debug, Default)]
pub struct ProfileCache {
    inner: RwLock<HashMap<String, Arc<TypographyProfile>>>,
}

impl ProfileCache {
    pub fn new() -> ProfileCache {
        ProfileCache::default()
    }

    /// The profile for a locale tag, computed once and shared thereafter.
    pub fn get(&self, tag: &LocaleTag) -> Arc<TypographyProfile> {
        let key = tag.spec();
        if let Ok(cache) = self.inner.read() {
            if let Some(profile) = cache.get(&key) {
                return Arc::clone(profile);
            }
        }
        let profile = Arc::new(TypographyProfile::for_locale(tag));
        if let Ok(mut cache) = self.inner.write() {
            cache.insert(key, Arc::clone(&profile));
        }
        profile
    }

    /// Convenience: parse a locale spec and fetch its profile.
    pub fn get_spec(&self, locale: &str) -> Arc<TypographyProfile> {
        self.get(&LocaleTag::parse(locale))
    }
}
