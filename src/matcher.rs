//! Locale distance scoring and likely-locale completion.
//!
//! The match score is a weighted combination of the four locale components
//! (language 50%, script 20%, region 25%, variant 5%), with partial credit
//! for macro-language relationships, directional mutual intelligibility, and
//! geographic containment. The containment formula
//! `(i + 1) / len × 100 × 0.2` is a fixed contract; the exact values it
//! produces are pinned by the integration tests.

use crate::locale::LocaleTag;
use crate::matchdata;

const WEIGHT_LANGUAGE: f64 = 0.50;
const WEIGHT_SCRIPT: f64 = 0.20;
const WEIGHT_REGION: f64 = 0.25;
const WEIGHT_VARIANT: f64 = 0.05;

/// The universal region code, common ancestor of every region.
pub const WORLD_REGION: &str = "001";

/// Compares locales for compatibility and fills in missing components.
#[derive(Debug, Clone)]
pub struct LocaleMatcher {
    locale: LocaleTag,
}

impl LocaleMatcher {
    /// Create a matcher anchored at the given locale.
    pub fn new(locale: LocaleTag) -> LocaleMatcher {
        LocaleMatcher { locale }
    }

    /// The locale this matcher was constructed with.
    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    /// Fill in the most likely missing script/region for the anchor locale.
    /// Returns the anchor unchanged when nothing is known about it.
    pub fn likely_locale(&self) -> LocaleTag {
        likely_locale_of(&self.locale)
    }

    /// Like [`likely_locale`](Self::likely_locale), but leaves out the script
    /// when it is the undisputed default for the language. Multi-script
    /// languages (sr, uz, zh, ...) always keep their script.
    pub fn likely_locale_minimal(&self) -> LocaleTag {
        let full = likely_locale_of(&self.locale);
        let Some(language) = full.language() else {
            return full;
        };
        let lang_default = likely_locale_of(&full.language_only());
        if full.script() == lang_default.script()
            && !matchdata::MULTI_SCRIPT_LANGUAGES.contains(&language)
        {
            LocaleTag::from_parts(Some(language), None, full.region(), None)
        } else {
            full
        }
    }

    /// The macro language for the anchor locale's language, or the language
    /// itself when it is not a member of any macro language.
    pub fn macro_language(&self) -> Option<String> {
        self.locale.language().map(|lang| {
            matchdata::macro_language(lang)
                .unwrap_or(lang)
                .to_string()
        })
    }

    /// The chain of regions containing the anchor locale's region, innermost
    /// first and ending with the world. Empty for unknown regions.
    pub fn region_containment(&self) -> Vec<String> {
        let region = self
            .locale
            .region()
            .map(str::to_string)
            .or_else(|| self.likely_locale().region().map(str::to_string));
        match region {
            Some(region) => matchdata::region_chain(&region)
                .iter()
                .map(|r| r.to_string())
                .collect(),
            None => Vec::new(),
        }
    }

    /// The smallest region containing both the anchor locale and `other`.
    /// Underspecified locales are completed via the likely-locale data first.
    /// Returns the world code when either side has no region at all.
    pub fn smallest_common_region(&self, other: Option<&LocaleTag>) -> String {
        let Some(other) = other else {
            return WORLD_REGION.to_string();
        };

        let this_region = self
            .locale
            .region()
            .map(str::to_string)
            .or_else(|| self.likely_locale().region().map(str::to_string));
        let other_region = likely_locale_of(other).region().map(str::to_string);

        let (Some(this_region), Some(other_region)) = (this_region, other_region) else {
            return WORLD_REGION.to_string();
        };

        let this_chain = matchdata::region_chain(&this_region);
        let other_chain = matchdata::region_chain(&other_region);
        for container in this_chain {
            if other_chain.contains(container) {
                return container.to_string();
            }
        }
        WORLD_REGION.to_string()
    }

    /// Score how well `other` matches the anchor locale, from 0 (nothing in
    /// common) to 100 (equivalent). Scores are intentionally asymmetric for
    /// mutually intelligible language pairs.
    pub fn match_score(&self, other: &LocaleTag) -> u8 {
        let language = self.language_score(other);
        let script = self.script_score(other);
        let region = self.region_score(other);
        let variant = if self.locale.variant() == other.variant() {
            100.0
        } else {
            0.0
        };

        let total = language * WEIGHT_LANGUAGE
            + script * WEIGHT_SCRIPT
            + region * WEIGHT_REGION
            + variant * WEIGHT_VARIANT;
        total.round() as u8
    }

    fn language_score(&self, other: &LocaleTag) -> f64 {
        let (a, b) = (self.locale.language(), other.language());
        if a == b {
            return 100.0;
        }
        match (a, b) {
            (Some(a), Some(b)) => {
                let macro_a = matchdata::macro_language(a).unwrap_or(a);
                let macro_b = matchdata::macro_language(b).unwrap_or(b);
                if macro_a == macro_b {
                    90.0
                } else {
                    matchdata::mutual_intelligibility(a, b) as f64
                }
            }
            _ => {
                // one side has no language at all; fall back to the likely
                // completions and compare those
                let full_a = likely_locale_of(&self.locale);
                let full_b = likely_locale_of(other);
                if full_a.language().is_some() && full_a.language() == full_b.language() {
                    100.0
                } else {
                    0.0
                }
            }
        }
    }

    fn script_score(&self, other: &LocaleTag) -> f64 {
        let (a, b) = (self.locale.script(), other.script());
        if a == b {
            return 100.0;
        }
        if a.is_none() || b.is_none() {
            let full_a = if a.is_some() {
                self.locale.clone()
            } else {
                likely_locale_of(&self.locale.language_only())
            };
            let full_b = if b.is_some() {
                other.clone()
            } else {
                likely_locale_of(&other.language_only())
            };
            if full_a.script() == full_b.script() {
                return 100.0;
            }
        }
        0.0
    }

    fn region_score(&self, other: &LocaleTag) -> f64 {
        let (a, b) = (self.locale.region(), other.region());
        if a == b {
            return 100.0;
        }
        match (a, b) {
            (Some(a), Some(b)) => {
                // walk the containment chain of our own region, excluding the
                // trivial world entry at the end; deeper containers give less
                // and less credit
                let chain = matchdata::region_chain(a);
                for (i, container) in chain.iter().take(chain.len().saturating_sub(1)).enumerate() {
                    if let Some(members) = matchdata::region_members(container) {
                        if members.contains(&b) {
                            return ((i + 1) as f64 * 100.0 / chain.len() as f64) * 0.2;
                        }
                    }
                }
                0.0
            }
            _ => {
                let full_a = likely_locale_of(&self.locale);
                let full_b = likely_locale_of(other);
                if full_a.region().is_some() && full_a.region() == full_b.region() {
                    100.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Complete a partial locale via the likely-subtags table, trying
/// progressively less specific keys before giving up and returning the
/// input unchanged.
fn likely_locale_of(locale: &LocaleTag) -> LocaleTag {
    if locale.is_fully_specified() {
        return locale.clone();
    }

    let keys = [
        locale.spec(),
        LocaleTag::from_parts(locale.language(), None, locale.region(), None).spec(),
        LocaleTag::from_parts(locale.language(), locale.script(), None, None).spec(),
        LocaleTag::from_parts(locale.language(), None, None, None).spec(),
        LocaleTag::from_parts(None, locale.script(), locale.region(), None).spec(),
        LocaleTag::from_parts(None, None, locale.region(), None).spec(),
        LocaleTag::from_parts(None, locale.script(), None, None).spec(),
    ];
    for key in keys.iter().filter(|k| !k.is_empty()) {
        if let Some(spec) = matchdata::likely_locale_spec(key) {
            return LocaleTag::parse(spec);
        }
    }
    locale.clone()
}
