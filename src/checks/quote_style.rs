//! Checks that translated strings quote text the way the target locale
//! expects.
//!
//! The source string's quote style is classified first (ASCII double, ASCII
//! single, native primary, native alternate — first match wins), then the
//! target is tested against the set of acceptable forms for that style. When
//! the target uses recognizably wrong quote glyphs, each one gets a
//! single-character replacement command; when the target dropped the quotes
//! entirely there is nothing to anchor a fix to and only a highlight is
//! produced.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use lazy_static::lazy_static;
use regex::Regex;

use crate::checks::{CheckInput, QUOTE_STYLE_RULE, char_index};
use crate::config::{QuoteCheckMode, QuoteStyleConfig};
use crate::fix::{EditCommand, Fix};
use crate::locale::LocaleTag;
use crate::result::{CheckResult, Severity};
use crate::segment;
use crate::typography::{ProfileCache, TypographyProfile};

/// Superset of all the non-ASCII quote glyphs used across CLDR locales.
const QUOTE_SUPERSET: &str = "«»‘“”„「」’‚‹›『』";

/// Optional non-breaking-space-family character between a quote and the
/// quoted text (used by French-style guillemets).
const NBSP_CLASS: &str = r"[\x{00A0}\x{202F}\x{2060}\x{3000}]?";

// The outer-boundary class is deliberately ASCII-only: the inner side of a
// quote must touch a letter in any script, but the outer side counts any
// non-ASCII-word character (CJK text included) as a boundary.
const NON_WORD: &str = "[^0-9A-Za-z_]";

lazy_static! {
    // ASCII double quotes adjacent to a letter or replacement-parameter
    // brace, with a word boundary or string edge on the outside.
    static ref QUOTES_ASCII: Regex = Regex::new(
        r#"(^|[^0-9A-Za-z_])"\s?[\p{L}{]|[\p{L}}]\s?"([^0-9A-Za-z_]|$)"#
    )
    .unwrap();
    // ASCII single quotes; the letter class before the closing quote leaves
    // out `s` so plural possessives (my colleagues' files) don't classify
    // as quoting.
    static ref QUOTES_ASCII_ALT: Regex = Regex::new(
        r"(^|[^0-9A-Za-z_])'\s?[\p{L}{]|[a-rt-zA-RT-Z}]\s?'([^0-9A-Za-z_]|$)"
    )
    .unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceStyle {
    Ascii,
    AsciiAlt,
    Native,
    NativeAlt,
}

impl SourceStyle {
    fn index(self) -> usize {
        match self {
            SourceStyle::Ascii => 0,
            SourceStyle::AsciiAlt => 1,
            SourceStyle::Native => 2,
            SourceStyle::NativeAlt => 3,
        }
    }

    fn uses_alternate_quotes(self) -> bool {
        matches!(self, SourceStyle::AsciiAlt | SourceStyle::NativeAlt)
    }
}

/// All the compiled patterns for one target locale.
#[derive(Debug)]
struct QuoteScanner {
    src_native: Regex,
    src_native_alt: Regex,
    tgt_native: Regex,
    tgt_native_alt: Regex,
    tgt_all: Regex,
    tgt_all_alt: Regex,
    start_violation: [Regex; 4],
    end_violation: [Regex; 4],
    correct_start: char,
    correct_end: char,
    correct_start_alt: char,
    correct_end_alt: char,
}

impl QuoteScanner {
    fn new(
        source: &TypographyProfile,
        target: &TypographyProfile,
        mode: QuoteCheckMode,
    ) -> QuoteScanner {
        let (start_class, end_class, alt_start_class, alt_end_class) =
            if target.accepts_square_brackets {
                // Japanese accepts the corner brackets plus plain square
                // brackets, for both primary and alternate styles
                let start = "「[".to_string();
                let end = "」]".to_string();
                (start.clone(), end.clone(), start, end)
            } else {
                (
                    target.quote_start.to_string(),
                    target.quote_end.to_string(),
                    target.quote_start_alt.to_string(),
                    target.quote_end_alt.to_string(),
                )
            };

        let src_native = pair_pattern(
            &source.quote_start.to_string(),
            &source.quote_end.to_string(),
        );
        let src_native_alt = pair_pattern(
            &source.quote_start_alt.to_string(),
            &source.quote_end_alt.to_string(),
        );

        let tgt_native = pair_pattern(&start_class, &end_class);
        let tgt_native_alt = pair_pattern(&alt_start_class, &alt_end_class);
        let (tgt_all, tgt_all_alt) = match mode {
            QuoteCheckMode::LocaleOnly => (
                pair_pattern(&start_class, &end_class),
                pair_pattern(&alt_start_class, &alt_end_class),
            ),
            QuoteCheckMode::Standard => (
                pair_pattern(
                    &format!("{}{}\"", start_class, alt_start_class),
                    &format!("{}{}\"", end_class, alt_end_class),
                ),
                pair_pattern(&format!("{}'", alt_start_class), &format!("{}'", alt_end_class)),
            ),
        };

        // everything quote-like that is wrong for this locale, used to
        // locate the violations for highlighting and fixing
        let non_quote: String = QUOTE_SUPERSET
            .chars()
            .filter(|c| !start_class.contains(*c) && !end_class.contains(*c))
            .collect();
        let non_quote_alt: String = QUOTE_SUPERSET
            .chars()
            .filter(|c| !alt_start_class.contains(*c) && !alt_end_class.contains(*c))
            .collect();

        let without = |chars: &str, drop: char| -> String {
            chars.chars().filter(|&c| c != drop).collect()
        };
        // for Japanese, don't treat the counterpart of an accepted bracket
        // pair as a violation on the wrong side
        let (start_scan, end_scan, start_scan_alt, end_scan_alt) =
            if target.accepts_square_brackets {
                (
                    without(&non_quote, '』'),
                    without(&non_quote, '『'),
                    without(&non_quote_alt, '』'),
                    without(&non_quote_alt, '『'),
                )
            } else {
                (
                    non_quote.clone(),
                    non_quote.clone(),
                    non_quote_alt.clone(),
                    non_quote_alt,
                )
            };

        let start_violation = [
            start_violation_pattern(&format!("{}'", start_scan)),
            start_violation_pattern(&format!("{}\"", start_scan_alt)),
            start_violation_pattern(&format!("{}'\"", start_scan)),
            start_violation_pattern(&format!("{}'\"", start_scan_alt)),
        ];
        let end_violation = [
            end_violation_pattern(&format!("{}'", end_scan)),
            end_violation_pattern(&format!("{}\"", end_scan_alt)),
            end_violation_pattern(&format!("{}'\"", end_scan)),
            end_violation_pattern(&format!("{}'\"", end_scan_alt)),
        ];

        QuoteScanner {
            src_native,
            src_native_alt,
            tgt_native,
            tgt_native_alt,
            tgt_all,
            tgt_all_alt,
            start_violation,
            end_violation,
            correct_start: target.quote_start,
            correct_end: target.quote_end,
            correct_start_alt: target.quote_start_alt,
            correct_end_alt: target.quote_end_alt,
        }
    }

    /// Which quoting style the source uses, tested in priority order.
    fn classify_source(&self, source: &str) -> Option<SourceStyle> {
        if QUOTES_ASCII.is_match(source) {
            Some(SourceStyle::Ascii)
        } else if QUOTES_ASCII_ALT.is_match(source) {
            Some(SourceStyle::AsciiAlt)
        } else if self.src_native.is_match(source) {
            Some(SourceStyle::Native)
        } else if self.src_native_alt.is_match(source) {
            Some(SourceStyle::NativeAlt)
        } else {
            None
        }
    }

    /// The regex matching every target quote form acceptable for the style.
    fn target_acceptable(&self, style: SourceStyle) -> &Regex {
        match style {
            SourceStyle::Ascii => &self.tgt_all,
            SourceStyle::AsciiAlt => &self.tgt_all_alt,
            SourceStyle::Native => &self.tgt_native,
            SourceStyle::NativeAlt => &self.tgt_native_alt,
        }
    }

    /// The locale-correct replacement pair for the style.
    fn correct_quotes(&self, style: SourceStyle) -> (char, char) {
        if style.uses_alternate_quotes() {
            (self.correct_start_alt, self.correct_end_alt)
        } else {
            (self.correct_start, self.correct_end)
        }
    }
}

fn class_escape(chars: &str) -> String {
    chars
        .chars()
        .map(|c| match c {
            '\\' | '^' | ']' | '[' | '-' => format!("\\{}", c),
            _ => c.to_string(),
        })
        .collect()
}

/// A pattern matching an opening quote from `start_chars` before a letter,
/// or a closing quote from `end_chars` after one.
fn pair_pattern(start_chars: &str, end_chars: &str) -> Regex {
    let pattern = format!(
        r"(^|{nw})[{start}]\s?[\p{{L}}{{]|[\p{{L}}}}]\s?[{end}]({nw}|$)",
        nw = NON_WORD,
        start = class_escape(start_chars),
        end = class_escape(end_chars),
    );
    Regex::new(&pattern).expect("static quote pattern")
}

fn start_violation_pattern(chars: &str) -> Regex {
    let pattern = format!(
        r"(^|{nw})(([{chars}]){nbsp})([\p{{L}}{{])",
        nw = NON_WORD,
        chars = class_escape(chars),
        nbsp = NBSP_CLASS,
    );
    Regex::new(&pattern).expect("static quote pattern")
}

fn end_violation_pattern(chars: &str) -> Regex {
    let pattern = format!(
        r"([\p{{L}}}}])({nbsp}([{chars}]))({nw}|$)",
        nw = NON_WORD,
        chars = class_escape(chars),
        nbsp = NBSP_CLASS,
    );
    Regex::new(&pattern).expect("static quote pattern")
}

/// The quote style checker. Stateless per call; the only interior state is
/// the per-locale pattern and profile memoization.
#[derive(Debug)]
pub struct QuoteStyleCheck {
    config: QuoteStyleConfig,
    profiles: ProfileCache,
    scanners: RwLock<HashMap<String, Arc<QuoteScanner>>>,
}

impl QuoteStyleCheck {
    /// Create a checker with its own profile cache.
    pub fn new(config: QuoteStyleConfig) -> QuoteStyleCheck {
        QuoteStyleCheck::with_cache(config, ProfileCache::new())
    }

    /// Create a checker sharing an existing profile cache.
    pub fn with_cache(config: QuoteStyleConfig, profiles: ProfileCache) -> QuoteStyleCheck {
        QuoteStyleCheck {
            config,
            profiles,
            scanners: RwLock::new(HashMap::new()),
        }
    }

    /// Check one string pair. Returns `None` when there is nothing to
    /// check or nothing wrong.
    pub fn check(&self, input: &CheckInput) -> Option<CheckResult> {
        if input.source.is_empty() || input.target.is_empty() || input.locale.trim().is_empty() {
            return None;
        }
        let tag = LocaleTag::parse(input.locale);
        let profile = self.profiles.get(&tag);
        let scanner = self.scanner_for(&tag, &profile);

        let style = scanner.classify_source(input.source)?;
        if scanner.target_acceptable(style).is_match(input.target) {
            return None;
        }

        let (correct_start, correct_end) = scanner.correct_quotes(style);
        let mut example = format!("{}text{}", correct_start, correct_end);
        if profile.skip_quote_check {
            example.push_str(" (quotes are optional for this locale)");
        }
        let severity = match self.config.mode {
            QuoteCheckMode::LocaleOnly => Severity::Error,
            QuoteCheckMode::Standard => Severity::Warning,
        };

        let start_re = &scanner.start_violation[style.index()];
        let end_re = &scanner.end_violation[style.index()];

        if start_re.is_match(input.target) || end_re.is_match(input.target) {
            let highlighted = start_re.replace_all(input.target, "$1<e0>$2</e0>$4");
            let highlighted = end_re.replace_all(&highlighted, "$1<e1>$2</e1>$4");

            let mut commands = Vec::new();
            for caps in start_re.captures_iter(input.target) {
                if let Some(quote) = caps.get(3) {
                    if !segment::is_apostrophe(input.target, quote.start()) {
                        commands.push(EditCommand::replace(
                            char_index(input.target, quote.start()),
                            1,
                            correct_start.to_string(),
                        ));
                    }
                }
            }
            for caps in end_re.captures_iter(input.target) {
                if let Some(quote) = caps.get(3) {
                    if !segment::is_apostrophe(input.target, quote.start()) {
                        commands.push(EditCommand::replace(
                            char_index(input.target, quote.start()),
                            1,
                            correct_end.to_string(),
                        ));
                    }
                }
            }
            let fix = if commands.is_empty() {
                None
            } else {
                Fix::from_unordered(commands).ok()
            };

            Some(CheckResult {
                severity,
                rule_id: QUOTE_STYLE_RULE.to_string(),
                description: format!(
                    "Quote style for the locale {} should be {}",
                    input.locale, example
                ),
                highlight: format!("Target: {}", highlighted),
                source: input.source.to_string(),
                locale: input.locale.to_string(),
                key: input.key.to_string(),
                path_hint: input.path.to_string(),
                fix,
            })
        } else {
            // no quote characters at all in the target
            if profile.skip_quote_check {
                return None;
            }
            Some(CheckResult {
                severity,
                rule_id: QUOTE_STYLE_RULE.to_string(),
                description: format!(
                    "Quotes are missing in the target. Quote style for the locale {} should be {}",
                    input.locale, example
                ),
                highlight: format!("Target: {}<e0></e0>", input.target),
                source: input.source.to_string(),
                locale: input.locale.to_string(),
                key: input.key.to_string(),
                path_hint: input.path.to_string(),
                fix: None,
            })
        }
    }

    fn scanner_for(&self, tag: &LocaleTag, profile: &TypographyProfile) -> Arc<QuoteScanner> {
        let key = tag.spec();
        if let Ok(cache) = self.scanners.read() {
            if let Some(scanner) = cache.get(&key) {
                return Arc::clone(scanner);
            }
        }
        let source_profile = self.profiles.get(&self.config.source_locale);
        let scanner = Arc::new(QuoteScanner::new(&source_profile, profile, self.config.mode));
        if let Ok(mut cache) = self.scanners.write() {
            cache.insert(key, Arc::clone(&scanner));
        }
        scanner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckInput;

    fn check(source: &str, target: &str, locale: &str) -> Option<CheckResult> {
        QuoteStyleCheck::new(QuoteStyleConfig::default())
            .check(&CheckInput::new(source, target, locale))
    }

    #[test]
    fn test_correct_german_quotes_pass() {
        assert!(check(
            "This string contains \"quotes\" in it.",
            "Diese Zeichenfolge enthält „Anführungszeichen“.",
            "de-DE"
        )
        .is_none());
    }

    #[test]
    fn test_ascii_quotes_tolerated_in_standard_mode() {
        assert!(check(
            "This string contains \"quotes\" in it.",
            "Diese Zeichenfolge enthält \"Anführungszeichen\".",
            "de-DE"
        )
        .is_none());
    }

    #[test]
    fn test_wrong_single_quotes_flagged_for_german() {
        let result = check(
            "This string contains \"quotes\" in it.",
            "Diese Zeichenfolge enthält 'Anführungszeichen'.",
            "de-DE",
        )
        .unwrap();
        assert_eq!(result.severity, Severity::Warning);
        assert_eq!(
            result.description,
            "Quote style for the locale de-DE should be „text“"
        );
        assert_eq!(
            result.highlight,
            "Target: Diese Zeichenfolge enthält <e0>'</e0>Anführungszeichen<e1>'</e1>."
        );
        let fix = result.fix.unwrap();
        assert_eq!(fix.commands.len(), 2);
        assert_eq!(fix.commands[0].insert, "„");
        assert_eq!(fix.commands[1].insert, "“");
        assert_eq!(
            fix.apply("Diese Zeichenfolge enthält 'Anführungszeichen'."),
            "Diese Zeichenfolge enthält „Anführungszeichen“."
        );
    }

    #[test]
    fn test_no_quotes_in_source_passes() {
        assert!(check(
            "This string contains quotes in it.",
            "Diese Zeichenfolge enthält Anführungszeichen.",
            "de-DE"
        )
        .is_none());
    }

    #[test]
    fn test_missing_quotes_in_target_has_no_fix() {
        let result = check(
            "Showing {maxAmount} entries, \"{sourceName}\" has more.",
            "Affichant {maxAmount} entrées, {sourceName} en contient davantage.",
            "fr-FR",
        )
        .unwrap();
        assert_eq!(
            result.description,
            "Quotes are missing in the target. Quote style for the locale fr-FR should be «text»"
        );
        assert!(result.highlight.ends_with("<e0></e0>"));
        assert!(result.fix.is_none());
    }

    #[test]
    fn test_guillemets_with_replacement_params_pass() {
        assert!(check(
            "Showing {maxAmount} entries, \"{sourceName}\" has more.",
            "Affichant {maxAmount} entrées, « {sourceName} » en contient davantage.",
            "fr-FR"
        )
        .is_none());
    }

    #[test]
    fn test_apostrophes_not_flagged_as_quotes() {
        assert!(check(
            "This string contains \"quotes\" in it.",
            "L'expression contient de «guillemets». C'est tres bizarre !",
            "fr-FR"
        )
        .is_none());
    }

    #[test]
    fn test_wrong_quotes_flagged_despite_apostrophes() {
        let result = check(
            "This string contains \"quotes\" in it.",
            "L'expression contient de \u{201C}\u{00A0}quotations incorrectes\u{00A0}\u{201D}. C'est tres bizarre !",
            "fr-FR",
        )
        .unwrap();
        assert_eq!(
            result.description,
            "Quote style for the locale fr-FR should be «text»"
        );
        let fix = result.fix.unwrap();
        assert_eq!(fix.commands.len(), 2);
        assert_eq!(
            fix.apply("L'expression contient de \u{201C}\u{00A0}quotations incorrectes\u{00A0}\u{201D}. C'est tres bizarre !"),
            "L'expression contient de «\u{00A0}quotations incorrectes\u{00A0}». C'est tres bizarre !"
        );
    }

    #[test]
    fn test_possessive_apostrophe_in_source_is_not_quoting() {
        assert!(check(
            "Maintaining your enterprises' security policies.",
            "Die Sicherheitsrichtlinien Ihrer Unternehmen pflegen.",
            "de-DE"
        )
        .is_none());
    }

    #[test]
    fn test_alternate_quotes_map_to_alternate_style() {
        let result = check(
            "Please set your PIN code from 'Menu > PIN Code'.",
            "Stel asseblief u PIN-kode vanaf \u{201C}Kieslys > PIN-kode\u{201D}.",
            "af-ZA",
        )
        .unwrap();
        assert_eq!(
            result.description,
            "Quote style for the locale af-ZA should be ‘text’"
        );
        let fix = result.fix.unwrap();
        assert_eq!(
            fix.apply("Stel asseblief u PIN-kode vanaf \u{201C}Kieslys > PIN-kode\u{201D}."),
            "Stel asseblief u PIN-kode vanaf ‘Kieslys > PIN-kode’."
        );
    }

    #[test]
    fn test_japanese_accepts_square_brackets() {
        assert!(check(
            "Click \"My Documents\" to see more.",
            "[マイドキュメント]をクリックすると詳細が表示されます",
            "ja-JP"
        )
        .is_none());
        assert!(check(
            "Click \"My Documents\" to see more.",
            "「マイドキュメント」をクリックすると詳細が表示されます",
            "ja-JP"
        )
        .is_none());
    }

    #[test]
    fn test_japanese_flags_white_corner_brackets() {
        let result = check(
            "Click \"My Documents\" to see more.",
            "『マイドキュメント』をクリックすると詳細が表示されます",
            "ja-JP",
        )
        .unwrap();
        assert_eq!(
            result.highlight,
            "Target: <e0>『</e0>マイドキュメント<e1>』</e1>をクリックすると詳細が表示されます"
        );
        let fix = result.fix.unwrap();
        assert_eq!(
            fix.apply("『マイドキュメント』をクリックすると詳細が表示されます"),
            "「マイドキュメント」をクリックすると詳細が表示されます"
        );
    }

    #[test]
    fn test_quote_optional_locales_allow_absence() {
        assert!(check(
            "This string contains \"quotes\" in it.",
            "Questa stringa non contiene virgolette.",
            "it-IT"
        )
        .is_none());
        assert!(check(
            "This string contains \"quotes\" in it.",
            "Den här strängen innehåller inga citattecken.",
            "sv-SE"
        )
        .is_none());
    }

    #[test]
    fn test_quote_optional_locales_still_flag_wrong_style() {
        let result = check(
            "This string contains \"quotes\" in it.",
            "Questa stringa contiene „virgolette“.",
            "it-IT",
        )
        .unwrap();
        assert!(result.description.contains("quotes are optional"));
    }

    #[test]
    fn test_locale_only_mode_raises_severity() {
        let checker = QuoteStyleCheck::new(
            QuoteStyleConfig::new().with_mode(QuoteCheckMode::LocaleOnly),
        );
        let result = checker
            .check(&CheckInput::new(
                "This string contains \"quotes\" in it.",
                "Diese Zeichenfolge enthält \"Anführungszeichen\".",
                "de-DE",
            ))
            .unwrap();
        assert_eq!(result.severity, Severity::Error);
    }

    #[test]
    fn test_empty_inputs_return_none() {
        assert!(check("", "target", "de-DE").is_none());
        assert!(check("source", "", "de-DE").is_none());
        assert!(check("\"source\"", "\"target\"", "").is_none());
    }

    #[test]
    fn test_key_and_path_pass_through() {
        let checker = QuoteStyleCheck::new(QuoteStyleConfig::default());
        let result = checker
            .check(
                &CheckInput::new(
                    "This string contains \"quotes\" in it.",
                    "Diese Zeichenfolge enthält 'Anführungszeichen'.",
                    "de-DE",
                )
                .with_key("quote.test")
                .with_path("a/b/c.xliff"),
            )
            .unwrap();
        assert_eq!(result.key, "quote.test");
        assert_eq!(result.path_hint, "a/b/c.xliff");
    }
}
