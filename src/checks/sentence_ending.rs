//! Checks that the target string's sentence-ending punctuation matches the
//! target locale's conventions and the source string's intent.
//!
//! The comparison works on the "comparable tail" of both strings: the last
//! quoted span when the source ends in a quote (so dialogue punctuation
//! inside quotes is compared correctly), otherwise the last sentence. All
//! fix offsets are codepoint positions into the untrimmed original target;
//! trimming and quote stripping are used for comparison only.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use crate::checks::{
    CheckInput, PunctuationMatch, SENTENCE_ENDING_RULE, char_index, unicode_code, unicode_codes,
};
use crate::config::SentenceEndingConfig;
use crate::fix::{EditCommand, Fix};
use crate::locale::LocaleTag;
use crate::result::{CheckResult, Severity};
use crate::segment::{self, SentenceSplitter};
use crate::typography::{self, ProfileCache, PunctuationKind, TypographyProfile};

const REGULAR_SPACE: char = ' ';
const NARROW_NBSP: char = '\u{202F}';
const NBSP: char = '\u{00A0}';

/// Characters that mark a single-word source as a sentence anyway.
const SENTENCE_MARKS: [char; 8] = ['.', '?', '!', '。', '？', '！', '…', ':'];

/// The sentence-ending punctuation checker. Stateless per call; interior
/// state is limited to per-locale memoization.
#[derive(Debug)]
pub struct SentenceEndingCheck {
    config: SentenceEndingConfig,
    profiles: ProfileCache,
    /// Every single-character mark from the built-in tables plus the
    /// configuration overrides, for tail classification.
    punctuation_chars: BTreeSet<char>,
    splitters: RwLock<HashMap<String, Arc<SentenceSplitter>>>,
}

impl SentenceEndingCheck {
    /// Create a checker with its own profile cache.
    pub fn new(config: SentenceEndingConfig) -> SentenceEndingCheck {
        SentenceEndingCheck::with_cache(config, ProfileCache::new())
    }

    /// Create a checker sharing an existing profile cache.
    pub fn with_cache(config: SentenceEndingConfig, profiles: ProfileCache) -> SentenceEndingCheck {
        let mut punctuation_chars = typography::builtin_punctuation_chars().clone();
        punctuation_chars.extend(config.override_punctuation_chars());
        SentenceEndingCheck {
            config,
            profiles,
            punctuation_chars,
            splitters: RwLock::new(HashMap::new()),
        }
    }

    /// Check one string pair. Returns `None` when there is nothing to
    /// check or nothing wrong.
    pub fn check(&self, input: &CheckInput) -> Option<CheckResult> {
        let source = input.source;
        let target = input.target;
        if source.trim().is_empty() || target.trim().is_empty() || input.locale.trim().is_empty() {
            return None;
        }
        let target_tag = LocaleTag::parse(input.locale);
        let target_language = target_tag.language()?.to_string();
        let source_language = self
            .config
            .source_locale
            .language()
            .unwrap_or("en")
            .to_string();

        // short strings are labels and abbreviations, not sentences
        if source.chars().count() < self.config.minimum_length {
            return None;
        }
        // identifier-like strings are not sentences either
        if !source.contains(' ') {
            let last = source.trim().chars().next_back();
            if !matches!(last, Some(c) if SENTENCE_MARKS.contains(&c)) {
                return None;
            }
        }
        if let Some(exceptions) = self.config.exceptions_for(&target_language) {
            let lowered = source.trim().to_lowercase();
            if exceptions.iter().any(|e| e.trim().to_lowercase() == lowered) {
                return None;
            }
        }

        let profile = self.profiles.get(&target_tag);
        let source_ending = self.ending_punctuation(source, &source_language);

        let source_ends_with_quote = matches!(
            source.trim().chars().next_back(),
            Some(c) if segment::is_quote_char(c)
        );
        let splitter = self.splitter_for(&target_language);
        let last_sentence: &str = if source_ends_with_quote {
            segment::last_quoted_string(target).unwrap_or_else(|| target.trim())
        } else {
            splitter.last_sentence(target)
        };
        let target_ending = self.ending_punctuation(last_sentence, &target_language);

        match (source_ending, target_ending) {
            (None, Some(found)) => self.report_removal(input, target, last_sentence, &found),
            (Some(source_end), None) => {
                if profile.optional_punctuation {
                    return None;
                }
                let kind = source_end.kind?;
                self.report_missing(input, target, last_sentence, kind, &target_language, &profile)
            }
            (Some(source_end), Some(found)) => {
                let kind = source_end.kind?;
                let expected = self.config.punctuation_for(&target_language, kind);

                if profile.inverted_punctuation
                    && matches!(kind, PunctuationKind::Question | PunctuationKind::Exclamation)
                {
                    let (correct, clause_offset) = has_inverted_mark(last_sentence, kind);
                    if !correct {
                        return self.report_missing_inverted(
                            input,
                            target,
                            last_sentence,
                            kind,
                            clause_offset,
                        );
                    }
                }

                if found.text == expected {
                    if profile.requires_nbsp
                        && matches!(
                            kind,
                            PunctuationKind::Question
                                | PunctuationKind::Exclamation
                                | PunctuationKind::Colon
                        )
                    {
                        return self.check_spacing(input, target, last_sentence, &found.text);
                    }
                    return None;
                }

                self.report_wrong_mark(input, target, last_sentence, &found.text, &expected, &profile)
            }
            (None, None) => None,
        }
    }

    /// Scan the tail of a string for terminal punctuation, ignoring any
    /// trailing quotes and whitespace. The kind is classified against the
    /// expected marks for `language`; an unrecognized mark yields
    /// `kind: None`.
    fn ending_punctuation(&self, s: &str, language: &str) -> Option<PunctuationMatch> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        let stripped = segment::strip_trailing_quotes_and_whitespace(trimmed);
        if stripped.is_empty() {
            return None;
        }

        // ellipsis forms are checked before single-character marks
        if stripped.ends_with("...") {
            return Some(PunctuationMatch {
                kind: Some(PunctuationKind::Ellipsis),
                text: "...".to_string(),
            });
        }
        if stripped.ends_with('…') {
            return Some(PunctuationMatch {
                kind: Some(PunctuationKind::Ellipsis),
                text: "…".to_string(),
            });
        }

        let last = stripped.chars().next_back()?;
        if !self.punctuation_chars.contains(&last) {
            return None;
        }
        let text = last.to_string();
        let kind = [
            PunctuationKind::Question,
            PunctuationKind::Exclamation,
            PunctuationKind::Colon,
            PunctuationKind::Period,
        ]
        .into_iter()
        .find(|&kind| self.config.punctuation_for(language, kind) == text);
        Some(PunctuationMatch { kind, text })
    }

    /// Source has no terminal punctuation but the target does: flag the
    /// extraneous mark for removal.
    fn report_removal(
        &self,
        input: &CheckInput,
        target: &str,
        last_sentence: &str,
        found: &PunctuationMatch,
    ) -> Option<CheckResult> {
        let codes = unicode_codes(&found.text);
        let position = find_tail_position(target, last_sentence, &found.text);
        let (highlight, fix) = match position {
            Some((pos, len)) => {
                let (before, span, after) = split_chars(target, pos, len);
                (
                    format!("{}<e0>{} ({})</e0>{}", before, span, codes, after),
                    Fix::new(vec![EditCommand::delete(pos, len)]).ok(),
                )
            }
            None => (format!("{}<e0/>", target), None),
        };
        Some(self.result(
            input,
            format!(
                "Sentence ending should be \"\" for {} locale instead of \"{}\" ({})",
                input.locale, found.text, codes
            ),
            highlight,
            fix,
        ))
    }

    /// Source has punctuation but the target has none: insert the expected
    /// mark (with its thin no-break space for French-spacing locales).
    fn report_missing(
        &self,
        input: &CheckInput,
        target: &str,
        last_sentence: &str,
        kind: PunctuationKind,
        target_language: &str,
        profile: &TypographyProfile,
    ) -> Option<CheckResult> {
        let expected = self.config.punctuation_for(target_language, kind);
        let insert_text = if profile.requires_nbsp
            && matches!(
                kind,
                PunctuationKind::Question | PunctuationKind::Exclamation | PunctuationKind::Colon
            ) {
            format!("{}{}", NARROW_NBSP, expected)
        } else {
            expected
        };
        let codes = unicode_codes(&insert_text);
        let fix = Fix::new(vec![EditCommand::insert(
            target.chars().count(),
            insert_text.clone(),
        )])
        .ok();
        Some(self.result(
            input,
            format!(
                "Sentence ending should be \"{}\" ({}) for {} locale instead of \"\"",
                insert_text, codes, input.locale
            ),
            format!("{}<e0/>", last_sentence),
            fix,
        ))
    }

    /// Spanish target is missing the leading inverted mark for a question
    /// or exclamation.
    fn report_missing_inverted(
        &self,
        input: &CheckInput,
        target: &str,
        last_sentence: &str,
        kind: PunctuationKind,
        clause_offset: usize,
    ) -> Option<CheckResult> {
        let inverted = if kind == PunctuationKind::Question {
            '¿'
        } else {
            '¡'
        };
        let sentence_start = target
            .rfind(last_sentence)
            .map(|byte| char_index(target, byte))
            .unwrap_or(0);
        let position = sentence_start + clause_offset;
        let (before, _, after) = split_chars(target, position, 0);
        let fix = Fix::new(vec![EditCommand::insert(position, inverted.to_string())]).ok();
        Some(self.result(
            input,
            format!(
                "Spanish {} should start with \"{}\" ({}) for {} locale",
                kind.name(),
                inverted,
                unicode_code(inverted),
                input.locale
            ),
            format!("{}<e0/>{}", before, after),
            fix,
        ))
    }

    /// The mark matches but the locale requires a thin no-break space
    /// before it.
    fn check_spacing(
        &self,
        input: &CheckInput,
        target: &str,
        last_sentence: &str,
        mark: &str,
    ) -> Option<CheckResult> {
        let (punct_pos, _) = find_tail_position(target, last_sentence, mark)?;
        let mark_codes = unicode_codes(mark);
        let space = if punct_pos > 0 {
            char_at(target, punct_pos - 1)
        } else {
            None
        };
        match space {
            Some(NARROW_NBSP) => None,
            Some(c @ (REGULAR_SPACE | NBSP)) => {
                let space_code = unicode_code(c);
                let (before, _, after) = split_chars(target, punct_pos - 1, 1);
                let fix =
                    Fix::new(vec![EditCommand::replace(punct_pos - 1, 1, NARROW_NBSP.to_string())])
                        .ok();
                Some(self.result(
                    input,
                    format!(
                        "Sentence ending should be \"{}{}\" (U+202F {}) for {} locale instead of \"{}{}\" ({} {})",
                        NARROW_NBSP, mark, mark_codes, input.locale, c, mark, space_code, mark_codes
                    ),
                    format!("{}<e0>{} ({})</e0>{}", before, c, space_code, after),
                    fix,
                ))
            }
            _ => {
                // no space at all before the mark: insert one
                let (before, _, after) = split_chars(target, punct_pos, 0);
                let fix = Fix::new(vec![EditCommand::insert(punct_pos, NARROW_NBSP.to_string())])
                    .ok();
                Some(self.result(
                    input,
                    format!(
                        "Sentence ending should be \"{}{}\" (U+202F {}) for {} locale instead of \"{}\" ({})",
                        NARROW_NBSP, mark, mark_codes, input.locale, mark, mark_codes
                    ),
                    format!("{}<e0/>{}", before, after),
                    fix,
                ))
            }
        }
    }

    /// The target ends in the wrong mark; for French-spacing locales the
    /// preceding space is corrected in the same fix, space command first.
    fn report_wrong_mark(
        &self,
        input: &CheckInput,
        target: &str,
        last_sentence: &str,
        found: &str,
        expected: &str,
        profile: &TypographyProfile,
    ) -> Option<CheckResult> {
        let found_codes = unicode_codes(found);
        let Some((punct_pos, punct_len)) = find_tail_position(target, last_sentence, found) else {
            return Some(self.result(
                input,
                format!(
                    "Sentence ending should be \"{}\" ({}) for {} locale instead of \"{}\" ({})",
                    expected,
                    unicode_codes(expected),
                    input.locale,
                    found,
                    found_codes
                ),
                format!("{}<e0/>", target),
                None,
            ));
        };

        let mut commands = Vec::new();
        let mut span_start = punct_pos;
        let mut span_len = punct_len;
        let mut expected_text = expected.to_string();

        if profile.requires_nbsp {
            let needs_nbsp = matches!(expected, "?" | "!" | ":");
            let space = if punct_pos > 0 {
                char_at(target, punct_pos - 1)
            } else {
                None
            };
            match space {
                Some(REGULAR_SPACE | NBSP) => {
                    if needs_nbsp {
                        commands.push(EditCommand::replace(
                            punct_pos - 1,
                            1,
                            NARROW_NBSP.to_string(),
                        ));
                    } else {
                        commands.push(EditCommand::delete(punct_pos - 1, 1));
                    }
                    span_start = punct_pos - 1;
                    span_len += 1;
                }
                Some(NARROW_NBSP) => {
                    if !needs_nbsp {
                        commands.push(EditCommand::delete(punct_pos - 1, 1));
                        span_start = punct_pos - 1;
                        span_len += 1;
                    }
                }
                _ => {
                    if needs_nbsp {
                        commands.push(EditCommand::insert(punct_pos, NARROW_NBSP.to_string()));
                    }
                }
            }
            if needs_nbsp {
                expected_text = format!("{}{}", NARROW_NBSP, expected);
            }
        }
        commands.push(EditCommand::replace(punct_pos, punct_len, expected.to_string()));
        let fix = Fix::from_unordered(commands).ok();

        let (before, span, after) = split_chars(target, span_start, span_len);
        let span_codes = unicode_codes(&span);
        Some(self.result(
            input,
            format!(
                "Sentence ending should be \"{}\" ({}) for {} locale instead of \"{}\" ({})",
                expected_text,
                unicode_codes(&expected_text),
                input.locale,
                span,
                span_codes
            ),
            format!("{}<e0>{} ({})</e0>{}", before, span, span_codes, after),
            fix,
        ))
    }

    fn result(
        &self,
        input: &CheckInput,
        description: String,
        highlight: String,
        fix: Option<Fix>,
    ) -> CheckResult {
        CheckResult {
            severity: Severity::Warning,
            rule_id: SENTENCE_ENDING_RULE.to_string(),
            description,
            highlight,
            source: input.source.to_string(),
            locale: input.locale.to_string(),
            key: input.key.to_string(),
            path_hint: input.path.to_string(),
            fix,
        }
    }

    fn splitter_for(&self, language: &str) -> Arc<SentenceSplitter> {
        if let Ok(cache) = self.splitters.read() {
            if let Some(splitter) = cache.get(language) {
                return Arc::clone(splitter);
            }
        }
        let splitter = Arc::new(SentenceSplitter::new(
            &self.config.enders_without_colon(language),
        ));
        if let Ok(mut cache) = self.splitters.write() {
            cache.insert(language.to_string(), Arc::clone(&splitter));
        }
        splitter
    }
}

/// Char position and length of the tail punctuation of `last_sentence`
/// within the untrimmed `target`.
fn find_tail_position(target: &str, last_sentence: &str, punct: &str) -> Option<(usize, usize)> {
    let trimmed = last_sentence.trim_end();
    if !trimmed.ends_with(punct) {
        return None;
    }
    let sentence_byte = target.rfind(last_sentence)?;
    let punct_chars = punct.chars().count();
    let offset_in_sentence = trimmed.chars().count() - punct_chars;
    Some((char_index(target, sentence_byte) + offset_in_sentence, punct_chars))
}

/// Whether the clause already carries the inverted mark for the kind,
/// scanning backward from the end; also returns the codepoint offset of the
/// clause start (past any leading quotes and whitespace).
fn has_inverted_mark(last_sentence: &str, kind: PunctuationKind) -> (bool, usize) {
    let mut clause = last_sentence;
    let mut offset = 0;
    while let Some(c) = clause.chars().next() {
        if segment::is_quote_char(c) || c.is_whitespace() {
            clause = &clause[c.len_utf8()..];
            offset += 1;
        } else {
            break;
        }
    }

    let expected = if kind == PunctuationKind::Question {
        '¿'
    } else {
        '¡'
    };
    let chars: Vec<char> = clause.chars().collect();
    for (i, &c) in chars.iter().enumerate().rev() {
        if c == expected {
            return (true, offset);
        }
        if matches!(c, '.' | '!' | '?' | '。' | '！' | '？') && i != chars.len() - 1 {
            // hit the end of an earlier sentence without finding the mark
            return (false, offset);
        }
    }
    (false, offset)
}

fn char_at(s: &str, position: usize) -> Option<char> {
    s.chars().nth(position)
}

fn split_chars(s: &str, start: usize, len: usize) -> (String, String, String) {
    let chars: Vec<char> = s.chars().collect();
    let start = start.min(chars.len());
    let stop = (start + len).min(chars.len());
    (
        chars[..start].iter().collect(),
        chars[start..stop].iter().collect(),
        chars[stop..].iter().collect(),
    )
}
