//! The checker entry points and the types they share.

pub mod quote_style;
pub mod sentence_ending;

use crate::result::CheckResult;
use crate::typography::PunctuationKind;

pub use quote_style::QuoteStyleCheck;
pub use sentence_ending::SentenceEndingCheck;

/// Rule identifier of the quote style checker.
pub const QUOTE_STYLE_RULE: &str = "resource-quote-style";

/// Rule identifier of the sentence-ending checker.
pub const SENTENCE_ENDING_RULE: &str = "resource-sentence-ending";

/// One string pair to check, plus pass-through reporting context.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckInput<'a> {
    /// The source-language text.
    pub source: &'a str,
    /// The translated text.
    pub target: &'a str,
    /// The target locale spec, e.g. `ja-JP`.
    pub locale: &'a str,
    /// Resource key, passed through verbatim to the result.
    pub key: &'a str,
    /// Path hint, passed through verbatim to the result.
    pub path: &'a str,
}

impl<'a> CheckInput<'a> {
    pub fn new(source: &'a str, target: &'a str, locale: &'a str) -> CheckInput<'a> {
        CheckInput {
            source,
            target,
            locale,
            key: "",
            path: "",
        }
    }

    pub fn with_key(mut self, key: &'a str) -> CheckInput<'a> {
        self.key = key;
        self
    }

    pub fn with_path(mut self, path: &'a str) -> CheckInput<'a> {
        self.path = path;
        self
    }
}

/// Result of scanning a string's tail for terminal punctuation. `kind` is
/// `None` when the mark is not one the target locale expects for any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationMatch {
    pub kind: Option<PunctuationKind>,
    pub text: String,
}

/// Check the quote style of one string pair with default configuration.
pub fn check_quote_style(source: &str, target: &str, locale: &str) -> Option<CheckResult> {
    QuoteStyleCheck::new(Default::default()).check(&CheckInput::new(source, target, locale))
}

/// Check the sentence-ending punctuation of one string pair with default
/// configuration.
pub fn check_sentence_ending(source: &str, target: &str, locale: &str) -> Option<CheckResult> {
    SentenceEndingCheck::new(Default::default()).check(&CheckInput::new(source, target, locale))
}

/// `U+XXXX` notation for a character.
pub(crate) fn unicode_code(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

/// Space-separated `U+XXXX` notation for every character in the string.
pub(crate) fn unicode_codes(s: &str) -> String {
    s.chars().map(unicode_code).collect::<Vec<_>>().join(" ")
}

/// Char (codepoint) index of a byte offset into `s`.
pub(crate) fn char_index(s: &str, byte_offset: usize) -> usize {
    s[..byte_offset].chars().count()
}
