//! Text segmentation utilities: trailing-quote stripping, quoted-span
//! extraction, last-sentence isolation, and apostrophe disambiguation.
//!
//! These are targeted heuristics, not a general segmentation pipeline; they
//! isolate the substring whose terminal punctuation actually matters when a
//! translation wraps its final clause in dialogue quotes or contains several
//! sentences.

use regex::Regex;

/// Superset of all quote characters recognized anywhere in this crate,
/// ASCII quotes included.
pub const ALL_QUOTE_CHARS: &str = "\"'«»‘“”„「」’‚‹›『』";

/// True for any character in [`ALL_QUOTE_CHARS`].
pub fn is_quote_char(c: char) -> bool {
    ALL_QUOTE_CHARS.contains(c)
}

/// Remove the trailing run of quotes and whitespace, exposing the last
/// "real" content character. Handles mixed runs like `. " ` and multiple
/// consecutive quote characters.
pub fn strip_trailing_quotes_and_whitespace(s: &str) -> &str {
    s.trim_end_matches(|c: char| c.is_whitespace() || is_quote_char(c))
}

/// The interior of the last quoted span in the string, if any.
///
/// Finds the last quote-like character, then searches backward for its
/// opening counterpart. Nested same-character quotes are not disambiguated:
/// two adjacent closing quotes are treated as an (empty) pair. This is a
/// known limitation, deliberate and pinned by a test.
pub fn last_quoted_string(s: &str) -> Option<&str> {
    let mut iter = s.char_indices().rev().filter(|(_, c)| is_quote_char(*c));
    let (close, _) = iter.next()?;
    let (open, open_char) = iter.next()?;
    Some(&s[open + open_char.len_utf8()..close])
}

/// True when the character starting at byte `index` is a single-quote glyph
/// used as an apostrophe (contraction, possessive, elision, glottal stop):
/// a letter must be directly adjacent on both sides. Locale-independent by
/// design so it covers English contractions, Romance elisions, and
/// Polynesian/Celtic glottal marks alike.
pub fn is_apostrophe(s: &str, index: usize) -> bool {
    let Some(c) = s[index..].chars().next() else {
        return false;
    };
    if !matches!(c, '\'' | '’' | '‘') {
        return false;
    }
    let before = s[..index].chars().next_back();
    let after = s[index + c.len_utf8()..].chars().next();
    matches!(before, Some(b) if b.is_alphabetic()) && matches!(after, Some(a) if a.is_alphabetic())
}

/// Non-overlapping scan of `text`, yielding each match with its starting
/// byte offset as an explicitly restartable sequence.
pub fn scan<'t>(re: &Regex, text: &'t str) -> impl Iterator<Item = (&'t str, usize)> {
    re.find_iter(text).map(|m| (m.as_str(), m.start()))
}

/// Splits out the last sentence of a string using a locale-specific set of
/// sentence-ending characters. Colons are excluded from the set so a colon
/// mid-sentence never starts a new segment.
#[derive(Debug)]
pub struct SentenceSplitter {
    re: Regex,
}

impl SentenceSplitter {
    /// Build a splitter from the locale's sentence-ending characters
    /// (colon already excluded by the caller).
    pub fn new(ending_chars: &str) -> SentenceSplitter {
        let class: String = ending_chars.chars().map(escape_for_class).collect();
        // the last run of non-ending characters, plus its terminal mark and
        // any ASCII word characters trailing it
        let re = Regex::new(&format!(r"[^{}]+\p{{P}}?[0-9A-Za-z_]*$", class))
            .unwrap_or_else(|_| Regex::new(r"[^.!?…]+\p{P}?[0-9A-Za-z_]*$").unwrap());
        SentenceSplitter { re }
    }

    /// The final sentence of `content`, terminal punctuation included, with
    /// any wrapping quotes peeled off. Returns the whole (trimmed) string
    /// when no sentence boundary is found.
    pub fn last_sentence<'a>(&self, content: &'a str) -> &'a str {
        let trimmed = content.trim();
        let Some(found) = self.re.find(trimmed) else {
            return trimmed;
        };
        let sentence = found.as_str().trim();
        let Some(first) = sentence.chars().next() else {
            return sentence;
        };
        let Some((last_idx, last)) = sentence.char_indices().next_back() else {
            return sentence;
        };
        if is_quote_char(last) && sentence.chars().count() > 1 {
            // ends in a quote: prefer the interior of the final quoted span
            if let Some((open_idx, open)) = sentence[..last_idx]
                .char_indices()
                .rev()
                .find(|(_, c)| is_quote_char(*c))
            {
                return &sentence[open_idx + open.len_utf8()..last_idx];
            }
        }
        if is_quote_char(first) && is_quote_char(last) && sentence.chars().count() > 1 {
            return &sentence[first.len_utf8()..last_idx];
        }
        sentence
    }
}

/// The comparable tail of a string: the interior of its final quoted span
/// when one exists (dialogue quotes wrap the punctuation that matters),
/// otherwise the last sentence of the content.
pub fn last_sentence<'a>(s: &'a str, splitter: &SentenceSplitter) -> &'a str {
    let trimmed = s.trim();
    match last_quoted_string(trimmed) {
        Some(quoted) => quoted,
        None => splitter.last_sentence(trimmed),
    }
}

fn escape_for_class(c: char) -> String {
    match c {
        '\\' | '^' | ']' | '[' | '-' => format!("\\{}", c),
        _ => c.to_string(),
    }
}
