#![forbid(unsafe_code)]
//! Locale-aware punctuation and quote style linting for translated
//! resource strings.
//!
//! Given a source string, its translation, and the target locale, the two
//! checkers decide whether quotation marks and sentence-ending punctuation
//! follow the target locale's typographic conventions, and compute minimal,
//! non-destructive text edits to correct violations.
//!
//! # Quick Start
//!
//! ```rust
//! use loclint::{check_quote_style, check_sentence_ending};
//!
//! // Wrong sentence-ending mark for Japanese: the fix replaces the ASCII
//! // period with an ideographic full stop.
//! let result = check_sentence_ending("This is a sentence.", "これは文です.", "ja-JP").unwrap();
//! let fix = result.fix.unwrap();
//! assert_eq!(fix.apply("これは文です."), "これは文です。");
//!
//! // Correct German quotes pass.
//! assert!(check_quote_style(
//!     "This string contains \"quotes\" in it.",
//!     "Diese Zeichenfolge enthält „Anführungszeichen“.",
//!     "de-DE"
//! )
//! .is_none());
//! ```
//!
//! # Components
//!
//! - [`typography`]: the locale typography table — quote pairs,
//!   sentence-ending marks, spacing rules, and per-locale special behaviors,
//!   centralized so the checkers contain no locale literals of their own
//! - [`checks`]: the quote style and sentence-ending checkers
//! - [`matcher`]: locale distance scoring and likely-locale completion
//! - [`segment`]: the text segmentation heuristics shared by the checkers
//! - [`fix`]: edit commands and the batch-apply contract consumed by an
//!   external fix engine
//!
//! All checker operations are pure, synchronous functions safe to call from
//! multiple threads; the only shared state is per-checker memoization of
//! locale profiles and compiled patterns.

pub mod checks;
pub mod config;
pub mod error;
pub mod fix;
pub mod locale;
mod matchdata;
pub mod matcher;
pub mod result;
pub mod segment;
pub mod typography;

// Re-export most used types for easy consumption
pub use crate::{
    checks::{
        CheckInput, PunctuationMatch, QuoteStyleCheck, SentenceEndingCheck, check_quote_style,
        check_sentence_ending,
    },
    config::{QuoteCheckMode, QuoteStyleConfig, SentenceEndingConfig},
    error::Error,
    fix::{EditCommand, Fix},
    locale::LocaleTag,
    matcher::LocaleMatcher,
    result::{CheckResult, Severity},
    typography::{ProfileCache, PunctuationKind, TypographyProfile},
};
