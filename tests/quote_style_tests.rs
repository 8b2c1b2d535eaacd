use loclint::{
    CheckInput, CheckResult, QuoteCheckMode, QuoteStyleCheck, QuoteStyleConfig, Severity,
    check_quote_style,
};

fn check(source: &str, target: &str, locale: &str) -> Option<CheckResult> {
    check_quote_style(source, target, locale)
}

#[test]
fn german_ascii_single_quotes_flagged_with_fix() {
    let target = "Diese Zeichenfolge enthält 'Anführungszeichen'.";
    let result = check("This string contains \"quotes\" in it.", target, "de-DE").unwrap();
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
    // offset round-trip: each command deletes exactly the offending quote
    let chars: Vec<char> = target.chars().collect();
    for cmd in &fix.commands {
        assert_eq!(chars[cmd.position], '\'');
        assert_eq!(cmd.delete_count, 1);
    }
    assert_eq!(fix.apply(target), "Diese Zeichenfolge enthält „Anführungszeichen“.");
}

#[test]
fn german_correct_native_quotes_pass() {
    assert!(check(
        "This string contains \"quotes\" in it.",
        "Diese Zeichenfolge enthält „Anführungszeichen“.",
        "de-DE"
    )
    .is_none());
    // alternate native quotes for an alternate-quoted source
    assert!(check(
        "This string contains ‘quotes’ in it.",
        "Diese Zeichenfolge enthält ‚Anführungszeichen‘.",
        "de-DE"
    )
    .is_none());
}

#[test]
fn ascii_target_quotes_tolerated_by_default() {
    assert!(check(
        "This string contains \"quotes\" in it.",
        "Diese Zeichenfolge enthält \"Anführungszeichen\".",
        "de-DE"
    )
    .is_none());
}

#[test]
fn locale_only_mode_rejects_ascii_and_reports_error() {
    let checker =
        QuoteStyleCheck::new(QuoteStyleConfig::new().with_mode(QuoteCheckMode::LocaleOnly));
    // native-quoted source, ASCII target: the ASCII quotes are located and
    // replaced
    let target = "Diese Zeichenfolge enthält \"Anführungszeichen\".";
    let result = checker
        .check(&CheckInput::new(
            "This string contains “quotes” in it.",
            target,
            "de-DE",
        ))
        .unwrap();
    assert_eq!(result.severity, Severity::Error);
    assert_eq!(
        result.highlight,
        "Target: Diese Zeichenfolge enthält <e0>\"</e0>Anführungszeichen<e1>\"</e1>."
    );
    let fix = result.fix.unwrap();
    assert_eq!(fix.apply(target), "Diese Zeichenfolge enthält „Anführungszeichen“.");
}

#[test]
fn native_source_quotes_require_native_target_quotes() {
    let result = check(
        "This string contains “quotes” in it.",
        "Diese Zeichenfolge enthält 'Anführungszeichen'.",
        "de-DE",
    )
    .unwrap();
    assert_eq!(
        result.description,
        "Quote style for the locale de-DE should be „text“"
    );
}

#[test]
fn russian_guillemets_pass_and_curly_quotes_flagged() {
    assert!(check(
        "This string contains \"quotes\" in it.",
        "Эта строка содержит «кавычки».",
        "ru-RU"
    )
    .is_none());
    let target = "Эта строка содержит “кавычки”.";
    let result = check("This string contains \"quotes\" in it.", target, "ru-RU").unwrap();
    let fix = result.fix.unwrap();
    assert_eq!(fix.apply(target), "Эта строка содержит «кавычки».");
}

#[test]
fn japanese_corner_brackets_and_square_brackets_pass() {
    for target in [
        "「マイドキュメント」をクリックすると詳細が表示されます",
        "[マイドキュメント]をクリックすると詳細が表示されます",
    ] {
        assert!(
            check("Click \"My Documents\" to see more.", target, "ja-JP").is_none(),
            "{target} should pass"
        );
    }
}

#[test]
fn japanese_white_corner_brackets_flagged() {
    let target = "『マイドキュメント』をクリックすると詳細が表示されます";
    let result = check("Click \"My Documents\" to see more.", target, "ja-JP").unwrap();
    assert_eq!(
        result.highlight,
        "Target: <e0>『</e0>マイドキュメント<e1>』</e1>をクリックすると詳細が表示されます"
    );
    let fix = result.fix.unwrap();
    assert_eq!(
        fix.apply(target),
        "「マイドキュメント」をクリックすると詳細が表示されます"
    );
}

#[test]
fn afrikaans_alternate_style_flagged_with_fix() {
    let target = "Stel asseblief u PIN-kode vanaf “Kieslys > PIN-kode”.";
    let result = check(
        "Please set your PIN code from 'Menu > PIN Code'.",
        target,
        "af-ZA",
    )
    .unwrap();
    assert_eq!(
        result.description,
        "Quote style for the locale af-ZA should be ‘text’"
    );
    assert_eq!(
        result.highlight,
        "Target: Stel asseblief u PIN-kode vanaf <e0>“</e0>Kieslys > PIN-kode<e1>”</e1>."
    );
    let fix = result.fix.unwrap();
    assert_eq!(
        fix.apply(target),
        "Stel asseblief u PIN-kode vanaf ‘Kieslys > PIN-kode’."
    );
}

#[test]
fn french_guillemets_with_spacing_pass() {
    for target in [
        "Le string contient de « guillemets ».",
        "Le string contient de «guillemets».",
        "Affichant {maxAmount} entrées, « {sourceName} » en contient davantage.",
    ] {
        assert!(
            check("This string contains \"quotes\" in it.", target, "fr-FR").is_none(),
            "{target} should pass"
        );
    }
}

#[test]
fn french_apostrophes_are_not_quotes() {
    assert!(check(
        "This string contains \"quotes\" in it.",
        "L'expression contient de «guillemets». C'est tres bizarre !",
        "fr-FR"
    )
    .is_none());
    // no quotes in source, apostrophes in target
    assert!(check(
        "This string does not contain quotes in it.",
        "L'expression ne contient pas de guillemets.",
        "fr-FR"
    )
    .is_none());
}

#[test]
fn french_wrong_quotes_fixed_without_touching_apostrophes() {
    let target =
        "L'expression contient de \u{201C}\u{00A0}quotations incorrectes\u{00A0}\u{201D}. C'est tres bizarre !";
    let result = check("This string contains \"quotes\" in it.", target, "fr-FR").unwrap();
    assert_eq!(
        result.description,
        "Quote style for the locale fr-FR should be «text»"
    );
    assert_eq!(
        result.highlight,
        "Target: L'expression contient de <e0>\u{201C}\u{00A0}</e0>quotations incorrectes<e1>\u{00A0}\u{201D}</e1>. C'est tres bizarre !"
    );
    let fix = result.fix.unwrap();
    assert_eq!(
        fix.apply(target),
        "L'expression contient de «\u{00A0}quotations incorrectes\u{00A0}». C'est tres bizarre !"
    );
}

#[test]
fn missing_quotes_reported_without_fix() {
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
    assert_eq!(
        result.highlight,
        "Target: Affichant {maxAmount} entrées, {sourceName} en contient davantage.<e0></e0>"
    );
    assert!(result.fix.is_none());
}

#[test]
fn possessives_and_contractions_do_not_classify_as_quoting() {
    assert!(check(
        "Maintaining your enterprises' security policies. Let's continue.",
        "Die Sicherheitsrichtlinien Ihrer Unternehmen pflegen.",
        "de-DE"
    )
    .is_none());
}

#[test]
fn quote_optional_locales() {
    // Swedish and Italian may drop quotes entirely
    assert!(check(
        "This string contains \"quotes\" in it.",
        "Den här strängen innehåller inga citattecken.",
        "sv-SE"
    )
    .is_none());
    assert!(check(
        "This string contains \"quotes\" in it.",
        "Questa stringa non contiene virgolette.",
        "it-IT"
    )
    .is_none());
    // correct or ASCII quotes also pass
    assert!(check(
        "This string contains \"quotes\" in it.",
        "Questa stringa contiene «virgolette».",
        "it-IT"
    )
    .is_none());
    assert!(check(
        "This string contains \"quotes\" in it.",
        "Questa stringa contiene \"virgolette\".",
        "it-IT"
    )
    .is_none());
    // but recognizably wrong glyphs are still flagged
    let result = check(
        "This string contains \"quotes\" in it.",
        "Questa stringa contiene „virgolette“.",
        "it-IT",
    )
    .unwrap();
    assert!(result.description.contains("quotes are optional for this locale"));
}

#[test]
fn no_quotes_in_source_means_nothing_to_enforce() {
    assert!(check(
        "This string contains quotes in it.",
        "Diese Zeichenfolge enthält „Anführungszeichen“.",
        "de-DE"
    )
    .is_none());
}

#[test]
fn empty_inputs_are_not_violations() {
    assert!(check("", "x", "de-DE").is_none());
    assert!(check("x", "", "de-DE").is_none());
    assert!(check("\"x\"", "'x'", "").is_none());
}

#[test]
fn fix_applied_then_rechecked_is_clean() {
    let cases = [
        (
            "This string contains \"quotes\" in it.",
            "Diese Zeichenfolge enthält 'Anführungszeichen'.",
            "de-DE",
        ),
        (
            "This string contains \"quotes\" in it.",
            "Эта строка содержит “кавычки”.",
            "ru-RU",
        ),
        (
            "Click \"My Documents\" to see more.",
            "『マイドキュメント』をクリックすると詳細が表示されます",
            "ja-JP",
        ),
    ];
    for (source, target, locale) in cases {
        let result = check(source, target, locale).unwrap();
        let fixed = result.fix.unwrap().apply(target);
        assert!(
            check(source, &fixed, locale).is_none(),
            "fix for {locale} did not converge: {fixed}"
        );
    }
}

#[test]
fn results_are_deterministic() {
    let a = check(
        "This string contains \"quotes\" in it.",
        "Diese Zeichenfolge enthält 'Anführungszeichen'.",
        "de-DE",
    )
    .unwrap();
    let b = check(
        "This string contains \"quotes\" in it.",
        "Diese Zeichenfolge enthält 'Anführungszeichen'.",
        "de-DE",
    )
    .unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
}

#[test]
fn checkers_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QuoteStyleCheck>();
}
