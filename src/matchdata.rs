//! Static data tables backing the locale matcher.
//!
//! This is a curated subset of the CLDR-derived likely-subtag, macro-language,
//! mutual-intelligibility, and territory-containment data, covering the
//! locales this crate has typography rules for plus the common neighbors
//! needed for meaningful distance scoring. Unknown keys fall through to the
//! conservative defaults in the matcher, never to an error.

use std::collections::{BTreeMap, BTreeSet};

use lazy_static::lazy_static;

lazy_static! {
    /// Partial locale spec → most likely fully specified locale.
    static ref LIKELY_LOCALES: BTreeMap<&'static str, &'static str> = {
        let mut m = BTreeMap::new();
        for (key, value) in [
            // language-only keys
            ("af", "af-Latn-ZA"), ("am", "am-Ethi-ET"), ("ar", "ar-Arab-EG"),
            ("as", "as-Beng-IN"), ("az", "az-Latn-AZ"), ("be", "be-Cyrl-BY"),
            ("bg", "bg-Cyrl-BG"), ("bn", "bn-Beng-BD"), ("bo", "bo-Tibt-CN"),
            ("bs", "bs-Latn-BA"), ("ca", "ca-Latn-ES"), ("cs", "cs-Latn-CZ"),
            ("cy", "cy-Latn-GB"), ("da", "da-Latn-DK"), ("de", "de-Latn-DE"),
            ("dz", "dz-Tibt-BT"), ("el", "el-Grek-GR"), ("en", "en-Latn-US"),
            ("es", "es-Latn-ES"), ("et", "et-Latn-EE"), ("eu", "eu-Latn-ES"),
            ("fa", "fa-Arab-IR"), ("fi", "fi-Latn-FI"), ("fr", "fr-Latn-FR"),
            ("ga", "ga-Latn-IE"), ("gl", "gl-Latn-ES"), ("gu", "gu-Gujr-IN"),
            ("he", "he-Hebr-IL"), ("hi", "hi-Deva-IN"), ("hr", "hr-Latn-HR"),
            ("hu", "hu-Latn-HU"), ("hy", "hy-Armn-AM"), ("id", "id-Latn-ID"),
            ("is", "is-Latn-IS"), ("it", "it-Latn-IT"), ("ja", "ja-Jpan-JP"),
            ("jv", "jv-Latn-ID"), ("ka", "ka-Geor-GE"), ("kk", "kk-Cyrl-KZ"),
            ("km", "km-Khmr-KH"), ("kn", "kn-Knda-IN"), ("ko", "ko-Kore-KR"),
            ("ku", "ku-Latn-TR"), ("ky", "ky-Cyrl-KG"), ("lo", "lo-Laoo-LA"),
            ("lt", "lt-Latn-LT"), ("lv", "lv-Latn-LV"), ("mk", "mk-Cyrl-MK"),
            ("ml", "ml-Mlym-IN"), ("mn", "mn-Cyrl-MN"), ("mr", "mr-Deva-IN"),
            ("ms", "ms-Latn-MY"), ("mt", "mt-Latn-MT"), ("my", "my-Mymr-MM"),
            ("nb", "nb-Latn-NO"), ("ne", "ne-Deva-NP"), ("nl", "nl-Latn-NL"),
            ("nn", "nn-Latn-NO"), ("no", "no-Latn-NO"), ("or", "or-Orya-IN"),
            ("pa", "pa-Guru-IN"), ("pl", "pl-Latn-PL"), ("pt", "pt-Latn-BR"),
            ("ro", "ro-Latn-RO"), ("ru", "ru-Cyrl-RU"), ("si", "si-Sinh-LK"),
            ("sk", "sk-Latn-SK"), ("sl", "sl-Latn-SI"), ("sq", "sq-Latn-AL"),
            ("sr", "sr-Cyrl-RS"), ("su", "su-Latn-ID"), ("sv", "sv-Latn-SE"),
            ("sw", "sw-Latn-TZ"), ("ta", "ta-Taml-IN"), ("te", "te-Telu-IN"),
            ("tg", "tg-Cyrl-TJ"), ("th", "th-Thai-TH"), ("tk", "tk-Latn-TM"),
            ("tl", "tl-Latn-PH"), ("tr", "tr-Latn-TR"), ("uk", "uk-Cyrl-UA"),
            ("ur", "ur-Arab-PK"), ("uz", "uz-Latn-UZ"), ("vi", "vi-Latn-VN"),
            ("zh", "zh-Hans-CN"),
            // language-region keys where the script depends on the region
            ("pa-PK", "pa-Arab-PK"), ("sr-ME", "sr-Latn-ME"),
            ("uz-AF", "uz-Arab-AF"), ("ku-IQ", "ku-Arab-IQ"),
            ("zh-HK", "zh-Hant-HK"), ("zh-MO", "zh-Hant-MO"),
            ("zh-SG", "zh-Hans-SG"), ("zh-TW", "zh-Hant-TW"),
            ("tg-TJ", "tg-Cyrl-TJ"),
            // language-region keys for common regional variants
            ("de-AT", "de-Latn-AT"), ("de-CH", "de-Latn-CH"),
            ("en-AU", "en-Latn-AU"), ("en-CA", "en-Latn-CA"),
            ("en-GB", "en-Latn-GB"), ("en-NZ", "en-Latn-NZ"),
            ("es-AR", "es-Latn-AR"), ("es-MX", "es-Latn-MX"),
            ("fr-BE", "fr-Latn-BE"), ("fr-CA", "fr-Latn-CA"),
            ("fr-CH", "fr-Latn-CH"), ("fr-LU", "fr-Latn-LU"),
            ("nl-BE", "nl-Latn-BE"), ("pt-PT", "pt-Latn-PT"),
            ("sv-FI", "sv-Latn-FI"),
            // language-script keys
            ("az-Cyrl", "az-Cyrl-AZ"), ("ku-Arab", "ku-Arab-IQ"),
            ("pa-Arab", "pa-Arab-PK"), ("sr-Latn", "sr-Latn-RS"),
            ("uz-Cyrl", "uz-Cyrl-UZ"), ("zh-Hant", "zh-Hant-TW"),
            // script-only keys
            ("Arab", "ar-Arab-EG"), ("Cyrl", "ru-Cyrl-RU"),
            ("Deva", "hi-Deva-IN"), ("Grek", "el-Grek-GR"),
            ("Hans", "zh-Hans-CN"), ("Hant", "zh-Hant-TW"),
            ("Hebr", "he-Hebr-IL"), ("Jpan", "ja-Jpan-JP"),
            ("Kore", "ko-Kore-KR"), ("Latn", "en-Latn-US"),
            ("Thai", "th-Thai-TH"),
            // region-only keys
            ("AT", "de-Latn-AT"), ("AU", "en-Latn-AU"), ("BD", "bn-Beng-BD"),
            ("BE", "nl-Latn-BE"), ("BR", "pt-Latn-BR"), ("CA", "en-Latn-CA"),
            ("CH", "de-Latn-CH"), ("CN", "zh-Hans-CN"), ("CZ", "cs-Latn-CZ"),
            ("DE", "de-Latn-DE"), ("DK", "da-Latn-DK"), ("EG", "ar-Arab-EG"),
            ("ES", "es-Latn-ES"), ("FI", "fi-Latn-FI"), ("FR", "fr-Latn-FR"),
            ("GB", "en-Latn-GB"), ("GR", "el-Grek-GR"), ("HK", "zh-Hant-HK"),
            ("ID", "id-Latn-ID"), ("IL", "he-Hebr-IL"), ("IN", "hi-Deva-IN"),
            ("IT", "it-Latn-IT"), ("JP", "ja-Jpan-JP"), ("KH", "km-Khmr-KH"),
            ("KR", "ko-Kore-KR"), ("LA", "lo-Laoo-LA"), ("LK", "si-Sinh-LK"),
            ("MM", "my-Mymr-MM"), ("MX", "es-Latn-MX"), ("MY", "ms-Latn-MY"),
            ("NL", "nl-Latn-NL"), ("NO", "no-Latn-NO"), ("NP", "ne-Deva-NP"),
            ("PH", "tl-Latn-PH"), ("PK", "ur-Arab-PK"), ("PL", "pl-Latn-PL"),
            ("PT", "pt-Latn-PT"), ("RU", "ru-Cyrl-RU"), ("SA", "ar-Arab-SA"),
            ("SE", "sv-Latn-SE"), ("SG", "zh-Hans-SG"), ("TH", "th-Thai-TH"),
            ("TR", "tr-Latn-TR"), ("TW", "zh-Hant-TW"), ("UA", "uk-Cyrl-UA"),
            ("US", "en-Latn-US"), ("VN", "vi-Latn-VN"), ("ZA", "af-Latn-ZA"),
        ] {
            m.insert(key, value);
        }
        m
    };

    /// Member language → macro language (e.g. `cmn` → `zh`).
    static ref MACRO_LANGUAGES: BTreeMap<&'static str, &'static str> = {
        let mut m = BTreeMap::new();
        for (member, macro_lang) in [
            ("cmn", "zh"), ("yue", "zh"), ("wuu", "zh"), ("hak", "zh"),
            ("nan", "zh"), ("gan", "zh"),
            ("nb", "no"), ("nn", "no"),
            ("arb", "ar"), ("pes", "fa"), ("zsm", "ms"),
            ("ekk", "et"), ("lvs", "lv"), ("uzn", "uz"), ("swh", "sw"),
        ] {
            m.insert(member, macro_lang);
        }
        m
    };

    /// Directional mutual-intelligibility scores, keyed by (from, to).
    /// Only a curated set of pairs is encoded; everything else scores zero.
    static ref MUTUAL_INTELLIGIBILITY: BTreeMap<(&'static str, &'static str), u32> = {
        let mut m = BTreeMap::new();
        m.insert(("da", "no"), 46);
        m.insert(("no", "da"), 66);
        m
    };

    /// Region → containment chain, innermost enclosing area first, ending
    /// with the whole world ("001").
    static ref REGION_CHAINS: BTreeMap<&'static str, &'static [&'static str]> = {
        const NORTHERN_AMERICA: &[&str] = &["021", "003", "019", "UN", "001"];
        const CENTRAL_AMERICA: &[&str] = &["013", "003", "419", "019", "UN", "001"];
        const CARIBBEAN: &[&str] = &["029", "003", "419", "019", "UN", "001"];
        const SOUTH_AMERICA: &[&str] = &["005", "419", "019", "UN", "001"];
        const NORTHERN_EUROPE_EU: &[&str] = &["154", "150", "EU", "UN", "001"];
        const NORTHERN_EUROPE: &[&str] = &["154", "150", "UN", "001"];
        const WESTERN_EUROPE_EU: &[&str] = &["155", "150", "EU", "UN", "001"];
        const WESTERN_EUROPE: &[&str] = &["155", "150", "UN", "001"];
        const SOUTHERN_EUROPE_EU: &[&str] = &["039", "150", "EU", "UN", "001"];
        const SOUTHERN_EUROPE: &[&str] = &["039", "150", "UN", "001"];
        const EASTERN_EUROPE_EU: &[&str] = &["151", "150", "EU", "UN", "001"];
        const EASTERN_EUROPE: &[&str] = &["151", "150", "UN", "001"];
        const WESTERN_ASIA: &[&str] = &["145", "142", "UN", "001"];
        const CENTRAL_ASIA: &[&str] = &["143", "142", "UN", "001"];
        const SOUTHERN_ASIA: &[&str] = &["034", "142", "UN", "001"];
        const SOUTH_EASTERN_ASIA: &[&str] = &["035", "142", "UN", "001"];
        const EASTERN_ASIA: &[&str] = &["030", "142", "UN", "001"];
        const NORTHERN_AFRICA: &[&str] = &["015", "002", "UN", "001"];
        const WESTERN_AFRICA: &[&str] = &["011", "002", "UN", "001"];
        const EASTERN_AFRICA: &[&str] = &["014", "002", "UN", "001"];
        const MIDDLE_AFRICA: &[&str] = &["017", "002", "UN", "001"];
        const SOUTHERN_AFRICA: &[&str] = &["018", "002", "UN", "001"];
        const AUSTRALASIA: &[&str] = &["053", "009", "UN", "001"];

        let mut m: BTreeMap<&'static str, &'static [&'static str]> = BTreeMap::new();
        for region in ["BM", "CA", "GL", "PM", "US"] {
            m.insert(region, NORTHERN_AMERICA);
        }
        for region in ["CR", "GT", "HN", "MX", "NI", "PA", "SV"] {
            m.insert(region, CENTRAL_AMERICA);
        }
        for region in ["CU", "DO", "HT", "JM", "PR", "TT"] {
            m.insert(region, CARIBBEAN);
        }
        for region in ["AR", "BO", "BR", "CL", "CO", "EC", "PE", "PY", "UY", "VE"] {
            m.insert(region, SOUTH_AMERICA);
        }
        for region in ["DK", "EE", "FI", "IE", "LT", "LV", "SE"] {
            m.insert(region, NORTHERN_EUROPE_EU);
        }
        for region in ["FO", "GB", "IS", "NO"] {
            m.insert(region, NORTHERN_EUROPE);
        }
        for region in ["AT", "BE", "DE", "FR", "LU", "NL"] {
            m.insert(region, WESTERN_EUROPE_EU);
        }
        for region in ["CH", "LI", "MC"] {
            m.insert(region, WESTERN_EUROPE);
        }
        for region in ["ES", "GR", "HR", "IT", "MT", "PT", "SI"] {
            m.insert(region, SOUTHERN_EUROPE_EU);
        }
        for region in ["AD", "AL", "BA", "ME", "MK", "RS", "SM"] {
            m.insert(region, SOUTHERN_EUROPE);
        }
        for region in ["BG", "CZ", "HU", "PL", "RO", "SK"] {
            m.insert(region, EASTERN_EUROPE_EU);
        }
        for region in ["BY", "MD", "RU", "UA"] {
            m.insert(region, EASTERN_EUROPE);
        }
        for region in [
            "AE", "AM", "AZ", "BH", "CY", "GE", "IL", "IQ", "JO", "KW", "LB",
            "OM", "QA", "SA", "SY", "TR", "YE",
        ] {
            m.insert(region, WESTERN_ASIA);
        }
        for region in ["KG", "KZ", "TJ", "TM", "UZ"] {
            m.insert(region, CENTRAL_ASIA);
        }
        for region in ["AF", "BD", "BT", "IN", "IR", "LK", "MV", "NP", "PK"] {
            m.insert(region, SOUTHERN_ASIA);
        }
        for region in ["BN", "ID", "KH", "LA", "MM", "MY", "PH", "SG", "TH", "TL", "VN"] {
            m.insert(region, SOUTH_EASTERN_ASIA);
        }
        for region in ["CN", "HK", "JP", "KP", "KR", "MN", "MO", "TW"] {
            m.insert(region, EASTERN_ASIA);
        }
        for region in ["DZ", "EG", "LY", "MA", "SD", "TN"] {
            m.insert(region, NORTHERN_AFRICA);
        }
        for region in ["CI", "GH", "ML", "NG", "SN"] {
            m.insert(region, WESTERN_AFRICA);
        }
        for region in ["ET", "KE", "TZ", "UG"] {
            m.insert(region, EASTERN_AFRICA);
        }
        for region in ["AO", "CD", "CM"] {
            m.insert(region, MIDDLE_AFRICA);
        }
        for region in ["BW", "NA", "ZA"] {
            m.insert(region, SOUTHERN_AFRICA);
        }
        for region in ["AU", "NZ"] {
            m.insert(region, AUSTRALASIA);
        }
        m
    };

    /// Container area → direct members (countries or sub-areas).
    static ref REGION_MEMBERS: BTreeMap<&'static str, Vec<&'static str>> = {
        let mut m: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
        m.insert("021", vec!["BM", "CA", "GL", "PM", "US"]);
        m.insert("013", vec!["BZ", "CR", "GT", "HN", "MX", "NI", "PA", "SV"]);
        m.insert("029", vec!["CU", "DO", "HT", "JM", "PR", "TT"]);
        m.insert(
            "005",
            vec!["AR", "BO", "BR", "CL", "CO", "EC", "GY", "PE", "PY", "SR", "UY", "VE"],
        );
        m.insert("003", vec!["013", "021", "029"]);
        m.insert("419", vec!["005", "013", "029"]);
        m.insert("019", vec!["003", "419"]);
        m.insert(
            "154",
            vec![
                "AX", "DK", "EE", "FI", "FO", "GB", "GG", "IE", "IM", "IS", "JE",
                "LT", "LV", "NO", "SE", "SJ",
            ],
        );
        m.insert(
            "155",
            vec!["AT", "BE", "CH", "DE", "FR", "LI", "LU", "MC", "NL"],
        );
        m.insert(
            "039",
            vec![
                "AD", "AL", "BA", "ES", "GI", "GR", "HR", "IT", "ME", "MK", "MT",
                "PT", "RS", "SI", "SM", "VA",
            ],
        );
        m.insert(
            "151",
            vec!["BG", "BY", "CZ", "HU", "MD", "PL", "RO", "RU", "SK", "UA"],
        );
        m.insert("150", vec!["039", "151", "154", "155"]);
        m.insert(
            "145",
            vec![
                "AE", "AM", "AZ", "BH", "CY", "GE", "IL", "IQ", "JO", "KW", "LB",
                "OM", "PS", "QA", "SA", "SY", "TR", "YE",
            ],
        );
        m.insert("143", vec!["KG", "KZ", "TJ", "TM", "UZ"]);
        m.insert(
            "034",
            vec!["AF", "BD", "BT", "IN", "IR", "LK", "MV", "NP", "PK"],
        );
        m.insert(
            "035",
            vec!["BN", "ID", "KH", "LA", "MM", "MY", "PH", "SG", "TH", "TL", "VN"],
        );
        m.insert(
            "030",
            vec!["CN", "HK", "JP", "KP", "KR", "MN", "MO", "TW"],
        );
        m.insert("142", vec!["030", "034", "035", "143", "145"]);
        m.insert("015", vec!["DZ", "EG", "LY", "MA", "SD", "TN"]);
        m.insert("011", vec!["CI", "GH", "ML", "NG", "SN"]);
        m.insert("014", vec!["ET", "KE", "TZ", "UG"]);
        m.insert("017", vec!["AO", "CD", "CM"]);
        m.insert("018", vec!["BW", "NA", "ZA"]);
        m.insert("002", vec!["011", "014", "015", "017", "018"]);
        m.insert("053", vec!["AU", "NF", "NZ"]);
        m.insert("009", vec!["053", "054", "057", "061"]);
        m.insert(
            "EU",
            vec![
                "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR",
                "GR", "HR", "HU", "IE", "IT", "LT", "LU", "LV", "MT", "NL", "PL",
                "PT", "RO", "SE", "SI", "SK",
            ],
        );
        // UN membership spans every country this table knows about.
        let un: BTreeSet<&'static str> = REGION_CHAINS
            .keys()
            .copied()
            .filter(|k| k.len() == 2 && k.chars().all(|c| c.is_ascii_uppercase()))
            .collect();
        m.insert("UN", un.into_iter().collect());
        m
    };
}

/// Languages that must always carry an explicit script in minimal locale
/// specs, because no script is a clear default for them.
pub(crate) const MULTI_SCRIPT_LANGUAGES: &[&str] =
    &["az", "kk", "ku", "ky", "pa", "sr", "tg", "uz", "zh"];

pub(crate) fn likely_locale_spec(key: &str) -> Option<&'static str> {
    LIKELY_LOCALES.get(key).copied()
}

pub(crate) fn macro_language(language: &str) -> Option<&'static str> {
    MACRO_LANGUAGES.get(language).copied()
}

pub(crate) fn mutual_intelligibility(from: &str, to: &str) -> u32 {
    MUTUAL_INTELLIGIBILITY.get(&(from, to)).copied().unwrap_or(0)
}

pub(crate) fn region_chain(region: &str) -> &'static [&'static str] {
    REGION_CHAINS.get(region).copied().unwrap_or(&[])
}

pub(crate) fn region_members(container: &str) -> Option<&'static [&'static str]> {
    REGION_MEMBERS.get(container).map(|v| v.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likely_locale_lookup() {
        assert_eq!(likely_locale_spec("uz"), Some("uz-Latn-UZ"));
        assert_eq!(likely_locale_spec("zh-HK"), Some("zh-Hant-HK"));
        assert_eq!(likely_locale_spec("US"), Some("en-Latn-US"));
        assert_eq!(likely_locale_spec("xx"), None);
    }

    #[test]
    fn test_macro_language_lookup() {
        assert_eq!(macro_language("cmn"), Some("zh"));
        assert_eq!(macro_language("nn"), Some("no"));
        assert_eq!(macro_language("en"), None);
    }

    #[test]
    fn test_mutual_intelligibility_is_directional() {
        assert_eq!(mutual_intelligibility("da", "no"), 46);
        assert_eq!(mutual_intelligibility("no", "da"), 66);
        assert_eq!(mutual_intelligibility("en", "de"), 0);
    }

    #[test]
    fn test_region_chains() {
        assert_eq!(region_chain("US"), &["021", "003", "019", "UN", "001"]);
        assert_eq!(region_chain("NO"), &["154", "150", "UN", "001"]);
        assert_eq!(region_chain("DK"), &["154", "150", "EU", "UN", "001"]);
        assert!(region_chain("ZZ").is_empty());
    }

    #[test]
    fn test_un_contains_every_known_country() {
        let un = region_members("UN").unwrap();
        assert!(un.contains(&"SG"));
        assert!(un.contains(&"US"));
        assert!(un.contains(&"NO"));
    }
}
