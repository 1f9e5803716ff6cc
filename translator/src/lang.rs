//! Language code lookup.
//!
//! Codes follow the detector's output (`en`, `zh-Hans`, `wyw`, ...). Names are
//! what gets interpolated into prompts, so they are English except for the
//! Chinese-family entries, which the model reads in Chinese.

/// Codes that get Chinese-localized prompts.
pub const CHINESE_LANGS: &[&str] = &["zh-Hans", "zh-Hant", "wyw", "yue"];

static LANGUAGES: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("en", "English"),
    ("zh-Hans", "简体中文"),
    ("zh-Hant", "繁體中文"),
    ("yue", "粤语"),
    ("wyw", "古文"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("fr", "French"),
    ("de", "German"),
    ("es", "Spanish"),
    ("it", "Italian"),
    ("ru", "Russian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("ar", "Arabic"),
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("el", "Greek"),
    ("et", "Estonian"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("my", "Burmese"),
    ("ne", "Nepali"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("ro", "Romanian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
];

/// Display name for `code`, or `code` itself when it is not in the table.
pub fn lang_name(code: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |&(_, name)| name)
}

/// Whether `code` is one of [`CHINESE_LANGS`].
pub fn is_chinese(code: &str) -> bool {
    CHINESE_LANGS.iter().any(|c| *c == code)
}

/// All known `(code, name)` pairs, in display order.
pub fn supported_languages() -> &'static [(&'static str, &'static str)] {
    LANGUAGES
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_codes_map_to_names() {
        assert_eq!(lang_name("fr"), "French");
        assert_eq!(lang_name("en"), "English");
        assert_eq!(lang_name("wyw"), "古文");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(lang_name("xx-Klingon"), "xx-Klingon");
        assert_eq!(lang_name(""), "");
    }

    #[test]
    fn chinese_family_membership() {
        for code in ["zh-Hans", "zh-Hant", "wyw", "yue"] {
            assert!(is_chinese(code), "{code} should be Chinese-family");
        }
        for code in ["zh", "zh-CN", "ja", "en"] {
            assert!(!is_chinese(code), "{code} should not be Chinese-family");
        }
    }

    #[test]
    fn table_has_no_duplicate_codes() {
        let codes = supported_languages();
        for (i, (code, _)) in codes.iter().enumerate() {
            assert!(
                !codes[i + 1..].iter().any(|(other, _)| other == code),
                "duplicate code {code}"
            );
        }
    }
}
