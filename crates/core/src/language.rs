use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locales the assistant can be displayed in. English is the source language
/// every other translation starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Hi,
    Bn,
    Te,
    Mr,
    Ta,
    Gu,
    Ur,
    Kn,
    Or,
    Pa,
    As,
    Ne,
    Ml,
    Sa,
    Ks,
    Sd,
    Bo,
    Es,
    Fr,
    De,
    Pt,
    It,
    Ru,
    Ja,
    Ko,
    Zh,
    Ar,
}

pub const SOURCE_LANGUAGE: LanguageCode = LanguageCode::En;

impl LanguageCode {
    pub const ALL: [LanguageCode; 28] = [
        LanguageCode::En,
        LanguageCode::Hi,
        LanguageCode::Bn,
        LanguageCode::Te,
        LanguageCode::Mr,
        LanguageCode::Ta,
        LanguageCode::Gu,
        LanguageCode::Ur,
        LanguageCode::Kn,
        LanguageCode::Or,
        LanguageCode::Pa,
        LanguageCode::As,
        LanguageCode::Ne,
        LanguageCode::Ml,
        LanguageCode::Sa,
        LanguageCode::Ks,
        LanguageCode::Sd,
        LanguageCode::Bo,
        LanguageCode::Es,
        LanguageCode::Fr,
        LanguageCode::De,
        LanguageCode::Pt,
        LanguageCode::It,
        LanguageCode::Ru,
        LanguageCode::Ja,
        LanguageCode::Ko,
        LanguageCode::Zh,
        LanguageCode::Ar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Hi => "hi",
            LanguageCode::Bn => "bn",
            LanguageCode::Te => "te",
            LanguageCode::Mr => "mr",
            LanguageCode::Ta => "ta",
            LanguageCode::Gu => "gu",
            LanguageCode::Ur => "ur",
            LanguageCode::Kn => "kn",
            LanguageCode::Or => "or",
            LanguageCode::Pa => "pa",
            LanguageCode::As => "as",
            LanguageCode::Ne => "ne",
            LanguageCode::Ml => "ml",
            LanguageCode::Sa => "sa",
            LanguageCode::Ks => "ks",
            LanguageCode::Sd => "sd",
            LanguageCode::Bo => "bo",
            LanguageCode::Es => "es",
            LanguageCode::Fr => "fr",
            LanguageCode::De => "de",
            LanguageCode::Pt => "pt",
            LanguageCode::It => "it",
            LanguageCode::Ru => "ru",
            LanguageCode::Ja => "ja",
            LanguageCode::Ko => "ko",
            LanguageCode::Zh => "zh",
            LanguageCode::Ar => "ar",
        }
    }

    /// Name of the language written in the language itself, as shown in the
    /// language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Hi => "हिन्दी",
            LanguageCode::Bn => "বাংলা",
            LanguageCode::Te => "తెలుగు",
            LanguageCode::Mr => "मराठी",
            LanguageCode::Ta => "தமிழ்",
            LanguageCode::Gu => "ગુજરાતી",
            LanguageCode::Ur => "اردو",
            LanguageCode::Kn => "ಕನ್ನಡ",
            LanguageCode::Or => "ଓଡ଼ିଆ",
            LanguageCode::Pa => "ਪੰਜਾਬੀ",
            LanguageCode::As => "অসমীয়া",
            LanguageCode::Ne => "नेपाली",
            LanguageCode::Ml => "മലയാളം",
            LanguageCode::Sa => "संस्कृतम्",
            LanguageCode::Ks => "کٲشُر",
            LanguageCode::Sd => "سنڌي",
            LanguageCode::Bo => "བོད་ཡིག",
            LanguageCode::Es => "Español",
            LanguageCode::Fr => "Français",
            LanguageCode::De => "Deutsch",
            LanguageCode::Pt => "Português",
            LanguageCode::It => "Italiano",
            LanguageCode::Ru => "Русский",
            LanguageCode::Ja => "日本語",
            LanguageCode::Ko => "한국어",
            LanguageCode::Zh => "中文",
            LanguageCode::Ar => "العربية",
        }
    }

    pub fn is_source(self) -> bool {
        self == SOURCE_LANGUAGE
    }

    /// Exact match on the lowercase code, with no trimming. Used for values
    /// read back from storage; user input goes through `FromStr`.
    pub fn from_code(code: &str) -> Option<Self> {
        LanguageCode::ALL.into_iter().find(|lang| lang.as_str() == code)
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        SOURCE_LANGUAGE
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LanguageCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownLanguage(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_str() {
        for code in LanguageCode::ALL {
            assert_eq!(code.as_str().parse::<LanguageCode>(), Ok(code));
        }
    }

    #[test]
    fn parsing_is_case_insensitive_and_trims() {
        assert_eq!(" HI ".parse::<LanguageCode>(), Ok(LanguageCode::Hi));
    }

    #[test]
    fn from_code_is_exact() {
        assert_eq!(LanguageCode::from_code("hi"), Some(LanguageCode::Hi));
        assert_eq!(LanguageCode::from_code(" HI "), None);
        assert_eq!(LanguageCode::from_code("Hi"), None);
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(
            "xx".parse::<LanguageCode>(),
            Err(ConfigError::UnknownLanguage("xx".to_owned()))
        );
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&LanguageCode::As).expect("serialize");
        assert_eq!(json, "\"as\"");
        let back: LanguageCode = serde_json::from_str("\"or\"").expect("deserialize");
        assert_eq!(back, LanguageCode::Or);
    }

    #[test]
    fn english_is_the_only_source_language() {
        let sources: Vec<_> = LanguageCode::ALL.into_iter().filter(|c| c.is_source()).collect();
        assert_eq!(sources, vec![LanguageCode::En]);
        assert_eq!(LanguageCode::default(), LanguageCode::En);
    }
}
