use serde::{Deserialize, Serialize};

/// Interface language.
///
/// Purely a lookup key for translation bundles; it carries no behavior
/// of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ml,
    Ta,
}

impl Language {
    /// All supported languages, in picker order.
    pub const ALL: [Language; 3] = [Language::En, Language::Ml, Language::Ta];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ml => "ml",
            Language::Ta => "ta",
        }
    }

    /// Name of the language in the language itself, for pickers.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ml => "മലയാളം",
            Language::Ta => "தமிழ்",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.native_name())
    }
}

impl std::str::FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ml" => Ok(Language::Ml),
            "ta" => Ok(Language::Ta),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("en".parse(), Ok(Language::En));
        assert_eq!("ML".parse(), Ok(Language::Ml));
        assert_eq!("ta".parse(), Ok(Language::Ta));
        assert_eq!("fr".parse::<Language>(), Err(()));
    }

    #[test]
    fn test_language_wire_form() {
        assert_eq!(serde_json::to_string(&Language::Ml).unwrap(), r#""ml""#);
        let lang: Language = serde_json::from_str(r#""ta""#).unwrap();
        assert_eq!(lang, Language::Ta);
    }
}
