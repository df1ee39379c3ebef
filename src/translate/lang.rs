//! Language-code canonicalization and provider-specific spellings

/// Recognized language-code aliases and their canonical forms.
/// The only non-trivial entries are the Chinese variants; everything else
/// maps to itself.
const ALIASES: &[(&str, &str)] = &[
    ("uk", "uk"),
    ("ru", "ru"),
    ("pl", "pl"),
    ("en", "en"),
    ("tr", "tr"),
    ("de", "de"),
    ("fr", "fr"),
    ("es", "es"),
    ("it", "it"),
    ("pt", "pt"),
    ("ar", "ar"),
    ("fa", "fa"),
    ("hi", "hi"),
    ("ja", "ja"),
    ("ko", "ko"),
    ("zh", "zh-cn"),
    ("zh-hans", "zh-cn"),
    ("zh-cn", "zh-cn"),
    ("zh-hant", "zh-tw"),
    ("zh-tw", "zh-tw"),
];

/// Looks up the canonical form of a recognized language code.
pub fn canonical(code: &str) -> Option<&'static str> {
    let code = code.to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == code)
        .map(|(_, canon)| *canon)
}

/// Canonicalizes a known alias; unrecognized codes pass through lower-cased
/// and are treated as opaque but still usable.
pub fn canonical_or_raw(code: &str) -> String {
    match canonical(code) {
        Some(canon) => canon.to_string(),
        None => code.to_lowercase(),
    }
}

/// Spelling used in the MyMemory langpair parameter.
/// Regioned Chinese codes are upper-cased; all other codes pass through.
pub fn pair_code(code: &str) -> String {
    match code {
        "zh-cn" => "ZH-CN".to_string(),
        "zh-tw" => "ZH-TW".to_string(),
        other => other.to_string(),
    }
}
