//! Target-language selection

use crate::translate::lang;

/// Picks the target language for a detected source.
///
/// A stored user preference wins unconditionally, even when it equals the
/// source; the identity short-circuit belongs to the pipeline, not the
/// selector. Without a preference the default rule applies:
/// uk/ru → pl, anything else → ru.
pub fn select_target(source: &str, preference: Option<&str>) -> String {
    if let Some(pref) = preference {
        return lang::canonical_or_raw(pref);
    }

    match source.to_lowercase().as_str() {
        "uk" | "ru" => "pl".to_string(),
        _ => "ru".to_string(),
    }
}
