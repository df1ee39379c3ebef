//! Mixed-alphabet normalization
//!
//! Messages typed with a mismatched keyboard layout end up with Latin
//! look-alike letters inside Cyrillic words (`привiт`), or with Russian-only
//! letters inside Ukrainian words (`привыт`). Both get rewritten here before
//! anything else looks at the text.

/// Latin letters with a visually identical Cyrillic counterpart.
fn latin_to_cyrillic(c: char) -> Option<char> {
    Some(match c {
        'A' => 'А',
        'a' => 'а',
        'B' => 'В',
        'E' => 'Е',
        'e' => 'е',
        'K' => 'К',
        'k' => 'к',
        'M' => 'М',
        'm' => 'м',
        'H' => 'Н',
        'O' => 'О',
        'o' => 'о',
        'P' => 'Р',
        'p' => 'р',
        'C' => 'С',
        'c' => 'с',
        'T' => 'Т',
        't' => 'т',
        'X' => 'Х',
        'x' => 'х',
        'I' => 'І',
        'i' => 'і',
        'Y' => 'У',
        'y' => 'у',
        _ => return None,
    })
}

/// Russian-only letters and their Ukrainian equivalents.
/// `ъ` has no Ukrainian counterpart and becomes the apostrophe `ʼ`.
fn russian_to_ukrainian(c: char) -> Option<char> {
    Some(match c {
        'ы' => 'и',
        'Ы' => 'И',
        'э' => 'е',
        'Э' => 'Е',
        'ъ' => 'ʼ',
        'Ъ' => 'ʼ',
        _ => return None,
    })
}

fn is_cyrillic(c: char) -> bool {
    ('А'..='я').contains(&c) || matches!(c, 'І' | 'і' | 'Ї' | 'ї' | 'Є' | 'є' | 'Ґ' | 'ґ')
}

/// Rewrites mixed-keyboard text into a single consistent script.
///
/// The text is split into alternating whitespace and word tokens so that
/// rejoining by concatenation reproduces the original spacing exactly.
/// Per token, Russian-only letters are replaced unconditionally; Latin
/// look-alikes are replaced only when the token mixes Cyrillic and Latin.
/// Pure-Latin and other-script tokens pass through untouched. Never fails.
pub fn normalize_mixed(text: &str) -> String {
    split_keep_whitespace(text)
        .into_iter()
        .map(normalize_token)
        .collect()
}

fn normalize_token(token: &str) -> String {
    let token: String = token
        .chars()
        .map(|c| russian_to_ukrainian(c).unwrap_or(c))
        .collect();

    let has_cyrillic = token.chars().any(is_cyrillic);
    let has_latin = token.chars().any(|c| c.is_ascii_alphabetic());
    if !(has_cyrillic && has_latin) {
        return token;
    }

    token
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                latin_to_cyrillic(c).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Splits into maximal whitespace / non-whitespace runs, keeping both.
fn split_keep_whitespace(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev_is_ws: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let is_ws = ch.is_whitespace();
        if let Some(prev) = prev_is_ws {
            if prev != is_ws {
                parts.push(&text[start..idx]);
                start = idx;
            }
        }
        prev_is_ws = Some(is_ws);
    }
    if start < text.len() {
        parts.push(&text[start..]);
    }
    parts
}
