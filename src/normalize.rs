/// Comparison key used to join the two catalogs: Unicode-aware lowercasing,
/// which is enough for the Latin and Cyrillic names both sources carry.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Display-name capitalization for bundle output. Cyrillic entries keep
/// their source casing.
pub fn capitalize_name(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if is_cyrillic(first) {
        return name.to_string();
    }
    let mut out: String = first.to_uppercase().collect();
    out.push_str(chars.as_str());
    out
}

fn is_cyrillic(c: char) -> bool {
    matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}
