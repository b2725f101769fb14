/// Characters that separate ingredient names in pasted or OCR text.
pub const TOKEN_DELIMITERS: [char; 3] = [',', ';', '\n'];

/// Splits raw text into trimmed, lower-cased, non-empty tokens in input order.
pub fn split_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(TOKEN_DELIMITERS)
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
}

/// Upper-cases the first character only: `"sodium benzoate"` becomes `"Sodium benzoate"`.
pub fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
