//! # Text Helpers

/// Returns `word` with its first character uppercased and the rest untouched.
///
/// Works on `char`s, so a multi-byte first letter (`é`) is folded as a
/// whole. The result always has as many `char`s as the input: a letter
/// whose uppercase form is several chars (`ß`, `ﬁ`) is left unchanged.
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let folded = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };

    let mut out = String::with_capacity(word.len());
    out.push(folded);
    out.push_str(chars.as_str());
    out
}
