//! Description Cleanup
//!
//! Strips recognized boilerplate from the utterance so only the free-text
//! label remains: the matched amount, the installment phrase, stop words on
//! word boundaries, and stray currency symbols.

use regex::Regex;

pub(crate) fn cleanup(
    lower: &str,
    amount_text: Option<&str>,
    installment_text: Option<&str>,
    strip_pattern: &Regex,
    currency_symbols: &[String],
) -> String {
    let mut text = match amount_text {
        Some(a) => lower.replacen(a, "", 1),
        None => lower.to_string(),
    };

    if let Some(phrase) = installment_text {
        text = text.replacen(phrase, "", 1);
    }

    text = strip_pattern.replace_all(&text, " ").into_owned();

    // Symbols glued to other tokens slip past the word-boundary pass
    for symbol in currency_symbols {
        text = text.replace(symbol.as_str(), "");
    }

    capitalize(collapse_whitespace(&text).trim())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
