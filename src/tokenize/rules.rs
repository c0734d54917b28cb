use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_LETTERS: Regex = Regex::new(r"\P{L}+").unwrap();
    static ref LETTER_RUN: Regex = Regex::new(r"\p{L}+").unwrap();
    static ref NEITHER_LETTER_NOR_PUNCT: Regex = Regex::new(r"[^\p{L}\p{P}]+").unwrap();
    static ref PUNCT: Regex = Regex::new(r"(\p{P})").unwrap();
    static ref NEWLINES: Regex = Regex::new(r"\n+").unwrap();
}

/// Uses the non-letters to break the text into words.
///
/// Leading and trailing delimiters leave empty pieces behind; those are dropped.
pub fn split_on_non_letters(text: &str) -> Vec<String> {
    NON_LETTERS
        .split(text)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Uses the letters to find the words: every maximal run of Unicode letters.
pub fn find_letter_runs(text: &str) -> Vec<String> {
    LETTER_RUN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Uses punctuation and non-letters to break the text into words,
/// keeping each punctuation character as a token of its own.
pub fn punctuation_aware(text: &str) -> Vec<String> {
    let text = NEITHER_LETTER_NOR_PUNCT.replace_all(text, "\n");
    let text = PUNCT.replace_all(&text, "\n${1}\n");
    let text = NEWLINES.replace_all(&text, "\n");

    text.split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
