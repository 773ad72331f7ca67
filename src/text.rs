// ===== wordrank/src/text.rs =====
use once_cell::sync::Lazy;
use regex::Regex;

// Anything that is neither a word character (letter of any script, digit,
// underscore) nor whitespace. Removed characters are deleted outright, never
// replaced by a space. Marks stay so decomposed accented letters survive;
// connector punctuation other than the underscore does not count as a word
// character.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{M}\p{Nd}_\s]").expect("static pattern"));

/// Strips punctuation from raw text.
///
/// Deletion is literal: `"a-b"` becomes `"ab"`, while `"a - b"` becomes
/// `"a  b"` because the spaces around the hyphen survive. Pre-existing
/// whitespace runs are preserved as-is; collapsing them is the tokenizer's
/// job.
pub fn normalize(text: &str) -> String {
    NON_WORD.replace_all(text, "").into_owned()
}

/// Splits normalized text into words.
///
/// Splits on runs of Unicode whitespace and discards empty fragments, so
/// leading, trailing and repeated whitespace never produce tokens. Token
/// order matches left-to-right order of appearance.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
