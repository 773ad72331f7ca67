// ===== wordrank/src/analyzer.rs =====
use crate::error::{WordRankError, WrResult};
use crate::freq::FrequencyTable;
use crate::text::{normalize, tokenize};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_TOP: usize = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub word: String,
    pub count: u64,
}

/// Result record for one analyzed document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    pub source: String,
    /// Number of distinct words, independent of the requested top count.
    pub word_count: usize,
    /// At most `top` entries, count descending, ties in first-seen order.
    pub top_words: Vec<RankedWord>,
}

/// Runs the full pipeline over in-memory text:
/// normalize -> tokenize -> count -> rank -> truncate to `top`.
///
/// `source` only labels the result; nothing is read from it.
pub fn analyze(source: &str, text: &str, top: usize) -> WrResult<DocumentStats> {
    if top == 0 {
        return Err(WordRankError::InvalidArgument(
            "top count must be at least 1".to_string(),
        ));
    }

    let cleaned = normalize(text);
    let tokens = tokenize(&cleaned);
    debug!(source, tokens = tokens.len(), "tokenized document");

    let table = FrequencyTable::from_tokens(tokens.iter().copied());
    if table.is_empty() {
        return Err(WordRankError::EmptyDocument(source.to_string()));
    }
    debug!(distinct = table.distinct(), "built frequency table");

    let top_words = table
        .ranked()
        .into_iter()
        .take(top)
        .map(|(word, count)| RankedWord {
            word: word.to_string(),
            count,
        })
        .collect();

    Ok(DocumentStats {
        source: source.to_string(),
        word_count: table.distinct(),
        top_words,
    })
}

/// Reads `path` fully as UTF-8 and analyzes it. Unreadable files (missing,
/// permission denied, invalid UTF-8) surface as `FileAccess`.
pub fn analyze_file(path: &Path, top: usize) -> WrResult<DocumentStats> {
    let text = fs::read_to_string(path).map_err(|source| WordRankError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    analyze(&path.display().to_string(), &text, top)
}
