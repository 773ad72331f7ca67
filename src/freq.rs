// ===== wordrank/src/freq.rs =====
use std::collections::HashMap;

/// Per-token occurrence data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStat {
    pub count: u64,
    /// Position of the token among distinct tokens, in order of first
    /// appearance. Used as the deterministic tie-break when counts are equal.
    pub first_seen: usize,
}

/// Case-sensitive, exact-match frequency table over a token sequence.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    stats: HashMap<String, TokenStat>,
    total_tokens: u64,
}

impl FrequencyTable {
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = FrequencyTable::default();
        for token in tokens {
            table.observe(token);
        }
        table
    }

    /// Records one occurrence of `token`, initializing it on first sight.
    pub fn observe(&mut self, token: &str) {
        let first_seen = self.stats.len();
        self.stats
            .entry(token.to_string())
            .or_insert(TokenStat {
                count: 0,
                first_seen,
            })
            .count += 1;
        self.total_tokens += 1;
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.stats.len()
    }

    /// Sum of all counts; equals the length of the observed token sequence.
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn count_of(&self, token: &str) -> u64 {
        self.stats.get(token).map_or(0, |s| s.count)
    }

    /// All entries ordered by count descending, ties broken by first
    /// occurrence. HashMap iteration order never leaks into the result, so
    /// the ranking is reproducible run-to-run.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, &TokenStat)> = self
            .stats
            .iter()
            .map(|(token, stat)| (token.as_str(), stat))
            .collect();
        entries.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        entries
            .into_iter()
            .map(|(token, stat)| (token, stat.count))
            .collect()
    }
}
