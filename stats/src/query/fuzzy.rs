//! Fuzzy name matching for autocomplete
//!
//! Candidates are scored in strict tiers:
//!
//! | tier        | condition (case-insensitive)          | score                     |
//! |-------------|---------------------------------------|---------------------------|
//! | Exact       | name equals query                     | 100                       |
//! | Prefix      | name starts with query                | 90                        |
//! | Substring   | name contains query                   | 70                        |
//! | Subsequence | query chars appear in order in name   | `50 - (len(name) - len(query))`, floored at 0 |
//!
//! Entries scoring 0 are dropped. Results are ordered by tier, then score,
//! then catalog order, and capped at [`MAX_SUGGESTIONS`].
//!
//! Lengths and highlight spans count `char`s, and case folding maps each
//! char to the first char of its lowercase form so indices stay aligned with
//! the original name.

use statdex_protocol::CatalogEntry;

/// Number of suggestions returned by [`rank`]
pub const MAX_SUGGESTIONS: usize = 8;

const EXACT_SCORE: u8 = 100;
const PREFIX_SCORE: u8 = 90;
const SUBSTRING_SCORE: u8 = 70;
const SUBSEQUENCE_BASE: usize = 50;

/// Half-open `[start, end)` range of chars in a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Split `name` into the text before, inside and after this span
    pub fn split<'n>(&self, name: &'n str) -> (&'n str, &'n str, &'n str) {
        let byte_at = |chars: usize| {
            name.char_indices()
                .nth(chars)
                .map_or(name.len(), |(i, _)| i)
        };
        let (start, end) = (byte_at(self.start), byte_at(self.end));
        (&name[..start], &name[start..end], &name[end..])
    }
}

/// How a candidate matched, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchTier {
    Exact,
    Prefix,
    Substring,
    Subsequence,
}

/// Score of one name against one query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameScore {
    pub tier: MatchTier,
    /// 0..=100
    pub score: u8,
    /// Matched range for contiguous tiers
    pub highlight: Option<Span>,
}

/// A ranked catalog entry. Lives only as long as the query that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub entry: &'a CatalogEntry,
    pub tier: MatchTier,
    pub score: u8,
    pub highlight: Option<Span>,
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn folded(text: &str) -> Vec<char> {
    text.chars().map(fold).collect()
}

fn find(haystack: &[char], needle: &[char]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn is_subsequence(needle: &[char], haystack: &[char]) -> bool {
    let mut remaining = haystack.iter();
    needle.iter().all(|c| remaining.any(|h| h == c))
}

fn score_folded(query: &[char], name: &[char]) -> Option<NameScore> {
    if query.is_empty() {
        return None;
    }

    if name == query {
        return Some(NameScore {
            tier: MatchTier::Exact,
            score: EXACT_SCORE,
            highlight: Some(Span {
                start: 0,
                end: name.len(),
            }),
        });
    }

    if let Some(start) = find(name, query) {
        let (tier, score) = if start == 0 {
            (MatchTier::Prefix, PREFIX_SCORE)
        } else {
            (MatchTier::Substring, SUBSTRING_SCORE)
        };
        return Some(NameScore {
            tier,
            score,
            highlight: Some(Span {
                start,
                end: start + query.len(),
            }),
        });
    }

    if is_subsequence(query, name) {
        let extra = name.len() - query.len();
        let score = SUBSEQUENCE_BASE.saturating_sub(extra) as u8;
        if score > 0 {
            return Some(NameScore {
                tier: MatchTier::Subsequence,
                score,
                highlight: None,
            });
        }
    }

    None
}

/// Score `name` against `query`. `None` means the name is not a match.
pub fn score(query: &str, name: &str) -> Option<NameScore> {
    score_folded(&folded(query), &folded(name))
}

/// Rank `catalog` against `query`, returning at most [`MAX_SUGGESTIONS`] results
pub fn rank<'a>(query: &str, catalog: &'a [CatalogEntry]) -> Vec<MatchResult<'a>> {
    rank_with_limit(query, catalog, MAX_SUGGESTIONS)
}

/// Rank `catalog` against `query`, returning at most `limit` results.
///
/// A blank query returns no results, which callers should treat as
/// "nothing typed yet" rather than "no matches".
pub fn rank_with_limit<'a>(
    query: &str,
    catalog: &'a [CatalogEntry],
    limit: usize,
) -> Vec<MatchResult<'a>> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let query = folded(query);
    let mut matches: Vec<MatchResult<'a>> = catalog
        .iter()
        .filter_map(|entry| {
            score_folded(&query, &folded(&entry.name)).map(|s| MatchResult {
                entry,
                tier: s.tier,
                score: s.score,
                highlight: s.highlight,
            })
        })
        .collect();

    // Stable: equal tier and score keep catalog order
    matches.sort_by(|a, b| a.tier.cmp(&b.tier).then(b.score.cmp(&a.score)));
    matches.truncate(limit);
    matches
}
