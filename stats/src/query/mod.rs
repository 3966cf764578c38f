//! Query helpers over a loaded catalog
//!
//! Everything here runs in memory against an already fetched catalog and
//! never touches the network.

mod fuzzy;

pub use fuzzy::{
    MAX_SUGGESTIONS, MatchResult, MatchTier, NameScore, Span, rank, rank_with_limit, score,
};
