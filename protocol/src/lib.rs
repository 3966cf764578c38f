use thiserror::Error;

pub mod endpoint;
pub mod model;
pub mod sanitize;
pub mod validate;

pub use endpoint::{ApiRequest, Endpoint};
pub use model::{
    AdvancedBattle, BattleReport, BattleVerdict, CatalogEntry, CatalogPage, FinalHp, RankedEntry,
    Rankings, RankingCriteria, SimilarMatch, SimilarMetadata, SimilarResults, Stat, StatBlock,
};
pub use sanitize::{escape_html, sanitize, sanitize_url};
pub use validate::{
    LimitInput, ValidationError, parse_stats_string, validate_level, validate_limit,
    validate_name, validate_search_query, validate_stats_string,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Stat {stat} value {value} is out of range (0-999)")]
    StatOutOfRange { stat: &'static str, value: i64 },

    #[error("Unknown ranking criteria: {0}")]
    UnknownCriteria(String),
}
