//! Domain types shared by the computation and client crates

mod catalog;
mod response;
mod stat;

pub use catalog::CatalogEntry;
pub use response::{
    AdvancedBattle, BattleReport, BattleVerdict, CatalogPage, FinalHp, RankedEntry, Rankings,
    RankingCriteria, SimilarMatch, SimilarMetadata, SimilarResults,
};
pub use stat::{Stat, StatBlock};
