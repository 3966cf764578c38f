//! Response payloads of the remote stats service

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::catalog::CatalogEntry;
use super::stat::StatBlock;
use crate::ParseError;

/// Criteria accepted by the rankings endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingCriteria {
    #[default]
    Power,
    Total,
    Offensive,
    Defensive,
    Speed,
}

impl RankingCriteria {
    pub const ALL: [RankingCriteria; 5] = [
        RankingCriteria::Power,
        RankingCriteria::Total,
        RankingCriteria::Offensive,
        RankingCriteria::Defensive,
        RankingCriteria::Speed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RankingCriteria::Power => "power",
            RankingCriteria::Total => "total",
            RankingCriteria::Offensive => "offensive",
            RankingCriteria::Defensive => "defensive",
            RankingCriteria::Speed => "speed",
        }
    }

    /// What the service ranks by for this criteria
    pub fn description(self) -> &'static str {
        match self {
            RankingCriteria::Power => "Weighted score favoring offensive stats",
            RankingCriteria::Total => "Sum of all base stats",
            RankingCriteria::Offensive => "Attack + Special Attack + Speed bonus",
            RankingCriteria::Defensive => "HP + Defense + Special Defense",
            RankingCriteria::Speed => "Fastest Pokemon",
        }
    }
}

impl fmt::Display for RankingCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingCriteria {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        RankingCriteria::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| ParseError::UnknownCriteria(s.to_string()))
    }
}

/// `GET /pokemon/` and `GET /search_by_name/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub results: Vec<CatalogEntry>,
}

/// One hit of the stats-similarity search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarMatch {
    pub name: String,
    /// Similarity in 0..=1, higher is closer
    pub score: f64,
    /// Raw euclidean distance between stat vectors
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub metadata: SimilarMetadata,
}

/// Payload stored with a similarity hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarMetadata {
    #[serde(default)]
    pub stats: Option<StatBlock>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub sprite_url: Option<String>,
}

impl SimilarMatch {
    /// Base stats of the hit, when the service included them
    pub fn base_stats(&self) -> Option<StatBlock> {
        self.metadata.stats
    }
}

/// `GET /search_similar/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarResults {
    #[serde(default)]
    pub results: Vec<SimilarMatch>,
}

/// A catalog entry with the scores the rankings endpoint attaches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub power_score: f64,
    pub total_stats: u32,
    pub ranking_score: f64,
}

/// `GET /pokemon/top/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rankings {
    pub criteria: RankingCriteria,
    #[serde(default)]
    pub results: Vec<RankedEntry>,
}

/// `GET /simulate_battle/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleVerdict {
    pub result: String,
}

/// Remaining HP of both sides after an advanced battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalHp {
    pub pokemon_a: i64,
    pub pokemon_b: i64,
}

/// Turn-by-turn outcome of an advanced battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub result: String,
    #[serde(default)]
    pub battle_log: Vec<String>,
    #[serde(default)]
    pub final_hp: Option<FinalHp>,
    #[serde(default)]
    pub turns: Option<u32>,
}

/// `GET /battle_advanced/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedBattle {
    pub pokemon_a: String,
    pub pokemon_b: String,
    pub battle_result: BattleReport,
}
