//! Remote endpoints and the validated requests sent to them

use std::fmt;

use crate::model::RankingCriteria;
use crate::validate::{
    LimitInput, ValidationError, validate_limit, validate_name, validate_search_query,
    validate_stats_string,
};

/// Operations exposed by the stats service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// GET /pokemon/?limit=N
    Catalog,
    /// GET /search_by_name/?name=NAME&limit=N
    SearchByName,
    /// GET /search_similar/?stats=HP,ATK,DEF,SPA,SPD,SPE
    SearchSimilar,
    /// GET /pokemon/top/?criteria=CRITERIA&limit=N
    Rankings,
    /// GET /simulate_battle/?stats_a=...&stats_b=...
    SimulateBattle,
    /// GET /battle_advanced/?pokemon_a_name=A&pokemon_b_name=B
    AdvancedBattle,
    /// GET /search_moves/?query=QUERY&limit=N
    SearchMoves,
    /// GET /move_details/?name=NAME
    MoveDetails,
}

impl Endpoint {
    /// Path on the service, also used as the rate-limit key
    pub fn path(self) -> &'static str {
        match self {
            Self::Catalog => "/pokemon/",
            Self::SearchByName => "/search_by_name/",
            Self::SearchSimilar => "/search_similar/",
            Self::Rankings => "/pokemon/top/",
            Self::SimulateBattle => "/simulate_battle/",
            Self::AdvancedBattle => "/battle_advanced/",
            Self::SearchMoves => "/search_moves/",
            Self::MoveDetails => "/move_details/",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A request whose parameters have all passed validation.
///
/// The only way to build one is through the constructors below, each of
/// which runs the matching validators first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    endpoint: Endpoint,
    params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    fn new(endpoint: Endpoint, params: Vec<(&'static str, String)>) -> Self {
        Self { endpoint, params }
    }

    pub fn catalog<'a>(limit: impl Into<LimitInput<'a>>) -> Result<Self, ValidationError> {
        let limit = validate_limit(limit)?;
        Ok(Self::new(Endpoint::Catalog, vec![("limit", limit.to_string())]))
    }

    pub fn search_by_name<'a>(
        name: &str,
        limit: impl Into<LimitInput<'a>>,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(name)?;
        let limit = validate_limit(limit)?;
        Ok(Self::new(
            Endpoint::SearchByName,
            vec![("name", name), ("limit", limit.to_string())],
        ))
    }

    pub fn search_similar(stats: &str) -> Result<Self, ValidationError> {
        let stats = validate_stats_string(stats)?;
        Ok(Self::new(Endpoint::SearchSimilar, vec![("stats", stats)]))
    }

    pub fn top_pokemon<'a>(
        criteria: RankingCriteria,
        limit: impl Into<LimitInput<'a>>,
    ) -> Result<Self, ValidationError> {
        let limit = validate_limit(limit)?;
        Ok(Self::new(
            Endpoint::Rankings,
            vec![
                ("criteria", criteria.as_str().to_string()),
                ("limit", limit.to_string()),
            ],
        ))
    }

    pub fn simulate_battle(stats_a: &str, stats_b: &str) -> Result<Self, ValidationError> {
        let stats_a = validate_stats_string(stats_a)?;
        let stats_b = validate_stats_string(stats_b)?;
        Ok(Self::new(
            Endpoint::SimulateBattle,
            vec![("stats_a", stats_a), ("stats_b", stats_b)],
        ))
    }

    pub fn battle_advanced(name_a: &str, name_b: &str) -> Result<Self, ValidationError> {
        let name_a = validate_name(name_a)?;
        let name_b = validate_name(name_b)?;
        Ok(Self::new(
            Endpoint::AdvancedBattle,
            vec![("pokemon_a_name", name_a), ("pokemon_b_name", name_b)],
        ))
    }

    pub fn search_moves<'a>(
        query: &str,
        limit: impl Into<LimitInput<'a>>,
    ) -> Result<Self, ValidationError> {
        let query = validate_search_query(query)?;
        let limit = validate_limit(limit)?;
        Ok(Self::new(
            Endpoint::SearchMoves,
            vec![("query", query), ("limit", limit.to_string())],
        ))
    }

    /// Move names follow the same character rules as Pokemon names
    pub fn move_details(name: &str) -> Result<Self, ValidationError> {
        let name = validate_name(name)?;
        Ok(Self::new(Endpoint::MoveDetails, vec![("name", name)]))
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::Catalog.path(), "/pokemon/");
        assert_eq!(Endpoint::Rankings.path(), "/pokemon/top/");
        assert_eq!(Endpoint::AdvancedBattle.to_string(), "/battle_advanced/");
    }

    #[test]
    fn test_params_are_normalized() {
        let req = ApiRequest::search_by_name("  Pikachu ", "5").unwrap();
        assert_eq!(req.endpoint(), Endpoint::SearchByName);
        assert_eq!(
            req.params(),
            &[("name", "Pikachu".to_string()), ("limit", "5".to_string())]
        );

        let req = ApiRequest::simulate_battle(" 1, 2,3,4,5,6", "7,8,9,10,11,12").unwrap();
        assert_eq!(req.params()[0].1, "1,2,3,4,5,6");
    }

    #[test]
    fn test_invalid_arguments_never_build_a_request() {
        assert!(ApiRequest::catalog(0).is_err());
        assert!(ApiRequest::search_similar("1,2,3").is_err());
        assert!(ApiRequest::battle_advanced("pikachu", "<onix>").is_err());
        assert!(ApiRequest::search_moves("", 10).is_err());
    }

    #[test]
    fn test_rankings_request() {
        let req = ApiRequest::top_pokemon(RankingCriteria::Offensive, 10).unwrap();
        assert_eq!(req.params()[0], ("criteria", "offensive".to_string()));
    }
}
