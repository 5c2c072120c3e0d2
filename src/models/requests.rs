use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest city name accepted before a provider call is attempted
pub const MAX_CITY_LEN: u64 = 100;

/// Query string for `GET /results`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ResultsQuery {
    #[validate(length(max = MAX_CITY_LEN))]
    pub city: Option<String>,
    pub units: Option<String>,
}

/// Query string for `GET /comparison_results`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ComparisonQuery {
    #[validate(length(max = MAX_CITY_LEN))]
    pub city1: Option<String>,
    #[validate(length(max = MAX_CITY_LEN))]
    pub city2: Option<String>,
    pub units: Option<String>,
}
