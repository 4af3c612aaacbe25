use serde::Deserialize;
use thiserror::Error;

/// Raised when a request cannot be turned into a filter at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("missing required parameter `{0}`")]
    MissingRequiredParameter(&'static str),
}

/// How the `team` column is matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamFilter {
    /// Case-insensitive substring
    Contains(String),
    /// Exact, case-sensitive name
    Exact(String),
}

/// Resolved constraints for a single request. Every field is optional and
/// each one that is set narrows the result set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub season: Option<i64>,
    pub team: Option<TeamFilter>,
    pub min_points: Option<i64>,
    pub max_position: Option<i64>,
    pub season_start: Option<i64>,
    pub season_end: Option<i64>,
    pub position_start: Option<i64>,
    pub position_end: Option<i64>,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Query string pairs in request order.
///
/// Captured as raw strings so that neither a malformed number nor a repeated
/// key can reject the request. The first occurrence of a key wins.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Lenient integer coercion. Unparseable input and zero both mean "no filter".
    fn int(&self, key: &str) -> Option<i64> {
        self.first(key)
            .and_then(|value| value.trim().parse::<i64>().ok())
            .filter(|value| *value != 0)
    }

    fn text(&self, key: &str) -> Option<String> {
        self.first(key)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// GET /standings: `season`, `team`, `min_points`, `max_position`
pub fn resolve_standings(params: &QueryParams) -> FilterSpec {
    FilterSpec {
        season: params.int("season"),
        team: params.text("team").map(TeamFilter::Contains),
        min_points: params.int("min_points"),
        max_position: params.int("max_position"),
        ..Default::default()
    }
}

/// The season path value is always applied, including zero.
pub fn resolve_season(season: i64) -> FilterSpec {
    FilterSpec {
        season: Some(season),
        ..Default::default()
    }
}

/// GET /team: `name` (required), `season`
pub fn resolve_team(params: &QueryParams) -> Result<FilterSpec, FilterError> {
    let name = params
        .text("name")
        .ok_or(FilterError::MissingRequiredParameter("name"))?;

    Ok(FilterSpec {
        season: params.int("season"),
        team: Some(TeamFilter::Exact(name)),
        ..Default::default()
    })
}

/// GET /search: `team`, `season_start`, `season_end`, `position_start`, `position_end`
pub fn resolve_search(params: &QueryParams) -> FilterSpec {
    FilterSpec {
        team: params.text("team").map(TeamFilter::Contains),
        season_start: params.int("season_start"),
        season_end: params.int("season_end"),
        position_start: params.int("position_start"),
        position_end: params.int("position_end"),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn no_params_resolve_to_empty_spec() {
        assert!(resolve_standings(&QueryParams::default()).is_empty());
        assert!(resolve_search(&QueryParams::default()).is_empty());
    }

    #[test]
    fn standings_params_are_parsed() {
        let spec = resolve_standings(&params(&[
            ("season", "2015"),
            ("team", "ars"),
            ("min_points", "60"),
            ("max_position", " 4 "),
        ]));

        assert_eq!(spec.season, Some(2015));
        assert_eq!(spec.team, Some(TeamFilter::Contains("ars".into())));
        assert_eq!(spec.min_points, Some(60));
        assert_eq!(spec.max_position, Some(4));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert!(resolve_standings(&params(&[("page", "2"), ("sort", "points")])).is_empty());
    }

    #[test]
    fn first_value_of_repeated_key_wins() {
        let spec = resolve_standings(&params(&[("season", "2014"), ("season", "2013")]));
        assert_eq!(spec.season, Some(2014));

        let team = resolve_team(&params(&[("name", "Barcelona"), ("name", "X")])).unwrap();
        assert_eq!(team.team, Some(TeamFilter::Exact("Barcelona".into())));
    }

    #[test]
    fn malformed_numbers_are_dropped() {
        let spec = resolve_standings(&params(&[
            ("season", "twenty"),
            ("min_points", "1.5"),
            ("max_position", ""),
        ]));

        assert!(spec.is_empty());
    }

    #[test]
    fn zero_collapses_to_absent() {
        let spec = resolve_standings(&params(&[("min_points", "0"), ("max_position", "0")]));

        assert_eq!(spec, FilterSpec::default());
    }

    #[test]
    fn negative_numbers_pass_through() {
        assert_eq!(
            resolve_search(&params(&[("position_end", "-3")])).position_end,
            Some(-3)
        );
    }

    #[test]
    fn season_path_keeps_zero() {
        assert_eq!(resolve_season(0).season, Some(0));
    }

    #[test]
    fn team_requires_name() {
        let missing = resolve_team(&params(&[("season", "2010")]));
        assert_eq!(missing, Err(FilterError::MissingRequiredParameter("name")));

        let empty = resolve_team(&params(&[("name", "")]));
        assert!(empty.is_err());
    }

    #[test]
    fn team_name_is_exact_match() {
        let spec = resolve_team(&params(&[("name", "Chelsea"), ("season", "abc")])).unwrap();

        assert_eq!(spec.team, Some(TeamFilter::Exact("Chelsea".into())));
        assert_eq!(spec.season, None);
    }

    #[test]
    fn search_ranges_are_parsed() {
        let spec = resolve_search(&params(&[
            ("season_start", "2010"),
            ("season_end", "2012"),
            ("position_start", "1"),
            ("position_end", "x"),
        ]));

        assert_eq!(spec.season_start, Some(2010));
        assert_eq!(spec.season_end, Some(2012));
        assert_eq!(spec.position_start, Some(1));
        assert_eq!(spec.position_end, None);
        assert_eq!(spec.team, None);
    }
}
