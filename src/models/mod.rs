use serde::{Deserialize, Serialize};

/// One row of a season's league table.
///
/// Columns map 1:1 onto fields. Derived values (`goal_difference`, `points`)
/// are whatever the store holds; nothing here recomputes them. Only the key
/// columns are NOT NULL, a missing cell serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StandingRecord {
    pub season: i64,
    pub position: i64,
    pub team: Option<String>,
    pub games_played: Option<i64>,
    pub wins: Option<i64>,
    pub draws: Option<i64>,
    pub losses: Option<i64>,
    pub goals_for: Option<i64>,
    pub goals_against: Option<i64>,
    pub goal_difference: Option<i64>,
    pub points: Option<i64>,
}

/// Response for the connectivity probe
#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectionTestResponse {
    pub message: String,
    pub result: i64,
}

/// Response wrapper for table introspection
#[derive(Debug, Serialize, Deserialize)]
pub struct TablesResponse {
    pub tables: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standing_serializes_all_fields_in_camel_case() {
        let record = StandingRecord {
            season: 2012,
            position: 1,
            team: Some("Manchester City".to_string()),
            games_played: Some(38),
            wins: Some(28),
            draws: Some(5),
            losses: Some(5),
            goals_for: Some(93),
            goals_against: Some(29),
            goal_difference: Some(64),
            points: Some(89),
        };

        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 11);
        assert_eq!(json["gamesPlayed"], 38);
        assert_eq!(json["goalsFor"], 93);
        assert_eq!(json["goalsAgainst"], 29);
        assert_eq!(json["goalDifference"], 64);
        assert_eq!(json["team"], "Manchester City");
    }

    #[test]
    fn missing_cells_serialize_as_null() {
        let record = StandingRecord {
            season: 2014,
            position: 20,
            team: None,
            games_played: None,
            wins: None,
            draws: None,
            losses: None,
            goals_for: None,
            goals_against: None,
            goal_difference: None,
            points: None,
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json.as_object().unwrap().len(), 11);
        assert!(json["team"].is_null());
        assert!(json["points"].is_null());
        assert_eq!(json["position"], 20);
    }
}
