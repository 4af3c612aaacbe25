//! Turns a [`FilterSpec`] into a single parameterized SELECT over `standings`.
//!
//! Every user-supplied value goes through `push_bind`; only fixed fragments
//! from this module are pushed as raw SQL.

use sqlx::{QueryBuilder, Sqlite};

use crate::filters::{FilterSpec, TeamFilter};

const SELECT_STANDINGS: &str = "SELECT season, position, team, games_played, wins, draws, losses, \
     goals_for, goals_against, goal_difference, points FROM standings";

/// One conjunctive clause of the WHERE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    SeasonEq(i64),
    SeasonAtLeast(i64),
    SeasonAtMost(i64),
    TeamContains(String),
    TeamEq(String),
    PointsAtLeast(i64),
    PositionAtLeast(i64),
    PositionAtMost(i64),
}

impl Predicate {
    fn push_to(&self, builder: &mut QueryBuilder<'static, Sqlite>) {
        match self {
            Predicate::SeasonEq(v) => builder.push("season = ").push_bind(*v),
            Predicate::SeasonAtLeast(v) => builder.push("season >= ").push_bind(*v),
            Predicate::SeasonAtMost(v) => builder.push("season <= ").push_bind(*v),
            Predicate::TeamContains(needle) => builder
                .push("unicode_lower(team) LIKE ")
                .push_bind(like_pattern(needle))
                .push(r" ESCAPE '\'"),
            Predicate::TeamEq(name) => builder.push("team = ").push_bind(name.clone()),
            Predicate::PointsAtLeast(v) => builder.push("points >= ").push_bind(*v),
            Predicate::PositionAtLeast(v) => builder.push("position >= ").push_bind(*v),
            Predicate::PositionAtMost(v) => builder.push("position <= ").push_bind(*v),
        };
    }
}

/// Lowercases a needle and wraps it in `%...%`, escaping LIKE wildcards so it
/// matches literally. The column side is folded by `unicode_lower`.
fn like_pattern(needle: &str) -> String {
    let needle = needle.to_lowercase();
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Result ordering. Each endpoint has its own fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Listing and search
    SeasonThenPosition,
    /// Single season table
    Position,
    /// Team history; position is deliberately not a tiebreaker
    Season,
}

impl SortOrder {
    fn as_sql(self) -> &'static str {
        match self {
            SortOrder::SeasonThenPosition => "season ASC, position ASC",
            SortOrder::Position => "position ASC",
            SortOrder::Season => "season ASC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsQuery {
    predicates: Vec<Predicate>,
    order: SortOrder,
}

impl StandingsQuery {
    pub fn new(spec: &FilterSpec, order: SortOrder) -> Self {
        Self {
            predicates: predicates(spec),
            order,
        }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn build(&self) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new(SELECT_STANDINGS);

        for (i, predicate) in self.predicates.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_to(&mut builder);
        }

        builder.push(" ORDER BY ").push(self.order.as_sql());
        builder
    }
}

/// Absent filters contribute nothing. Order is fixed so the SQL text is
/// stable for a given spec.
fn predicates(spec: &FilterSpec) -> Vec<Predicate> {
    let mut clauses = Vec::new();

    if let Some(season) = spec.season {
        clauses.push(Predicate::SeasonEq(season));
    }
    match &spec.team {
        Some(TeamFilter::Contains(needle)) => clauses.push(Predicate::TeamContains(needle.clone())),
        Some(TeamFilter::Exact(name)) => clauses.push(Predicate::TeamEq(name.clone())),
        None => {}
    }
    if let Some(points) = spec.min_points {
        clauses.push(Predicate::PointsAtLeast(points));
    }
    if let Some(position) = spec.max_position {
        clauses.push(Predicate::PositionAtMost(position));
    }
    if let Some(start) = spec.season_start {
        clauses.push(Predicate::SeasonAtLeast(start));
    }
    if let Some(end) = spec.season_end {
        clauses.push(Predicate::SeasonAtMost(end));
    }
    if let Some(start) = spec.position_start {
        clauses.push(Predicate::PositionAtLeast(start));
    }
    if let Some(end) = spec.position_end {
        clauses.push(Predicate::PositionAtMost(end));
    }

    clauses
}
