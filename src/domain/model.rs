/// One finished match as published in the source CSV. The date is kept as the
/// raw string from the feed; nothing downstream interprets it as a date.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: i64,
    pub away_goals: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

/// One match seen from a single team's perspective. Every `MatchRecord`
/// expands into two of these, one for the home side and one for the away side.
#[derive(Debug, Clone)]
pub struct TeamMatch {
    pub team: String,
    pub goals_for: i64,
    pub goals_against: i64,
    pub outcome: Outcome,
}

impl TeamMatch {
    pub fn new(team: &str, goals_for: i64, goals_against: i64) -> Self {
        let outcome = match goals_for - goals_against {
            d if d > 0 => Outcome::Win,
            0 => Outcome::Draw,
            _ => Outcome::Loss,
        };
        Self {
            team: team.to_string(),
            goals_for,
            goals_against,
            outcome,
        }
    }
}

/// Per-team aggregate over all finished matches. `win_rate` is stored already
/// rounded to two decimals; display formatting adds no further rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSummary {
    pub team: String,
    pub matches_played: u64,
    pub total_goals_for: i64,
    pub total_goals_against: i64,
    pub total_wins: u64,
    pub win_rate: f64,
}

/// Transform output: summaries in team-name order plus the findings rendered
/// into the page's list section.
#[derive(Debug, Clone)]
pub struct BlogReport {
    pub summaries: Vec<TeamSummary>,
    pub findings: Vec<String>,
}
