use crate::domain::model::{BlogReport, MatchRecord, Outcome, TeamMatch, TeamSummary};
use crate::utils::error::{EtlError, Result};
use std::collections::BTreeMap;

/// Expand each match into two team-centric rows, one per side.
pub fn team_matches(records: &[MatchRecord]) -> Vec<TeamMatch> {
    let mut rows = Vec::with_capacity(records.len() * 2);
    for m in records {
        rows.push(TeamMatch::new(&m.home_team, m.home_goals, m.away_goals));
        rows.push(TeamMatch::new(&m.away_team, m.away_goals, m.home_goals));
    }
    rows
}

#[derive(Default)]
struct TeamAccumulator {
    played: u64,
    goals_for: i64,
    goals_against: i64,
    wins: u64,
}

/// Aggregate team rows into one summary per team, in team-name order.
pub fn summarize(matches: &[TeamMatch]) -> Vec<TeamSummary> {
    let mut teams: BTreeMap<&str, TeamAccumulator> = BTreeMap::new();

    for m in matches {
        let acc = teams.entry(m.team.as_str()).or_default();
        acc.played += 1;
        acc.goals_for += m.goals_for;
        acc.goals_against += m.goals_against;
        if m.outcome == Outcome::Win {
            acc.wins += 1;
        }
    }

    teams
        .into_iter()
        .map(|(team, acc)| TeamSummary {
            team: team.to_string(),
            matches_played: acc.played,
            total_goals_for: acc.goals_for,
            total_goals_against: acc.goals_against,
            total_wins: acc.wins,
            win_rate: round2(acc.wins as f64 / acc.played as f64),
        })
        .collect()
}

/// Findings for the page's list section. Currently one: the team with the
/// highest win rate. Ties go to the first team in name order so repeated runs
/// over the same data produce the same page.
pub fn findings(summaries: &[TeamSummary]) -> Vec<String> {
    let mut findings = Vec::new();

    let mut top: Option<&TeamSummary> = None;
    for summary in summaries {
        let better = match top {
            Some(current) => summary.win_rate > current.win_rate,
            None => true,
        };
        if better {
            top = Some(summary);
        }
    }

    if let Some(top) = top {
        findings.push(format!(
            "The team with the highest win rate is {} with a win rate of {:.2}.",
            top.team, top.win_rate
        ));
    }

    findings
}

pub fn build_report(records: &[MatchRecord]) -> Result<BlogReport> {
    if records.is_empty() {
        return Err(EtlError::ProcessingError {
            message: "No match records to summarize".to_string(),
        });
    }

    let rows = team_matches(records);
    let summaries = summarize(&rows);
    let findings = findings(&summaries);

    Ok(BlogReport {
        summaries,
        findings,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
