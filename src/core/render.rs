use crate::domain::model::{BlogReport, TeamSummary};
use crate::utils::error::{EtlError, Result};
use regex::Regex;

/// Minimal escaping for text interpolated into the page. Team names come from
/// an external feed and go straight into markup otherwise.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// One `<tr>` per team, cells in the template's column order: team, matches
/// played, goals for, goals against, wins, win rate.
pub fn summary_rows(summaries: &[TeamSummary]) -> String {
    let rows: Vec<String> = summaries
        .iter()
        .map(|s| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td></tr>",
                escape_html(&s.team),
                s.matches_played,
                s.total_goals_for,
                s.total_goals_against,
                s.total_wins,
                s.win_rate
            )
        })
        .collect();
    rows.join("\n")
}

pub fn findings_list(findings: &[String]) -> String {
    findings
        .iter()
        .map(|f| format!("<li>{}</li>", escape_html(f)))
        .collect()
}

/// Fill the template's placeholders and fail on any that remain, so a template
/// that drifted out of sync with the generator aborts the run instead of
/// publishing a page with literal `{{...}}` markers in it.
pub fn render_page(template: &str, report: &BlogReport, last_updated: &str) -> Result<String> {
    let html = template
        .replace("{{last_updated}}", last_updated)
        .replace("{{team_summary_rows}}", &summary_rows(&report.summaries))
        .replace(
            "{{interesting_findings}}",
            &findings_list(&report.findings),
        );

    let placeholder = Regex::new(r"\{\{[^{}]*\}\}").unwrap();
    let unresolved: Vec<&str> = placeholder.find_iter(&html).map(|m| m.as_str()).collect();
    if !unresolved.is_empty() {
        return Err(EtlError::TemplateError {
            message: format!(
                "Unresolved placeholders in template: {}",
                unresolved.join(", ")
            ),
        });
    }

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(team: &str, played: u64, gf: i64, ga: i64, wins: u64, rate: f64) -> TeamSummary {
        TeamSummary {
            team: team.to_string(),
            matches_played: played,
            total_goals_for: gf,
            total_goals_against: ga,
            total_wins: wins,
            win_rate: rate,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Brighton & Hove"), "Brighton &amp; Hove");
        assert_eq!(escape_html("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_summary_rows_markup() {
        let rows = summary_rows(&[summary("Arsenal", 2, 5, 1, 2, 1.0)]);
        assert_eq!(
            rows,
            "<tr><td>Arsenal</td><td>2</td><td>5</td><td>1</td><td>2</td><td>1.00</td></tr>"
        );
    }

    #[test]
    fn test_summary_rows_one_line_per_team() {
        let rows = summary_rows(&[
            summary("Arsenal", 2, 5, 1, 2, 1.0),
            summary("Chelsea", 2, 3, 5, 0, 0.0),
        ]);
        assert_eq!(rows.lines().count(), 2);
        assert!(rows.contains("<td>0.00</td>"));
    }

    #[test]
    fn test_summary_rows_escape_team_names() {
        let rows = summary_rows(&[summary("A&B <FC>", 1, 0, 0, 0, 0.0)]);
        assert!(rows.contains("<td>A&amp;B &lt;FC&gt;</td>"));
    }

    #[test]
    fn test_findings_list_concatenates_items() {
        let list = findings_list(&["first".to_string(), "second".to_string()]);
        assert_eq!(list, "<li>first</li><li>second</li>");
    }

    #[test]
    fn test_render_page_fills_all_placeholders() {
        let template =
            "<p>{{last_updated}}</p><table>{{team_summary_rows}}</table><ul>{{interesting_findings}}</ul>";
        let report = BlogReport {
            summaries: vec![summary("Arsenal", 2, 5, 1, 2, 1.0)],
            findings: vec!["Arsenal lead.".to_string()],
        };

        let html = render_page(template, &report, "2026-08-23 06:00:00").unwrap();

        assert!(html.contains("<p>2026-08-23 06:00:00</p>"));
        assert!(html.contains("<td>Arsenal</td>"));
        assert!(html.contains("<li>Arsenal lead.</li>"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_render_page_rejects_unknown_placeholder() {
        let template = "{{last_updated}} {{surprise}}";
        let report = BlogReport {
            summaries: vec![],
            findings: vec![],
        };

        let err = render_page(template, &report, "now").unwrap_err();
        match err {
            EtlError::TemplateError { message } => assert!(message.contains("{{surprise}}")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
