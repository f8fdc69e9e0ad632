use crate::core::{render, stats, BlogReport, ConfigProvider, MatchRecord, Pipeline, Storage};
use crate::utils::error::{EtlError, Result};
use chrono::Local;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Row shape of the finished-matches feed. Serde matches on the feed's header
/// names; columns the generator never reads are ignored by the csv reader.
/// Every field is optional so one incomplete row degrades to a skip instead of
/// aborting the whole run.
#[derive(Debug, Deserialize)]
struct RawMatchRow {
    #[serde(rename = "Date")]
    date: Option<String>,
    #[serde(rename = "HOME")]
    home: Option<String>,
    #[serde(rename = "AWAY")]
    away: Option<String>,
    #[serde(rename = "H_GOALS")]
    home_goals: Option<f64>,
    #[serde(rename = "A_GOALS")]
    away_goals: Option<f64>,
}

impl RawMatchRow {
    fn into_match_record(self) -> Option<MatchRecord> {
        Some(MatchRecord {
            date: self.date?,
            home_team: self.home?,
            away_team: self.away?,
            // Goals arrive as "2" or "2.0" depending on how the feed was
            // exported; they are whole numbers either way.
            home_goals: self.home_goals? as i64,
            away_goals: self.away_goals? as i64,
        })
    }
}

pub struct BlogPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> BlogPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BlogPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<MatchRecord>> {
        let url = self.config.csv_url();
        tracing::debug!("Fetching match data from: {}", url);

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.config.request_timeout_secs()))
            .send()
            .await?;

        tracing::debug!("CSV response status: {}", response.status());
        if !response.status().is_success() {
            return Err(EtlError::ProcessingError {
                message: format!("CSV request failed with status: {}", response.status()),
            });
        }

        let body = response.text().await?;

        let mut records = Vec::new();
        let mut skipped = 0usize;
        let mut reader = csv::ReaderBuilder::new().from_reader(body.as_bytes());

        for (index, row) in reader.deserialize::<RawMatchRow>().enumerate() {
            match row {
                Ok(raw) => match raw.into_match_record() {
                    Some(record) => records.push(record),
                    None => {
                        skipped += 1;
                        tracing::warn!(
                            "Skipping CSV row {}: missing date, team or goals",
                            index + 1
                        );
                    }
                },
                Err(e) => {
                    skipped += 1;
                    tracing::warn!("Skipping CSV row {}: {}", index + 1, e);
                }
            }
        }

        if skipped > 0 {
            tracing::warn!("Skipped {} of {} CSV rows", skipped, records.len() + skipped);
        }

        Ok(records)
    }

    async fn transform(&self, records: Vec<MatchRecord>) -> Result<BlogReport> {
        stats::build_report(&records)
    }

    async fn load(&self, report: BlogReport) -> Result<String> {
        let template_path = self.config.template_path();
        let template_bytes = self.storage.read_file(template_path).await?;
        let template = String::from_utf8(template_bytes).map_err(|_| EtlError::TemplateError {
            message: format!("Template {} is not valid UTF-8", template_path),
        })?;

        let last_updated = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let html = render::render_page(&template, &report, &last_updated)?;

        let output_path = self.config.output_path();
        self.storage
            .write_file(output_path, html.as_bytes())
            .await?;

        Ok(output_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[derive(Clone)]
    struct TestConfig {
        csv_url: String,
    }

    impl ConfigProvider for TestConfig {
        fn csv_url(&self) -> &str {
            &self.csv_url
        }

        fn template_path(&self) -> &str {
            "template.html"
        }

        fn output_path(&self) -> &str {
            "index.html"
        }

        fn request_timeout_secs(&self) -> u64 {
            5
        }
    }

    fn pipeline_for(server_url: String) -> (BlogPipeline<MockStorage, TestConfig>, MockStorage) {
        let storage = MockStorage::new();
        let pipeline = BlogPipeline::new(storage.clone(), TestConfig { csv_url: server_url });
        (pipeline, storage)
    }

    #[tokio::test]
    async fn test_extract_parses_rows_and_ignores_extra_columns() {
        let server = MockServer::start();
        let csv_body = "\
Date,LEAGUE,HOME,AWAY,H_GOALS,A_GOALS,ODDS
2026-08-20,EPL,Arsenal,Chelsea,3,1,1.5
2026-08-21,EPL,Chelsea,Spurs,2,2,2.1
";
        let csv_mock = server.mock(|when, then| {
            when.method(GET).path("/matches.csv");
            then.status(200)
                .header("Content-Type", "text/csv")
                .body(csv_body);
        });

        let (pipeline, _) = pipeline_for(server.url("/matches.csv"));
        let records = pipeline.extract().await.unwrap();

        csv_mock.assert();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].home_team, "Arsenal");
        assert_eq!(records[0].away_team, "Chelsea");
        assert_eq!(records[0].home_goals, 3);
        assert_eq!(records[0].away_goals, 1);
        assert_eq!(records[1].date, "2026-08-21");
    }

    #[tokio::test]
    async fn test_extract_skips_malformed_rows() {
        let server = MockServer::start();
        // Row 2 has no goals, row 3 has a non-numeric goal count.
        let csv_body = "\
Date,HOME,AWAY,H_GOALS,A_GOALS
2026-08-20,Arsenal,Chelsea,3,1
2026-08-21,Chelsea,Spurs,,
2026-08-22,Spurs,Arsenal,x,2
";
        server.mock(|when, then| {
            when.method(GET).path("/matches.csv");
            then.status(200).body(csv_body);
        });

        let (pipeline, _) = pipeline_for(server.url("/matches.csv"));
        let records = pipeline.extract().await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].home_team, "Arsenal");
    }

    #[tokio::test]
    async fn test_extract_accepts_float_formatted_goals() {
        let server = MockServer::start();
        let csv_body = "\
Date,HOME,AWAY,H_GOALS,A_GOALS
2026-08-20,Arsenal,Chelsea,3.0,1.0
";
        server.mock(|when, then| {
            when.method(GET).path("/matches.csv");
            then.status(200).body(csv_body);
        });

        let (pipeline, _) = pipeline_for(server.url("/matches.csv"));
        let records = pipeline.extract().await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].home_goals, 3);
        assert_eq!(records[0].away_goals, 1);
    }

    #[tokio::test]
    async fn test_extract_fails_on_http_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/matches.csv");
            then.status(500);
        });

        let (pipeline, _) = pipeline_for(server.url("/matches.csv"));
        let err = pipeline.extract().await.unwrap_err();

        match err {
            EtlError::ProcessingError { message } => assert!(message.contains("500")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_renders_template_through_storage() {
        let (pipeline, storage) = pipeline_for("http://unused.invalid".to_string());
        storage
            .put_file(
                "template.html",
                b"updated {{last_updated}}\n{{team_summary_rows}}\n{{interesting_findings}}",
            )
            .await;

        let report = BlogReport {
            summaries: vec![crate::core::TeamSummary {
                team: "Arsenal".to_string(),
                matches_played: 2,
                total_goals_for: 5,
                total_goals_against: 1,
                total_wins: 2,
                win_rate: 1.0,
            }],
            findings: vec!["Arsenal lead the table.".to_string()],
        };

        let path = pipeline.load(report).await.unwrap();
        assert_eq!(path, "index.html");

        let html = String::from_utf8(storage.get_file("index.html").await.unwrap()).unwrap();
        assert!(html.contains(
            "<tr><td>Arsenal</td><td>2</td><td>5</td><td>1</td><td>2</td><td>1.00</td></tr>"
        ));
        assert!(html.contains("<li>Arsenal lead the table.</li>"));
        assert!(!html.contains("{{"));
    }

    #[tokio::test]
    async fn test_load_fails_when_template_missing() {
        let (pipeline, _) = pipeline_for("http://unused.invalid".to_string());

        let report = BlogReport {
            summaries: vec![],
            findings: vec![],
        };

        let err = pipeline.load(report).await.unwrap_err();
        assert!(matches!(err, EtlError::IoError(_)));
    }
}
