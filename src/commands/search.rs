// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model search command
//!
//! Queries the HuggingFace Hub for models matching a query string and
//! prints the most-downloaded matches. One request per invocation; no
//! retries, no pagination, no caching.

use std::io::Write;

use crate::cli::SearchArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::hub::{HubClient, ModelSummary};

/// Number of results requested from the hub
const RESULT_LIMIT: usize = 10;

/// Maximum number of tags shown per result
const MAX_TAGS_SHOWN: usize = 5;

/// Width of the divider between result blocks
const DIVIDER_WIDTH: usize = 20;

/// Execute the search command.
pub async fn execute(args: &SearchArgs, settings: &Settings, out: &mut impl Write) -> Result<()> {
    let client = HubClient::new(&settings.hub)?;
    run(&args.query, &client, out).await
}

/// Query the hub and render the results.
///
/// Split from [`execute`] so tests can point the client at a mock
/// server and capture the writer.
pub(crate) async fn run(query: &str, client: &HubClient, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Searching the HuggingFace Hub for '{}'...", query)?;

    let models = client.search(query, RESULT_LIMIT).await?;
    render_results(&models, out)
}

fn render_results(models: &[ModelSummary], out: &mut impl Write) -> Result<()> {
    if models.is_empty() {
        writeln!(out, "No models found matching your query.")?;
        return Ok(());
    }

    writeln!(out, "\nTop {} results (sorted by downloads):\n", models.len())?;
    for model in models {
        writeln!(out, "  ID: {}", model.id)?;
        if let Some(ref author) = model.author {
            writeln!(out, "  Author: {}", author)?;
        }
        if !model.tags.is_empty() {
            let shown: Vec<&str> = model
                .tags
                .iter()
                .take(MAX_TAGS_SHOWN)
                .map(String::as_str)
                .collect();
            writeln!(out, "  Tags: {}", shown.join(", "))?;
        }
        writeln!(out, "{}", "-".repeat(DIVIDER_WIDTH))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HubConfig;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(mock_server: &MockServer) -> HubClient {
        HubClient::new(&HubConfig {
            endpoint: mock_server.uri(),
            token: None,
            timeout_secs: 5,
        })
        .unwrap()
    }

    fn summary(id: &str, author: Option<&str>, tags: &[&str]) -> ModelSummary {
        ModelSummary {
            id: id.to_string(),
            author: author.map(String::from),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            downloads: None,
        }
    }

    #[tokio::test]
    async fn test_search_success_renders_results() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/models"))
            .and(query_param("search", "test-query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "test/model-1", "author": "tester1", "tags": ["test", "text-generation"]},
                {"id": "test/model-2", "author": "tester2", "tags": ["test", "image-generation"]}
            ])))
            .mount(&mock_server)
            .await;

        let mut out = Vec::new();
        run("test-query", &client_for(&mock_server), &mut out)
            .await
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Searching the HuggingFace Hub for 'test-query'..."));
        assert!(output.contains("Top 2 results (sorted by downloads):"));
        assert!(output.contains("ID: test/model-1"));
        assert!(output.contains("Author: tester1"));
        assert!(output.contains("ID: test/model-2"));
        assert!(output.contains("Author: tester2"));
        assert!(output.contains("Tags: test, text-generation"));
    }

    #[tokio::test]
    async fn test_search_no_results() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let mut out = Vec::new();
        run("empty-query", &client_for(&mock_server), &mut out)
            .await
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("No models found matching your query."));
        assert!(!output.contains("ID:"));
    }

    #[tokio::test]
    async fn test_search_requests_fixed_limit() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/models"))
            .and(query_param("limit", "10"))
            .and(query_param("sort", "downloads"))
            .and(query_param("direction", "-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut out = Vec::new();
        run("anything", &client_for(&mock_server), &mut out)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_search_hub_failure_propagates() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/models"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let mut out = Vec::new();
        let err = run("llama", &client_for(&mock_server), &mut out)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("500"));
        // The header prints before the request; no result blocks follow.
        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("ID:"));
    }

    #[test]
    fn test_render_truncates_tags_to_five() {
        let models = vec![summary(
            "big/model",
            Some("big"),
            &["t1", "t2", "t3", "t4", "t5", "t6", "t7"],
        )];

        let mut out = Vec::new();
        render_results(&models, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Tags: t1, t2, t3, t4, t5\n"));
        assert!(!output.contains("t6"));
    }

    #[test]
    fn test_render_omits_missing_author_and_tags() {
        let models = vec![summary("anon/model", None, &[])];

        let mut out = Vec::new();
        render_results(&models, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("ID: anon/model"));
        assert!(!output.contains("Author:"));
        assert!(!output.contains("Tags:"));
    }

    #[test]
    fn test_render_divider_per_result() {
        let models = vec![
            summary("a/one", None, &[]),
            summary("b/two", None, &[]),
            summary("c/three", None, &[]),
        ];

        let mut out = Vec::new();
        render_results(&models, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let dividers = output.matches(&"-".repeat(20)).count();
        assert_eq!(dividers, 3);
    }
}
