use reqwest::Url;
use thiserror::Error;

use crate::models::comparison::{BenchmarkComparison, Revision};

pub const COMPARE_PATH: &str = "/api/microbench/compare";

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("invalid comparison endpoint {url}: {reason}")]
    Url { url: String, reason: String },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("malformed comparison payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Builds the comparison URL. The target revision goes into `rtag`, the
/// baseline into `ltag`.
pub fn compare_url(api_url: &str, from: &Revision, to: &Revision) -> Result<Url, CompareError> {
    let endpoint = format!("{}{COMPARE_PATH}", api_url.trim_end_matches('/'));
    Url::parse_with_params(
        &endpoint,
        &[
            ("rtag", to.commit_hash.as_str()),
            ("ltag", from.commit_hash.as_str()),
        ],
    )
    .map_err(|err| CompareError::Url {
        url: endpoint.clone(),
        reason: err.to_string(),
    })
}

/// Parses a comparison body. The backend answers `null` when nothing matched.
pub fn parse_comparison(body: &str) -> Result<Vec<BenchmarkComparison>, CompareError> {
    let rows: Option<Vec<BenchmarkComparison>> = serde_json::from_str(body)?;
    Ok(rows.unwrap_or_default())
}

pub async fn fetch_comparison(
    api_url: &str,
    from: &Revision,
    to: &Revision,
) -> Result<Vec<BenchmarkComparison>, CompareError> {
    let url = compare_url(api_url, from, to)?;
    let request_error = |source| CompareError::Request {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url.clone()).await.map_err(request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(CompareError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(request_error)?;
    parse_comparison(&body)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::RawQuery, http::StatusCode, routing::get, Router};

    use super::*;

    const ROW: &str = r#"{
        "PkgName": "pkg",
        "SubBenchmarkName": "BenchmarkA",
        "Last": {"Ops": 1, "NSPerOp": 2, "BytesPerOp": 3, "MBPerSec": 4, "AllocsPerOp": 5},
        "Current": {"Ops": 1, "NSPerOp": 2, "BytesPerOp": 3, "MBPerSec": 4, "AllocsPerOp": 5},
        "Diff": {"Ops": 0, "NSPerOp": 0, "BytesPerOp": 0, "MBPerSec": 0, "AllocsPerOp": 0}
    }"#;

    fn revisions() -> (Revision, Revision) {
        (Revision::new("aaa111", "base"), Revision::new("bbb222", "head"))
    }

    async fn serve(status: StatusCode, body: String) -> (String, Arc<Mutex<Option<String>>>) {
        let seen = Arc::new(Mutex::new(None));
        let recorder = seen.clone();
        let app = Router::new().route(
            COMPARE_PATH,
            get(move |RawQuery(query): RawQuery| {
                let recorder = recorder.clone();
                let body = body.clone();
                async move {
                    *recorder.lock().unwrap() = query;
                    (status, body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), seen)
    }

    #[test]
    fn target_goes_to_rtag_and_baseline_to_ltag() {
        let (from, to) = revisions();
        let url = compare_url("http://localhost:9090/", &from, &to).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9090/api/microbench/compare?rtag=bbb222&ltag=aaa111"
        );
    }

    #[test]
    fn rejects_unparsable_endpoint() {
        let (from, to) = revisions();
        assert!(matches!(
            compare_url("not a url", &from, &to),
            Err(CompareError::Url { .. })
        ));
    }

    #[test]
    fn null_payload_is_empty() {
        assert!(parse_comparison("null").unwrap().is_empty());
        assert!(parse_comparison("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(matches!(
            parse_comparison(r#"{"PkgName": 1}"#),
            Err(CompareError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn fetches_rows_with_revision_query() {
        let (api_url, seen) = serve(StatusCode::OK, format!("[{ROW},{ROW}]")).await;
        let (from, to) = revisions();

        let rows = fetch_comparison(&api_url, &from, &to).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sub_benchmark_name, "BenchmarkA");
        assert_eq!(
            seen.lock().unwrap().as_deref(),
            Some("rtag=bbb222&ltag=aaa111")
        );
    }

    #[tokio::test]
    async fn null_response_yields_no_rows() {
        let (api_url, _) = serve(StatusCode::OK, "null".into()).await;
        let (from, to) = revisions();

        assert!(fetch_comparison(&api_url, &from, &to)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let (api_url, _) = serve(StatusCode::INTERNAL_SERVER_ERROR, "boom".into()).await;
        let (from, to) = revisions();

        match fetch_comparison(&api_url, &from, &to).await {
            Err(CompareError::Status { status, .. }) => assert_eq!(status, 500),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_request_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let (from, to) = revisions();

        assert!(matches!(
            fetch_comparison(&format!("http://{addr}"), &from, &to).await,
            Err(CompareError::Request { .. })
        ));
    }
}
