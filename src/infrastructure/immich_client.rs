//! Blocking HTTP client for the Immich report and asset endpoints.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;

use crate::application::ports::ImmichApi;
use crate::domain::{AppError, DeleteError, OrphanEntity, OrphanReport, Result};

/// Header Immich reads API keys from.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Body of `DELETE /api/assets`.
#[derive(Debug, Serialize)]
struct DeleteAssetsRequest<'a> {
    force: bool,
    ids: [&'a str; 1],
}

/// `ImmichApi` over HTTP.
pub struct HttpImmichClient {
    client: Client,
    base_url: String,
}

impl HttpImmichClient {
    /// Create a client for `base_url` (`scheme://host[:port]`).
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Http {
                message: e.to_string(),
                source: Some(e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/api/{endpoint}", self.base_url)
    }
}

impl ImmichApi for HttpImmichClient {
    fn fetch_report(&self, admin_api_key: &str) -> Result<Vec<OrphanEntity>> {
        let url = self.api_url("reports");
        tracing::debug!(%url, "Requesting file report");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, admin_api_key)
            .send()
            .map_err(AppError::fetch)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch_status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            ));
        }

        let report: OrphanReport = response.json().map_err(AppError::fetch)?;
        let (orphans, skipped_assets) = report.into_entities();
        if skipped_assets > 0 {
            tracing::warn!(skipped_assets, "Ignoring asset records without an entityId");
        }
        tracing::info!(orphans = orphans.len(), "File report received");

        Ok(orphans)
    }

    fn delete_asset(
        &self,
        user_api_key: &str,
        entity_id: &str,
    ) -> std::result::Result<(), DeleteError> {
        let body = DeleteAssetsRequest {
            force: true,
            ids: [entity_id],
        };

        let response = self
            .client
            .delete(self.api_url("assets"))
            .header(API_KEY_HEADER, user_api_key)
            .json(&body)
            .send()
            .map_err(|e| DeleteError::Failed {
                entity_id: entity_id.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(entity_id, "Asset deleted");
            Ok(())
        } else {
            Err(DeleteError::from_status(
                entity_id,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned response and hand back the raw request.
    fn serve_once(status_line: &str, body: &str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut head = String::new();
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap();
                }
                head.push_str(&line);
                if line == "\r\n" || line.is_empty() {
                    break;
                }
            }
            let mut body = vec![0; content_length];
            reader.read_exact(&mut body).unwrap();

            let mut stream = stream;
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            head + &String::from_utf8(body).unwrap()
        });

        (base, handle)
    }

    fn client(base: &str) -> HttpImmichClient {
        HttpImmichClient::new(base, Some(Duration::from_secs(5))).unwrap()
    }

    #[test]
    fn test_fetch_report_sends_admin_key() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"orphans":[{"pathValue":"upload/a.jpg","entityId":"a1","entityType":"asset"}]}"#,
        );

        let orphans = client(&base).fetch_report("admin-key").unwrap();
        let request = server.join().unwrap().to_ascii_lowercase();

        assert!(request.starts_with("get /api/reports http/1.1"));
        assert!(request.contains("x-api-key: admin-key"));
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].entity_id, "a1");
    }

    #[test]
    fn test_fetch_report_tolerates_malformed_non_assets() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"orphans":[
                {"pathValue":"thumbs/x.jpg","entityType":"person"},
                {"pathValue":null,"entityId":"p2","entityType":"person"},
                {"pathValue":"upload/a.jpg","entityId":"a1","entityType":"asset"}
            ]}"#,
        );

        let orphans = client(&base).fetch_report("admin-key").unwrap();
        server.join().unwrap();

        let assets: Vec<_> = orphans
            .iter()
            .filter(|e| e.entity_type == "asset")
            .map(|e| e.entity_id.as_str())
            .collect();
        assert_eq!(assets, ["a1"]);
    }

    #[test]
    fn test_fetch_report_non_success_is_fetch_error() {
        let (base, server) = serve_once("401 Unauthorized", r#"{"message":"Invalid API key"}"#);

        let err = client(&base).fetch_report("bad").unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, AppError::Fetch { .. }));
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_fetch_report_bad_body_is_fetch_error() {
        let (base, server) = serve_once("200 OK", "<html>not json</html>");

        let err = client(&base).fetch_report("admin").unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, AppError::Fetch { .. }));
    }

    #[test]
    fn test_delete_sends_force_body_with_user_key() {
        let (base, server) = serve_once("204 No Content", "");

        client(&base).delete_asset("user-key", "a1").unwrap();
        let request = server.join().unwrap();
        let lower = request.to_ascii_lowercase();

        assert!(lower.starts_with("delete /api/assets http/1.1"));
        assert!(lower.contains("x-api-key: user-key"));
        assert!(lower.contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"force":true,"ids":["a1"]}"#));
    }

    #[test]
    fn test_delete_400_is_key_mismatch() {
        let (base, server) = serve_once("400 Bad Request", r#"{"message":"Not found or no asset.delete access"}"#);

        let err = client(&base).delete_asset("user", "a1").unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, DeleteError::ApiKeyMismatch { .. }));
    }

    #[test]
    fn test_delete_500_is_generic_failure() {
        let (base, server) = serve_once("500 Internal Server Error", "{}");

        let err = client(&base).delete_asset("user", "a1").unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, DeleteError::Failed { .. }));
    }

    #[test]
    fn test_unreachable_server_is_fetch_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = client(&base).fetch_report("admin").unwrap_err();
        assert!(matches!(err, AppError::Fetch { .. }));
    }

    #[test]
    fn test_api_url() {
        let client = client("http://immich:2283/");
        assert_eq!(client.api_url("reports"), "http://immich:2283/api/reports");
    }
}
