//! HTTP client for the file and process services
//!
//! Three endpoints, as exposed by the backend:
//! - `GET  {file_service_url}/uploads`    -> `{ "files": [...] }`
//! - `POST {file_service_url}/upload`     -> `{ "filename": "..." }` (multipart, field `file`)
//! - `POST {process_service_url}/process` -> `{ "generated_text": "..." }` (JSON)

use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Timeout for the patent list request. Listing is a cheap directory read
/// on the server and should fail fast instead of waiting out the long
/// configurable timeout meant for generation and upload.
const LIST_TIMEOUT_SECS: u64 = 30;

/// JSON payload for the /process endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ProcessRequest {
    pub file_path: String,
    pub document_type: String,
    pub embedding_model_name: String,
    pub persist_directory: String,
    pub model_name: String,
    pub additional_info: String,
}

#[derive(Debug, Deserialize)]
struct UploadsResponse {
    files: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    filename: String,
}

#[derive(Debug, Deserialize)]
struct ProcessResponse {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Client for the file and process services
#[derive(Debug, Clone)]
pub struct ApiClient {
    file_service_url: String,
    process_service_url: String,
    timeout_secs: u64,
}

impl ApiClient {
    pub fn from_config(config: &Config) -> Self {
        Self {
            file_service_url: config.file_service_url.clone(),
            process_service_url: config.process_service_url.clone(),
            timeout_secs: config.request_timeout_secs,
        }
    }

    fn agent(&self, timeout_secs: u64) -> ureq::Agent {
        ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
    }

    /// Fetch the list of uploaded patent filenames
    pub fn list_uploads(&self) -> Result<Vec<String>> {
        let url = join_url(&self.file_service_url, "uploads");
        let agent = self.agent(LIST_TIMEOUT_SECS);

        let resp = agent
            .get(&url)
            .call()
            .map_err(|e| request_error("list uploads", e))?;

        let body: UploadsResponse = resp
            .into_json()
            .context("Failed to parse uploads response")?;
        Ok(body.files)
    }

    /// Upload a patent file as multipart form data (field `file`)
    ///
    /// Returns the filename assigned by the server.
    pub fn upload_file(&self, path: &Path) -> Result<String> {
        let data = fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow!("Invalid file name: {}", path.display()))?;

        let content_type = if filename.to_lowercase().ends_with(".pdf") {
            "application/pdf"
        } else {
            "application/octet-stream"
        };

        let boundary = multipart_boundary(&data);
        let body = multipart_body(&boundary, "file", filename, content_type, &data);

        let url = join_url(&self.file_service_url, "upload");
        let agent = self.agent(self.timeout_secs);

        let resp = agent
            .post(&url)
            .set(
                "Content-Type",
                &format!("multipart/form-data; boundary={}", boundary),
            )
            .send_bytes(&body)
            .map_err(|e| request_error("upload", e))?;

        let body: UploadResponse = resp
            .into_json()
            .context("Failed to parse upload response")?;
        Ok(body.filename)
    }

    /// Request generated text for a patent
    pub fn generate(&self, request: &ProcessRequest) -> Result<String> {
        let url = join_url(&self.process_service_url, "process");
        let agent = self.agent(self.timeout_secs);

        let payload =
            serde_json::to_string(request).context("Failed to serialize process request")?;

        let resp = agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_string(&payload)
            .map_err(|e| request_error("process", e))?;

        let body: ProcessResponse = resp
            .into_json()
            .context("Failed to parse process response")?;
        Ok(body.generated_text)
    }
}

/// Join a base URL and a path segment, normalizing the slash between them
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Map a ureq error to a message fit for the notification area
///
/// Non-2xx responses carry a JSON `{"error": "..."}` body when the server
/// rejected the request; surface that message when present.
fn request_error(operation: &str, err: ureq::Error) -> anyhow::Error {
    match err {
        ureq::Error::Status(code, resp) => {
            let detail = resp
                .into_string()
                .ok()
                .and_then(|body| {
                    serde_json::from_str::<ErrorResponse>(&body)
                        .map(|e| e.error)
                        .ok()
                        .or_else(|| {
                            let trimmed = body.trim();
                            if trimmed.is_empty() {
                                None
                            } else {
                                Some(trimmed.chars().take(200).collect())
                            }
                        })
                })
                .unwrap_or_else(|| "no error detail".to_string());
            anyhow!("{} request failed with status {}: {}", operation, code, detail)
        }
        ureq::Error::Transport(t) => anyhow!("{} request failed: {}", operation, t),
    }
}

/// Pick a multipart boundary that does not occur in the payload
fn multipart_boundary(data: &[u8]) -> String {
    let nanos = Local::now().timestamp_nanos_opt().unwrap_or_default();
    extend_boundary(format!("----patent-tui-{:x}", nanos), data)
}

fn extend_boundary(mut boundary: String, data: &[u8]) -> String {
    while contains_bytes(data, boundary.as_bytes()) {
        boundary.push('-');
    }
    boundary
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Compose a single-field multipart/form-data body
fn multipart_body(
    boundary: &str,
    field: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> Vec<u8> {
    let mut body = Vec::with_capacity(data.len() + 256);
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_request_wire_fields() {
        let request = ProcessRequest {
            file_path: "uploads/foo.pdf".to_string(),
            document_type: "swot_analysis".to_string(),
            embedding_model_name: "all-MiniLM-L6-v2".to_string(),
            persist_directory: "vector_store".to_string(),
            model_name: "llama3".to_string(),
            additional_info: "focus on biotech".to_string(),
        };

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 6);
        assert_eq!(obj["file_path"], "uploads/foo.pdf");
        assert_eq!(obj["document_type"], "swot_analysis");
        assert_eq!(obj["embedding_model_name"], "all-MiniLM-L6-v2");
        assert_eq!(obj["persist_directory"], "vector_store");
        assert_eq!(obj["model_name"], "llama3");
        assert_eq!(obj["additional_info"], "focus on biotech");
    }

    #[test]
    fn test_join_url_trailing_slash() {
        assert_eq!(
            join_url("http://localhost:5001/", "uploads"),
            "http://localhost:5001/uploads"
        );
        assert_eq!(
            join_url("http://localhost:5001", "uploads"),
            "http://localhost:5001/uploads"
        );
    }

    #[test]
    fn test_multipart_body_framing() {
        let data = b"%PDF-1.4 fake";
        let body = multipart_body("XYZ", "file", "foo.pdf", "application/pdf", data);
        let text = String::from_utf8(body).unwrap();

        assert!(text.starts_with("--XYZ\r\n"));
        assert!(text.contains("Content-Disposition: form-data; name=\"file\"; filename=\"foo.pdf\"\r\n"));
        assert!(text.contains("Content-Type: application/pdf\r\n\r\n%PDF-1.4 fake"));
        assert!(text.ends_with("\r\n--XYZ--\r\n"));
    }

    #[test]
    fn test_multipart_boundary_avoids_payload() {
        let boundary = multipart_boundary(b"some payload");
        assert!(boundary.starts_with("----patent-tui-"));

        // A payload already containing the boundary forces an extension
        let extended = extend_boundary("bound".to_string(), b"data with bound inside");
        assert_eq!(extended, "bound-");
        assert!(!contains_bytes(b"data with bound inside", extended.as_bytes()));
    }
}
