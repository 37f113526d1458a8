//! Framework-agnostic JSON boundary for the scanner.
//!
//! The surrounding web layer owns routing, status codes, and transport; this
//! module owns the wire shapes. Request bodies decode to [`ScanRequest`],
//! results encode to [`ScanResponse`], and both error classes encode to
//! [`ErrorResponse`]. Field names follow the original wire contract
//! (camelCase).

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};
use crate::rules::Finding;
use crate::scanner::{ScanResult, Scanner};

/// Incoming scan request body: `{"content": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub content: Option<String>,
}

/// Successful scan response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub detected: bool,
    /// Descriptor of the scan method including elapsed time. Informational.
    pub method: String,
    pub total_matches: usize,
    pub findings: Vec<Finding>,
    pub categories: Vec<String>,
}

impl From<&ScanResult> for ScanResponse {
    fn from(result: &ScanResult) -> Self {
        Self {
            detected: result.detected,
            method: result.method_descriptor(),
            total_matches: result.total_matches,
            findings: result.findings.clone(),
            categories: result.categories.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Error response body, used for both input and internal errors.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Which status class the caller should map an error response to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// 400-equivalent: the request was malformed or empty.
    Input,
    /// 500-equivalent: the scan itself failed.
    Internal,
}

/// Decode a JSON request body and run a scan.
///
/// Malformed JSON, a missing/null `content` field, or a non-string `content`
/// are all input errors; no scan is attempted and no partial result exists.
pub fn scan_request(scanner: &Scanner, body: &str) -> Result<ScanResult> {
    let request: ScanRequest = serde_json::from_str(body)
        .map_err(|e| ScanError::InvalidRequest(e.to_string()))?;
    let content = request
        .content
        .ok_or_else(|| ScanError::InvalidRequest("missing required field: content".into()))?;
    scanner.scan(&content)
}

/// Full request-in, response-out cycle: always produces a JSON body plus the
/// error class the transport should use for the status code (`None` on
/// success).
pub fn handle(scanner: &Scanner, body: &str) -> (String, Option<ErrorClass>) {
    match scan_request(scanner, body) {
        Ok(result) => {
            let response = ScanResponse::from(&result);
            match serde_json::to_string(&response) {
                Ok(json) => (json, None),
                Err(e) => (error_body(&e.to_string()), Some(ErrorClass::Internal)),
            }
        }
        Err(err) => {
            let class = if err.is_input_error() {
                ErrorClass::Input
            } else {
                ErrorClass::Internal
            };
            (error_body(&err.to_string()), Some(class))
        }
    }
}

fn error_body(message: &str) -> String {
    serde_json::to_string(&ErrorResponse {
        error: message.to_string(),
    })
    .unwrap_or_else(|_| r#"{"error":"scan failed"}"#.to_string())
}
