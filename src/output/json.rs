use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::ScanResponse;
use crate::error::Result;
use crate::rules::policy::PolicyVerdict;
use crate::scanner::ScanResult;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    scanned_at: DateTime<Utc>,
    #[serde(flatten)]
    result: ScanResponse,
    verdict: &'a PolicyVerdict,
}

/// Render a scan result as a JSON report: the wire-shaped scan response plus
/// the policy verdict and a timestamp.
pub fn render(result: &ScanResult, verdict: &PolicyVerdict) -> Result<String> {
    let report = JsonReport {
        scanned_at: Utc::now(),
        result: ScanResponse::from(result),
        verdict,
    };
    let json = serde_json::to_string_pretty(&report)?;
    Ok(json)
}
