//! Machine-readable summaries of render outcomes
//!
//! Lets scripts drive the viewer and inspect what happened without parsing
//! HTML.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FailureKind;
use crate::transform::TransformResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Rendered,
    Failed,
}

/// Summary of a single open or refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeReport {
    pub timestamp: DateTime<Utc>,
    pub status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet_href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_bytes: Option<usize>,
}

impl OutcomeReport {
    pub fn from_result(result: &TransformResult) -> Self {
        let mut report = Self {
            timestamp: Utc::now(),
            status: OutcomeStatus::Failed,
            kind: None,
            message: None,
            current_file: None,
            stylesheet_href: None,
            stylesheet_path: None,
            base_url: None,
            html_bytes: None,
        };

        match result {
            Ok(doc) => {
                report.status = OutcomeStatus::Rendered;
                report.current_file = Some(doc.source.to_string());
                report.stylesheet_href = Some(doc.stylesheet.href.clone());
                report.stylesheet_path = Some(doc.stylesheet.path.display().to_string());
                report.base_url = doc.base_url.as_ref().map(|u| u.to_string());
                report.html_bytes = Some(doc.html.len());
            }
            Err(err) => {
                report.kind = Some(err.kind());
                report.message = Some(err.to_string());
            }
        }

        report
    }

    /// Generate a JSON report
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Generate a short human-readable report
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        match self.status {
            OutcomeStatus::Rendered => {
                text.push_str(&format!(
                    "rendered {}\n",
                    self.current_file.as_deref().unwrap_or("-")
                ));
                text.push_str(&format!(
                    "stylesheet: {} ({})\n",
                    self.stylesheet_href.as_deref().unwrap_or("-"),
                    self.stylesheet_path.as_deref().unwrap_or("-")
                ));
                text.push_str(&format!("html: {} bytes\n", self.html_bytes.unwrap_or(0)));
            }
            OutcomeStatus::Failed => {
                text.push_str(&format!(
                    "failed [{}]: {}\n",
                    self.kind.map_or("unknown", |k| k.as_str()),
                    self.message.as_deref().unwrap_or("-")
                ));
            }
        }
        text
    }
}
