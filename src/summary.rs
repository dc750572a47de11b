//! AI narrative summary collaborator.
//!
//! Sends the report and its derived figures to a Gemini-style
//! `generateContent` endpoint and returns a short executive summary. This is
//! strictly a read-only consumer of the engine's output: it never mutates the
//! report, and every failure is logged and replaced with a fixed fallback
//! string rather than surfaced as an error.

use crate::core::derive::DerivedFigures;
use crate::model::DailyReport;
use crate::render::format_currency;
use serde_json::{Value, json};
use tracing::{error, info};

/// Returned when the endpoint answers but produces no usable text.
pub const ANALYSIS_UNAVAILABLE: &str = "Unable to generate analysis at this time.";

/// Returned on any transport, auth, or quota failure.
pub const ANALYSIS_FALLBACK: &str = "Error connecting to analysis engine.";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Builds the analysis prompt from a read-only snapshot of the report and its
/// figures. Pure; exists separately from the client so it can be tested
/// without a network.
#[must_use]
pub fn build_prompt(report: &DailyReport, figures: &DerivedFigures) -> String {
    let absent = join_names(&report.staffing.absent_staff_names);
    let half_day = join_names(&report.staffing.half_day_staff_names);
    format!(
        "As a retail operations expert, analyze this branch daily closing report:\n\
         Branch: {branch}\n\
         Manager: {manager}\n\
         Cashier: {cashier}\n\
         Hours: {open} - {close}\n\
         Date: {date}\n\
         \n\
         FINANCIALS:\n\
         - Final Net Sales: {final_net}\n\
         - Computed VAT: {tax}\n\
         - Daily Expenses: {expenses}\n\
         - Cash Variance: {variance}\n\
         \n\
         STAFFING:\n\
         - Absent Staff: {absent_count} ({absent})\n\
         - Half Day Staff: {half_day_count} ({half_day})\n\
         \n\
         INVENTORY & CREDIT:\n\
         - Inventory Variance: {stock_variance}\n\
         - Oldest Invoice: {invoice_age} days (Customer: {customer})\n\
         \n\
         ISSUES: {issues}\n\
         \n\
         Provide a brief 3-bullet point executive summary highlighting:\n\
         1. Financial health (sales performance vs expenses).\n\
         2. Operational risks (variance, staff shortages, or aging receivables).\n\
         3. Actionable recommendations for the team tomorrow.\n\
         Keep it professional and concise.",
        branch = report.branch_name,
        manager = or_unspecified(&report.manager_name),
        cashier = or_unspecified(&report.cashier_name),
        open = or_na(&report.opening_time),
        close = or_na(&report.closing_time),
        date = report.date,
        final_net = format_currency(figures.final_net_sales),
        tax = format_currency(figures.calculated_tax),
        expenses = format_currency(figures.total_expenses),
        variance = format_currency(figures.variance),
        absent_count = report.staffing.staff_absent,
        half_day_count = report.staffing.staff_half_day,
        stock_variance = format_currency(figures.inventory_variance),
        invoice_age = report.credit_control.oldest_invoice_age,
        customer = or_na(&report.credit_control.oldest_invoice_customer_name),
        issues = if report.issues.incidents.trim().is_empty() {
            "None reported"
        } else {
            report.issues.incidents.as_str()
        },
    )
}

fn or_unspecified(value: &str) -> &str {
    if value.is_empty() { "Not specified" } else { value }
}

fn or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}

fn join_names(names: &[String]) -> String {
    let listed: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|n| !n.trim().is_empty())
        .collect();
    if listed.is_empty() {
        "No names listed".to_string()
    } else {
        listed.join(", ")
    }
}

/// Pulls the first candidate's text out of a `generateContent` response body.
fn extract_text(body: &Value) -> Option<String> {
    let text = body
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()?;
    if text.is_empty() { None } else { Some(text.to_string()) }
}

/// Client for the narrative-summary endpoint.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl SummaryClient {
    /// Creates a client for the given API key and model name.
    #[must_use]
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the endpoint base URL. Used by tests and self-hosted
    /// gateways.
    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Requests the executive summary. Never fails: transport and decode
    /// errors are logged and collapsed to [`ANALYSIS_FALLBACK`], an empty
    /// answer to [`ANALYSIS_UNAVAILABLE`].
    pub async fn analyze(&self, report: &DailyReport, figures: &DerivedFigures) -> String {
        let prompt = build_prompt(report, figures);
        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await;

        let body: Value = match response {
            Ok(response) => match response.error_for_status() {
                Ok(response) => match response.json().await {
                    Ok(body) => body,
                    Err(e) => {
                        error!("AI analysis error: failed to decode response: {e}");
                        return ANALYSIS_FALLBACK.to_string();
                    }
                },
                Err(e) => {
                    error!("AI analysis error: {e}");
                    return ANALYSIS_FALLBACK.to_string();
                }
            },
            Err(e) => {
                error!("AI analysis error: {e}");
                return ANALYSIS_FALLBACK.to_string();
            }
        };

        match extract_text(&body) {
            Some(text) => {
                info!("Received analysis summary ({} chars).", text.len());
                text
            }
            None => ANALYSIS_UNAVAILABLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::derive::derive;
    use crate::test_utils::sample_report;

    #[test]
    fn test_prompt_carries_the_derived_figures() {
        let report = sample_report();
        let figures = derive(&report);
        let prompt = build_prompt(&report, &figures);

        assert!(prompt.contains("Final Net Sales: \u{fdfc}1,100.00"));
        assert!(prompt.contains("Computed VAT: \u{fdfc}150.00"));
        assert!(prompt.contains("Daily Expenses: \u{fdfc}150.00"));
        assert!(prompt.contains("Inventory Variance: \u{fdfc}-20.00"));
        assert!(prompt.contains("3-bullet point executive summary"));
    }

    #[test]
    fn test_prompt_placeholders_for_missing_fields() {
        let report = crate::model::DailyReport::default();
        let figures = derive(&report);
        let prompt = build_prompt(&report, &figures);

        assert!(prompt.contains("Manager: Not specified"));
        assert!(prompt.contains("(No names listed)"));
        assert!(prompt.contains("ISSUES: None reported"));
    }

    #[test]
    fn test_extract_text_from_candidate_response() {
        let body = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "All good." }] }
            }]
        });
        assert_eq!(extract_text(&body), Some("All good.".to_string()));
    }

    #[test]
    fn test_extract_text_missing_or_empty_is_none() {
        assert_eq!(extract_text(&serde_json::json!({})), None);
        let empty = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
        });
        assert_eq!(extract_text(&empty), None);
    }

    #[test]
    fn test_endpoint_includes_model_name() {
        let client = SummaryClient::new("key".to_string(), "gemini-3-flash-preview".to_string())
            .with_base_url("http://localhost:9999/v1beta".to_string());
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }
}
