//! The daily closing-report data model.
//!
//! A [`DailyReport`] is a single in-memory value, fully owned by the editing
//! session and replaced wholesale on every edit (see [`crate::session`]). It is
//! never persisted; the only durable artifact is the exported rendering.
//!
//! Field names serialize in camelCase so report files round-trip with the JSON
//! shape produced by the branch web form. Every field carries a serde default,
//! so partially filled files load cleanly.

use crate::errors::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sales figures for the day as read off the POS totals screen.
///
/// `tax_amount` and `discounts` are stored pass-through fields: the form
/// captures them but no derived figure consumes them (VAT is recomputed as
/// net minus gross instead of trusting the entered value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SalesSummary {
    pub gross_sales_excl_vat: f64,
    pub tax_amount: f64,
    pub net_sales_incl_vat: f64,
    pub discounts: f64,
    pub sales_return_net: f64,
}

/// Amounts collected per payment mode, entered independently of the sales
/// totals. Reconciled against final net sales by the derivation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentBreakdown {
    pub cash: f64,
    pub pos_card: f64,
    pub bank_transfer: f64,
    pub credit_sales: f64,
    pub other: f64,
}

/// Cash drawer movements for the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CashControl {
    pub opening_balance: f64,
    pub cash_sales: f64,
    pub cash_expenses: f64,
    pub head_office_deposits: f64,
    pub actual_cash_count: f64,
}

/// A single petty-cash expense line. `id` is unique within the report's
/// expense list for its lifetime; list order is insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseItem {
    pub id: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

/// Customer credit position. `outstanding_credit_balance` is a stored
/// pass-through field; net receivables are derived from the other amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditControl {
    pub today_credit_sales: f64,
    pub payments_received: f64,
    /// Fixed opening-receivables baseline for the branch.
    pub opening_outstanding: f64,
    pub outstanding_credit_balance: f64,
    /// Age in days of the oldest unpaid invoice.
    pub oldest_invoice_age: u32,
    pub oldest_invoice_customer_name: String,
}

impl Default for CreditControl {
    fn default() -> Self {
        Self {
            today_credit_sales: 0.0,
            payments_received: 0.0,
            opening_outstanding: 5000.0,
            outstanding_credit_balance: 0.0,
            oldest_invoice_age: 0,
            oldest_invoice_customer_name: String::new(),
        }
    }
}

/// Stock values used to estimate the closing stock and compare it against the
/// ERP-reported figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct InventorySnapshot {
    pub opening_stock_value: f64,
    pub stock_received_value: f64,
    pub cost_of_goods_sold: f64,
    pub erp_closing_stock_value: f64,
}

/// Attendance counts and the matching name lists.
///
/// Invariant: each name list's length always equals its count. The setters in
/// [`crate::core::update`] keep them synchronized via
/// [`crate::core::staffing::resync_names`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffingSnapshot {
    pub staff_absent: usize,
    pub absent_staff_names: Vec<String>,
    pub staff_half_day: usize,
    pub half_day_staff_names: Vec<String>,
}

/// Free-text incident and follow-up notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct IssuesAction {
    pub incidents: String,
    pub equipment_issues: String,
    pub action_required: String,
}

/// The root aggregate: everything a manager enters for one branch-day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyReport {
    pub branch_name: String,
    pub manager_name: String,
    pub cashier_name: String,
    pub opening_time: String,
    pub closing_time: String,
    /// Report date in `YYYY-MM-DD` form; defaults to today.
    pub date: String,
    pub sales_summary: SalesSummary,
    pub payment_breakdown: PaymentBreakdown,
    pub cash_control: CashControl,
    pub expenses: Vec<ExpenseItem>,
    pub credit_control: CreditControl,
    pub inventory: InventorySnapshot,
    pub staffing: StaffingSnapshot,
    pub issues: IssuesAction,
}

impl Default for DailyReport {
    fn default() -> Self {
        Self {
            branch_name: String::new(),
            manager_name: String::new(),
            cashier_name: String::new(),
            opening_time: String::new(),
            closing_time: String::new(),
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            sales_summary: SalesSummary::default(),
            payment_breakdown: PaymentBreakdown::default(),
            cash_control: CashControl::default(),
            expenses: Vec::new(),
            credit_control: CreditControl::default(),
            inventory: InventorySnapshot::default(),
            staffing: StaffingSnapshot::default(),
            issues: IssuesAction::default(),
        }
    }
}

impl DailyReport {
    /// True when all three issue fields are blank, so the rendered report can
    /// collapse the section to a single "no issues" line.
    #[must_use]
    pub fn issues_empty(&self) -> bool {
        self.issues.incidents.trim().is_empty()
            && self.issues.equipment_issues.trim().is_empty()
            && self.issues.action_required.trim().is_empty()
    }
}

/// Loads a report from a JSON file and passes it through the sanitize
/// boundary, so a hand-edited or truncated file can never introduce
/// non-finite amounts or a staffing list out of sync with its count.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<DailyReport> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let report: DailyReport = serde_json::from_str(&contents)?;
    Ok(crate::core::update::sanitize_report(report))
}
