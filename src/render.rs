//! Plain-text rendering of a report plus its derived figures.
//!
//! This is the presentation layer's half of the contract: amounts are shown
//! as the riyal glyph followed by the value rounded to exactly two decimal
//! places with thousands separators. Rounding happens here and only here -
//! the engine's figures stay at full precision.

use crate::core::derive::{CashVariance, DerivedFigures, PaymentReconciliation, StockVariance};
use crate::model::DailyReport;
use num_format::{Locale, ToFormattedString};
use std::fmt::Write as _;

/// Formats a currency amount as `﷼1,234.50`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    // Cast safety: report amounts are finite (enforced at the mutation
    // boundary) and far below the point where whole halalas overflow u64.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_halalas = (amount.abs() * 100.0).round() as u64;
    let whole = (total_halalas / 100).to_formatted_string(&Locale::en);
    let fraction = total_halalas % 100;
    if negative {
        format!("\u{fdfc}-{whole}.{fraction:02}")
    } else {
        format!("\u{fdfc}{whole}.{fraction:02}")
    }
}

fn line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {label:<32} {value:>18}");
}

fn named_or(names: &[String], fallback: &str) -> String {
    let listed: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|n| !n.trim().is_empty())
        .collect();
    if listed.is_empty() {
        fallback.to_string()
    } else {
        listed.join(", ")
    }
}

/// Renders the printable closing-report artifact.
///
/// Pure string building; the caller decides whether it goes to the terminal,
/// a file, or both.
#[must_use]
pub fn render_report(report: &DailyReport, figures: &DerivedFigures) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "DAILY BRANCH CLOSING REPORT");
    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(
        out,
        "Branch:  {}",
        if report.branch_name.is_empty() {
            "BRANCH NOT SELECTED"
        } else {
            report.branch_name.as_str()
        }
    );
    let _ = writeln!(out, "Date:    {}", report.date);
    let _ = writeln!(
        out,
        "Manager: {}",
        if report.manager_name.is_empty() { "N/A" } else { report.manager_name.as_str() }
    );
    let _ = writeln!(out, "Hours:   {} - {}", report.opening_time, report.closing_time);
    let _ = writeln!(out);

    let _ = writeln!(out, "1. FINANCIAL PERFORMANCE");
    line(&mut out, "Gross Sales (Excl. VAT)", &format_currency(report.sales_summary.gross_sales_excl_vat));
    line(&mut out, "VAT Amount (Computed)", &format_currency(figures.calculated_tax));
    line(&mut out, "Net Sales (Incl. VAT)", &format_currency(report.sales_summary.net_sales_incl_vat));
    line(&mut out, "Sales Returns", &format_currency(report.sales_summary.sales_return_net));
    line(&mut out, "FINAL NET REVENUE", &format_currency(figures.final_net_sales));
    let _ = writeln!(out);

    let _ = writeln!(out, "2. PAYMENT RECONCILIATION");
    line(&mut out, "Cash Payments", &format_currency(report.payment_breakdown.cash));
    line(&mut out, "Card / POS", &format_currency(report.payment_breakdown.pos_card));
    line(&mut out, "Bank Transfers", &format_currency(report.payment_breakdown.bank_transfer));
    line(&mut out, "Credit Sales", &format_currency(report.payment_breakdown.credit_sales));
    line(&mut out, "Other", &format_currency(report.payment_breakdown.other));
    let match_flag = match figures.payment_reconciliation() {
        PaymentReconciliation::Matched => "(MATCHED)".to_string(),
        PaymentReconciliation::Mismatch { difference } => {
            format!("(MISMATCH {})", format_currency(difference))
        }
    };
    line(
        &mut out,
        "Total",
        &format!("{} {match_flag}", format_currency(figures.total_payments)),
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "3. CASH ACCOUNTABILITY");
    line(&mut out, "Expected Cash", &format_currency(figures.expected_cash));
    line(&mut out, "Actual Physical Count", &format_currency(report.cash_control.actual_cash_count));
    let variance_label = match figures.cash_variance() {
        CashVariance::Excess { amount } => format!("{} EXCESS", format_currency(amount)),
        CashVariance::Short { amount } => format!("{} SHORT", format_currency(amount)),
        CashVariance::Balanced => "BALANCED".to_string(),
    };
    line(&mut out, "Variance", &variance_label);
    let _ = writeln!(out);

    let _ = writeln!(out, "4. OPERATIONAL EXPENSES");
    if report.expenses.is_empty() {
        let _ = writeln!(out, "  No expenses reported today.");
    } else {
        for expense in &report.expenses {
            let label = if expense.description.is_empty() { "Misc" } else { expense.description.as_str() };
            line(&mut out, label, &format_currency(expense.amount));
        }
    }
    line(&mut out, "Total Expenses", &format_currency(figures.total_expenses));
    let _ = writeln!(out);

    let _ = writeln!(out, "5. CREDIT & RECEIVABLES");
    line(&mut out, "New Credit Issued", &format_currency(report.credit_control.today_credit_sales));
    line(&mut out, "Payments Received", &format_currency(report.credit_control.payments_received));
    line(&mut out, "Net Receivables", &format_currency(figures.net_receivables));
    line(
        &mut out,
        "Oldest Invoice Age",
        &format!("{} Days", report.credit_control.oldest_invoice_age),
    );
    let customer = &report.credit_control.oldest_invoice_customer_name;
    line(&mut out, "Oldest Customer", if customer.is_empty() { "N/A" } else { customer.as_str() });
    let _ = writeln!(out);

    let _ = writeln!(out, "6. INVENTORY CONTROL");
    line(&mut out, "Est. Closing Stock", &format_currency(figures.closing_stock));
    line(&mut out, "ERP Closing Stock", &format_currency(report.inventory.erp_closing_stock_value));
    let stock_label = match figures.stock_variance() {
        StockVariance::Overage => format!("{} OVERAGE", format_currency(figures.inventory_variance)),
        StockVariance::Shrinkage => {
            format!("{} SHRINKAGE", format_currency(figures.inventory_variance))
        }
        StockVariance::Exact => "EXACT".to_string(),
    };
    line(&mut out, "Inventory Variance", &stock_label);
    let _ = writeln!(out);

    let _ = writeln!(out, "7. STAFFING ATTENDANCE");
    line(&mut out, "Total Absent", &report.staffing.staff_absent.to_string());
    if report.staffing.staff_absent > 0 {
        let _ = writeln!(
            out,
            "  Absentees: {}",
            named_or(&report.staffing.absent_staff_names, "N/A")
        );
    }
    line(&mut out, "Total Half Day", &report.staffing.staff_half_day.to_string());
    if report.staffing.staff_half_day > 0 {
        let _ = writeln!(
            out,
            "  Half day: {}",
            named_or(&report.staffing.half_day_staff_names, "N/A")
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "8. ISSUES & MANAGEMENT NOTES");
    if report.issues_empty() {
        let _ = writeln!(out, "  No issues reported today.");
    } else {
        if !report.issues.incidents.trim().is_empty() {
            let _ = writeln!(out, "  Incidents & Errors: {}", report.issues.incidents);
        }
        if !report.issues.equipment_issues.trim().is_empty() {
            let _ = writeln!(out, "  Equipment/Facility: {}", report.issues.equipment_issues);
        }
        if !report.issues.action_required.trim().is_empty() {
            let _ = writeln!(out, "  Action Required: {}", report.issues.action_required);
        }
    }
    let _ = writeln!(out);

    let dots = "........................................";
    let _ = writeln!(
        out,
        "Cashier Signature: {}",
        if report.cashier_name.is_empty() { dots } else { report.cashier_name.as_str() }
    );
    let _ = writeln!(
        out,
        "Manager Approval:  {}",
        if report.manager_name.is_empty() { dots } else { report.manager_name.as_str() }
    );

    out
}
