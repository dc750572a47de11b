//! The derivation engine: reduces a [`DailyReport`] to its reconciliation
//! figures.
//!
//! [`derive`] is a total pure function - no errors, no side effects, no
//! rounding. It is cheap enough to re-run after every single edit, which is
//! exactly how the editing session uses it, so the figures on screen always
//! reflect the latest keystroke. All values stay at full `f64` precision;
//! rounding to two decimals happens only at render time.

use crate::model::DailyReport;

/// Absolute tolerance for the payment reconciliation check.
///
/// The payment modes are entered independently of the sales totals, so their
/// float sum will rarely equal final net sales to the last bit. Anything
/// within one halala is considered matched. Comparisons are done on the
/// unrounded figures.
pub const PAYMENT_MATCH_TOLERANCE: f64 = 0.01;

/// Every figure computed from a report. Never stored; recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedFigures {
    /// VAT implied by the entered totals: net (incl. VAT) minus gross (excl.
    /// VAT). The separately entered tax amount is deliberately ignored.
    pub calculated_tax: f64,
    /// The authoritative revenue figure: net sales minus sales returns.
    pub final_net_sales: f64,
    /// Sum of all five payment modes.
    pub total_payments: f64,
    /// Sum of all petty-cash expense lines.
    pub total_expenses: f64,
    /// Theoretical drawer contents: opening + cash sales - cash expenses -
    /// head-office deposits.
    pub expected_cash: f64,
    /// Physical count minus expected cash. Positive = excess, negative =
    /// short.
    pub variance: f64,
    /// Estimated closing stock: opening + receipts - cost of goods sold.
    pub closing_stock: f64,
    /// ERP-reported closing stock minus the estimate. Negative = shrinkage.
    pub inventory_variance: f64,
    /// Opening outstanding + today's credit sales - payments received.
    pub net_receivables: f64,
}

/// Outcome of checking the payment-mode total against final net sales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentReconciliation {
    /// Within [`PAYMENT_MATCH_TOLERANCE`] of final net sales.
    Matched,
    /// Off by more than the tolerance. Informational only, never fatal.
    Mismatch {
        /// `total_payments - final_net_sales`, unrounded.
        difference: f64,
    },
}

/// Classified cash variance. The magnitude is always reported as an absolute
/// value; the variant carries the sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CashVariance {
    /// Counted more than expected.
    Excess { amount: f64 },
    /// Counted less than expected.
    Short { amount: f64 },
    /// Counted exactly the expected cash.
    Balanced,
}

/// Classified inventory variance. No tolerance here: stock values come from
/// systems, not keyed sums, so any nonzero difference is significant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StockVariance {
    /// ERP reports more stock than the estimate.
    Overage,
    /// ERP reports less stock than the estimate (shrinkage, unfavorable).
    Shrinkage,
    /// ERP agrees with the estimate exactly.
    Exact,
}

/// Computes every derived figure from the report.
///
/// Deterministic and idempotent: identical input yields identical output on
/// repeated calls. O(number of expenses + fixed field count).
#[must_use]
pub fn derive(report: &DailyReport) -> DerivedFigures {
    let sales = &report.sales_summary;
    let payments = &report.payment_breakdown;
    let cash = &report.cash_control;
    let inventory = &report.inventory;
    let credit = &report.credit_control;

    let calculated_tax = sales.net_sales_incl_vat - sales.gross_sales_excl_vat;
    let final_net_sales = sales.net_sales_incl_vat - sales.sales_return_net;

    let total_payments = payments.cash
        + payments.pos_card
        + payments.bank_transfer
        + payments.credit_sales
        + payments.other;

    let total_expenses: f64 = report.expenses.iter().map(|e| e.amount).sum();

    let expected_cash = cash.opening_balance + cash.cash_sales
        - cash.cash_expenses
        - cash.head_office_deposits;
    let variance = cash.actual_cash_count - expected_cash;

    let closing_stock = inventory.opening_stock_value + inventory.stock_received_value
        - inventory.cost_of_goods_sold;
    let inventory_variance = inventory.erp_closing_stock_value - closing_stock;

    let net_receivables =
        credit.opening_outstanding + credit.today_credit_sales - credit.payments_received;

    DerivedFigures {
        calculated_tax,
        final_net_sales,
        total_payments,
        total_expenses,
        expected_cash,
        variance,
        closing_stock,
        inventory_variance,
        net_receivables,
    }
}

impl DerivedFigures {
    /// Checks the payment-mode total against final net sales, within the
    /// fixed tolerance.
    #[must_use]
    pub fn payment_reconciliation(&self) -> PaymentReconciliation {
        let difference = self.total_payments - self.final_net_sales;
        if difference.abs() <= PAYMENT_MATCH_TOLERANCE {
            PaymentReconciliation::Matched
        } else {
            PaymentReconciliation::Mismatch { difference }
        }
    }

    /// True iff the payment-mode total matches final net sales.
    #[must_use]
    pub fn payments_matched(&self) -> bool {
        matches!(self.payment_reconciliation(), PaymentReconciliation::Matched)
    }

    /// Classifies the cash variance. Exactly zero is neither excess nor
    /// short.
    #[must_use]
    pub fn cash_variance(&self) -> CashVariance {
        if self.variance > 0.0 {
            CashVariance::Excess {
                amount: self.variance.abs(),
            }
        } else if self.variance < 0.0 {
            CashVariance::Short {
                amount: self.variance.abs(),
            }
        } else {
            CashVariance::Balanced
        }
    }

    /// Classifies the inventory variance by sign, with no tolerance.
    #[must_use]
    pub fn stock_variance(&self) -> StockVariance {
        if self.inventory_variance > 0.0 {
            StockVariance::Overage
        } else if self.inventory_variance < 0.0 {
            StockVariance::Shrinkage
        } else {
            StockVariance::Exact
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::model::{DailyReport, ExpenseItem, PaymentBreakdown};
    use crate::test_utils::{report_with_expenses, sample_report};

    #[test]
    fn test_derive_is_deterministic() {
        let report = sample_report();
        let first = derive(&report);
        let second = derive(&report);
        assert_eq!(first, second);
    }

    #[test]
    fn test_calculated_tax_is_net_minus_gross() {
        let mut report = DailyReport::default();
        report.sales_summary.gross_sales_excl_vat = 1000.0;
        report.sales_summary.net_sales_incl_vat = 1150.0;
        assert_eq!(derive(&report).calculated_tax, 150.0);

        // Gross above net yields a negative computed tax, not an error.
        report.sales_summary.net_sales_incl_vat = 900.0;
        assert_eq!(derive(&report).calculated_tax, -100.0);
    }

    #[test]
    fn test_final_net_sales_subtracts_returns() {
        let mut report = DailyReport::default();
        report.sales_summary.net_sales_incl_vat = 1150.0;
        report.sales_summary.sales_return_net = 50.0;
        assert_eq!(derive(&report).final_net_sales, 1100.0);
    }

    #[test]
    fn test_total_payments_ignores_entry_order() {
        let amounts = [600.0, 400.0, 0.0, 100.0, 0.0];
        let mut report = DailyReport::default();
        report.payment_breakdown = PaymentBreakdown {
            cash: amounts[0],
            pos_card: amounts[1],
            bank_transfer: amounts[2],
            credit_sales: amounts[3],
            other: amounts[4],
        };
        let forward = derive(&report).total_payments;

        // Same amounts assigned to the fields in reverse order.
        report.payment_breakdown = PaymentBreakdown {
            cash: amounts[4],
            pos_card: amounts[3],
            bank_transfer: amounts[2],
            credit_sales: amounts[1],
            other: amounts[0],
        };
        let reversed = derive(&report).total_payments;

        assert_eq!(forward, 1100.0);
        assert_eq!(reversed, 1100.0);
    }

    #[test]
    fn test_total_expenses_sums_all_lines() {
        let report = report_with_expenses(&[120.0, 30.0]);
        assert_eq!(derive(&report).total_expenses, 150.0);
    }

    #[test]
    fn test_total_expenses_empty_list_is_zero() {
        assert_eq!(derive(&DailyReport::default()).total_expenses, 0.0);
    }

    #[test]
    fn test_payment_match_boundary_at_tolerance() {
        // Final net sales stays 0.0 so the difference is the entered amount
        // itself, free of representation error from a subtraction.
        let mut report = DailyReport::default();
        report.payment_breakdown.cash = 0.01;
        // Exactly 0.01 off: still matched.
        assert!(derive(&report).payments_matched());

        report.payment_breakdown.cash = 0.0101;
        // 0.0101 off: mismatch.
        let figures = derive(&report);
        assert!(!figures.payments_matched());
        match figures.payment_reconciliation() {
            PaymentReconciliation::Mismatch { difference } => {
                assert!(difference > PAYMENT_MATCH_TOLERANCE);
            }
            PaymentReconciliation::Matched => panic!("expected mismatch"),
        }
    }

    #[test]
    fn test_expected_cash_and_variance() {
        let mut report = DailyReport::default();
        report.cash_control.opening_balance = 200.0;
        report.cash_control.cash_sales = 600.0;
        report.cash_control.cash_expenses = 50.0;
        report.cash_control.head_office_deposits = 100.0;
        report.cash_control.actual_cash_count = 650.0;

        let figures = derive(&report);
        assert_eq!(figures.expected_cash, 650.0);
        assert_eq!(figures.variance, 0.0);
        assert_eq!(figures.cash_variance(), CashVariance::Balanced);
    }

    #[test]
    fn test_cash_variance_classification_carries_magnitude() {
        let mut report = DailyReport::default();
        report.cash_control.actual_cash_count = 25.0;
        assert_eq!(
            derive(&report).cash_variance(),
            CashVariance::Excess { amount: 25.0 }
        );

        report.cash_control.actual_cash_count = 0.0;
        report.cash_control.cash_sales = 40.0;
        assert_eq!(
            derive(&report).cash_variance(),
            CashVariance::Short { amount: 40.0 }
        );
    }

    #[test]
    fn test_inventory_variance_has_no_tolerance() {
        let mut report = DailyReport::default();
        report.inventory.opening_stock_value = 500.0;
        report.inventory.stock_received_value = 300.0;
        report.inventory.cost_of_goods_sold = 400.0;
        report.inventory.erp_closing_stock_value = 380.0;

        let figures = derive(&report);
        assert_eq!(figures.closing_stock, 400.0);
        assert_eq!(figures.inventory_variance, -20.0);
        assert_eq!(figures.stock_variance(), StockVariance::Shrinkage);

        // Even a sub-tolerance difference is significant for stock.
        report.inventory.erp_closing_stock_value = 400.005;
        assert_eq!(derive(&report).stock_variance(), StockVariance::Overage);

        report.inventory.erp_closing_stock_value = 400.0;
        assert_eq!(derive(&report).stock_variance(), StockVariance::Exact);
    }

    #[test]
    fn test_net_receivables_uses_opening_baseline() {
        let mut report = DailyReport::default();
        report.credit_control.today_credit_sales = 700.0;
        report.credit_control.payments_received = 200.0;
        // opening_outstanding defaults to 5000.
        assert_eq!(derive(&report).net_receivables, 5500.0);
    }

    #[test]
    fn test_pass_through_fields_do_not_affect_figures() {
        let mut report = sample_report();
        let before = derive(&report);
        report.sales_summary.tax_amount = 999.0;
        report.sales_summary.discounts = 123.0;
        report.credit_control.outstanding_credit_balance = 456.0;
        assert_eq!(derive(&report), before);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let report = sample_report();
        let figures = derive(&report);

        assert_eq!(figures.calculated_tax, 150.0);
        assert_eq!(figures.final_net_sales, 1100.0);
        assert_eq!(figures.total_payments, 1100.0);
        assert!(figures.payments_matched());
        assert_eq!(figures.expected_cash, 650.0);
        assert_eq!(figures.variance, 0.0);
        assert_eq!(figures.total_expenses, 150.0);
        assert_eq!(figures.closing_stock, 400.0);
        assert_eq!(figures.inventory_variance, -20.0);
        assert_eq!(figures.stock_variance(), StockVariance::Shrinkage);
    }

    #[test]
    fn test_removing_an_expense_only_affects_its_amount() {
        let mut report = report_with_expenses(&[120.0, 30.0, 75.5]);
        let victim: ExpenseItem = report.expenses[1].clone();
        let before = derive(&report).total_expenses;

        report.expenses.retain(|e| e.id != victim.id);
        let after = derive(&report).total_expenses;

        assert_eq!(before - after, victim.amount);
        assert_eq!(report.expenses.len(), 2);
        assert_eq!(report.expenses[0].amount, 120.0);
        assert_eq!(report.expenses[1].amount, 75.5);
    }
}
