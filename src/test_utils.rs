//! Shared test fixtures.
//!
//! Builders go through the public update functions rather than struct
//! literals, so the fixtures exercise the same mutation boundary as real
//! edits.

use crate::core::update::{
    self, CashField, HeaderField, InventoryField, PaymentField, SalesField,
};
use crate::model::DailyReport;

/// A fully reconciled closing report: final net sales 1,100.00 matched by
/// payments, a balanced cash drawer, two expense lines totalling 150.00, and
/// 20.00 of inventory shrinkage.
#[must_use]
pub fn sample_report() -> DailyReport {
    let mut report = DailyReport::default();
    report = update::set_header(&report, HeaderField::BranchName, "[B1002]AZIZIA - AZ");
    report = update::set_header(&report, HeaderField::ManagerName, "SHAMEER ELAMBILATTU");
    report = update::set_header(&report, HeaderField::Date, "2026-08-27");

    report = update::set_sales(&report, SalesField::GrossSalesExclVat, 1000.0);
    report = update::set_sales(&report, SalesField::NetSalesInclVat, 1150.0);
    report = update::set_sales(&report, SalesField::SalesReturnNet, 50.0);

    report = update::set_payment(&report, PaymentField::Cash, 600.0);
    report = update::set_payment(&report, PaymentField::PosCard, 400.0);
    report = update::set_payment(&report, PaymentField::CreditSales, 100.0);

    report = update::set_cash(&report, CashField::OpeningBalance, 200.0);
    report = update::set_cash(&report, CashField::CashSales, 600.0);
    report = update::set_cash(&report, CashField::CashExpenses, 50.0);
    report = update::set_cash(&report, CashField::HeadOfficeDeposits, 100.0);
    report = update::set_cash(&report, CashField::ActualCashCount, 650.0);

    report = update::set_inventory(&report, InventoryField::OpeningStockValue, 500.0);
    report = update::set_inventory(&report, InventoryField::StockReceivedValue, 300.0);
    report = update::set_inventory(&report, InventoryField::CostOfGoodsSold, 400.0);
    report = update::set_inventory(&report, InventoryField::ErpClosingStockValue, 380.0);

    add_expenses(report, &[120.0, 30.0])
}

/// A default report carrying one expense line per amount given.
#[must_use]
pub fn report_with_expenses(amounts: &[f64]) -> DailyReport {
    add_expenses(DailyReport::default(), amounts)
}

fn add_expenses(mut report: DailyReport, amounts: &[f64]) -> DailyReport {
    for &amount in amounts {
        report = update::add_expense(&report);
        let id = report
            .expenses
            .last()
            .map(|e| e.id.clone())
            .unwrap_or_default();
        report = update::set_expense_amount(&report, &id, amount);
    }
    report
}
