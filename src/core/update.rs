//! Typed pure update functions for the report.
//!
//! Every edit operation takes the current [`DailyReport`] by reference and
//! returns a new value; the session replaces its copy wholesale. One setter
//! per section, with a field enum per section, so which fields exist where is
//! checked at compile time instead of through dynamic path strings.
//!
//! All numeric input passes through [`sanitize_amount`] here at the mutation
//! boundary. The derivation engine never sees a non-finite number.

use crate::core::staffing;
use crate::model::{DailyReport, ExpenseItem};
use uuid::Uuid;

/// Currency fields of the sales summary section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesField {
    GrossSalesExclVat,
    TaxAmount,
    NetSalesInclVat,
    Discounts,
    SalesReturnNet,
}

/// Payment-mode fields of the payment breakdown section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    Cash,
    PosCard,
    BankTransfer,
    CreditSales,
    Other,
}

/// Currency fields of the cash control section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashField {
    OpeningBalance,
    CashSales,
    CashExpenses,
    HeadOfficeDeposits,
    ActualCashCount,
}

/// Currency fields of the credit control section. The invoice-age and
/// customer-name fields have their own setters since they are not amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditAmountField {
    TodayCreditSales,
    PaymentsReceived,
    OpeningOutstanding,
    OutstandingCreditBalance,
}

/// Stock-value fields of the inventory section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryField {
    OpeningStockValue,
    StockReceivedValue,
    CostOfGoodsSold,
    ErpClosingStockValue,
}

/// Free-form header fields of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    BranchName,
    ManagerName,
    CashierName,
    OpeningTime,
    ClosingTime,
    Date,
}

/// Free-text fields of the issues section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueField {
    Incidents,
    EquipmentIssues,
    ActionRequired,
}

/// Which attendance roster a staffing edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffRoster {
    Absent,
    HalfDay,
}

/// Coerces invalid numeric input to zero. NaN and infinities come from
/// unparseable or overflowed entry and must never reach the engine.
#[must_use]
pub fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() { amount } else { 0.0 }
}

/// Sets one sales-summary amount.
#[must_use]
pub fn set_sales(report: &DailyReport, field: SalesField, amount: f64) -> DailyReport {
    let mut next = report.clone();
    let amount = sanitize_amount(amount);
    let sales = &mut next.sales_summary;
    match field {
        SalesField::GrossSalesExclVat => sales.gross_sales_excl_vat = amount,
        SalesField::TaxAmount => sales.tax_amount = amount,
        SalesField::NetSalesInclVat => sales.net_sales_incl_vat = amount,
        SalesField::Discounts => sales.discounts = amount,
        SalesField::SalesReturnNet => sales.sales_return_net = amount,
    }
    next
}

/// Sets one payment-mode amount.
#[must_use]
pub fn set_payment(report: &DailyReport, field: PaymentField, amount: f64) -> DailyReport {
    let mut next = report.clone();
    let amount = sanitize_amount(amount);
    let payments = &mut next.payment_breakdown;
    match field {
        PaymentField::Cash => payments.cash = amount,
        PaymentField::PosCard => payments.pos_card = amount,
        PaymentField::BankTransfer => payments.bank_transfer = amount,
        PaymentField::CreditSales => payments.credit_sales = amount,
        PaymentField::Other => payments.other = amount,
    }
    next
}

/// Sets one cash-control amount.
#[must_use]
pub fn set_cash(report: &DailyReport, field: CashField, amount: f64) -> DailyReport {
    let mut next = report.clone();
    let amount = sanitize_amount(amount);
    let cash = &mut next.cash_control;
    match field {
        CashField::OpeningBalance => cash.opening_balance = amount,
        CashField::CashSales => cash.cash_sales = amount,
        CashField::CashExpenses => cash.cash_expenses = amount,
        CashField::HeadOfficeDeposits => cash.head_office_deposits = amount,
        CashField::ActualCashCount => cash.actual_cash_count = amount,
    }
    next
}

/// Sets one credit-control amount.
#[must_use]
pub fn set_credit_amount(
    report: &DailyReport,
    field: CreditAmountField,
    amount: f64,
) -> DailyReport {
    let mut next = report.clone();
    let amount = sanitize_amount(amount);
    let credit = &mut next.credit_control;
    match field {
        CreditAmountField::TodayCreditSales => credit.today_credit_sales = amount,
        CreditAmountField::PaymentsReceived => credit.payments_received = amount,
        CreditAmountField::OpeningOutstanding => credit.opening_outstanding = amount,
        CreditAmountField::OutstandingCreditBalance => credit.outstanding_credit_balance = amount,
    }
    next
}

/// Sets the oldest unpaid invoice's age in days.
#[must_use]
pub fn set_oldest_invoice_age(report: &DailyReport, days: u32) -> DailyReport {
    let mut next = report.clone();
    next.credit_control.oldest_invoice_age = days;
    next
}

/// Sets the oldest unpaid invoice's customer name.
#[must_use]
pub fn set_oldest_invoice_customer(report: &DailyReport, name: &str) -> DailyReport {
    let mut next = report.clone();
    next.credit_control.oldest_invoice_customer_name = name.to_string();
    next
}

/// Sets one inventory stock value.
#[must_use]
pub fn set_inventory(report: &DailyReport, field: InventoryField, amount: f64) -> DailyReport {
    let mut next = report.clone();
    let amount = sanitize_amount(amount);
    let inventory = &mut next.inventory;
    match field {
        InventoryField::OpeningStockValue => inventory.opening_stock_value = amount,
        InventoryField::StockReceivedValue => inventory.stock_received_value = amount,
        InventoryField::CostOfGoodsSold => inventory.cost_of_goods_sold = amount,
        InventoryField::ErpClosingStockValue => inventory.erp_closing_stock_value = amount,
    }
    next
}

/// Sets one free-form header field.
#[must_use]
pub fn set_header(report: &DailyReport, field: HeaderField, value: &str) -> DailyReport {
    let mut next = report.clone();
    match field {
        HeaderField::BranchName => next.branch_name = value.to_string(),
        HeaderField::ManagerName => next.manager_name = value.to_string(),
        HeaderField::CashierName => next.cashier_name = value.to_string(),
        HeaderField::OpeningTime => next.opening_time = value.to_string(),
        HeaderField::ClosingTime => next.closing_time = value.to_string(),
        HeaderField::Date => next.date = value.to_string(),
    }
    next
}

/// Sets one issues text field.
#[must_use]
pub fn set_issue(report: &DailyReport, field: IssueField, text: &str) -> DailyReport {
    let mut next = report.clone();
    match field {
        IssueField::Incidents => next.issues.incidents = text.to_string(),
        IssueField::EquipmentIssues => next.issues.equipment_issues = text.to_string(),
        IssueField::ActionRequired => next.issues.action_required = text.to_string(),
    }
    next
}

/// Appends a blank expense line with a fresh unique id.
#[must_use]
pub fn add_expense(report: &DailyReport) -> DailyReport {
    let mut next = report.clone();
    next.expenses.push(ExpenseItem {
        id: Uuid::new_v4().to_string(),
        description: String::new(),
        category: String::new(),
        amount: 0.0,
    });
    next
}

/// Removes the expense line with the given id. Unknown ids are a no-op;
/// every other line keeps its id, amount, and position.
#[must_use]
pub fn remove_expense(report: &DailyReport, id: &str) -> DailyReport {
    let mut next = report.clone();
    next.expenses.retain(|e| e.id != id);
    next
}

/// Sets the description of the expense line with the given id.
#[must_use]
pub fn set_expense_description(report: &DailyReport, id: &str, description: &str) -> DailyReport {
    let mut next = report.clone();
    if let Some(expense) = next.expenses.iter_mut().find(|e| e.id == id) {
        expense.description = description.to_string();
    }
    next
}

/// Sets the category of the expense line with the given id.
#[must_use]
pub fn set_expense_category(report: &DailyReport, id: &str, category: &str) -> DailyReport {
    let mut next = report.clone();
    if let Some(expense) = next.expenses.iter_mut().find(|e| e.id == id) {
        expense.category = category.to_string();
    }
    next
}

/// Sets the amount of the expense line with the given id.
#[must_use]
pub fn set_expense_amount(report: &DailyReport, id: &str, amount: f64) -> DailyReport {
    let mut next = report.clone();
    if let Some(expense) = next.expenses.iter_mut().find(|e| e.id == id) {
        expense.amount = sanitize_amount(amount);
    }
    next
}

/// Sets an attendance count and resynchronizes the matching name list to
/// exactly that length (truncate from the tail, pad with empty strings).
/// Negative or fractional counts clamp through [`staffing::clamp_count`].
#[must_use]
pub fn set_staff_count(report: &DailyReport, roster: StaffRoster, count: f64) -> DailyReport {
    let mut next = report.clone();
    let count = staffing::clamp_count(count);
    match roster {
        StaffRoster::Absent => {
            next.staffing.staff_absent = count;
            next.staffing.absent_staff_names =
                staffing::resync_names(&report.staffing.absent_staff_names, count);
        }
        StaffRoster::HalfDay => {
            next.staffing.staff_half_day = count;
            next.staffing.half_day_staff_names =
                staffing::resync_names(&report.staffing.half_day_staff_names, count);
        }
    }
    next
}

/// Sets one name on an attendance roster. An index past the current count is
/// a no-op; the list length is owned by [`set_staff_count`].
#[must_use]
pub fn set_staff_name(
    report: &DailyReport,
    roster: StaffRoster,
    index: usize,
    name: &str,
) -> DailyReport {
    let mut next = report.clone();
    let names = match roster {
        StaffRoster::Absent => &mut next.staffing.absent_staff_names,
        StaffRoster::HalfDay => &mut next.staffing.half_day_staff_names,
    };
    if let Some(slot) = names.get_mut(index) {
        *slot = name.to_string();
    }
    next
}

/// Repairs an untrusted report (typically one loaded from a file): coerces
/// every non-finite amount to zero and resynchronizes both staffing name
/// lists to their counts.
#[must_use]
pub fn sanitize_report(mut report: DailyReport) -> DailyReport {
    let sales = &mut report.sales_summary;
    sales.gross_sales_excl_vat = sanitize_amount(sales.gross_sales_excl_vat);
    sales.tax_amount = sanitize_amount(sales.tax_amount);
    sales.net_sales_incl_vat = sanitize_amount(sales.net_sales_incl_vat);
    sales.discounts = sanitize_amount(sales.discounts);
    sales.sales_return_net = sanitize_amount(sales.sales_return_net);

    let payments = &mut report.payment_breakdown;
    payments.cash = sanitize_amount(payments.cash);
    payments.pos_card = sanitize_amount(payments.pos_card);
    payments.bank_transfer = sanitize_amount(payments.bank_transfer);
    payments.credit_sales = sanitize_amount(payments.credit_sales);
    payments.other = sanitize_amount(payments.other);

    let cash = &mut report.cash_control;
    cash.opening_balance = sanitize_amount(cash.opening_balance);
    cash.cash_sales = sanitize_amount(cash.cash_sales);
    cash.cash_expenses = sanitize_amount(cash.cash_expenses);
    cash.head_office_deposits = sanitize_amount(cash.head_office_deposits);
    cash.actual_cash_count = sanitize_amount(cash.actual_cash_count);

    for expense in &mut report.expenses {
        expense.amount = sanitize_amount(expense.amount);
    }

    let credit = &mut report.credit_control;
    credit.today_credit_sales = sanitize_amount(credit.today_credit_sales);
    credit.payments_received = sanitize_amount(credit.payments_received);
    credit.opening_outstanding = sanitize_amount(credit.opening_outstanding);
    credit.outstanding_credit_balance = sanitize_amount(credit.outstanding_credit_balance);

    let inventory = &mut report.inventory;
    inventory.opening_stock_value = sanitize_amount(inventory.opening_stock_value);
    inventory.stock_received_value = sanitize_amount(inventory.stock_received_value);
    inventory.cost_of_goods_sold = sanitize_amount(inventory.cost_of_goods_sold);
    inventory.erp_closing_stock_value = sanitize_amount(inventory.erp_closing_stock_value);

    let staff = &mut report.staffing;
    staff.absent_staff_names = staffing::resync_names(&staff.absent_staff_names, staff.staff_absent);
    staff.half_day_staff_names =
        staffing::resync_names(&staff.half_day_staff_names, staff.staff_half_day);

    report
}
