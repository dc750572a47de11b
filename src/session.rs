//! The report editing session.
//!
//! Owns the single in-memory [`DailyReport`] and the [`DerivedFigures`] for
//! it. Edits are pure functions from the current value to a new one; the
//! session swaps the value in and recomputes the figures inside the same
//! call, so a read can never observe figures that lag behind an edit.
//!
//! Because edits replace the value wholesale, undo and redo are just stacks
//! of previous values.

use crate::core::derive::{DerivedFigures, derive};
use crate::model::DailyReport;

/// An in-progress closing-report edit session.
#[derive(Debug, Clone)]
pub struct ReportSession {
    current: DailyReport,
    figures: DerivedFigures,
    undo_stack: Vec<DailyReport>,
    redo_stack: Vec<DailyReport>,
}

impl Default for ReportSession {
    fn default() -> Self {
        Self::new(DailyReport::default())
    }
}

impl ReportSession {
    /// Starts a session over an existing report value.
    #[must_use]
    pub fn new(report: DailyReport) -> Self {
        let figures = derive(&report);
        Self {
            current: report,
            figures,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// The current report value.
    #[must_use]
    pub fn report(&self) -> &DailyReport {
        &self.current
    }

    /// The figures for the current report. Always reflects the most recently
    /// applied edit.
    #[must_use]
    pub fn figures(&self) -> &DerivedFigures {
        &self.figures
    }

    /// Applies a pure edit to the current report and recomputes the figures
    /// before returning. A fresh edit clears the redo stack.
    pub fn apply<F>(&mut self, edit: F)
    where
        F: FnOnce(&DailyReport) -> DailyReport,
    {
        let next = edit(&self.current);
        let previous = std::mem::replace(&mut self.current, next);
        self.undo_stack.push(previous);
        self.redo_stack.clear();
        self.figures = derive(&self.current);
    }

    /// Reverts the most recent edit. Returns false when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(previous) => {
                let undone = std::mem::replace(&mut self.current, previous);
                self.redo_stack.push(undone);
                self.figures = derive(&self.current);
                true
            }
            None => false,
        }
    }

    /// Re-applies the most recently undone edit. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(next) => {
                let undone = std::mem::replace(&mut self.current, next);
                self.undo_stack.push(undone);
                self.figures = derive(&self.current);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::update::{self, SalesField};

    #[test]
    fn test_figures_track_every_edit() {
        let mut session = ReportSession::default();
        assert_eq!(session.figures().final_net_sales, 0.0);

        session.apply(|r| update::set_sales(r, SalesField::NetSalesInclVat, 1150.0));
        assert_eq!(session.figures().final_net_sales, 1150.0);

        session.apply(|r| update::set_sales(r, SalesField::SalesReturnNet, 50.0));
        assert_eq!(session.figures().final_net_sales, 1100.0);
    }

    #[test]
    fn test_undo_restores_value_and_figures() {
        let mut session = ReportSession::default();
        session.apply(|r| update::set_sales(r, SalesField::NetSalesInclVat, 1150.0));
        assert!(session.undo());
        assert_eq!(session.report().sales_summary.net_sales_incl_vat, 0.0);
        assert_eq!(session.figures().final_net_sales, 0.0);
        assert!(!session.undo());
    }

    #[test]
    fn test_redo_after_undo() {
        let mut session = ReportSession::default();
        session.apply(|r| update::set_sales(r, SalesField::NetSalesInclVat, 500.0));
        assert!(session.undo());
        assert!(session.redo());
        assert_eq!(session.figures().final_net_sales, 500.0);
        assert!(!session.redo());
    }

    #[test]
    fn test_new_edit_clears_redo_history() {
        let mut session = ReportSession::default();
        session.apply(|r| update::set_sales(r, SalesField::NetSalesInclVat, 500.0));
        session.undo();
        session.apply(|r| update::set_sales(r, SalesField::NetSalesInclVat, 700.0));
        assert!(!session.redo());
        assert_eq!(session.figures().final_net_sales, 700.0);
    }
}
