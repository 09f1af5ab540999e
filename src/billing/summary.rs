//! Running billing totals. Computed over the whole collection, never the
//! filtered view: the dashboard cards stay put while the list narrows.

use serde::Serialize;

use crate::models::enums::InvoiceStatus;
use crate::models::Invoice;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingSummary {
    /// Sum of amounts still awaiting payment.
    pub total_pending: f64,
    /// Sum of amounts already collected.
    pub total_paid: f64,
}

pub fn summarize_invoices(invoices: &[Invoice]) -> BillingSummary {
    let total_for = |status: InvoiceStatus| -> f64 {
        invoices
            .iter()
            .filter(|inv| inv.status == status)
            .map(|inv| inv.amount)
            .sum()
    };

    BillingSummary {
        total_pending: total_for(InvoiceStatus::Pending),
        total_paid: total_for(InvoiceStatus::Paid),
    }
}
