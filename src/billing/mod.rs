//! Billing engine: invoice creation/numbering, the filter/aggregate
//! pipeline over the invoice list, money formatting, and CSV export.

pub mod csv;
pub mod filter;
pub mod money;
pub mod number;
pub mod summary;

pub use csv::{csv_filename, export_invoices_csv, CSV_MIME};
pub use filter::filter_invoices;
pub use money::{format_amount, CURRENCY};
pub use number::{fallback_invoice_number, next_invoice_number};
pub use summary::{summarize_invoices, BillingSummary};

use chrono::{Local, Utc};
use rusqlite::Connection;
use uuid::Uuid;

use crate::db::{repository, DatabaseError};
use crate::models::enums::InvoiceStatus;
use crate::models::{Invoice, NewInvoice};

/// Create an invoice from a submitted form: assign the next invoice
/// number (degrading to the local fallback if numbering fails), stamp
/// the creation time, and persist.
pub fn create_invoice(conn: &Connection, new: &NewInvoice) -> Result<Invoice, DatabaseError> {
    let today = Local::now().date_naive();
    let invoice_number = number::next_invoice_number(conn, today);

    let patient_name = match new.patient_id {
        Some(id) => repository::get_patient_name(conn, &id)?,
        None => None,
    };

    let invoice = Invoice {
        id: Uuid::new_v4(),
        invoice_number,
        patient_id: new.patient_id,
        patient_name,
        service_description: new.service_description.clone(),
        amount: new.amount,
        due_date: new.due_date,
        status: InvoiceStatus::Pending,
        created_at: Utc::now(),
    };

    repository::insert_invoice(conn, &invoice)?;
    tracing::info!("created invoice {}", invoice.invoice_number);
    Ok(invoice)
}
