//! Flat CSV export of the filtered billing view.
//!
//! The format is deliberately naive: fields are comma-joined with no
//! quoting or escaping, so a comma inside a service description or
//! patient name shifts columns. Downstream consumers of the original
//! export rely on the exact byte layout, so the limitation is kept.

use chrono::{Datelike, NaiveDate};

use crate::models::Invoice;

pub const CSV_MIME: &str = "text/csv";

const CSV_HEADER: [&str; 7] = [
    "Invoice #",
    "Patient",
    "Service",
    "Amount",
    "Due Date",
    "Status",
    "Created At",
];

/// Serialize a filtered view (borrowed rows, order preserved) into CSV
/// text: header line plus one line per invoice.
pub fn export_invoices_csv(invoices: &[&Invoice]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(invoices.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for inv in invoices {
        let row = [
            inv.invoice_number.clone(),
            inv.patient_name.clone().unwrap_or_default(),
            inv.service_description.clone(),
            inv.amount.to_string(),
            short_date(inv.due_date),
            inv.status.as_str().to_string(),
            short_date(inv.created_at.date_naive()),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Download name for an export triggered today: `invoices_{ISO date}.csv`.
pub fn csv_filename(today: NaiveDate) -> String {
    format!("invoices_{today}.csv")
}

// US-style numeric date, as the original export produced.
fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
