use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::InvoiceStatus;

/// A billable record linking a patient, a service description, an amount
/// and a payment status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    /// Unique human-readable number, e.g. `INV-202608-001`.
    pub invoice_number: String,
    pub patient_id: Option<Uuid>,
    /// Display name projected from the patients table at list time.
    /// `None` when the referenced patient no longer exists.
    pub patient_name: Option<String>,
    pub service_description: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
}

/// Form payload for creating an invoice; the engine assigns the number,
/// id, status and creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvoice {
    pub patient_id: Option<Uuid>,
    pub service_description: String,
    pub amount: f64,
    pub due_date: NaiveDate,
}

/// Full-record update. The invoice number and creation timestamp are
/// immutable; status changes go through their own operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceUpdate {
    pub patient_id: Option<Uuid>,
    pub service_description: String,
    pub amount: f64,
    pub due_date: NaiveDate,
}
