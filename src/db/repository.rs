use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use super::DatabaseError;
use crate::models::enums::*;
use crate::models::*;

// ═══════════════════════════════════════════
// Invoice Repository
// ═══════════════════════════════════════════

pub fn insert_invoice(conn: &Connection, inv: &Invoice) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO invoices (id, invoice_number, patient_id, service_description,
         amount, due_date, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            inv.id.to_string(),
            inv.invoice_number,
            inv.patient_id.map(|id| id.to_string()),
            inv.service_description,
            inv.amount,
            inv.due_date.to_string(),
            inv.status.as_str(),
            inv.created_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

/// All invoices with the patient display name joined in, newest first.
/// A deleted patient leaves the reference dangling and the name NULL.
pub fn list_invoices(conn: &Connection) -> Result<Vec<Invoice>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT i.id, i.invoice_number, i.patient_id, p.full_name,
                i.service_description, i.amount, i.due_date, i.status, i.created_at
         FROM invoices i
         LEFT JOIN patients p ON i.patient_id = p.id
         ORDER BY i.created_at DESC",
    )?;

    let rows = stmt.query_map([], invoice_columns)?;

    let mut invoices = Vec::new();
    for row in rows {
        invoices.push(invoice_from_row(row?)?);
    }
    Ok(invoices)
}

pub fn get_invoice(conn: &Connection, id: &Uuid) -> Result<Invoice, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT i.id, i.invoice_number, i.patient_id, p.full_name,
                i.service_description, i.amount, i.due_date, i.status, i.created_at
         FROM invoices i
         LEFT JOIN patients p ON i.patient_id = p.id
         WHERE i.id = ?1",
    )?;

    let row = stmt
        .query_row(params![id.to_string()], invoice_columns)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DatabaseError::NotFound {
                entity_type: "Invoice".into(),
                id: id.to_string(),
            },
            other => DatabaseError::from(other),
        })?;

    invoice_from_row(row)
}

/// Full-record update; the invoice number and creation timestamp stay.
pub fn update_invoice(
    conn: &Connection,
    id: &Uuid,
    update: &InvoiceUpdate,
) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE invoices SET patient_id = ?1, service_description = ?2,
         amount = ?3, due_date = ?4 WHERE id = ?5",
        params![
            update.patient_id.map(|p| p.to_string()),
            update.service_description,
            update.amount,
            update.due_date.to_string(),
            id.to_string(),
        ],
    )?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "Invoice".into(),
            id: id.to_string(),
        });
    }
    Ok(())
}

/// Overwrite the status. Deliberately permissive: any status may replace
/// any other (paid invoices can go back to pending).
pub fn update_invoice_status(
    conn: &Connection,
    id: &Uuid,
    status: &InvoiceStatus,
) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE invoices SET status = ?1 WHERE id = ?2",
        params![status.as_str(), id.to_string()],
    )?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "Invoice".into(),
            id: id.to_string(),
        });
    }
    Ok(())
}

/// Hard delete, regardless of status.
pub fn delete_invoice(conn: &Connection, id: &Uuid) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM invoices WHERE id = ?1", params![id.to_string()])?;
    Ok(())
}

/// Server-side invoice numbering: sequential within the calendar month,
/// `INV-{year}{month}-{seq}`. The billing layer falls back to a random
/// suffix when this call fails.
pub fn generate_invoice_number(
    conn: &Connection,
    today: NaiveDate,
) -> Result<String, DatabaseError> {
    let prefix = format!("INV-{}{:02}-", today.year(), today.month());
    let issued: i64 = conn.query_row(
        "SELECT COUNT(*) FROM invoices WHERE invoice_number LIKE ?1",
        params![format!("{prefix}%")],
        |row| row.get(0),
    )?;
    Ok(format!("{prefix}{:03}", issued + 1))
}

type InvoiceRow = (
    String,
    String,
    Option<String>,
    Option<String>,
    String,
    f64,
    String,
    String,
    String,
);

fn invoice_columns(row: &rusqlite::Row<'_>) -> Result<InvoiceRow, rusqlite::Error> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
        row.get(8)?,
    ))
}

fn invoice_from_row(row: InvoiceRow) -> Result<Invoice, DatabaseError> {
    let (id, number, patient_id, patient_name, description, amount, due, status, created) = row;
    Ok(Invoice {
        id: parse_uuid(&id)?,
        invoice_number: number,
        patient_id: patient_id.and_then(|s| Uuid::parse_str(&s).ok()),
        patient_name,
        service_description: description,
        amount,
        due_date: parse_date(&due)?,
        status: InvoiceStatus::from_str(&status)?,
        created_at: parse_timestamp(&created)?,
    })
}

// ═══════════════════════════════════════════
// Patient Repository
// ═══════════════════════════════════════════

pub fn insert_patient(conn: &Connection, patient: &Patient) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO patients (id, full_name) VALUES (?1, ?2)",
        params![patient.id.to_string(), patient.full_name],
    )?;
    Ok(())
}

pub fn list_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, full_name FROM patients ORDER BY full_name ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut patients = Vec::new();
    for row in rows {
        let (id, full_name) = row?;
        patients.push(Patient { id: parse_uuid(&id)?, full_name });
    }
    Ok(patients)
}

/// Display-name lookup for document rendering and search joins.
/// Returns `None` for an unknown id rather than an error: a dangling
/// invoice reference is an expected state, not a failure.
pub fn get_patient_name(conn: &Connection, id: &Uuid) -> Result<Option<String>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT full_name FROM patients WHERE id = ?1")?;
    match stmt.query_row(params![id.to_string()], |row| row.get::<_, String>(0)) {
        Ok(name) => Ok(Some(name)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::from(e)),
    }
}

/// Hard delete. Invoices and prescriptions for the patient are kept;
/// their joins project a NULL name from here on.
pub fn delete_patient(conn: &Connection, id: &Uuid) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM patients WHERE id = ?1", params![id.to_string()])?;
    Ok(())
}

// ═══════════════════════════════════════════
// Prescription Repository
// ═══════════════════════════════════════════

pub fn insert_prescription(
    conn: &Connection,
    rx: &Prescription,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO prescriptions (id, patient_id, medication_name, dosage, frequency,
         duration, special_instructions, prescribed_date, doctor_name)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            rx.id.to_string(),
            rx.patient_id.map(|id| id.to_string()),
            rx.medication_name,
            rx.dosage,
            rx.frequency.as_str(),
            rx.duration,
            rx.special_instructions,
            rx.prescribed_date.to_string(),
            rx.doctor_name,
        ],
    )?;
    Ok(())
}

/// All prescriptions with patient names joined in, newest prescribed first.
pub fn list_prescriptions(conn: &Connection) -> Result<Vec<Prescription>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT r.id, r.patient_id, p.full_name, r.medication_name, r.dosage,
                r.frequency, r.duration, r.special_instructions, r.prescribed_date, r.doctor_name
         FROM prescriptions r
         LEFT JOIN patients p ON r.patient_id = p.id
         ORDER BY r.prescribed_date DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, Option<String>>(1)?,
            row.get::<_, Option<String>>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, String>(6)?,
            row.get::<_, Option<String>>(7)?,
            row.get::<_, String>(8)?,
            row.get::<_, String>(9)?,
        ))
    })?;

    let mut prescriptions = Vec::new();
    for row in rows {
        let (id, patient_id, patient_name, med, dosage, freq, duration, instructions, date, doctor) =
            row?;
        prescriptions.push(Prescription {
            id: parse_uuid(&id)?,
            patient_id: patient_id.and_then(|s| Uuid::parse_str(&s).ok()),
            patient_name,
            medication_name: med,
            dosage,
            frequency: Frequency::from_str(&freq)?,
            duration,
            special_instructions: instructions,
            prescribed_date: parse_date(&date)?,
            doctor_name: doctor,
        });
    }
    Ok(prescriptions)
}

pub fn update_prescription(
    conn: &Connection,
    id: &Uuid,
    update: &PrescriptionUpdate,
) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE prescriptions SET patient_id = ?1, medication_name = ?2, dosage = ?3,
         frequency = ?4, duration = ?5, special_instructions = ?6, prescribed_date = ?7
         WHERE id = ?8",
        params![
            update.patient_id.map(|p| p.to_string()),
            update.medication_name,
            update.dosage,
            update.frequency.as_str(),
            update.duration,
            update.special_instructions,
            update.prescribed_date.to_string(),
            id.to_string(),
        ],
    )?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "Prescription".into(),
            id: id.to_string(),
        });
    }
    Ok(())
}

pub fn delete_prescription(conn: &Connection, id: &Uuid) -> Result<(), DatabaseError> {
    conn.execute(
        "DELETE FROM prescriptions WHERE id = ?1",
        params![id.to_string()],
    )?;
    Ok(())
}

// ═══════════════════════════════════════════
// Settings Repository
// ═══════════════════════════════════════════

/// Load the settings document (singleton row, id=1).
/// Missing row = defaults: nothing has been configured yet.
pub fn load_settings(conn: &Connection) -> Result<AppSettings, DatabaseError> {
    let mut stmt = conn.prepare("SELECT document FROM settings WHERE id = 1")?;
    match stmt.query_row([], |row| row.get::<_, String>(0)) {
        Ok(document) => Ok(serde_json::from_str(&document)?),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(AppSettings::default()),
        Err(e) => Err(DatabaseError::from(e)),
    }
}

/// Persist the settings document (upsert on the singleton row).
pub fn save_settings(conn: &Connection, settings: &AppSettings) -> Result<(), DatabaseError> {
    let document = serde_json::to_string(settings)?;
    conn.execute(
        "INSERT INTO settings (id, document, updated_at)
         VALUES (1, ?1, datetime('now'))
         ON CONFLICT(id) DO UPDATE SET document = ?1, updated_at = datetime('now')",
        params![document],
    )?;
    Ok(())
}

// ═══════════════════════════════════════════
// Row parsing helpers
// ═══════════════════════════════════════════

fn parse_uuid(s: &str) -> Result<Uuid, DatabaseError> {
    Uuid::parse_str(s).map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))
}

fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DatabaseError::ConstraintViolation(format!("bad date {s}: {e}")))
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DatabaseError::ConstraintViolation(format!("bad timestamp {s}: {e}")))
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
