use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Frequency;

/// A clinical record of a medication order for a patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub patient_id: Option<Uuid>,
    /// Display name projected from the patients table at list time.
    pub patient_name: Option<String>,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: Frequency,
    /// Free text, e.g. "7 days" or "until finished".
    pub duration: String,
    pub special_instructions: Option<String>,
    pub prescribed_date: NaiveDate,
    /// Prescribing doctor's display name, printed on the PDF.
    pub doctor_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionUpdate {
    pub patient_id: Option<Uuid>,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub duration: String,
    pub special_instructions: Option<String>,
    pub prescribed_date: NaiveDate,
}
