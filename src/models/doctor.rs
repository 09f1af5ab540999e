use serde::{Deserialize, Serialize};

/// Presentation-only contact/branding data injected into rendered
/// documents. Not persisted per-invoice; supplied at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorInfo {
    pub name: String,
    pub clinic: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Default for DoctorInfo {
    // The stand-in identity used whenever no doctor profile has been
    // configured. Substituted wholesale, never field by field.
    fn default() -> Self {
        Self {
            name: "Dr. John Doe".into(),
            clinic: "DoctorConnect Healthcare".into(),
            address: "123 Medical Center, Healthcare City".into(),
            phone: "+1 (555) 123-4567".into(),
            email: "doctor@healthcare.com".into(),
        }
    }
}
