use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The slice of the patient record the billing engine needs: an identity
/// for ownership joins and a display name for documents and search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub full_name: String,
}
