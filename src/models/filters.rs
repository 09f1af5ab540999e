use super::enums::{DateRange, InvoiceStatus};

/// The three independent billing-list predicates. Categories are
/// AND-combined; the defaults match everything.
#[derive(Debug, Clone)]
pub struct InvoiceFilter {
    /// Case-insensitive term matched against invoice number, patient name
    /// and service description (OR across fields). Empty matches all.
    pub search: String,
    /// `None` = all statuses.
    pub status: Option<InvoiceStatus>,
    pub date_range: DateRange,
}

impl Default for InvoiceFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            date_range: DateRange::All,
        }
    }
}
