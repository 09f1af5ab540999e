//! The billing-list filter pipeline. Three predicate categories — search,
//! status, relative date range — are evaluated independently and
//! AND-combined. Filtering is pure: it borrows from the collection and
//! never mutates it, so applying the same filter twice is a no-op.

use chrono::{DateTime, Utc};

use crate::models::enums::DateRange;
use crate::models::{Invoice, InvoiceFilter};

const MILLIS_PER_DAY: f64 = 1000.0 * 3600.0 * 24.0;

/// Apply the filter to a collection fetched newest-first, preserving
/// order. `now` anchors the relative date ranges.
pub fn filter_invoices<'a>(
    invoices: &'a [Invoice],
    filter: &InvoiceFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Invoice> {
    let term = filter.search.to_lowercase();
    invoices
        .iter()
        .filter(|inv| {
            matches_search(inv, &term)
                && matches_status(inv, filter)
                && matches_date_range(inv, &filter.date_range, now)
        })
        .collect()
}

/// Case-insensitive substring match, OR across invoice number, patient
/// name and service description. An empty term matches everything; a
/// failed patient join simply cannot match on name.
fn matches_search(inv: &Invoice, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return true;
    }
    inv.invoice_number.to_lowercase().contains(term_lower)
        || inv
            .patient_name
            .as_ref()
            .is_some_and(|name| name.to_lowercase().contains(term_lower))
        || inv.service_description.to_lowercase().contains(term_lower)
}

fn matches_status(inv: &Invoice, filter: &InvoiceFilter) -> bool {
    match &filter.status {
        None => true,
        Some(status) => inv.status == *status,
    }
}

/// Relative date windows are strict: an invoice created exactly 7.0 days
/// ago does not belong to `Week`.
fn matches_date_range(inv: &Invoice, range: &DateRange, now: DateTime<Utc>) -> bool {
    let days = (now - inv.created_at).num_milliseconds() as f64 / MILLIS_PER_DAY;
    match range {
        DateRange::All => true,
        DateRange::Today => days < 1.0,
        DateRange::Week => days < 7.0,
        DateRange::Month => days < 30.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::summary::summarize_invoices;
    use crate::models::enums::InvoiceStatus;
    use chrono::{Duration, NaiveDate};
    use uuid::Uuid;

    fn invoice(
        number: &str,
        patient: Option<&str>,
        amount: f64,
        status: InvoiceStatus,
        created_at: DateTime<Utc>,
    ) -> Invoice {
        Invoice {
            id: Uuid::new_v4(),
            invoice_number: number.into(),
            patient_id: patient.map(|_| Uuid::new_v4()),
            patient_name: patient.map(Into::into),
            service_description: "General consultation".into(),
            amount,
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            status,
            created_at,
        }
    }

    fn scenario(now: DateTime<Utc>) -> Vec<Invoice> {
        vec![
            invoice("INV-1", Some("Alice"), 100.0, InvoiceStatus::Pending, now),
            invoice("INV-2", Some("Bob"), 50.0, InvoiceStatus::Paid, now - Duration::days(10)),
        ]
    }

    #[test]
    fn no_filters_returns_everything() {
        let now = Utc::now();
        let invoices = scenario(now);
        let view = filter_invoices(&invoices, &InvoiceFilter::default(), now);
        assert_eq!(view.len(), 2);

        let summary = summarize_invoices(&invoices);
        assert_eq!(summary.total_pending, 100.0);
        assert_eq!(summary.total_paid, 50.0);
    }

    #[test]
    fn filtering_is_idempotent() {
        let now = Utc::now();
        let invoices = scenario(now);
        let filter = InvoiceFilter {
            search: "inv".into(),
            status: Some(InvoiceStatus::Pending),
            date_range: DateRange::Month,
        };

        let once: Vec<String> = filter_invoices(&invoices, &filter, now)
            .iter()
            .map(|i| i.invoice_number.clone())
            .collect();
        let narrowed: Vec<Invoice> = filter_invoices(&invoices, &filter, now)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<String> = filter_invoices(&narrowed, &filter, now)
            .iter()
            .map(|i| i.invoice_number.clone())
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn summary_ignores_active_filter() {
        let now = Utc::now();
        let invoices = scenario(now);
        let filter = InvoiceFilter {
            search: "alice".into(),
            status: Some(InvoiceStatus::Pending),
            date_range: DateRange::Today,
        };

        let view = filter_invoices(&invoices, &filter, now);
        assert_eq!(view.len(), 1);

        // The aggregates keep reading the unfiltered collection.
        let summary = summarize_invoices(&invoices);
        assert_eq!(summary.total_pending, 100.0);
        assert_eq!(summary.total_paid, 50.0);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let now = Utc::now();
        let invoices = scenario(now);

        for term in ["alice", "ALICE", "inv-1", "CONSULT"] {
            let filter = InvoiceFilter { search: term.into(), ..Default::default() };
            assert!(
                !filter_invoices(&invoices, &filter, now).is_empty(),
                "expected a match for {term:?}"
            );
        }
    }

    #[test]
    fn empty_search_matches_everything() {
        let now = Utc::now();
        let invoices = scenario(now);
        let filter = InvoiceFilter { search: String::new(), ..Default::default() };
        assert_eq!(filter_invoices(&invoices, &filter, now).len(), 2);
    }

    #[test]
    fn missing_patient_join_does_not_match_or_panic() {
        let now = Utc::now();
        let mut orphan = invoice("INV-9", Some("Ghost"), 10.0, InvoiceStatus::Pending, now);
        orphan.patient_name = None;
        let invoices = vec![orphan];

        let by_name = InvoiceFilter { search: "ghost".into(), ..Default::default() };
        assert!(filter_invoices(&invoices, &by_name, now).is_empty());

        // The other two fields still match.
        let by_number = InvoiceFilter { search: "inv-9".into(), ..Default::default() };
        assert_eq!(filter_invoices(&invoices, &by_number, now).len(), 1);
    }

    #[test]
    fn week_boundary_is_strictly_less_than() {
        let now = Utc::now();
        let exactly_seven = invoice(
            "INV-7",
            None,
            10.0,
            InvoiceStatus::Pending,
            now - Duration::days(7),
        );
        let just_inside = invoice(
            "INV-6",
            None,
            10.0,
            InvoiceStatus::Pending,
            now - Duration::milliseconds((6.99 * MILLIS_PER_DAY) as i64),
        );
        let invoices = vec![exactly_seven, just_inside];

        let filter = InvoiceFilter { date_range: DateRange::Week, ..Default::default() };
        let view = filter_invoices(&invoices, &filter, now);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].invoice_number, "INV-6");
    }

    #[test]
    fn today_and_month_windows() {
        let now = Utc::now();
        let invoices = vec![
            invoice("INV-NOW", None, 1.0, InvoiceStatus::Pending, now),
            invoice("INV-3D", None, 1.0, InvoiceStatus::Pending, now - Duration::days(3)),
            invoice("INV-20D", None, 1.0, InvoiceStatus::Pending, now - Duration::days(20)),
            invoice("INV-40D", None, 1.0, InvoiceStatus::Pending, now - Duration::days(40)),
        ];

        let today = InvoiceFilter { date_range: DateRange::Today, ..Default::default() };
        assert_eq!(filter_invoices(&invoices, &today, now).len(), 1);

        let month = InvoiceFilter { date_range: DateRange::Month, ..Default::default() };
        assert_eq!(filter_invoices(&invoices, &month, now).len(), 3);
    }

    #[test]
    fn predicates_combine_with_and() {
        let now = Utc::now();
        let invoices = scenario(now);
        // Bob matches the search, but his invoice is paid and 10 days old.
        let filter = InvoiceFilter {
            search: "bob".into(),
            status: Some(InvoiceStatus::Pending),
            date_range: DateRange::Week,
        };
        assert!(filter_invoices(&invoices, &filter, now).is_empty());
    }
}
