//! Billing document & reporting engine for the DoctorConnect clinic manager.
//!
//! The crate owns the billing-side data layer (patients, invoices,
//! prescriptions, settings), the invoice filter/aggregate pipeline, PDF
//! rendering for invoices and prescriptions, and CSV export. Everything is
//! synchronous and in-process; UI event handlers call straight into it.

pub mod appearance;
pub mod billing;
pub mod config;
pub mod db;
pub mod models;
pub mod pdf;

use tracing_subscriber::EnvFilter;

/// Initialise structured logging for the embedding application.
///
/// Honors `RUST_LOG` when set; call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} billing engine v{}", config::APP_NAME, config::APP_VERSION);
}
