use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "DoctorConnect";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set
pub fn default_log_filter() -> &'static str {
    "doctorconnect=info"
}

/// Get the application data directory
/// ~/DoctorConnect/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("DoctorConnect")
}

/// Get the database directory
pub fn database_dir() -> PathBuf {
    app_data_dir().join("database")
}

/// Default path of the clinic database file
pub fn database_path() -> PathBuf {
    database_dir().join("doctorconnect.db")
}

/// Get the exports directory (generated PDFs and CSV files land here)
pub fn exports_dir() -> PathBuf {
    app_data_dir().join("exports")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("DoctorConnect"));
    }

    #[test]
    fn exports_dir_under_app_data() {
        let exports = exports_dir();
        let app = app_data_dir();
        assert!(exports.starts_with(app));
        assert!(exports.ends_with("exports"));
    }

    #[test]
    fn database_path_under_database_dir() {
        assert!(database_path().starts_with(database_dir()));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
