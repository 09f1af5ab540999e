use serde::{Deserialize, Serialize};

use super::doctor::DoctorInfo;
use super::enums::ThemeMode;

pub const DEFAULT_PRIMARY_COLOR: &str = "#2563eb";

/// Appearance preferences owned by the settings service. Applied through
/// `appearance::apply`, never by mutating style state ad hoc.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    pub theme_mode: ThemeMode,
    /// Primary accent color as a `#rrggbb` hex string.
    pub primary_color: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Light,
            primary_color: DEFAULT_PRIMARY_COLOR.into(),
        }
    }
}

/// The settings document persisted as a singleton JSON row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    pub doctor: DoctorInfo,
    pub appearance: AppearanceConfig,
}
