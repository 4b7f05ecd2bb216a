use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::DEFAULT_GST_RATE;

/// Version string shown on the about screen.
pub const APP_VERSION: &str = "2.5.0 (Beta)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// User preferences. Every field falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preferred color scheme. Read by graphical front ends; the terminal
    /// front end leaves colors to the terminal.
    pub theme: ThemeMode,

    /// Prefix for monetary amounts.
    pub currency_symbol: String,

    /// GST rate preselected by the GST tool.
    pub default_gst_rate: Decimal,

    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            currency_symbol: "$".to_string(),
            default_gst_rate: DEFAULT_GST_RATE,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }
}
