//! Fragment tables that follow the system color mode.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::resolve::{ConfigurationError, FragmentTable};

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

/// A pair of fragment tables, one per color mode.
///
/// # Example
///
/// ```rust
/// use statestyle::{AdaptiveTable, ColorMode, FragmentTable};
///
/// let light = FragmentTable::new().add("base", "background-color: white;");
/// let dark = FragmentTable::new().add("base", "background-color: black;");
/// let adaptive = AdaptiveTable::new(light, dark);
///
/// let table = adaptive.for_mode(ColorMode::Dark);
/// assert_eq!(table.get("base").unwrap().get("background-color"), Some("black"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptiveTable {
    light: FragmentTable,
    dark: FragmentTable,
}

impl AdaptiveTable {
    /// Creates an adaptive table with separate light and dark variants.
    pub fn new(light: FragmentTable, dark: FragmentTable) -> Self {
        Self { light, dark }
    }

    /// Returns the table for an explicit mode.
    pub fn for_mode(&self, mode: ColorMode) -> &FragmentTable {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Returns the table for the current color mode.
    pub fn resolve(&self) -> &FragmentTable {
        self.for_mode(detect_color_mode())
    }

    /// Validates both variants.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.light.validate()?;
        self.dark.validate()
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to decide between light and dark tables.
///
/// Useful in tests or to force a mode regardless of OS settings.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Returns the color mode reported by the current detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn adaptive() -> AdaptiveTable {
        AdaptiveTable::new(
            FragmentTable::new().add("base", "color: black;"),
            FragmentTable::new().add("base", "color: white;"),
        )
    }

    #[test]
    #[serial]
    fn test_adaptive_table_uses_detector() {
        let adaptive = adaptive();

        set_mode_detector(|| ColorMode::Dark);
        assert_eq!(
            adaptive.resolve().get("base").unwrap().get("color"),
            Some("white")
        );

        set_mode_detector(|| ColorMode::Light);
        assert_eq!(
            adaptive.resolve().get("base").unwrap().get("color"),
            Some("black")
        );

        // Reset to default for other tests
        set_mode_detector(|| ColorMode::Light);
    }

    #[test]
    fn test_validate_checks_both_variants() {
        assert!(adaptive().validate().is_err());
    }
}
