//! Editor-wide preferences.

use serde::{Deserialize, Serialize};

/// Smallest allowed grid size.
pub const MIN_GRID_SIZE: f64 = 5.0;
/// Largest allowed grid size.
pub const MAX_GRID_SIZE: f64 = 100.0;

/// UI color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Editor preference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    pub snap_to_grid: bool,
    pub show_guides: bool,
    pub show_rulers: bool,
    /// Grid cell size in canvas units, kept within [MIN_GRID_SIZE, MAX_GRID_SIZE].
    pub grid_size: f64,
    pub theme: Theme,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            snap_to_grid: false,
            show_guides: true,
            show_rulers: true,
            grid_size: 10.0,
            theme: Theme::default(),
        }
    }
}

/// Partial update over settings; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub snap_to_grid: Option<bool>,
    pub show_guides: Option<bool>,
    pub show_rulers: Option<bool>,
    pub grid_size: Option<f64>,
    pub theme: Option<Theme>,
}

/// Owns the per-session preference record.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    settings: EditorSettings,
}

impl SettingsStore {
    /// Create a store with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Merge the `Some` fields of the update; grid size is clamped.
    pub fn update(&mut self, update: SettingsUpdate) {
        if let Some(snap) = update.snap_to_grid {
            self.settings.snap_to_grid = snap;
        }
        if let Some(guides) = update.show_guides {
            self.settings.show_guides = guides;
        }
        if let Some(rulers) = update.show_rulers {
            self.settings.show_rulers = rulers;
        }
        if let Some(size) = update.grid_size {
            self.settings.grid_size = size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        }
        if let Some(theme) = update.theme {
            self.settings.theme = theme;
        }
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        self.settings = EditorSettings::default();
    }

    pub fn toggle_snap_to_grid(&mut self) {
        self.settings.snap_to_grid = !self.settings.snap_to_grid;
    }

    pub fn toggle_guides(&mut self) {
        self.settings.show_guides = !self.settings.show_guides;
    }

    pub fn toggle_rulers(&mut self) {
        self.settings.show_rulers = !self.settings.show_rulers;
    }

    /// Set the grid size, clamped to [MIN_GRID_SIZE, MAX_GRID_SIZE].
    pub fn set_grid_size(&mut self, size: f64) {
        self.settings.grid_size = size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let store = SettingsStore::new();
        let settings = store.settings();
        assert!(!settings.snap_to_grid);
        assert!(settings.show_guides);
        assert!((settings.grid_size - 10.0).abs() < f64::EPSILON);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_grid_size_clamped() {
        let mut store = SettingsStore::new();
        store.set_grid_size(2.0);
        assert!((store.settings().grid_size - MIN_GRID_SIZE).abs() < f64::EPSILON);
        store.set_grid_size(500.0);
        assert!((store.settings().grid_size - MAX_GRID_SIZE).abs() < f64::EPSILON);

        store.update(SettingsUpdate {
            grid_size: Some(1.0),
            ..Default::default()
        });
        assert!((store.settings().grid_size - MIN_GRID_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_toggles() {
        let mut store = SettingsStore::new();
        store.toggle_snap_to_grid();
        assert!(store.settings().snap_to_grid);
        store.toggle_guides();
        assert!(!store.settings().show_guides);
        store.toggle_rulers();
        assert!(!store.settings().show_rulers);
    }

    #[test]
    fn test_partial_update_and_reset() {
        let mut store = SettingsStore::new();
        store.update(SettingsUpdate {
            theme: Some(Theme::Dark),
            grid_size: Some(25.0),
            ..Default::default()
        });
        assert_eq!(store.settings().theme, Theme::Dark);
        assert!((store.settings().grid_size - 25.0).abs() < f64::EPSILON);
        // Untouched fields keep their values
        assert!(store.settings().show_guides);

        store.reset();
        assert_eq!(*store.settings(), EditorSettings::default());
    }
}
