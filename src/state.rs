// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app_settings;
use crate::host::{PreferenceError, PreferenceStore};

/// Font used to draw keycaps and to measure the keyboard's minimum size.
///
/// Persisted between runs under the `font/name` and `font/size` preference keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderFont {
    /// Font family name.
    pub family: String,
    /// Size in points.
    pub point_size: i32,
}

impl RenderFont {
    /// Creates a font description.
    pub fn new(family: impl Into<String>, point_size: i32) -> Self {
        Self {
            family: family.into(),
            point_size,
        }
    }

    /// Loads the stored font, falling back to the defaults for missing or
    /// unusable values.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let family = store.get_or(app_settings::PREF_FONT_NAME, app_settings::DEFAULT_FONT_NAME);

        let point_size = match store.get(app_settings::PREF_FONT_SIZE) {
            None => app_settings::DEFAULT_FONT_SIZE,
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(size) if (app_settings::MIN_FONT_SIZE..=app_settings::MAX_FONT_SIZE).contains(&size) => {
                    size
                }
                _ => {
                    tracing::warn!(
                        "Ignoring stored font size {:?}, using {}",
                        raw,
                        app_settings::DEFAULT_FONT_SIZE
                    );
                    app_settings::DEFAULT_FONT_SIZE
                }
            },
        };

        let font = Self { family, point_size };
        tracing::info!("Loaded keyboard font: {}", font);
        font
    }

    /// Writes the font to the store as a single batch, so the stored family
    /// and size change together.
    pub fn save(&self, store: &mut dyn PreferenceStore) -> Result<(), PreferenceError> {
        store.set_many(vec![
            (app_settings::PREF_FONT_NAME, self.family.clone()),
            (app_settings::PREF_FONT_SIZE, self.point_size.to_string()),
        ])
    }
}

impl Default for RenderFont {
    fn default() -> Self {
        Self::new(app_settings::DEFAULT_FONT_NAME, app_settings::DEFAULT_FONT_SIZE)
    }
}

impl fmt::Display for RenderFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt", self.family, self.point_size)
    }
}
