//! Storefront settings.
//!
//! Settings are read from a TOML file in the user's config directory. A
//! missing file means defaults; every section and field is optional.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::BusyPolicy;

/// Errors loading or saving settings.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write settings {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

// =============================================================================
// ROOT SETTINGS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Page transition timing and busy handling.
    pub navigation: NavigationSettings,

    /// Product detail rendering.
    pub detail: DetailSettings,

    /// Transient notices.
    pub notifications: NotificationSettings,
}

impl Settings {
    /// Load settings from the default path, falling back to defaults when
    /// the file does not exist.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_or_default(&Self::config_path())
    }

    /// Load settings from `path`; a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load and validate settings from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save settings to a specific path, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let write_err = |source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(write_err)
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "Matheory", "Storefront")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.navigation.validate()?;
        self.detail.validate()
    }
}

// =============================================================================
// NAVIGATION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Delay before the outgoing page loses its exiting marker.
    pub exit_ms: u64,

    /// Delay before the target page becomes active.
    pub entry_ms: u64,

    pub busy_policy: BusyPolicy,

    /// Overlay label for pages without a display name.
    pub home_label: String,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            exit_ms: 700,
            entry_ms: 600,
            busy_policy: BusyPolicy::Queue,
            home_label: "MATHEORY".to_string(),
        }
    }
}

impl NavigationSettings {
    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }

    pub fn entry_delay(&self) -> Duration {
        Duration::from_millis(self.entry_ms)
    }

    /// The target page becomes active before the outgoing page is released.
    fn validate(&self) -> Result<(), SettingsError> {
        if self.entry_ms >= self.exit_ms {
            return Err(SettingsError::Invalid {
                field: "navigation.entry_ms",
                reason: format!(
                    "{} ms must be shorter than exit_ms ({} ms)",
                    self.entry_ms, self.exit_ms
                ),
            });
        }
        Ok(())
    }
}

// =============================================================================
// DETAIL
// =============================================================================

/// Icon shown next to a detail feature line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureIcon {
    Check,
    Ruler,
    Palette,
    Shield,
    Truck,
}

/// Fixed feature line appended to every product detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingLine {
    pub icon: FeatureIcon,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailSettings {
    /// Seed offsets of the gallery thumbnails after the primary image.
    pub thumbnail_offsets: Vec<u32>,

    /// Number of interest-free installments quoted under the price.
    pub installments: u32,

    /// Maximum number of related products.
    pub related_limit: usize,

    pub marketing: Vec<MarketingLine>,
}

impl Default for DetailSettings {
    fn default() -> Self {
        Self {
            thumbnail_offsets: vec![100, 200, 300, 400],
            installments: 12,
            related_limit: 4,
            marketing: vec![
                MarketingLine {
                    icon: FeatureIcon::Shield,
                    text: "Garantia de qualidade MATHEORY".to_string(),
                },
                MarketingLine {
                    icon: FeatureIcon::Truck,
                    text: "Frete grátis acima de R$ 299".to_string(),
                },
            ],
        }
    }
}

impl DetailSettings {
    /// Images in the gallery: the primary image plus one per thumbnail offset.
    pub fn gallery_len(&self) -> usize {
        1 + self.thumbnail_offsets.len()
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.installments == 0 {
            return Err(SettingsError::Invalid {
                field: "detail.installments",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.thumbnail_offsets.contains(&0) {
            return Err(SettingsError::Invalid {
                field: "detail.thumbnail_offsets",
                reason: "offset 0 would repeat the primary image".to_string(),
            });
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.thumbnail_offsets.iter().find(|o| !seen.insert(**o)) {
            return Err(SettingsError::Invalid {
                field: "detail.thumbnail_offsets",
                reason: format!("offset {dup} is listed twice"),
            });
        }
        Ok(())
    }
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// How long a notice stays on screen.
    pub duration_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self { duration_ms: 2800 }
    }
}

impl NotificationSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
