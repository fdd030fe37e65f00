//! Site configuration: studio copy, gallery location, services, reviews.
//!
//! Every section is optional in the TOML file; anything left out falls back
//! to the built-in studio content.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_PER_PAGE: usize = 4;
pub const MIN_TICK_MS: u64 = 10;
pub const MAX_STARS: u8 = 5;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SUPERDATO_CONFIG";
/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "superdato.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub studio: StudioConfig,
    pub gallery: GalleryConfig,
    pub services: Vec<Service>,
    pub stats: Vec<Stat>,
    pub testimonials: Vec<Testimonial>,
    pub contact: ContactConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub name: String,
    pub badge: String,
    pub tagline: String,
    pub pitch: String,
    pub instagram: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Folder scanned for `*_before.*` / `*_after.*` pairs.
    pub root: PathBuf,
    /// Sliders shown side by side per gallery page.
    pub per_page: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub handle: String,
    pub initials: String,
    pub text: String,
    #[serde(default = "default_stars")]
    pub stars: u8,
}

fn default_stars() -> u8 {
    MAX_STARS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub phone: String,
    pub email: String,
    pub location: String,
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll timeout per frame, in milliseconds.
    pub tick_ms: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            name: "SuperDato".into(),
            badge: "Premium vintage workshop".into(),
            tagline: "I bring old watches back to life.".into(),
            pitch: "Precision mechanical restoration and timeless finishing for forgotten timepieces."
                .into(),
            instagram: "https://instagram.com/superdatomatic".into(),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets/restorations"),
            per_page: 2,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: "+33 6 12 34 56 78".into(),
            email: "contact@superdato.com".into(),
            location: "France".into(),
            blurb: "Watch restoration workshop specialised in prestige vintage watches.".into(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_ms: 50 }
    }
}

fn service(title: &str, description: &str) -> Service {
    Service {
        title: title.into(),
        description: description.into(),
    }
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.into(),
        label: label.into(),
    }
}

fn testimonial(handle: &str, initials: &str, text: &str) -> Testimonial {
    Testimonial {
        handle: handle.into(),
        initials: initials.into(),
        text: text.into(),
        stars: MAX_STARS,
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            studio: StudioConfig::default(),
            gallery: GalleryConfig::default(),
            services: vec![
                service(
                    "Restoration",
                    "Full teardown, cleaning and regulation. Your movement starts a new life.",
                ),
                service(
                    "Finishing",
                    "Polishing that respects the original bevels. The shine comes back, the history stays.",
                ),
                service(
                    "Appraisal",
                    "Authentication and valuation. Avoid the traps and the 'frankenstein' watches.",
                ),
            ],
            stats: vec![
                stat("150+", "Restorations"),
                stat("12", "Years of experience"),
                stat("100%", "Satisfaction"),
                stat("48h", "Free quote"),
            ],
            testimonials: vec![
                testimonial(
                    "@vintage_bob",
                    "VB",
                    "Crazy work on my Longines! I barely recognise the dial.",
                ),
                testimonial(
                    "@marie_watches",
                    "MW",
                    "Great communication, fast and very professional. The YouTube video was great.",
                ),
                testimonial(
                    "@ticktock_fr",
                    "TT",
                    "I almost threw it away, you saved it. Eternal respect.",
                ),
                testimonial("@julien_b", "JB", "An artist. Full stop."),
            ],
            contact: ContactConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document. `origin` is only used in errors.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.per_page == 0 || self.gallery.per_page > MAX_PER_PAGE {
            return Err(ConfigError::Invalid(format!(
                "gallery.per_page must be between 1 and {MAX_PER_PAGE}, got {}",
                self.gallery.per_page
            )));
        }
        if self.ui.tick_ms < MIN_TICK_MS {
            return Err(ConfigError::Invalid(format!(
                "ui.tick_ms must be at least {MIN_TICK_MS}, got {}",
                self.ui.tick_ms
            )));
        }
        if let Some(t) = self.testimonials.iter().find(|t| t.stars > MAX_STARS) {
            return Err(ConfigError::Invalid(format!(
                "testimonial {} has {} stars, maximum is {MAX_STARS}",
                t.handle, t.stars
            )));
        }
        Ok(())
    }
}

/// Which config file to read: `$SUPERDATO_CONFIG` if set and non-empty,
/// otherwise `superdato.toml` in the working directory.
pub fn config_path(env_value: Option<&str>) -> PathBuf {
    match env_value {
        Some(v) if !v.trim().is_empty() => PathBuf::from(v),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}
