//! SuperDato Core: interaction core and content model for the showcase.
//!
//! - Before/after comparison slider with an explicit drag state machine
//! - Global input surface with RAII listener subscriptions
//! - Geometry capability injected by the renderer
//! - Restoration catalog scanned from a folder-per-restoration layout
//! - Site configuration (TOML) and the testimonial carousel

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod geometry;
pub mod input;
pub mod slider;

pub use carousel::Carousel;
pub use catalog::{format_title, generate_tag, pick_hero, scan, CatalogError, Restoration};
pub use config::{config_path, ConfigError, SiteConfig};
pub use geometry::{Bounds, BoundsSource, LiveBounds};
pub use input::{GlobalPointerEvent, InputSurface, PointerSource, Subscription};
pub use slider::{ComparisonSlider, DragPhase, SliderPosition, SliderProps};
