//! App state persistence: JSON save/load across restarts.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use superdato_core::Carousel;

use crate::app::{App, Section};

/// Serializable subset of app state that persists across restarts.
///
/// Slider positions are not part of it: every slider mounts at the midpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub section: Section,
    pub gallery_page: usize,
    pub reviews_offset: usize,
    pub saved_at: Option<DateTime<Utc>>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            section: Section::Home,
            gallery_page: 0,
            reviews_offset: 0,
            saved_at: None,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "ignoring corrupt state file");
            PersistedState::default()
        }),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn extract(app: &App) -> PersistedState {
    PersistedState {
        section: app.section,
        gallery_page: app.gallery.page,
        reviews_offset: app.reviews.offset(),
        saved_at: Some(Utc::now()),
    }
}

/// Apply persisted state. Out-of-range pages and offsets are clamped to
/// the current catalog and testimonials.
pub fn apply(app: &mut App, state: PersistedState) {
    app.set_page(state.gallery_page);
    app.reviews = Carousel::new(app.config.testimonials.len()).with_offset(state.reviews_offset);
    app.set_section(state.section);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_app;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let state = load(&dir.path().join("nope.json"));
        assert_eq!(state, PersistedState::default());
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load(&path), PersistedState::default());
    }

    #[test]
    fn save_creates_parent_dirs_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("superdato").join("state.json");

        let mut app = test_app(5);
        app.set_section(Section::Gallery);
        app.next_page();
        let state = extract(&app);
        save(&path, &state).unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.section, Section::Gallery);
        assert_eq!(loaded.gallery_page, 1);
        assert!(loaded.saved_at.is_some());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{ "section": "Reviews" }"#).unwrap();
        let state = load(&path);
        assert_eq!(state.section, Section::Reviews);
        assert_eq!(state.gallery_page, 0);
    }

    #[test]
    fn apply_clamps_to_current_catalog() {
        let mut app = test_app(3);
        apply(
            &mut app,
            PersistedState {
                section: Section::Gallery,
                gallery_page: 9,
                reviews_offset: 99,
                saved_at: None,
            },
        );
        assert_eq!(app.section, Section::Gallery);
        assert_eq!(app.gallery.page, 1);
        let shown: Vec<usize> = app.gallery.mounted.iter().map(|m| m.showcase).collect();
        assert_eq!(shown, vec![2]);
        assert!(app.reviews.offset() < app.config.testimonials.len().max(1));
    }
}
