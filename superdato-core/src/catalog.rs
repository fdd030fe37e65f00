//! Restoration catalog: before/after image pairs discovered on disk.
//!
//! Layout under the gallery root:
//!
//! ```text
//! restorations/
//!   omega-seamaster/
//!     omega-seamaster_before.jpg
//!     omega-seamaster_after.jpg
//!   longines-conquest/
//!     ...
//! ```
//!
//! Each folder holding a `*_before.*` file and a `*_after.*` file becomes one
//! [`Restoration`]. Folders are found at any depth; the folder name is the id.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::slider::SliderProps;

const BEFORE_MARKER: &str = "_before.";
const AFTER_MARKER: &str = "_after.";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("gallery root {0} does not exist")]
    MissingRoot(PathBuf),

    #[error("gallery root {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One restoration entry, the shape the gallery consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Restoration {
    pub id: String,
    pub title: String,
    pub tag: String,
    pub before: PathBuf,
    pub after: PathBuf,
}

impl Restoration {
    pub fn from_folder(id: &str, before: PathBuf, after: PathBuf) -> Self {
        Self {
            id: id.to_string(),
            title: format_title(id),
            tag: generate_tag(id),
            before,
            after,
        }
    }

    pub fn slider_props(&self) -> SliderProps {
        SliderProps {
            before: self.before.clone(),
            after: self.after.clone(),
            title: self.title.clone(),
            tag: self.tag.clone(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"omega-seamaster"` → `"Omega Seamaster"`.
pub fn format_title(folder: &str) -> String {
    folder
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"omega-seamaster"` → `"#OmegaSeamaster"`.
pub fn generate_tag(folder: &str) -> String {
    let mut tag = String::from("#");
    for word in folder.split('-') {
        tag.push_str(&capitalize(word));
    }
    tag
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Before,
    After,
}

/// `omega_before.jpg` → Before. The file name must contain the marker
/// followed by something, so `omega_before.v2.jpg` counts too.
fn role_of(path: &Path) -> Option<Role> {
    let name = path.file_name()?.to_str()?;
    let marked = |marker: &str| {
        name.match_indices(marker)
            .any(|(at, _)| at + marker.len() < name.len())
    };
    if marked(BEFORE_MARKER) {
        Some(Role::Before)
    } else if marked(AFTER_MARKER) {
        Some(Role::After)
    } else {
        None
    }
}

#[derive(Default)]
struct Pair {
    before: Vec<PathBuf>,
    after: Vec<PathBuf>,
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let io_err = |source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        entries.push(entry.map_err(io_err)?.path());
    }
    entries.sort();
    Ok(entries)
}

fn collect(dir: &Path, pairs: &mut BTreeMap<PathBuf, Pair>) -> Result<(), CatalogError> {
    for path in read_dir_sorted(dir)? {
        if path.is_dir() {
            collect(&path, pairs)?;
            continue;
        }
        let Some(role) = role_of(&path) else {
            continue;
        };
        let pair = pairs.entry(dir.to_path_buf()).or_default();
        match role {
            Role::Before => pair.before.push(path),
            Role::After => pair.after.push(path),
        }
    }
    Ok(())
}

fn folder_id(dir: &Path) -> Option<String> {
    dir.file_name()?.to_str().map(str::to_string)
}

/// Scan `root` for before/after pairs, sorted by id.
///
/// Folders without an after image are left out of the catalog. When a folder
/// holds several candidates for one role, the first by file name is used.
pub fn scan(root: &Path) -> Result<Vec<Restoration>, CatalogError> {
    if !root.exists() {
        return Err(CatalogError::MissingRoot(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CatalogError::NotADirectory(root.to_path_buf()));
    }

    let mut pairs = BTreeMap::new();
    collect(root, &mut pairs)?;

    let mut restorations = Vec::new();
    for (dir, pair) in pairs {
        let Some(id) = folder_id(&dir) else {
            tracing::warn!(dir = %dir.display(), "skipping folder with non UTF-8 name");
            continue;
        };
        let mut before = pair.before.into_iter();
        let Some(first_before) = before.next() else {
            // Only after images: nothing to compare against.
            continue;
        };
        let mut after = pair.after.into_iter();
        let Some(first_after) = after.next() else {
            tracing::warn!(%id, "no *_after image, restoration omitted");
            continue;
        };
        for extra in before.chain(after) {
            tracing::warn!(%id, file = %extra.display(), "ignoring extra image");
        }
        restorations.push(Restoration::from_folder(&id, first_before, first_after));
    }

    restorations.sort_by(|a, b| a.id.cmp(&b.id));
    tracing::debug!(root = %root.display(), count = restorations.len(), "catalog scanned");
    Ok(restorations)
}

/// Uniform pick for the hero section.
pub fn pick_hero<'a, R: Rng + ?Sized>(
    restorations: &'a [Restoration],
    rng: &mut R,
) -> Option<&'a Restoration> {
    restorations.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_capitalizes_each_word() {
        assert_eq!(format_title("omega-seamaster"), "Omega Seamaster");
        assert_eq!(format_title("seiko"), "Seiko");
        assert_eq!(format_title("lip-t18"), "Lip T18");
        assert_eq!(format_title("zenith--el"), "Zenith  El");
    }

    #[test]
    fn tag_is_camel_case_with_hash() {
        assert_eq!(generate_tag("omega-seamaster"), "#OmegaSeamaster");
        assert_eq!(generate_tag("tissot-pr-516"), "#TissotPr516");
        assert_eq!(generate_tag("élysée"), "#Élysée");
    }

    #[test]
    fn role_requires_marker_followed_by_extension() {
        assert_eq!(role_of(Path::new("a/x_before.jpg")), Some(Role::Before));
        assert_eq!(role_of(Path::new("a/x_before.v2.jpg")), Some(Role::Before));
        assert_eq!(role_of(Path::new("a/x_after.tar.PNG")), Some(Role::After));
        assert_eq!(role_of(Path::new("a/x_before.")), None);
        assert_eq!(role_of(Path::new("a/x_after.PNG")), Some(Role::After));
        assert_eq!(role_of(Path::new("a/x_before")), None);
        assert_eq!(role_of(Path::new("a/x_before_2.jpg")), None);
        assert_eq!(role_of(Path::new("a/cover.jpg")), None);
    }
}
