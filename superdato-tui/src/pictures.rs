//! Decoded before/after images, sampled down to terminal resolution.
//!
//! Images are decoded once at startup (in parallel) and shrunk to a working
//! size. Each frame asks for a cover-fit sample at the size of the area being
//! drawn; the last sample is cached, so a steady layout costs one resize.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use rayon::prelude::*;
use thiserror::Error;

use superdato_core::Restoration;

/// Working size kept in memory after decode. Terminals never need more.
const MAX_DECODED_EDGE: u32 = 512;

#[derive(Debug, Error)]
pub enum PictureError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// One image reference plus its decoded pixels, if decoding worked.
pub struct Picture {
    source: PathBuf,
    image: Option<DynamicImage>,
    sample: RefCell<Option<RgbImage>>,
}

impl Picture {
    pub fn try_load(path: &Path) -> Result<Self, PictureError> {
        let image = image::open(path).map_err(|source| PictureError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_image(path, image))
    }

    /// Decode `path`, falling back to a placeholder when it cannot be read.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(picture) => picture,
            Err(err) => {
                tracing::warn!(error = %err, "rendering placeholder");
                Self::placeholder(path)
            }
        }
    }

    pub fn from_image(path: &Path, image: DynamicImage) -> Self {
        let image = if image.width() > MAX_DECODED_EDGE || image.height() > MAX_DECODED_EDGE {
            image.thumbnail(MAX_DECODED_EDGE, MAX_DECODED_EDGE)
        } else {
            image
        };
        Self {
            source: path.to_path_buf(),
            image: Some(image),
            sample: RefCell::new(None),
        }
    }

    pub fn placeholder(path: &Path) -> Self {
        Self {
            source: path.to_path_buf(),
            image: None,
            sample: RefCell::new(None),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn is_placeholder(&self) -> bool {
        self.image.is_none()
    }

    /// Run `f` on a `width`×`height` cover-fit sample of the image.
    ///
    /// Returns `None` for placeholders and empty sizes.
    pub fn with_sample<R>(
        &self,
        width: u32,
        height: u32,
        f: impl FnOnce(&RgbImage) -> R,
    ) -> Option<R> {
        let image = self.image.as_ref()?;
        if width == 0 || height == 0 {
            return None;
        }
        let mut cache = self.sample.borrow_mut();
        let stale = cache
            .as_ref()
            .map_or(true, |s| s.width() != width || s.height() != height);
        if stale {
            *cache = Some(image.resize_to_fill(width, height, FilterType::Triangle).to_rgb8());
        }
        cache.as_ref().map(f)
    }
}

impl std::fmt::Debug for Picture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Picture")
            .field("source", &self.source)
            .field("placeholder", &self.is_placeholder())
            .finish()
    }
}

/// A restoration with both of its images loaded.
#[derive(Debug)]
pub struct Showcase {
    pub restoration: Restoration,
    pub before: Picture,
    pub after: Picture,
}

impl Showcase {
    pub fn load(restoration: Restoration) -> Self {
        let before = Picture::load(&restoration.before);
        let after = Picture::load(&restoration.after);
        Self {
            restoration,
            before,
            after,
        }
    }
}

/// Decode every restoration's images in parallel, keeping catalog order.
pub fn load_showcases(restorations: Vec<Restoration>) -> Vec<Showcase> {
    restorations.into_par_iter().map(Showcase::load).collect()
}
