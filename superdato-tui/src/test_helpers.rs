//! Test helpers for building apps without touching the filesystem

use std::path::PathBuf;

use image::{DynamicImage, Rgb, RgbImage};
use superdato_core::{Restoration, SiteConfig};

use crate::app::App;
use crate::pictures::{Picture, Showcase};

pub const BEFORE_RGB: [u8; 3] = [40, 40, 40];
pub const AFTER_RGB: [u8; 3] = [220, 180, 60];

pub fn solid_picture(path: &str, rgb: [u8; 3]) -> Picture {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb(rgb)));
    Picture::from_image(&PathBuf::from(path), image)
}

pub fn create_test_showcase(id: &str) -> Showcase {
    let before = format!("{id}/{id}_before.png");
    let after = format!("{id}/{id}_after.png");
    Showcase {
        restoration: Restoration::from_folder(id, PathBuf::from(&before), PathBuf::from(&after)),
        before: solid_picture(&before, BEFORE_RGB),
        after: solid_picture(&after, AFTER_RGB),
    }
}

/// App with `count` solid-colour showcases (`watch-0`, `watch-1`, ...),
/// two per gallery page, featuring `watch-1` on the home section.
pub fn test_app(count: usize) -> App {
    let showcases = (0..count)
        .map(|i| create_test_showcase(&format!("watch-{i}")))
        .collect();
    let mut config = SiteConfig::default();
    config.gallery.per_page = 2;
    App::new(config, showcases, Some("watch-1"))
}
