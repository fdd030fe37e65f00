//! Application state: single-owner, main-thread only.
//!
//! Comparison sliders are mounted while the Gallery section shows their page
//! and dropped as soon as it stops showing them. Dropping a slider mid-drag
//! also drops its global input subscription.

use std::cell::Cell;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use superdato_core::{
    Bounds, Carousel, ComparisonSlider, InputSurface, LiveBounds, SiteConfig,
};

use crate::contact_form::ContactForm;
use crate::pictures::Showcase;
use crate::theme::Theme;

/// Page sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Home,
    Services,
    Gallery,
    Reviews,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::Gallery,
        Section::Reviews,
        Section::Contact,
    ];

    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::Services => 1,
            Section::Gallery => 2,
            Section::Reviews => 3,
            Section::Contact => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::Gallery => "Gallery",
            Section::Reviews => "Reviews",
            Section::Contact => "Contact",
        }
    }

    pub fn next(self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// A slider on screen, with the bounds cell its renderer writes into.
pub struct MountedSlider {
    /// Index into [`App::showcases`].
    pub showcase: usize,
    pub slider: ComparisonSlider<LiveBounds>,
    pub bounds: LiveBounds,
}

impl MountedSlider {
    fn mount(showcase: usize, entry: &Showcase, surface: &InputSurface) -> Self {
        let bounds = LiveBounds::new();
        let slider = ComparisonSlider::mount(
            entry.restoration.slider_props(),
            bounds.clone(),
            surface,
        );
        Self {
            showcase,
            slider,
            bounds,
        }
    }

    /// Whether the last rendered image area contains the terminal cell.
    pub fn hit(&self, column: u16, row: u16) -> bool {
        self.bounds
            .get()
            .is_some_and(|b: Bounds| b.contains(f64::from(column), f64::from(row)))
    }
}

/// Gallery section state.
pub struct GalleryState {
    pub page: usize,
    pub per_page: usize,
    pub mounted: Vec<MountedSlider>,
}

impl GalleryState {
    fn new(per_page: usize) -> Self {
        Self {
            page: 0,
            per_page: per_page.max(1),
            mounted: Vec::new(),
        }
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.per_page).max(1)
    }
}

pub struct App {
    pub config: SiteConfig,
    pub theme: Theme,
    pub showcases: Vec<Showcase>,
    /// Index into `showcases` featured on the Home section.
    pub hero: Option<usize>,
    pub section: Section,
    pub gallery: GalleryState,
    pub reviews: Carousel,
    /// Review cards that fit on screen, written by the renderer.
    pub reviews_visible: Cell<usize>,
    pub contact: ContactForm,
    pub surface: InputSurface,
    pub status_message: Option<(String, StatusLevel, NaiveDateTime)>,
    pub running: bool,
}

impl App {
    pub fn new(config: SiteConfig, showcases: Vec<Showcase>, hero_id: Option<&str>) -> Self {
        let hero = hero_id.and_then(|id| showcases.iter().position(|s| s.restoration.id == id));
        let per_page = config.gallery.per_page;
        let reviews = Carousel::new(config.testimonials.len());
        Self {
            config,
            theme: Theme::default(),
            showcases,
            hero,
            section: Section::Home,
            gallery: GalleryState::new(per_page),
            reviews,
            reviews_visible: Cell::new(1),
            contact: ContactForm::default(),
            surface: InputSurface::new(),
            status_message: None,
            running: true,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info, Local::now().naive_local()));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning, Local::now().naive_local()));
    }

    pub fn hero_showcase(&self) -> Option<&Showcase> {
        self.hero.and_then(|i| self.showcases.get(i))
    }

    // ── Sections ─────────────────────────────────────────────────────

    pub fn set_section(&mut self, section: Section) {
        if section == self.section {
            return;
        }
        match self.section {
            Section::Gallery => self.unmount_gallery(),
            Section::Contact => self.contact.blur(),
            _ => {}
        }
        self.section = section;
        if section == Section::Gallery {
            self.mount_gallery_page();
        }
        tracing::info!(section = section.label(), "section changed");
    }

    pub fn next_section(&mut self) {
        self.set_section(self.section.next());
    }

    pub fn prev_section(&mut self) {
        self.set_section(self.section.prev());
    }

    // ── Gallery ──────────────────────────────────────────────────────

    pub fn page_count(&self) -> usize {
        self.gallery.page_count(self.showcases.len())
    }

    pub fn set_page(&mut self, page: usize) {
        let page = page.min(self.page_count() - 1);
        if page == self.gallery.page && !self.gallery.mounted.is_empty() {
            return;
        }
        self.gallery.page = page;
        if self.section == Section::Gallery {
            self.mount_gallery_page();
        }
    }

    pub fn next_page(&mut self) {
        if self.gallery.page + 1 < self.page_count() {
            self.set_page(self.gallery.page + 1);
        } else {
            self.set_status("Last page of the gallery");
        }
    }

    pub fn prev_page(&mut self) {
        if self.gallery.page > 0 {
            self.set_page(self.gallery.page - 1);
        } else {
            self.set_status("First page of the gallery");
        }
    }

    /// Replace the mounted sliders with the current page's, each at its
    /// midpoint.
    fn mount_gallery_page(&mut self) {
        self.unmount_gallery();
        let start = self.gallery.page * self.gallery.per_page;
        let end = (start + self.gallery.per_page).min(self.showcases.len());
        for index in start..end {
            let mounted = MountedSlider::mount(index, &self.showcases[index], &self.surface);
            self.gallery.mounted.push(mounted);
        }
        tracing::debug!(page = self.gallery.page, sliders = end - start, "gallery page mounted");
    }

    fn unmount_gallery(&mut self) {
        self.gallery.mounted.clear();
    }

    /// The mounted slider whose image area contains the cell, if any.
    pub fn slider_at(&mut self, column: u16, row: u16) -> Option<&mut MountedSlider> {
        let index = self.slider_index_at(column, row)?;
        self.gallery.mounted.get_mut(index)
    }

    pub fn slider_index_at(&self, column: u16, row: u16) -> Option<usize> {
        self.gallery.mounted.iter().position(|m| m.hit(column, row))
    }

    pub fn dragging_slider(&self) -> Option<&MountedSlider> {
        self.gallery.mounted.iter().find(|m| m.slider.is_dragging())
    }

    // ── Contact ──────────────────────────────────────────────────────

    /// Open the Contact section with the form focused.
    pub fn start_quote(&mut self) {
        self.set_section(Section::Contact);
        self.contact.focus();
    }

    pub fn submit_contact_form(&mut self) {
        match self.contact.submit() {
            Ok(request) => {
                tracing::info!(
                    email = %request.email,
                    photo = %request.photo.display(),
                    "quote request ready"
                );
                let studio = self.config.contact.email.clone();
                self.set_status(format!(
                    "Thanks {}! Send your story and {} to {studio}",
                    request.name,
                    request.photo.display()
                ));
            }
            Err(err) => {
                tracing::debug!(error = %err, "quote request rejected");
                self.set_warning(err.to_string());
            }
        }
    }

    // ── Reviews ──────────────────────────────────────────────────────

    pub fn scroll_reviews(&mut self, delta: isize) {
        let visible = self.reviews_visible.get();
        self.reviews.scroll_by(delta, visible);
    }
}
