//! SuperDato TUI - terminal showcase for the restoration studio
//!
//! Five sections driven by keyboard and mouse:
//! - Home with a randomly featured restoration
//! - Services and studio stats
//! - Gallery of before/after comparison sliders (mouse drag or tap)
//! - Reviews carousel
//! - Contact details and a quote request form

pub mod app;
pub mod contact_form;
pub mod input;
pub mod persistence;
pub mod pictures;
pub mod theme;
pub mod ui;

pub use app::{App, Section};
pub use contact_form::{ContactForm, FormError, FormField, QuoteRequest};
pub use input::{handle_key, handle_mouse};
pub use pictures::{load_showcases, Picture, Showcase};
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
