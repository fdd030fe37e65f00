//! Contact form: quote request fields, focus and validation.
//!
//! There is no backend. A valid form becomes a [`QuoteRequest`] the app
//! reports in the status bar; an invalid one names the first field to fix.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Extensions accepted for the watch photo.
pub const PHOTO_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "gif", "heic"];

/// Longest value any field accepts, in characters.
pub const MAX_FIELD_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Story,
    Photo,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Story,
        FormField::Photo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "First name",
            FormField::Email => "Email",
            FormField::Story => "Your watch's story",
            FormField::Photo => "Photo (path to an image)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Jean-Michel",
            FormField::Email => "jean@michel.com",
            FormField::Story => "The problem, the brand, the year...",
            FormField::Photo => "~/Pictures/my-watch.jpg",
        }
    }

    fn index(self) -> usize {
        match self {
            FormField::Name => 0,
            FormField::Email => 1,
            FormField::Story => 2,
            FormField::Photo => 3,
        }
    }

    pub fn next(self) -> FormField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> FormField {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(FormField),

    #[error("{0} is not a valid email address")]
    InvalidEmail(String),

    #[error("{} is not an image (expected one of: {})", .0.display(), PHOTO_EXTENSIONS.join(", "))]
    NotAnImage(PathBuf),

    #[error("photo {} not found", .0.display())]
    PhotoNotFound(PathBuf),
}

impl FormError {
    /// The field the user should go back to.
    pub fn field(&self) -> FormField {
        match self {
            FormError::Missing(field) => *field,
            FormError::InvalidEmail(_) => FormField::Email,
            FormError::NotAnImage(_) | FormError::PhotoNotFound(_) => FormField::Photo,
        }
    }
}

/// A validated quote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub story: String,
    pub photo: PathBuf,
}

/// Form state. `focused` is `Some` while the form captures the keyboard.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub story: String,
    pub photo: String,
    pub focused: Option<FormField>,
}

impl ContactForm {
    pub fn is_editing(&self) -> bool {
        self.focused.is_some()
    }

    /// Start editing at the first field, or keep the current focus.
    pub fn focus(&mut self) {
        if self.focused.is_none() {
            self.focused = Some(FormField::Name);
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focus_next(&mut self) {
        self.focused = Some(self.focused.map_or(FormField::Name, FormField::next));
    }

    pub fn focus_prev(&mut self) {
        self.focused = Some(self.focused.map_or(FormField::Photo, FormField::prev));
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Story => &self.story,
            FormField::Photo => &self.photo,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Story => &mut self.story,
            FormField::Photo => &mut self.photo,
        }
    }

    /// Append to the focused field. Control characters are dropped.
    pub fn insert(&mut self, c: char) {
        let Some(field) = self.focused else {
            return;
        };
        if c.is_control() {
            return;
        }
        let value = self.value_mut(field);
        if value.chars().count() < MAX_FIELD_LEN {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused {
            self.value_mut(field).pop();
        }
    }

    /// Check every field in order and build the request.
    pub fn validate(&self) -> Result<QuoteRequest, FormError> {
        for field in FormField::ALL {
            if self.value(field).trim().is_empty() {
                return Err(FormError::Missing(field));
            }
        }

        let email = self.email.trim();
        if !is_email(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }

        let photo = expand_home(self.photo.trim());
        if !is_image_path(&photo) {
            return Err(FormError::NotAnImage(photo));
        }
        if !photo.is_file() {
            return Err(FormError::PhotoNotFound(photo));
        }

        Ok(QuoteRequest {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            story: self.story.trim().to_string(),
            photo,
        })
    }

    /// Validate, and on success clear the form and stop editing.
    pub fn submit(&mut self) -> Result<QuoteRequest, FormError> {
        match self.validate() {
            Ok(request) => {
                *self = Self::default();
                Ok(request)
            }
            Err(err) => {
                self.focused = Some(err.field());
                Err(err)
            }
        }
    }
}

/// `local@domain.tld`: one `@`, no whitespace, a dot inside the domain.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            PHOTO_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// `~/x` → `$HOME/x`. Anything else is taken as-is.
fn expand_home(value: &str) -> PathBuf {
    match (value.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(value),
    }
}
