// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Editor forms and their validation schemas.

pub mod activity;
pub mod login;
pub mod route;
pub mod validation;

pub use activity::ActivityForm;
pub use login::LoginForm;
pub use route::{RouteCreateForm, RouteDraft, RouteMetadataForm};
pub use validation::{check, FieldError, ValidationReport};

/// Header indicator shown while a form differs from its last save.
pub const UNSAVED_LABEL: &str = "● Cambios sin guardar";
/// Header indicator shown when the form matches its last save.
pub const SYNCED_LABEL: &str = "● Sincronizado";

/// A form value plus the snapshot it was last saved (or loaded) as.
#[derive(Debug, Clone)]
pub struct Tracked<T> {
    current: T,
    saved: T,
}

impl<T: Clone + PartialEq> Tracked<T> {
    pub fn new(value: T) -> Self {
        Self {
            saved: value.clone(),
            current: value,
        }
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.current
    }

    pub fn is_dirty(&self) -> bool {
        self.current != self.saved
    }

    /// Call after a successful save.
    pub fn mark_saved(&mut self) {
        self.saved = self.current.clone();
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_dirty() {
            UNSAVED_LABEL
        } else {
            SYNCED_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracked_reports_dirty_until_saved() {
        let mut form = Tracked::new(LoginForm {
            email: String::new(),
        });
        assert!(!form.is_dirty());
        assert_eq!(form.status_label(), SYNCED_LABEL);

        form.get_mut().email = "ana@dignemi.com".into();
        assert!(form.is_dirty());
        assert_eq!(form.status_label(), UNSAVED_LABEL);

        form.mark_saved();
        assert!(!form.is_dirty());
    }
}
