// SPDX-License-Identifier: MIT
// Copyright 2026 Dignemi contributors

//! Panel locations, the dashboard guard, and the sidebar menu.

use std::sync::{PoisonError, RwLock};

use crate::auth::SessionStore;

pub const LOGIN_PATH: &str = "/login";
pub const VERIFY_PATH: &str = "/verify";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ROUTES_PATH: &str = "/dashboard/routes";
pub const ACTIVITIES_PATH: &str = "/dashboard/activities";

/// Header title when no menu entry matches.
pub const FALLBACK_TITLE: &str = "Panel";

/// Where the panel currently is, and how to move it.
pub trait Navigator: Send + Sync + std::fmt::Debug {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

/// In-process navigator that records every visited path.
#[derive(Debug)]
pub struct Location {
    history: RwLock<Vec<String>>,
}

impl Location {
    pub fn new(start: &str) -> Self {
        Self {
            history: RwLock::new(vec![start.to_string()]),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for Location {
    fn current_path(&self) -> String {
        self.history
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
            .unwrap_or_default()
    }

    fn navigate(&self, path: &str) {
        tracing::debug!(path, "Navigate");
        self.history
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}

/// Send the user to the login page unless they are already on it.
/// Returns whether a redirect happened.
pub fn redirect_to_login(nav: &dyn Navigator) -> bool {
    if nav.current_path().contains(LOGIN_PATH) {
        return false;
    }
    nav.navigate(LOGIN_PATH);
    true
}

/// Dashboard pages render only for an authenticated session; otherwise
/// the user is sent to login.
pub fn guard_dashboard(session: &SessionStore, nav: &dyn Navigator) -> bool {
    if session.is_authenticated() {
        return true;
    }
    redirect_to_login(nav);
    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    /// Whether the section has a working editor
    pub ready: bool,
}

pub const MENU: [MenuItem; 10] = [
    MenuItem { label: "Dashboard", path: DASHBOARD_PATH, ready: true },
    MenuItem { label: "Rutas", path: ROUTES_PATH, ready: true },
    MenuItem { label: "Actividades", path: ACTIVITIES_PATH, ready: true },
    MenuItem { label: "Biblioteca", path: "/dashboard/library", ready: false },
    MenuItem { label: "Disclaimers", path: "/dashboard/disclaimers", ready: false },
    MenuItem { label: "Ayuda Ahora", path: "/dashboard/help", ready: false },
    MenuItem { label: "Temas y Tags", path: "/dashboard/topics", ready: false },
    MenuItem { label: "Publicaciones", path: "/dashboard/releases", ready: false },
    MenuItem { label: "Auditoría", path: "/dashboard/audit", ready: false },
    MenuItem { label: "Configuración", path: "/dashboard/settings", ready: false },
];

/// Menu entry owning `path`: the longest matching prefix on a segment
/// boundary.
pub fn section_for(path: &str) -> Option<&'static MenuItem> {
    MENU.iter()
        .filter(|item| {
            path.strip_prefix(item.path)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
        .max_by_key(|item| item.path.len())
}

pub fn section_title(path: &str) -> &'static str {
    section_for(path).map_or(FALLBACK_TITLE, |item| item.label)
}

/// Text shown by sections whose editor does not exist yet.
pub fn under_construction(item: &MenuItem) -> Option<String> {
    (!item.ready).then(|| format!("{}: sección en construcción.", item.label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn redirect_skips_login_pages() {
        let nav = Location::new("/login?next=/dashboard");
        assert!(!redirect_to_login(&nav));
        assert_eq!(nav.history().len(), 1);

        let nav = Location::new("/dashboard/routes");
        assert!(redirect_to_login(&nav));
        assert_eq!(nav.current_path(), LOGIN_PATH);
    }

    #[test]
    fn guard_rejects_signed_out_session() {
        let session = SessionStore::hydrate(Arc::new(MemoryStore::new())).unwrap();
        let nav = Location::new(DASHBOARD_PATH);
        assert!(!guard_dashboard(&session, &nav));
        assert_eq!(nav.current_path(), LOGIN_PATH);
    }

    #[test]
    fn section_title_uses_longest_prefix() {
        assert_eq!(section_title("/dashboard"), "Dashboard");
        assert_eq!(section_title("/dashboard/routes/abc"), "Rutas");
        assert_eq!(section_title("/dashboard/routesx"), "Dashboard");
        assert_eq!(section_title("/settings"), FALLBACK_TITLE);
    }

    #[test]
    fn unfinished_sections_report_construction() {
        let audit = section_for("/dashboard/audit").unwrap();
        assert!(under_construction(audit).is_some());
        assert!(under_construction(&MENU[1]).is_none());
    }
}
