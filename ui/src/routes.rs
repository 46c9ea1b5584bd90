//! Static route table shared by every platform.
//!
//! Platforms mount a catch-all router route and hand the current path to
//! [`RouteOutlet`]; the table here decides what, if anything, renders.

use dioxus::prelude::*;

use crate::views::CategoriesView;

/// Every view that can be bound to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Categories,
}

impl View {
    pub fn render(self) -> Element {
        match self {
            View::Categories => rsx! { CategoriesView {} },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: View,
}

pub const ROUTES: &[RouteEntry] = &[RouteEntry {
    path: "/categories",
    view: View::Categories,
}];

/// Exact-match lookup; unregistered paths have no view.
pub fn resolve(path: &str) -> Option<View> {
    ROUTES
        .iter()
        .find(|entry| entry.path == path)
        .map(|entry| entry.view)
}

/// Build the path a catch-all route captured, e.g. `["categories"]` -> `/categories`.
pub fn path_from_segments(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

#[component]
pub fn RouteOutlet(path: String) -> Element {
    match resolve(&path) {
        Some(view) => view.render(),
        None => {
            tracing::debug!(%path, "no view registered for path");
            rsx! {}
        }
    }
}
